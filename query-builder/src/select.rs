// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

use squill_sql::{
    BuildQueryResult,
    Dialect,
    ErrorKind,
    QueryFragment,
    Result,
    SqlBuilder,
    StatementType,
    Value,
};

use clause::{
    OrderByClause,
    SelectLock,
    WhereClause,
    push_expression_list,
    push_order_by,
    push_projections,
};
use expression::{
    BoolExpression,
    Expression,
    Projection,
    TypedExpr,
};
use set_operation::{
    SetStatement,
    except,
    except_all,
    intersect,
    intersect_all,
    union,
    union_all,
};
use statement::{
    Statement,
    expression_dialect,
    merge_dialects,
};
use table::{
    SubQueryTable,
    TableOrSubquery,
};

/// Start a SELECT from its projection list. Adding clauses never fails; an
/// empty projection list is reported when SQL is requested.
pub fn select(projections: Vec<Projection>) -> SelectStatement {
    SelectStatement {
        distinct: false,
        projections: projections,
        from: None,
        where_clause: WhereClause::optional(),
        group_by: vec![],
        having: None,
        order_by: vec![],
        limit: -1,
        offset: -1,
        lock: None,
    }
}

/// `SELECT [DISTINCT] … FROM … WHERE … GROUP BY … HAVING … ORDER BY …
/// LIMIT … OFFSET … FOR …`, clauses serialized in exactly that order.
///
/// The fluent methods take the statement by value and hand it back; clone
/// first to branch a statement in two directions.
#[derive(Clone, Debug)]
pub struct SelectStatement {
    distinct: bool,
    projections: Vec<Projection>,
    from: Option<TableOrSubquery>,
    where_clause: WhereClause,
    group_by: Vec<Expression>,
    having: Option<Expression>,
    order_by: Vec<OrderByClause>,
    limit: i64,
    offset: i64,
    lock: Option<SelectLock>,
}

impl SelectStatement {
    pub fn distinct(mut self) -> SelectStatement {
        self.distinct = true;
        self
    }

    pub fn from<R: Into<TableOrSubquery>>(mut self, table: R) -> SelectStatement {
        self.from = Some(table.into());
        self
    }

    /// Set the WHERE condition, replacing any previous one.
    pub fn filter(mut self, condition: BoolExpression) -> SelectStatement {
        self.where_clause.condition = Some(condition.into_expression());
        self
    }

    pub fn group_by(mut self, expressions: Vec<Expression>) -> SelectStatement {
        self.group_by = expressions;
        self
    }

    pub fn having(mut self, condition: BoolExpression) -> SelectStatement {
        self.having = Some(condition.into_expression());
        self
    }

    pub fn order_by(mut self, clauses: Vec<OrderByClause>) -> SelectStatement {
        self.order_by = clauses;
        self
    }

    pub fn limit(mut self, limit: i64) -> SelectStatement {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: i64) -> SelectStatement {
        self.offset = offset;
        self
    }

    pub fn lock(mut self, lock: SelectLock) -> SelectStatement {
        self.lock = Some(lock);
        self
    }

    pub fn union(self, rhs: SelectStatement) -> SetStatement {
        union(vec![self, rhs])
    }

    pub fn union_all(self, rhs: SelectStatement) -> SetStatement {
        union_all(vec![self, rhs])
    }

    pub fn intersect(self, rhs: SelectStatement) -> SetStatement {
        intersect(vec![self, rhs])
    }

    pub fn intersect_all(self, rhs: SelectStatement) -> SetStatement {
        intersect_all(vec![self, rhs])
    }

    pub fn except(self, rhs: SelectStatement) -> SetStatement {
        except(vec![self, rhs])
    }

    pub fn except_all(self, rhs: SelectStatement) -> SetStatement {
        except_all(vec![self, rhs])
    }

    /// Use this SELECT as a table: the result exposes the projected columns
    /// under `alias`.
    pub fn as_table(self, alias: &str) -> SubQueryTable {
        SubQueryTable::new(self, alias)
    }

    /// Use this SELECT as a scalar expression. The caller picks the SQL type
    /// the single projected column carries.
    pub fn as_expression<T>(self) -> TypedExpr<T> {
        TypedExpr::wrap(Expression::Subquery(Box::new(self)))
    }

    pub fn exists(self) -> BoolExpression {
        TypedExpr::wrap(Expression::Prefix {
            op: "EXISTS",
            expr: Box::new(Expression::Subquery(Box::new(self))),
        })
    }

    pub fn projections(&self) -> &[Projection] {
        &self.projections
    }

    /// The number of columns this statement projects; column lists count
    /// each member.
    pub fn projection_count(&self) -> usize {
        self.projections.iter().map(|p| p.count()).sum()
    }

    pub fn has_order_by(&self) -> bool {
        !self.order_by.is_empty()
    }

    pub fn has_limit(&self) -> bool {
        self.limit >= 0
    }

    fn push_sql_impl(&self, out: &mut SqlBuilder) -> BuildQueryResult {
        out.push_sql("SELECT");

        if self.distinct {
            out.push_sql("DISTINCT");
        }

        if self.projections.is_empty() {
            bail!(ErrorKind::NoProjection);
        }
        push_projections(out, StatementType::Select, &self.projections)?;

        if let Some(ref from) = self.from {
            out.new_line();
            out.push_sql("FROM");
            out.increase_indent();
            from.push_sql(out, StatementType::Select)?;
            out.decrease_indent();
        }

        self.where_clause.push_sql(out, StatementType::Select)?;

        if !self.group_by.is_empty() {
            out.new_line();
            out.push_sql("GROUP BY");
            push_expression_list(out, StatementType::Select, &self.group_by)?;
        }

        if let Some(ref having) = self.having {
            out.new_line();
            out.push_sql("HAVING");
            having.push_sql(out, StatementType::Select)?;
        }

        if !self.order_by.is_empty() {
            push_order_by(out, StatementType::Select, &self.order_by)?;
        }

        if self.limit >= 0 {
            out.new_line();
            out.push_sql("LIMIT");
            out.push_parameterized(Value::Integer(self.limit));
        }

        if self.offset >= 0 {
            out.new_line();
            out.push_sql("OFFSET");
            out.push_parameterized(Value::Integer(self.offset));
        }

        if let Some(ref lock) = self.lock {
            out.new_line();
            out.push_sql("FOR");
            lock.push_sql(out)?;
        }

        Ok(())
    }

    /// The subquery form: parenthesized, with the body indented one level.
    pub fn push_sql_parenthesized(&self, out: &mut SqlBuilder) -> BuildQueryResult {
        out.push_sql("(");
        out.increase_indent();
        out.new_line();
        self.push_sql_impl(out)?;
        out.decrease_indent();
        out.new_line();
        out.push_char(')');
        Ok(())
    }
}

// A SELECT in expression position is always the parenthesized form.
impl QueryFragment for SelectStatement {
    fn push_sql(&self, out: &mut SqlBuilder, _statement: StatementType) -> BuildQueryResult {
        self.push_sql_parenthesized(out)
    }
}

impl Statement for SelectStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Select
    }

    fn detected_dialect(&self) -> Result<Option<Dialect>> {
        let mut dialect = match self.from {
            Some(ref from) => from.dialect()?,
            None => None,
        };
        if let Some(ref condition) = self.where_clause.condition {
            dialect = merge_dialects(dialect, expression_dialect(condition)?)?;
        }
        if let Some(ref having) = self.having {
            dialect = merge_dialects(dialect, expression_dialect(having)?)?;
        }
        Ok(dialect)
    }

    fn push_statement_sql(&self, out: &mut SqlBuilder) -> BuildQueryResult {
        self.push_sql_impl(out)
    }
}
