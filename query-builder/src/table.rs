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
    QueryFragment,
    Result,
    SqlBuilder,
    StatementType,
};

use column::Column;
use delete::DeleteStatement;
use expression::{
    Blob,
    Bool,
    BoolExpression,
    Date,
    Expression,
    Float,
    Integer,
    Projection,
    Text,
    Time,
    Timestamp,
    Timestampz,
    Timez,
    TypedExpr,
};
use insert::InsertStatement;
use select::{
    SelectStatement,
    select,
};
use statement::{
    Statement,
    merge_dialects,
};
use update::UpdateStatement;

/// A named database table. The dialect travels with the table so that a
/// statement can work out how to serialize itself from the tables it
/// references; generated table bindings construct one of these per table.
#[derive(Clone, Debug)]
pub struct Table {
    schema: String,
    name: String,
    dialect: Dialect,
}

impl Table {
    pub fn new(schema: &str, name: &str, dialect: Dialect) -> Table {
        Table {
            schema: schema.to_string(),
            name: name.to_string(),
            dialect: dialect,
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn column<T>(&self, name: &str) -> TypedExpr<T> {
        TypedExpr::wrap(Expression::Column(Column::new(name, &self.name)))
    }

    pub fn bool_column(&self, name: &str) -> TypedExpr<Bool> {
        self.column(name)
    }

    pub fn integer_column(&self, name: &str) -> TypedExpr<Integer> {
        self.column(name)
    }

    pub fn float_column(&self, name: &str) -> TypedExpr<Float> {
        self.column(name)
    }

    pub fn text_column(&self, name: &str) -> TypedExpr<Text> {
        self.column(name)
    }

    pub fn date_column(&self, name: &str) -> TypedExpr<Date> {
        self.column(name)
    }

    pub fn time_column(&self, name: &str) -> TypedExpr<Time> {
        self.column(name)
    }

    pub fn timez_column(&self, name: &str) -> TypedExpr<Timez> {
        self.column(name)
    }

    pub fn timestamp_column(&self, name: &str) -> TypedExpr<Timestamp> {
        self.column(name)
    }

    pub fn timestampz_column(&self, name: &str) -> TypedExpr<Timestampz> {
        self.column(name)
    }

    pub fn blob_column(&self, name: &str) -> TypedExpr<Blob> {
        self.column(name)
    }

    pub fn select(&self, projections: Vec<Projection>) -> SelectStatement {
        select(projections).from(self.clone())
    }

    pub fn inner_join<R: Into<TableOrSubquery>>(&self,
                                                right: R,
                                                on: BoolExpression)
                                                -> TableOrSubquery {
        TableOrSubquery::from(self.clone()).inner_join(right, on)
    }

    pub fn left_join<R: Into<TableOrSubquery>>(&self,
                                               right: R,
                                               on: BoolExpression)
                                               -> TableOrSubquery {
        TableOrSubquery::from(self.clone()).left_join(right, on)
    }

    pub fn right_join<R: Into<TableOrSubquery>>(&self,
                                                right: R,
                                                on: BoolExpression)
                                                -> TableOrSubquery {
        TableOrSubquery::from(self.clone()).right_join(right, on)
    }

    pub fn full_join<R: Into<TableOrSubquery>>(&self,
                                               right: R,
                                               on: BoolExpression)
                                               -> TableOrSubquery {
        TableOrSubquery::from(self.clone()).full_join(right, on)
    }

    pub fn cross_join<R: Into<TableOrSubquery>>(&self, right: R) -> TableOrSubquery {
        TableOrSubquery::from(self.clone()).cross_join(right)
    }

    pub fn insert(&self, columns: Vec<Projection>) -> InsertStatement {
        InsertStatement::new(self.clone(), flatten(columns))
    }

    pub fn update(&self, columns: Vec<Projection>) -> UpdateStatement {
        UpdateStatement::new(self.clone(), flatten(columns))
    }

    pub fn delete(&self) -> DeleteStatement {
        DeleteStatement::new(self.clone())
    }
}

fn flatten(projections: Vec<Projection>) -> Vec<Expression> {
    let mut expressions = vec![];
    for projection in projections {
        match projection {
            Projection::Single(e) => expressions.push(e),
            Projection::List(es) => expressions.extend(es),
        }
    }
    expressions
}

impl QueryFragment for Table {
    fn push_sql(&self, out: &mut SqlBuilder, _statement: StatementType) -> BuildQueryResult {
        if !self.schema.is_empty() {
            out.push_identifier(&self.schema);
            out.push_char('.');
        }
        out.push_identifier(&self.name);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    fn keyword(&self) -> &'static str {
        match *self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Join {
    left: TableOrSubquery,
    kind: JoinKind,
    right: TableOrSubquery,
    on: Option<Expression>,
}

/// A SELECT given an alias so it can stand where a table does. Its exported
/// columns are the select's projections rewritten to refer to the alias.
#[derive(Clone, Debug)]
pub struct SubQueryTable {
    select: Box<SelectStatement>,
    alias: String,
}

impl SubQueryTable {
    pub fn new(select: SelectStatement, alias: &str) -> SubQueryTable {
        SubQueryTable {
            select: Box::new(select),
            alias: alias.to_string(),
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The columns this subquery exports, in projection order, each bound to
    /// the subquery alias.
    pub fn columns(&self) -> Vec<Expression> {
        let mut columns = vec![];
        for projection in self.select.projections() {
            for expression in projection.expressions() {
                match expression {
                    &Expression::Column(ref c) =>
                        columns.push(Expression::Column(c.for_subquery(&self.alias))),
                    &Expression::Aliased { ref alias, .. } =>
                        columns.push(Expression::Column(
                            Column::new(alias, "").for_subquery(&self.alias))),
                    other =>
                        columns.push(other.clone()),
                }
            }
        }
        columns
    }

    pub fn projections(&self) -> Vec<Projection> {
        self.columns().into_iter().map(Projection::Single).collect()
    }

    pub fn select(&self, projections: Vec<Projection>) -> SelectStatement {
        select(projections).from(self.clone())
    }
}

/// The readable side of the model: whatever can follow FROM. Joins nest, so
/// this is where the recursion lives.
#[derive(Clone, Debug)]
pub enum TableOrSubquery {
    Table(Table),
    Join(Box<Join>),
    Subquery(SubQueryTable),
}

impl TableOrSubquery {
    pub fn select(&self, projections: Vec<Projection>) -> SelectStatement {
        select(projections).from(self.clone())
    }

    fn join<R: Into<TableOrSubquery>>(self,
                                      kind: JoinKind,
                                      right: R,
                                      on: Option<Expression>)
                                      -> TableOrSubquery {
        TableOrSubquery::Join(Box::new(Join {
            left: self,
            kind: kind,
            right: right.into(),
            on: on,
        }))
    }

    pub fn inner_join<R: Into<TableOrSubquery>>(self,
                                                right: R,
                                                on: BoolExpression)
                                                -> TableOrSubquery {
        self.join(JoinKind::Inner, right, Some(on.into_expression()))
    }

    pub fn left_join<R: Into<TableOrSubquery>>(self,
                                               right: R,
                                               on: BoolExpression)
                                               -> TableOrSubquery {
        self.join(JoinKind::Left, right, Some(on.into_expression()))
    }

    pub fn right_join<R: Into<TableOrSubquery>>(self,
                                                right: R,
                                                on: BoolExpression)
                                                -> TableOrSubquery {
        self.join(JoinKind::Right, right, Some(on.into_expression()))
    }

    pub fn full_join<R: Into<TableOrSubquery>>(self,
                                               right: R,
                                               on: BoolExpression)
                                               -> TableOrSubquery {
        self.join(JoinKind::Full, right, Some(on.into_expression()))
    }

    pub fn cross_join<R: Into<TableOrSubquery>>(self, right: R) -> TableOrSubquery {
        self.join(JoinKind::Cross, right, None)
    }

    /// The dialect this relation implies. A join of tables from two dialects
    /// is a malformed statement.
    pub fn dialect(&self) -> Result<Option<Dialect>> {
        match self {
            &TableOrSubquery::Table(ref table) => Ok(Some(table.dialect())),
            &TableOrSubquery::Join(ref join) => {
                let left = join.left.dialect()?;
                let right = join.right.dialect()?;
                merge_dialects(left, right)
            },
            &TableOrSubquery::Subquery(ref subquery) => subquery.select.detected_dialect(),
        }
    }
}

impl QueryFragment for TableOrSubquery {
    fn push_sql(&self, out: &mut SqlBuilder, statement: StatementType) -> BuildQueryResult {
        match self {
            &TableOrSubquery::Table(ref table) => table.push_sql(out, statement),
            &TableOrSubquery::Join(ref join) => {
                join.left.push_sql(out, statement)?;
                out.new_line();
                out.push_sql(join.kind.keyword());
                join.right.push_sql(out, statement)?;
                if let Some(ref on) = join.on {
                    out.push_sql("ON");
                    out.push_sql("(");
                    on.push_sql(out, statement)?;
                    out.push_char(')');
                }
                Ok(())
            },
            &TableOrSubquery::Subquery(ref subquery) => {
                subquery.select.push_sql_parenthesized(out)?;
                out.push_sql("AS");
                out.push_identifier(&subquery.alias);
                Ok(())
            },
        }
    }
}

impl From<Table> for TableOrSubquery {
    fn from(table: Table) -> TableOrSubquery {
        TableOrSubquery::Table(table)
    }
}

impl<'a> From<&'a Table> for TableOrSubquery {
    fn from(table: &'a Table) -> TableOrSubquery {
        TableOrSubquery::Table(table.clone())
    }
}

impl From<SubQueryTable> for TableOrSubquery {
    fn from(subquery: SubQueryTable) -> TableOrSubquery {
        TableOrSubquery::Subquery(subquery)
    }
}

impl<'a> From<&'a SubQueryTable> for TableOrSubquery {
    fn from(subquery: &'a SubQueryTable) -> TableOrSubquery {
        TableOrSubquery::Subquery(subquery.clone())
    }
}
