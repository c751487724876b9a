// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! Reusable clause pieces. Statements own these as fields in grammatical
//! order; each one knows how to write itself and nothing about its siblings.

use squill_sql::{
    BuildQueryResult,
    ErrorKind,
    QueryFragment,
    SqlBuilder,
    StatementType,
};

use expression::{
    Expression,
    Projection,
};

#[derive(Clone, Copy, Debug)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn keyword(&self) -> &'static str {
        match *self {
            Direction::Ascending => "ASC",
            Direction::Descending => "DESC",
        }
    }
}

/// One ORDER BY term: an expression and an optional direction.
#[derive(Clone, Debug)]
pub struct OrderByClause {
    expression: Expression,
    direction: Option<Direction>,
}

impl OrderByClause {
    pub fn new(expression: Expression, direction: Option<Direction>) -> OrderByClause {
        OrderByClause {
            expression: expression,
            direction: direction,
        }
    }

    fn push_sql(&self, out: &mut SqlBuilder, statement: StatementType) -> BuildQueryResult {
        self.expression.push_sql_for_order_by(out, statement)?;
        if let Some(direction) = self.direction {
            out.push_sql(direction.keyword());
        }
        Ok(())
    }
}

/// `FOR UPDATE` / `FOR SHARE` with the optional waiting policy. The `FOR`
/// keyword itself is written by the statement.
#[derive(Clone, Debug)]
pub struct SelectLock {
    strength: &'static str,
    no_wait: bool,
    skip_locked: bool,
}

impl SelectLock {
    pub fn update() -> SelectLock {
        SelectLock {
            strength: "UPDATE",
            no_wait: false,
            skip_locked: false,
        }
    }

    pub fn share() -> SelectLock {
        SelectLock {
            strength: "SHARE",
            no_wait: false,
            skip_locked: false,
        }
    }

    pub fn nowait(mut self) -> SelectLock {
        self.no_wait = true;
        self
    }

    pub fn skip_locked(mut self) -> SelectLock {
        self.skip_locked = true;
        self
    }

    pub fn push_sql(&self, out: &mut SqlBuilder) -> BuildQueryResult {
        out.push_sql(self.strength);
        if self.no_wait {
            out.push_sql("NOWAIT");
        }
        if self.skip_locked {
            out.push_sql("SKIP LOCKED");
        }
        Ok(())
    }
}

/// WHERE. When `mandatory` (UPDATE and DELETE), an absent condition is a
/// serialization error rather than an unbounded statement.
#[derive(Clone, Debug)]
pub struct WhereClause {
    pub condition: Option<Expression>,
    pub mandatory: bool,
}

impl WhereClause {
    pub fn optional() -> WhereClause {
        WhereClause {
            condition: None,
            mandatory: false,
        }
    }

    pub fn mandatory() -> WhereClause {
        WhereClause {
            condition: None,
            mandatory: true,
        }
    }

    pub fn push_sql(&self, out: &mut SqlBuilder, statement: StatementType) -> BuildQueryResult {
        match self.condition {
            Some(ref condition) => {
                out.new_line();
                out.push_sql("WHERE");
                condition.push_sql(out, statement)
            },
            None if self.mandatory => bail!(ErrorKind::MissingWhereClause),
            None => Ok(()),
        }
    }
}

/// `SET` for UPDATE. With more than one column both sides are parenthesized
/// tuples. Column/value arity is the row unwinding helpers' business, not
/// enforced here.
#[derive(Clone, Debug)]
pub struct SetClause {
    pub columns: Vec<Expression>,
    pub values: Vec<Expression>,
}

impl SetClause {
    pub fn push_sql(&self, out: &mut SqlBuilder, statement: StatementType) -> BuildQueryResult {
        out.new_line();
        out.push_sql("SET");

        if self.columns.is_empty() {
            bail!(ErrorKind::EmptySetColumnList);
        }

        let parenthesize = self.columns.len() > 1;
        if parenthesize {
            out.push_sql("(");
        }
        push_column_names(out, &self.columns)?;
        if parenthesize {
            out.push_char(')');
        }

        out.push_sql("=");

        if self.values.len() > 1 {
            out.push_sql("(");
        }
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                out.push_char(',');
            }
            value.push_sql(out, statement)?;
        }
        if self.values.len() > 1 {
            out.push_char(')');
        }
        Ok(())
    }
}

/// `RETURNING`, PostgreSQL only. Empty means absent.
#[derive(Debug)]
pub struct ReturningClause {
    pub projections: Vec<Projection>,
}

impl ReturningClause {
    pub fn empty() -> ReturningClause {
        ReturningClause { projections: vec![] }
    }

    pub fn push_sql(&self, out: &mut SqlBuilder, statement: StatementType) -> BuildQueryResult {
        if self.projections.is_empty() {
            return Ok(());
        }
        if !out.dialect().supports_returning() {
            bail!(ErrorKind::UnsupportedClause("RETURNING", out.dialect().name()));
        }
        out.new_line();
        out.push_sql("RETURNING");
        push_projections(out, statement, &self.projections)
    }
}

/// The projection list: one projection per line, continuation lines at one
/// indent level.
pub fn push_projections(out: &mut SqlBuilder,
                        statement: StatementType,
                        projections: &[Projection])
                        -> BuildQueryResult {
    out.increase_indent();
    let mut first = true;
    for projection in projections {
        for expression in projection.expressions() {
            if !first {
                out.push_char(',');
                out.new_line();
            }
            first = false;
            expression.push_sql_for_projection(out, statement)?;
        }
    }
    out.decrease_indent();
    Ok(())
}

pub fn push_order_by(out: &mut SqlBuilder,
                     statement: StatementType,
                     clauses: &[OrderByClause])
                     -> BuildQueryResult {
    out.new_line();
    out.push_sql("ORDER BY");
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            out.push_char(',');
        }
        clause.push_sql(out, statement)?;
    }
    Ok(())
}

/// Unqualified column names, comma-separated: INSERT column lists and SET
/// targets. Anything that is not a column is a serialization error.
pub fn push_column_names(out: &mut SqlBuilder, columns: &[Expression]) -> BuildQueryResult {
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push_char(',');
        }
        match column {
            &Expression::Column(ref c) => out.push_identifier(c.name()),
            _ => bail!(ErrorKind::InvalidColumnList),
        }
    }
    Ok(())
}

/// Comma-separated expressions on the current line: GROUP BY, VALUES rows.
pub fn push_expression_list(out: &mut SqlBuilder,
                            statement: StatementType,
                            expressions: &[Expression])
                            -> BuildQueryResult {
    for (i, expression) in expressions.iter().enumerate() {
        if i > 0 {
            out.push_char(',');
        }
        expression.push_sql(out, statement)?;
    }
    Ok(())
}
