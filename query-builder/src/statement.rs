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
    Error,
    ErrorKind,
    Result,
    SqlBuilder,
    SqlQuery,
    StatementType,
};

use expression::Expression;

/// A complete, serializable statement. The fluent builders are total; every
/// structural problem surfaces here, when SQL is requested.
pub trait Statement {
    fn statement_type(&self) -> StatementType;

    /// The dialect implied by the tables this statement references, or `None`
    /// when it references none. Referencing tables from two dialects is an
    /// error.
    fn detected_dialect(&self) -> Result<Option<Dialect>>;

    /// Serialize the statement body, without the trailing semicolon.
    fn push_statement_sql(&self, out: &mut SqlBuilder) -> BuildQueryResult;

    fn to_sql_query(&self) -> Result<SqlQuery> {
        let dialect = self.detected_dialect()?.unwrap_or(Dialect::Postgres);
        build_statement(self, SqlBuilder::new(dialect))
    }

    fn to_sql_query_with(&self, dialect: Dialect) -> Result<SqlQuery> {
        build_statement(self, SqlBuilder::new(dialect))
    }

    /// The statement with every argument inlined as a SQL literal: one
    /// inspectable string, never meant for execution.
    fn to_debug_sql(&self) -> Result<String> {
        let dialect = self.detected_dialect()?.unwrap_or(Dialect::Postgres);
        build_statement(self, SqlBuilder::with_inlined_arguments(dialect)).map(|query| query.sql)
    }

    fn to_debug_sql_with(&self, dialect: Dialect) -> Result<String> {
        build_statement(self, SqlBuilder::with_inlined_arguments(dialect)).map(|query| query.sql)
    }
}

fn build_statement<S: Statement + ?Sized>(statement: &S, mut out: SqlBuilder) -> Result<SqlQuery> {
    statement.push_statement_sql(&mut out)?;
    out.push_char(';');
    Ok(out.finish())
}

pub fn merge_dialects(left: Option<Dialect>, right: Option<Dialect>) -> Result<Option<Dialect>> {
    match (left, right) {
        (Some(l), Some(r)) if l != r => bail!(ErrorKind::DialectMismatch(l.name(), r.name())),
        (Some(l), _) => Ok(Some(l)),
        (None, r) => Ok(r),
    }
}

/// The dialect referenced by subqueries inside an expression tree, if any.
pub fn expression_dialect(expression: &Expression) -> Result<Option<Dialect>> {
    let mut merged: Option<Dialect> = None;
    let mut failure: Option<Error> = None;
    expression.visit(&mut |e| {
        if failure.is_some() {
            return;
        }
        if let &Expression::Subquery(ref select) = e {
            match select.detected_dialect().and_then(|d| merge_dialects(merged, d)) {
                Ok(d) => merged = d,
                Err(e) => failure = Some(e),
            }
        }
    });
    match failure {
        Some(e) => Err(e),
        None => Ok(merged),
    }
}
