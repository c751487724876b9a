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
    QueryFragment,
    Result,
    SqlBuilder,
    StatementType,
};

use clause::{
    ReturningClause,
    push_column_names,
    push_expression_list,
};
use expression::{
    Expression,
    Projection,
};
use row::{
    Record,
    unwind_row_from_model,
};
use select::SelectStatement;
use statement::{
    Statement,
    merge_dialects,
};
use table::Table;

/// `INSERT INTO table (columns) VALUES rows…`, or `INSERT INTO table
/// (columns) (SELECT …)` when a query is attached instead of rows.
#[derive(Debug)]
pub struct InsertStatement {
    table: Table,
    columns: Vec<Expression>,
    rows: Vec<Vec<Expression>>,
    query: Option<SelectStatement>,
    returning: ReturningClause,

    // Unwinding a record can fail, but builder methods must not; the failure
    // parks here until SQL is requested.
    model_error: Option<Error>,
}

impl InsertStatement {
    pub fn new(table: Table, columns: Vec<Expression>) -> InsertStatement {
        InsertStatement {
            table: table,
            columns: columns,
            rows: vec![],
            query: None,
            returning: ReturningClause::empty(),
            model_error: None,
        }
    }

    /// Append one VALUES row. Its width must match the column list; checked
    /// at serialization.
    pub fn values(mut self, row: Vec<Expression>) -> InsertStatement {
        self.rows.push(row);
        self
    }

    /// Append one VALUES row read from a record, aligned to the declared
    /// column list by name.
    pub fn model<R: Record + ?Sized>(mut self, record: &R) -> InsertStatement {
        match unwind_row_from_model(&self.columns, record) {
            Ok(row) => self.rows.push(row),
            Err(e) => {
                if self.model_error.is_none() {
                    self.model_error = Some(e);
                }
            },
        }
        self
    }

    /// INSERT FROM SELECT: the nested query takes the place of VALUES.
    pub fn query(mut self, query: SelectStatement) -> InsertStatement {
        self.query = Some(query);
        self
    }

    pub fn returning(mut self, projections: Vec<Projection>) -> InsertStatement {
        self.returning.projections = projections;
        self
    }
}

impl Statement for InsertStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Insert
    }

    fn detected_dialect(&self) -> Result<Option<Dialect>> {
        let mut dialect = Some(self.table.dialect());
        if let Some(ref query) = self.query {
            dialect = merge_dialects(dialect, query.detected_dialect()?)?;
        }
        Ok(dialect)
    }

    fn push_statement_sql(&self, out: &mut SqlBuilder) -> BuildQueryResult {
        if let Some(ref e) = self.model_error {
            bail!(e.to_string());
        }

        out.push_sql("INSERT INTO");
        self.table.push_sql(out, StatementType::Insert)?;

        if self.columns.is_empty() {
            bail!(ErrorKind::EmptySetColumnList);
        }
        out.push_sql("(");
        push_column_names(out, &self.columns)?;
        out.push_char(')');

        if let Some(ref query) = self.query {
            out.new_line();
            query.push_sql_parenthesized(out)?;
        } else {
            if self.rows.is_empty() {
                bail!(ErrorKind::NoRows);
            }
            out.new_line();
            out.push_sql("VALUES");
            out.increase_indent();
            for (i, row) in self.rows.iter().enumerate() {
                if row.len() != self.columns.len() {
                    bail!(ErrorKind::RowArityMismatch(row.len(), self.columns.len()));
                }
                if i > 0 {
                    out.push_char(',');
                    out.new_line();
                }
                out.push_sql("(");
                push_expression_list(out, StatementType::Insert, row)?;
                out.push_char(')');
            }
            out.decrease_indent();
        }

        self.returning.push_sql(out, StatementType::Insert)
    }
}
