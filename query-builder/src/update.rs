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
    QueryFragment,
    Result,
    SqlBuilder,
    StatementType,
};

use clause::{
    ReturningClause,
    SetClause,
    WhereClause,
};
use expression::{
    BoolExpression,
    Expression,
    Projection,
};
use row::{
    Record,
    unwind_row_from_model,
};
use statement::Statement;
use table::Table;

/// `UPDATE table SET … WHERE …`. The WHERE clause is mandatory — an
/// unbounded UPDATE is treated as a mistake, not a statement.
#[derive(Debug)]
pub struct UpdateStatement {
    table: Table,
    set: SetClause,
    where_clause: WhereClause,
    returning: ReturningClause,
    model_error: Option<Error>,
}

impl UpdateStatement {
    pub fn new(table: Table, columns: Vec<Expression>) -> UpdateStatement {
        UpdateStatement {
            table: table,
            set: SetClause {
                columns: columns,
                values: vec![],
            },
            where_clause: WhereClause::mandatory(),
            returning: ReturningClause::empty(),
            model_error: None,
        }
    }

    pub fn set(mut self, values: Vec<Expression>) -> UpdateStatement {
        self.set.values = values;
        self
    }

    /// Fill the SET values from a record, aligned to the declared column
    /// list by name.
    pub fn model<R: Record + ?Sized>(mut self, record: &R) -> UpdateStatement {
        match unwind_row_from_model(&self.set.columns, record) {
            Ok(values) => self.set.values = values,
            Err(e) => {
                if self.model_error.is_none() {
                    self.model_error = Some(e);
                }
            },
        }
        self
    }

    pub fn filter(mut self, condition: BoolExpression) -> UpdateStatement {
        self.where_clause.condition = Some(condition.into_expression());
        self
    }

    pub fn returning(mut self, projections: Vec<Projection>) -> UpdateStatement {
        self.returning.projections = projections;
        self
    }
}

impl Statement for UpdateStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Update
    }

    fn detected_dialect(&self) -> Result<Option<Dialect>> {
        Ok(Some(self.table.dialect()))
    }

    fn push_statement_sql(&self, out: &mut SqlBuilder) -> BuildQueryResult {
        if let Some(ref e) = self.model_error {
            bail!(e.to_string());
        }

        out.push_sql("UPDATE");
        self.table.push_sql(out, StatementType::Update)?;
        self.set.push_sql(out, StatementType::Update)?;
        self.where_clause.push_sql(out, StatementType::Update)?;
        self.returning.push_sql(out, StatementType::Update)
    }
}
