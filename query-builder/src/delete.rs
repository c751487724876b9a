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

use clause::{
    ReturningClause,
    WhereClause,
};
use expression::{
    BoolExpression,
    Projection,
};
use statement::Statement;
use table::Table;

/// `DELETE FROM table WHERE …`, WHERE mandatory for the same reason as
/// UPDATE.
#[derive(Debug)]
pub struct DeleteStatement {
    table: Table,
    where_clause: WhereClause,
    returning: ReturningClause,
}

impl DeleteStatement {
    pub fn new(table: Table) -> DeleteStatement {
        DeleteStatement {
            table: table,
            where_clause: WhereClause::mandatory(),
            returning: ReturningClause::empty(),
        }
    }

    pub fn filter(mut self, condition: BoolExpression) -> DeleteStatement {
        self.where_clause.condition = Some(condition.into_expression());
        self
    }

    pub fn returning(mut self, projections: Vec<Projection>) -> DeleteStatement {
        self.returning.projections = projections;
        self
    }
}

impl Statement for DeleteStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Delete
    }

    fn detected_dialect(&self) -> Result<Option<Dialect>> {
        Ok(Some(self.table.dialect()))
    }

    fn push_statement_sql(&self, out: &mut SqlBuilder) -> BuildQueryResult {
        out.push_sql("DELETE FROM");
        self.table.push_sql(out, StatementType::Delete)?;
        self.where_clause.push_sql(out, StatementType::Delete)?;
        self.returning.push_sql(out, StatementType::Delete)
    }
}
