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
    QueryFragment,
    SqlBuilder,
    StatementType,
};

/// A reference to one named column. Binding — to a table at construction, or
/// to a subquery table via `for_subquery` — produces a new value; a column is
/// never rebound in place.
#[derive(Clone, Debug)]
pub struct Column {
    name: String,
    table_name: String,
    subquery_alias: Option<String>,
    not_null: bool,
}

impl Column {
    /// `name` must be non-empty; `table_name` may be empty only for columns
    /// used as projection alias targets or inside VALUES lists.
    pub fn new(name: &str, table_name: &str) -> Column {
        Column {
            name: name.to_string(),
            table_name: table_name.to_string(),
            subquery_alias: None,
            not_null: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The display name this column projects as: `table.column` when a table
    /// is bound, otherwise just the column name.
    pub fn default_alias(&self) -> String {
        if self.table_name.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.table_name, self.name)
        }
    }

    /// Rebind to a subquery table. The default alias is left alone — it is
    /// exactly the name under which the subquery exports this column.
    pub fn for_subquery(&self, alias: &str) -> Column {
        let mut column = self.clone();
        column.subquery_alias = Some(alias.to_string());
        column
    }

    pub fn not_null(mut self) -> Column {
        self.not_null = true;
        self
    }

    pub fn is_not_null(&self) -> bool {
        self.not_null
    }

    /// Inside a set operation an ORDER BY may only name projected aliases;
    /// everywhere else the qualified form applies.
    pub fn push_sql_for_order_by(&self,
                                 out: &mut SqlBuilder,
                                 statement: StatementType)
                                 -> BuildQueryResult {
        if statement == StatementType::Set {
            out.push_alias(&self.default_alias());
            return Ok(());
        }
        self.push_sql(out, statement)
    }
}

impl QueryFragment for Column {
    fn push_sql(&self, out: &mut SqlBuilder, _statement: StatementType) -> BuildQueryResult {
        if let Some(ref subquery_alias) = self.subquery_alias {
            // The dotted alias contains a '.', so it comes out quoted as a
            // single identifier.
            out.push_identifier(subquery_alias);
            out.push_char('.');
            out.push_identifier(&self.default_alias());
        } else if !self.table_name.is_empty() {
            out.push_identifier(&self.table_name);
            out.push_char('.');
            out.push_identifier(&self.name);
        } else {
            out.push_identifier(&self.name);
        }
        Ok(())
    }
}
