// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! A type-safe, embedded SQL query builder.
//!
//! Statements are assembled from strongly-typed expressions — columns,
//! literals, predicates, joins, clauses — and serialized into dialect-specific
//! SQL plus an ordered vector of bound argument values for a database driver.
//! Building never fails; every structural problem surfaces when SQL is
//! requested.
//!
//! ```
//! use squill::{Dialect, Statement, Table, integer, select};
//!
//! let users = Table::new("db", "users", Dialect::Mysql);
//! let id = users.integer_column("id");
//! let name = users.text_column("name");
//!
//! let query = select(vec![name.projection()])
//!     .from(&users)
//!     .filter(id.gt_eq(integer(10)))
//!     .to_sql_query()
//!     .unwrap();
//!
//! assert_eq!(query.sql,
//!            "SELECT users.name AS \"users.name\"\n\
//!             FROM db.users\n\
//!             WHERE users.id >= ?;");
//! ```

extern crate squill_query_builder;
extern crate squill_sql;

pub use squill_sql::{
    BuildQueryResult,
    Dialect,
    Error,
    ErrorKind,
    QueryFragment,
    Result,
    SqlBuilder,
    SqlQuery,
    StatementType,
    Value,
};

pub use squill_query_builder::*;
