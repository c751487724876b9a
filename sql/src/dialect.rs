// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

/// The fixed set of SQL dialects we can emit. A dialect decides identifier
/// quoting, parameter placeholder syntax, and which minor clauses exist at
/// all; everything else about a statement is dialect-independent.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Dialect {
    Postgres,
    Mysql,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match *self {
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
        }
    }

    /// The character wrapped around identifiers that need quoting.
    pub fn quote_char(&self) -> char {
        match *self {
            Dialect::Postgres => '"',
            Dialect::Mysql => '`',
        }
    }

    /// The placeholder emitted for the `ordinal`-th hoisted argument
    /// (1-based, in order of appearance).
    pub fn placeholder(&self, ordinal: usize) -> String {
        match *self {
            Dialect::Postgres => format!("${}", ordinal),
            Dialect::Mysql => "?".to_string(),
        }
    }

    pub fn supports_returning(&self) -> bool {
        match *self {
            Dialect::Postgres => true,
            Dialect::Mysql => false,
        }
    }
}
