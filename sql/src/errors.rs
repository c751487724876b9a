// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! Everything that can go wrong while turning a statement tree into SQL.
//! Builder methods never fail; a malformed statement is only discovered when
//! the caller asks for SQL, so every kind here is a serialization-time error.

error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    errors {
        NoProjection {
            description("empty projection list")
            display("no column selected for Projection")
        }

        EmptySetColumnList {
            description("SET clause with an empty column list")
            display("no columns selected")
        }

        MissingWhereClause {
            description("mandatory WHERE clause not set")
            display("WHERE clause not set")
        }

        SetArityMismatch {
            description("set operation over selects of differing width")
            display("All inner selects in UNION Statement must select the same number of columns")
        }

        SetOrderByWithoutLimit {
            description("inner select with ORDER BY but no LIMIT")
            display("All inner selects in UNION Statement must have LIMIT if they have ORDER BY")
        }

        DialectMismatch(left: &'static str, right: &'static str) {
            description("statement references tables from different dialects")
            display("cannot combine {} and {} tables in a single statement", left, right)
        }

        UnsupportedClause(clause: &'static str, dialect: &'static str) {
            description("clause not available in this dialect")
            display("{} is not supported by the {} dialect", clause, dialect)
        }

        InvalidColumnList {
            description("non-column expression in a column list")
            display("column list may contain only columns")
        }

        RowArityMismatch(values: usize, columns: usize) {
            description("VALUES row width differs from the column list")
            display("row has {} values but {} columns are declared", values, columns)
        }

        NoRows {
            description("INSERT with neither rows nor a query")
            display("no rows specified for INSERT")
        }

        MissingColumnValue(column: String) {
            description("record is missing a value for a non-nullable column")
            display("no value for non-nullable column '{}'", column)
        }
    }
}

/// Most serialization entry points only signal success or failure; the SQL
/// itself accumulates in the builder.
pub type BuildQueryResult = Result<()>;
