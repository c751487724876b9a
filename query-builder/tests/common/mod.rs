// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

#![allow(dead_code)]

use squill_query_builder::{
    BoolExpression,
    FloatExpression,
    IntegerExpression,
    Statement,
    Table,
    TextExpression,
    TimeExpression,
};

use squill_sql::{
    Dialect,
    Value,
};

// The same throwaway schema the whole suite exercises: three tables in a
// database called `db`.

pub struct Table1 {
    pub table: Table,
    pub col_int: IntegerExpression,
    pub col_float: FloatExpression,
    pub col_bool: BoolExpression,
    pub col_text: TextExpression,
    pub col_time: TimeExpression,
}

pub fn table1(dialect: Dialect) -> Table1 {
    let table = Table::new("db", "table1", dialect);
    Table1 {
        col_int: table.integer_column("col_int"),
        col_float: table.float_column("col_float"),
        col_bool: table.bool_column("col_bool"),
        col_text: table.text_column("col_text"),
        col_time: table.time_column("col_time"),
        table: table,
    }
}

pub struct Table2 {
    pub table: Table,
    pub col_int: IntegerExpression,
    pub col_float: FloatExpression,
}

pub fn table2(dialect: Dialect) -> Table2 {
    let table = Table::new("db", "table2", dialect);
    Table2 {
        col_int: table.integer_column("col_int"),
        col_float: table.float_column("col_float"),
        table: table,
    }
}

pub struct Table3 {
    pub table: Table,
    pub col_int: IntegerExpression,
}

pub fn table3(dialect: Dialect) -> Table3 {
    let table = Table::new("db", "table3", dialect);
    Table3 {
        col_int: table.integer_column("col_int"),
        table: table,
    }
}

pub fn assert_statement<S: Statement>(statement: &S,
                                      expected_sql: &str,
                                      expected_args: Vec<Value>) {
    let query = statement.to_sql_query().expect("serialization failed");
    assert_eq!(query.sql, expected_sql);
    assert_eq!(query.args, expected_args);
}

pub fn assert_statement_err<S: Statement>(statement: &S, expected_message: &str) {
    let err = statement.to_sql_query().expect_err("serialization unexpectedly succeeded");
    assert_eq!(err.to_string(), expected_message);
}
