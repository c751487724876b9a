// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

extern crate squill_query_builder;
extern crate squill_sql;

mod common;

use std::collections::BTreeMap;

use squill_query_builder::{
    Statement,
    boolean,
    integer,
    unwind_row_from_values,
};

use squill_sql::{
    Dialect,
    Value,
};

use common::{
    assert_statement,
    assert_statement_err,
    table1,
};

#[test]
fn test_update_single_column() {
    let t1 = table1(Dialect::Mysql);

    assert_statement(&t1.table
                          .update(vec![t1.col_int.projection()])
                          .set(unwind_row_from_values(vec![Value::Integer(5)]))
                          .filter(t1.col_bool.eq(boolean(true))),
                     "UPDATE db.table1\n\
                      SET col_int = ?\n\
                      WHERE table1.col_bool = ?;",
                     vec![Value::Integer(5), Value::Boolean(true)]);
}

#[test]
fn test_update_multiple_columns_use_tuples() {
    let t1 = table1(Dialect::Mysql);

    assert_statement(&t1.table
                          .update(vec![t1.col_int.projection(), t1.col_text.projection()])
                          .set(unwind_row_from_values(vec![Value::Integer(5),
                                                           Value::from("five")]))
                          .filter(t1.col_bool.eq(boolean(true))),
                     "UPDATE db.table1\n\
                      SET (col_int, col_text) = (?, ?)\n\
                      WHERE table1.col_bool = ?;",
                     vec![Value::Integer(5),
                          Value::Text("five".to_string()),
                          Value::Boolean(true)]);
}

#[test]
fn test_update_from_model() {
    let t1 = table1(Dialect::Mysql);

    let mut record = BTreeMap::new();
    record.insert("col_int".to_string(), Value::Integer(9));

    assert_statement(&t1.table
                          .update(vec![t1.col_int.projection()])
                          .model(&record)
                          .filter(t1.col_int.eq(integer(3))),
                     "UPDATE db.table1\n\
                      SET col_int = ?\n\
                      WHERE table1.col_int = ?;",
                     vec![Value::Integer(9), Value::Integer(3)]);
}

#[test]
fn test_update_requires_where() {
    let t1 = table1(Dialect::Mysql);

    assert_statement_err(&t1.table
                              .update(vec![t1.col_int.projection()])
                              .set(unwind_row_from_values(vec![Value::Integer(5)])),
                         "WHERE clause not set");
}

#[test]
fn test_update_requires_columns() {
    let t1 = table1(Dialect::Mysql);

    assert_statement_err(&t1.table
                              .update(vec![])
                              .set(vec![])
                              .filter(t1.col_bool.eq(boolean(true))),
                         "no columns selected");
}

#[test]
fn test_update_returning_on_postgres() {
    let t1 = table1(Dialect::Postgres);

    assert_statement(&t1.table
                          .update(vec![t1.col_int.projection()])
                          .set(unwind_row_from_values(vec![Value::Integer(5)]))
                          .filter(t1.col_bool.eq(boolean(true)))
                          .returning(vec![t1.col_int.projection()]),
                     "UPDATE db.table1\n\
                      SET col_int = $1\n\
                      WHERE table1.col_bool = $2\n\
                      RETURNING table1.col_int AS \"table1.col_int\";",
                     vec![Value::Integer(5), Value::Boolean(true)]);
}
