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
    date,
    select,
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
    table2,
};

#[test]
fn test_insert_single_row() {
    let t1 = table1(Dialect::Mysql);

    assert_statement(&t1.table
                          .insert(vec![t1.col_int.projection(), t1.col_text.projection()])
                          .values(unwind_row_from_values(vec![Value::Integer(1),
                                                              Value::from("one")])),
                     "INSERT INTO db.table1 (col_int, col_text)\n\
                      VALUES (?, ?);",
                     vec![Value::Integer(1), Value::Text("one".to_string())]);
}

#[test]
fn test_insert_multiple_rows() {
    let t1 = table1(Dialect::Mysql);

    assert_statement(&t1.table
                          .insert(vec![t1.col_int.projection(), t1.col_text.projection()])
                          .values(unwind_row_from_values(vec![Value::Integer(1),
                                                              Value::from("one")]))
                          .values(unwind_row_from_values(vec![Value::Integer(2),
                                                              Value::from("two")])),
                     "INSERT INTO db.table1 (col_int, col_text)\n\
                      VALUES (?, ?),\n     \
                      (?, ?);",
                     vec![Value::Integer(1),
                          Value::Text("one".to_string()),
                          Value::Integer(2),
                          Value::Text("two".to_string())]);
}

#[test]
fn test_insert_temporal_literal() {
    let t1 = table1(Dialect::Mysql);

    assert_statement(&t1.table
                          .insert(vec![t1.col_time.projection()])
                          .values(vec![date(1999, 1, 2).into_expression()]),
                     "INSERT INTO db.table1 (col_time)\n\
                      VALUES (CAST(? AS DATE));",
                     vec![Value::Text("1999-01-02".to_string())]);
}

#[test]
fn test_insert_from_select() {
    let t1 = table1(Dialect::Mysql);
    let t2 = table2(Dialect::Mysql);

    assert_statement(&t1.table
                          .insert(vec![t1.col_int.projection()])
                          .query(select(vec![t2.col_int.projection()]).from(&t2.table)),
                     "INSERT INTO db.table1 (col_int)\n\
                      (\n     \
                      SELECT table2.col_int AS \"table2.col_int\"\n     \
                      FROM db.table2\n\
                      );",
                     vec![]);
}

#[test]
fn test_insert_from_model() {
    let t1 = table1(Dialect::Mysql);

    let mut record = BTreeMap::new();
    record.insert("col_int".to_string(), Value::Integer(5));
    record.insert("col_text".to_string(), Value::from("horses"));
    record.insert("unrelated".to_string(), Value::Boolean(true));

    assert_statement(&t1.table
                          .insert(vec![t1.col_int.projection(), t1.col_text.projection()])
                          .model(&record),
                     "INSERT INTO db.table1 (col_int, col_text)\n\
                      VALUES (?, ?);",
                     vec![Value::Integer(5), Value::Text("horses".to_string())]);
}

#[test]
fn test_insert_from_model_missing_nullable_is_null() {
    let t1 = table1(Dialect::Mysql);

    let mut record = BTreeMap::new();
    record.insert("col_int".to_string(), Value::Integer(5));

    assert_statement(&t1.table
                          .insert(vec![t1.col_int.projection(), t1.col_text.projection()])
                          .model(&record),
                     "INSERT INTO db.table1 (col_int, col_text)\n\
                      VALUES (?, NULL);",
                     vec![Value::Integer(5)]);
}

#[test]
fn test_insert_from_model_missing_non_nullable_fails() {
    let table = squill_query_builder::Table::new("db", "table1", Dialect::Mysql);
    let col_int = table.integer_column("col_int").not_null();
    let record: BTreeMap<String, Value> = BTreeMap::new();

    assert_statement_err(&table.insert(vec![col_int.projection()]).model(&record),
                         "no value for non-nullable column 'col_int'");
}

#[test]
fn test_insert_row_arity_mismatch() {
    let t1 = table1(Dialect::Mysql);

    assert_statement_err(&t1.table
                              .insert(vec![t1.col_int.projection(),
                                           t1.col_text.projection()])
                              .values(unwind_row_from_values(vec![Value::Integer(1)])),
                         "row has 1 values but 2 columns are declared");
}

#[test]
fn test_insert_without_rows_fails() {
    let t1 = table1(Dialect::Mysql);

    assert_statement_err(&t1.table.insert(vec![t1.col_int.projection()]),
                         "no rows specified for INSERT");
}

#[test]
fn test_insert_without_columns_fails() {
    let t1 = table1(Dialect::Mysql);

    assert_statement_err(&t1.table
                              .insert(vec![])
                              .values(unwind_row_from_values(vec![Value::Integer(1)])),
                         "no columns selected");
}

#[test]
fn test_insert_returning_on_postgres() {
    let t1 = table1(Dialect::Postgres);

    assert_statement(&t1.table
                          .insert(vec![t1.col_int.projection()])
                          .values(unwind_row_from_values(vec![Value::Integer(1)]))
                          .returning(vec![t1.col_int.projection()]),
                     "INSERT INTO db.table1 (col_int)\n\
                      VALUES ($1)\n\
                      RETURNING table1.col_int AS \"table1.col_int\";",
                     vec![Value::Integer(1)]);
}

#[test]
fn test_insert_returning_rejected_on_mysql() {
    let t1 = table1(Dialect::Mysql);

    assert_statement_err(&t1.table
                              .insert(vec![t1.col_int.projection()])
                              .values(unwind_row_from_values(vec![Value::Integer(1)]))
                              .returning(vec![t1.col_int.projection()]),
                         "RETURNING is not supported by the mysql dialect");
}
