// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! Operator combinators, observed through the WHERE clause of a minimal
//! SELECT.

extern crate squill_query_builder;
extern crate squill_sql;

mod common;

use squill_query_builder::{
    BoolExpression,
    Statement,
    integer,
    lower,
    select,
    text,
    time,
    timestamp,
};

use squill_sql::{
    Dialect,
    Value,
};

use common::{
    assert_statement,
    table1,
};

fn where_sql(condition: BoolExpression) -> (String, Vec<Value>) {
    let t1 = table1(Dialect::Mysql);
    let query = select(vec![t1.col_int.projection()])
        .from(&t1.table)
        .filter(condition)
        .to_sql_query()
        .unwrap();
    let where_line = query.sql
                          .lines()
                          .find(|line| line.starts_with("WHERE"))
                          .expect("no WHERE clause emitted")
                          .to_string();
    (where_line, query.args)
}

#[test]
fn test_comparisons() {
    let t1 = table1(Dialect::Mysql);

    let (sql, args) = where_sql(t1.col_int.not_eq(integer(3)));
    assert_eq!(sql, "WHERE table1.col_int != ?;");
    assert_eq!(args, vec![Value::Integer(3)]);

    let (sql, _) = where_sql(t1.col_int.lt(integer(3)));
    assert_eq!(sql, "WHERE table1.col_int < ?;");

    let (sql, _) = where_sql(t1.col_int.lt_eq(integer(3)));
    assert_eq!(sql, "WHERE table1.col_int <= ?;");

    let (sql, _) = where_sql(t1.col_float.gt(2.5));
    assert_eq!(sql, "WHERE table1.col_float > ?;");
}

#[test]
fn test_logical_operators_group_explicitly() {
    let t1 = table1(Dialect::Mysql);

    let (sql, args) = where_sql(t1.col_int.gt(integer(123)).and(t1.col_int.lt(integer(321))));
    assert_eq!(sql, "WHERE (table1.col_int > ? AND table1.col_int < ?);");
    assert_eq!(args, vec![Value::Integer(123), Value::Integer(321)]);

    let (sql, _) = where_sql(t1.col_int.gt(integer(1))
                                 .and(t1.col_int.lt(integer(2)))
                                 .or(t1.col_bool.eq(true)));
    assert_eq!(sql,
               "WHERE ((table1.col_int > ? AND table1.col_int < ?) OR table1.col_bool = ?);");

    let (sql, _) = where_sql(t1.col_bool.not());
    assert_eq!(sql, "WHERE NOT (table1.col_bool);");
}

#[test]
fn test_null_checks() {
    let t1 = table1(Dialect::Mysql);

    let (sql, args) = where_sql(t1.col_text.is_null());
    assert_eq!(sql, "WHERE table1.col_text IS NULL;");
    assert!(args.is_empty());

    let (sql, _) = where_sql(t1.col_text.is_not_null());
    assert_eq!(sql, "WHERE table1.col_text IS NOT NULL;");
}

#[test]
fn test_in_list_wraps_the_tuple() {
    let t1 = table1(Dialect::Mysql);

    let (sql, args) = where_sql(t1.col_int.in_list(vec![integer(1),
                                                        integer(2),
                                                        integer(3)]));
    assert_eq!(sql, "WHERE table1.col_int IN (?, ?, ?);");
    assert_eq!(args,
               vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
}

#[test]
fn test_between() {
    let t1 = table1(Dialect::Mysql);

    let (sql, args) = where_sql(t1.col_int.between(integer(1), integer(9)));
    assert_eq!(sql, "WHERE table1.col_int BETWEEN ? AND ?;");
    assert_eq!(args, vec![Value::Integer(1), Value::Integer(9)]);
}

#[test]
fn test_like() {
    let t1 = table1(Dialect::Mysql);

    let (sql, args) = where_sql(t1.col_text.like(text("foo%")));
    assert_eq!(sql, "WHERE table1.col_text LIKE ?;");
    assert_eq!(args, vec![Value::Text("foo%".to_string())]);

    let (sql, _) = where_sql(t1.col_text.not_like("bar%"));
    assert_eq!(sql, "WHERE table1.col_text NOT LIKE ?;");
}

#[test]
fn test_arithmetic_groups_explicitly() {
    let t1 = table1(Dialect::Mysql);

    let (sql, args) = where_sql(t1.col_int.add(integer(1)).gt(integer(10)));
    assert_eq!(sql, "WHERE (table1.col_int + ?) > ?;");
    assert_eq!(args, vec![Value::Integer(1), Value::Integer(10)]);

    let (sql, _) = where_sql(t1.col_float.mul(t1.col_float.clone()).lt_eq(2.0));
    assert_eq!(sql, "WHERE (table1.col_float * table1.col_float) <= ?;");
}

#[test]
fn test_string_functions() {
    let t1 = table1(Dialect::Mysql);

    let (sql, args) = where_sql(lower(&t1.col_text).eq(text("horses")));
    assert_eq!(sql, "WHERE LOWER(table1.col_text) = ?;");
    assert_eq!(args, vec![Value::Text("horses".to_string())]);
}

#[test]
fn test_temporal_literals_cast() {
    let t1 = table1(Dialect::Mysql);

    let (sql, args) = where_sql(t1.col_time.gt(time(3, 4, 5, 0)));
    assert_eq!(sql, "WHERE table1.col_time > CAST(? AS TIME);");
    assert_eq!(args, vec![Value::Text("03:04:05.000".to_string())]);

    let query = select(vec![timestamp(1999, 1, 2, 3, 4, 5, 0).projection()])
        .to_sql_query()
        .unwrap();
    assert_eq!(query.sql, "SELECT CAST($1 AS TIMESTAMP);");
    assert_eq!(query.args,
               vec![Value::Text("1999-01-02 03:04:05.000".to_string())]);
}

#[test]
fn test_expression_visitor_sees_every_node() {
    let t1 = table1(Dialect::Mysql);

    let condition = t1.col_int.add(integer(1)).gt(integer(10)).and(t1.col_bool.is_null());
    let mut literals = 0;
    let mut columns = 0;
    condition.expression().visit(&mut |e| {
        match e {
            &squill_query_builder::Expression::Literal { .. } => literals += 1,
            &squill_query_builder::Expression::Column(_) => columns += 1,
            _ => (),
        }
    });
    assert_eq!(literals, 2);
    assert_eq!(columns, 2);
}

#[test]
fn test_column_qualification_law() {
    // For a column C bound to table T, the SQL of SELECT(C) FROM(T) mentions
    // T.C between SELECT and FROM.
    let t1 = table1(Dialect::Mysql);
    let query = select(vec![t1.col_int.projection()])
        .from(&t1.table)
        .to_sql_query()
        .unwrap();

    let select_pos = query.sql.find("SELECT").unwrap();
    let from_pos = query.sql.find("FROM").unwrap();
    let qualified = query.sql.find("table1.col_int").unwrap();
    assert!(select_pos < qualified && qualified < from_pos);
}

#[test]
fn test_order_by_plain_column() {
    let t1 = table1(Dialect::Mysql);

    assert_statement(&select(vec![t1.col_int.projection()])
                          .from(&t1.table)
                          .order_by(vec![t1.col_float.asc()]),
                     "SELECT table1.col_int AS \"table1.col_int\"\n\
                      FROM db.table1\n\
                      ORDER BY table1.col_float ASC;",
                     vec![]);
}
