// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! Literal constructors. Every literal built here is hoisted as a positional
//! parameter when serialized; `constant` is the one deliberate exception.
//!
//! Temporal literals are formatted text cast to the matching SQL type, so no
//! host datetime representation is involved.

use squill_sql::Value;

use expression::{
    BoolExpression,
    DateExpression,
    Expression,
    FloatExpression,
    IntegerExpression,
    TextExpression,
    TimeExpression,
    TimestampExpression,
    TimestampzExpression,
    TimezExpression,
    TypedExpr,
    Unknown,
};

fn literal<T>(value: Value) -> TypedExpr<T> {
    TypedExpr::wrap(Expression::Literal {
        value: value,
        constant: false,
    })
}

pub fn integer(value: i64) -> IntegerExpression {
    literal(Value::Integer(value))
}

pub fn float(value: f64) -> FloatExpression {
    literal(Value::from(value))
}

pub fn boolean(value: bool) -> BoolExpression {
    literal(Value::Boolean(value))
}

pub fn text(value: &str) -> TextExpression {
    literal(Value::from(value))
}

pub fn date(year: i32, month: i32, day: i32) -> DateExpression {
    let formatted = format!("{:04}-{:02}-{:02}", year, month, day);
    literal::<Unknown>(Value::Text(formatted)).cast_to("DATE")
}

pub fn time(hour: i32, minute: i32, second: i32, milliseconds: i32) -> TimeExpression {
    let formatted = format!("{:02}:{:02}:{:02}.{:03}", hour, minute, second, milliseconds);
    literal::<Unknown>(Value::Text(formatted)).cast_to("TIME")
}

pub fn timez(hour: i32,
             minute: i32,
             second: i32,
             milliseconds: i32,
             timezone: i32)
             -> TimezExpression {
    let formatted = format!("{:02}:{:02}:{:02}.{:03} {:+03}",
                            hour,
                            minute,
                            second,
                            milliseconds,
                            timezone);
    literal::<Unknown>(Value::Text(formatted)).cast_to("TIME WITH TIME ZONE")
}

pub fn timestamp(year: i32,
                 month: i32,
                 day: i32,
                 hour: i32,
                 minute: i32,
                 second: i32,
                 milliseconds: i32)
                 -> TimestampExpression {
    let formatted = format!("{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}",
                            year,
                            month,
                            day,
                            hour,
                            minute,
                            second,
                            milliseconds);
    literal::<Unknown>(Value::Text(formatted)).cast_to("TIMESTAMP")
}

pub fn timestampz(year: i32,
                  month: i32,
                  day: i32,
                  hour: i32,
                  minute: i32,
                  second: i32,
                  milliseconds: i32,
                  timezone: i32)
                  -> TimestampzExpression {
    let formatted = format!("{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03} {:+04}",
                            year,
                            month,
                            day,
                            hour,
                            minute,
                            second,
                            milliseconds,
                            timezone);
    literal::<Unknown>(Value::Text(formatted)).cast_to("TIMESTAMP WITH TIME ZONE")
}

pub fn null() -> TypedExpr<Unknown> {
    TypedExpr::wrap(Expression::Null)
}

pub fn star() -> TypedExpr<Unknown> {
    TypedExpr::wrap(Expression::Star)
}

/// A literal inlined into the SQL text instead of being hoisted.
pub fn constant<V: Into<Value>>(value: V) -> TypedExpr<Unknown> {
    TypedExpr::wrap(Expression::Literal {
        value: value.into(),
        constant: true,
    })
}
