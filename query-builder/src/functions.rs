// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! The conventional function catalog. Anything not covered composes through
//! `sql_function`, which takes its result type on trust.

use expression::{
    Expression,
    FloatExpression,
    IntegerExpression,
    TextExpression,
    TypedExpr,
};

/// A function call with an arbitrary name and argument list.
pub fn sql_function<U>(name: &str, args: Vec<Expression>) -> TypedExpr<U> {
    TypedExpr::wrap(Expression::Function {
        name: name.to_string(),
        args: args,
    })
}

pub fn count<T>(expression: &TypedExpr<T>) -> IntegerExpression {
    sql_function("COUNT", vec![expression.to_expression()])
}

pub fn sum<T>(expression: &TypedExpr<T>) -> TypedExpr<T> {
    sql_function("SUM", vec![expression.to_expression()])
}

pub fn avg<T>(expression: &TypedExpr<T>) -> FloatExpression {
    sql_function("AVG", vec![expression.to_expression()])
}

pub fn min<T>(expression: &TypedExpr<T>) -> TypedExpr<T> {
    sql_function("MIN", vec![expression.to_expression()])
}

pub fn max<T>(expression: &TypedExpr<T>) -> TypedExpr<T> {
    sql_function("MAX", vec![expression.to_expression()])
}

pub fn coalesce<T>(expressions: Vec<TypedExpr<T>>) -> TypedExpr<T> {
    sql_function("COALESCE",
                 expressions.into_iter().map(|e| e.into_expression()).collect())
}

pub fn lower(expression: &TextExpression) -> TextExpression {
    sql_function("LOWER", vec![expression.to_expression()])
}

pub fn upper(expression: &TextExpression) -> TextExpression {
    sql_function("UPPER", vec![expression.to_expression()])
}
