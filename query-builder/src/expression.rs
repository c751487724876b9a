// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

use std::marker::PhantomData;

use squill_sql::{
    BuildQueryResult,
    QueryFragment,
    SqlBuilder,
    StatementType,
    Value,
};

use clause::{
    Direction,
    OrderByClause,
};
use column::Column;
use select::SelectStatement;
use table::SubQueryTable;

/// One node of the expression tree. The set is closed, so serialization and
/// inspection are plain recursive functions over the variants; the SQL-level
/// typing lives in the `TypedExpr` wrapper, not here.
///
/// Operator precedence is not modeled: combinators that need grouping wrap
/// their result in `Wrap` when they build it.
#[derive(Clone, Debug)]
pub enum Expression {
    /// A host value. Parameterized unless `constant`, in which case it is
    /// inlined into the SQL text.
    Literal { value: Value, constant: bool },
    Null,
    Star,
    Column(Column),
    Prefix { op: &'static str, expr: Box<Expression> },
    Postfix { op: &'static str, expr: Box<Expression> },
    Infix { op: &'static str, left: Box<Expression>, right: Box<Expression> },
    Between { expr: Box<Expression>, lower: Box<Expression>, upper: Box<Expression> },
    Function { name: String, args: Vec<Expression> },
    Cast { expr: Box<Expression>, target: &'static str },
    /// A SELECT used as an expression; always parenthesized.
    Subquery(Box<SelectStatement>),
    /// A parenthesized comma-separated list: tuple contexts, IN lists, and
    /// build-time precedence grouping.
    Wrap(Vec<Expression>),
    /// An explicit `AS` wrapper. The alias only materializes in projection
    /// position; elsewhere the wrapped expression serializes bare.
    Aliased { expr: Box<Expression>, alias: String },
}

impl QueryFragment for Expression {
    fn push_sql(&self, out: &mut SqlBuilder, statement: StatementType) -> BuildQueryResult {
        match self {
            &Expression::Literal { ref value, constant } => {
                if constant {
                    out.push_constant(value.clone());
                } else {
                    out.push_parameterized(value.clone());
                }
                Ok(())
            },
            &Expression::Null => {
                out.push_sql("NULL");
                Ok(())
            },
            &Expression::Star => {
                out.push_sql("*");
                Ok(())
            },
            &Expression::Column(ref column) => column.push_sql(out, statement),
            &Expression::Prefix { op, ref expr } => {
                out.push_sql(op);
                expr.push_sql(out, statement)
            },
            &Expression::Postfix { op, ref expr } => {
                expr.push_sql(out, statement)?;
                out.push_sql(op);
                Ok(())
            },
            &Expression::Infix { op, ref left, ref right } => {
                left.push_sql(out, statement)?;
                out.push_sql(op);
                right.push_sql(out, statement)
            },
            &Expression::Between { ref expr, ref lower, ref upper } => {
                expr.push_sql(out, statement)?;
                out.push_sql("BETWEEN");
                lower.push_sql(out, statement)?;
                out.push_sql("AND");
                upper.push_sql(out, statement)
            },
            &Expression::Function { ref name, ref args } => {
                out.push_sql(name);
                out.push_char('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_char(',');
                    }
                    arg.push_sql(out, statement)?;
                }
                out.push_char(')');
                Ok(())
            },
            &Expression::Cast { ref expr, target } => {
                out.push_sql("CAST");
                out.push_char('(');
                expr.push_sql(out, statement)?;
                out.push_sql("AS");
                out.push_sql(target);
                out.push_char(')');
                Ok(())
            },
            &Expression::Subquery(ref select) => select.push_sql_parenthesized(out),
            &Expression::Wrap(ref expressions) => {
                out.push_sql("(");
                for (i, expression) in expressions.iter().enumerate() {
                    if i > 0 {
                        out.push_char(',');
                    }
                    expression.push_sql(out, statement)?;
                }
                out.push_char(')');
                Ok(())
            },
            &Expression::Aliased { ref expr, .. } => expr.push_sql(out, statement),
        }
    }
}

impl Expression {
    /// Serialize for projection position: columns and explicit `AS` wrappers
    /// carry an alias, everything else is emitted bare.
    pub fn push_sql_for_projection(&self,
                                   out: &mut SqlBuilder,
                                   statement: StatementType)
                                   -> BuildQueryResult {
        match self {
            &Expression::Column(ref column) => {
                column.push_sql(out, statement)?;
                out.push_sql("AS");
                out.push_alias(&column.default_alias());
                Ok(())
            },
            &Expression::Aliased { ref expr, ref alias } => {
                expr.push_sql(out, statement)?;
                out.push_sql("AS");
                out.push_alias(alias);
                Ok(())
            },
            other => other.push_sql(out, statement),
        }
    }

    /// Serialize for ORDER BY position. Inside a set operation an ORDER BY
    /// may only name projected aliases, so columns and aliased expressions
    /// emit their alias; in any other statement this is the ordinary form.
    pub fn push_sql_for_order_by(&self,
                                 out: &mut SqlBuilder,
                                 statement: StatementType)
                                 -> BuildQueryResult {
        match self {
            &Expression::Column(ref column) => column.push_sql_for_order_by(out, statement),
            &Expression::Aliased { ref alias, .. } if statement == StatementType::Set => {
                out.push_alias(alias);
                Ok(())
            },
            other => other.push_sql(out, statement),
        }
    }

    /// Walk this subtree, visiting every node. Subqueries are leaves from the
    /// expression walk's point of view; callers that care recurse into the
    /// statement themselves.
    pub fn visit<F>(&self, f: &mut F) where F: FnMut(&Expression) {
        f(self);
        match self {
            &Expression::Prefix { ref expr, .. } |
            &Expression::Postfix { ref expr, .. } |
            &Expression::Cast { ref expr, .. } |
            &Expression::Aliased { ref expr, .. } => expr.visit(f),
            &Expression::Infix { ref left, ref right, .. } => {
                left.visit(f);
                right.visit(f);
            },
            &Expression::Between { ref expr, ref lower, ref upper } => {
                expr.visit(f);
                lower.visit(f);
                upper.visit(f);
            },
            &Expression::Function { ref args, .. } |
            &Expression::Wrap(ref args) => {
                for arg in args {
                    arg.visit(f);
                }
            },
            _ => (),
        }
    }
}

// SQL-level type markers. Uninhabited: they exist only as parameters to
// `TypedExpr`.
pub enum Bool {}
pub enum Integer {}
pub enum Float {}
pub enum Text {}
pub enum Date {}
pub enum Time {}
pub enum Timez {}
pub enum Timestamp {}
pub enum Timestampz {}
pub enum Blob {}
pub enum Unknown {}

pub type BoolExpression = TypedExpr<Bool>;
pub type IntegerExpression = TypedExpr<Integer>;
pub type FloatExpression = TypedExpr<Float>;
pub type TextExpression = TypedExpr<Text>;
pub type DateExpression = TypedExpr<Date>;
pub type TimeExpression = TypedExpr<Time>;
pub type TimezExpression = TypedExpr<Timez>;
pub type TimestampExpression = TypedExpr<Timestamp>;
pub type TimestampzExpression = TypedExpr<Timestampz>;
pub type BlobExpression = TypedExpr<Blob>;

/// An expression tagged with its SQL-level type. The tag is phantom; all
/// state is the wrapped `Expression`. Combinators are defined here so that,
/// for example, comparing two integer expressions yields a `BoolExpression`
/// and comparing an integer to a string does not compile.
pub struct TypedExpr<T> {
    expression: Expression,
    marker: PhantomData<T>,
}

// Manual impl: derive would demand T: Clone, and the markers are not.
impl<T> Clone for TypedExpr<T> {
    fn clone(&self) -> TypedExpr<T> {
        TypedExpr {
            expression: self.expression.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> TypedExpr<T> {
    /// Wrap a raw expression. This is the escape hatch for operators the
    /// typed combinators don't cover; the caller vouches for the tag.
    pub fn wrap(expression: Expression) -> TypedExpr<T> {
        TypedExpr {
            expression: expression,
            marker: PhantomData,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn to_expression(&self) -> Expression {
        self.expression.clone()
    }

    pub fn into_expression(self) -> Expression {
        self.expression
    }

    fn infix<R: Into<TypedExpr<T>>, U>(&self, op: &'static str, other: R) -> TypedExpr<U> {
        TypedExpr::wrap(Expression::Infix {
            op: op,
            left: Box::new(self.expression.clone()),
            right: Box::new(other.into().expression),
        })
    }

    pub fn eq<R: Into<TypedExpr<T>>>(&self, other: R) -> BoolExpression {
        self.infix("=", other)
    }

    pub fn not_eq<R: Into<TypedExpr<T>>>(&self, other: R) -> BoolExpression {
        self.infix("!=", other)
    }

    pub fn lt<R: Into<TypedExpr<T>>>(&self, other: R) -> BoolExpression {
        self.infix("<", other)
    }

    pub fn lt_eq<R: Into<TypedExpr<T>>>(&self, other: R) -> BoolExpression {
        self.infix("<=", other)
    }

    pub fn gt<R: Into<TypedExpr<T>>>(&self, other: R) -> BoolExpression {
        self.infix(">", other)
    }

    pub fn gt_eq<R: Into<TypedExpr<T>>>(&self, other: R) -> BoolExpression {
        self.infix(">=", other)
    }

    pub fn is_null(&self) -> BoolExpression {
        TypedExpr::wrap(Expression::Postfix {
            op: "IS NULL",
            expr: Box::new(self.expression.clone()),
        })
    }

    pub fn is_not_null(&self) -> BoolExpression {
        TypedExpr::wrap(Expression::Postfix {
            op: "IS NOT NULL",
            expr: Box::new(self.expression.clone()),
        })
    }

    pub fn in_list<R: Into<TypedExpr<T>>>(&self, values: Vec<R>) -> BoolExpression {
        TypedExpr::wrap(Expression::Infix {
            op: "IN",
            left: Box::new(self.expression.clone()),
            right: Box::new(Expression::Wrap(values.into_iter()
                                                   .map(|v| v.into().expression)
                                                   .collect())),
        })
    }

    pub fn between<L, U>(&self, lower: L, upper: U) -> BoolExpression
        where L: Into<TypedExpr<T>>,
              U: Into<TypedExpr<T>>,
    {
        TypedExpr::wrap(Expression::Between {
            expr: Box::new(self.expression.clone()),
            lower: Box::new(lower.into().expression),
            upper: Box::new(upper.into().expression),
        })
    }

    /// Attach an explicit projection alias.
    pub fn alias(&self, alias: &str) -> TypedExpr<T> {
        TypedExpr::wrap(Expression::Aliased {
            expr: Box::new(self.expression.clone()),
            alias: alias.to_string(),
        })
    }

    pub fn asc(&self) -> OrderByClause {
        OrderByClause::new(self.expression.clone(), Some(Direction::Ascending))
    }

    pub fn desc(&self) -> OrderByClause {
        OrderByClause::new(self.expression.clone(), Some(Direction::Descending))
    }

    /// Cast to another SQL type. The target spelling is emitted verbatim.
    pub fn cast_to<U>(&self, target: &'static str) -> TypedExpr<U> {
        TypedExpr::wrap(Expression::Cast {
            expr: Box::new(self.expression.clone()),
            target: target,
        })
    }

    /// Rebind a column to a subquery table so that it serializes as
    /// `alias.qualified_name`. Non-column expressions pass through: an
    /// aliased expression becomes a column named after its alias, anything
    /// else is returned unchanged.
    pub fn from_subquery(&self, subquery: &SubQueryTable) -> TypedExpr<T> {
        match self.expression {
            Expression::Column(ref column) =>
                TypedExpr::wrap(Expression::Column(column.for_subquery(subquery.alias()))),
            Expression::Aliased { ref alias, .. } =>
                TypedExpr::wrap(Expression::Column(
                    Column::new(alias, "").for_subquery(subquery.alias()))),
            _ => self.clone(),
        }
    }

    /// Mark the underlying column as non-nullable; a no-op for anything that
    /// is not a column. Consulted when a row is unwound from a record.
    pub fn not_null(self) -> TypedExpr<T> {
        match self.expression {
            Expression::Column(column) =>
                TypedExpr::wrap(Expression::Column(column.not_null())),
            other => TypedExpr::wrap(other),
        }
    }

    pub fn projection(&self) -> Projection {
        Projection::Single(self.expression.clone())
    }
}

impl TypedExpr<Bool> {
    pub fn and<R: Into<BoolExpression>>(&self, other: R) -> BoolExpression {
        grouped_infix("AND", self.expression.clone(), other.into().expression)
    }

    pub fn or<R: Into<BoolExpression>>(&self, other: R) -> BoolExpression {
        grouped_infix("OR", self.expression.clone(), other.into().expression)
    }

    pub fn not(&self) -> BoolExpression {
        TypedExpr::wrap(Expression::Prefix {
            op: "NOT",
            expr: Box::new(Expression::Wrap(vec![self.expression.clone()])),
        })
    }
}

impl TypedExpr<Integer> {
    pub fn add<R: Into<IntegerExpression>>(&self, other: R) -> IntegerExpression {
        grouped_infix("+", self.expression.clone(), other.into().expression)
    }

    pub fn sub<R: Into<IntegerExpression>>(&self, other: R) -> IntegerExpression {
        grouped_infix("-", self.expression.clone(), other.into().expression)
    }

    pub fn mul<R: Into<IntegerExpression>>(&self, other: R) -> IntegerExpression {
        grouped_infix("*", self.expression.clone(), other.into().expression)
    }

    pub fn div<R: Into<IntegerExpression>>(&self, other: R) -> IntegerExpression {
        grouped_infix("/", self.expression.clone(), other.into().expression)
    }
}

impl TypedExpr<Float> {
    pub fn add<R: Into<FloatExpression>>(&self, other: R) -> FloatExpression {
        grouped_infix("+", self.expression.clone(), other.into().expression)
    }

    pub fn sub<R: Into<FloatExpression>>(&self, other: R) -> FloatExpression {
        grouped_infix("-", self.expression.clone(), other.into().expression)
    }

    pub fn mul<R: Into<FloatExpression>>(&self, other: R) -> FloatExpression {
        grouped_infix("*", self.expression.clone(), other.into().expression)
    }

    pub fn div<R: Into<FloatExpression>>(&self, other: R) -> FloatExpression {
        grouped_infix("/", self.expression.clone(), other.into().expression)
    }
}

impl TypedExpr<Text> {
    pub fn like<R: Into<TextExpression>>(&self, pattern: R) -> BoolExpression {
        self.infix("LIKE", pattern)
    }

    pub fn not_like<R: Into<TextExpression>>(&self, pattern: R) -> BoolExpression {
        self.infix("NOT LIKE", pattern)
    }
}

/// An infix node wrapped in parens. Build-time grouping: the serializer never
/// consults a precedence table.
fn grouped_infix<U>(op: &'static str, left: Expression, right: Expression) -> TypedExpr<U> {
    TypedExpr::wrap(Expression::Wrap(vec![Expression::Infix {
        op: op,
        left: Box::new(left),
        right: Box::new(right),
    }]))
}

impl<T> From<TypedExpr<T>> for Expression {
    fn from(typed: TypedExpr<T>) -> Expression {
        typed.expression
    }
}

impl From<bool> for TypedExpr<Bool> {
    fn from(v: bool) -> TypedExpr<Bool> {
        TypedExpr::wrap(Expression::Literal { value: Value::Boolean(v), constant: false })
    }
}

impl From<i64> for TypedExpr<Integer> {
    fn from(v: i64) -> TypedExpr<Integer> {
        TypedExpr::wrap(Expression::Literal { value: Value::Integer(v), constant: false })
    }
}

impl From<f64> for TypedExpr<Float> {
    fn from(v: f64) -> TypedExpr<Float> {
        TypedExpr::wrap(Expression::Literal { value: Value::from(v), constant: false })
    }
}

impl<'a> From<&'a str> for TypedExpr<Text> {
    fn from(v: &'a str) -> TypedExpr<Text> {
        TypedExpr::wrap(Expression::Literal { value: Value::from(v), constant: false })
    }
}

/// One entry of a SELECT list or of an INSERT/UPDATE column list. `List` is
/// an ordered column list acting as a single projection; it expands in order
/// wherever it appears.
#[derive(Clone, Debug)]
pub enum Projection {
    Single(Expression),
    List(Vec<Expression>),
}

impl Projection {
    /// How many columns this projection contributes to the statement's width.
    pub fn count(&self) -> usize {
        match self {
            &Projection::Single(_) => 1,
            &Projection::List(ref columns) => columns.len(),
        }
    }

    pub fn expressions(&self) -> &[Expression] {
        match self {
            &Projection::Single(ref e) => ::std::slice::from_ref(e),
            &Projection::List(ref columns) => columns,
        }
    }
}

impl<T> From<TypedExpr<T>> for Projection {
    fn from(typed: TypedExpr<T>) -> Projection {
        Projection::Single(typed.expression)
    }
}

/// An ordered list of columns reusable as a single projection and as the
/// column list of an INSERT or UPDATE.
pub fn column_list(columns: Vec<Expression>) -> Projection {
    Projection::List(columns)
}
