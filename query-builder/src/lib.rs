// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! The query builder proper: the typed expression tree, tables and joins,
//! clause objects, and the statement assemblers. Everything here builds
//! values; SQL text only exists once a `Statement` terminal is called, which
//! is also where every structural error surfaces.

extern crate squill_sql;

macro_rules! bail {
    ($e:expr) => (
        return Err($e.into())
    )
}

mod clause;
mod column;
mod delete;
mod expression;
mod functions;
mod insert;
mod literal;
mod row;
mod select;
mod set_operation;
mod statement;
mod table;
mod update;

pub use clause::{
    Direction,
    OrderByClause,
    SelectLock,
    SetClause,
    WhereClause,
};

pub use column::Column;

pub use delete::DeleteStatement;

pub use expression::{
    Blob,
    BlobExpression,
    Bool,
    BoolExpression,
    Date,
    DateExpression,
    Expression,
    Float,
    FloatExpression,
    Integer,
    IntegerExpression,
    Projection,
    Text,
    TextExpression,
    Time,
    TimeExpression,
    Timestamp,
    TimestampExpression,
    Timestampz,
    TimestampzExpression,
    Timez,
    TimezExpression,
    TypedExpr,
    Unknown,
    column_list,
};

pub use functions::{
    avg,
    coalesce,
    count,
    lower,
    max,
    min,
    sql_function,
    sum,
    upper,
};

pub use insert::InsertStatement;

pub use literal::{
    boolean,
    constant,
    date,
    float,
    integer,
    null,
    star,
    text,
    time,
    timestamp,
    timestampz,
    timez,
};

pub use row::{
    Record,
    unwind_row_from_model,
    unwind_row_from_values,
};

pub use select::{
    SelectStatement,
    select,
};

pub use set_operation::{
    SetStatement,
    except,
    except_all,
    intersect,
    intersect_all,
    union,
    union_all,
};

pub use statement::Statement;

pub use table::{
    Join,
    JoinKind,
    SubQueryTable,
    Table,
    TableOrSubquery,
};

pub use update::UpdateStatement;
