// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! Turning user data into VALUES rows and SET value lists.

use std::collections::BTreeMap;

use squill_sql::{
    ErrorKind,
    Result,
    Value,
};

use expression::Expression;

/// Something that can supply a host value for a named column. The naming
/// convention is the simplest one: keys are exactly the column names. Extra
/// keys are ignored.
pub trait Record {
    fn value(&self, column: &str) -> Option<Value>;
}

impl Record for BTreeMap<String, Value> {
    fn value(&self, column: &str) -> Option<Value> {
        self.get(column).cloned()
    }
}

/// Produce one row aligned to `columns`, reading each column's value from the
/// record. A missing value is NULL for a nullable column and an error for a
/// non-nullable one.
pub fn unwind_row_from_model<R: Record + ?Sized>(columns: &[Expression],
                                                 record: &R)
                                                 -> Result<Vec<Expression>> {
    let mut row = Vec::with_capacity(columns.len());
    for column in columns {
        let column = match column {
            &Expression::Column(ref c) => c,
            _ => bail!(ErrorKind::InvalidColumnList),
        };
        match record.value(column.name()) {
            Some(value) => row.push(Expression::Literal {
                value: value,
                constant: false,
            }),
            None => {
                if column.is_not_null() {
                    bail!(ErrorKind::MissingColumnValue(column.name().to_string()));
                }
                row.push(Expression::Null);
            },
        }
    }
    Ok(row)
}

/// Wrap plain host values into a row of parameterized literals.
pub fn unwind_row_from_values<V: Into<Value>>(values: Vec<V>) -> Vec<Expression> {
    values.into_iter()
          .map(|value| Expression::Literal {
              value: value.into(),
              constant: false,
          })
          .collect()
}
