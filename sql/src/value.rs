// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

use ordered_float::OrderedFloat;

/// A host value bound to a statement: the kind of thing that ends up in the
/// argument vector handed to a database driver.
///
/// We use `OrderedFloat` so that argument vectors are comparable; drivers
/// receive the plain `f64` inside.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Double(OrderedFloat<f64>),
    Text(String),
}

impl Value {
    /// Render this value as an inline SQL literal. Only the debug serializer
    /// and explicitly constant literals take this path; everything else is
    /// hoisted as a positional parameter.
    pub fn to_sql_literal(&self) -> String {
        match self {
            &Value::Boolean(b) => if b { "TRUE".to_string() } else { "FALSE".to_string() },
            &Value::Integer(i) => i.to_string(),
            &Value::Double(OrderedFloat(d)) => d.to_string(),
            &Value::Text(ref t) => format!("'{}'", t.replace("'", "''")),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Double(OrderedFloat(v))
    }
}

impl<'a> From<&'a str> for Value {
    fn from(v: &'a str) -> Value {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Text(v)
    }
}
