// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! The output layer of the query builder: a single mutable `SqlBuilder` is
//! threaded through the serialization of a statement tree, accumulating SQL
//! text and the hoisted argument vector side by side. Nodes implement
//! `QueryFragment` and write themselves into the builder; nothing in here
//! knows what a SELECT is.

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate ordered_float;

mod dialect;
pub mod errors;
mod value;

pub use dialect::Dialect;
pub use errors::{
    BuildQueryResult,
    Error,
    ErrorKind,
    Result,
};
pub use value::Value;

/// Which kind of statement a serialization walk belongs to. Passed down as an
/// argument — some nodes (notably columns in ORDER BY position) render
/// differently depending on the statement they are embedded in.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StatementType {
    Select,
    Insert,
    Update,
    Delete,
    Set,
}

/// The product of a serialization walk: the SQL text and the argument values
/// hoisted out of it, in placeholder order. The caller owns both from here on.
#[derive(Clone, Debug, PartialEq)]
pub struct SqlQuery {
    pub sql: String,
    pub args: Vec<Value>,
}

/// A node that can write itself into a `SqlBuilder`.
pub trait QueryFragment {
    fn push_sql(&self, out: &mut SqlBuilder, statement: StatementType) -> BuildQueryResult;
}

/// Spaces per indentation level. Projection continuations and joins land at
/// one level; each nested subquery adds another.
const INDENT_WIDTH: usize = 5;

/// Accumulates SQL text, indentation state, and hoisted arguments for one
/// statement. Owned by a single serialization call; never shared.
pub struct SqlBuilder {
    dialect: Dialect,
    sql: String,
    indent: usize,
    args: Vec<Value>,

    // When set, every would-be placeholder is rendered as an inline literal
    // instead. This is the debug serializer; its output is never executed.
    inline_arguments: bool,
}

impl SqlBuilder {
    pub fn new(dialect: Dialect) -> SqlBuilder {
        SqlBuilder {
            dialect: dialect,
            sql: String::new(),
            indent: 0,
            args: vec![],
            inline_arguments: false,
        }
    }

    pub fn with_inlined_arguments(dialect: Dialect) -> SqlBuilder {
        let mut builder = SqlBuilder::new(dialect);
        builder.inline_arguments = true;
        builder
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Append `sql`, preceded by a single space unless the previous character
    /// already separates tokens. Keywords, identifiers and placeholders all
    /// come through here, which is how tokens stay one space apart without
    /// explicit space tokens anywhere in the tree.
    pub fn push_sql(&mut self, sql: &str) {
        match self.sql.as_bytes().last() {
            None | Some(&b' ') | Some(&b'\n') | Some(&b'(') | Some(&b'.') => (),
            Some(_) => self.sql.push(' '),
        }
        self.sql.push_str(sql);
    }

    /// Raw append, no spacing. Commas, dots and closing parentheses.
    pub fn push_char(&mut self, c: char) {
        self.sql.push(c);
    }

    /// Emit an identifier, quoting it with the dialect's quote character when
    /// it contains anything beyond lowercase alphanumerics and underscores.
    /// A dotted name (a subquery column's qualified alias) therefore comes out
    /// quoted as a single token.
    pub fn push_identifier(&mut self, identifier: &str) {
        if identifier_needs_quoting(identifier) {
            let quote = self.dialect.quote_char();
            let mut quoted = String::with_capacity(identifier.len() + 2);
            quoted.push(quote);
            for c in identifier.chars() {
                if c == quote {
                    quoted.push(quote);
                }
                quoted.push(c);
            }
            quoted.push(quote);
            self.push_sql(&quoted);
        } else {
            self.push_sql(identifier);
        }
    }

    /// Emit a projection alias. Aliases are always double-quoted, in both
    /// dialects, so that UNION-member ORDER BY references resolve the same
    /// way everywhere.
    pub fn push_alias(&mut self, alias: &str) {
        let quoted = format!("\"{}\"", alias.replace('"', "\"\""));
        self.push_sql(&quoted);
    }

    /// Hoist `value`: emit the dialect's positional placeholder and record the
    /// value in the argument vector. Under the debug serializer the value is
    /// inlined instead and the argument vector stays empty.
    pub fn push_parameterized(&mut self, value: Value) {
        if self.inline_arguments {
            self.push_constant(value);
            return;
        }
        self.args.push(value);
        let placeholder = self.dialect.placeholder(self.args.len());
        self.push_sql(&placeholder);
    }

    /// Inline `value` as a SQL literal regardless of mode.
    pub fn push_constant(&mut self, value: Value) {
        let literal = value.to_sql_literal();
        self.push_sql(&literal);
    }

    pub fn new_line(&mut self) {
        self.sql.push('\n');
        for _ in 0..(self.indent * INDENT_WIDTH) {
            self.sql.push(' ');
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    pub fn decrease_indent(&mut self) {
        if self.indent > 0 {
            self.indent -= 1;
        }
    }

    pub fn finish(self) -> SqlQuery {
        debug!("serialized statement: {}", self.sql);
        SqlQuery {
            sql: self.sql,
            args: self.args,
        }
    }
}

fn identifier_needs_quoting(identifier: &str) -> bool {
    identifier.is_empty() ||
        !identifier.chars().all(|c| {
            (c >= 'a' && c <= 'z') || (c >= '0' && c <= '9') || c == '_'
        })
}
