// Copyright 2018 The Squill Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use
// this file except in compliance with the License. You may obtain a copy of the
// License at http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

use squill_sql::{
    BuildQueryResult,
    Dialect,
    ErrorKind,
    Result,
    SqlBuilder,
    StatementType,
    Value,
};

use clause::{
    OrderByClause,
    push_order_by,
};
use select::SelectStatement;
use statement::{
    Statement,
    merge_dialects,
};

/// UNION / INTERSECT / EXCEPT (and the ALL variants) over two or more
/// SELECTs, with an optional outer ORDER BY, LIMIT and OFFSET. The outer
/// ORDER BY can only name projected aliases.
#[derive(Clone, Debug)]
pub struct SetStatement {
    operator: &'static str,
    selects: Vec<SelectStatement>,
    order_by: Vec<OrderByClause>,
    limit: i64,
    offset: i64,
}

fn set_operation(operator: &'static str, selects: Vec<SelectStatement>) -> SetStatement {
    SetStatement {
        operator: operator,
        selects: selects,
        order_by: vec![],
        limit: -1,
        offset: -1,
    }
}

pub fn union(selects: Vec<SelectStatement>) -> SetStatement {
    set_operation("UNION", selects)
}

pub fn union_all(selects: Vec<SelectStatement>) -> SetStatement {
    set_operation("UNION ALL", selects)
}

pub fn intersect(selects: Vec<SelectStatement>) -> SetStatement {
    set_operation("INTERSECT", selects)
}

pub fn intersect_all(selects: Vec<SelectStatement>) -> SetStatement {
    set_operation("INTERSECT ALL", selects)
}

pub fn except(selects: Vec<SelectStatement>) -> SetStatement {
    set_operation("EXCEPT", selects)
}

pub fn except_all(selects: Vec<SelectStatement>) -> SetStatement {
    set_operation("EXCEPT ALL", selects)
}

impl SetStatement {
    pub fn order_by(mut self, clauses: Vec<OrderByClause>) -> SetStatement {
        self.order_by = clauses;
        self
    }

    pub fn limit(mut self, limit: i64) -> SetStatement {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: i64) -> SetStatement {
        self.offset = offset;
        self
    }

    /// The structural rules that make a set operation executable: every
    /// operand projects the same number of columns, and an operand that
    /// orders itself must also bound itself.
    fn validate(&self) -> BuildQueryResult {
        if self.selects.is_empty() {
            bail!(ErrorKind::NoProjection);
        }
        let width = self.selects[0].projection_count();
        for select in &self.selects {
            if select.projection_count() != width {
                bail!(ErrorKind::SetArityMismatch);
            }
            if select.has_order_by() && !select.has_limit() {
                bail!(ErrorKind::SetOrderByWithoutLimit);
            }
        }
        Ok(())
    }
}

impl Statement for SetStatement {
    fn statement_type(&self) -> StatementType {
        StatementType::Set
    }

    fn detected_dialect(&self) -> Result<Option<Dialect>> {
        let mut dialect = None;
        for select in &self.selects {
            dialect = merge_dialects(dialect, select.detected_dialect()?)?;
        }
        Ok(dialect)
    }

    fn push_statement_sql(&self, out: &mut SqlBuilder) -> BuildQueryResult {
        self.validate()?;

        for (i, select) in self.selects.iter().enumerate() {
            if i > 0 {
                out.new_line();
                out.push_sql(self.operator);
                out.new_line();
            }
            select.push_sql_parenthesized(out)?;
        }

        if !self.order_by.is_empty() {
            push_order_by(out, StatementType::Set, &self.order_by)?;
        }

        if self.limit >= 0 {
            out.new_line();
            out.push_sql("LIMIT");
            out.push_parameterized(Value::Integer(self.limit));
        }

        if self.offset >= 0 {
            out.new_line();
            out.push_sql("OFFSET");
            out.push_parameterized(Value::Integer(self.offset));
        }

        Ok(())
    }
}
