// Copyright (C) 2021-2024 Loam Systems Inc.
// This file is part of the Loam library.

// The Loam library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Loam library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Loam library. If not, see <https://www.gnu.org/licenses/>.

use super::*;

use itertools::Itertools;

/// A transaction declaration: parameters, fields, and the `prepare`,
/// `pre`, `execute`, and `post` phases, all optional.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransactionDeclaration {
    /// The transaction's parameters.
    pub parameters: Vec<Parameter>,
    /// The fields declared in the body.
    pub fields: Vec<FieldDeclaration>,
    /// The `prepare` phase, if any.
    pub prepare: Option<SpecialFunctionDeclaration>,
    /// The `pre { ... }` section, if any.
    pub pre_conditions: Option<Vec<Condition>>,
    /// The `execute` phase, if any.
    pub execute: Option<SpecialFunctionDeclaration>,
    /// The `post { ... }` section, if any.
    pub post_conditions: Option<Vec<Condition>>,
    /// The span from the keyword to the closing brace.
    pub span: Span,
}

impl fmt::Display for TransactionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "transaction")?;
        if !self.parameters.is_empty() {
            write!(f, "({})", self.parameters.iter().format(", "))?;
        }
        writeln!(f, " {{")?;
        for field in &self.fields {
            writeln!(f, "    {field}")?;
        }
        if let Some(prepare) = &self.prepare {
            writeln!(f, "    {prepare}")?;
        }
        if let Some(conditions) = &self.pre_conditions {
            writeln!(f, "    pre {{ {} }}", conditions.iter().format("; "))?;
        }
        if let Some(execute) = &self.execute {
            writeln!(f, "    {execute}")?;
        }
        if let Some(conditions) = &self.post_conditions {
            writeln!(f, "    post {{ {} }}", conditions.iter().format("; "))?;
        }
        write!(f, "}}")
    }
}

crate::simple_node_impl!(TransactionDeclaration);
