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
use crate::{Expression, Transfer, TypeAnnotation};

/// A variable declaration `let`/`var`, with an optional second
/// transfer/value pair, e.g. `let r2 <- create R() <- old`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// The access modifier.
    pub access: Access,
    /// `true` for `let`, `false` for `var`.
    pub is_constant: bool,
    /// The declared name.
    pub name: Identifier,
    /// The declared type, if one was written.
    pub type_annotation: Option<TypeAnnotation>,
    /// The transfer between the name and the value.
    pub transfer: Transfer,
    /// The initial value.
    pub value: Expression,
    /// The second transfer, if any.
    pub second_transfer: Option<Transfer>,
    /// The value after the second transfer, if any.
    pub second_value: Option<Expression>,
    /// Whether this declaration is the binding of an `if let`
    /// statement. Syntactic marker only; the semantic pass recovers
    /// the owning statement from traversal context.
    pub is_if_binding: bool,
    /// The span from the keyword to the last value.
    pub span: Span,
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_access_prefix(f, &self.access)?;
        let keyword = if self.is_constant { "let" } else { "var" };
        write!(f, "{keyword} {}", self.name)?;
        if let Some(type_annotation) = &self.type_annotation {
            write!(f, ": {type_annotation}")?;
        }
        write!(f, " {} {}", self.transfer, self.value)?;
        if let (Some(transfer), Some(value)) = (&self.second_transfer, &self.second_value) {
            write!(f, " {transfer} {value}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(VariableDeclaration);
