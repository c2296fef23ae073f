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

/// An event declaration `event Name(params)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventDeclaration {
    /// The access modifier.
    pub access: Access,
    /// The event's name.
    pub name: Identifier,
    /// The event's parameters.
    pub parameters: Vec<Parameter>,
    /// The span from the keyword to the closing parenthesis.
    pub span: Span,
}

impl fmt::Display for EventDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_access_prefix(f, &self.access)?;
        write!(f, "event {}({})", self.name, self.parameters.iter().format(", "))
    }
}

crate::simple_node_impl!(EventDeclaration);
