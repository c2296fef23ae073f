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

/// An instantiation `T<A, B>`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct InstantiationType {
    /// The type being instantiated.
    pub base: Type,
    /// The type arguments.
    pub type_arguments: Vec<TypeAnnotation>,
    /// The span from the base type to the closing angle bracket.
    pub span: Span,
}

impl fmt::Display for InstantiationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}<{}>", self.base, self.type_arguments.iter().format(", "))
    }
}

crate::simple_node_impl!(InstantiationType);
