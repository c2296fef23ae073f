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

use smallvec::SmallVec;

/// A nominal type: a dotted chain of identifiers, e.g. `Token.Vault`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NominalType {
    /// The first identifier of the chain.
    pub name: Identifier,
    /// The identifiers after the first dot, outermost first.
    pub nested: SmallVec<[Identifier; 2]>,
    /// The span of the whole chain.
    pub span: Span,
}

impl fmt::Display for NominalType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.name.fmt(f)?;
        for name in &self.nested {
            write!(f, ".{name}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(NominalType);
