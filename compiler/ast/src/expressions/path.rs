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

/// A path expression `/domain/identifier`, e.g. `/storage/vault`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PathExpression {
    /// The path's domain, e.g. `storage`.
    pub domain: Identifier,
    /// The identifier within the domain.
    pub identifier: Identifier,
    /// The span from the leading slash to the identifier.
    pub span: Span,
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}/{}", self.domain, self.identifier)
    }
}

crate::simple_node_impl!(PathExpression);
