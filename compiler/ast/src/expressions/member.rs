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

/// A member access `object.name`, or `object?.name` when `optional` is
/// set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MemberExpression {
    /// The expression the member is accessed on.
    pub object: Box<Expression>,
    /// Whether the access is optional-chaining, i.e. `?.`.
    pub optional: bool,
    /// The accessed member's name.
    pub name: Identifier,
    /// The span from `object` to `name`.
    pub span: Span,
}

impl fmt::Display for MemberExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let access = if self.optional { "?." } else { "." };
        write!(f, "{}{}{}", self.object, access, self.name)
    }
}

crate::simple_node_impl!(MemberExpression);
