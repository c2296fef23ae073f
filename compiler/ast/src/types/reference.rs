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

/// A reference type `&T`, or `auth &T` when authorized.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReferenceType {
    /// Whether the reference is authorized, i.e. prefixed with `auth`.
    pub authorized: bool,
    /// The referenced type.
    pub inner: Type,
    /// The span from the `auth` keyword or ampersand to the inner type.
    pub span: Span,
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.authorized {
            write!(f, "auth ")?;
        }
        write!(f, "&{}", self.inner)
    }
}

crate::simple_node_impl!(ReferenceType);
