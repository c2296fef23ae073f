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

/// A type annotation `@? type`.
///
/// The leading `@` marks the annotated value as a resource, i.e.
/// linear and move-only in the semantic pass.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TypeAnnotation {
    /// Whether the annotation carries a resource marker.
    pub is_resource: bool,
    /// The annotated type.
    pub type_: Type,
    /// The span from the marker (or type) to the type.
    pub span: Span,
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_resource {
            write!(f, "@")?;
        }
        self.type_.fmt(f)
    }
}

crate::simple_node_impl!(TypeAnnotation);
