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

/// A restricted type `T{I1, I2}`, or `{I1, I2}` without a base type:
/// the base constrained to a set of nominal interface types.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RestrictedType {
    /// The restricted base type, if one was written.
    pub base: Option<Type>,
    /// The restricting interface types.
    pub restrictions: Vec<NominalType>,
    /// The span from the base (or opening brace) to the closing brace.
    pub span: Span,
}

impl fmt::Display for RestrictedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(base) = &self.base {
            base.fmt(f)?;
        }
        write!(f, "{{{}}}", self.restrictions.iter().format(", "))
    }
}

crate::simple_node_impl!(RestrictedType);
