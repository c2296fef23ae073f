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
use crate::StringLiteral;

use itertools::Itertools;

/// An account address literal in import position, e.g. `0x01`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AddressLocation {
    /// The raw source spelling, including the `0x` prefix.
    pub address: String,
    pub span: Span,
}

impl fmt::Display for AddressLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

crate::simple_node_impl!(AddressLocation);

/// Where an import is resolved from.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ImportLocation {
    /// An account address, e.g. `import Token from 0x01`.
    Address(AddressLocation),
    /// A bare identifier, e.g. `import Token`.
    Identifier(Identifier),
    /// A string location, e.g. `import Token from "token"`.
    Str(StringLiteral),
}

impl ImportLocation {
    /// Returns the source range of the location.
    pub fn span(&self) -> Span {
        match self {
            Self::Address(n) => n.span,
            Self::Identifier(n) => n.span,
            Self::Str(n) => n.span,
        }
    }
}

impl fmt::Display for ImportLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Address(n) => n.fmt(f),
            Self::Identifier(n) => n.fmt(f),
            Self::Str(n) => n.fmt(f),
        }
    }
}

/// An import declaration: `import A, B from location`, or a bare
/// `import location`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    /// The imported names; empty when the whole location is imported.
    pub identifiers: Vec<Identifier>,
    /// The location imported from.
    pub location: ImportLocation,
    /// The span from the keyword to the location.
    pub span: Span,
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.identifiers.is_empty() {
            write!(f, "import {}", self.location)
        } else {
            write!(f, "import {} from {}", self.identifiers.iter().format(", "), self.location)
        }
    }
}

crate::simple_node_impl!(ImportDeclaration);
