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
use crate::IntegerLiteral;

/// A variable-sized array type `[T]`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VariableSizedType {
    /// The element type.
    pub element: Type,
    /// The span from the opening to the closing bracket.
    pub span: Span,
}

impl fmt::Display for VariableSizedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.element)
    }
}

crate::simple_node_impl!(VariableSizedType);

/// A constant-sized array type `[T; N]`.
///
/// The size must be an integer literal; when it is not, the error is
/// recorded and `size` is left empty.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ConstantSizedType {
    /// The element type.
    pub element: Type,
    /// The number of elements.
    pub size: Option<IntegerLiteral>,
    /// The span from the opening to the closing bracket.
    pub span: Span,
}

impl fmt::Display for ConstantSizedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.size {
            Some(size) => write!(f, "[{}; {}]", self.element, size),
            None => write!(f, "[{}; _]", self.element),
        }
    }
}

crate::simple_node_impl!(ConstantSizedType);
