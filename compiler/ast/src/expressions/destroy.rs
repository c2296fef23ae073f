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

/// A resource destruction `destroy expression`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DestroyExpression {
    /// The expression whose value is destroyed.
    pub expression: Box<Expression>,
    /// The span from the keyword to the expression.
    pub span: Span,
}

impl fmt::Display for DestroyExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "destroy {}", self.expression)
    }
}

crate::simple_node_impl!(DestroyExpression);
