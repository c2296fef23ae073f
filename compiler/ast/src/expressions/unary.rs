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

/// A unary prefix operator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum UnaryOperation {
    /// Move, i.e. `<-`.
    Move,
    /// Arithmetic negation, i.e. `-`.
    Negate,
    /// Logical negation, i.e. `!`.
    Not,
    /// Unary plus, i.e. `+`.
    Plus,
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Move => "<-",
            Self::Negate => "-",
            Self::Not => "!",
            Self::Plus => "+",
        })
    }
}

/// A unary prefix expression `op operand`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    /// The operator applied to `operand`.
    pub op: UnaryOperation,
    /// The operand `op` is applied to.
    pub operand: Box<Expression>,
    /// The span from the operator to the operand.
    pub span: Span,
}

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.op, self.operand)
    }
}

crate::simple_node_impl!(UnaryExpression);
