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

/// A binary operator.
///
/// Precedence and associativity are defined in the parser.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BinaryOperation {
    /// Addition, i.e. `+`.
    Add,
    /// Logical AND, i.e. `&&`.
    And,
    /// Bitwise AND, i.e. `&`.
    BitwiseAnd,
    /// Bitwise OR, i.e. `|`.
    BitwiseOr,
    /// Division, i.e. `/`.
    Div,
    /// Equality relation, i.e. `==`.
    Eq,
    /// Greater-than relation, i.e. `>`.
    Gt,
    /// Greater-or-equal relation, i.e. `>=`.
    Gte,
    /// Lesser-than relation, i.e. `<`.
    Lt,
    /// Lesser-or-equal relation, i.e. `<=`.
    Lte,
    /// Multiplication, i.e. `*`.
    Mul,
    /// In-equality relation, i.e. `!=`.
    Neq,
    /// Nil coalescing, i.e. `??`.
    NilCoalesce,
    /// Logical OR, i.e. `||`.
    Or,
    /// Remainder, i.e. `%`.
    Rem,
    /// Shift left, i.e. `<<`.
    Shl,
    /// Shift right, i.e. `>>`.
    Shr,
    /// Subtraction, i.e. `-`.
    Sub,
    /// Bitwise XOR, i.e. `^`.
    Xor,
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Add => "+",
            Self::And => "&&",
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::Div => "/",
            Self::Eq => "==",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Mul => "*",
            Self::Neq => "!=",
            Self::NilCoalesce => "??",
            Self::Or => "||",
            Self::Rem => "%",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Sub => "-",
            Self::Xor => "^",
        })
    }
}

/// A binary expression `left op right`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    /// The left operand.
    pub left: Box<Expression>,
    /// The operator applied to the operands.
    pub op: BinaryOperation,
    /// The right operand.
    pub right: Box<Expression>,
    /// The span from `left` to `right`.
    pub span: Span,
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

crate::simple_node_impl!(BinaryExpression);
