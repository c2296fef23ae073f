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

/// A literal expression.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// A boolean literal, i.e. `true` or `false`.
    Bool(BoolLiteral),
    /// A fixed-point literal, e.g. `3.14`.
    FixedPoint(FixedPointLiteral),
    /// An integer literal in any base.
    Integer(IntegerLiteral),
    /// The `nil` literal.
    Nil(NilLiteral),
    /// A string literal.
    Str(StringLiteral),
}

impl Node for Literal {
    fn span(&self) -> Span {
        use Literal::*;
        match self {
            Bool(n) => n.span(),
            FixedPoint(n) => n.span(),
            Integer(n) => n.span(),
            Nil(n) => n.span(),
            Str(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Literal::*;
        match self {
            Bool(n) => n.set_span(span),
            FixedPoint(n) => n.set_span(span),
            Integer(n) => n.set_span(span),
            Nil(n) => n.set_span(span),
            Str(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Literal::*;
        match self {
            Bool(n) => n.fmt(f),
            FixedPoint(n) => n.fmt(f),
            Integer(n) => n.fmt(f),
            Nil(n) => n.fmt(f),
            Str(n) => n.fmt(f),
        }
    }
}

/// An integer literal.
///
/// `value` holds the decoded digits as a decimal string, independent of
/// the base the literal was written in; `base` records the radix of the
/// source spelling.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IntegerLiteral {
    pub base: u32,
    pub value: String,
    pub span: Span,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

crate::simple_node_impl!(IntegerLiteral);

/// A fixed-point literal, stored as its integer and fractional digit
/// strings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FixedPointLiteral {
    pub integer: String,
    pub fractional: String,
    pub span: Span,
}

impl fmt::Display for FixedPointLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.integer, self.fractional)
    }
}

crate::simple_node_impl!(FixedPointLiteral);

/// A string literal, with escapes already decoded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.value.escape_default())
    }
}

crate::simple_node_impl!(StringLiteral);

/// A boolean literal.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoolLiteral {
    pub value: bool,
    pub span: Span,
}

impl fmt::Display for BoolLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

crate::simple_node_impl!(BoolLiteral);

/// The `nil` literal.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NilLiteral {
    pub span: Span,
}

impl fmt::Display for NilLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "nil")
    }
}

crate::simple_node_impl!(NilLiteral);
