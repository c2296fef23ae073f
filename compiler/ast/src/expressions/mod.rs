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

use crate::{Identifier, Node};

use loam_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

mod array;
pub use array::*;

mod binary;
pub use binary::*;

mod cast;
pub use cast::*;

mod conditional;
pub use conditional::*;

mod create;
pub use create::*;

mod destroy;
pub use destroy::*;

mod dictionary;
pub use dictionary::*;

mod force;
pub use force::*;

mod function;
pub use function::*;

mod index;
pub use index::*;

mod invocation;
pub use invocation::*;

mod literal;
pub use literal::*;

mod member;
pub use member::*;

mod path;
pub use path::*;

mod reference;
pub use reference::*;

mod unary;
pub use unary::*;

/// Expression that evaluates to a value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// An array literal, e.g. `[1, 2, 3]`.
    Array(ArrayExpression),
    /// A binary expression, e.g. `1 + 2`.
    Binary(BinaryExpression),
    /// A cast, e.g. `x as? Int`.
    Cast(CastExpression),
    /// A conditional expression, e.g. `a ? b : c`.
    Conditional(ConditionalExpression),
    /// A resource construction, e.g. `create Counter(0)`.
    Create(CreateExpression),
    /// A resource destruction, e.g. `destroy vault`.
    Destroy(DestroyExpression),
    /// A dictionary literal, e.g. `{"a": 1}`.
    Dictionary(DictionaryExpression),
    /// A force unwrap, e.g. `maybe!`.
    Force(ForceExpression),
    /// A function expression, e.g. `fun (x: Int): Int { return x }`.
    Function(Box<FunctionExpression>),
    /// An identifier expression.
    Identifier(Identifier),
    /// An index expression, e.g. `xs[0]`.
    Index(IndexExpression),
    /// An invocation, e.g. `f<T>(1, label: 2)`.
    Invocation(InvocationExpression),
    /// A literal expression.
    Literal(Literal),
    /// A member access, e.g. `a.b` or `a?.b`.
    Member(MemberExpression),
    /// A storage path, e.g. `/storage/vault`.
    Path(PathExpression),
    /// A reference expression, e.g. `&v as &Vault`.
    Reference(ReferenceExpression),
    /// A unary prefix expression, e.g. `-x`.
    Unary(UnaryExpression),
}

impl Node for Expression {
    fn span(&self) -> Span {
        use Expression::*;
        match self {
            Array(n) => n.span(),
            Binary(n) => n.span(),
            Cast(n) => n.span(),
            Conditional(n) => n.span(),
            Create(n) => n.span(),
            Destroy(n) => n.span(),
            Dictionary(n) => n.span(),
            Force(n) => n.span(),
            Function(n) => n.span(),
            Identifier(n) => n.span(),
            Index(n) => n.span(),
            Invocation(n) => n.span(),
            Literal(n) => n.span(),
            Member(n) => n.span(),
            Path(n) => n.span(),
            Reference(n) => n.span(),
            Unary(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            Array(n) => n.set_span(span),
            Binary(n) => n.set_span(span),
            Cast(n) => n.set_span(span),
            Conditional(n) => n.set_span(span),
            Create(n) => n.set_span(span),
            Destroy(n) => n.set_span(span),
            Dictionary(n) => n.set_span(span),
            Force(n) => n.set_span(span),
            Function(n) => n.set_span(span),
            Identifier(n) => n.set_span(span),
            Index(n) => n.set_span(span),
            Invocation(n) => n.set_span(span),
            Literal(n) => n.set_span(span),
            Member(n) => n.set_span(span),
            Path(n) => n.set_span(span),
            Reference(n) => n.set_span(span),
            Unary(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Expression::*;
        match self {
            Array(n) => n.fmt(f),
            Binary(n) => n.fmt(f),
            Cast(n) => n.fmt(f),
            Conditional(n) => n.fmt(f),
            Create(n) => n.fmt(f),
            Destroy(n) => n.fmt(f),
            Dictionary(n) => n.fmt(f),
            Force(n) => n.fmt(f),
            Function(n) => n.fmt(f),
            Identifier(n) => n.fmt(f),
            Index(n) => n.fmt(f),
            Invocation(n) => n.fmt(f),
            Literal(n) => n.fmt(f),
            Member(n) => n.fmt(f),
            Path(n) => n.fmt(f),
            Reference(n) => n.fmt(f),
            Unary(n) => n.fmt(f),
        }
    }
}
