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
use crate::TypeAnnotation;

use itertools::Itertools;

/// A single argument of an invocation: an optionally labelled
/// expression, e.g. `to: recipient`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// The argument label, if any. Its range is the identifier's.
    pub label: Option<Identifier>,
    /// The argument value.
    pub expression: Expression,
    /// The span from the label (or value) to the value.
    pub span: Span,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {}", label, self.expression),
            None => self.expression.fmt(f),
        }
    }
}

crate::simple_node_impl!(Argument);

/// An invocation `callee<T1, T2>(arg1, label: arg2)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct InvocationExpression {
    /// The expression being invoked.
    pub callee: Box<Expression>,
    /// The type arguments; empty when no `<...>` list was written.
    pub type_arguments: Vec<TypeAnnotation>,
    /// The arguments, in source order.
    pub arguments: Vec<Argument>,
    /// The span from the callee to the closing parenthesis.
    pub span: Span,
}

impl fmt::Display for InvocationExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.callee.fmt(f)?;
        if !self.type_arguments.is_empty() {
            write!(f, "<{}>", self.type_arguments.iter().format(", "))?;
        }
        write!(f, "({})", self.arguments.iter().format(", "))
    }
}

crate::simple_node_impl!(InvocationExpression);
