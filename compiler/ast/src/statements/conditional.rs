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
use crate::VariableDeclaration;

/// The test of an `if` statement: a plain condition, or an optional
/// binding `if let x (: T)? <- value`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum IfTest {
    /// A boolean condition.
    Expression(Expression),
    /// An optional binding; the bound declaration carries the
    /// `is_if_binding` marker.
    Binding(Box<VariableDeclaration>),
}

impl fmt::Display for IfTest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Expression(expression) => expression.fmt(f),
            Self::Binding(binding) => binding.fmt(f),
        }
    }
}

/// An `if` statement, with an optional `else` branch.
///
/// `else if` chains are folded into nested `if`s from the right, so
/// the `otherwise` branch is always a block or another `if`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    /// The test deciding which branch runs.
    pub test: IfTest,
    /// The branch taken when the test holds.
    pub then: Block,
    /// The `else` branch: a block or a nested `if`, if any.
    pub otherwise: Option<Box<Statement>>,
    /// The span from the keyword to the last branch.
    pub span: Span,
}

impl fmt::Display for IfStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "if {} {}", self.test, self.then)?;
        if let Some(otherwise) = &self.otherwise {
            write!(f, " else {otherwise}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(IfStatement);
