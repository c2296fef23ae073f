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

use crate::{Expression, Identifier, Node};

use loam_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

mod assign;
pub use assign::*;

mod block;
pub use block::*;

mod break_;
pub use break_::*;

mod conditional;
pub use conditional::*;

mod continue_;
pub use continue_::*;

mod emit;
pub use emit::*;

mod expression;
pub use expression::*;

mod for_;
pub use for_::*;

mod return_;
pub use return_::*;

mod swap;
pub use swap::*;

mod while_;
pub use while_::*;

use crate::Declaration;

/// A statement: an action to carry out, or a declaration in statement
/// position.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// An assignment, e.g. `x.y = 1` or `r <- create R()`.
    Assign(Box<AssignStatement>),
    /// A brace-delimited block of statements.
    Block(Block),
    /// A `break` statement.
    Break(BreakStatement),
    /// A `continue` statement.
    Continue(ContinueStatement),
    /// A declaration in statement position, e.g. `let x = 1`.
    Declaration(Box<Declaration>),
    /// An `emit` statement.
    Emit(EmitStatement),
    /// An expression standing alone as a statement.
    Expression(ExpressionStatement),
    /// A `for ... in` statement.
    For(Box<ForStatement>),
    /// An `if` statement.
    If(Box<IfStatement>),
    /// A `return` statement.
    Return(ReturnStatement),
    /// A swap statement, e.g. `a <-> b`.
    Swap(Box<SwapStatement>),
    /// A `while` statement.
    While(Box<WhileStatement>),
}

impl Node for Statement {
    fn span(&self) -> Span {
        use Statement::*;
        match self {
            Assign(n) => n.span(),
            Block(n) => n.span(),
            Break(n) => n.span(),
            Continue(n) => n.span(),
            Declaration(n) => n.span(),
            Emit(n) => n.span(),
            Expression(n) => n.span(),
            For(n) => n.span(),
            If(n) => n.span(),
            Return(n) => n.span(),
            Swap(n) => n.span(),
            While(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Statement::*;
        match self {
            Assign(n) => n.set_span(span),
            Block(n) => n.set_span(span),
            Break(n) => n.set_span(span),
            Continue(n) => n.set_span(span),
            Declaration(n) => n.set_span(span),
            Emit(n) => n.set_span(span),
            Expression(n) => n.set_span(span),
            For(n) => n.set_span(span),
            If(n) => n.set_span(span),
            Return(n) => n.set_span(span),
            Swap(n) => n.set_span(span),
            While(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Statement::*;
        match self {
            Assign(n) => n.fmt(f),
            Block(n) => n.fmt(f),
            Break(n) => n.fmt(f),
            Continue(n) => n.fmt(f),
            Declaration(n) => n.fmt(f),
            Emit(n) => n.fmt(f),
            Expression(n) => n.fmt(f),
            For(n) => n.fmt(f),
            If(n) => n.fmt(f),
            Return(n) => n.fmt(f),
            Swap(n) => n.fmt(f),
            While(n) => n.fmt(f),
        }
    }
}
