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

mod access;
pub use access::*;

mod composite;
pub use composite::*;

mod event;
pub use event::*;

mod function;
pub use function::*;

mod import;
pub use import::*;

mod transaction;
pub use transaction::*;

mod variable;
pub use variable::*;

/// A declaration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Declaration {
    /// A composite declaration: a struct, resource, or contract.
    Composite(CompositeDeclaration),
    /// An event declaration.
    Event(EventDeclaration),
    /// A function declaration.
    Function(Box<FunctionDeclaration>),
    /// An import declaration.
    Import(ImportDeclaration),
    /// A composite interface declaration.
    Interface(InterfaceDeclaration),
    /// A transaction declaration.
    Transaction(TransactionDeclaration),
    /// A variable declaration.
    Variable(Box<VariableDeclaration>),
}

impl Node for Declaration {
    fn span(&self) -> Span {
        use Declaration::*;
        match self {
            Composite(n) => n.span(),
            Event(n) => n.span(),
            Function(n) => n.span(),
            Import(n) => n.span(),
            Interface(n) => n.span(),
            Transaction(n) => n.span(),
            Variable(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Declaration::*;
        match self {
            Composite(n) => n.set_span(span),
            Event(n) => n.set_span(span),
            Function(n) => n.set_span(span),
            Import(n) => n.set_span(span),
            Interface(n) => n.set_span(span),
            Transaction(n) => n.set_span(span),
            Variable(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Declaration::*;
        match self {
            Composite(n) => n.fmt(f),
            Event(n) => n.fmt(f),
            Function(n) => n.fmt(f),
            Import(n) => n.fmt(f),
            Interface(n) => n.fmt(f),
            Transaction(n) => n.fmt(f),
            Variable(n) => n.fmt(f),
        }
    }
}
