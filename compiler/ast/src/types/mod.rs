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

mod annotation;
pub use annotation::*;

mod array;
pub use array::*;

mod dictionary;
pub use dictionary::*;

mod function;
pub use function::*;

mod instantiation;
pub use instantiation::*;

mod nominal;
pub use nominal::*;

mod optional;
pub use optional::*;

mod reference;
pub use reference::*;

mod restricted;
pub use restricted::*;

/// A type in source syntax.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Type {
    /// A constant-sized array type, e.g. `[Int; 3]`.
    ConstantSized(Box<ConstantSizedType>),
    /// A dictionary type, e.g. `{String: Int}`.
    Dictionary(Box<DictionaryType>),
    /// A function type, e.g. `(Int, Int): Bool`.
    Function(Box<FunctionType>),
    /// An instantiation, e.g. `Capability<&Vault>`.
    Instantiation(Box<InstantiationType>),
    /// A nominal type, e.g. `Token.Vault`.
    Nominal(NominalType),
    /// An optional type, e.g. `Int?`.
    Optional(Box<OptionalType>),
    /// A reference type, e.g. `&Vault` or `auth &Vault`.
    Reference(Box<ReferenceType>),
    /// A restricted type, e.g. `Vault{Provider}` or `{Provider}`.
    Restricted(Box<RestrictedType>),
    /// A variable-sized array type, e.g. `[Int]`.
    VariableSized(Box<VariableSizedType>),
}

impl Node for Type {
    fn span(&self) -> Span {
        use Type::*;
        match self {
            ConstantSized(n) => n.span(),
            Dictionary(n) => n.span(),
            Function(n) => n.span(),
            Instantiation(n) => n.span(),
            Nominal(n) => n.span(),
            Optional(n) => n.span(),
            Reference(n) => n.span(),
            Restricted(n) => n.span(),
            VariableSized(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Type::*;
        match self {
            ConstantSized(n) => n.set_span(span),
            Dictionary(n) => n.set_span(span),
            Function(n) => n.set_span(span),
            Instantiation(n) => n.set_span(span),
            Nominal(n) => n.set_span(span),
            Optional(n) => n.set_span(span),
            Reference(n) => n.set_span(span),
            Restricted(n) => n.set_span(span),
            VariableSized(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Type::*;
        match self {
            ConstantSized(n) => n.fmt(f),
            Dictionary(n) => n.fmt(f),
            Function(n) => n.fmt(f),
            Instantiation(n) => n.fmt(f),
            Nominal(n) => n.fmt(f),
            Optional(n) => n.fmt(f),
            Reference(n) => n.fmt(f),
            Restricted(n) => n.fmt(f),
            VariableSized(n) => n.fmt(f),
        }
    }
}
