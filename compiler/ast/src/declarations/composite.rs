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
use crate::{NominalType, TypeAnnotation};

use itertools::Itertools;

/// The kind of a composite or composite interface.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CompositeKind {
    Struct,
    Resource,
    Contract,
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Struct => "struct",
            Self::Resource => "resource",
            Self::Contract => "contract",
        })
    }
}

/// A field of a composite, interface, or transaction:
/// `let`/`var` name and type, with no initializer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    /// The access modifier.
    pub access: Access,
    /// `true` for `let`, `false` for `var`.
    pub is_constant: bool,
    /// The field's name.
    pub name: Identifier,
    /// The field's type.
    pub type_annotation: TypeAnnotation,
    /// The span from the keyword to the type.
    pub span: Span,
}

impl fmt::Display for FieldDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_access_prefix(f, &self.access)?;
        let keyword = if self.is_constant { "let" } else { "var" };
        write!(f, "{keyword} {}: {}", self.name, self.type_annotation)
    }
}

crate::simple_node_impl!(FieldDeclaration);

/// The kind of a special function.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SpecialFunctionKind {
    /// An `init` initializer.
    Init,
    /// A `destroy` destructor.
    Destroy,
    /// A transaction's `prepare` block.
    Prepare,
    /// A transaction's `execute` block.
    Execute,
}

impl fmt::Display for SpecialFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Init => "init",
            Self::Destroy => "destroy",
            Self::Prepare => "prepare",
            Self::Execute => "execute",
        })
    }
}

/// A special function: an initializer, destructor, or one of a
/// transaction's phase blocks. Written without the `fun` keyword.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SpecialFunctionDeclaration {
    /// Which special function this is.
    pub kind: SpecialFunctionKind,
    /// The parameters, in source order.
    pub parameters: Vec<Parameter>,
    /// The body, if one was written.
    pub body: Option<FunctionBlock>,
    /// The span from the keyword to the closing brace.
    pub span: Span,
}

impl fmt::Display for SpecialFunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.parameters.iter().format(", "))?;
        if let Some(body) = &self.body {
            write!(f, " {body}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(SpecialFunctionDeclaration);

/// A member of a composite or interface body.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum MemberDeclaration {
    /// A field.
    Field(FieldDeclaration),
    /// A regular function; interfaces may omit the body.
    Function(FunctionDeclaration),
    /// An `init` or `destroy` special function.
    SpecialFunction(SpecialFunctionDeclaration),
}

impl Node for MemberDeclaration {
    fn span(&self) -> Span {
        match self {
            Self::Field(n) => n.span(),
            Self::Function(n) => n.span(),
            Self::SpecialFunction(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Self::Field(n) => n.set_span(span),
            Self::Function(n) => n.set_span(span),
            Self::SpecialFunction(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for MemberDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Field(n) => n.fmt(f),
            Self::Function(n) => n.fmt(f),
            Self::SpecialFunction(n) => n.fmt(f),
        }
    }
}

fn write_members(f: &mut fmt::Formatter, members: &[MemberDeclaration]) -> fmt::Result {
    if members.is_empty() {
        return write!(f, "{{}}");
    }
    writeln!(f, "{{")?;
    for member in members {
        writeln!(f, "    {member}")?;
    }
    write!(f, "}}")
}

/// A composite declaration: a struct, resource, or contract, with its
/// conformances and members.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompositeDeclaration {
    /// The access modifier.
    pub access: Access,
    /// The composite's kind.
    pub kind: CompositeKind,
    /// The composite's name.
    pub name: Identifier,
    /// The interfaces the composite conforms to.
    pub conformances: Vec<NominalType>,
    /// The members of the body.
    pub members: Vec<MemberDeclaration>,
    /// The span from the keyword to the closing brace.
    pub span: Span,
}

impl fmt::Display for CompositeDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_access_prefix(f, &self.access)?;
        write!(f, "{} {}", self.kind, self.name)?;
        if !self.conformances.is_empty() {
            write!(f, ": {}", self.conformances.iter().format(", "))?;
        }
        write!(f, " ")?;
        write_members(f, &self.members)
    }
}

crate::simple_node_impl!(CompositeDeclaration);

/// A composite interface declaration, e.g. `resource interface
/// Provider { ... }`. Functions in the body may omit their bodies.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDeclaration {
    /// The access modifier.
    pub access: Access,
    /// The kind of composite the interface constrains.
    pub kind: CompositeKind,
    /// The interface's name.
    pub name: Identifier,
    /// The members of the body.
    pub members: Vec<MemberDeclaration>,
    /// The span from the keyword to the closing brace.
    pub span: Span,
}

impl fmt::Display for InterfaceDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_access_prefix(f, &self.access)?;
        write!(f, "{} interface {} ", self.kind, self.name)?;
        write_members(f, &self.members)
    }
}

crate::simple_node_impl!(InterfaceDeclaration);
