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
use crate::{Block, Expression, Node, TypeAnnotation};

use itertools::Itertools;

/// A function parameter `label? name: Type`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// The argument label callers must use, if distinct from the name.
    pub label: Option<Identifier>,
    /// The parameter's name inside the function.
    pub name: Identifier,
    /// The parameter's type.
    pub type_annotation: TypeAnnotation,
    /// The span from the label (or name) to the type.
    pub span: Span,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label} ")?;
        }
        write!(f, "{}: {}", self.name, self.type_annotation)
    }
}

crate::simple_node_impl!(Parameter);

/// A single entry of a `pre` or `post` section:
/// `<test>` or `<test>: <message>`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// The asserted expression.
    pub test: Expression,
    /// The message reported when the test fails, if any.
    pub message: Option<Expression>,
    /// The span from the test to the message.
    pub span: Span,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.test.fmt(f)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(Condition);

/// A function body: optional `pre` and `post` condition sections
/// followed by the statements.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FunctionBlock {
    /// The `pre { ... }` section, if any.
    pub pre_conditions: Option<Vec<Condition>>,
    /// The `post { ... }` section, if any.
    pub post_conditions: Option<Vec<Condition>>,
    /// The statements of the body.
    pub block: Block,
    /// The span from the opening to the closing brace.
    pub span: Span,
}

impl fmt::Display for FunctionBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{{")?;
        if let Some(conditions) = &self.pre_conditions {
            writeln!(f, "    pre {{ {} }}", conditions.iter().format("; "))?;
        }
        if let Some(conditions) = &self.post_conditions {
            writeln!(f, "    post {{ {} }}", conditions.iter().format("; "))?;
        }
        for statement in &self.block.statements {
            writeln!(f, "    {statement}")?;
        }
        write!(f, "}}")
    }
}

crate::simple_node_impl!(FunctionBlock);

/// A function declaration.
///
/// The body is absent for interface requirements.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// The access modifier.
    pub access: Access,
    /// The function's name.
    pub name: Identifier,
    /// The parameters, in source order.
    pub parameters: Vec<Parameter>,
    /// The return type, if one was written.
    pub return_type: Option<TypeAnnotation>,
    /// The body, if one was written.
    pub body: Option<FunctionBlock>,
    /// The span from the keyword to the closing brace.
    pub span: Span,
}

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_access_prefix(f, &self.access)?;
        write!(f, "fun {}({})", self.name, self.parameters.iter().format(", "))?;
        if let Some(return_type) = &self.return_type {
            write!(f, ": {return_type}")?;
        }
        if let Some(body) = &self.body {
            write!(f, " {body}")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(FunctionDeclaration);
