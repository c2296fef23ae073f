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
use crate::{FunctionBlock, Parameter, TypeAnnotation};

use itertools::Itertools;

/// A function expression `fun (params): T { ... }`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FunctionExpression {
    /// The parameters, in source order.
    pub parameters: Vec<Parameter>,
    /// The return type, if one was written.
    pub return_type: Option<TypeAnnotation>,
    /// The body, with optional condition sections.
    pub body: FunctionBlock,
    /// The span from the keyword to the closing brace.
    pub span: Span,
}

impl fmt::Display for FunctionExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fun ({})", self.parameters.iter().format(", "))?;
        if let Some(return_type) = &self.return_type {
            write!(f, ": {return_type}")?;
        }
        write!(f, " {}", self.body)
    }
}

crate::simple_node_impl!(FunctionExpression);
