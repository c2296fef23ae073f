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

/// A casting operator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CastOperation {
    /// Static cast, i.e. `as`.
    Cast,
    /// Failable cast, i.e. `as?`.
    FailableCast,
    /// Forced cast, i.e. `as!`.
    ForceCast,
}

impl fmt::Display for CastOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Cast => "as",
            Self::FailableCast => "as?",
            Self::ForceCast => "as!",
        })
    }
}

/// A cast `expression as T`, `expression as? T`, or `expression as! T`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CastExpression {
    /// The expression being cast.
    pub expression: Box<Expression>,
    /// The casting operator.
    pub operation: CastOperation,
    /// The target type.
    pub type_annotation: TypeAnnotation,
    /// The span from the expression to the type.
    pub span: Span,
}

impl fmt::Display for CastExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.expression, self.operation, self.type_annotation)
    }
}

crate::simple_node_impl!(CastExpression);
