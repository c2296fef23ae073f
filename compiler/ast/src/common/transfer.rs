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

use crate::Node;

use loam_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a value moves from the right-hand side to the left-hand side of
/// a variable declaration or assignment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TransferOperation {
    /// Copy transfer, i.e. `=`.
    Copy,
    /// Move transfer, i.e. `<-`.
    Move,
    /// Forced move transfer, i.e. `<-!`.
    MoveForced,
}

impl fmt::Display for TransferOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "="),
            Self::Move => write!(f, "<-"),
            Self::MoveForced => write!(f, "<-!"),
        }
    }
}

/// A transfer operator together with its source range.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    pub operation: TransferOperation,
    pub span: Span,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.operation.fmt(f)
    }
}

crate::simple_node_impl!(Transfer);
