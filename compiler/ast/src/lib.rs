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

//! The abstract syntax tree of the Loam programming language.
//!
//! Every node carries the source range it was parsed from and is
//! exclusively owned by its parent; the [`Program`] root owns all
//! declarations. Nodes print back to surface syntax through their
//! [`Display`](std::fmt::Display) implementations.

#![forbid(unsafe_code)]

pub mod common;
pub use self::common::*;

pub mod declarations;
pub use self::declarations::*;

pub mod expressions;
pub use self::expressions::*;

pub mod program;
pub use self::program::*;

pub mod statements;
pub use self::statements::*;

pub mod types;
pub use self::types::*;
