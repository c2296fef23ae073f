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

//! The parser to convert Loam tokens into an AST.
//!
//! Expressions and types share one Pratt-style driver: a null
//! denotation for the consumed token, then left denotations applied
//! while the caller's right binding power allows. Where one token of
//! lookahead cannot decide, a handler opens a speculative section on
//! the token stream and either commits it or replays it. Statements
//! and declarations dispatch on keyword spellings instead.

mod context;
pub use context::*;

pub(crate) mod declaration;
pub(crate) mod expression;
pub(crate) mod statement;
pub(crate) mod type_;

/// The right binding power an entry point starts at.
pub(crate) const LOWEST: u8 = 0;
