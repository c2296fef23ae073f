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

//! Diagnostics for the Loam compiler.
//!
//! Every diagnostic is a [`Formatted`] message with a stable error code
//! and a source range, constructed through the functions that
//! [`create_messages!`] generates. The [`emitter::Handler`] is the
//! side channel through which the parser records diagnostics while
//! still returning a best-effort result.

#![forbid(unsafe_code)]

pub mod common;
pub use self::common::*;

pub mod emitter;

pub mod errors;
pub use self::errors::*;

/// The `Result` type for all Loam compiler crates.
pub type Result<T, E = LoamError> = core::result::Result<T, E>;
