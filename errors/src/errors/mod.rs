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

use loam_span::Span;

use std::fmt;

/// The parser error family.
pub mod parser;
pub use self::parser::*;

/// The umbrella error enum for all Loam compiler crates.
#[derive(Clone, Debug, thiserror::Error, Eq, Hash, PartialEq)]
pub enum LoamError {
    /// A diagnostic produced by the parser.
    #[error(transparent)]
    ParserError(#[from] ParserError),
}

impl LoamError {
    /// Returns the message text alone, without the code and range.
    pub fn message(&self) -> &str {
        match self {
            Self::ParserError(error) => error.message(),
        }
    }

    /// Returns the source range the diagnostic refers to.
    pub fn span(&self) -> Span {
        match self {
            Self::ParserError(error) => error.span(),
        }
    }

    /// Returns the rendered error code, e.g. `EPAR0370003`.
    pub fn error_code(&self) -> &str {
        match self {
            Self::ParserError(error) => error.error_code(),
        }
    }
}

/// The aggregate of all diagnostics recorded by one parse, in discovery
/// order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseFailure {
    errors: Vec<LoamError>,
}

impl ParseFailure {
    /// Wraps the given diagnostics.
    pub fn new(errors: Vec<LoamError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoamError> {
        self.errors.iter()
    }

    /// Unwraps the aggregate back into its diagnostics.
    pub fn into_errors(self) -> Vec<LoamError> {
        self.errors
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Parsing failed:")?;
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseFailure {}
