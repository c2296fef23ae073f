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

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INDENT: &str = "    ";

/// A structured diagnostic: an error code, a message, an optional help
/// text, and the source range the diagnostic refers to.
///
/// Renders as:
/// ```text
/// Error [EPAR0370003]: unexpected token in expression: ']'
///     --> 2:8
///      = help text, if any
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Formatted {
    /// The stable error code, e.g. `EPAR0370003`.
    pub code: String,
    /// What went wrong.
    pub message: String,
    /// An optional suggestion for fixing the problem.
    pub help: Option<String>,
    /// Where the problem is.
    pub span: Span,
}

impl Formatted {
    /// Returns a new formatted diagnostic covering `span`.
    pub fn new_from_span(message: String, help: Option<String>, code: String, span: Span) -> Self {
        Self {
            code,
            message,
            help,
            span,
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = format!("Error [{}]", self.code);
        write!(
            f,
            "{header}: {message}\n{indent} --> {start}",
            header = header.bold().red(),
            message = self.message,
            indent = INDENT,
            start = self.span.start,
        )?;
        if let Some(help) = &self.help {
            write!(f, "\n{INDENT}  = {help}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Formatted {}
