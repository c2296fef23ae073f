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

//! The parser to convert Loam source text into an AST.
//!
//! Every entry point takes a UTF-8 source string, records diagnostics
//! through a [`Handler`], and returns a best-effort result: a failed
//! production is recorded as a diagnostic, never panicked on, and the
//! nodes parsed so far are kept.

#![forbid(unsafe_code)]

pub mod tokenizer;
pub use tokenizer::{tokenize, SpannedToken, Token};

pub mod parser;
pub use parser::*;

#[cfg(test)]
mod test;

use loam_ast::{Declaration, Expression, Program, Statement, Type};
use loam_errors::emitter::Handler;
use loam_errors::{ParseFailure, Result};

/// Records the error of a failed parse and converts the result into a
/// best-effort option.
fn finish<T>(handler: &Handler, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!("parse failed: {error}");
            handler.emit_err(error);
            None
        }
    }
}

/// Parses a single expression. Diagnostics go through the handler;
/// `None` is returned when no expression could be produced at all.
pub fn parse_expression(handler: &Handler, source: &str) -> Option<Expression> {
    tracing::trace!(len = source.len(), "parsing expression");
    let mut context = ParserContext::new(handler, tokenize(source));
    let result = context.parse_expression();
    finish(handler, result)
}

/// Parses a single type. Diagnostics go through the handler; `None` is
/// returned when no type could be produced at all.
pub fn parse_type(handler: &Handler, source: &str) -> Option<Type> {
    tracing::trace!(len = source.len(), "parsing type");
    let mut context = ParserContext::new(handler, tokenize(source));
    let result = context.parse_type();
    finish(handler, result)
}

/// Parses statements up to the end of the input. Diagnostics go
/// through the handler; the statements parsed before a failure are
/// kept.
pub fn parse_statements(handler: &Handler, source: &str) -> Vec<Statement> {
    tracing::trace!(len = source.len(), "parsing statements");
    let mut context = ParserContext::new(handler, tokenize(source));
    context.parse_statement_list()
}

/// Parses declarations up to the end of the input. Diagnostics go
/// through the handler; the declarations parsed before a failure are
/// kept.
pub fn parse_declarations(handler: &Handler, source: &str) -> Vec<Declaration> {
    tracing::trace!(len = source.len(), "parsing declarations");
    let mut context = ParserContext::new(handler, tokenize(source));
    context.parse_declaration_list()
}

/// Parses a whole program: the best-effort [`Program`] and, when any
/// diagnostics were recorded, a [`ParseFailure`] aggregating them in
/// discovery order.
pub fn parse_program(source: &str) -> (Option<Program>, Option<ParseFailure>) {
    let (handler, buffer) = Handler::new_with_buf();
    let declarations = parse_declarations(&handler, source);
    let program = Program::new(declarations);
    let errors = buffer.extract_errs().into_inner();
    if errors.is_empty() {
        (Some(program), None)
    } else {
        (Some(program), Some(ParseFailure::new(errors)))
    }
}

/// Scans a docstring for `pragma arguments <rest-of-line>` lines and
/// returns the trimmed tails. The argument lists themselves are not
/// validated here.
pub fn parse_docstring_pragma_arguments(docstring: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    for line in docstring.lines() {
        let line = line.trim_start();
        let Some(rest) = line.strip_prefix("pragma") else {
            continue;
        };
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let Some(tail) = rest.trim_start().strip_prefix("arguments") else {
            continue;
        };
        if tail.starts_with(char::is_whitespace) {
            arguments.push(tail.trim().to_string());
        }
    }
    arguments
}
