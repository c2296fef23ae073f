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

use crate::LoamError;

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

/// The destination diagnostics are emitted to.
pub trait Emitter {
    /// Emit the error `err`.
    fn emit_err(&mut self, err: LoamError);
}

/// An [`Emitter`] that prints to standard error.
#[derive(Default)]
pub struct StderrEmitter;

impl Emitter for StderrEmitter {
    fn emit_err(&mut self, err: LoamError) {
        eprintln!("{err}");
    }
}

/// An ordered collection of emitted diagnostics.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Buffer(Vec<LoamError>);

impl Buffer {
    /// Appends `err` to the buffer.
    pub fn push(&mut self, err: LoamError) {
        self.0.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn last(&self) -> Option<&LoamError> {
        self.0.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoamError> {
        self.0.iter()
    }

    /// Unwraps the buffer into the diagnostics it holds.
    pub fn into_inner(self) -> Vec<LoamError> {
        self.0
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                writeln!(f)?;
            }
            first = false;
            error.fmt(f)?;
        }
        Ok(())
    }
}

/// An [`Emitter`] that collects into a shared buffer, for tests and for
/// entry points that aggregate diagnostics into a value.
#[derive(Clone, Default)]
pub struct BufferEmitter(Rc<RefCell<Buffer>>);

impl BufferEmitter {
    /// Returns a new buffering emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts all diagnostics collected so far, draining the buffer.
    pub fn extract_errs(&self) -> Buffer {
        self.0.take()
    }
}

impl Emitter for BufferEmitter {
    fn emit_err(&mut self, err: LoamError) {
        self.0.borrow_mut().push(err);
    }
}

struct HandlerInner {
    /// The number of diagnostics emitted so far.
    count: usize,
    /// The destination diagnostics are forwarded to.
    emitter: Box<dyn Emitter>,
}

impl HandlerInner {
    fn emit_err(&mut self, err: LoamError) {
        self.count = self.count.saturating_add(1);
        self.emitter.emit_err(err);
    }
}

/// The side channel the parser records diagnostics through while still
/// returning a best-effort result.
pub struct Handler {
    inner: RefCell<HandlerInner>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(Box::new(StderrEmitter))
    }
}

impl Handler {
    /// Returns a new handler forwarding to `emitter`.
    pub fn new(emitter: Box<dyn Emitter>) -> Self {
        Self {
            inner: RefCell::new(HandlerInner { count: 0, emitter }),
        }
    }

    /// Returns a new handler paired with the buffer it collects into.
    pub fn new_with_buf() -> (Self, BufferEmitter) {
        let buf = BufferEmitter::new();
        let handler = Self::new(Box::new(buf.clone()));
        (handler, buf)
    }

    /// Emit the error `err`.
    pub fn emit_err(&self, err: impl Into<LoamError>) {
        self.inner.borrow_mut().emit_err(err.into());
    }

    /// The number of diagnostics emitted so far.
    pub fn err_count(&self) -> usize {
        self.inner.borrow().count
    }

    /// Returns `true` if any diagnostic was emitted.
    pub fn had_errors(&self) -> bool {
        self.err_count() > 0
    }

    /// Emits the error in `result`, if any, and converts the result into
    /// an option.
    pub fn extend_if_error<T>(&self, result: crate::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.emit_err(err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserError;
    use loam_span::Span;

    #[test]
    fn test_buffered_emission_order() {
        let (handler, buf) = Handler::new_with_buf();
        handler.emit_err(ParserError::statements_on_same_line(Span::dummy()));
        handler.emit_err(ParserError::missing_comment_end(Span::dummy()));
        assert_eq!(handler.err_count(), 2);

        let errors = buf.extract_errs().into_inner();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].message(),
            "statements on the same line must be separated with a semicolon"
        );
        assert_eq!(errors[1].message(), "missing comment end");
    }

    #[test]
    fn test_error_codes_are_stable_per_message() {
        let first = ParserError::syntax_error("boom", Span::dummy());
        let second = ParserError::syntax_error("bang", Span::dummy());
        assert_eq!(first.error_code(), second.error_code());

        let other = ParserError::juxtaposed_unary_operators(Span::dummy());
        assert_ne!(first.error_code(), other.error_code());
    }
}
