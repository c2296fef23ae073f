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

use crate::tokenizer::{SpannedToken, Token};

use loam_ast::{Identifier, Transfer, TransferOperation};
use loam_errors::emitter::Handler;
use loam_errors::{LoamError, ParserError, Result};
use loam_span::Span;

/// Once this many consumed tokens sit in the replay buffer with no
/// speculation active, the buffer is dropped to bound memory.
const BUFFER_TRIM_THRESHOLD: usize = 128;

/// The recursion limits of one parser.
#[derive(Copy, Clone, Debug)]
pub struct ParserLimits {
    pub expression_depth: usize,
    pub type_depth: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            expression_depth: 1000,
            type_depth: 1000,
        }
    }
}

/// One speculative section: where to rewind to and which diagnostics
/// to drop on replay.
struct Checkpoint {
    buffer_pos: usize,
    newline_before_current: bool,
    errors: Vec<LoamError>,
}

/// Stores a source in tokenized format plus additional context.
///
/// Tokens flow from the reversed `tokens` vector (cheap `pop()`s)
/// through the replay buffer into `token`, the current token. While a
/// speculative section is active, consumed tokens are retained in the
/// buffer; committing keeps the cursor where it is, replaying rewinds
/// it to the checkpoint. Sections nest by stacking checkpoints.
pub struct ParserContext<'a> {
    /// Handler used to side-channel emit errors from the parser.
    pub(crate) handler: &'a Handler,
    /// All un-consumed tokens, reversed so that `pop()` yields the next.
    tokens: Vec<SpannedToken>,
    /// The current token. Lexer error tokens never appear here.
    pub(crate) token: SpannedToken,
    /// Tokens retained for possible replay.
    buffer: Vec<SpannedToken>,
    /// Read cursor into `buffer`.
    buffer_pos: usize,
    /// Active speculative sections, innermost last.
    checkpoints: Vec<Checkpoint>,
    /// Whether the current token sits at `buffer_pos - 1` in the
    /// buffer, so checkpoints can anchor to it without re-pushing it.
    current_buffered: bool,
    /// Whether the trivia directly before the current token crossed a
    /// newline. Drives statement termination and the force-unwrap rule.
    pub(crate) newline_before_current: bool,
    pub(crate) limits: ParserLimits,
    pub(crate) expression_depth: usize,
    pub(crate) type_depth: usize,
}

impl<'a> ParserContext<'a> {
    /// Returns a new [`ParserContext`] over the given tokens, with the
    /// default recursion limits.
    pub fn new(handler: &'a Handler, tokens: Vec<SpannedToken>) -> Self {
        Self::with_limits(handler, tokens, ParserLimits::default())
    }

    /// Returns a new [`ParserContext`] with explicit recursion limits.
    pub fn with_limits(handler: &'a Handler, mut tokens: Vec<SpannedToken>, limits: ParserLimits) -> Self {
        tokens.reverse();
        let mut context = Self {
            handler,
            tokens,
            token: SpannedToken::dummy(),
            buffer: Vec::new(),
            buffer_pos: 0,
            checkpoints: Vec::new(),
            current_buffered: false,
            newline_before_current: false,
            limits,
            expression_depth: 0,
            type_depth: 0,
        };
        context.next_token();
        context
    }

    /// Returns `true` while the parser is past the last real token.
    pub fn has_next(&self) -> bool {
        !matches!(self.token.token, Token::Eof)
    }

    fn is_buffering(&self) -> bool {
        !self.checkpoints.is_empty()
    }

    /// Advances the current token.
    ///
    /// Tokens are re-delivered from the replay buffer first; otherwise
    /// they are pulled from the source, and retained in the buffer
    /// while a speculative section is active. EOF is synthesized once
    /// the source is exhausted and is sticky. Lexer error tokens are
    /// drained into diagnostics and never become current.
    pub(crate) fn next_token(&mut self) {
        loop {
            let (next, buffered) = if self.buffer_pos < self.buffer.len() {
                let token = self.buffer[self.buffer_pos].clone();
                self.buffer_pos += 1;
                (token, true)
            } else {
                let token = self.tokens.pop().unwrap_or_else(|| SpannedToken {
                    token: Token::Eof,
                    span: Span::new(self.token.span.end, self.token.span.end),
                });
                if self.is_buffering() {
                    self.buffer.push(token.clone());
                    self.buffer_pos = self.buffer.len();
                    (token, true)
                } else {
                    (token, false)
                }
            };

            if let Token::Error(message) = &next.token {
                let error = ParserError::syntax_error(message, next.span);
                self.report(error);
                continue;
            }

            self.token = next;
            self.current_buffered = buffered;
            self.newline_before_current = false;
            self.trim_buffer();
            return;
        }
    }

    fn trim_buffer(&mut self) {
        if self.checkpoints.is_empty()
            && self.buffer_pos >= self.buffer.len()
            && self.buffer.len() >= BUFFER_TRIM_THRESHOLD
        {
            self.buffer.clear();
            self.buffer_pos = 0;
            self.current_buffered = false;
        }
    }

    /// Opens a speculative section at the current token, so that a
    /// later [`Self::replay_buffered`] resumes exactly here.
    pub(crate) fn start_buffering(&mut self) {
        // Retain the current token unless an enclosing section already
        // did; the checkpoint anchors to its buffer slot.
        if !self.current_buffered {
            self.buffer.push(self.token.clone());
            self.buffer_pos = self.buffer.len();
            self.current_buffered = true;
        }
        self.checkpoints.push(Checkpoint {
            buffer_pos: self.buffer_pos - 1,
            newline_before_current: self.newline_before_current,
            errors: Vec::new(),
        });
    }

    /// Commits the innermost speculative section: its diagnostics are
    /// merged, in order, into the enclosing section or the handler.
    pub(crate) fn accept_buffered(&mut self) {
        let checkpoint = self.checkpoints.pop().expect("no active speculation to accept");
        match self.checkpoints.last_mut() {
            Some(parent) => parent.errors.extend(checkpoint.errors),
            None => {
                for error in checkpoint.errors {
                    self.handler.emit_err(error);
                }
            }
        }
        self.trim_buffer();
    }

    /// Unwinds the innermost speculative section: its diagnostics are
    /// dropped and the token stream rewinds to where it began.
    pub(crate) fn replay_buffered(&mut self) {
        let checkpoint = self.checkpoints.pop().expect("no active speculation to replay");
        self.buffer_pos = checkpoint.buffer_pos;
        self.next_token();
        self.newline_before_current = checkpoint.newline_before_current;
    }

    /// Records the diagnostic and continues parsing. Within a
    /// speculative section the diagnostic is queued, and dropped if
    /// the section replays.
    pub(crate) fn report(&mut self, error: impl Into<LoamError>) {
        match self.checkpoints.last_mut() {
            Some(checkpoint) => checkpoint.errors.push(error.into()),
            None => self.handler.emit_err(error.into()),
        }
    }

    /// Consumes whitespace and comments in front of the current token,
    /// tracking block-comment nesting. Returns whether a newline sits
    /// between the previous token and the current one.
    pub(crate) fn skip_trivia(&mut self) -> bool {
        let mut newline = false;
        let mut consumed = false;
        loop {
            match &self.token.token {
                Token::Space { contains_newline } => {
                    newline |= contains_newline;
                    consumed = true;
                    self.next_token();
                }
                Token::CommentLine(_) => {
                    consumed = true;
                    self.next_token();
                }
                Token::BlockCommentStart => {
                    consumed = true;
                    let start_span = self.token.span;
                    self.next_token();
                    let mut depth = 1usize;
                    while depth > 0 {
                        match &self.token.token {
                            Token::BlockCommentStart => {
                                depth += 1;
                                self.next_token();
                            }
                            Token::BlockCommentEnd => {
                                depth -= 1;
                                self.next_token();
                            }
                            Token::BlockCommentContent(content) => {
                                newline |= content.contains('\n');
                                self.next_token();
                            }
                            Token::Eof => {
                                let error = ParserError::missing_comment_end(start_span);
                                self.report(error);
                                break;
                            }
                            _ => self.next_token(),
                        }
                    }
                }
                _ => break,
            }
        }
        // When nothing was consumed the stored flag still describes the
        // trivia in front of the current token; keep it.
        if consumed {
            self.newline_before_current = newline;
        }
        self.newline_before_current
    }

    /// Checks whether the current token is `token`.
    pub(crate) fn check(&self, token: &Token) -> bool {
        &self.token.token == token
    }

    /// Consumes the current token if it matches, skipping leading
    /// trivia. Returns whether anything was eaten.
    pub(crate) fn eat(&mut self, token: &Token) -> bool {
        self.skip_trivia();
        if self.check(token) {
            self.next_token();
            return true;
        }
        false
    }

    /// Eats the expected `token` and returns its range, or errors.
    pub(crate) fn expect(&mut self, token: &Token) -> Result<Span> {
        self.skip_trivia();
        if self.check(token) {
            let span = self.token.span;
            self.next_token();
            Ok(span)
        } else {
            Err(ParserError::expected_token(token, &self.token.token, self.token.span).into())
        }
    }

    /// Checks whether the current token is an identifier spelled
    /// `keyword`. Keywords are not reserved; context decides.
    pub(crate) fn check_keyword(&self, keyword: &str) -> bool {
        matches!(&self.token.token, Token::Ident(name) if name == keyword)
    }

    /// Consumes the keyword if present, skipping leading trivia.
    pub(crate) fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.skip_trivia();
        if self.check_keyword(keyword) {
            self.next_token();
            return true;
        }
        false
    }

    /// Eats the expected keyword and returns its range, or errors.
    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> Result<Span> {
        self.skip_trivia();
        if self.check_keyword(keyword) {
            let span = self.token.span;
            self.next_token();
            Ok(span)
        } else {
            Err(ParserError::expected_token(keyword, &self.token.token, self.token.span).into())
        }
    }

    /// Eats the next token if it is an identifier and returns it.
    pub(crate) fn eat_identifier(&mut self) -> Option<Identifier> {
        self.skip_trivia();
        if let Token::Ident(name) = &self.token.token {
            let identifier = Identifier::new(name.clone(), self.token.span);
            self.next_token();
            return Some(identifier);
        }
        None
    }

    /// Expects an [`Identifier`], or errors.
    pub(crate) fn expect_identifier(&mut self) -> Result<Identifier> {
        self.eat_identifier()
            .ok_or_else(|| ParserError::expected_token("identifier", &self.token.token, self.token.span).into())
    }

    /// Eats a transfer operator, i.e. `=`, `<-`, or `<-!`.
    pub(crate) fn eat_transfer(&mut self) -> Option<Transfer> {
        self.skip_trivia();
        let operation = match &self.token.token {
            Token::Assign => TransferOperation::Copy,
            Token::LeftArrow => TransferOperation::Move,
            Token::LeftArrowBang => TransferOperation::MoveForced,
            _ => return None,
        };
        let transfer = Transfer {
            operation,
            span: self.token.span,
        };
        self.next_token();
        Some(transfer)
    }

    /// Expects a transfer operator, or errors.
    pub(crate) fn expect_transfer(&mut self) -> Result<Transfer> {
        self.eat_transfer()
            .ok_or_else(|| ParserError::expected_transfer(&self.token.token, self.token.span).into())
    }
}
