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

use crate::tokenizer::{keywords, SpannedToken, Token};

use loam_ast::*;
use loam_span::Span;
use smallvec::SmallVec;

use loam_errors::{ParserError, Result};

// Left binding powers of the type grammar.
pub(crate) const TYPE_BP_OPTIONAL: u8 = 10;
pub(crate) const TYPE_BP_REFERENCE: u8 = 20;
pub(crate) const TYPE_BP_RESTRICTION: u8 = 30;
pub(crate) const TYPE_BP_INSTANTIATION: u8 = 40;

impl ParserContext<'_> {
    /// Returns a [`Type`] AST node if the next tokens represent a type.
    pub(crate) fn parse_type(&mut self) -> Result<Type> {
        self.parse_type_bp(LOWEST)
    }

    /// The type half of the Pratt driver; same shape as the expression
    /// half, with the type tables.
    pub(crate) fn parse_type_bp(&mut self, right_bp: u8) -> Result<Type> {
        if self.type_depth >= self.limits.type_depth {
            return Err(ParserError::type_depth_limit_reached(self.limits.type_depth, self.token.span).into());
        }
        self.type_depth += 1;
        let result = self.parse_type_inner(right_bp);
        self.type_depth -= 1;
        result
    }

    fn parse_type_inner(&mut self, right_bp: u8) -> Result<Type> {
        self.skip_trivia();
        let t = self.token.clone();
        self.next_token();
        let mut left = self.apply_type_null_denotation(t)?;
        loop {
            self.skip_trivia();
            let (next, done) = self.apply_type_left_denotation(right_bp, left)?;
            left = next;
            if done {
                return Ok(left);
            }
        }
    }

    fn apply_type_left_denotation(&mut self, right_bp: u8, left: Type) -> Result<(Type, bool)> {
        match &self.token.token {
            Token::Question => {
                if right_bp >= TYPE_BP_OPTIONAL {
                    return Ok((left, true));
                }
                let end = self.token.span;
                self.next_token();
                Ok((
                    Type::Optional(Box::new(OptionalType {
                        span: left.span() + end,
                        inner: left,
                    })),
                    false,
                ))
            }
            Token::DoubleQuestion => {
                if right_bp >= TYPE_BP_OPTIONAL {
                    return Ok((left, true));
                }
                let token_span = self.token.span;
                self.next_token();
                // `T??` is an optional of an optional; the inner node's
                // range ends at the start of the token.
                let inner_end = Span::new(token_span.start, token_span.start);
                let inner = Type::Optional(Box::new(OptionalType {
                    span: left.span() + inner_end,
                    inner: left,
                }));
                Ok((
                    Type::Optional(Box::new(OptionalType {
                        span: inner.span() + token_span,
                        inner,
                    })),
                    false,
                ))
            }
            Token::Lt => {
                if right_bp >= TYPE_BP_INSTANTIATION {
                    return Ok((left, true));
                }
                self.next_token();
                let (type_arguments, end) = self.try_parse_type_arguments_remainder()?;
                Ok((
                    Type::Instantiation(Box::new(InstantiationType {
                        span: left.span() + end,
                        base: left,
                        type_arguments,
                    })),
                    false,
                ))
            }
            Token::LeftBrace => self.parse_restricted_type_remainder(right_bp, left),
            _ => Ok((left, true)),
        }
    }

    /// The meta left denotation for `{` after a type: a restriction
    /// list, unless the brace opens a following block. A space or
    /// newline directly after the brace means block; so does a caller
    /// whose binding power outranks restriction.
    fn parse_restricted_type_remainder(&mut self, right_bp: u8, left: Type) -> Result<(Type, bool)> {
        self.start_buffering();
        self.next_token(); // `{`

        let whitespace_follows = matches!(self.token.token, Token::Space { .. });
        if whitespace_follows || right_bp >= TYPE_BP_RESTRICTION {
            self.replay_buffered();
            return Ok((left, true));
        }

        self.accept_buffered();
        let (restrictions, end) = self.parse_restriction_list()?;
        Ok((
            Type::Restricted(Box::new(RestrictedType {
                span: left.span() + end,
                base: Some(left),
                restrictions,
            })),
            false,
        ))
    }

    /// Parses the entries of a restriction list up to the closing
    /// brace; the opening brace is already consumed. Every entry must
    /// be a nominal type; others are recorded and dropped.
    fn parse_restriction_list(&mut self) -> Result<(Vec<NominalType>, Span)> {
        let mut restrictions = Vec::new();
        self.skip_trivia();
        if let Token::RightBrace = self.token.token {
            let end = self.token.span;
            self.next_token();
            return Ok((restrictions, end));
        }
        loop {
            let type_ = self.parse_type()?;
            match type_ {
                Type::Nominal(nominal) => restrictions.push(nominal),
                other => {
                    let error = ParserError::non_nominal_type_in_restriction_list(&other, other.span());
                    self.report(error);
                }
            }
            self.skip_trivia();
            match &self.token.token {
                Token::Comma => self.next_token(),
                Token::RightBrace => {
                    let end = self.token.span;
                    self.next_token();
                    return Ok((restrictions, end));
                }
                Token::Colon => {
                    let error = ParserError::unexpected_colon_in_restricted_type(self.token.span);
                    self.report(error);
                    self.next_token();
                }
                got => return Err(ParserError::expected_token("}", got, self.token.span).into()),
            }
        }
    }

    fn apply_type_null_denotation(&mut self, t: SpannedToken) -> Result<Type> {
        let span = t.span;
        match t.token {
            Token::Ident(name) => match name.as_str() {
                keywords::AUTH => {
                    self.expect(&Token::Ampersand)?;
                    let inner = self.parse_type_bp(TYPE_BP_REFERENCE)?;
                    Ok(Type::Reference(Box::new(ReferenceType {
                        span: span + inner.span(),
                        authorized: true,
                        inner,
                    })))
                }
                _ => Ok(Type::Nominal(
                    self.parse_nominal_type_remainder(Identifier::new(name, span))?,
                )),
            },
            Token::Ampersand => {
                let inner = self.parse_type_bp(TYPE_BP_REFERENCE)?;
                Ok(Type::Reference(Box::new(ReferenceType {
                    span: span + inner.span(),
                    authorized: false,
                    inner,
                })))
            }
            Token::LeftBracket => self.parse_array_type_remainder(span),
            Token::LeftBrace => self.parse_braced_type_remainder(span),
            Token::LeftParen => self.parse_function_type_remainder(span),
            token => Err(ParserError::unexpected_token_in_type(token, span).into()),
        }
    }

    /// Parses the dotted tail of a nominal type, e.g. `.Vault` in
    /// `Token.Vault`.
    pub(crate) fn parse_nominal_type_remainder(&mut self, name: Identifier) -> Result<NominalType> {
        let mut nested: SmallVec<[Identifier; 2]> = SmallVec::new();
        let mut end = name.span;
        while self.eat(&Token::Dot) {
            let part = self.expect_identifier()?;
            end = part.span;
            nested.push(part);
        }
        Ok(NominalType {
            span: name.span + end,
            name,
            nested,
        })
    }

    /// Parses `[T]` and `[T; N]` remainders; the opening bracket is
    /// already consumed.
    fn parse_array_type_remainder(&mut self, start: Span) -> Result<Type> {
        let element = self.parse_type()?;
        if self.eat(&Token::Semicolon) {
            // The size must be an integer literal; anything else is
            // recorded and the size omitted.
            let size_expression = self.parse_expression()?;
            let size = match size_expression {
                Expression::Literal(Literal::Integer(integer)) => Some(integer),
                other => {
                    let error = ParserError::invalid_constant_sized_type_size(&other, other.span());
                    self.report(error);
                    None
                }
            };
            let end = self.expect(&Token::RightBracket)?;
            return Ok(Type::ConstantSized(Box::new(ConstantSizedType {
                span: start + end,
                element,
                size,
            })));
        }
        let end = self.expect(&Token::RightBracket)?;
        Ok(Type::VariableSized(Box::new(VariableSizedType {
            span: start + end,
            element,
        })))
    }

    /// Parses a braced type with no base: a dictionary or a base-less
    /// restricted type. The first `:` commits to dictionary; the first
    /// `,` or `}` commits to restricted. Mixing the separators is an
    /// error.
    fn parse_braced_type_remainder(&mut self, open_span: Span) -> Result<Type> {
        self.skip_trivia();
        if let Token::RightBrace = self.token.token {
            let end = self.token.span;
            self.next_token();
            return Ok(Type::Restricted(Box::new(RestrictedType {
                span: open_span + end,
                base: None,
                restrictions: Vec::new(),
            })));
        }

        let first = self.parse_type()?;
        self.skip_trivia();
        match &self.token.token {
            Token::Colon => {
                self.next_token();
                let value = self.parse_type()?;
                let end = self.parse_dictionary_type_end()?;
                Ok(Type::Dictionary(Box::new(DictionaryType {
                    span: open_span + end,
                    key: first,
                    value,
                })))
            }
            Token::Comma => {
                self.next_token();
                let mut restrictions = Vec::new();
                match first {
                    Type::Nominal(nominal) => restrictions.push(nominal),
                    other => {
                        let error = ParserError::non_nominal_type_in_restriction_list(&other, other.span());
                        self.report(error);
                    }
                }
                let (rest, end) = self.parse_restriction_list()?;
                restrictions.extend(rest);
                Ok(Type::Restricted(Box::new(RestrictedType {
                    span: open_span + end,
                    base: None,
                    restrictions,
                })))
            }
            Token::RightBrace => {
                let end = self.token.span;
                self.next_token();
                let mut restrictions = Vec::new();
                match first {
                    Type::Nominal(nominal) => restrictions.push(nominal),
                    other => {
                        let error = ParserError::non_nominal_type_in_restriction_list(&other, other.span());
                        self.report(error);
                    }
                }
                Ok(Type::Restricted(Box::new(RestrictedType {
                    span: open_span + end,
                    base: None,
                    restrictions,
                })))
            }
            got => Err(ParserError::expected_token("}", got, self.token.span).into()),
        }
    }

    /// Consumes the closing brace of a dictionary type, recording any
    /// stray commas on the way.
    fn parse_dictionary_type_end(&mut self) -> Result<Span> {
        loop {
            self.skip_trivia();
            match &self.token.token {
                Token::RightBrace => {
                    let end = self.token.span;
                    self.next_token();
                    return Ok(end);
                }
                Token::Comma => {
                    let error = ParserError::unexpected_comma_in_dictionary_type(self.token.span);
                    self.report(error);
                    self.next_token();
                    // Best-effort: skip the extra entry.
                    let _ = self.parse_type()?;
                    if self.eat(&Token::Colon) {
                        let _ = self.parse_type()?;
                    }
                }
                got => return Err(ParserError::expected_token("}", got, self.token.span).into()),
            }
        }
    }

    /// Parses a function type remainder `T1, T2): R`; the opening
    /// parenthesis is already consumed.
    fn parse_function_type_remainder(&mut self, open_span: Span) -> Result<Type> {
        let mut parameters = Vec::new();
        self.skip_trivia();
        if !matches!(self.token.token, Token::RightParen) {
            loop {
                parameters.push(self.parse_type_annotation()?);
                self.skip_trivia();
                match &self.token.token {
                    Token::Comma => self.next_token(),
                    Token::RightParen => break,
                    got => return Err(ParserError::expected_token(")", got, self.token.span).into()),
                }
            }
        }
        self.expect(&Token::RightParen)?;
        self.expect(&Token::Colon)?;
        let return_type = self.parse_type_annotation()?;
        Ok(Type::Function(Box::new(FunctionType {
            span: open_span + return_type.span,
            parameters,
            return_type,
        })))
    }

    /// Returns a [`TypeAnnotation`]: a type with an optional leading
    /// `@` resource marker.
    pub(crate) fn parse_type_annotation(&mut self) -> Result<TypeAnnotation> {
        self.skip_trivia();
        let start = self.token.span;
        let is_resource = self.eat(&Token::At);
        let type_ = self.parse_type()?;
        let span = if is_resource {
            start + type_.span()
        } else {
            type_.span()
        };
        Ok(TypeAnnotation {
            is_resource,
            type_,
            span,
        })
    }
}
