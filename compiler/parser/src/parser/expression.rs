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
use loam_errors::{ParserError, Result};
use loam_span::Span;

// Left binding powers. Higher binds tighter; right associativity comes
// from lowering the right binding power by one when recursing.
pub(crate) const BP_CONDITIONAL: u8 = 20;
pub(crate) const BP_LOGICAL_OR: u8 = 30;
pub(crate) const BP_LOGICAL_AND: u8 = 40;
pub(crate) const BP_COMPARISON: u8 = 50;
pub(crate) const BP_NIL_COALESCING: u8 = 60;
pub(crate) const BP_BITWISE_OR: u8 = 70;
pub(crate) const BP_BITWISE_XOR: u8 = 80;
pub(crate) const BP_BITWISE_AND: u8 = 90;
pub(crate) const BP_SHIFT: u8 = 100;
pub(crate) const BP_ADDITION: u8 = 110;
pub(crate) const BP_MULTIPLICATION: u8 = 120;
pub(crate) const BP_CASTING: u8 = 130;
pub(crate) const BP_UNARY_PREFIX: u8 = 130;
pub(crate) const BP_FORCE_UNWRAP: u8 = 140;
pub(crate) const BP_ACCESS: u8 = 150;

/// Returns the left binding power of `token` in expression position,
/// or 0 when the token is no left denotation.
fn expression_left_binding_power(token: &Token) -> u8 {
    match token {
        Token::Question => BP_CONDITIONAL,
        Token::Or => BP_LOGICAL_OR,
        Token::And => BP_LOGICAL_AND,
        Token::Lt | Token::LtEq | Token::Gt | Token::GtEq | Token::Eq | Token::NotEq => BP_COMPARISON,
        Token::DoubleQuestion => BP_NIL_COALESCING,
        Token::Pipe => BP_BITWISE_OR,
        Token::Caret => BP_BITWISE_XOR,
        Token::Ampersand => BP_BITWISE_AND,
        Token::Shl | Token::Shr => BP_SHIFT,
        Token::Add | Token::Minus => BP_ADDITION,
        Token::Mul | Token::Div | Token::Rem => BP_MULTIPLICATION,
        Token::Ident(name) if name == keywords::AS => BP_CASTING,
        Token::Bang => BP_FORCE_UNWRAP,
        Token::LeftParen | Token::LeftBracket | Token::Dot => BP_ACCESS,
        _ => 0,
    }
}

impl ParserContext<'_> {
    /// Returns an [`Expression`] AST node if the next tokens represent
    /// an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_expression_bp(LOWEST)
    }

    /// The expression half of the Pratt driver, entered with the right
    /// binding power of the enclosing production.
    pub(crate) fn parse_expression_bp(&mut self, right_bp: u8) -> Result<Expression> {
        if self.expression_depth >= self.limits.expression_depth {
            return Err(
                ParserError::expression_depth_limit_reached(self.limits.expression_depth, self.token.span).into(),
            );
        }
        self.expression_depth += 1;
        let result = self.parse_expression_inner(right_bp);
        self.expression_depth -= 1;
        result
    }

    fn parse_expression_inner(&mut self, right_bp: u8) -> Result<Expression> {
        self.skip_trivia();
        let t = self.token.clone();
        self.next_token();
        let mut left = self.apply_expression_null_denotation(t)?;
        loop {
            self.skip_trivia();
            let (next, done) = self.apply_expression_left_denotation(right_bp, left)?;
            left = next;
            if done {
                return Ok(left);
            }
        }
    }

    /// Applies one left denotation to `left`, or signals that the
    /// caller's binding power ends the production here.
    fn apply_expression_left_denotation(&mut self, right_bp: u8, left: Expression) -> Result<(Expression, bool)> {
        match &self.token.token {
            // `<` may open an invocation's type-argument list; only
            // look-ahead decides.
            Token::Lt => self.parse_less_than_or_type_arguments(right_bp, left),
            // `?` is the conditional separator or the start of `?.`.
            Token::Question => self.parse_conditional_or_optional_member(right_bp, left),
            // A force unwrap must not follow a newline; the `!` belongs
            // to the next statement.
            Token::Bang if self.newline_before_current => Ok((left, true)),
            _ => {
                let left_bp = expression_left_binding_power(&self.token.token);
                if left_bp == 0 || right_bp >= left_bp {
                    return Ok((left, true));
                }
                let t = self.token.clone();
                self.next_token();
                Ok((self.apply_expression_left_denotation_for(t, left)?, false))
            }
        }
    }

    fn apply_expression_left_denotation_for(&mut self, t: SpannedToken, left: Expression) -> Result<Expression> {
        use BinaryOperation::*;

        match t.token {
            Token::Or => self.parse_binary_remainder(left, Or, BP_LOGICAL_OR, true),
            Token::And => self.parse_binary_remainder(left, And, BP_LOGICAL_AND, true),
            Token::DoubleQuestion => self.parse_binary_remainder(left, NilCoalesce, BP_NIL_COALESCING, true),
            Token::Lt => self.parse_binary_remainder(left, Lt, BP_COMPARISON, false),
            Token::LtEq => self.parse_binary_remainder(left, Lte, BP_COMPARISON, false),
            Token::Gt => self.parse_binary_remainder(left, Gt, BP_COMPARISON, false),
            Token::GtEq => self.parse_binary_remainder(left, Gte, BP_COMPARISON, false),
            Token::Eq => self.parse_binary_remainder(left, Eq, BP_COMPARISON, false),
            Token::NotEq => self.parse_binary_remainder(left, Neq, BP_COMPARISON, false),
            Token::Pipe => self.parse_binary_remainder(left, BitwiseOr, BP_BITWISE_OR, false),
            Token::Caret => self.parse_binary_remainder(left, Xor, BP_BITWISE_XOR, false),
            Token::Ampersand => self.parse_binary_remainder(left, BitwiseAnd, BP_BITWISE_AND, false),
            Token::Shl => self.parse_binary_remainder(left, Shl, BP_SHIFT, false),
            Token::Shr => self.parse_binary_remainder(left, Shr, BP_SHIFT, false),
            Token::Add => self.parse_binary_remainder(left, Add, BP_ADDITION, false),
            Token::Minus => self.parse_binary_remainder(left, Sub, BP_ADDITION, false),
            Token::Mul => self.parse_binary_remainder(left, Mul, BP_MULTIPLICATION, false),
            Token::Div => self.parse_binary_remainder(left, Div, BP_MULTIPLICATION, false),
            Token::Rem => self.parse_binary_remainder(left, Rem, BP_MULTIPLICATION, false),

            Token::LeftParen => {
                let invocation = self.parse_invocation_remainder(left, Vec::new())?;
                Ok(Expression::Invocation(invocation))
            }
            Token::LeftBracket => {
                let index = self.parse_expression_bp(LOWEST)?;
                let end = self.expect(&Token::RightBracket)?;
                Ok(Expression::Index(IndexExpression {
                    span: left.span() + end,
                    object: Box::new(left),
                    index: Box::new(index),
                }))
            }
            Token::Dot => {
                let name = self.expect_identifier()?;
                Ok(Expression::Member(MemberExpression {
                    span: left.span() + name.span,
                    object: Box::new(left),
                    optional: false,
                    name,
                }))
            }
            Token::Bang => Ok(Expression::Force(ForceExpression {
                span: left.span() + t.span,
                expression: Box::new(left),
            })),
            Token::Ident(name) if name == keywords::AS => {
                // `as?` and `as!` require the marker to sit directly
                // against the keyword.
                let operation = if self.token.span.start == t.span.end {
                    match &self.token.token {
                        Token::Question => {
                            self.next_token();
                            CastOperation::FailableCast
                        }
                        Token::Bang => {
                            self.next_token();
                            CastOperation::ForceCast
                        }
                        _ => CastOperation::Cast,
                    }
                } else {
                    CastOperation::Cast
                };
                let type_annotation = self.parse_type_annotation()?;
                Ok(Expression::Cast(CastExpression {
                    span: left.span() + type_annotation.span,
                    expression: Box::new(left),
                    operation,
                    type_annotation,
                }))
            }
            token => unreachable!("no left denotation for {token}"),
        }
    }

    fn binary_expression(left: Expression, op: BinaryOperation, right: Expression) -> Expression {
        Expression::Binary(BinaryExpression {
            span: left.span() + right.span(),
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    fn parse_binary_remainder(
        &mut self,
        left: Expression,
        op: BinaryOperation,
        left_bp: u8,
        right_associative: bool,
    ) -> Result<Expression> {
        let right_bp = if right_associative { left_bp - 1 } else { left_bp };
        let right = self.parse_expression_bp(right_bp)?;
        Ok(Self::binary_expression(left, op, right))
    }

    /// The meta left denotation for `<`: tentatively parse `<...>` as a
    /// type-argument list, and only a trailing `(` confirms the
    /// invocation. Otherwise replay and treat `<` as less-than.
    fn parse_less_than_or_type_arguments(&mut self, right_bp: u8, left: Expression) -> Result<(Expression, bool)> {
        self.start_buffering();
        self.next_token(); // `<`

        let confirmed = match self.try_parse_type_arguments_remainder() {
            Ok((type_arguments, _)) => {
                self.skip_trivia();
                if matches!(self.token.token, Token::LeftParen) && right_bp < BP_ACCESS {
                    Some(type_arguments)
                } else {
                    None
                }
            }
            Err(_) => None,
        };

        match confirmed {
            Some(type_arguments) => {
                self.accept_buffered();
                self.next_token(); // `(`
                let invocation = self.parse_invocation_remainder(left, type_arguments)?;
                Ok((Expression::Invocation(invocation), false))
            }
            None => {
                self.replay_buffered();
                if right_bp < BP_COMPARISON {
                    self.next_token(); // `<`, this time as an operator
                    let expression = self.parse_binary_remainder(left, BinaryOperation::Lt, BP_COMPARISON, false)?;
                    Ok((expression, false))
                } else {
                    Ok((left, true))
                }
            }
        }
    }

    /// Parses the `T1, T2>` remainder of a type-argument list; the
    /// opening `<` is already consumed. Returns the closing range too.
    pub(crate) fn try_parse_type_arguments_remainder(&mut self) -> Result<(Vec<TypeAnnotation>, Span)> {
        let mut type_arguments = Vec::new();
        self.skip_trivia();
        if let Token::Gt = self.token.token {
            let end = self.token.span;
            self.next_token();
            return Ok((type_arguments, end));
        }
        loop {
            type_arguments.push(self.parse_type_annotation()?);
            self.skip_trivia();
            match &self.token.token {
                Token::Comma => self.next_token(),
                Token::Gt => {
                    let end = self.token.span;
                    self.next_token();
                    return Ok((type_arguments, end));
                }
                got => return Err(ParserError::expected_token(">", got, self.token.span).into()),
            }
        }
    }

    /// The meta left denotation for `?`: optional member access when a
    /// dot sits directly against it, the conditional otherwise.
    fn parse_conditional_or_optional_member(&mut self, right_bp: u8, left: Expression) -> Result<(Expression, bool)> {
        self.start_buffering();
        let question_span = self.token.span;
        self.next_token();

        if matches!(self.token.token, Token::Dot) && self.token.span.start == question_span.end {
            if right_bp < BP_ACCESS {
                self.accept_buffered();
                self.next_token(); // `.`
                let name = self.expect_identifier()?;
                let expression = Expression::Member(MemberExpression {
                    span: left.span() + name.span,
                    object: Box::new(left),
                    optional: true,
                    name,
                });
                return Ok((expression, false));
            }
            self.replay_buffered();
            return Ok((left, true));
        }

        if right_bp < BP_CONDITIONAL {
            self.accept_buffered();
            // Both branches restart at the lowest binding power, so
            // nested conditionals associate to the right.
            let then = self.parse_expression_bp(LOWEST)?;
            self.expect(&Token::Colon)?;
            let otherwise = self.parse_expression_bp(LOWEST)?;
            let expression = Expression::Conditional(ConditionalExpression {
                span: left.span() + otherwise.span(),
                test: Box::new(left),
                then: Box::new(then),
                otherwise: Box::new(otherwise),
            });
            Ok((expression, false))
        } else {
            self.replay_buffered();
            Ok((left, true))
        }
    }

    /// Parses the argument list of an invocation; the opening `(` is
    /// already consumed.
    pub(crate) fn parse_invocation_remainder(
        &mut self,
        callee: Expression,
        type_arguments: Vec<TypeAnnotation>,
    ) -> Result<InvocationExpression> {
        let mut arguments = Vec::new();
        let mut needs_separator = false;
        let end;
        loop {
            self.skip_trivia();
            match &self.token.token {
                Token::RightParen => {
                    end = self.token.span;
                    self.next_token();
                    break;
                }
                Token::Eof => {
                    return Err(ParserError::expected_token(")", &Token::Eof, self.token.span).into());
                }
                _ => {}
            }
            if needs_separator {
                let error = ParserError::unexpected_argument_in_argument_list(&self.token.token, self.token.span);
                self.report(error);
            }
            arguments.push(self.parse_argument()?);
            needs_separator = !self.eat(&Token::Comma);
        }
        Ok(InvocationExpression {
            span: callee.span() + end,
            callee: Box::new(callee),
            type_arguments,
            arguments,
        })
    }

    /// Parses one invocation argument, optionally labelled as
    /// `identifier : expression`.
    fn parse_argument(&mut self) -> Result<Argument> {
        let expression = self.parse_expression()?;
        self.skip_trivia();
        if let (Expression::Identifier(label), Token::Colon) = (&expression, &self.token.token) {
            let label = label.clone();
            self.next_token();
            let value = self.parse_expression()?;
            return Ok(Argument {
                span: label.span + value.span(),
                label: Some(label),
                expression: value,
            });
        }
        Ok(Argument {
            span: expression.span(),
            label: None,
            expression,
        })
    }

    fn apply_expression_null_denotation(&mut self, t: SpannedToken) -> Result<Expression> {
        let span = t.span;
        match t.token {
            Token::DecimalInt(raw) => Ok(Expression::Literal(self.parse_integer_literal(&raw, 10, span))),
            Token::BinaryInt(raw) => Ok(Expression::Literal(self.parse_integer_literal(&raw, 2, span))),
            Token::OctalInt(raw) => Ok(Expression::Literal(self.parse_integer_literal(&raw, 8, span))),
            Token::HexInt(raw) => Ok(Expression::Literal(self.parse_integer_literal(&raw, 16, span))),
            Token::UnknownBaseInt(raw) => {
                let error = ParserError::invalid_integer_literal_unknown_prefix(&raw, span);
                self.report(error);
                Ok(Expression::Literal(Literal::Integer(IntegerLiteral {
                    base: 10,
                    value: "0".to_string(),
                    span,
                })))
            }
            Token::FixedPoint(raw) => Ok(Expression::Literal(parse_fixed_point_literal(&raw, span))),
            Token::Str(value) => Ok(Expression::Literal(Literal::Str(StringLiteral { value, span }))),
            Token::Ident(name) => match name.as_str() {
                keywords::TRUE => Ok(Expression::Literal(Literal::Bool(BoolLiteral { value: true, span }))),
                keywords::FALSE => Ok(Expression::Literal(Literal::Bool(BoolLiteral { value: false, span }))),
                keywords::NIL => Ok(Expression::Literal(Literal::Nil(NilLiteral { span }))),
                keywords::CREATE => self.parse_create_remainder(span),
                keywords::DESTROY => self.parse_destroy_remainder(span),
                keywords::FUN => self.parse_function_expression_remainder(span),
                _ => Ok(Expression::Identifier(Identifier::new(name, span))),
            },
            Token::Add => self.parse_unary_remainder(UnaryOperation::Plus, span),
            Token::Minus => self.parse_unary_remainder(UnaryOperation::Negate, span),
            Token::Bang => self.parse_unary_remainder(UnaryOperation::Not, span),
            Token::LeftArrow => self.parse_unary_remainder(UnaryOperation::Move, span),
            Token::LeftParen => {
                // Grouping is transparent; the inner node keeps its own
                // range.
                let expression = self.parse_expression_bp(LOWEST)?;
                self.expect(&Token::RightParen)?;
                Ok(expression)
            }
            Token::LeftBracket => self.parse_array_remainder(span),
            Token::LeftBrace => self.parse_dictionary_remainder(span),
            Token::Div => self.parse_path_remainder(span),
            Token::Ampersand => self.parse_reference_remainder(span),
            token => Err(ParserError::unexpected_token_in_expression(token, span).into()),
        }
    }

    fn parse_unary_remainder(&mut self, op: UnaryOperation, start: Span) -> Result<Expression> {
        self.skip_trivia();
        // A directly juxtaposed unary operator is recorded, but the
        // operand is still parsed.
        if matches!(
            self.token.token,
            Token::Add | Token::Minus | Token::Bang | Token::LeftArrow
        ) {
            let error = ParserError::juxtaposed_unary_operators(self.token.span);
            self.report(error);
        }
        let operand = self.parse_expression_bp(BP_UNARY_PREFIX)?;
        Ok(Expression::Unary(UnaryExpression {
            span: start + operand.span(),
            op,
            operand: Box::new(operand),
        }))
    }

    /// Decodes an integer literal, recording underscore and
    /// missing-digit problems while still producing a node.
    pub(crate) fn parse_integer_literal(&mut self, raw: &str, base: u32, span: Span) -> Literal {
        let kind = match base {
            2 => "binary",
            8 => "octal",
            16 => "hexadecimal",
            _ => "decimal",
        };
        let digits = if base == 10 { raw } else { &raw[2..] };

        if digits.is_empty() {
            let error = ParserError::invalid_integer_literal_missing_digits(raw, kind, span);
            self.report(error);
            return Literal::Integer(IntegerLiteral {
                base,
                value: "0".to_string(),
                span,
            });
        }
        if digits.starts_with('_') {
            let error = ParserError::invalid_integer_literal_leading_underscore(raw, kind, span);
            self.report(error);
        }
        if digits.ends_with('_') {
            let error = ParserError::invalid_integer_literal_trailing_underscore(raw, kind, span);
            self.report(error);
        }

        let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
        let value = if cleaned.is_empty() {
            "0".to_string()
        } else {
            match u128::from_str_radix(&cleaned, base) {
                Ok(value) => value.to_string(),
                Err(_) => {
                    let error =
                        ParserError::syntax_error(format!("invalid {kind} integer literal `{raw}`"), span);
                    self.report(error);
                    "0".to_string()
                }
            }
        };
        Literal::Integer(IntegerLiteral { base, value, span })
    }

    fn parse_create_remainder(&mut self, start: Span) -> Result<Expression> {
        let invocation = self.parse_nominal_invocation_remainder()?;
        Ok(Expression::Create(CreateExpression {
            span: start + invocation.span,
            invocation,
        }))
    }

    /// Parses a dotted nominal chain that must end in an invocation,
    /// the shared remainder of `create` and `emit`.
    pub(crate) fn parse_nominal_invocation_remainder(&mut self) -> Result<InvocationExpression> {
        let name = self.expect_identifier()?;
        let mut callee = Expression::Identifier(name);
        while self.eat(&Token::Dot) {
            let name = self.expect_identifier()?;
            callee = Expression::Member(MemberExpression {
                span: callee.span() + name.span,
                object: Box::new(callee),
                optional: false,
                name,
            });
        }

        self.skip_trivia();
        let type_arguments = if let Token::Lt = self.token.token {
            self.start_buffering();
            self.next_token();
            match self.try_parse_type_arguments_remainder() {
                Ok((type_arguments, _)) => {
                    self.accept_buffered();
                    type_arguments
                }
                Err(_) => {
                    self.replay_buffered();
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        self.skip_trivia();
        if !matches!(self.token.token, Token::LeftParen) {
            return Err(ParserError::expected_invocation(&self.token.token, self.token.span).into());
        }
        self.next_token();
        self.parse_invocation_remainder(callee, type_arguments)
    }

    fn parse_destroy_remainder(&mut self, start: Span) -> Result<Expression> {
        let expression = self.parse_expression_bp(LOWEST)?;
        Ok(Expression::Destroy(DestroyExpression {
            span: start + expression.span(),
            expression: Box::new(expression),
        }))
    }

    fn parse_function_expression_remainder(&mut self, start: Span) -> Result<Expression> {
        let (parameters, _) = self.parse_parameter_list()?;
        let return_type = if self.eat(&Token::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        let body = self.parse_function_block()?;
        Ok(Expression::Function(Box::new(FunctionExpression {
            span: start + body.span,
            parameters,
            return_type,
            body,
        })))
    }

    fn parse_array_remainder(&mut self, start: Span) -> Result<Expression> {
        let mut elements = Vec::new();
        self.skip_trivia();
        if let Token::RightBracket = self.token.token {
            let end = self.token.span;
            self.next_token();
            return Ok(Expression::Array(ArrayExpression {
                elements,
                span: start + end,
            }));
        }
        loop {
            elements.push(self.parse_expression()?);
            self.skip_trivia();
            match &self.token.token {
                // A trailing comma is not permitted: the next round
                // requires another element.
                Token::Comma => self.next_token(),
                Token::RightBracket => {
                    let end = self.token.span;
                    self.next_token();
                    return Ok(Expression::Array(ArrayExpression {
                        elements,
                        span: start + end,
                    }));
                }
                got => return Err(ParserError::expected_token("]", got, self.token.span).into()),
            }
        }
    }

    fn parse_dictionary_remainder(&mut self, start: Span) -> Result<Expression> {
        let mut entries = Vec::new();
        self.skip_trivia();
        if let Token::RightBrace = self.token.token {
            let end = self.token.span;
            self.next_token();
            return Ok(Expression::Dictionary(DictionaryExpression {
                entries,
                span: start + end,
            }));
        }
        loop {
            let key = self.parse_expression()?;
            self.expect(&Token::Colon)?;
            let value = self.parse_expression()?;
            entries.push(DictionaryEntry {
                span: key.span() + value.span(),
                key,
                value,
            });
            self.skip_trivia();
            match &self.token.token {
                Token::Comma => self.next_token(),
                Token::RightBrace => {
                    let end = self.token.span;
                    self.next_token();
                    return Ok(Expression::Dictionary(DictionaryExpression {
                        entries,
                        span: start + end,
                    }));
                }
                got => return Err(ParserError::expected_token("}", got, self.token.span).into()),
            }
        }
    }

    fn parse_path_remainder(&mut self, start: Span) -> Result<Expression> {
        let domain = self.expect_identifier()?;
        self.expect(&Token::Div)?;
        let identifier = self.expect_identifier()?;
        Ok(Expression::Path(PathExpression {
            span: start + identifier.span,
            domain,
            identifier,
        }))
    }

    fn parse_reference_remainder(&mut self, start: Span) -> Result<Expression> {
        let expression = self.parse_expression_bp(BP_CASTING)?;
        self.expect_keyword(keywords::AS)?;
        let type_ = self.parse_type()?;
        Ok(Expression::Reference(ReferenceExpression {
            span: start + type_.span(),
            expression: Box::new(expression),
            type_,
        }))
    }
}

/// Splits a fixed-point literal into its digit strings.
fn parse_fixed_point_literal(raw: &str, span: Span) -> Literal {
    let (integer, fractional) = raw.split_once('.').unwrap_or((raw, "0"));
    Literal::FixedPoint(FixedPointLiteral {
        integer: integer.chars().filter(|c| *c != '_').collect(),
        fractional: fractional.chars().filter(|c| *c != '_').collect(),
        span,
    })
}
