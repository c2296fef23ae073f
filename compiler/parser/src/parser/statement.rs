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

use crate::tokenizer::{keywords, Token};

use loam_ast::*;
use loam_errors::{ParserError, Result};

impl ParserContext<'_> {
    /// Parses statements up to EOF or a closing brace. Failures inside
    /// a statement are recorded and end the list; the statements parsed
    /// so far are kept.
    pub(crate) fn parse_statement_list(&mut self) -> Vec<Statement> {
        let mut statements = Vec::new();
        let mut separated = true;
        loop {
            separated |= self.skip_trivia();
            match &self.token.token {
                Token::Eof | Token::RightBrace => break,
                Token::Semicolon => {
                    self.next_token();
                    separated = true;
                    continue;
                }
                _ => {}
            }
            // Two statements on one line need a semicolon in between.
            if !separated {
                let error = ParserError::statements_on_same_line(self.token.span);
                self.report(error);
            }
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    tracing::debug!("abandoning statement list: {error}");
                    self.report(error);
                    break;
                }
            }
            separated = false;
        }
        statements
    }

    /// Returns a [`Statement`] AST node if the next tokens represent a
    /// statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement> {
        self.skip_trivia();

        if let Token::Ident(name) = &self.token.token {
            match name.as_str() {
                keywords::RETURN => return self.parse_return_statement(),
                keywords::BREAK => {
                    let span = self.token.span;
                    self.next_token();
                    return Ok(Statement::Break(BreakStatement { span }));
                }
                keywords::CONTINUE => {
                    let span = self.token.span;
                    self.next_token();
                    return Ok(Statement::Continue(ContinueStatement { span }));
                }
                keywords::IF => {
                    return self.parse_if_statement().map(|s| Statement::If(Box::new(s)));
                }
                keywords::WHILE => return self.parse_while_statement(),
                keywords::FOR => return self.parse_for_statement(),
                keywords::EMIT => return self.parse_emit_statement(),
                _ => {}
            }
        }

        if let Some(declaration) = self.try_parse_declaration()? {
            return Ok(Statement::Declaration(Box::new(declaration)));
        }

        // Otherwise it is an expression; the operator after it decides
        // between assignment, swap, and a plain expression statement.
        let expression = self.parse_expression()?;
        self.skip_trivia();
        if let Token::Swap = self.token.token {
            self.next_token();
            let right = self.parse_expression()?;
            return Ok(Statement::Swap(Box::new(SwapStatement {
                span: expression.span() + right.span(),
                left: expression,
                right,
            })));
        }
        if let Some(transfer) = self.eat_transfer() {
            let value = self.parse_expression()?;
            return Ok(Statement::Assign(Box::new(AssignStatement {
                span: expression.span() + value.span(),
                target: expression,
                transfer,
                value,
            })));
        }
        Ok(Statement::Expression(ExpressionStatement {
            span: expression.span(),
            expression,
        }))
    }

    /// Returns a [`ReturnStatement`]. The value must start on the same
    /// line; an expression on the next line is the next statement.
    fn parse_return_statement(&mut self) -> Result<Statement> {
        let start = self.token.span;
        self.next_token(); // `return`
        let newline = self.skip_trivia();
        let expression = if newline
            || matches!(
                self.token.token,
                Token::Eof | Token::RightBrace | Token::Semicolon
            ) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        let span = match &expression {
            Some(expression) => start + expression.span(),
            None => start,
        };
        Ok(Statement::Return(ReturnStatement { expression, span }))
    }

    /// Returns an [`IfStatement`]. `else if` clauses are collected
    /// iteratively and folded into nested `if`s from the right.
    fn parse_if_statement(&mut self) -> Result<IfStatement> {
        let start = self.token.span;
        self.next_token(); // `if`
        let test = self.parse_if_statement_test()?;
        let then = self.parse_block()?;

        let mut clauses = vec![(start, test, then)];
        let mut else_block = None;
        while self.eat_keyword(keywords::ELSE) {
            self.skip_trivia();
            if self.check_keyword(keywords::IF) {
                let if_start = self.token.span;
                self.next_token();
                let test = self.parse_if_statement_test()?;
                let then = self.parse_block()?;
                clauses.push((if_start, test, then));
            } else {
                else_block = Some(Statement::Block(self.parse_block()?));
                break;
            }
        }

        let mut otherwise = else_block;
        while let Some((start, test, then)) = clauses.pop() {
            let end = otherwise.as_ref().map(|s| s.span()).unwrap_or(then.span);
            otherwise = Some(Statement::If(Box::new(IfStatement {
                test,
                then,
                otherwise: otherwise.map(Box::new),
                span: start + end,
            })));
        }
        match otherwise {
            Some(Statement::If(statement)) => Ok(*statement),
            _ => unreachable!("folding an if chain always yields an if"),
        }
    }

    /// Parses the test of an `if`: an optional binding (`if let x <-
    /// value`) or a plain condition.
    fn parse_if_statement_test(&mut self) -> Result<IfTest> {
        self.skip_trivia();
        if self.check_keyword(keywords::LET) || self.check_keyword(keywords::VAR) {
            let binding = self.parse_variable_declaration(Access::NotSpecified, true)?;
            return Ok(IfTest::Binding(Box::new(binding)));
        }
        Ok(IfTest::Expression(self.parse_expression()?))
    }

    fn parse_while_statement(&mut self) -> Result<Statement> {
        let start = self.token.span;
        self.next_token(); // `while`
        let condition = self.parse_expression()?;
        let block = self.parse_block()?;
        Ok(Statement::While(Box::new(WhileStatement {
            span: start + block.span,
            condition,
            block,
        })))
    }

    fn parse_for_statement(&mut self) -> Result<Statement> {
        let start = self.token.span;
        self.next_token(); // `for`
        let identifier = self.expect_identifier()?;
        self.expect_keyword(keywords::IN)?;
        let iterable = self.parse_expression()?;
        let block = self.parse_block()?;
        Ok(Statement::For(Box::new(ForStatement {
            span: start + block.span,
            identifier,
            iterable,
            block,
        })))
    }

    fn parse_emit_statement(&mut self) -> Result<Statement> {
        let start = self.token.span;
        self.next_token(); // `emit`
        let invocation = self.parse_nominal_invocation_remainder()?;
        Ok(Statement::Emit(EmitStatement {
            span: start + invocation.span,
            invocation,
        }))
    }

    /// Returns a [`Block`] AST node if the next tokens represent a
    /// brace-delimited list of statements.
    pub(crate) fn parse_block(&mut self) -> Result<Block> {
        let open = self.expect(&Token::LeftBrace)?;
        let statements = self.parse_statement_list();
        let close = self.expect(&Token::RightBrace)?;
        Ok(Block {
            statements,
            span: open + close,
        })
    }

    /// Returns a [`FunctionBlock`]: optional `pre` and `post` condition
    /// sections followed by statements, all in one pair of braces.
    pub(crate) fn parse_function_block(&mut self) -> Result<FunctionBlock> {
        let open = self.expect(&Token::LeftBrace)?;
        let pre_conditions = self.eat_condition_section(keywords::PRE)?;
        let post_conditions = self.eat_condition_section(keywords::POST)?;
        let statements = self.parse_statement_list();
        let close = self.expect(&Token::RightBrace)?;
        let span = open + close;
        Ok(FunctionBlock {
            pre_conditions,
            post_conditions,
            block: Block { statements, span },
            span,
        })
    }

    /// Eats a `pre { ... }` / `post { ... }` section if one starts
    /// here. The spelling alone does not commit: only a following
    /// brace does, so `pre` stays usable as an identifier.
    pub(crate) fn eat_condition_section(&mut self, keyword: &str) -> Result<Option<Vec<Condition>>> {
        self.skip_trivia();
        if !self.check_keyword(keyword) {
            return Ok(None);
        }
        self.start_buffering();
        self.next_token(); // the section keyword
        self.skip_trivia();
        if !matches!(self.token.token, Token::LeftBrace) {
            self.replay_buffered();
            return Ok(None);
        }
        self.accept_buffered();
        self.next_token(); // `{`

        let mut conditions = Vec::new();
        loop {
            self.skip_trivia();
            match &self.token.token {
                Token::RightBrace => {
                    self.next_token();
                    return Ok(Some(conditions));
                }
                Token::Semicolon => {
                    self.next_token();
                    continue;
                }
                Token::Eof => {
                    return Err(ParserError::expected_token("}", &Token::Eof, self.token.span).into());
                }
                _ => {}
            }
            let test = self.parse_expression()?;
            self.skip_trivia();
            let message = if self.eat(&Token::Colon) {
                Some(self.parse_expression()?)
            } else {
                None
            };
            let span = match &message {
                Some(message) => test.span() + message.span(),
                None => test.span(),
            };
            conditions.push(Condition { test, message, span });
        }
    }
}
