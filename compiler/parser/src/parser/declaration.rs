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
use loam_span::Span;

impl ParserContext<'_> {
    /// Parses top-level declarations up to EOF. Failures are recorded
    /// and end the list; the declarations parsed so far are kept.
    pub(crate) fn parse_declaration_list(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        loop {
            self.skip_trivia();
            match &self.token.token {
                Token::Eof => break,
                Token::Semicolon => {
                    self.next_token();
                    continue;
                }
                _ => {}
            }
            match self.parse_declaration() {
                Ok(declaration) => declarations.push(declaration),
                Err(error) => {
                    tracing::debug!("abandoning declaration list: {error}");
                    self.report(error);
                    break;
                }
            }
        }
        declarations
    }

    /// Returns a [`Declaration`], or errors when the next tokens start
    /// none.
    pub(crate) fn parse_declaration(&mut self) -> Result<Declaration> {
        match self.try_parse_declaration()? {
            Some(declaration) => Ok(declaration),
            None => Err(ParserError::expected_declaration(&self.token.token, self.token.span).into()),
        }
    }

    /// Returns a [`Declaration`] if the next tokens start one, `None`
    /// otherwise (so statement parsing can fall through to
    /// expressions).
    pub(crate) fn try_parse_declaration(&mut self) -> Result<Option<Declaration>> {
        self.skip_trivia();
        let keyword = match &self.token.token {
            Token::Ident(name) => name.clone(),
            _ => return Ok(None),
        };
        match keyword.as_str() {
            keywords::LET | keywords::VAR => Ok(Some(Declaration::Variable(Box::new(
                self.parse_variable_declaration(Access::NotSpecified, false)?,
            )))),
            keywords::FUN => Ok(Some(Declaration::Function(Box::new(
                self.parse_function_declaration(Access::NotSpecified)?,
            )))),
            keywords::STRUCT | keywords::RESOURCE | keywords::CONTRACT => {
                Ok(Some(self.parse_composite_or_interface(Access::NotSpecified)?))
            }
            keywords::EVENT => Ok(Some(Declaration::Event(
                self.parse_event_declaration(Access::NotSpecified)?,
            ))),
            keywords::IMPORT => Ok(Some(Declaration::Import(self.parse_import_declaration()?))),
            keywords::TRANSACTION => Ok(Some(Declaration::Transaction(self.parse_transaction_declaration()?))),
            // An access modifier commits only when a declaration
            // follows; `pub`, `priv`, and `access` stay usable as
            // ordinary identifiers otherwise.
            keywords::PUB | keywords::PRIV | keywords::ACCESS => {
                self.start_buffering();
                match self.parse_access_modifier() {
                    Ok(access) => {
                        self.skip_trivia();
                        if self.at_declaration_keyword() {
                            self.accept_buffered();
                            Ok(Some(self.parse_declaration_with_access(access)?))
                        } else {
                            self.replay_buffered();
                            Ok(None)
                        }
                    }
                    Err(_) => {
                        self.replay_buffered();
                        Ok(None)
                    }
                }
            }
            _ => Ok(None),
        }
    }

    fn at_declaration_keyword(&self) -> bool {
        matches!(
            self.token.token.identifier(),
            Some(
                keywords::LET
                    | keywords::VAR
                    | keywords::FUN
                    | keywords::STRUCT
                    | keywords::RESOURCE
                    | keywords::CONTRACT
                    | keywords::EVENT
            )
        )
    }

    fn parse_declaration_with_access(&mut self, access: Access) -> Result<Declaration> {
        self.skip_trivia();
        let keyword = match &self.token.token {
            Token::Ident(name) => name.clone(),
            got => return Err(ParserError::expected_declaration(got, self.token.span).into()),
        };
        match keyword.as_str() {
            keywords::LET | keywords::VAR => Ok(Declaration::Variable(Box::new(
                self.parse_variable_declaration(access, false)?,
            ))),
            keywords::FUN => Ok(Declaration::Function(Box::new(
                self.parse_function_declaration(access)?,
            ))),
            keywords::STRUCT | keywords::RESOURCE | keywords::CONTRACT => {
                self.parse_composite_or_interface(access)
            }
            keywords::EVENT => Ok(Declaration::Event(self.parse_event_declaration(access)?)),
            _ => Err(ParserError::expected_declaration(&keyword, self.token.span).into()),
        }
    }

    /// Parses `pub`, `pub(set)`, `priv`, or `access(all|account|
    /// contract|self)`.
    fn parse_access_modifier(&mut self) -> Result<Access> {
        if self.eat_keyword(keywords::PRIV) {
            return Ok(Access::Priv);
        }
        if self.eat_keyword(keywords::PUB) {
            self.skip_trivia();
            if matches!(self.token.token, Token::LeftParen) {
                self.next_token();
                self.expect_keyword(keywords::SET)?;
                self.expect(&Token::RightParen)?;
                return Ok(Access::PubSettable);
            }
            return Ok(Access::Pub);
        }
        if self.eat_keyword(keywords::ACCESS) {
            self.expect(&Token::LeftParen)?;
            let identifier = self.expect_identifier()?;
            let access = match identifier.name.as_str() {
                keywords::ALL => Access::All,
                keywords::ACCOUNT => Access::Account,
                keywords::CONTRACT => Access::Contract,
                keywords::SELF => Access::Self_,
                _ => {
                    return Err(ParserError::expected_token(
                        "all, account, contract, or self",
                        &identifier.name,
                        identifier.span,
                    )
                    .into())
                }
            };
            self.expect(&Token::RightParen)?;
            return Ok(access);
        }
        Err(ParserError::expected_declaration(&self.token.token, self.token.span).into())
    }

    /// Returns a [`VariableDeclaration`], with up to two transfer and
    /// value pairs, e.g. `let r2 <- create R() <- old`.
    pub(crate) fn parse_variable_declaration(
        &mut self,
        access: Access,
        is_if_binding: bool,
    ) -> Result<VariableDeclaration> {
        self.skip_trivia();
        let start = self.token.span;
        let is_constant = self.check_keyword(keywords::LET);
        self.next_token(); // `let` or `var`; the caller dispatched on it

        let name = self.expect_identifier()?;
        let type_annotation = if self.eat(&Token::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        let transfer = self.expect_transfer()?;
        let value = self.parse_expression()?;

        let mut second_transfer = None;
        let mut second_value = None;
        if let Some(transfer) = self.eat_transfer() {
            second_transfer = Some(transfer);
            second_value = Some(self.parse_expression()?);
        }

        let end = second_value
            .as_ref()
            .map(|second| second.span())
            .unwrap_or_else(|| value.span());
        Ok(VariableDeclaration {
            access,
            is_constant,
            name,
            type_annotation,
            transfer,
            value,
            second_transfer,
            second_value,
            is_if_binding,
            span: start + end,
        })
    }

    /// Returns a [`FunctionDeclaration`]. The body is optional so
    /// interfaces can declare requirements.
    pub(crate) fn parse_function_declaration(&mut self, access: Access) -> Result<FunctionDeclaration> {
        let start = self.expect_keyword(keywords::FUN)?;
        let name = self.expect_identifier()?;
        let (parameters, parameters_span) = self.parse_parameter_list()?;
        let return_type = if self.eat(&Token::Colon) {
            Some(self.parse_type_annotation()?)
        } else {
            None
        };
        self.skip_trivia();
        let body = if matches!(self.token.token, Token::LeftBrace) {
            Some(self.parse_function_block()?)
        } else {
            None
        };

        let end = body
            .as_ref()
            .map(|body| body.span)
            .or_else(|| return_type.as_ref().map(|annotation| annotation.span))
            .unwrap_or(parameters_span);
        Ok(FunctionDeclaration {
            access,
            name,
            parameters,
            return_type,
            body,
            span: start + end,
        })
    }

    /// Parses a parenthesized, comma-separated parameter list. Returns
    /// the parameters and the range of the parentheses.
    pub(crate) fn parse_parameter_list(&mut self) -> Result<(Vec<Parameter>, Span)> {
        let open = self.expect(&Token::LeftParen)?;
        let mut parameters = Vec::new();
        self.skip_trivia();
        if let Token::RightParen = self.token.token {
            let close = self.token.span;
            self.next_token();
            return Ok((parameters, open + close));
        }
        loop {
            parameters.push(self.parse_parameter()?);
            self.skip_trivia();
            match &self.token.token {
                Token::Comma => self.next_token(),
                Token::RightParen => {
                    let close = self.token.span;
                    self.next_token();
                    return Ok((parameters, open + close));
                }
                got => return Err(ParserError::expected_token(")", got, self.token.span).into()),
            }
        }
    }

    /// Parses one parameter `label? name: Type`; two identifiers make
    /// the first an argument label.
    fn parse_parameter(&mut self) -> Result<Parameter> {
        let first = self.expect_identifier()?;
        self.skip_trivia();
        let (label, name) = if let Token::Ident(_) = self.token.token {
            let name = self.expect_identifier()?;
            (Some(first), name)
        } else {
            (None, first)
        };
        self.expect(&Token::Colon)?;
        let type_annotation = self.parse_type_annotation()?;
        let start = label.as_ref().map(|label| label.span).unwrap_or(name.span);
        Ok(Parameter {
            span: start + type_annotation.span,
            label,
            name,
            type_annotation,
        })
    }

    /// Parses a composite (`struct`/`resource`/`contract`) or, with
    /// the `interface` keyword after the kind, a composite interface.
    fn parse_composite_or_interface(&mut self, access: Access) -> Result<Declaration> {
        self.skip_trivia();
        let start = self.token.span;
        let kind = match self.token.token.identifier() {
            Some(keywords::STRUCT) => CompositeKind::Struct,
            Some(keywords::RESOURCE) => CompositeKind::Resource,
            Some(keywords::CONTRACT) => CompositeKind::Contract,
            _ => unreachable!("composite dispatch checked the keyword"),
        };
        self.next_token();

        if self.eat_keyword(keywords::INTERFACE) {
            let name = self.expect_identifier()?;
            let (members, end) = self.parse_members()?;
            return Ok(Declaration::Interface(InterfaceDeclaration {
                access,
                kind,
                name,
                members,
                span: start + end,
            }));
        }

        let name = self.expect_identifier()?;
        let conformances = if self.eat(&Token::Colon) {
            self.parse_conformances()?
        } else {
            Vec::new()
        };
        let (members, end) = self.parse_members()?;
        Ok(Declaration::Composite(CompositeDeclaration {
            access,
            kind,
            name,
            conformances,
            members,
            span: start + end,
        }))
    }

    fn parse_conformances(&mut self) -> Result<Vec<NominalType>> {
        let mut conformances = Vec::new();
        loop {
            let name = self.expect_identifier()?;
            conformances.push(self.parse_nominal_type_remainder(name)?);
            if !self.eat(&Token::Comma) {
                return Ok(conformances);
            }
        }
    }

    /// Parses a brace-delimited member list: fields, `init`/`destroy`
    /// special functions, and functions, with optional access
    /// modifiers.
    fn parse_members(&mut self) -> Result<(Vec<MemberDeclaration>, Span)> {
        self.expect(&Token::LeftBrace)?;
        let mut members = Vec::new();
        loop {
            self.skip_trivia();
            match &self.token.token {
                Token::RightBrace => {
                    let end = self.token.span;
                    self.next_token();
                    return Ok((members, end));
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
            members.push(self.parse_member()?);
        }
    }

    fn parse_member(&mut self) -> Result<MemberDeclaration> {
        self.skip_trivia();
        let access = match self.token.token.identifier() {
            Some(keywords::PUB | keywords::PRIV | keywords::ACCESS) => self.parse_access_modifier()?,
            _ => Access::NotSpecified,
        };
        self.skip_trivia();
        let keyword = match &self.token.token {
            Token::Ident(name) => name.clone(),
            got => return Err(ParserError::expected_member_declaration(got, self.token.span).into()),
        };
        match keyword.as_str() {
            keywords::LET | keywords::VAR => self.parse_field_declaration(access).map(MemberDeclaration::Field),
            keywords::FUN => self
                .parse_function_declaration(access)
                .map(MemberDeclaration::Function),
            keywords::INIT => self
                .parse_special_function(SpecialFunctionKind::Init)
                .map(MemberDeclaration::SpecialFunction),
            keywords::DESTROY => self
                .parse_special_function(SpecialFunctionKind::Destroy)
                .map(MemberDeclaration::SpecialFunction),
            _ => Err(ParserError::expected_member_declaration(&keyword, self.token.span).into()),
        }
    }

    /// Parses a field `let`/`var` name and type; fields have no
    /// initializer.
    fn parse_field_declaration(&mut self, access: Access) -> Result<FieldDeclaration> {
        self.skip_trivia();
        let start = self.token.span;
        let is_constant = self.check_keyword(keywords::LET);
        self.next_token(); // `let` or `var`; the caller dispatched on it
        let name = self.expect_identifier()?;
        self.expect(&Token::Colon)?;
        let type_annotation = self.parse_type_annotation()?;
        Ok(FieldDeclaration {
            access,
            is_constant,
            name,
            span: start + type_annotation.span,
            type_annotation,
        })
    }

    /// Parses a special function (`init`, `destroy`, `prepare`,
    /// `execute`): no `fun` keyword, optional parameters, optional
    /// body.
    fn parse_special_function(&mut self, kind: SpecialFunctionKind) -> Result<SpecialFunctionDeclaration> {
        self.skip_trivia();
        let start = self.token.span;
        self.next_token(); // the special function's keyword

        self.skip_trivia();
        let parameters = if matches!(self.token.token, Token::LeftParen) {
            self.parse_parameter_list()?.0
        } else {
            Vec::new()
        };
        self.skip_trivia();
        let body = if matches!(self.token.token, Token::LeftBrace) {
            Some(self.parse_function_block()?)
        } else {
            None
        };
        let end = body.as_ref().map(|body| body.span).unwrap_or(start);
        Ok(SpecialFunctionDeclaration {
            kind,
            parameters,
            body,
            span: start + end,
        })
    }

    fn parse_event_declaration(&mut self, access: Access) -> Result<EventDeclaration> {
        let start = self.expect_keyword(keywords::EVENT)?;
        let name = self.expect_identifier()?;
        let (parameters, parameters_span) = self.parse_parameter_list()?;
        Ok(EventDeclaration {
            access,
            name,
            parameters,
            span: start + parameters_span,
        })
    }

    /// Parses `import A, B from location`, or a bare `import location`.
    fn parse_import_declaration(&mut self) -> Result<ImportDeclaration> {
        let start = self.expect_keyword(keywords::IMPORT)?;
        self.skip_trivia();

        if let Token::Ident(_) = self.token.token {
            let first = self.expect_identifier()?;
            self.skip_trivia();
            if matches!(self.token.token, Token::Comma) || self.check_keyword(keywords::FROM) {
                let mut identifiers = vec![first];
                while self.eat(&Token::Comma) {
                    identifiers.push(self.expect_identifier()?);
                }
                self.expect_keyword(keywords::FROM)?;
                let location = self.parse_import_location()?;
                return Ok(ImportDeclaration {
                    span: start + location.span(),
                    identifiers,
                    location,
                });
            }
            return Ok(ImportDeclaration {
                span: start + first.span,
                identifiers: Vec::new(),
                location: ImportLocation::Identifier(first),
            });
        }

        let location = self.parse_import_location()?;
        Ok(ImportDeclaration {
            span: start + location.span(),
            identifiers: Vec::new(),
            location,
        })
    }

    fn parse_import_location(&mut self) -> Result<ImportLocation> {
        self.skip_trivia();
        let span = self.token.span;
        let location = match &self.token.token {
            Token::Str(value) => ImportLocation::Str(StringLiteral {
                value: value.clone(),
                span,
            }),
            Token::HexInt(raw) => ImportLocation::Address(AddressLocation {
                address: raw.clone(),
                span,
            }),
            Token::Ident(name) => ImportLocation::Identifier(Identifier::new(name.clone(), span)),
            got => {
                return Err(ParserError::expected_token("identifier, string, or address", got, span).into());
            }
        };
        self.next_token();
        Ok(location)
    }

    /// Parses a transaction declaration: optional parameters, then
    /// fields and the `prepare`/`pre`/`execute`/`post` phases in its
    /// body.
    fn parse_transaction_declaration(&mut self) -> Result<TransactionDeclaration> {
        let start = self.expect_keyword(keywords::TRANSACTION)?;
        self.skip_trivia();
        let parameters = if matches!(self.token.token, Token::LeftParen) {
            self.parse_parameter_list()?.0
        } else {
            Vec::new()
        };
        self.expect(&Token::LeftBrace)?;

        let mut fields = Vec::new();
        let mut prepare = None;
        let mut pre_conditions = None;
        let mut execute = None;
        let mut post_conditions = None;
        let end;
        loop {
            self.skip_trivia();
            match &self.token.token {
                Token::RightBrace => {
                    end = self.token.span;
                    self.next_token();
                    break;
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
            let keyword = match &self.token.token {
                Token::Ident(name) => name.clone(),
                got => return Err(ParserError::expected_member_declaration(got, self.token.span).into()),
            };
            match keyword.as_str() {
                keywords::LET | keywords::VAR => {
                    fields.push(self.parse_field_declaration(Access::NotSpecified)?);
                }
                keywords::PREPARE => {
                    let function = self.parse_special_function(SpecialFunctionKind::Prepare)?;
                    if prepare.is_some() {
                        let error = ParserError::duplicate_transaction_block("prepare", function.span);
                        self.report(error);
                    } else {
                        prepare = Some(function);
                    }
                }
                keywords::EXECUTE => {
                    let function = self.parse_special_function(SpecialFunctionKind::Execute)?;
                    if execute.is_some() {
                        let error = ParserError::duplicate_transaction_block("execute", function.span);
                        self.report(error);
                    } else {
                        execute = Some(function);
                    }
                }
                keywords::PRE => match self.eat_condition_section(keywords::PRE)? {
                    Some(conditions) => pre_conditions = Some(conditions),
                    None => {
                        return Err(
                            ParserError::expected_token("{", &self.token.token, self.token.span).into()
                        );
                    }
                },
                keywords::POST => match self.eat_condition_section(keywords::POST)? {
                    Some(conditions) => post_conditions = Some(conditions),
                    None => {
                        return Err(
                            ParserError::expected_token("{", &self.token.token, self.token.span).into()
                        );
                    }
                },
                _ => return Err(ParserError::expected_member_declaration(&keyword, self.token.span).into()),
            }
        }

        Ok(TransactionDeclaration {
            parameters,
            fields,
            prepare,
            pre_conditions,
            execute,
            post_conditions,
            span: start + end,
        })
    }
}
