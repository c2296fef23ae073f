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

use crate::create_messages;

use std::fmt::Display;

create_messages!(
    /// Diagnostics produced while parsing Loam source code.
    ParserError,
    code_mask: 0370000i32,
    code_prefix: "PAR",

    /// A general-purpose parse failure, including failures forwarded from the lexer.
    @formatted
    syntax_error {
        args: (message: impl Display),
        msg: format!("{message}"),
        help: None,
    }

    /// The current token has no null denotation in expression position.
    @formatted
    unexpected_token_in_expression {
        args: (got: impl Display),
        msg: format!("unexpected token in expression: {got}"),
        help: None,
    }

    /// The current token has no null denotation in type position.
    @formatted
    unexpected_token_in_type {
        args: (got: impl Display),
        msg: format!("unexpected token in type: {got}"),
        help: None,
    }

    /// A specific token was required and something else showed up.
    @formatted
    expected_token {
        args: (expected: impl Display, got: impl Display),
        msg: format!("expected token '{expected}', got {got}"),
        help: None,
    }

    @formatted
    juxtaposed_unary_operators {
        args: (),
        msg: "unary operators must not be juxtaposed; parenthesize inner expression",
        help: None,
    }

    @formatted
    invalid_integer_literal_leading_underscore {
        args: (literal: impl Display, kind: impl Display),
        msg: format!("invalid {kind} integer literal `{literal}`: leading underscore"),
        help: Some("remove the leading underscore".to_string()),
    }

    @formatted
    invalid_integer_literal_trailing_underscore {
        args: (literal: impl Display, kind: impl Display),
        msg: format!("invalid {kind} integer literal `{literal}`: trailing underscore"),
        help: Some("remove the trailing underscore".to_string()),
    }

    @formatted
    invalid_integer_literal_unknown_prefix {
        args: (literal: impl Display),
        msg: format!("invalid integer literal `{literal}`: unknown prefix"),
        help: Some("did you mean `0x` (hexadecimal), `0b` (binary), or `0o` (octal)?".to_string()),
    }

    @formatted
    invalid_integer_literal_missing_digits {
        args: (literal: impl Display, kind: impl Display),
        msg: format!("invalid {kind} integer literal `{literal}`: missing digits"),
        help: Some("consider adding a 0".to_string()),
    }

    /// The configurable expression recursion limit was exceeded.
    @formatted
    expression_depth_limit_reached {
        args: (limit: usize),
        msg: format!("exceeded maximum expression depth of {limit}"),
        help: None,
    }

    /// The configurable type recursion limit was exceeded.
    @formatted
    type_depth_limit_reached {
        args: (limit: usize),
        msg: format!("exceeded maximum type depth of {limit}"),
        help: None,
    }

    @formatted
    statements_on_same_line {
        args: (),
        msg: "statements on the same line must be separated with a semicolon",
        help: None,
    }

    @formatted
    missing_comment_end {
        args: (),
        msg: "missing comment end",
        help: None,
    }

    @formatted
    unexpected_argument_in_argument_list {
        args: (got: impl Display),
        msg: format!(
            "unexpected argument in argument list (expecting delimiter or end of argument list), got {got}"
        ),
        help: None,
    }

    /// `create` and `emit` require a nominal invocation remainder.
    @formatted
    expected_invocation {
        args: (got: impl Display),
        msg: format!("expected invocation expression, got {got}"),
        help: None,
    }

    @formatted
    non_nominal_type_in_restriction_list {
        args: (type_: impl Display),
        msg: format!("non-nominal type in restriction list: {type_}"),
        help: None,
    }

    /// The size of a constant-sized array type must be an integer literal.
    @formatted
    invalid_constant_sized_type_size {
        args: (got: impl Display),
        msg: format!("expected integer size for constant-sized type, got {got}"),
        help: None,
    }

    @formatted
    unexpected_comma_in_dictionary_type {
        args: (),
        msg: "unexpected comma in dictionary type",
        help: None,
    }

    @formatted
    unexpected_colon_in_restricted_type {
        args: (),
        msg: "unexpected colon in restricted type",
        help: None,
    }

    @formatted
    expected_member_declaration {
        args: (got: impl Display),
        msg: format!("expected field, initializer, or function declaration, got {got}"),
        help: None,
    }

    @formatted
    expected_declaration {
        args: (got: impl Display),
        msg: format!("expected declaration, got {got}"),
        help: None,
    }

    @formatted
    expected_transfer {
        args: (got: impl Display),
        msg: format!("expected transfer operator ('=', '<-', or '<-!'), got {got}"),
        help: None,
    }

    @formatted
    duplicate_transaction_block {
        args: (kind: impl Display),
        msg: format!("duplicate {kind} block in transaction declaration"),
        help: None,
    }
);
