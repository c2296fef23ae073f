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

use crate::tokenizer::Token;

/// The outcome of scanning one token.
pub(crate) enum Scanned {
    One(Token),
    /// A lexer diagnostic paired with the token the lexer still
    /// produced. The diagnostic is delivered first, over the same
    /// range, so ingestion records it before the grammar sees the
    /// token.
    Errored(String, Token),
}

/// Returns the byte length of the identifier at the front of `input`,
/// or 0 if there is none. Identifiers match `[a-zA-Z_][a-zA-Z0-9_]*`.
fn identifier_len(bytes: &[u8]) -> usize {
    if !(bytes[0].is_ascii_alphabetic() || bytes[0] == b'_') {
        return 0;
    }
    let mut len = 1;
    while len < bytes.len() && (bytes[len].is_ascii_alphanumeric() || bytes[len] == b'_') {
        len += 1;
    }
    len
}

/// Scans the numeric literal at the front of `input`. The raw spelling
/// is kept; digits are decoded by the parser's literal handler.
fn eat_number(input: &str) -> (usize, Scanned) {
    let bytes = input.as_bytes();

    // A base prefix: `0` followed by a letter.
    if bytes[0] == b'0' && bytes.len() > 1 && bytes[1].is_ascii_alphabetic() {
        let prefix = bytes[1];
        let mut len = 2;
        while len < bytes.len() && (bytes[len].is_ascii_alphanumeric() || bytes[len] == b'_') {
            len += 1;
        }
        let raw = input[..len].to_string();
        let token = match prefix {
            b'b' => Token::BinaryInt(raw),
            b'o' => Token::OctalInt(raw),
            b'x' => Token::HexInt(raw),
            _ => Token::UnknownBaseInt(raw),
        };
        if len == 2 && matches!(prefix, b'b' | b'o' | b'x') {
            return (len, Scanned::Errored("missing digits".to_string(), token));
        }
        return (len, Scanned::One(token));
    }

    let mut len = 1;
    while len < bytes.len() && (bytes[len].is_ascii_digit() || bytes[len] == b'_') {
        len += 1;
    }

    // A dot directly followed by a digit makes it a fixed-point literal;
    // any other dot is left for member access.
    if len + 1 < bytes.len() && bytes[len] == b'.' && bytes[len + 1].is_ascii_digit() {
        len += 2;
        while len < bytes.len() && (bytes[len].is_ascii_digit() || bytes[len] == b'_') {
            len += 1;
        }
        return (len, Scanned::One(Token::FixedPoint(input[..len].to_string())));
    }

    (len, Scanned::One(Token::DecimalInt(input[..len].to_string())))
}

/// Scans the string literal at the front of `input`, which starts with
/// a quotation mark. Escapes are decoded here.
fn eat_string(input: &str) -> (usize, Scanned) {
    let mut chars = input.chars();
    let mut len = chars.next().map(char::len_utf8).unwrap_or(0);

    let mut value = String::new();
    let mut invalid_escape = None;

    while let Some(c) = chars.next() {
        len += c.len_utf8();
        match c {
            '"' => {
                let token = Token::Str(value);
                return match invalid_escape {
                    Some(c) => (len, Scanned::Errored(format!("invalid escape character: {c:?}"), token)),
                    None => (len, Scanned::One(token)),
                };
            }
            '\\' => match chars.next() {
                None => break,
                Some(escaped) => {
                    len += escaped.len_utf8();
                    match escaped {
                        '0' => value.push('\0'),
                        't' => value.push('\t'),
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        '"' => value.push('"'),
                        '\'' => value.push('\''),
                        '\\' => value.push('\\'),
                        other => {
                            invalid_escape.get_or_insert(other);
                            value.push(other);
                        }
                    }
                }
            },
            '\n' => break,
            c => value.push(c),
        }
    }

    (
        len,
        Scanned::Errored(
            "invalid end of string literal: missing '\"'".to_string(),
            Token::Str(value),
        ),
    )
}

impl Token {
    /// Scans the next token at the front of the non-empty `input` and
    /// returns the consumed byte length with it.
    pub(crate) fn eat(input: &str) -> (usize, Scanned) {
        let bytes = input.as_bytes();

        // A shorthand for `Scanned::One`.
        let one = |len, token| (len, Scanned::One(token));
        // Consumes `then` if `on` follows, `els` otherwise.
        let followed_by = |on: u8, then: Token, els: Token| {
            if bytes.len() > 1 && bytes[1] == on {
                one(2, then)
            } else {
                one(1, els)
            }
        };

        match bytes[0] {
            b' ' | b'\t' | b'\r' | b'\n' => {
                let mut len = 0;
                let mut contains_newline = false;
                while len < bytes.len() && bytes[len].is_ascii_whitespace() {
                    contains_newline |= bytes[len] == b'\n';
                    len += 1;
                }
                one(len, Token::Space { contains_newline })
            }
            b'"' => eat_string(input),
            b'0'..=b'9' => eat_number(input),

            b'(' => one(1, Token::LeftParen),
            b')' => one(1, Token::RightParen),
            b'{' => one(1, Token::LeftBrace),
            b'}' => one(1, Token::RightBrace),
            b'[' => one(1, Token::LeftBracket),
            b']' => one(1, Token::RightBracket),
            b',' => one(1, Token::Comma),
            b':' => one(1, Token::Colon),
            b';' => one(1, Token::Semicolon),
            b'.' => one(1, Token::Dot),
            b'@' => one(1, Token::At),
            b'+' => one(1, Token::Add),
            b'*' => one(1, Token::Mul),
            b'%' => one(1, Token::Rem),
            b'^' => one(1, Token::Caret),
            b'-' => one(1, Token::Minus),

            b'?' => followed_by(b'?', Token::DoubleQuestion, Token::Question),
            b'!' => followed_by(b'=', Token::NotEq, Token::Bang),
            b'=' => followed_by(b'=', Token::Eq, Token::Assign),
            b'&' => followed_by(b'&', Token::And, Token::Ampersand),
            b'|' => followed_by(b'|', Token::Or, Token::Pipe),

            b'>' => {
                if bytes.len() > 1 && bytes[1] == b'=' {
                    one(2, Token::GtEq)
                } else if bytes.len() > 1 && bytes[1] == b'>' {
                    one(2, Token::Shr)
                } else {
                    one(1, Token::Gt)
                }
            }
            b'<' => match bytes.get(1) {
                Some(b'=') => one(2, Token::LtEq),
                Some(b'<') => one(2, Token::Shl),
                Some(b'-') => match bytes.get(2) {
                    Some(b'!') => one(3, Token::LeftArrowBang),
                    Some(b'>') => one(3, Token::Swap),
                    _ => one(2, Token::LeftArrow),
                },
                _ => one(1, Token::Lt),
            },

            b'/' => match bytes.get(1) {
                Some(b'/') => {
                    let mut len = 2;
                    while len < bytes.len() && bytes[len] != b'\n' {
                        len += 1;
                    }
                    one(len, Token::CommentLine(input[..len].to_string()))
                }
                // The comment body is scanned in comment mode, so that
                // nesting stays visible to the trivia skipper.
                Some(b'*') => one(2, Token::BlockCommentStart),
                _ => one(1, Token::Div),
            },

            _ => {
                let len = identifier_len(bytes);
                if len > 0 {
                    return one(len, Token::Ident(input[..len].to_string()));
                }
                let c = input.chars().next().expect("non-empty input");
                (
                    c.len_utf8(),
                    Scanned::One(Token::Error(format!("unexpected character: {c:?}"))),
                )
            }
        }
    }

    /// Scans the next token inside a block comment: a nested opening,
    /// the closing, or a run of content.
    pub(crate) fn eat_in_comment(input: &str) -> (usize, Token) {
        let bytes = input.as_bytes();

        if bytes.starts_with(b"/*") {
            return (2, Token::BlockCommentStart);
        }
        if bytes.starts_with(b"*/") {
            return (2, Token::BlockCommentEnd);
        }

        let mut len = 0;
        while len < bytes.len() {
            if input[len..].starts_with("/*") || input[len..].starts_with("*/") {
                break;
            }
            len += input[len..].chars().next().expect("non-empty input").len_utf8();
        }
        (len, Token::BlockCommentContent(input[..len].to_string()))
    }
}
