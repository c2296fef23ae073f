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

//! The tokenizer to convert Loam source text into tokens.
//!
//! Trivia is not stripped: whitespace and comments are tokens in their
//! own right, because statement termination and parts of the type
//! grammar are newline- and space-sensitive. Block comments are
//! emitted as start/content/end sequences so the parser's trivia
//! skipper can track their nesting itself.

pub(crate) mod lexer;
pub(crate) use self::lexer::Scanned;

pub(crate) mod token;
pub use self::token::{keywords, SpannedToken, Token};

use loam_span::{Position, Span};

/// Returns `position` advanced past `consumed`.
fn advance(mut position: Position, consumed: &str) -> Position {
    for c in consumed.chars() {
        position = position.advanced(c);
    }
    position
}

/// Creates a new vector of spanned tokens from the given source text.
/// EOF is not included; the parser synthesizes it.
pub fn tokenize(source: &str) -> Vec<SpannedToken> {
    let mut tokens = Vec::new();
    let mut index = 0usize;
    let mut position = Position::start();
    let mut comment_depth = 0usize;

    while index < source.len() {
        let rest = &source[index..];

        if comment_depth > 0 {
            let (len, token) = Token::eat_in_comment(rest);
            match token {
                Token::BlockCommentStart => comment_depth += 1,
                Token::BlockCommentEnd => comment_depth -= 1,
                _ => {}
            }
            let end = advance(position, &rest[..len]);
            tokens.push(SpannedToken {
                token,
                span: Span::new(position, end),
            });
            position = end;
            index += len;
            continue;
        }

        let (len, scanned) = Token::eat(rest);
        let end = advance(position, &rest[..len]);
        let span = Span::new(position, end);
        match scanned {
            Scanned::One(token) => {
                if token == Token::BlockCommentStart {
                    comment_depth += 1;
                }
                tokens.push(SpannedToken { token, span });
            }
            Scanned::Errored(message, token) => {
                tokens.push(SpannedToken {
                    token: Token::Error(message),
                    span,
                });
                tokens.push(SpannedToken { token, span });
            }
        }
        position = end;
        index += len;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn test_operators() {
        assert_eq!(kinds("<-"), vec![Token::LeftArrow]);
        assert_eq!(kinds("<-!"), vec![Token::LeftArrowBang]);
        assert_eq!(kinds("<->"), vec![Token::Swap]);
        assert_eq!(kinds("<<"), vec![Token::Shl]);
        assert_eq!(kinds("<="), vec![Token::LtEq]);
        assert_eq!(kinds("??"), vec![Token::DoubleQuestion]);
        assert_eq!(kinds("!="), vec![Token::NotEq]);
        assert_eq!(
            kinds("a<b"),
            vec![
                Token::Ident("a".into()),
                Token::Lt,
                Token::Ident("b".into())
            ]
        );
    }

    #[test]
    fn test_trivia_is_preserved() {
        assert_eq!(
            kinds("a \n b"),
            vec![
                Token::Ident("a".into()),
                Token::Space { contains_newline: true },
                Token::Ident("b".into()),
            ]
        );
        assert_eq!(
            kinds("a b"),
            vec![
                Token::Ident("a".into()),
                Token::Space { contains_newline: false },
                Token::Ident("b".into()),
            ]
        );
    }

    #[test]
    fn test_line_comment_excludes_newline() {
        assert_eq!(
            kinds("// note\nx"),
            vec![
                Token::CommentLine("// note".into()),
                Token::Space { contains_newline: true },
                Token::Ident("x".into()),
            ]
        );
    }

    #[test]
    fn test_nested_block_comment() {
        assert_eq!(
            kinds("/* a /* b */ c */"),
            vec![
                Token::BlockCommentStart,
                Token::BlockCommentContent(" a ".into()),
                Token::BlockCommentStart,
                Token::BlockCommentContent(" b ".into()),
                Token::BlockCommentEnd,
                Token::BlockCommentContent(" c ".into()),
                Token::BlockCommentEnd,
            ]
        );
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(kinds("123"), vec![Token::DecimalInt("123".into())]);
        assert_eq!(kinds("0b1010"), vec![Token::BinaryInt("0b1010".into())]);
        assert_eq!(kinds("0o17"), vec![Token::OctalInt("0o17".into())]);
        assert_eq!(kinds("0xFF_aa"), vec![Token::HexInt("0xFF_aa".into())]);
        assert_eq!(kinds("0z1"), vec![Token::UnknownBaseInt("0z1".into())]);
        assert_eq!(kinds("3.14"), vec![Token::FixedPoint("3.14".into())]);
    }

    #[test]
    fn test_integer_literal_missing_digits() {
        assert_eq!(
            kinds("0b"),
            vec![
                Token::Error("missing digits".into()),
                Token::BinaryInt("0b".into()),
            ]
        );
    }

    #[test]
    fn test_member_access_is_not_fixed_point() {
        assert_eq!(
            kinds("1.add"),
            vec![
                Token::DecimalInt("1".into()),
                Token::Dot,
                Token::Ident("add".into()),
            ]
        );
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(kinds(r#""hello""#), vec![Token::Str("hello".into())]);
        assert_eq!(kinds(r#""a\nb""#), vec![Token::Str("a\nb".into())]);
        assert_eq!(
            kinds(r#""open"#),
            vec![
                Token::Error("invalid end of string literal: missing '\"'".into()),
                Token::Str("open".into()),
            ]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("ab +\ncd");
        let positions: Vec<(u32, u32, u32)> = tokens
            .iter()
            .map(|t| (t.span.start.offset, t.span.start.line, t.span.start.column))
            .collect();
        assert_eq!(positions, vec![(0, 1, 0), (2, 1, 2), (3, 1, 3), (4, 1, 4), (5, 2, 0)]);
        assert_eq!(tokens.last().unwrap().span.end, Position::new(7, 2, 2));
    }
}
