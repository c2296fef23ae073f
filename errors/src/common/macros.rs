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

/// Expands a family of diagnostic messages into an error enum plus one
/// constructor function per message.
///
/// Every message gets a stable exit code `code_mask + index`, where the
/// index is the message's position in the block, and renders its code as
/// `E<code_prefix><exit code>`. Example:
///
/// ```ignore
/// create_messages!(
///     /// Parser diagnostics.
///     ParserError,
///     code_mask: 0370000i32,
///     code_prefix: "PAR",
///
///     @formatted
///     unexpected_token {
///         args: (got: impl Display, expected: impl Display),
///         msg: format!("unexpected token: got {got}, expected {expected}"),
///         help: None,
///     }
/// );
/// ```
#[macro_export]
macro_rules! create_messages {
    (
        $(#[$error_type_docs:meta])*
        $type_:ident,
        code_mask: $code_mask:expr,
        code_prefix: $code_prefix:expr,
        $($rest:tt)*
    ) => {
        $(#[$error_type_docs])*
        #[derive(Clone, Debug, ::thiserror::Error, Eq, Hash, PartialEq)]
        pub enum $type_ {
            #[error(transparent)]
            Formatted($crate::Formatted),
        }

        impl $type_ {
            const CODE_MASK: i32 = $code_mask;
            const CODE_PREFIX: &'static str = $code_prefix;

            fn format_code(index: i32) -> String {
                format!("E{}{:07}", Self::CODE_PREFIX, Self::CODE_MASK + index)
            }

            /// Returns the message text alone, without the code and range.
            pub fn message(&self) -> &str {
                match self {
                    Self::Formatted(formatted) => &formatted.message,
                }
            }

            /// Returns the source range the diagnostic refers to.
            pub fn span(&self) -> ::loam_span::Span {
                match self {
                    Self::Formatted(formatted) => formatted.span,
                }
            }

            /// Returns the rendered error code, e.g. `EPAR0370003`.
            pub fn error_code(&self) -> &str {
                match self {
                    Self::Formatted(formatted) => &formatted.code,
                }
            }

            $crate::create_messages!(@messages 0i32, $($rest)*);
        }
    };

    (@messages $index:expr, ) => {};

    (@messages $index:expr,
        $(#[$message_docs:meta])*
        @formatted
        $name:ident {
            args: ( $($arg_name:ident: $arg_type:ty),* $(,)? ),
            msg: $message:expr,
            help: $help:expr,
        }
        $($rest:tt)*
    ) => {
        $(#[$message_docs])*
        pub fn $name($($arg_name: $arg_type,)* span: ::loam_span::Span) -> Self {
            Self::Formatted($crate::Formatted::new_from_span(
                format!("{}", $message),
                $help,
                Self::format_code($index),
                span,
            ))
        }

        $crate::create_messages!(@messages $index + 1i32, $($rest)*);
    };
}
