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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A position in a source string.
///
/// `line` is 1-based, `column` and `offset` are 0-based. `offset` counts
/// bytes from the start of the input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Returns a new position from the given parts.
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }

    /// The position of the first byte of an input.
    pub const fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns the position just past `c`, assuming `self` is the position of `c`.
    pub fn advanced(self, c: char) -> Self {
        let offset = self.offset + c.len_utf8() as u32;
        if c == '\n' {
            Self {
                offset,
                line: self.line + 1,
                column: 0,
            }
        } else {
            Self {
                offset,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A range in a source string, from the start position up to, but not
/// including, the end position. `end >= start` on the same input.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Returns a new range from `start` to `end`.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// An empty range at the start of the input, used for synthesized nodes.
    pub const fn dummy() -> Self {
        Self {
            start: Position::start(),
            end: Position::start(),
        }
    }

    /// Returns `true` if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl Add for Span {
    type Output = Self;

    /// Merges two ranges into the smallest range covering both.
    fn add(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl Add<&Span> for Span {
    type Output = Self;

    fn add(self, other: &Self) -> Self {
        self + *other
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.start == self.end {
            self.start.fmt(f)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advanced() {
        let position = Position::start();
        let position = position.advanced('a');
        assert_eq!(position, Position::new(1, 1, 1));
        let position = position.advanced('\n');
        assert_eq!(position, Position::new(2, 2, 0));
        let position = position.advanced('é');
        assert_eq!(position, Position::new(4, 2, 1));
    }

    #[test]
    fn test_merge() {
        let first = Span::new(Position::new(0, 1, 0), Position::new(3, 1, 3));
        let second = Span::new(Position::new(5, 1, 5), Position::new(8, 1, 8));
        let merged = first + second;
        assert_eq!(merged.start, first.start);
        assert_eq!(merged.end, second.end);
        assert!(merged.contains(&first));
        assert!(merged.contains(&second));
    }
}
