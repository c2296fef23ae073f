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

use itertools::Itertools;

/// A single `key: value` entry of a dictionary literal.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub key: Expression,
    pub value: Expression,
    /// The span from the key to the value.
    pub span: Span,
}

impl fmt::Display for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

crate::simple_node_impl!(DictionaryEntry);

/// A dictionary literal `{k1: v1, k2: v2}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DictionaryExpression {
    /// The entries, in source order.
    pub entries: Vec<DictionaryEntry>,
    /// The span from the opening to the closing brace.
    pub span: Span,
}

impl fmt::Display for DictionaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.entries.iter().format(", "))
    }
}

crate::simple_node_impl!(DictionaryExpression);
