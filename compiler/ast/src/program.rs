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

use crate::Declaration;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed source file: the top-level declarations, in source order.
/// The program owns all of its nodes.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

impl Program {
    /// Returns a new program wrapping the given declarations.
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for declaration in &self.declarations {
            if !first {
                writeln!(f)?;
            }
            first = false;
            writeln!(f, "{declaration}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identifier, Node, Transfer, TransferOperation, VariableDeclaration};
    use loam_span::Span;

    #[test]
    fn test_program_serialization_round_trip() {
        let declaration = VariableDeclaration {
            access: crate::Access::Pub,
            is_constant: true,
            name: Identifier::new("x", Span::dummy()),
            type_annotation: None,
            transfer: Transfer {
                operation: TransferOperation::Copy,
                span: Span::dummy(),
            },
            value: crate::Expression::Identifier(Identifier::new("y", Span::dummy())),
            second_transfer: None,
            second_value: None,
            is_if_binding: false,
            span: Span::dummy(),
        };
        let program = Program::new(vec![Declaration::Variable(Box::new(declaration))]);

        let json = serde_json::to_string(&program).unwrap();
        let deserialized: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(program, deserialized);
        assert_eq!(program.declarations[0].span(), Span::dummy());
    }
}
