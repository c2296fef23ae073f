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

/// The access modifier of a declaration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Access {
    /// No modifier was written.
    #[default]
    NotSpecified,
    /// `priv`.
    Priv,
    /// `pub`.
    Pub,
    /// `pub(set)`.
    PubSettable,
    /// `access(all)`.
    All,
    /// `access(account)`.
    Account,
    /// `access(contract)`.
    Contract,
    /// `access(self)`.
    Self_,
}

impl Access {
    /// Renders the modifier as written in source, or `""` when not
    /// specified.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotSpecified => "",
            Self::Priv => "priv",
            Self::Pub => "pub",
            Self::PubSettable => "pub(set)",
            Self::All => "access(all)",
            Self::Account => "access(account)",
            Self::Contract => "access(contract)",
            Self::Self_ => "access(self)",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Writes `access ` with a trailing blank when the modifier is present.
pub(crate) fn write_access_prefix(f: &mut fmt::Formatter, access: &Access) -> fmt::Result {
    if *access != Access::NotSpecified {
        write!(f, "{access} ")?;
    }
    Ok(())
}
