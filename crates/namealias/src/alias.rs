// Copyright 2024 International Digital Economy Academy
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::NameAliasError;

/// An alias from one name to another.
///
/// `destination_name` is the alias being introduced and `source_name` is the
/// name it stands in for. Neither name is validated: empty strings, any
/// character set and duplicates across aliases are all accepted.
///
/// The default value has both names empty, so callers building an alias
/// incrementally can start from `NameAlias::default()` and assign the fields
/// later.
// Field order defines the derived ordering: destination first, then source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NameAlias {
    /// The alias of the name.
    pub destination_name: String,
    /// The name being aliased.
    pub source_name: String,
}

impl NameAlias {
    /// Builds an alias from the destination name first, then the source name.
    pub fn new(destination_name: impl Into<String>, source_name: impl Into<String>) -> Self {
        NameAlias {
            destination_name: destination_name.into(),
            source_name: source_name.into(),
        }
    }

    /// Whether both names are empty.
    pub fn is_unset(&self) -> bool {
        self.destination_name.is_empty() && self.source_name.is_empty()
    }

    /// Equality against a possibly absent alias. An absent alias is never equal.
    pub fn equals(&self, other: Option<&NameAlias>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Three-way comparison against a possibly absent alias.
    ///
    /// Unlike [`NameAlias::equals`], an absent alias is rejected with
    /// [`NameAliasError::MissingComparand`]. Otherwise the result is the same
    /// as [`Ord::cmp`]: destination names are compared first and source names
    /// break ties.
    pub fn compare_to(&self, other: Option<&NameAlias>) -> Result<Ordering, NameAliasError> {
        let Some(other) = other else {
            log::debug!("refusing to compare name alias `{self}` against a missing alias");
            return Err(NameAliasError::MissingComparand);
        };
        Ok(self.cmp(other))
    }
}

impl<D: Into<String>, S: Into<String>> From<(D, S)> for NameAlias {
    fn from((destination_name, source_name): (D, S)) -> Self {
        NameAlias::new(destination_name, source_name)
    }
}

impl From<NameAlias> for (String, String) {
    fn from(alias: NameAlias) -> Self {
        (alias.destination_name, alias.source_name)
    }
}

impl std::fmt::Display for NameAlias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.destination_name, self.source_name)
    }
}
