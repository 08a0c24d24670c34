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

//! A name alias: a mapping from a destination name (the alias) to the source
//! name it stands in for.
//!
//! The crate only provides the value type and a few sorting helpers. Parsing
//! alias syntax, resolving names and enforcing uniqueness across collections
//! of aliases are left to callers.

pub mod alias;
pub mod error;
pub mod sort;

pub use alias::NameAlias;
pub use error::NameAliasError;
pub use sort::{is_sorted_aliases, sort_aliases, sorted_aliases};
