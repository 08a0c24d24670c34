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

//! Sorting helpers for collections of name aliases

use crate::alias::NameAlias;

/// Sorts aliases in place by destination name, then source name.
///
/// The sort is stable and keeps duplicates.
pub fn sort_aliases(aliases: &mut [NameAlias]) {
    log::trace!("sorting {} name aliases", aliases.len());
    aliases.sort();
}

pub fn sorted_aliases(aliases: impl IntoIterator<Item = NameAlias>) -> Vec<NameAlias> {
    let mut aliases: Vec<_> = aliases.into_iter().collect();
    sort_aliases(&mut aliases);
    aliases
}

pub fn is_sorted_aliases(aliases: &[NameAlias]) -> bool {
    aliases.is_sorted()
}
