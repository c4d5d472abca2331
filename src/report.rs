// This file is part of vowels-r-us.
//
// vowels-r-us is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// vowels-r-us is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{fmt, io};

use crate::{
    ending::Ending,
    entry::Entry,
    error::Error,
    transform::{pluralize, suffixed},
};

/// A word with its plural and suffixed forms.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub word: String,
    pub suffix: String,
    pub ending: Ending,
    pub plural: String,
    pub suffixed: String,
}

impl Report {
    /// # Errors
    ///
    /// If the word is shorter than two characters or the suffix is empty.
    pub fn new(word: String, suffix: String) -> Result<Self, Error> {
        let ending = Ending::classify(&word)?;
        let plural = pluralize(&word, ending);
        let suffixed = suffixed(&word, &suffix, ending)?;

        Ok(Self {
            word,
            suffix,
            ending,
            plural,
            suffixed,
        })
    }

    /// Writes the labeled lines followed by a blank line.
    ///
    /// # Errors
    ///
    /// If the write fails.
    pub fn write_to<W: io::Write>(&self, out: &mut W, show_ending: bool) -> io::Result<()> {
        writeln!(out, "Word: {}", self.word)?;
        if show_ending {
            writeln!(out, "Ending: {}", self.ending)?;
        }
        writeln!(out, "Suffix: {}", self.suffix)?;
        writeln!(out, "Plural: {}", self.plural)?;
        writeln!(out, "Suffixed: {}", self.suffixed)?;
        writeln!(out)
    }
}

impl TryFrom<Entry> for Report {
    type Error = Error;

    fn try_from(entry: Entry) -> Result<Self, Error> {
        Self::new(entry.word, entry.suffix)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} = {} ({}), plural {}",
            self.word, self.suffix, self.suffixed, self.ending, self.plural
        )
    }
}
