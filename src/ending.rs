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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::Error, vowel::is_vowel};

/// How a word ends, judged by its last two characters.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// A vowel followed by a consonant.
    OneConsonant,
    /// A consonant followed by a vowel.
    OneVowel,
    /// Two vowels or two consonants.
    TwoSame,
}

impl Ending {
    /// # Errors
    ///
    /// If the word has fewer than two characters.
    pub fn classify(word: &str) -> Result<Self, Error> {
        let mut chars = word.chars().rev();

        let (Some(last), Some(prev)) = (chars.next(), chars.next()) else {
            return Err(Error::InvalidWord {
                word: word.to_string(),
            });
        };

        let last_is_vowel = is_vowel(last);

        Ok(if last_is_vowel == is_vowel(prev) {
            Self::TwoSame
        } else if last_is_vowel {
            Self::OneVowel
        } else {
            Self::OneConsonant
        })
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneConsonant => write!(f, "one_consonant"),
            Self::OneVowel => write!(f, "one_vowel"),
            Self::TwoSame => write!(f, "two_same"),
        }
    }
}

impl FromStr for Ending {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string {
            "one_consonant" => Ok(Self::OneConsonant),
            "one_vowel" => Ok(Self::OneVowel),
            "two_same" => Ok(Self::TwoSame),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to an Ending!"
            ))),
        }
    }
}
