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

use crate::{ending::Ending, error::Error, vowel::is_vowel};

/// Turns a singular word into its plural.
///
/// 1. One consonant: append `GH`.
/// 2. One vowel: replace the last character with `G`.
/// 3. Two the same: repeat the last character, then append `H`.
///
/// `ending` must come from [`Ending::classify`] on the same word.
#[must_use]
pub fn pluralize(word: &str, ending: Ending) -> String {
    let mut plural = String::with_capacity(word.len() + 2);
    plural.push_str(word);

    match ending {
        Ending::OneConsonant => plural.push_str("GH"),
        Ending::OneVowel => {
            plural.pop();
            plural.push('G');
        }
        Ending::TwoSame => {
            if let Some(last) = word.chars().next_back() {
                plural.push(last);
            }
            plural.push('H');
        }
    }

    plural
}

/// Adds a suffix to a word.
///
/// 1. One consonant: append the suffix.
/// 2. One vowel and the suffix starts with a consonant, or two the same and
///    the suffix starts with a vowel: append the suffix's first character,
///    then the whole suffix.
/// 3. One vowel and the suffix starts with a vowel: append the suffix
///    without its first character.
/// 4. Two the same and the suffix starts with a consonant: delete the
///    word's second to last character, then append the suffix.
///
/// # Errors
///
/// If the suffix is empty, or the word is too short to delete from.
pub fn suffixed(word: &str, suffix: &str, ending: Ending) -> Result<String, Error> {
    if ending == Ending::OneConsonant {
        return Ok(format!("{word}{suffix}"));
    }

    let mut rest = suffix.chars();
    let first = rest.next().ok_or(Error::EmptySuffix)?;
    let first_is_vowel = is_vowel(first);

    if (!first_is_vowel && ending == Ending::OneVowel)
        || (first_is_vowel && ending == Ending::TwoSame)
    {
        return Ok(format!("{word}{first}{suffix}"));
    }

    if first_is_vowel {
        return Ok(format!("{word}{}", rest.as_str()));
    }

    let mut chars: Vec<char> = word.chars().collect();
    let Some(second_to_last) = chars.len().checked_sub(2) else {
        return Err(Error::InvalidWord {
            word: word.to_string(),
        });
    };

    chars.remove(second_to_last);
    chars.extend(suffix.chars());

    Ok(chars.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(word: &str, suffix: &str) -> anyhow::Result<(String, String)> {
        let ending = Ending::classify(word)?;
        Ok((pluralize(word, ending), suffixed(word, suffix, ending)?))
    }

    #[test]
    fn cat() -> anyhow::Result<()> {
        assert_eq!(transform("CAT", "S")?, ("CATGH".into(), "CATS".into()));
        Ok(())
    }

    #[test]
    fn bal() -> anyhow::Result<()> {
        // I is a consonant in ACSL.
        assert_eq!(transform("BAL", "ING")?, ("BALLH".into(), "BLING".into()));
        assert_eq!(transform("BAL", "AS")?, ("BALLH".into(), "BALAAS".into()));
        Ok(())
    }

    #[test]
    fn acs() -> anyhow::Result<()> {
        assert_eq!(transform("ACS", "ED")?, ("ACSSH".into(), "ASED".into()));
        Ok(())
    }

    #[test]
    fn tea() -> anyhow::Result<()> {
        assert_eq!(transform("TEA", "D")?, ("TEG".into(), "TEADD".into()));
        assert_eq!(transform("TEA", "SE")?, ("TEG".into(), "TEAE".into()));
        Ok(())
    }

    #[test]
    fn plural_lengths() -> anyhow::Result<()> {
        for word in ["CAT", "BAL", "TEA", "DOG", "ACS", "BUS", "AB"] {
            let ending = Ending::classify(word)?;
            let plural = pluralize(word, ending);

            if ending == Ending::OneVowel {
                assert_eq!(plural.len(), word.len());
            } else {
                assert_eq!(plural.len(), word.len() + 2);
            }
        }

        Ok(())
    }

    #[test]
    fn one_consonant_is_concatenation() -> anyhow::Result<()> {
        for suffix in ["S", "ING", "A", "LESS", ""] {
            assert_eq!(
                suffixed("CAT", suffix, Ending::OneConsonant)?,
                format!("CAT{suffix}")
            );
        }

        Ok(())
    }

    #[test]
    fn empty_suffix() {
        assert!(matches!(
            suffixed("BAL", "", Ending::TwoSame),
            Err(Error::EmptySuffix)
        ));
    }

    #[test]
    fn two_same_deletion_needs_two_characters() {
        assert!(matches!(
            suffixed("B", "T", Ending::TwoSame),
            Err(Error::InvalidWord { .. })
        ));
    }

    #[test]
    fn word_is_not_mutated() -> anyhow::Result<()> {
        let word = String::from("ACS");
        transform(&word, "ED")?;
        assert_eq!(word, "ACS");
        Ok(())
    }
}
