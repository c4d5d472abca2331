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

use crate::error::Error;

/// One word and suffix pair read from the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// Starts at 1.
    pub line: usize,
    pub word: String,
    pub suffix: String,
}

impl Entry {
    /// Uppercases `content` and splits it at the first run of whitespace
    /// into a word and a suffix. Everything after that run is the suffix,
    /// including any further whitespace.
    ///
    /// Leading whitespace is not trimmed, so the word comes out empty and is
    /// rejected later by the classifier.
    ///
    /// # Errors
    ///
    /// If nothing follows the first run of whitespace.
    pub fn parse(line: usize, content: &str) -> Result<Self, Error> {
        let upper = content.to_uppercase();

        let Some((word, rest)) = upper.split_once(char::is_whitespace) else {
            return Err(Error::MalformedLine {
                line,
                content: content.to_string(),
            });
        };

        let suffix = rest.trim_start_matches(char::is_whitespace);
        if suffix.is_empty() {
            return Err(Error::MalformedLine {
                line,
                content: content.to_string(),
            });
        }

        Ok(Self {
            line,
            word: word.to_string(),
            suffix: suffix.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases() -> anyhow::Result<()> {
        let entry = Entry::parse(1, "cat s")?;

        assert_eq!(
            entry,
            Entry {
                line: 1,
                word: "CAT".to_string(),
                suffix: "S".to_string(),
            }
        );

        Ok(())
    }

    #[test]
    fn any_whitespace_separates() -> anyhow::Result<()> {
        let entry = Entry::parse(4, "Bal \t\t ing")?;
        assert_eq!(entry.word, "BAL");
        assert_eq!(entry.suffix, "ING");
        assert_eq!(entry.line, 4);

        Ok(())
    }

    #[test]
    fn leading_whitespace_leaves_an_empty_word() -> anyhow::Result<()> {
        let entry = Entry::parse(1, " cat s")?;
        assert_eq!(entry.word, "");
        assert_eq!(entry.suffix, "CAT S");

        Ok(())
    }

    #[test]
    fn trailing_whitespace_stays_in_the_suffix() -> anyhow::Result<()> {
        let entry = Entry::parse(1, "cat s \t")?;
        assert_eq!(entry.word, "CAT");
        assert_eq!(entry.suffix, "S \t");

        Ok(())
    }

    #[test]
    fn nothing_after_the_word() {
        assert!(matches!(
            Entry::parse(3, "cat   "),
            Err(Error::MalformedLine { line: 3, .. })
        ));
    }

    #[test]
    fn one_token() {
        let Err(Error::MalformedLine { line, content }) = Entry::parse(9, "SINGLEWORD") else {
            unreachable!("one token is not a word and a suffix");
        };

        assert_eq!(line, 9);
        assert_eq!(content, "SINGLEWORD");
    }

    #[test]
    fn three_tokens() -> anyhow::Result<()> {
        let entry = Entry::parse(2, "cat s  ed")?;
        assert_eq!(entry.word, "CAT");
        assert_eq!(entry.suffix, "S  ED");

        Ok(())
    }

    #[test]
    fn whitespace_only() {
        assert!(matches!(
            Entry::parse(1, " "),
            Err(Error::MalformedLine { .. })
        ));
        assert!(matches!(
            Entry::parse(1, " \t "),
            Err(Error::MalformedLine { .. })
        ));
    }
}
