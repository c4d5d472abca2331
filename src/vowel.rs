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

/// The vowels of ACSL. They have nothing to do with English vowels.
pub const VOWELS: [char; 4] = ['A', 'C', 'S', 'L'];

/// Whether `c` is an ACSL vowel.
///
/// Only uppercase letters count, input is expected to be uppercased already.
#[must_use]
#[inline]
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'S' | 'L')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acsl_vowels() {
        for c in VOWELS {
            assert!(is_vowel(c));
        }
    }

    #[test]
    fn english_vowels_are_consonants() {
        for c in ['E', 'I', 'O', 'U', 'Y'] {
            assert!(!is_vowel(c));
        }
    }

    #[test]
    fn exactly_four_vowels() {
        let count = ('A'..='Z').filter(|c| is_vowel(*c)).count();
        assert_eq!(count, VOWELS.len());
    }

    #[test]
    fn lowercase_is_not_a_vowel() {
        assert!(!is_vowel('a'));
        assert!(!is_vowel('s'));
    }
}
