//! Pluralize and suffix words on the planet ACSL, where the only vowels are
//! A, C, S and L.
//!
//! ## Input
//!
//! Each non-blank line holds a word and a suffix separated by whitespace:
//!
//! ```text
//! CAT S
//! BAL ING
//! ```
//!
//! ## Rules
//!
//! A word is classified by its last two characters as ending in one
//! consonant, one vowel, or two of the same kind. See [`ending::Ending`],
//! [`transform::pluralize`] and [`transform::suffixed`].

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

#![deny(clippy::panic)]

use std::io::{BufRead, Write};

use log::{debug, info};

pub mod ending;
pub mod entry;
pub mod error;
pub mod reader;
pub mod report;
pub mod transform;
pub mod utils;
pub mod vowel;

use crate::{error::Error, reader::Entries, report::Report};

pub const DEFAULT_PATH: &str = "../vowels.txt";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 Developers of the vowels-r-us project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025 Developers of the vowels-r-us project
Licensed under the AGPLv3"
);

#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Also print the ending of each word.
    pub show_ending: bool,
}

/// Reads every entry from `reader` and writes its report to `out`.
///
/// Reports are written as soon as their line is processed, so a failure
/// leaves the reports of the earlier lines in `out`.
///
/// Returns how many entries were written.
///
/// # Errors
///
/// On the first line that can't be read, parsed, classified or transformed,
/// or if writing fails.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    options: &Options,
) -> Result<usize, Error> {
    let mut count = 0;

    for entry in Entries::new(reader) {
        let entry = entry?;
        let line = entry.line;
        let report = Report::try_from(entry)?;
        debug!("line {line}: {report}");

        report
            .write_to(out, options.show_ending)
            .map_err(Error::Write)?;
        count += 1;
    }

    out.flush().map_err(Error::Write)?;
    info!("wrote {count} entries");

    Ok(count)
}
