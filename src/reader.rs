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

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Lines},
    path::Path,
};

use log::trace;

use crate::{entry::Entry, error::Error};

/// Opens `path` for reading, `-` means standard input.
///
/// # Errors
///
/// If the file can't be opened.
pub fn open(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Box::new(BufReader::new(file)))
}

/// Reads entries one line at a time, in file order.
///
/// Only lines that are exactly empty are skipped. A line holding nothing but
/// whitespace is still parsed, and fails.
pub struct Entries<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Entries<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Entries<R> {
    type Item = Result<Entry, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let content = self.lines.next()?;
            self.line += 1;

            let content = match content {
                Ok(content) => content,
                Err(source) => {
                    return Some(Err(Error::Read {
                        line: self.line,
                        source,
                    }));
                }
            };

            if content.is_empty() {
                trace!("line {}: blank", self.line);
                continue;
            }

            return Some(Entry::parse(self.line, &content));
        }
    }
}
