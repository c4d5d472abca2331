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

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("read: could not open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("read: line {line}: {source}")]
    Read { line: usize, source: io::Error },
    #[error("parse: line {line} is not a word and a suffix: {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("classify: the word {word:?} has fewer than two characters")]
    InvalidWord { word: String },
    #[error("transform: the suffix is empty")]
    EmptySuffix,
    #[error("write: {0}")]
    Write(#[source] io::Error),
}

impl Error {
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Open { .. } | Self::Read { .. } => Stage::Read,
            Self::MalformedLine { .. } => Stage::Parse,
            Self::InvalidWord { .. } => Stage::Classify,
            Self::EmptySuffix => Stage::Transform,
            Self::Write(_) => Stage::Write,
        }
    }
}

/// Where in the pipeline a line failed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Stage {
    Read,
    Parse,
    Classify,
    Transform,
    Write,
}

impl Stage {
    /// 1 is left for failures outside the pipeline and 2 belongs to clap.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Read => 3,
            Self::Parse => 4,
            Self::Classify => 5,
            Self::Transform => 6,
            Self::Write => 7,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Parse => write!(f, "parse"),
            Self::Classify => write!(f, "classify"),
            Self::Transform => write!(f, "transform"),
            Self::Write => write!(f, "write"),
        }
    }
}
