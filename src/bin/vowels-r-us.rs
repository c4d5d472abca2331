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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

use std::{
    io::{self, Write as _},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{CommandFactory, Parser};
use log::debug;

use vowels_r_us::{
    COPYRIGHT, DEFAULT_PATH, LONG_VERSION, Options, error::Error, reader, run, utils,
};

/// Vowels R Us
///
/// Reads lines of a word and a suffix and prints the plural and suffixed form
/// of each word, where A, C, S and L are the only vowels.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Vowels R Us")]
struct Args {
    /// The file to read, - reads standard input
    #[arg(default_value = DEFAULT_PATH, index = 1, value_name = "path")]
    path: PathBuf,

    /// Also print the ending of each word
    #[arg(long)]
    show_ending: bool,

    /// Whether to log on the debug level
    #[arg(long)]
    debug: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    utils::init_logger(args.debug);

    if args.man {
        return match generate_man_page() {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("error: {error}");
                ExitCode::FAILURE
            }
        };
    }

    let options = Options {
        show_ending: args.show_ending,
    };

    match transform_file(&args.path, &options) {
        Ok(count) => {
            debug!("{count} entries from {}", args.path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            let stage = err.stage();
            debug!("{stage} failed: {err:?}");
            eprintln!("error: {err}");
            ExitCode::from(stage.exit_code())
        }
    }
}

fn transform_file(path: &Path, options: &Options) -> Result<usize, Error> {
    let reader = reader::open(path)?;
    let mut stdout = io::stdout().lock();

    run(reader, &mut stdout, options)
}

fn generate_man_page() -> anyhow::Result<()> {
    let mut buffer: Vec<u8> = Vec::default();
    let cmd = Args::command().name("vowels-r-us").long_version(None);
    let man = clap_mangen::Man::new(cmd).date("2026-10-19");

    man.render(&mut buffer)?;
    write!(buffer, "{COPYRIGHT}")?;

    std::fs::write("vowels-r-us.1", buffer)?;
    Ok(())
}
