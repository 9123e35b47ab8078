use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::{Exit, USAGE};

#[derive(Debug, Parser)]
#[command(name = "rm", version, about = "Remove a single file")]
pub struct Cli {
    /// File to remove; exactly one is expected
    pub paths: Vec<String>,

    /// Create the file before removing it
    #[arg(long, short)]
    pub create: bool,

    /// Directory that relative paths are resolved against [default: cwd]
    #[arg(long, short = 'C')]
    pub root: Option<PathBuf>,
}

/// Parses `args`, or reports to `out` why the program should stop.
///
/// `--help`/`--version` stop with [`Exit::Success`]; any other parse error
/// prints the usage line and stops with [`Exit::Failure`].
pub fn parse<I, T>(args: I, out: &mut impl Write) -> Result<Cli, Exit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let err = match Cli::try_parse_from(args) {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    let (text, exit) = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            (err.render().to_string(), Exit::Success)
        }
        _ => {
            log::debug!("{err}");
            (format!("{USAGE}\n"), Exit::Failure)
        }
    };
    if let Err(err) = out.write_all(text.as_bytes()) {
        log::error!("failed to report usage: {err}");
    }
    Err(exit)
}
