//! The `wgsl-scan` command-line tool, which dumps the tokens produced by the WGSL external scanner
//! over the reference [driver](wgsl_scanner::driver).

use clap::Parser as _;
use std::{
    ffi::OsString,
    io::{self, Read, Write},
};
use wgsl_scanner::StateError;

pub use wgsl_scanner_config::{Opts, OutputFormat};

mod emit;

// Used in integration tests. See `../tests/cli.rs`.
#[cfg(test)]
use {snapbox as _, tempfile as _};

pub mod utils;

/// An error that stops the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An input could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    /// The scanner state could not be restored while scanning an input.
    #[error("{path}: {source}")]
    State {
        path: String,
        #[source]
        source: StateError,
    },
    /// The output could not be written.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    /// The JSON output could not be written.
    #[error("failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_args<I, T>(itr: I) -> Result<Opts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Opts::try_parse_from(itr)
}

/// Scans every input and writes the tokens to standard output.
pub fn run(opts: &Opts) -> Result<(), CliError> {
    let mut out = io::BufWriter::new(io::stdout().lock());
    run_with_output(opts, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Scans every input and writes the tokens to `out`.
pub fn run_with_output(opts: &Opts, out: &mut dyn Write) -> Result<(), CliError> {
    let mut stdin_read = false;
    for path in &opts.input {
        let read_error = |source| CliError::Read { path: path.clone(), source };
        let src = if path == "-" {
            // Occurrences after the first are ignored.
            if std::mem::replace(&mut stdin_read, true) {
                continue;
            }
            let mut src = String::new();
            io::stdin().read_to_string(&mut src).map_err(read_error)?;
            src
        } else {
            std::fs::read_to_string(path).map_err(read_error)?
        };
        tracing::debug!(path, len = src.len(), "scanning");
        emit::emit(out, opts, path, &src)?;
    }
    Ok(())
}
