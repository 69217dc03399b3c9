//! The `wgsl-scan` binary.

// Dependencies are used by the library target.
#![allow(unused_crate_dependencies)]

use std::process::ExitCode;
use wgsl_scanner_cli::{
    parse_args, run,
    utils::{LogDestination, init_logger},
};

fn main() -> ExitCode {
    let opts = match parse_args(std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };
    init_logger(LogDestination::Stderr, opts.color);
    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
