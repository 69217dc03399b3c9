//! Utility functions used by the `wgsl-scan` CLI.

use clap::ColorChoice;
#[cfg(feature = "tracing")]
use std::io::{self, IsTerminal};

/// Where log output is written.
#[derive(Clone, Copy, Debug, Default)]
pub enum LogDestination {
    Stdout,
    #[default]
    Stderr,
}

#[cfg(feature = "tracing")]
impl LogDestination {
    fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => io::stdout().is_terminal(),
            Self::Stderr => io::stderr().is_terminal(),
        }
    }
}

#[cfg(feature = "tracing")]
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogDestination {
    type Writer = Box<dyn io::Write>;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            Self::Stdout => Box::new(io::stdout().lock()),
            Self::Stderr => Box::new(io::stderr().lock()),
        }
    }
}

/// Initialize the tracing logger.
///
/// The filter is read from `RUST_LOG`; nothing is logged if it is unset.
pub fn init_logger(dst: LogDestination, color: ColorChoice) {
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (dst, color);
        if std::env::var_os("RUST_LOG").is_some() {
            eprintln!(
                "warning: `RUST_LOG` is set, but \"tracing\" support was not enabled at compile time"
            );
        }
    }

    #[cfg(feature = "tracing")]
    if let Err(e) = try_init_logger(dst, color) {
        eprintln!("warning: failed to initialize logger: {e}");
    }
}

#[cfg(feature = "tracing")]
fn try_init_logger(dst: LogDestination, color: ColorChoice) -> Result<(), String> {
    use tracing_subscriber::prelude::*;

    let ansi = match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => dst.is_terminal(),
    };
    tracing_subscriber::Registry::default()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(dst).with_ansi(ansi))
        .try_init()
        .map_err(|e| e.to_string())
}
