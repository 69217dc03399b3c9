//! `wgsl-scan` command-line arguments.

use crate::OutputFormat;

#[cfg(feature = "clap")]
use clap::{ColorChoice, Parser, ValueHint};

/// Dumps the tokens produced by the WGSL external scanner.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "clap", derive(Parser))]
#[cfg_attr(feature = "clap", command(
    name = "wgsl-scan",
    version,
    arg_required_else_help = true,
))]
#[allow(clippy::manual_non_exhaustive)]
pub struct Opts {
    /// Files to scan.
    ///
    /// `-` specifies standard input.
    #[cfg_attr(feature = "clap", arg(required = true, value_hint = ValueHint::FilePath))]
    pub input: Vec<String>,

    /// Output format.
    #[cfg_attr(feature = "clap", arg(long, short, value_enum, default_value_t))]
    pub format: OutputFormat,
    /// Print the scanner state after each template disambiguation.
    #[cfg_attr(feature = "clap", arg(long))]
    pub state: bool,

    /// Coloring of log output.
    #[cfg(feature = "clap")]
    #[cfg_attr(
        feature = "clap",
        arg(help_heading = "Display options", long, value_enum, default_value = "auto")
    )]
    pub color: ColorChoice,

    // Allows `Opts { x: y, ..Default::default() }`.
    #[doc(hidden)]
    #[cfg_attr(feature = "clap", arg(skip))]
    pub _non_exhaustive: (),
}

impl Opts {
    /// Returns `true` if standard input is one of the inputs.
    pub fn reads_stdin(&self) -> bool {
        self.input.iter().any(|input| input == "-")
    }
}

#[cfg(all(test, feature = "clap"))]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Opts::command().debug_assert();
        let _ = Opts::default();
        let _ = Opts { state: true, ..Default::default() };
    }

    #[test]
    fn parse() {
        let opts = Opts::try_parse_from(["wgsl-scan", "a.wgsl", "-"]).unwrap();
        assert_eq!(opts.input, ["a.wgsl", "-"]);
        assert!(opts.reads_stdin());
        assert!(opts.format.is_human());
        assert!(!opts.state);

        let opts = Opts::try_parse_from(["wgsl-scan", "-f", "brief", "--state", "a.wgsl"]).unwrap();
        assert_eq!(opts.format, OutputFormat::Brief);
        assert!(opts.state);
        assert!(!opts.reads_stdin());

        let opts = Opts::try_parse_from(["wgsl-scan", "--format=json", "a.wgsl"]).unwrap();
        assert!(opts.format.is_json());

        assert!(Opts::try_parse_from(["wgsl-scan", "--format", "yaml", "a.wgsl"]).is_err());
        assert!(Opts::try_parse_from(["wgsl-scan", "--state"]).is_err());
    }
}
