//! Token stream output.

use crate::{CliError, Opts, OutputFormat};
use serde::Serialize;
use std::{fmt, io::Write};
use wgsl_scanner::{
    Token,
    driver::{SourceToken, SourceTokenKind, TokenStream},
};

const DISAMBIGUATE: SourceTokenKind = SourceTokenKind::External(Token::DisambiguateTemplate);

/// A token, and the scanner state right after it if requested.
struct Entry {
    token: SourceToken,
    state: Option<StateDump>,
}

/// The scanner state after a disambiguation.
#[derive(Serialize)]
struct StateDump {
    lt: String,
    gt: String,
    /// The serialized state, in hex.
    bytes: String,
}

impl StateDump {
    fn new(stream: &TokenStream<'_>) -> Self {
        let state = stream.scanner().state();
        Self {
            lt: state.lt_is_tmpl.to_string(),
            gt: state.gt_is_tmpl.to_string(),
            bytes: stream.serialized_state().iter().map(|b| format!("{b:02x}")).collect(),
        }
    }
}

impl fmt::Display for StateDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lt={} gt={}", self.lt, self.gt)
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    path: &'a str,
    tokens: Vec<JsonToken<'a>>,
}

#[derive(Serialize)]
struct JsonToken<'a> {
    kind: SourceTokenKind,
    start: usize,
    end: usize,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a StateDump>,
}

/// Scans `src` and writes its tokens to `out` in the requested format.
pub(crate) fn emit(
    out: &mut dyn Write,
    opts: &Opts,
    path: &str,
    src: &str,
) -> Result<(), CliError> {
    let mut stream = TokenStream::new(src);
    let mut entries = Vec::new();
    loop {
        let token = match stream.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(source) => return Err(CliError::State { path: path.to_string(), source }),
        };
        let state = (opts.state && token.kind == DISAMBIGUATE).then(|| StateDump::new(&stream));
        entries.push(Entry { token, state });
    }

    let header = opts.input.len() > 1;
    match opts.format {
        OutputFormat::Human => {
            if header {
                writeln!(out, "// {path}")?;
            }
            for Entry { token, state } in &entries {
                write!(out, "{:?} {} {:?}", token.range, token.kind, token.text(src))?;
                if let Some(state) = state {
                    write!(out, " {state} bytes={}", state.bytes)?;
                }
                writeln!(out)?;
            }
        }
        OutputFormat::Brief => {
            if header {
                write!(out, "{path}: ")?;
            }
            let pieces = entries.iter().filter_map(|Entry { token, state }| match token.kind {
                DISAMBIGUATE => state.as_ref().map(|state| format!("[{state}]")),
                SourceTokenKind::External(Token::TemplateArgsStart) => Some("T<".into()),
                SourceTokenKind::External(Token::TemplateArgsEnd) => Some("T>".into()),
                _ => Some(token.text(src).into()),
            });
            writeln!(out, "{}", pieces.collect::<Vec<String>>().join(" "))?;
        }
        OutputFormat::Json => {
            let tokens = entries
                .iter()
                .map(|Entry { token, state }| JsonToken {
                    kind: token.kind,
                    start: token.range.start,
                    end: token.range.end,
                    text: token.text(src),
                    state: state.as_ref(),
                })
                .collect();
            serde_json::to_writer(&mut *out, &JsonOutput { path, tokens })?;
            writeln!(out)?;
        }
    }
    Ok(())
}
