//! A grammar-free token stream over WGSL source, driving the [`Scanner`] the way the WGSL grammar
//! does.
//!
//! The grammar asks for the disambiguation token after every identifier, and otherwise accepts
//! block comments and the `<` and `>` tokens wherever it also accepts its own tokens. This driver
//! approximates that without a parse table: it offers
//! [`DISAMBIGUATE_TEMPLATE`](ValidSymbols::DISAMBIGUATE_TEMPLATE) after every word, and
//! [`BLOCK_COMMENT`](ValidSymbols::BLOCK_COMMENT) plus [`ANGLES`](ValidSymbols::ANGLES)
//! everywhere else. When the scanner does not match, the driver lexes line comments, words,
//! numbers and single punctuation characters itself.
//!
//! Like a grammar engine, it persists the scanner state through
//! [`serialize`](Scanner::serialize) after every external token, and restores it with
//! [`deserialize`](Scanner::deserialize) before every scan.

use crate::{
    SERIALIZATION_BUFFER_SIZE, Scanner, StateError, StrInput, Token, ValidSymbols, is_id_continue,
    is_id_start, is_whitespace,
};
use std::{fmt, ops::Range};


/// A token produced by [`TokenStream`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceToken {
    /// The kind of token.
    pub kind: SourceTokenKind,
    /// The byte range of the token in the source.
    pub range: Range<usize>,
}

impl SourceToken {
    /// Returns the source text of the token.
    #[inline]
    pub fn text<'src>(&self, src: &'src str) -> &'src str {
        &src[self.range.clone()]
    }
}

/// The kind of a [`SourceToken`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SourceTokenKind {
    /// A token produced by the [`Scanner`].
    External(Token),
    /// An identifier or keyword.
    Word,
    /// A numeric literal.
    Number,
    /// `// ...` up to the end of the line.
    LineComment,
    /// Any other single code point.
    Punct,
}

impl fmt::Display for SourceTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External(token) => f.write_str(token.brief()),
            Self::Word => f.write_str("word"),
            Self::Number => f.write_str("number"),
            Self::LineComment => f.write_str("line_comment"),
            Self::Punct => f.write_str("punct"),
        }
    }
}

/// Tokenizes source text with a [`Scanner`]. See the [module-level docs](self).
pub struct TokenStream<'src> {
    input: StrInput<'src>,
    scanner: Scanner,
    state: [u8; SERIALIZATION_BUFFER_SIZE],
    state_len: usize,
    /// Whether the previous token was a word.
    after_word: bool,
}

impl<'src> TokenStream<'src> {
    /// Creates a new token stream over `src`.
    pub fn new(src: &'src str) -> Self {
        Self {
            input: StrInput::new(src),
            scanner: Scanner::new(),
            state: [0; SERIALIZATION_BUFFER_SIZE],
            state_len: 0,
            after_word: false,
        }
    }

    /// Returns the source text.
    #[inline]
    pub fn src(&self) -> &'src str {
        self.input.src()
    }

    /// Returns the serialized scanner state persisted after the last external token.
    #[inline]
    pub fn serialized_state(&self) -> &[u8] {
        &self.state[..self.state_len]
    }

    /// Returns the scanner.
    #[inline]
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Result<Option<SourceToken>, StateError> {
        if std::mem::take(&mut self.after_word)
            && let Some(token) = self.scan(ValidSymbols::DISAMBIGUATE_TEMPLATE)?
        {
            return Ok(Some(token));
        }

        if let Some(token) = self.scan(ValidSymbols::BLOCK_COMMENT | ValidSymbols::ANGLES)? {
            return Ok(Some(token));
        }

        Ok(self.lex())
    }

    /// Runs the scanner at the current position with the given valid symbols.
    fn scan(&mut self, valid: ValidSymbols) -> Result<Option<SourceToken>, StateError> {
        self.scanner.deserialize(&self.state[..self.state_len])?;
        self.input.begin();
        let token = self.scanner.scan(&mut self.input, valid);
        let Some(range) = self.input.finish(token.is_some()) else { return Ok(None) };
        self.state_len = self.scanner.serialize(&mut self.state);
        Ok(token.map(|token| SourceToken { kind: SourceTokenKind::External(token), range }))
    }

    /// Lexes a token that the scanner does not handle.
    fn lex(&mut self) -> Option<SourceToken> {
        let rest = self.input.rest();
        let trivia = rest.len() - rest.trim_start_matches(|c| is_whitespace(c as u32)).len();
        self.input.skip_bytes(trivia);

        let rest = self.input.rest();
        let first = rest.chars().next()?;
        let (kind, len) = if rest.starts_with("//") {
            let len = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
            (SourceTokenKind::LineComment, len)
        } else if is_id_start(first as u32) {
            let tail = &rest[first.len_utf8()..];
            let len = rest.len() - tail.trim_start_matches(|c| is_id_continue(c as u32)).len();
            (SourceTokenKind::Word, len)
        } else if first.is_ascii_digit()
            || (first == '.' && rest[1..].starts_with(|c: char| c.is_ascii_digit()))
        {
            // Suffixes and hex digits are identifier characters; exponent signs end the token.
            let len = rest.len()
                - rest.trim_start_matches(|c| c == '.' || is_id_continue(c as u32)).len();
            (SourceTokenKind::Number, len)
        } else {
            (SourceTokenKind::Punct, first.len_utf8())
        };
        self.after_word = kind == SourceTokenKind::Word;

        let start = self.input.pos();
        self.input.skip_bytes(len);
        trace!(%kind, ?start, len, "lexed");
        Some(SourceToken { kind, range: start..start + len })
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<SourceToken, StateError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl std::iter::FusedIterator for TokenStream<'_> {}

/// Tokenizes `src` with a fresh scanner.
pub fn tokenize(src: &str) -> Result<Vec<SourceToken>, StateError> {
    TokenStream::new(src).collect()
}
