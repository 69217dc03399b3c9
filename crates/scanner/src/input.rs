//! In-memory [`Input`] over a string slice.

use crate::{CodePoint, EOF, Input};
use std::ops::Range;

/// An [`Input`] over a `&str`, with the token-boundary semantics of a grammar engine's lexer.
///
/// Each scan is bracketed by [`begin`](Self::begin) and [`finish`](Self::finish):
/// - code points skipped as trivia before the first significant one move the token start;
/// - [`mark_end`](Input::mark_end) fixes the token end, otherwise it is the final position;
/// - a matched scan rewinds to the token end, an unmatched one rewinds to where it began.
#[derive(Clone, Debug)]
pub struct StrInput<'src> {
    src: &'src str,
    /// Byte offset of the lookahead code point.
    pos: usize,
    /// Byte offset at which the current scan began.
    scan_start: usize,
    token_start: usize,
    token_end: Option<usize>,
    /// Whether a code point has been consumed as part of the token in the current scan.
    significant: bool,
}

impl<'src> StrInput<'src> {
    /// Creates a new input positioned at the start of `src`.
    pub fn new(src: &'src str) -> Self {
        Self { src, pos: 0, scan_start: 0, token_start: 0, token_end: None, significant: false }
    }

    /// Returns the source text.
    #[inline]
    pub fn src(&self) -> &'src str {
        self.src
    }

    /// Returns the byte offset of the lookahead code point.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the remaining input.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    /// Moves the position forward by `n` bytes, outside of any scan.
    ///
    /// # Panics
    ///
    /// Panics if the new position is not on a `char` boundary.
    pub fn skip_bytes(&mut self, n: usize) {
        let pos = self.pos + n;
        assert!(self.src.is_char_boundary(pos), "{pos} is not a char boundary");
        self.pos = pos;
    }

    /// Starts a new scan at the current position.
    pub fn begin(&mut self) {
        self.scan_start = self.pos;
        self.token_start = self.pos;
        self.token_end = None;
        self.significant = false;
    }

    /// Ends the current scan, rewinding as described in the [type-level docs](Self).
    ///
    /// Returns the byte range of the produced token if `matched`.
    pub fn finish(&mut self, matched: bool) -> Option<Range<usize>> {
        if !matched {
            self.pos = self.scan_start;
            return None;
        }
        let end = self.token_end.unwrap_or(self.pos);
        self.pos = end;
        Some(self.token_start.min(end)..end)
    }
}

impl Input for StrInput<'_> {
    #[inline]
    fn lookahead(&self) -> CodePoint {
        self.rest().chars().next().map_or(EOF, |c| c as CodePoint)
    }

    fn advance(&mut self, skip: bool) {
        let Some(c) = self.rest().chars().next() else { return };
        self.pos += c.len_utf8();
        if skip && !self.significant {
            self.token_start = self.pos;
        } else {
            self.significant = true;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.token_end = Some(self.pos);
    }

    #[inline]
    fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn column(&mut self) -> u32 {
        let line_start = memchr::memrchr(b'\n', &self.src.as_bytes()[..self.pos]).map_or(0, |i| i + 1);
        self.src[line_start..self.pos].chars().count() as u32
    }
}
