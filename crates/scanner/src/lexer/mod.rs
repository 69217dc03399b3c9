//! Cursor over the host's character stream.

use crate::{CodePoint, EOF, is_id_continue, is_id_start, is_whitespace};


const SLASH: CodePoint = '/' as CodePoint;
const STAR: CodePoint = '*' as CodePoint;

/// The character stream supplied by the host grammar engine.
///
/// This mirrors the lexer handed to an external scanner: a single code point of lookahead, a
/// forward-only `advance`, and an explicit end marker for the token being produced.
pub trait Input {
    /// Returns the current lookahead code point.
    ///
    /// The value is unspecified when [`eof`](Self::eof) returns `true`.
    fn lookahead(&self) -> CodePoint;

    /// Consumes the lookahead code point.
    ///
    /// `skip` marks the code point as whitespace-like trivia rather than part of the token.
    fn advance(&mut self, skip: bool);

    /// Marks the current position as the end of the token being scanned.
    fn mark_end(&mut self);

    /// Returns `true` if there is no more input.
    fn eof(&self) -> bool;

    /// Returns the zero-based column of the current position.
    fn column(&mut self) -> u32;
}

/// Peekable cursor over an [`Input`].
///
/// The next code point can be peeked via [`peek`](Self::peek), and the position can be shifted
/// forward via [`bump`](Self::bump) or one of the `eat_*` methods.
pub struct Lexer<'a, I: ?Sized> {
    input: &'a mut I,
}

impl<'a, I: Input + ?Sized> Lexer<'a, I> {
    /// Creates a new lexer over the given input.
    #[inline]
    pub fn new(input: &'a mut I) -> Self {
        Self { input }
    }

    /// Returns the underlying input.
    #[inline]
    pub fn input(&mut self) -> &mut I {
        self.input
    }

    /// Peeks the next code point without consuming it.
    ///
    /// Returns [`EOF`] if there is no more input.
    #[inline]
    pub fn peek(&self) -> CodePoint {
        if self.input.eof() { EOF } else { self.input.lookahead() }
    }

    /// Checks if there is nothing more to consume.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.input.eof()
    }

    /// Consumes the next code point as part of the token, and returns it.
    #[inline]
    pub fn bump(&mut self) -> CodePoint {
        let cp = self.peek();
        self.input.advance(false);
        cp
    }

    /// Consumes the next code point if it is equal to `cp`.
    ///
    /// Eating [`EOF`] succeeds only at the end of input, and consumes nothing.
    #[inline]
    pub fn eat(&mut self, cp: CodePoint) -> bool {
        if cp == EOF {
            return self.is_eof();
        }
        let matches = self.peek() == cp;
        if matches {
            self.bump();
        }
        matches
    }

    /// Consumes the next code point if it is any of `set`.
    pub fn eat_any(&mut self, set: &[CodePoint]) -> bool {
        set.iter().any(|&cp| self.eat(cp))
    }

    /// Eats an identifier: one `XID_Start` code point followed by any number of `XID_Continue`
    /// code points.
    ///
    /// Returns `false` and consumes nothing if the next code point is not `XID_Start`.
    pub fn eat_ident(&mut self) -> bool {
        if !is_id_start(self.peek()) {
            return false;
        }
        self.bump();
        while is_id_continue(self.peek()) {
            self.bump();
        }
        true
    }

    /// Eats a `/* ... */` block comment, including any nested block comments.
    ///
    /// An unterminated comment extends to the end of input. If the next code point is `/` but the
    /// one after is not `*`, the `/` is consumed anyway and `false` is returned: the input cannot
    /// be rewound.
    pub fn eat_block_comment(&mut self) -> bool {
        if !self.eat(SLASH) || !self.eat(STAR) {
            return false;
        }

        let mut depth = 1usize;
        // The previous code point, if it can begin a `/*` or `*/` pair.
        let mut prev = EOF;
        while depth > 0 && !self.is_eof() {
            let cp = self.bump();
            prev = match (prev, cp) {
                (SLASH, STAR) => {
                    depth += 1;
                    EOF
                }
                (STAR, SLASH) => {
                    depth -= 1;
                    EOF
                }
                _ => cp,
            };
        }
        true
    }

    /// Skips a run of whitespace, reporting it to the input as trivia.
    pub fn skip_whitespace(&mut self) {
        while is_whitespace(self.peek()) {
            self.input.advance(true);
        }
    }
}
