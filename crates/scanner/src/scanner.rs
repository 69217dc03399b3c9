//! The external scanner entry point.

use crate::{BitQueue, CodePoint, Input, Lexer, StateError, Token, ValidSymbols};

/// The size of the grammar engine's serialization buffer, in bytes.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// The number of bytes written by [`Scanner::serialize`] when the state is not empty.
pub const SERIALIZED_STATE_LEN: usize = 2 * BitQueue::ENCODED_LEN;

const _: () = assert!(SERIALIZED_STATE_LEN <= SERIALIZATION_BUFFER_SIZE);

/// The state carried across [`Scanner::scan`] calls: the verdicts of the last template
/// disambiguation pass that have not been consumed yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct State {
    /// One entry per `<`, in source order; `true` if it starts a template argument list.
    pub lt_is_tmpl: BitQueue,
    /// One entry per `>`, in source order; `true` if it ends a template argument list.
    pub gt_is_tmpl: BitQueue,
}

impl State {
    /// Returns `true` if there are no pending verdicts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lt_is_tmpl.is_empty() && self.gt_is_tmpl.is_empty()
    }
}

/// The WGSL external scanner.
///
/// Handles nested block comments, and disambiguates `<` and `>` between the comparison and shift
/// operators and template argument list delimiters.
///
/// One scanner is created per parse session. Its [`State`] is persisted by the grammar engine
/// through [`serialize`](Self::serialize) and [`deserialize`](Self::deserialize).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scanner {
    state: State,
}

impl Scanner {
    /// Creates a new scanner with empty state.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Scans a token at the current position of `input`.
    ///
    /// Returns `None` if no external token matches, in which case the grammar engine tokenizes
    /// the current position itself. When a token is returned, its end has been marked on `input`.
    ///
    /// If [`DISAMBIGUATE_TEMPLATE`](ValidSymbols::DISAMBIGUATE_TEMPLATE) is valid, this always
    /// returns that zero-width token, after running a disambiguation pass if the next token is a
    /// `<` and there are no pending `<` verdicts.
    #[instrument(level = "debug", skip_all)]
    pub fn scan<I: Input + ?Sized>(&mut self, input: &mut I, valid: ValidSymbols) -> Option<Token> {
        let mut lexer = Lexer::new(input);
        debug!(
            lookahead = ?char::from_u32(lexer.peek()),
            column = lexer.input().column(),
            valid = %valid,
            "scan",
        );

        let token = self.scan_inner(&mut lexer, valid);
        debug!(?token, lt_is_tmpl = %self.state.lt_is_tmpl, gt_is_tmpl = %self.state.gt_is_tmpl);
        token
    }

    fn scan_inner<I: Input + ?Sized>(
        &mut self,
        lexer: &mut Lexer<'_, I>,
        valid: ValidSymbols,
    ) -> Option<Token> {
        if valid.allows(Token::Error) {
            return Some(Token::Error);
        }

        if valid.allows(Token::DisambiguateTemplate) {
            // The token ends here; the lookahead below is not part of it.
            lexer.input().mark_end();
            // TODO: skip line and block comments too, see https://github.com/gpuweb/gpuweb/issues/3876
            lexer.skip_whitespace();
            if lexer.peek() == cp('<') && self.state.lt_is_tmpl.is_empty() {
                self.state.classify_template_args(lexer);
            }
            // Returning the token makes the engine persist the new state.
            return Some(Token::DisambiguateTemplate);
        }

        lexer.skip_whitespace();

        let token = match lexer.peek() {
            SLASH => {
                if !lexer.eat_block_comment() {
                    // Only the `/` was consumed, and it is not ours.
                    return None;
                }
                Token::BlockComment
            }
            LT => {
                lexer.bump();
                self.scan_lt(lexer)
            }
            GT => {
                lexer.bump();
                self.scan_gt(lexer)
            }
            _ => return None,
        };
        lexer.input().mark_end();
        Some(token)
    }

    /// Finishes a token that started with `<`.
    fn scan_lt<I: Input + ?Sized>(&mut self, lexer: &mut Lexer<'_, I>) -> Token {
        if self.state.lt_is_tmpl.try_pop_front() == Some(true) {
            return Token::TemplateArgsStart;
        }
        if lexer.eat(cp('=')) {
            return Token::LessThanEqual;
        }
        if lexer.eat(cp('<')) {
            // The second `<` has its own verdict: `a<1<<c<d>()>`.
            self.state.lt_is_tmpl.try_pop_front();
            if lexer.eat(cp('=')) {
                return Token::ShiftLeftAssign;
            }
            return Token::ShiftLeft;
        }
        Token::LessThan
    }

    /// Finishes a token that started with `>`.
    fn scan_gt<I: Input + ?Sized>(&mut self, lexer: &mut Lexer<'_, I>) -> Token {
        if self.state.gt_is_tmpl.try_pop_front() == Some(true) {
            return Token::TemplateArgsEnd;
        }
        if lexer.eat(cp('=')) {
            return Token::GreaterThanEqual;
        }
        if lexer.eat(cp('>')) {
            self.state.gt_is_tmpl.try_pop_front();
            if lexer.eat(cp('=')) {
                return Token::ShiftRightAssign;
            }
            return Token::ShiftRight;
        }
        Token::GreaterThan
    }

    /// Writes the state into `buf` and returns the number of bytes written.
    ///
    /// Empty state is written as zero bytes; otherwise exactly [`SERIALIZED_STATE_LEN`] bytes are
    /// written: the `<` queue followed by the `>` queue, each as encoded by
    /// [`BitQueue::encode`].
    ///
    /// # Panics
    ///
    /// Panics if the state is not empty and `buf` is shorter than [`SERIALIZED_STATE_LEN`].
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if self.state.is_empty() {
            return 0;
        }
        trace!(lt_is_tmpl = %self.state.lt_is_tmpl, gt_is_tmpl = %self.state.gt_is_tmpl, "serialize");
        assert!(
            buf.len() >= SERIALIZED_STATE_LEN,
            "serialization buffer too small: {} < {SERIALIZED_STATE_LEN}",
            buf.len()
        );
        let (lt, gt) = buf[..SERIALIZED_STATE_LEN].split_at_mut(BitQueue::ENCODED_LEN);
        lt.copy_from_slice(&self.state.lt_is_tmpl.encode());
        gt.copy_from_slice(&self.state.gt_is_tmpl.encode());
        SERIALIZED_STATE_LEN
    }

    /// Returns the serialized state as a vector. See [`serialize`](Self::serialize).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0; SERIALIZED_STATE_LEN];
        let len = self.serialize(&mut buf);
        buf.truncate(len);
        buf
    }

    /// Restores the state written by [`serialize`](Self::serialize).
    ///
    /// An empty buffer resets the state. On error, the state is left unchanged.
    pub fn deserialize(&mut self, buf: &[u8]) -> Result<(), StateError> {
        if buf.is_empty() {
            self.state = State::default();
            return Ok(());
        }
        if buf.len() != SERIALIZED_STATE_LEN {
            return Err(StateError::InvalidLength {
                expected: SERIALIZED_STATE_LEN,
                actual: buf.len(),
            });
        }
        let mut lt = [0; BitQueue::ENCODED_LEN];
        let mut gt = [0; BitQueue::ENCODED_LEN];
        lt.copy_from_slice(&buf[..BitQueue::ENCODED_LEN]);
        gt.copy_from_slice(&buf[BitQueue::ENCODED_LEN..]);
        let lt_is_tmpl = BitQueue::decode(&lt)?;
        let gt_is_tmpl = BitQueue::decode(&gt)?;
        self.state = State { lt_is_tmpl, gt_is_tmpl };
        trace!(%lt_is_tmpl, %gt_is_tmpl, "deserialize");
        Ok(())
    }
}

#[inline]
const fn cp(c: char) -> CodePoint {
    c as CodePoint
}

const SLASH: CodePoint = cp('/');
const LT: CodePoint = cp('<');
const GT: CodePoint = cp('>');

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrInput;

    /// Scans once at the current position of `input`, and returns the token and its byte range.
    fn scan_one(
        scanner: &mut Scanner,
        input: &mut StrInput<'_>,
        valid: ValidSymbols,
    ) -> Option<(Token, std::ops::Range<usize>)> {
        input.begin();
        let token = scanner.scan(input, valid);
        let range = input.finish(token.is_some());
        token.zip(range)
    }

    #[track_caller]
    fn check_operators(src: &str, expected: &[(Token, &str)]) {
        let mut scanner = Scanner::new();
        let mut input = StrInput::new(src);
        for &(token, text) in expected {
            let (actual, range) = scan_one(&mut scanner, &mut input, ValidSymbols::ANGLES)
                .unwrap_or_else(|| panic!("no token at {} in {src:?}", input.pos()));
            assert_eq!((actual, &src[range]), (token, text), "{src:?}");
        }
        assert_eq!(scan_one(&mut scanner, &mut input, ValidSymbols::ANGLES), None);
    }

    #[test]
    fn error_recovery_takes_precedence() {
        let mut scanner = Scanner::new();
        let mut input = StrInput::new("<b>");
        let valid = ValidSymbols::ERROR | ValidSymbols::DISAMBIGUATE_TEMPLATE;
        assert_eq!(scan_one(&mut scanner, &mut input, valid), Some((Token::Error, 0..0)));
        assert!(scanner.state().is_empty());
        let token = scan_one(&mut scanner, &mut input, ValidSymbols::all());
        assert_eq!(token, Some((Token::Error, 0..0)));
    }

    #[test]
    fn disambiguation_is_zero_width() {
        let mut scanner = Scanner::new();
        let mut input = StrInput::new("array <f32, 4>;");
        input.skip_bytes(5);
        let token = scan_one(&mut scanner, &mut input, ValidSymbols::DISAMBIGUATE_TEMPLATE);
        assert_eq!(token, Some((Token::DisambiguateTemplate, 5..5)));
        assert_eq!(input.rest(), " <f32, 4>;");
        assert_eq!(scanner.state().lt_is_tmpl.to_string(), "1:#");
        assert_eq!(scanner.state().gt_is_tmpl.to_string(), "1:#");
    }

    #[test]
    fn disambiguation_without_lt() {
        let mut scanner = Scanner::new();
        let mut input = StrInput::new(" + b");
        let token = scan_one(&mut scanner, &mut input, ValidSymbols::DISAMBIGUATE_TEMPLATE);
        assert_eq!(token, Some((Token::DisambiguateTemplate, 0..0)));
        assert!(scanner.state().is_empty());
    }

    #[test]
    fn pending_verdicts_are_not_reclassified() {
        let mut scanner = Scanner::new();
        scanner.state.lt_is_tmpl.push_back(false);
        let mut input = StrInput::new("<c>");
        let token = scan_one(&mut scanner, &mut input, ValidSymbols::DISAMBIGUATE_TEMPLATE);
        assert_eq!(token, Some((Token::DisambiguateTemplate, 0..0)));
        assert_eq!(scanner.state().lt_is_tmpl.to_string(), "1:.");
        assert!(scanner.state().gt_is_tmpl.is_empty());
    }

    #[test]
    fn replays_verdicts() {
        let src = "alias z = a<b<c>>;";
        let mut scanner = Scanner::new();
        let mut input = StrInput::new(src);
        let mut tokens = Vec::new();
        let mut after_ident = false;
        while !input.rest().is_empty() {
            let valid = if after_ident {
                ValidSymbols::DISAMBIGUATE_TEMPLATE
            } else {
                ValidSymbols::ANGLES | ValidSymbols::BLOCK_COMMENT
            };
            if let Some((token, range)) = scan_one(&mut scanner, &mut input, valid) {
                tokens.push(format!("{token}@{range:?}"));
                after_ident = false;
                continue;
            }
            let rest = input.rest();
            let word = rest.find(|c: char| !c.is_alphanumeric()).unwrap_or(rest.len());
            after_ident = word > 0;
            input.skip_bytes(word.max(1));
        }
        assert_eq!(
            tokens,
            [
                "DISAMBIGUATE_TEMPLATE@5..5",
                "DISAMBIGUATE_TEMPLATE@7..7",
                "DISAMBIGUATE_TEMPLATE@11..11",
                "TEMPLATE_ARGS_START@11..12",
                "DISAMBIGUATE_TEMPLATE@13..13",
                "TEMPLATE_ARGS_START@13..14",
                "DISAMBIGUATE_TEMPLATE@15..15",
                "TEMPLATE_ARGS_END@15..16",
                "TEMPLATE_ARGS_END@16..17",
            ]
        );
        assert!(scanner.state().is_empty());
    }

    #[test]
    fn operators() {
        check_operators(
            "< <= << <<= > >= >> >>=",
            &[
                (Token::LessThan, "<"),
                (Token::LessThanEqual, "<="),
                (Token::ShiftLeft, "<<"),
                (Token::ShiftLeftAssign, "<<="),
                (Token::GreaterThan, ">"),
                (Token::GreaterThanEqual, ">="),
                (Token::ShiftRight, ">>"),
                (Token::ShiftRightAssign, ">>="),
            ],
        );
        check_operators("<<<", &[(Token::ShiftLeft, "<<"), (Token::LessThan, "<")]);
        check_operators(">>>=", &[(Token::ShiftRight, ">>"), (Token::GreaterThanEqual, ">=")]);
    }

    #[test]
    fn shift_consumes_both_verdicts() {
        // `a<1<<c<d>()>`, scanned from the first `<`.
        let mut scanner = Scanner::new();
        let mut input = StrInput::new("a<1<<c<d>()>");
        input.skip_bytes(1);
        scanner.state.classify_template_args(&mut Lexer::new(&mut input));
        assert_eq!(scanner.state().lt_is_tmpl.to_string(), "4:#..#");

        let mut input = StrInput::new("<1<<c<d>()>");
        let mut scan = |skip: usize| {
            input.skip_bytes(skip);
            scan_one(&mut scanner, &mut input, ValidSymbols::ANGLES).map(|(token, _)| token)
        };
        assert_eq!(scan(0), Some(Token::TemplateArgsStart));
        assert_eq!(scan(1), Some(Token::ShiftLeft));
        assert_eq!(scan(1), Some(Token::TemplateArgsStart));
        assert_eq!(scan(1), Some(Token::TemplateArgsEnd));
        assert_eq!(scan(2), Some(Token::TemplateArgsEnd));
        assert!(scanner.state().is_empty());
    }

    #[test]
    fn block_comment() {
        let mut scanner = Scanner::new();
        let mut input = StrInput::new("  /* a /* b */ c */ d");
        let token = scan_one(&mut scanner, &mut input, ValidSymbols::BLOCK_COMMENT);
        assert_eq!(token, Some((Token::BlockComment, 2..19)));
        assert_eq!(input.rest(), " d");
    }

    #[test]
    fn lone_slash_is_not_matched() {
        let mut scanner = Scanner::new();
        let mut input = StrInput::new(" / b");
        let valid = ValidSymbols::BLOCK_COMMENT | ValidSymbols::ANGLES;
        assert_eq!(scan_one(&mut scanner, &mut input, valid), None);
        assert_eq!(input.pos(), 0);
    }

    #[test]
    fn no_match() {
        let mut scanner = Scanner::new();
        for (src, valid) in [
            ("x", ValidSymbols::all() - ValidSymbols::ERROR - ValidSymbols::DISAMBIGUATE_TEMPLATE),
            ("", ValidSymbols::ANGLES | ValidSymbols::BLOCK_COMMENT),
            ("/ x", ValidSymbols::BLOCK_COMMENT),
        ] {
            let mut input = StrInput::new(src);
            assert_eq!(scan_one(&mut scanner, &mut input, valid), None, "{src:?}");
        }
    }

    #[test]
    fn serialize_empty() {
        let scanner = Scanner::new();
        assert_eq!(scanner.serialize(&mut []), 0);
        assert!(scanner.to_bytes().is_empty());
    }

    #[test]
    fn serialize_roundtrip() {
        let mut input = StrInput::new("<vec3<f32>, 4>");
        let mut scanner = Scanner::new();
        scanner.state.classify_template_args(&mut Lexer::new(&mut input));
        scanner.state.lt_is_tmpl.pop_front();

        let mut buf = [0xff; SERIALIZATION_BUFFER_SIZE];
        let len = scanner.serialize(&mut buf);
        assert_eq!(len, SERIALIZED_STATE_LEN);
        assert_eq!(&buf[..len], scanner.to_bytes());
        // `lt_is_tmpl`: bits `0b11`, one entry left, read offset 1.
        assert_eq!(buf[..BitQueue::ENCODED_LEN], [3, 0, 0, 0, 0, 0, 0, 0, 1, 1]);

        let mut restored = Scanner::new();
        restored.deserialize(&buf[..len]).unwrap();
        assert_eq!(restored, scanner);
        assert_eq!(restored.to_bytes(), scanner.to_bytes());

        restored.deserialize(&[]).unwrap();
        assert!(restored.state().is_empty());
    }

    #[test]
    fn deserialize_errors_leave_state_unchanged() {
        let mut scanner = Scanner::new();
        scanner.state.gt_is_tmpl.push_back(true);
        let before = scanner.clone();

        assert_eq!(
            scanner.deserialize(&[0; 7]),
            Err(StateError::InvalidLength { expected: SERIALIZED_STATE_LEN, actual: 7 })
        );
        let mut bytes = scanner.to_bytes();
        bytes[BitQueue::ENCODED_LEN + 9] = 200;
        assert_eq!(scanner.deserialize(&bytes), Err(StateError::OffsetOutOfRange { offset: 200 }));
        assert_eq!(scanner, before);
    }

    #[test]
    #[should_panic = "serialization buffer too small"]
    fn serialize_into_short_buffer() {
        let mut scanner = Scanner::new();
        scanner.state.lt_is_tmpl.push_back(true);
        scanner.serialize(&mut [0; SERIALIZED_STATE_LEN - 1]);
    }
}
