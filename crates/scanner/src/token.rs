//! External tokens produced by the [`Scanner`](crate::Scanner).

use std::fmt;

/// An external token kind.
///
/// The discriminants are the indices of the grammar's `externals` list, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::IntoStaticStr, strum::EnumIter, strum::EnumCount, strum::FromRepr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum Token {
    /// `/* ... */`, possibly nested.
    BlockComment,
    /// A zero-width token that triggers template-list disambiguation.
    DisambiguateTemplate,
    /// A `<` that opens a template argument list.
    TemplateArgsStart,
    /// A `>` that closes a template argument list.
    TemplateArgsEnd,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// `<<`
    ShiftLeft,
    /// `<<=`
    ShiftLeftAssign,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEqual,
    /// `>>`
    ShiftRight,
    /// `>>=`
    ShiftRightAssign,
    /// Signals that the grammar engine is in error recovery.
    Error,
}

impl Token {
    /// Returns the index of this token in the grammar's `externals` list.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the token kind at `index` in the grammar's `externals` list.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    /// Returns the upper snake case name of the token, e.g. `TEMPLATE_ARGS_START`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns the source text for operator tokens, or the [name](Self::name) otherwise.
    pub fn brief(self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::ShiftLeft => "<<",
            Self::ShiftLeftAssign => "<<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::ShiftRight => ">>",
            Self::ShiftRightAssign => ">>=",
            _ => self.name(),
        }
    }

    /// Returns `true` if this token is one of the `<` or `>` operators or template delimiters.
    pub const fn is_angle(self) -> bool {
        matches!(
            self,
            Self::TemplateArgsStart
                | Self::TemplateArgsEnd
                | Self::LessThan
                | Self::LessThanEqual
                | Self::ShiftLeft
                | Self::ShiftLeftAssign
                | Self::GreaterThan
                | Self::GreaterThanEqual
                | Self::ShiftRight
                | Self::ShiftRightAssign
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// The set of external tokens that are valid at the current parse position.
    ///
    /// Each flag is `1 << Token::index()`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ValidSymbols: u16 {
        const BLOCK_COMMENT = 1 << Token::BlockComment.index();
        const DISAMBIGUATE_TEMPLATE = 1 << Token::DisambiguateTemplate.index();
        const TEMPLATE_ARGS_START = 1 << Token::TemplateArgsStart.index();
        const TEMPLATE_ARGS_END = 1 << Token::TemplateArgsEnd.index();
        const LESS_THAN = 1 << Token::LessThan.index();
        const LESS_THAN_EQUAL = 1 << Token::LessThanEqual.index();
        const SHIFT_LEFT = 1 << Token::ShiftLeft.index();
        const SHIFT_LEFT_ASSIGN = 1 << Token::ShiftLeftAssign.index();
        const GREATER_THAN = 1 << Token::GreaterThan.index();
        const GREATER_THAN_EQUAL = 1 << Token::GreaterThanEqual.index();
        const SHIFT_RIGHT = 1 << Token::ShiftRight.index();
        const SHIFT_RIGHT_ASSIGN = 1 << Token::ShiftRightAssign.index();
        const ERROR = 1 << Token::Error.index();

        /// Every `<` and `>` token, including the template delimiters.
        const ANGLES = Self::TEMPLATE_ARGS_START.bits()
            | Self::TEMPLATE_ARGS_END.bits()
            | Self::LESS_THAN.bits()
            | Self::LESS_THAN_EQUAL.bits()
            | Self::SHIFT_LEFT.bits()
            | Self::SHIFT_LEFT_ASSIGN.bits()
            | Self::GREATER_THAN.bits()
            | Self::GREATER_THAN_EQUAL.bits()
            | Self::SHIFT_RIGHT.bits()
            | Self::SHIFT_RIGHT_ASSIGN.bits();
    }
}

impl ValidSymbols {
    /// Creates a set from the grammar engine's boolean array, indexed by [`Token::index`].
    ///
    /// Entries past the last token kind are ignored.
    pub fn from_slice(valid: &[bool]) -> Self {
        valid
            .iter()
            .enumerate()
            .filter(|&(_, &valid)| valid)
            .filter_map(|(i, _)| Token::from_index(i))
            .collect()
    }

    /// Returns `true` if `token` is in the set.
    #[inline]
    pub const fn allows(self, token: Token) -> bool {
        self.bits() & (1 << token.index()) != 0
    }

    /// Returns the tokens in the set, in index order.
    pub fn tokens(self) -> impl Iterator<Item = Token> {
        <Token as strum::IntoEnumIterator>::iter().filter(move |&t| self.allows(t))
    }
}

impl From<Token> for ValidSymbols {
    #[inline]
    fn from(token: Token) -> Self {
        Self::from_bits_retain(1 << token.index())
    }
}

impl FromIterator<Token> for ValidSymbols {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, t| acc | t.into())
    }
}

/// Renders one `+` (valid) or `_` (not valid) per token kind except [`Token::Error`], followed by
/// the brief names of the valid tokens.
impl fmt::Display for ValidSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in <Token as strum::IntoEnumIterator>::iter().filter(|&t| t != Token::Error) {
            f.write_str(if self.allows(token) { "+" } else { "_" })?;
        }
        for token in self.tokens().filter(|&t| t != Token::Error) {
            write!(f, " {}", token.brief())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn indices_match_externals() {
        assert_eq!(Token::COUNT, 13);
        assert_eq!(Token::BlockComment.index(), 0);
        assert_eq!(Token::DisambiguateTemplate.index(), 1);
        assert_eq!(Token::ShiftRightAssign.index(), 11);
        assert_eq!(Token::Error.index(), 12);
        assert_eq!(Token::from_index(2), Some(Token::TemplateArgsStart));
        assert_eq!(Token::from_index(13), None);
        assert_eq!(Token::from_index(256), None);
    }

    #[test]
    fn names() {
        assert_eq!(Token::TemplateArgsStart.name(), "TEMPLATE_ARGS_START");
        assert_eq!(Token::ShiftLeftAssign.name(), "SHIFT_LEFT_ASSIGN");
        assert_eq!(Token::ShiftLeftAssign.brief(), "<<=");
        assert_eq!(Token::BlockComment.brief(), "BLOCK_COMMENT");
        assert_eq!(Token::Error.to_string(), "ERROR");
    }

    #[test]
    fn from_slice() {
        let mut valid = [false; Token::COUNT];
        valid[Token::LessThan.index()] = true;
        valid[Token::Error.index()] = true;
        let set = ValidSymbols::from_slice(&valid);
        assert_eq!(set, ValidSymbols::LESS_THAN | ValidSymbols::ERROR);
        assert!(set.allows(Token::Error));
        assert!(!set.allows(Token::GreaterThan));
        assert!(ValidSymbols::ANGLES.tokens().all(Token::is_angle));
        assert_eq!(ValidSymbols::ANGLES.tokens().count(), 10);
    }

    #[test]
    fn display() {
        let set = ValidSymbols::BLOCK_COMMENT | ValidSymbols::SHIFT_LEFT | ValidSymbols::ERROR;
        assert_eq!(set.to_string(), "+_____+_____ BLOCK_COMMENT <<");
    }
}
