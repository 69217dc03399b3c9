//! Code point classification.

use crate::{
    CodePoint,
    unicode::{self, FIRST_NON_ASCII_XID_START, XID_CONTINUE, XID_START},
};

/// Returns `true` if the given code point is considered a whitespace.
///
/// This is an explicit set: space, the C0 controls `\t` through `\r`, `NEL`, the left-to-right and
/// right-to-left marks, and the line and paragraph separators. Notably, `U+00A0 NO-BREAK SPACE`
/// is not whitespace.
#[inline]
pub const fn is_whitespace(cp: CodePoint) -> bool {
    if cp < 0x80 {
        return classify(cp as u8) & WHITESPACE != 0;
    }
    matches!(cp, 0x0085 | 0x200e | 0x200f | 0x2028 | 0x2029)
}

/// Returns `true` if the given code point is valid at the start of an identifier (`XID_Start`).
#[inline]
pub fn is_id_start(cp: CodePoint) -> bool {
    if cp < 0x80 {
        return classify(cp as u8) & ID_START != 0;
    }
    cp >= FIRST_NON_ASCII_XID_START && unicode::contains(XID_START, cp)
}

/// Returns `true` if the given code point is valid in an identifier (`XID_Continue`).
#[inline]
pub fn is_id_continue(cp: CodePoint) -> bool {
    if cp < 0x80 {
        return classify(cp as u8) & ID_CONTINUE != 0;
    }
    is_id_start(cp) || unicode::contains(XID_CONTINUE, cp)
}

/// Returns `true` if the given string is a valid identifier.
pub fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_id_start(first as CodePoint) && chars.all(|c| is_id_continue(c as CodePoint))
}

const WHITESPACE: u8 = 1 << 0;
const ID_START: u8 = 1 << 1;
const ID_CONTINUE: u8 = 1 << 2;

#[inline(always)]
const fn classify(c: u8) -> u8 {
    INFO[c as usize]
}

const INFO: [u8; 128] = {
    let mut table = [0; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = classify_impl(i as u8);
        i += 1;
    }
    table
};

const fn classify_impl(c: u8) -> u8 {
    let mut result = 0;
    if matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r') {
        result |= WHITESPACE;
    }
    if c.is_ascii_alphabetic() {
        result |= ID_START | ID_CONTINUE;
    }
    if matches!(c, b'0'..=b'9' | b'_') {
        result |= ID_CONTINUE;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters() {
        for cp in 0..FIRST_NON_ASCII_XID_START {
            let c = char::from_u32(cp).unwrap();
            assert_eq!(is_id_start(cp), c.is_ascii_alphabetic(), "{c:?}");
            let cont = c.is_ascii_alphanumeric() || c == '_';
            assert_eq!(is_id_continue(cp), cont, "{c:?}");
        }
    }

    #[test]
    fn continue_is_superset_of_start() {
        for cp in (0..0x3_2000).chain(0xe_0000..0xe_0200) {
            if is_id_start(cp) {
                assert!(is_id_continue(cp), "{cp:#x}");
            }
        }
    }

    #[test]
    fn non_ascii_identifiers() {
        // Greek, CJK, and a combining mark which may only continue an identifier.
        assert!(is_id_start('Δ' as CodePoint));
        assert!(is_id_start('中' as CodePoint));
        assert!(!is_id_start(0x0300));
        assert!(is_id_continue(0x0300));
        assert!(is_id_continue(0xb7));
        assert!(!is_id_start(0xb7));
        assert!(!is_id_continue(0xd7));
        assert!(is_ident("Δέλτα"));
        assert!(!is_ident("_x"));
        assert!(is_ident("x_1"));
        assert!(!is_ident("1x"));
        assert!(!is_ident(""));
    }

    #[test]
    fn whitespace_set() {
        let expected = [0x20, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x85, 0x200e, 0x200f, 0x2028, 0x2029];
        for cp in 0..0x3000 {
            assert_eq!(is_whitespace(cp), expected.contains(&cp), "{cp:#x}");
        }
        assert!(!is_whitespace(0xa0));
        assert!(!is_whitespace(0xfeff));
        assert!(!is_whitespace(crate::EOF));
    }
}
