//! Stateless byte-level classification.
//!
//! ASCII only, by design: the source buffer is treated as a byte stream, not
//! decoded text, and any byte with the high bit set falls through to
//! [`ident_start`]/[`ident_cont`] returning `false` rather than being
//! classified as a letter. Multi-byte identifier support is out of scope.

#[inline]
pub fn digit_bin(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

#[inline]
pub fn digit_oct(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
pub fn digit_dec(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub fn digit_hex(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
pub fn ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
pub fn ident_cont(b: u8) -> bool {
    ident_start(b) || digit_dec(b)
}

/// Horizontal whitespace: space, tab, form feed, carriage return, vertical tab.
#[inline]
pub fn hspace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0c | b'\r' | 0x0b)
}

#[inline]
pub fn space(b: u8) -> bool {
    hspace(b) || b == b'\n'
}

/// Maps a literal opener to the byte that closes it. Paired delimiters get
/// their matching closer; anything else (including `"`, `'`, `/`, `|`) is
/// its own terminator.
#[inline]
pub fn terminator(opener: u8) -> u8 {
    match opener {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        b'<' => b'>',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_classes_do_not_overlap_incorrectly() {
        assert!(digit_bin(b'0') && digit_bin(b'1'));
        assert!(!digit_bin(b'2'));
        assert!(digit_oct(b'7') && !digit_oct(b'8'));
        assert!(digit_hex(b'f') && digit_hex(b'F') && digit_hex(b'9'));
        assert!(!digit_hex(b'g'));
    }

    #[test]
    fn identifier_bytes() {
        assert!(ident_start(b'_') && ident_start(b'a') && ident_start(b'Z'));
        assert!(!ident_start(b'3'));
        assert!(ident_cont(b'3'));
        assert!(!ident_cont(b'-'));
        assert!(!ident_start(0x80));
    }

    #[test]
    fn terminator_pairs_brackets_and_self_maps_otherwise() {
        assert_eq!(terminator(b'('), b')');
        assert_eq!(terminator(b'['), b']');
        assert_eq!(terminator(b'{'), b'}');
        assert_eq!(terminator(b'<'), b'>');
        assert_eq!(terminator(b'"'), b'"');
        assert_eq!(terminator(b'|'), b'|');
    }

    #[test]
    fn space_includes_newline_hspace_does_not() {
        assert!(space(b'\n') && !hspace(b'\n'));
        assert!(hspace(b' ') && hspace(b'\t'));
    }
}
