//! SYMBOL mode. §4.3.9.
//!
//! `SYMBOL_BEGIN` was already emitted by the `:` that pushed this mode; this
//! scanner pops immediately and delegates to the identifier recogniser.

use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn scan_symbol(&mut self) -> TokenKind {
        self.pop_mode();
        self.cursor.advance();
        let kind = self.scan_identifier();
        // Symbols don't carry `=` suffixes; a trailing bare `=` downgrades
        // whatever name-like kind was found back to a plain identifier.
        if self.cursor.current() == b'=' && self.cursor.peek(1) != b'=' {
            TokenKind::Identifier
        } else {
            kind
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::hooks::ErrorHooks;
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    fn kinds(src: &[u8]) -> Vec<TokenKind> {
        Lexer::new(src, ErrorHooks::new()).map(|t| t.kind).collect()
    }

    #[test]
    fn plain_symbol() {
        assert_eq!(
            kinds(b":foo"),
            vec![TokenKind::SymbolBegin, TokenKind::Identifier]
        );
    }

    #[test]
    fn keyword_shaped_symbol_keeps_its_keyword_tag() {
        assert_eq!(
            kinds(b":class"),
            vec![TokenKind::SymbolBegin, TokenKind::KwClass]
        );
    }

    #[test]
    fn trailing_bare_equals_downgrades_to_identifier() {
        assert_eq!(
            kinds(b":foo="),
            vec![TokenKind::SymbolBegin, TokenKind::Identifier, TokenKind::Eq]
        );
    }

    #[test]
    fn double_colon_does_not_open_a_symbol() {
        assert_eq!(
            kinds(b"Foo::Bar"),
            vec![TokenKind::Constant, TokenKind::ColonColon, TokenKind::Constant]
        );
    }
}
