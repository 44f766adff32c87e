//! Identifiers and keywords. §4.3.4.
//!
//! Entered with the first byte of the name already consumed by the
//! DEFAULT dispatch (or, from [`super::symbol`], consumed there instead).

use crate::classify;
use crate::keyword;
use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn scan_identifier(&mut self) -> TokenKind {
        while classify::ident_cont(self.cursor.current()) {
            self.cursor.advance();
        }
        if matches!(self.cursor.current(), b'!' | b'?') && self.cursor.peek(1) != b'=' {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        if let Some(kw) = keyword::lookup(text) {
            // Every keyword reads as a plain method name right after `.`.
            if self.previous.kind == TokenKind::Dot {
                return TokenKind::Identifier;
            }
            return kw;
        }

        if text.first().is_some_and(u8::is_ascii_uppercase) {
            TokenKind::Constant
        } else {
            TokenKind::Identifier
        }
    }
}
