//! EMBDOC mode. §4.3.5.
//!
//! Line-oriented literal text between a line-start `=begin` and a line-start
//! `=end`. `EMBDOC_BEGIN` was already emitted by the `=` that pushed this
//! mode.

use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn scan_embdoc(&mut self) -> TokenKind {
        if self.cursor.starts_with(b"=end\n") {
            for _ in 0..b"=end".len() {
                self.cursor.advance();
            }
            self.consume_newline();
            self.pop_mode();
            return TokenKind::EmbdocEnd;
        }
        if self.cursor.is_at_end() {
            let hook = self.hooks.unterminated_embdoc;
            return hook(self);
        }
        while !self.cursor.is_at_end() && self.cursor.current() != b'\n' {
            self.cursor.advance();
        }
        if self.cursor.current() == b'\n' {
            self.consume_newline();
            TokenKind::EmbdocLine
        } else {
            let hook = self.hooks.unterminated_embdoc;
            hook(self)
        }
    }
}
