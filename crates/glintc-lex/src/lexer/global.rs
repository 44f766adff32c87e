//! Global variables (`$...`) and instance/class variable sigils (`@`, `@@`).
//! §4.3.3 plus the `@` row of the DEFAULT dispatch table.

use crate::classify;
use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Called with the leading `$` already consumed.
    pub(super) fn scan_global_variable(&mut self) -> TokenKind {
        let b = self.cursor.current();
        match b {
            b'~' | b'*' | b'$' | b'?' | b'!' | b'@' | b'/' | b'\\' | b';' | b',' | b'.' | b'='
            | b':' | b'<' | b'>' | b'"' => {
                self.cursor.advance();
                TokenKind::GlobalVariable
            }
            b'&' | b'`' | b'\'' | b'+' => {
                self.cursor.advance();
                TokenKind::BackReference
            }
            b'1'..=b'9' => {
                while classify::digit_dec(self.cursor.current()) {
                    self.cursor.advance();
                }
                TokenKind::NthReference
            }
            _ if classify::ident_cont(b) => {
                while classify::ident_cont(self.cursor.current()) {
                    self.cursor.advance();
                }
                TokenKind::GlobalVariable
            }
            _ => self.invalid("'$' not followed by a valid global variable name"),
        }
    }

    /// Called with the leading `@` already consumed.
    pub(super) fn scan_at_sigil(&mut self) -> TokenKind {
        if self.cursor.bump_if(b'@') {
            if classify::ident_start(self.cursor.current()) {
                while classify::ident_cont(self.cursor.current()) {
                    self.cursor.advance();
                }
                TokenKind::ClassVariable
            } else {
                self.invalid("'@@' not followed by an identifier")
            }
        } else if classify::ident_start(self.cursor.current()) {
            while classify::ident_cont(self.cursor.current()) {
                self.cursor.advance();
            }
            TokenKind::InstanceVariable
        } else {
            self.invalid("'@' not followed by an identifier")
        }
    }
}
