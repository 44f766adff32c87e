//! LIST mode (`%w`, `%W`, `%i`, `%I`). §4.3.6.

use crate::classify;
use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn scan_list(&mut self) -> TokenKind {
        let term = self.mode_top().term;

        if classify::space(self.cursor.current()) {
            while classify::space(self.cursor.current()) {
                if self.cursor.current() == b'\n' {
                    self.consume_newline();
                } else {
                    self.cursor.advance();
                }
            }
            return TokenKind::WordsSep;
        }

        let mut consumed_any = false;
        loop {
            if self.cursor.is_at_end() {
                let hook = self.hooks.unterminated_list;
                return hook(self);
            }
            let c = self.cursor.current();
            if c == term {
                if consumed_any {
                    return TokenKind::StringContent;
                }
                self.cursor.advance();
                self.pop_mode();
                return TokenKind::StringEnd;
            }
            if classify::space(c) {
                return TokenKind::StringContent;
            }
            self.cursor.advance();
            consumed_any = true;
        }
    }
}
