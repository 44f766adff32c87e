//! STRING mode. §4.3.8.
//!
//! Covers `"..."`, `'...'`, backtick strings, and the `%q`/`%Q`/`%x`
//! literal bodies — everything that pushed a `STRING` frame, regardless of
//! which DEFAULT-mode opener put it there.

use crate::mode::{Mode, ModeKind};
use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn scan_string(&mut self) -> TokenKind {
        let mode = self.mode_top();

        if self.cursor.current() == mode.term {
            self.cursor.advance();
            self.pop_mode();
            return TokenKind::StringEnd;
        }

        let mut consumed_any = false;
        loop {
            if self.cursor.is_at_end() {
                let hook = self.hooks.unterminated_string;
                return hook(self);
            }
            if self.cursor.current() == mode.term {
                return TokenKind::StringContent;
            }
            // `#@...` and `#$...` are left as ordinary content; see the
            // open question on embedded sigil interpolation.
            if mode.interp && self.cursor.starts_with(b"#{") {
                if consumed_any {
                    return TokenKind::StringContent;
                }
                self.cursor.advance();
                self.cursor.advance();
                self.push_mode(Mode {
                    kind: ModeKind::Embexpr,
                    term: b'}',
                    interp: false,
                });
                return TokenKind::EmbexprBegin;
            }
            if self.cursor.current() == b'\n' {
                self.consume_newline();
            } else {
                self.cursor.advance();
            }
            consumed_any = true;
        }
    }
}
