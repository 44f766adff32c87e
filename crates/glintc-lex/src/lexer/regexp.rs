//! REGEXP mode. §4.3.7.

use crate::mode::{Mode, ModeKind};
use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn scan_regexp(&mut self) -> TokenKind {
        let term = self.mode_top().term;

        if self.cursor.current() == term {
            self.cursor.advance();
            while matches!(
                self.cursor.current(),
                b'e' | b'i' | b'm' | b'n' | b's' | b'u' | b'x'
            ) {
                self.cursor.advance();
            }
            self.pop_mode();
            return TokenKind::RegexpEnd;
        }

        let mut consumed_any = false;
        loop {
            if self.cursor.is_at_end() {
                let hook = self.hooks.unterminated_regexp;
                return hook(self);
            }
            if self.cursor.current() == term {
                return TokenKind::StringContent;
            }
            if self.cursor.starts_with(b"#{") {
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

#[cfg(test)]
mod tests {
    use crate::hooks::ErrorHooks;
    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    fn kinds(src: &[u8]) -> Vec<TokenKind> {
        Lexer::new(src, ErrorHooks::new()).map(|t| t.kind).collect()
    }

    #[test]
    fn plain_regexp_with_option_letters() {
        assert_eq!(
            kinds(b"/ab+c/mix"),
            vec![TokenKind::RegexpBegin, TokenKind::StringContent, TokenKind::RegexpEnd]
        );
    }

    #[test]
    fn interpolated_regexp() {
        assert_eq!(
            kinds(b"/a#{b}c/"),
            vec![
                TokenKind::RegexpBegin,
                TokenKind::StringContent,
                TokenKind::EmbexprBegin,
                TokenKind::Identifier,
                TokenKind::EmbexprEnd,
                TokenKind::StringContent,
                TokenKind::RegexpEnd,
            ]
        );
    }

    #[test]
    fn empty_regexp_body_emits_no_content_token() {
        assert_eq!(kinds(b"//"), vec![TokenKind::RegexpBegin, TokenKind::RegexpEnd]);
    }

    #[test]
    fn unterminated_regexp_fails_closed() {
        let mut lexer = Lexer::new(b"/abc", ErrorHooks::new());
        let mut last = lexer.advance();
        while !last.is_eof() {
            last = lexer.advance();
        }
        assert!(last.is_eof());
    }
}
