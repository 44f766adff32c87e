//! DEFAULT / EMBEXPR dispatch.
//!
//! The two modes share a recogniser; `EMBEXPR` differs only in that `}`
//! closes the embedded expression instead of opening a brace block.

use crate::classify;
use crate::mode::{Mode, ModeKind};
use crate::token::TokenKind;

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn scan_default(&mut self) -> TokenKind {
        self.skip_hspace();
        self.token_start = self.cursor.position();
        if self.cursor.is_at_end() {
            return TokenKind::Eof;
        }
        let kind = self.dispatch_default_byte();
        if kind.is_identifier_like() {
            self.maybe_relabel(kind)
        } else {
            kind
        }
    }

    fn skip_hspace(&mut self) {
        while classify::hspace(self.cursor.current()) {
            self.cursor.advance();
        }
    }

    /// After an identifier-like emission, a lone trailing `:` (not `::`)
    /// reclassifies it as `LABEL`.
    fn maybe_relabel(&mut self, kind: TokenKind) -> TokenKind {
        if self.cursor.current() == b':' && self.cursor.peek(1) != b':' {
            self.cursor.advance();
            TokenKind::Label
        } else {
            kind
        }
    }

    fn prev_allows_unary_at(&self) -> bool {
        matches!(self.previous.kind, TokenKind::KwDef | TokenKind::Dot)
    }

    fn dispatch_default_byte(&mut self) -> TokenKind {
        let b = self.cursor.advance();
        match b {
            0 | 0x04 | 0x1a => TokenKind::Eof,
            b'#' => self.scan_comment(),
            b'\n' => {
                self.line += 1;
                TokenKind::Newline
            }
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::ParenLeft,
            b')' => TokenKind::ParenRight,
            b']' => TokenKind::BracketRight,
            b'[' => {
                if self.previous.kind == TokenKind::Dot && self.cursor.current() == b']' {
                    self.cursor.advance();
                    TokenKind::BracketLeftRight
                } else {
                    TokenKind::BracketLeft
                }
            }
            b'{' => {
                if self.previous.kind == TokenKind::MinusGreater {
                    TokenKind::LambdaBegin
                } else {
                    TokenKind::BraceLeft
                }
            }
            b'}' => {
                if self.mode_top().kind == ModeKind::Embexpr {
                    self.pop_mode();
                    TokenKind::EmbexprEnd
                } else {
                    TokenKind::BraceRight
                }
            }
            b'*' => {
                if self.cursor.bump_if(b'*') {
                    if self.cursor.bump_if(b'=') {
                        TokenKind::StarStarEq
                    } else {
                        TokenKind::StarStar
                    }
                } else if self.cursor.bump_if(b'=') {
                    TokenKind::StarEq
                } else {
                    TokenKind::Star
                }
            }
            b'!' => {
                if self.cursor.bump_if(b'=') {
                    TokenKind::BangEq
                } else if self.cursor.bump_if(b'~') {
                    TokenKind::BangTilde
                } else if self.cursor.current() == b'@' && self.prev_allows_unary_at() {
                    self.cursor.advance();
                    TokenKind::BangAt
                } else {
                    TokenKind::Bang
                }
            }
            b'=' => self.scan_eq(),
            b'<' => self.scan_lt(),
            b'>' => {
                if self.cursor.bump_if(b'>') {
                    if self.cursor.bump_if(b'=') {
                        TokenKind::GreaterGreaterEq
                    } else {
                        TokenKind::GreaterGreater
                    }
                } else if self.cursor.bump_if(b'=') {
                    TokenKind::GreaterEq
                } else {
                    TokenKind::Greater
                }
            }
            b'"' => {
                self.push_mode(Mode {
                    kind: ModeKind::String,
                    term: b'"',
                    interp: true,
                });
                TokenKind::StringBegin
            }
            b'`' => {
                self.push_mode(Mode {
                    kind: ModeKind::String,
                    term: b'`',
                    interp: true,
                });
                TokenKind::Backtick
            }
            b'\'' => {
                self.push_mode(Mode {
                    kind: ModeKind::String,
                    term: b'\'',
                    interp: false,
                });
                TokenKind::StringBegin
            }
            b'?' => {
                if classify::ident_cont(self.cursor.current()) {
                    self.cursor.advance();
                    TokenKind::CharacterLiteral
                } else {
                    TokenKind::QuestionMark
                }
            }
            b'&' => {
                if self.cursor.bump_if(b'&') {
                    if self.cursor.bump_if(b'=') {
                        TokenKind::AmpAmpEq
                    } else {
                        TokenKind::AmpAmp
                    }
                } else if self.cursor.bump_if(b'=') {
                    TokenKind::AmpEq
                } else {
                    TokenKind::Amp
                }
            }
            b'|' => {
                if self.cursor.bump_if(b'|') {
                    if self.cursor.bump_if(b'=') {
                        TokenKind::PipePipeEq
                    } else {
                        TokenKind::PipePipe
                    }
                } else if self.cursor.bump_if(b'=') {
                    TokenKind::PipeEq
                } else {
                    TokenKind::Pipe
                }
            }
            b'+' => {
                if self.cursor.bump_if(b'=') {
                    TokenKind::PlusEq
                } else if self.cursor.current() == b'@' && self.prev_allows_unary_at() {
                    self.cursor.advance();
                    TokenKind::PlusAt
                } else {
                    TokenKind::Plus
                }
            }
            b'-' => {
                if self.cursor.bump_if(b'>') {
                    TokenKind::MinusGreater
                } else if self.cursor.bump_if(b'=') {
                    TokenKind::MinusEq
                } else if self.cursor.current() == b'@' && self.prev_allows_unary_at() {
                    self.cursor.advance();
                    TokenKind::MinusAt
                } else {
                    TokenKind::Minus
                }
            }
            b'.' => {
                if self.cursor.bump_if(b'.') {
                    if self.cursor.bump_if(b'.') {
                        TokenKind::DotDotDot
                    } else {
                        TokenKind::DotDot
                    }
                } else {
                    TokenKind::Dot
                }
            }
            b'0'..=b'9' => self.scan_number(),
            b':' => {
                if self.cursor.bump_if(b':') {
                    TokenKind::ColonColon
                } else if classify::ident_start(self.cursor.current()) {
                    self.push_mode(Mode {
                        kind: ModeKind::Symbol,
                        term: 0,
                        interp: false,
                    });
                    TokenKind::SymbolBegin
                } else {
                    TokenKind::Colon
                }
            }
            b'/' => {
                if self.cursor.bump_if(b'=') {
                    TokenKind::SlashEq
                } else if self.cursor.is_at_end() || classify::space(self.cursor.current()) {
                    TokenKind::Slash
                } else {
                    self.push_mode(Mode {
                        kind: ModeKind::Regexp,
                        term: b'/',
                        interp: true,
                    });
                    TokenKind::RegexpBegin
                }
            }
            b'^' => {
                if self.cursor.bump_if(b'=') {
                    TokenKind::CaretEq
                } else {
                    TokenKind::Caret
                }
            }
            b'~' => {
                if self.cursor.current() == b'@' && self.prev_allows_unary_at() {
                    self.cursor.advance();
                    TokenKind::TildeAt
                } else {
                    TokenKind::Tilde
                }
            }
            b'%' => self.scan_percent(),
            b'$' => self.scan_global_variable(),
            b'@' => self.scan_at_sigil(),
            other => {
                if classify::ident_start(other) {
                    self.scan_identifier()
                } else {
                    self.invalid("unrecognised byte in code")
                }
            }
        }
    }

    fn scan_comment(&mut self) -> TokenKind {
        while !self.cursor.is_at_end() && self.cursor.current() != b'\n' {
            self.cursor.advance();
        }
        if self.cursor.current() == b'\n' {
            self.consume_newline();
        }
        TokenKind::Comment
    }

    fn scan_eq(&mut self) -> TokenKind {
        let at_line_start = self.token_start == 0 || self.cursor.buf()[self.token_start - 1] == b'\n';
        if at_line_start && self.cursor.starts_with(b"begin\n") {
            for _ in 0..b"begin".len() {
                self.cursor.advance();
            }
            self.consume_newline();
            self.push_mode(Mode {
                kind: ModeKind::Embdoc,
                term: 0,
                interp: false,
            });
            return TokenKind::EmbdocBegin;
        }
        if self.cursor.bump_if(b'>') {
            TokenKind::EqGreater
        } else if self.cursor.bump_if(b'~') {
            TokenKind::EqTilde
        } else if self.cursor.bump_if(b'=') {
            if self.cursor.bump_if(b'=') {
                TokenKind::EqEqEq
            } else {
                TokenKind::EqEq
            }
        } else {
            TokenKind::Eq
        }
    }

    fn scan_lt(&mut self) -> TokenKind {
        if self.cursor.bump_if(b'<') {
            if self.cursor.bump_if(b'=') {
                return TokenKind::LessLessEq;
            }
            if matches!(self.cursor.current(), b'-' | b'~') {
                // Heredoc openers are out of scope; stop the stream rather
                // than misparse the rest of the buffer as code.
                return TokenKind::Eof;
            }
            TokenKind::LessLess
        } else if self.cursor.bump_if(b'=') {
            if self.cursor.bump_if(b'>') {
                TokenKind::LessEqGreater
            } else {
                TokenKind::LessEq
            }
        } else {
            TokenKind::Less
        }
    }

    fn scan_percent(&mut self) -> TokenKind {
        if self.cursor.bump_if(b'=') {
            return TokenKind::PercentEq;
        }
        let letter = self.cursor.current();
        if !matches!(letter, b'i' | b'I' | b'w' | b'W' | b'q' | b'Q' | b'r' | b'x') {
            return TokenKind::Percent;
        }
        self.cursor.advance();
        let delim = self.cursor.advance();
        let term = classify::terminator(delim);
        match letter {
            b'i' => {
                self.push_mode(Mode { kind: ModeKind::List, term, interp: false });
                TokenKind::PercentLowerI
            }
            b'I' => {
                self.push_mode(Mode { kind: ModeKind::List, term, interp: true });
                TokenKind::PercentUpperI
            }
            b'w' => {
                self.push_mode(Mode { kind: ModeKind::List, term, interp: false });
                TokenKind::PercentLowerW
            }
            b'W' => {
                self.push_mode(Mode { kind: ModeKind::List, term, interp: true });
                TokenKind::PercentUpperW
            }
            b'q' => {
                self.push_mode(Mode { kind: ModeKind::String, term, interp: false });
                TokenKind::StringBegin
            }
            b'Q' => {
                self.push_mode(Mode { kind: ModeKind::String, term, interp: true });
                TokenKind::StringBegin
            }
            b'r' => {
                self.push_mode(Mode { kind: ModeKind::Regexp, term, interp: true });
                TokenKind::RegexpBegin
            }
            b'x' => {
                self.push_mode(Mode { kind: ModeKind::String, term, interp: true });
                TokenKind::PercentLowerX
            }
            _ => unreachable!("letter filtered above"),
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
    fn bracket_left_right_fuses_only_after_dot() {
        assert_eq!(
            kinds(b"x.[]"),
            vec![TokenKind::Identifier, TokenKind::Dot, TokenKind::BracketLeftRight]
        );
        assert_eq!(
            kinds(b"[]"),
            vec![TokenKind::BracketLeft, TokenKind::BracketRight]
        );
    }

    #[test]
    fn brace_opens_a_lambda_body_only_after_arrow() {
        assert_eq!(
            kinds(b"->{ }"),
            vec![TokenKind::MinusGreater, TokenKind::LambdaBegin, TokenKind::BraceRight]
        );
        assert_eq!(kinds(b"{ }"), vec![TokenKind::BraceLeft, TokenKind::BraceRight]);
    }

    #[test]
    fn comment_swallows_its_trailing_newline() {
        assert_eq!(
            kinds(b"x # comment\ny"),
            vec![TokenKind::Identifier, TokenKind::Comment, TokenKind::Identifier]
        );
    }

    #[test]
    fn heredoc_openers_are_a_safety_stop() {
        assert_eq!(kinds(b"x <<- FOO"), vec![TokenKind::Identifier]);
        assert_eq!(kinds(b"x <<~ FOO"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn star_maximal_munch() {
        assert_eq!(kinds(b"*"), vec![TokenKind::Star]);
        assert_eq!(kinds(b"*="), vec![TokenKind::StarEq]);
        assert_eq!(kinds(b"**"), vec![TokenKind::StarStar]);
        assert_eq!(kinds(b"**="), vec![TokenKind::StarStarEq]);
    }

    #[test]
    fn less_maximal_munch() {
        assert_eq!(kinds(b"<"), vec![TokenKind::Less]);
        assert_eq!(kinds(b"<="), vec![TokenKind::LessEq]);
        assert_eq!(kinds(b"<=>"), vec![TokenKind::LessEqGreater]);
        assert_eq!(kinds(b"<<"), vec![TokenKind::LessLess]);
        assert_eq!(kinds(b"<<="), vec![TokenKind::LessLessEq]);
    }

    #[test]
    fn slash_is_division_before_space_or_eof_else_opens_a_regexp() {
        assert_eq!(
            kinds(b"a / b"),
            vec![TokenKind::Identifier, TokenKind::Slash, TokenKind::Identifier]
        );
        assert_eq!(kinds(b"a /"), vec![TokenKind::Identifier, TokenKind::Slash]);
        let tokens: Vec<_> = kinds(b"/abc/");
        assert_eq!(tokens[0], TokenKind::RegexpBegin);
    }

    #[test]
    fn unary_at_forms_require_def_or_dot_context() {
        assert_eq!(
            kinds(b"def !@; end"),
            vec![
                TokenKind::KwDef,
                TokenKind::BangAt,
                TokenKind::Semicolon,
                TokenKind::KwEnd,
            ]
        );
        assert_eq!(kinds(b"!@"), vec![TokenKind::Bang, TokenKind::InstanceVariable]);
    }

    #[test]
    fn colon_colon_never_opens_a_symbol() {
        assert_eq!(kinds(b"A::B"), vec![TokenKind::Constant, TokenKind::ColonColon, TokenKind::Constant]);
    }

    #[test]
    fn question_mark_character_literal_vs_bare_operator() {
        assert_eq!(kinds(b"?a"), vec![TokenKind::CharacterLiteral]);
        assert_eq!(kinds(b"a ? b"), vec![TokenKind::Identifier, TokenKind::QuestionMark, TokenKind::Identifier]);
    }

    #[test]
    fn label_reclassification_requires_a_lone_colon() {
        assert_eq!(kinds(b"foo:"), vec![TokenKind::Label]);
        assert_eq!(kinds(b"foo::"), vec![TokenKind::Identifier, TokenKind::ColonColon]);
    }
}
