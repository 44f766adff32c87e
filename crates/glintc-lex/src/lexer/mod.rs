//! The lexer proper.
//!
//! One file per mode, plus this one for the struct, the `advance` step, and
//! the bits shared across every mode (the newline counter, mode push/pop,
//! diagnostics):
//! - `default` - DEFAULT/EMBEXPR dispatch: operators, punctuation, literal
//!   openers.
//! - `number` - numeric literal scanning.
//! - `global` - `$...` and `@`/`@@` sigil scanning.
//! - `identifier` - identifier/keyword scanning and label reclassification.
//! - `embdoc`, `list`, `regexp`, `string`, `symbol` - the remaining five
//!   mode-specific scanners.

mod default;
mod embdoc;
mod global;
mod identifier;
mod list;
mod number;
mod regexp;
mod string;
mod symbol;

use glintc_util::{Diagnostic, Handler, Span};

use crate::cursor::Cursor;
use crate::hooks::ErrorHooks;
use crate::mode::{Mode, ModeKind, ModeStack};
use crate::token::{Token, TokenKind};

/// Drives tokenisation of one buffer. Single-use: construct it, call
/// [`Lexer::advance`] until [`Lexer::current`] reports [`Token::is_eof`], then
/// drop it.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    modes: ModeStack,
    hooks: ErrorHooks,
    handler: Handler,
    token_start: usize,
    line: u32,
    previous: Token,
    current: Token,
}

impl<'a> Lexer<'a> {
    pub fn new(buf: &'a [u8], hooks: ErrorHooks) -> Self {
        let sentinel = Token::eof_at(0);
        Self {
            cursor: Cursor::new(buf),
            modes: ModeStack::new(),
            hooks,
            handler: Handler::new(),
            token_start: 0,
            line: 1,
            previous: sentinel,
            current: sentinel,
        }
    }

    pub fn buf(&self) -> &'a [u8] {
        self.cursor.buf()
    }

    pub fn previous(&self) -> Token {
        self.previous
    }

    pub fn current(&self) -> Token {
        self.current
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn mode_depth(&self) -> usize {
        self.modes.depth()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.handler.diagnostics()
    }

    /// Shifts `previous <- current`, then writes a fresh `current` by
    /// invoking the recogniser for the mode on top of the stack.
    pub fn advance(&mut self) -> Token {
        self.previous = self.current;
        self.current = self.lex_one();
        self.current
    }

    fn lex_one(&mut self) -> Token {
        self.token_start = self.cursor.position();
        let kind = self.next_token_kind();
        Token::new(kind, self.token_start, self.cursor.position())
    }

    fn next_token_kind(&mut self) -> TokenKind {
        match self.modes.top().kind {
            ModeKind::Default | ModeKind::Embexpr => self.scan_default(),
            ModeKind::Embdoc => self.scan_embdoc(),
            ModeKind::List => self.scan_list(),
            ModeKind::Regexp => self.scan_regexp(),
            ModeKind::String => self.scan_string(),
            ModeKind::Symbol => self.scan_symbol(),
        }
    }

    fn push_mode(&mut self, mode: Mode) {
        self.modes.push(mode);
    }

    fn pop_mode(&mut self) {
        self.modes.pop();
    }

    fn mode_top(&self) -> Mode {
        self.modes.top()
    }

    /// Consumes the `\n` under the cursor and bumps the line counter. The
    /// single site every newline-consuming scanner routes through.
    fn consume_newline(&mut self) {
        debug_assert_eq!(self.cursor.current(), b'\n');
        self.cursor.advance();
        self.line += 1;
    }

    fn invalid(&mut self, message: impl Into<String>) -> TokenKind {
        let span = Span::new(self.token_start, self.cursor.position());
        self.handler.error(message, span);
        TokenKind::Invalid
    }
}

/// Yields tokens up to but excluding the terminating `EOF`, matching how
/// callers are expected to drain the stream per the step contract.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.advance();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
