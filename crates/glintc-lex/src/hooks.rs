//! Error-recovery hook table (§4.4).
//!
//! Each slot is invoked exactly where its mode's scanner reaches end of
//! input before finding its terminator. The default policy for all four
//! fails closed: it returns `EOF` and ends the stream. A caller that wants
//! recovery (reopening the literal, rewinding the cursor) supplies its own
//! function pointer instead — a tagged enum would also satisfy the
//! contract, but a table of callables is kept here because custom recovery
//! policies are exactly the extension point embedders reach for.

use crate::lexer::Lexer;
use crate::token::TokenKind;

pub type HookFn = for<'a> fn(&mut Lexer<'a>) -> TokenKind;

fn fail_closed<'a>(_lexer: &mut Lexer<'a>) -> TokenKind {
    TokenKind::Eof
}

#[derive(Clone, Copy)]
pub struct ErrorHooks {
    pub unterminated_embdoc: HookFn,
    pub unterminated_list: HookFn,
    pub unterminated_regexp: HookFn,
    pub unterminated_string: HookFn,
}

impl ErrorHooks {
    pub const fn new() -> Self {
        Self {
            unterminated_embdoc: fail_closed,
            unterminated_list: fail_closed,
            unterminated_regexp: fail_closed,
            unterminated_string: fail_closed,
        }
    }
}

impl Default for ErrorHooks {
    fn default() -> Self {
        Self::new()
    }
}
