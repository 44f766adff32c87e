//! The closed keyword table (§4.3.4).

use crate::token::TokenKind;

/// Looks up `text` in the reserved-word table. Returns `None` for anything
/// that isn't a keyword, so the caller falls back to `IDENTIFIER`/`CONSTANT`.
pub fn lookup(text: &[u8]) -> Option<TokenKind> {
    Some(match text {
        b"alias" => TokenKind::KwAlias,
        b"and" => TokenKind::KwAnd,
        b"begin" => TokenKind::KwBegin,
        b"BEGIN" => TokenKind::KwBeginUpper,
        b"break" => TokenKind::KwBreak,
        b"case" => TokenKind::KwCase,
        b"class" => TokenKind::KwClass,
        b"def" => TokenKind::KwDef,
        b"defined?" => TokenKind::KwDefinedQ,
        b"do" => TokenKind::KwDo,
        b"else" => TokenKind::KwElse,
        b"elsif" => TokenKind::KwElsif,
        b"end" => TokenKind::KwEnd,
        b"END" => TokenKind::KwEndUpper,
        b"ensure" => TokenKind::KwEnsure,
        b"false" => TokenKind::KwFalse,
        b"for" => TokenKind::KwFor,
        b"if" => TokenKind::KwIf,
        b"in" => TokenKind::KwIn,
        b"module" => TokenKind::KwModule,
        b"next" => TokenKind::KwNext,
        b"nil" => TokenKind::KwNil,
        b"not" => TokenKind::KwNot,
        b"or" => TokenKind::KwOr,
        b"redo" => TokenKind::KwRedo,
        b"rescue" => TokenKind::KwRescue,
        b"retry" => TokenKind::KwRetry,
        b"return" => TokenKind::KwReturn,
        b"self" => TokenKind::KwSelf,
        b"super" => TokenKind::KwSuper,
        b"then" => TokenKind::KwThen,
        b"true" => TokenKind::KwTrue,
        b"undef" => TokenKind::KwUndef,
        b"unless" => TokenKind::KwUnless,
        b"until" => TokenKind::KwUntil,
        b"when" => TokenKind::KwWhen,
        b"while" => TokenKind::KwWhile,
        b"yield" => TokenKind::KwYield,
        b"__ENCODING__" => TokenKind::KwEncoding,
        b"__LINE__" => TokenKind::KwLine,
        b"__FILE__" => TokenKind::KwFile,
        _ => return None,
    })
}
