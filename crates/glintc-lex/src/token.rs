//! The token kind enumeration and the `Token` triple.

use glintc_util::{Span, SpanResult};

/// Every lexeme this lexer can produce. Closed set — new syntax means a new
/// variant here, not a generic "other punctuation" catch-all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // -- arithmetic / bitwise operators and compound assignment -----------
    Plus,
    PlusEq,
    PlusAt,
    Minus,
    MinusEq,
    MinusAt,
    MinusGreater,
    Star,
    StarEq,
    StarStar,
    StarStarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Caret,
    CaretEq,
    Amp,
    AmpEq,
    AmpAmp,
    AmpAmpEq,
    Pipe,
    PipeEq,
    PipePipe,
    PipePipeEq,
    Tilde,
    TildeAt,
    Bang,
    BangEq,
    BangTilde,
    BangAt,

    // -- comparison / assignment --------------------------------------
    Eq,
    EqEq,
    EqEqEq,
    EqGreater,
    EqTilde,
    Less,
    LessEq,
    LessLess,
    LessLessEq,
    LessEqGreater,
    Greater,
    GreaterEq,
    GreaterGreater,
    GreaterGreaterEq,
    QuestionMark,

    // -- separators -----------------------------------------------------
    Comma,
    Semicolon,
    Newline,
    Dot,
    DotDot,
    DotDotDot,
    Colon,
    ColonColon,

    // -- brackets and braces ---------------------------------------------
    ParenLeft,
    ParenRight,
    BracketLeft,
    BracketRight,
    BracketLeftRight,
    BraceLeft,
    BraceRight,
    LambdaBegin,

    // -- literal-envelope markers -----------------------------------------
    StringBegin,
    StringContent,
    StringEnd,
    RegexpBegin,
    RegexpEnd,
    SymbolBegin,
    Backtick,
    EmbexprBegin,
    EmbexprEnd,
    EmbdocBegin,
    EmbdocLine,
    EmbdocEnd,
    WordsSep,

    // -- literal kinds ----------------------------------------------------
    Integer,
    Float,
    RationalNumber,
    ImaginaryNumber,
    CharacterLiteral,
    Label,

    // -- names --------------------------------------------------------
    Identifier,
    Constant,
    GlobalVariable,
    InstanceVariable,
    ClassVariable,
    BackReference,
    NthReference,

    // -- `%`-literal openers ------------------------------------------
    PercentLowerI,
    PercentUpperI,
    PercentLowerW,
    PercentUpperW,
    PercentLowerX,

    // -- keywords -------------------------------------------------------
    KwAlias,
    KwAnd,
    KwBegin,
    KwBeginUpper,
    KwBreak,
    KwCase,
    KwClass,
    KwDef,
    KwDefinedQ,
    KwDo,
    KwElse,
    KwElsif,
    KwEnd,
    KwEndUpper,
    KwEnsure,
    KwFalse,
    KwFor,
    KwIf,
    KwIn,
    KwModule,
    KwNext,
    KwNil,
    KwNot,
    KwOr,
    KwRedo,
    KwRescue,
    KwRetry,
    KwReturn,
    KwSelf,
    KwSuper,
    KwThen,
    KwTrue,
    KwUndef,
    KwUnless,
    KwUntil,
    KwWhen,
    KwWhile,
    KwYield,
    KwEncoding,
    KwLine,
    KwFile,

    // -- other ------------------------------------------------------------
    Comment,
    Eof,
    Invalid,
}

impl TokenKind {
    /// True for the identifier-like kinds that trigger the post-hoc
    /// `LABEL` reclassification when followed by a single `:`.
    pub fn is_identifier_like(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Constant) || self.is_keyword()
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwAlias
                | TokenKind::KwAnd
                | TokenKind::KwBegin
                | TokenKind::KwBeginUpper
                | TokenKind::KwBreak
                | TokenKind::KwCase
                | TokenKind::KwClass
                | TokenKind::KwDef
                | TokenKind::KwDefinedQ
                | TokenKind::KwDo
                | TokenKind::KwElse
                | TokenKind::KwElsif
                | TokenKind::KwEnd
                | TokenKind::KwEndUpper
                | TokenKind::KwEnsure
                | TokenKind::KwFalse
                | TokenKind::KwFor
                | TokenKind::KwIf
                | TokenKind::KwIn
                | TokenKind::KwModule
                | TokenKind::KwNext
                | TokenKind::KwNil
                | TokenKind::KwNot
                | TokenKind::KwOr
                | TokenKind::KwRedo
                | TokenKind::KwRescue
                | TokenKind::KwRetry
                | TokenKind::KwReturn
                | TokenKind::KwSelf
                | TokenKind::KwSuper
                | TokenKind::KwThen
                | TokenKind::KwTrue
                | TokenKind::KwUndef
                | TokenKind::KwUnless
                | TokenKind::KwUntil
                | TokenKind::KwWhen
                | TokenKind::KwWhile
                | TokenKind::KwYield
                | TokenKind::KwEncoding
                | TokenKind::KwLine
                | TokenKind::KwFile
        )
    }
}

/// A single emitted lexeme: a kind plus the half-open byte span it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { kind, start, end }
    }

    pub fn eof_at(offset: usize) -> Self {
        Self::new(TokenKind::Eof, offset, offset)
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn text<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.start..self.end]
    }

    /// Like [`Token::text`], but for a buffer a caller can't guarantee is
    /// the one this token was lexed from (e.g. one read from disk after the
    /// token was produced) — reports [`glintc_util::SpanError`] instead of
    /// panicking on an out-of-bounds span.
    pub fn try_text<'a>(&self, buf: &'a [u8]) -> SpanResult<&'a [u8]> {
        self.span().checked_slice(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_text_reads_the_same_bytes_as_text_when_in_bounds() {
        let buf = b"hello world";
        let token = Token::new(TokenKind::Identifier, 6, 11);
        assert_eq!(token.try_text(buf).unwrap(), token.text(buf));
    }

    #[test]
    fn try_text_reports_out_of_bounds_instead_of_panicking() {
        let buf = b"short";
        let token = Token::new(TokenKind::Identifier, 2, 50);
        assert!(token.try_text(buf).is_err());
    }
}
