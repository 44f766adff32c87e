//! Structural error types shared across the `glintc` crates.
//!
//! These are distinct from [`crate::diagnostic`]: a `Diagnostic` describes a
//! problem *in the source text* the lexer is allowed to keep going past. A
//! [`SpanError`] describes a programming error in a caller of this crate
//! (an out-of-bounds span against a particular buffer) and is returned
//! rather than folded into the token stream.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    #[error("span {span_start}..{span_end} is out of bounds for a buffer of {buffer_len} bytes")]
    OutOfBounds {
        buffer_len: usize,
        span_start: usize,
        span_end: usize,
    },
}

pub type SpanResult<T> = std::result::Result<T, SpanError>;
