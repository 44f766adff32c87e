//! glintc-util - foundation types shared by `glintc-lex` and its consumers.
//!
//! This crate carries the parts of the `glintc` toolchain that are not
//! specific to lexing: the [`Span`] byte-range type and the [`Handler`]
//! diagnostic sink. Keeping them in their own crate lets a future parser
//! crate depend on the same foundation without pulling in lexer internals.

mod diagnostic;
mod error;
mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::{SpanError, SpanResult};
pub use span::Span;
