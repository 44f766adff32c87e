//! Command implementations for the `glintc` CLI.

pub mod lex;

pub use lex::{run_lex, LexArgs};
