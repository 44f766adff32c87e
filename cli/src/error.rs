//! Error type for the `glintc` CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("token span outlived its source: {0}")]
    TokenSpan(#[from] glintc_util::SpanError),
}

pub type Result<T> = std::result::Result<T, CliError>;
