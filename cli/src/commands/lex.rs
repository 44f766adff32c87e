//! The `lex` subcommand: tokenize a file and print the resulting stream.

use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use glintc_lex::{ErrorHooks, Lexer};
use glintc_util::Level;
use serde::Serialize;
use tracing::warn;

use crate::error::{CliError, Result};

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct LexArgs {
    pub path: PathBuf,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: String,
    start: usize,
    end: usize,
    text: &'a str,
}

pub fn run_lex(args: LexArgs) -> Result<()> {
    let source = fs::read(&args.path).map_err(|source| CliError::ReadSource {
        path: args.path.display().to_string(),
        source,
    })?;

    let mut lexer = Lexer::new(&source, ErrorHooks::new());
    let mut records = Vec::new();
    loop {
        let token = lexer.advance();
        if token.is_eof() {
            break;
        }
        let text = String::from_utf8_lossy(token.try_text(&source)?).into_owned();
        records.push((token, text));
    }

    for diagnostic in lexer.diagnostics() {
        match diagnostic.level {
            Level::Error => warn!("{diagnostic}"),
            Level::Warning | Level::Note => warn!("{diagnostic}"),
        }
    }

    match args.format {
        OutputFormat::Text => {
            for (token, text) in &records {
                println!("{:>5}..{:<5} {:?} {:?}", token.start, token.end, token.kind, text);
            }
        }
        OutputFormat::Json => {
            let out: Vec<TokenRecord> = records
                .iter()
                .map(|(token, text)| TokenRecord {
                    kind: format!("{:?}", token.kind),
                    start: token.start,
                    end: token.end,
                    text,
                })
                .collect();
            let json = serde_json::to_string_pretty(&out)?;
            println!("{json}");
        }
    }

    Ok(())
}
