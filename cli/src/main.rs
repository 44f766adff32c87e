//! `glintc` - a token-dump CLI over `glintc-lex`.
//!
//! Reads a source file, runs it through the lexer, and prints the resulting
//! token stream as text or JSON. Exists so the lexer can be exercised from a
//! shell without pulling it into a larger driver.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_lex, LexArgs};

#[derive(Parser, Debug)]
#[command(name = "glintc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a source file with glintc-lex", long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true, env = "GLINTC_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a file and print its token stream
    Lex(LexCommand),
}

#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file to tokenize
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = commands::lex::OutputFormat::Text)]
    format: commands::lex::OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Lex(args) => run_lex(LexArgs {
            path: args.path,
            format: args.format,
        })?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .ok();
}
