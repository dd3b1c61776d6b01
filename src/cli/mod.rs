//! CLI module for the crb code generator
//!
//! ```text
//! crb <FILE> [-o OUTPUT] [--collapse-terminators] [--indent-width N]
//! ```
//!
//! `FILE` holds the parser's output (a JSON syntax tree). The generated C is written to stdout, or to `OUTPUT` when
//! given.
//!
//! ## Design
//!
//! Arguments are parsed with clap's derive API. Commands report failures as [`CliError`]; [`run`] turns them into a
//! message on stderr and the process exit status.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use crate::backend::{EmitConfig, TerminatorPolicy};

// ============================================================================
// Errors
// ============================================================================

/// A failed CLI run. `message` is printed to stderr as-is and the process exits with status 1.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    pub message: String,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate C source from a crb syntax tree
#[derive(Parser, Debug)]
#[command(name = "crb")]
#[command(version = VERSION)]
#[command(about = "Generate C source from a crb syntax tree", long_about = None)]
pub struct Cli {
    /// Parser output to generate code from (JSON syntax tree)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write generated code to this file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Emit a single `;` after expression statements inside blocks
    #[arg(long)]
    pub collapse_terminators: bool,

    /// Indent function bodies with N spaces instead of a tab
    #[arg(long, value_name = "N")]
    pub indent_width: Option<usize>,
}

impl Cli {
    /// Build the emitter configuration selected by the flags.
    pub fn emit_config(&self) -> EmitConfig {
        let mut config = EmitConfig::new();
        if let Some(width) = self.indent_width {
            config = config.with_indent_width(width);
        }
        if self.collapse_terminators {
            config = config.with_terminators(TerminatorPolicy::Collapse);
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse arguments, run the command and map the outcome to an exit status.
pub fn run() -> ExitCode {
    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> CliResult<()> {
    let config = cli.emit_config();
    commands::emit_file(&cli.file, cli.output.as_deref(), config)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["crb", "main.json"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("main.json"));
        assert!(cli.output.is_none());
        assert_eq!(cli.emit_config(), EmitConfig::default());
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["crb"]).is_err());
    }

    #[test]
    fn test_cli_parse_output() {
        let cli = Cli::try_parse_from(["crb", "main.json", "-o", "main.c"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("main.c")));
    }

    #[test]
    fn test_cli_parse_emit_flags() {
        let cli = Cli::try_parse_from(["crb", "main.json", "--collapse-terminators", "--indent-width", "4"]).unwrap();
        let config = cli.emit_config();
        assert_eq!(config.indent, "    ");
        assert_eq!(config.terminators, TerminatorPolicy::Collapse);
    }

    #[test]
    fn test_execute_reports_missing_file() {
        let cli = Cli::try_parse_from(["crb", "no/such/tree.json"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert!(err.to_string().starts_with("Error reading file 'no/such/tree.json'"), "got: {}", err);
        assert_eq!(err.to_string(), err.message);
    }

    #[test]
    fn test_cli_rejects_bad_indent_width() {
        assert!(Cli::try_parse_from(["crb", "main.json", "--indent-width", "wide"]).is_err());
    }
}
