//! CLI module for the trace translator
//!
//! This module provides the command-line interface for tracefg.
//!
//! ## Commands
//!
//! - `translate <file>` - Translate a trace to Java factor-graph statements
//! - `primitives` - List the primitives the builtin registry can encode
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::TranslateConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Translate probabilistic-program traces into Dimple factor graphs
#[derive(Parser, Debug)]
#[command(name = "tracefg")]
#[command(version = VERSION)]
#[command(about = "Translate probabilistic-program traces into Dimple factor graphs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Trace to translate with default settings (when no subcommand is given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Lower to IR only (debug)
    #[arg(long = "ir", value_name = "FILE", conflicts_with = "file")]
    pub ir_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate a trace to Java statements
    Translate {
        /// Trace file to translate
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Solver iteration count written before `solve()`
        #[arg(long, value_name = "N")]
        iterations: Option<u32>,
        /// Java identifier of the factor graph
        #[arg(long, value_name = "NAME")]
        graph: Option<String>,
        /// Wrap the statements in a runnable class with this name
        #[arg(long, value_name = "CLASS")]
        wrap: Option<String>,
    },

    /// List the primitives the builtin registry can encode
    Primitives,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.ir_file {
        return commands::lower_file(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Translate {
            file,
            iterations,
            graph,
            wrap,
        }) => {
            let config = build_config(iterations, graph)?;
            commands::translate_file(&file.to_string_lossy(), &config, wrap.as_deref())
        }
        Some(Command::Primitives) => commands::list_primitives(),
        None => {
            if let Some(file) = cli.file {
                commands::translate_file(&file.to_string_lossy(), &TranslateConfig::default(), None)
            } else {
                Err(CliError::failure("Error: no trace file given (see `tracefg --help`)"))
            }
        }
    }
}

/// Apply CLI overrides to the default configuration.
fn build_config(iterations: Option<u32>, graph: Option<String>) -> CliResult<TranslateConfig> {
    let mut config = TranslateConfig::default();
    if let Some(iterations) = iterations {
        config = config.with_num_iterations(iterations);
    }
    if let Some(graph) = graph {
        if !is_java_identifier(&graph) {
            return Err(CliError::failure(format!(
                "Error: graph name '{}' is not a valid Java identifier",
                graph
            )));
        }
        config = config.with_graph_name(graph);
    }
    Ok(config)
}

fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_translate() {
        let cli = Cli::try_parse_from(["tracefg", "translate", "trace.js"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Translate { .. })));
    }

    #[test]
    fn test_cli_parse_translate_options() {
        let cli = Cli::try_parse_from([
            "tracefg",
            "translate",
            "trace.js",
            "--iterations",
            "500",
            "--graph",
            "g",
            "--wrap",
            "Model",
        ])
        .unwrap();
        if let Some(Command::Translate {
            iterations, graph, wrap, ..
        }) = cli.command
        {
            assert_eq!(iterations, Some(500));
            assert_eq!(graph.as_deref(), Some("g"));
            assert_eq!(wrap.as_deref(), Some("Model"));
        } else {
            panic!("Expected Translate command");
        }
    }

    #[test]
    fn test_cli_parse_primitives() {
        let cli = Cli::try_parse_from(["tracefg", "primitives"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Primitives)));
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["tracefg", "--lex", "trace.js"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["tracefg", "--parse", "trace.js"]).unwrap();
        assert!(cli.parse_file.is_some());

        let cli = Cli::try_parse_from(["tracefg", "--ir", "trace.js"]).unwrap();
        assert!(cli.ir_file.is_some());
    }

    #[test]
    fn test_cli_rejects_negative_iterations() {
        assert!(Cli::try_parse_from(["tracefg", "translate", "t.js", "--iterations", "-1"]).is_err());
    }

    #[test]
    fn test_build_config_validates_graph_name() {
        let config = build_config(Some(20), Some("fg".into())).unwrap();
        assert_eq!(config.num_iterations, 20);
        assert_eq!(config.graph_name, "fg");
        assert!(build_config(None, Some("1g".into())).is_err());
        assert_eq!(build_config(None, None).unwrap(), TranslateConfig::default());
    }
}
