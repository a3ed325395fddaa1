//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use tracefg_core::lang::{factors, primitives, variables};
use tracefg_syntax::ast::Program;
use tracefg_syntax::diagnostics::{self, CompileError};
use tracefg_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};
use crate::backend::{JavaEmitter, PrimitiveRegistry, TranslateError, Translator};
use crate::config::TranslateConfig;
use crate::ir::{self, IrProgram};

/// Maximum source file size (10 MB)
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a trace file with a size limit.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (10 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Join front-end errors into one CLI error, each rendered with source context.
fn syntax_failure(file_path: &str, source: &str, errors: &[CompileError]) -> CliError {
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&diagnostics::render(file_path, source, err));
    }
    CliError::failure(msg.trim_end())
}

fn translate_failure(file_path: &str, err: TranslateError) -> CliError {
    let report = miette::Report::new(err);
    CliError::failure(format!("{}: {:?}", file_path, report).trim_end())
}

fn parse_program(file_path: &str, source: &str) -> CliResult<Program> {
    tracefg_syntax::parse_source(source).map_err(|errs| syntax_failure(file_path, source, &errs))
}

fn lower(file_path: &str, source: &str) -> CliResult<IrProgram> {
    let program = parse_program(file_path, source)?;
    ir::lower_program(&program).map_err(|e| translate_failure(file_path, e))
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| syntax_failure(file_path, &source, &errs))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source).map_err(|errs| syntax_failure(file_path, &source, &errs))?;
    let ast = parser::parse(&tokens).map_err(|errs| syntax_failure(file_path, &source, &errs))?;
    println!("{:#?}", ast);
    Ok(ExitCode::SUCCESS)
}

/// Lower to IR and display it.
pub fn lower_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let ir = lower(file_path, &source)?;
    println!("{:#?}", ir);
    Ok(ExitCode::SUCCESS)
}

/// Translate a trace and print the Java statements (or a runnable class with `wrap`).
pub fn translate_file(file_path: &str, config: &TranslateConfig, wrap: Option<&str>) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let ir = lower(file_path, &source)?;

    let registry = PrimitiveRegistry::with_builtins();
    let stmts = Translator::new(&registry, config)
        .translate_statements(&ir)
        .map_err(|e| translate_failure(file_path, e))?;

    let java = match wrap {
        Some(class_name) => JavaEmitter::harness(&class_name_or_stem(class_name, file_path), &stmts, config),
        None => JavaEmitter::render(&stmts),
    };
    print!("{}", java);
    Ok(ExitCode::SUCCESS)
}

/// `--wrap ""` falls back to a class name derived from the file stem.
fn class_name_or_stem(class_name: &str, file_path: &str) -> String {
    if !class_name.is_empty() {
        return class_name.to_string();
    }
    let stem = Path::new(file_path).file_stem().and_then(|s| s.to_str()).unwrap_or("Trace");
    let mut chars = stem.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_');
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => first.to_ascii_uppercase().to_string() + &chars.collect::<String>(),
        _ => "Trace".to_string(),
    }
}

/// Print the primitive vocabulary with its encodings.
pub fn list_primitives() -> CliResult<ExitCode> {
    let registry = PrimitiveRegistry::with_builtins();
    for info in primitives::PRIMITIVES {
        let aliases = if info.item.aliases.is_empty() {
            String::new()
        } else {
            format!(" (alias: {})", info.item.aliases.join(", "))
        };
        println!(
            "{:<12} {:<13} -> new {}(..), {} output, {}{}",
            info.item.canonical,
            format!("{:?}", info.kind).to_lowercase(),
            factors::as_str(info.factor),
            variables::as_str(info.output),
            info.arity.describe(),
            aliases
        );
    }
    println!();
    println!("{} names registered; `wrapped_<name>` resolves to <name>", registry.names().len());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/nonexistent/trace.js").unwrap_err();
        assert!(err.message.contains("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_syntax_failure_renders_every_error() {
        let source = "var = 1;\nvar ;";
        let errs = tracefg_syntax::parse_source(source).unwrap_err();
        let err = syntax_failure("trace.js", source, &errs);
        assert_eq!(err.message.matches("Expected variable name").count(), errs.len());
    }

    #[test]
    fn test_translate_failure_names_file_and_code() {
        let err = translate_failure("trace.js", TranslateError::undeclared("ab0"));
        assert!(err.message.starts_with("trace.js: "));
        assert!(err.message.contains("tracefg::undeclared_variable"));
    }

    #[test]
    fn test_class_name_from_stem() {
        assert_eq!(class_name_or_stem("Model", "x.js"), "Model");
        assert_eq!(class_name_or_stem("", "dir/burglary-alarm.js"), "Burglaryalarm");
        assert_eq!(class_name_or_stem("", "9lives.js"), "Trace");
    }
}
