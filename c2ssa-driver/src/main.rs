//! C expression to SSA translator driver
//!
//! Reads a file of `;`-separated C expressions, translates them into one
//! SSA function and prints the result.

use anyhow::{Context, Result};
use c2ssa_frontend::{Frontend, TranslatorConfig};
use clap::{Parser, ValueEnum};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "c2ssa")]
#[command(about = "Translate C expressions to SSA IR")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input file of `;`-separated expressions
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Emit::Ir)]
    emit: Emit,

    /// Name of a known function (repeatable)
    #[arg(long = "function", value_name = "NAME")]
    functions: Vec<String>,

    /// Name of a typedef, so casts to it parse (repeatable)
    #[arg(long = "typedef", value_name = "NAME")]
    typedefs: Vec<String>,

    /// Name of the host function
    #[arg(long, default_value = "main")]
    name: String,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log translation progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Textual IR listing
    Ir,
    /// The function as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .target(env_logger::Target::Stderr)
            .init();
    }

    let config = TranslatorConfig {
        filename: cli.input.display().to_string(),
        function_name: cli.name.clone(),
        ..TranslatorConfig::default()
    }
    .with_functions(cli.functions.iter().cloned())
    .with_typedefs(cli.typedefs.iter().cloned());

    let output = translate_file(&cli.input, &config, cli.emit)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("writing {}", path.display()))?;
            info!("Output written to {}", path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

/// Translate `input` and render the function. Diagnostics go to stderr and
/// never fail the run.
fn translate_file(input: &Path, config: &TranslatorConfig, emit: Emit) -> Result<String> {
    let source = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let translation = Frontend::translate_source(&source, config)
        .with_context(|| format!("translating {}", input.display()))?;

    for diagnostic in translation.reporter.diagnostics() {
        eprintln!("{}", diagnostic);
    }
    eprintln!("{}", translation.reporter.summary());

    match emit {
        Emit::Ir => Ok(translation.function().to_string()),
        Emit::Json => Ok(serde_json::to_string_pretty(translation.function())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(source: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(source.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "c2ssa", "in.c", "--emit", "json", "--function", "f", "--function", "g", "--typedef", "size_t",
        ])
        .unwrap();
        assert_eq!(cli.emit, Emit::Json);
        assert_eq!(cli.functions, vec!["f", "g"]);
        assert_eq!(cli.typedefs, vec!["size_t"]);
        assert_eq!(cli.name, "main");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_translate_file_to_ir() {
        let input = write_input("x = 1; x + 2;");
        let output = translate_file(input.path(), &TranslatorConfig::default(), Emit::Ir).unwrap();
        assert!(output.starts_with("function main {"));
        assert!(output.contains("add %0, %1"));
    }

    #[test]
    fn test_translate_file_to_json() {
        let input = write_input("y = 3");
        let output = translate_file(input.path(), &TranslatorConfig::default(), Emit::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["name"], "main");
    }

    #[test]
    fn test_diagnostics_do_not_fail_the_run() {
        let input = write_input("unknown + 1");
        assert!(translate_file(input.path(), &TranslatorConfig::default(), Emit::Ir).is_ok());
    }

    #[test]
    fn test_parse_errors_fail_the_run() {
        let input = write_input("x = ;");
        assert!(translate_file(input.path(), &TranslatorConfig::default(), Emit::Ir).is_err());
    }

    #[test]
    fn test_missing_input_fails() {
        let path = Path::new("/nonexistent/c2ssa-input.c");
        assert!(translate_file(path, &TranslatorConfig::default(), Emit::Ir).is_err());
    }
}
