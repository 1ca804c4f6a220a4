//! tpc-drv — the compiler driver.
//!
//! Wires the three pipeline stages together (spec.md §6): lex, parse,
//! quaternize, stopping early when `-l`/`-p` is given. Each input file is
//! compiled independently, so one file's error never prevents the others
//! from being attempted.

mod error;

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tpc_lex::Token;
use tpc_par::Stmt;
use tpc_quad::Quaternion;

pub use error::DrvError;

/// tpc — a compiler front-end for a minimal Pascal dialect.
///
/// Lexes, parses, and lowers each input file to quaternions, printing the
/// result of the last stage run (or whichever earlier stage `-l`/`-p`
/// stops at) to standard output or to `-o PATH`.
#[derive(Parser, Debug)]
#[command(name = "tpc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A compiler front-end for a minimal Pascal dialect", long_about = None)]
struct Cli {
    /// Stop after lexical analysis and print the token stream.
    #[arg(short = 'l', long = "lexer", conflicts_with = "parser")]
    lexer: bool,

    /// Stop after parsing and print the AST.
    #[arg(short = 'p', long = "parser", conflicts_with = "lexer")]
    parser: bool,

    /// Write output to PATH instead of standard output.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, env = "TPC_VERBOSE")]
    verbose: bool,

    /// Source files to compile. Each is compiled independently.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Which stage's output the driver should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Lexer,
    Parser,
    Quaternizer,
}

impl Stage {
    fn from_cli(cli: &Cli) -> Self {
        if cli.lexer {
            Stage::Lexer
        } else if cli.parser {
            Stage::Parser
        } else {
            Stage::Quaternizer
        }
    }
}

/// Parses arguments, initializes logging, and compiles every input file.
///
/// Returns an error as soon as any file fails any stage; the files
/// already compiled before that point still had their output written.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let stage = Stage::from_cli(&cli);
    let mut out = String::new();
    let multiple = cli.inputs.len() > 1;

    for path in &cli.inputs {
        let rendered = compile_file(path, stage)
            .with_context(|| format!("failed to compile {}", path.display()))?;
        if multiple {
            let _ = writeln!(out, "-- {} --", path.display());
        }
        out.push_str(&rendered);
        if !rendered.ends_with('\n') {
            out.push('\n');
        }
    }

    write_output(cli.output.as_deref(), &out)
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("failed to write output to {}", path.display()))?;
        }
        None => print!("{contents}"),
    }
    Ok(())
}

/// Runs one file through as many stages as `stage` calls for and renders
/// the result of the last one run.
fn compile_file(path: &Path, stage: Stage) -> std::result::Result<String, DrvError> {
    let source = fs::read_to_string(path).map_err(|source| DrvError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(file = %path.display(), bytes = source.len(), "read source file");
    let tokens = tpc_lex::lex(&source)?;
    info!(count = tokens.len(), "lexing complete");
    if stage == Stage::Lexer {
        return Ok(format_tokens(&tokens));
    }

    let stmts = tpc_par::parse(tokens)?;
    info!(count = stmts.len(), "parsing complete");
    if stage == Stage::Parser {
        return Ok(format_ast(&stmts));
    }

    let quaternions = tpc_quad::generate(&stmts)?;
    info!(count = quaternions.len(), "quaternion generation complete");
    Ok(format_quaternions(&quaternions))
}

fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:?} {:?} @ {}", t.kind, t.lexeme, t.span))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_ast(stmts: &[Stmt]) -> String {
    format!("{stmts:#?}")
}

/// Renders quaternions per spec.md §6: one per line, `(<n>) <quaternion>`
/// with a 1-based ordinal — the prefix is the driver's job, not the
/// quaternizer's (which only ever addresses positions internally).
fn format_quaternions(quaternions: &[Quaternion]) -> String {
    quaternions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("({}) {q}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_quaternions_prefixes_one_based_ordinals() {
        let quaternions = vec![
            Quaternion::UncondJump { dest: 2 },
            Quaternion::UncondJump { dest: 0 },
        ];
        let rendered = format_quaternions(&quaternions);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "(1) (j, -, -, 2)");
        assert_eq!(lines[1], "(2) (j, -, -, 0)");
    }

    #[test]
    fn stage_from_cli_defaults_to_quaternizer() {
        let cli = Cli {
            lexer: false,
            parser: false,
            output: None,
            verbose: false,
            inputs: vec![PathBuf::from("a.pas")],
        };
        assert_eq!(Stage::from_cli(&cli), Stage::Quaternizer);
    }

    #[test]
    fn stage_from_cli_honors_lexer_flag() {
        let cli = Cli {
            lexer: true,
            parser: false,
            output: None,
            verbose: false,
            inputs: vec![PathBuf::from("a.pas")],
        };
        assert_eq!(Stage::from_cli(&cli), Stage::Lexer);
    }
}
