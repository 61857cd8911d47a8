//! Driver binary: ties the lexer and parser crates together behind a CLI,
//! mirroring `faxt::main`'s shape (clap + tracing + serde/toml config) while
//! keeping the interactive menu the original command-line tool offered.

pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod pipeline;

use std::io;
use std::path::Path;

use clap::Parser as _;
use cpfe_util::diagnostic::Handler;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use cli::Cli;
pub use config::Config;
pub use error::{CpfeError, Result};
pub use pipeline::GrammarTables;

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color)?;
    let config = load_config(cli.config.as_deref())?;

    match &cli.input {
        Some(path) => run_file(path, &cli, &config),
        None => {
            let stdin = io::stdin();
            interactive::run_menu(stdin.lock(), io::stdout())
        }
    }
}

fn run_file(path: &Path, cli: &cli::Cli, config: &Config) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| CpfeError::FileOperation(format!("{}: {e}", path.display())))?;

    let tables = GrammarTables::build().map_err(|e| CpfeError::Other(e.to_string()))?;
    let handler = Handler::new();
    let (tree, syntax_ok) = pipeline::parse_source_with_config(&source, &tables, &handler, config);

    let out_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output_dir.clone().into());
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("out");

    if config.dump.tokens {
        let tokens = pipeline::lex_all_with_config(&source, config);
        write_aux(&out_dir, stem, "tokens.txt", &cpfe_par::format::format_tokens(&tokens))?;
    }
    if config.dump.first_follow {
        write_aux(
            &out_dir,
            stem,
            "first.txt",
            &cpfe_par::first_follow::format_set_dump(&tables.first_follow.first),
        )?;
        write_aux(
            &out_dir,
            stem,
            "follow.txt",
            &cpfe_par::first_follow::format_set_dump(&tables.first_follow.follow),
        )?;
    }
    if config.dump.parse_table {
        write_aux(&out_dir, stem, "parse_table.txt", &tables.table.format_dump())?;
    }
    if config.dump.tree {
        write_aux(&out_dir, stem, "tree.txt", &cpfe_par::format::format_tree(&tree))?;
    }

    for diag in handler.diagnostics() {
        eprintln!("{}: {} ({})", diag.level, diag.message, diag.span);
    }

    if syntax_ok && !handler.has_errors() {
        println!("{}: syntactically correct", path.display());
        Ok(())
    } else {
        Err(CpfeError::CompilationFailed(handler.error_count()))
    }
}

fn write_aux(dir: &Path, stem: &str, suffix: &str, content: &str) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{stem}_{suffix}"));
    std::fs::write(path, content)?;
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    // Repeated calls (e.g. across tests in the same process) fail this with
    // "global default subscriber already set", which isn't fatal here.
    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
    Ok(())
}
