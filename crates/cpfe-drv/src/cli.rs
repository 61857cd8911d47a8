//! Command-line surface.
//!
//! Grounded in `faxt::main`'s `Cli` (global `--verbose`/`--config`/
//! `--no-color`, `env` fallbacks for each), generalized to this driver's
//! single-file pipeline instead of faxt's init/build/convert subcommands.
//! With no positional `input`, [`crate::interactive::run_menu`] takes over
//! and reproduces the 0–4 menu loop from the original command-line driver.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cpfe")]
#[command(author = "cpfe contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexes and parses a source file, reporting diagnostics", long_about = None)]
pub struct Cli {
    /// Source file to compile. Omit to enter the interactive menu.
    pub input: Option<PathBuf>,

    /// Directory for auxiliary dump files (token stream, parse tree, etc).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "CPFE_VERBOSE")]
    pub verbose: bool,

    /// Path to a configuration file.
    #[arg(short, long, global = true, env = "CPFE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored log output.
    #[arg(long, global = true, env = "CPFE_NO_COLOR")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_input_path() {
        let cli = Cli::parse_from(["cpfe", "prog.txt"]);
        assert_eq!(cli.input, Some(PathBuf::from("prog.txt")));
    }

    #[test]
    fn input_is_optional() {
        let cli = Cli::parse_from(["cpfe"]);
        assert_eq!(cli.input, None);
    }

    #[test]
    fn parses_verbose_and_output() {
        let cli = Cli::parse_from(["cpfe", "--verbose", "prog.txt", "--output", "out"]);
        assert!(cli.verbose);
        assert_eq!(cli.output, Some(PathBuf::from("out")));
    }

    #[test]
    fn parses_global_config_path() {
        let cli = Cli::parse_from(["cpfe", "--config", "cpfe.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("cpfe.toml")));
    }
}
