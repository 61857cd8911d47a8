//! Interactive 0–4 menu, grounded in the `scanf`-driven loop in `driver.c`:
//! 0 exits, 1 strips comments, 2 prints the token stream, 3 parses, and 4
//! parses while reporting lex+parse wall-clock time. Options 1 and 3 write
//! their result to a caller-supplied output path, mirroring `driver.c:48`'s
//! `removeComments(argv[1], argv[2])` and `parser.c`'s
//! `parser_main(testfile, outfile)` / `printParseTree(root, outfile)`.

use std::io::{BufRead, Write};
use std::time::Instant;

use cpfe_lex::lexer::strip_comments;
use cpfe_par::format::format_tree;

use crate::error::{CpfeError, Result};
use crate::pipeline::{self, GrammarTables};

pub fn run_menu<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "Enter the path to the source file:")?;
    let mut path_line = String::new();
    input.read_line(&mut path_line)?;
    let path = path_line.trim();
    let source = std::fs::read_to_string(path)
        .map_err(|e| CpfeError::FileOperation(format!("{path}: {e}")))?;

    writeln!(output, "Enter the path to the output file:")?;
    let mut out_path_line = String::new();
    input.read_line(&mut out_path_line)?;
    let out_path = out_path_line.trim().to_string();

    let tables = GrammarTables::build().map_err(|e| CpfeError::Other(e.to_string()))?;

    loop {
        writeln!(output, "\n0: Exit")?;
        writeln!(output, "1: Remove comments")?;
        writeln!(output, "2: Print the token list")?;
        writeln!(output, "3: Parse the input")?;
        writeln!(output, "4: Parse the input and report CPU time")?;
        write!(output, "> ")?;
        output.flush()?;

        let mut choice_line = String::new();
        if input.read_line(&mut choice_line)? == 0 {
            break;
        }
        let choice: i32 = choice_line.trim().parse().unwrap_or(-1);

        match choice {
            0 => break,
            1 => {
                write_output_file(&out_path, &strip_comments(&source))?;
                writeln!(output, "Stripped source written to {out_path}")?;
            }
            2 => {
                let tokens = pipeline::lex_all(&source);
                for tok in &tokens {
                    writeln!(output, "{}", tok.printed_form())?;
                }
            }
            3 => {
                let handler = cpfe_util::diagnostic::Handler::new();
                let (tree, syntax_ok) = pipeline::parse_source(&source, &tables, &handler);
                write_output_file(&out_path, &format_tree(&tree))?;
                report_parse_result(&mut output, syntax_ok, handler.error_count())?;
            }
            4 => {
                let start = Instant::now();
                let handler = cpfe_util::diagnostic::Handler::new();
                let (tree, syntax_ok) = pipeline::parse_source(&source, &tables, &handler);
                let elapsed = start.elapsed().as_secs_f64();
                write_output_file(&out_path, &format_tree(&tree))?;
                report_parse_result(&mut output, syntax_ok, handler.error_count())?;
                writeln!(output, "Total time for lexing and parsing: {elapsed:.6}s")?;
            }
            _ => break,
        }
    }

    Ok(())
}

fn write_output_file(path: &str, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| CpfeError::FileOperation(format!("{path}: {e}")))
}

fn report_parse_result<W: Write>(output: &mut W, syntax_ok: bool, error_count: usize) -> Result<()> {
    if syntax_ok {
        writeln!(output, "Input program is syntactically correct")?;
    } else {
        writeln!(output, "Input program has {error_count} syntax error(s)")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn exiting_immediately_requires_only_two_paths_and_a_zero() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prog.txt");
        std::fs::write(&path, "x<---3;").unwrap();
        let out_path = dir.path().join("prog.out");

        let script = format!("{}\n{}\n0\n", path.display(), out_path.display());
        let mut out = Vec::new();
        let result = run_menu(Cursor::new(script), &mut out);
        assert!(result.is_ok());
    }

    #[test]
    fn missing_file_is_reported() {
        let mut out = Vec::new();
        let result = run_menu(Cursor::new("/nonexistent/file.txt\nout.txt\n0\n"), &mut out);
        assert!(result.is_err());
    }

    #[test]
    fn option_one_writes_stripped_source_to_the_output_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prog.txt");
        std::fs::write(&path, "x % a comment\n<---3;").unwrap();
        let out_path = dir.path().join("stripped.txt");

        let script = format!("{}\n{}\n1\n0\n", path.display(), out_path.display());
        let mut out = Vec::new();
        run_menu(Cursor::new(script), &mut out).unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(written, "x \n<---3;");
    }

    #[test]
    fn option_three_writes_the_parse_tree_to_the_output_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prog.txt");
        std::fs::write(&path, "x<---3;").unwrap();
        let out_path = dir.path().join("tree.txt");

        let script = format!("{}\n{}\n3\n0\n", path.display(), out_path.display());
        let mut out = Vec::new();
        run_menu(Cursor::new(script), &mut out).unwrap();

        let written = std::fs::read_to_string(&out_path).unwrap();
        assert!(!written.is_empty());
    }
}
