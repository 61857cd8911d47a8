//! Wires the lexer and parser together and produces every artifact the
//! menu options and the CLI's `--output` dumps can ask for.

use std::io::Cursor;

use cpfe_lex::{buffer, Lexer, Token, TokenCategory};
use cpfe_par::first_follow::{self, FirstFollow};
use cpfe_par::grammar::{self, Production};
use cpfe_par::parse_table::{self, GrammarError, ParseTable};
use cpfe_par::tree::Tree;
use cpfe_par::Parser;
use cpfe_util::diagnostic::Handler;

use crate::config::Config;

/// The fixed grammar tables, computed once per process: the 94 productions,
/// their FIRST/FOLLOW sets, and the resulting LL(1) parse table.
pub struct GrammarTables {
    pub productions: Vec<Production>,
    pub first_follow: FirstFollow,
    pub table: ParseTable,
}

impl GrammarTables {
    pub fn build() -> Result<Self, GrammarError> {
        let productions = grammar::productions();
        let first_follow = first_follow::compute(&productions);
        let table = parse_table::build(&productions, &first_follow)?;
        Ok(Self {
            productions,
            first_follow,
            table,
        })
    }
}

/// Tokenizes `source` end to end with the default buffer size and silent
/// comment-skipping, collecting every token including the trailing EOF
/// marker.
pub fn lex_all(source: &str) -> Vec<Token> {
    lex_all_with(source, buffer::DEFAULT_BUFFER_SIZE, false)
}

/// Same as `lex_all`, but with a buffer size and comment-emission mode
/// threaded from a [`Config`].
pub fn lex_all_with_config(source: &str, config: &Config) -> Vec<Token> {
    lex_all_with(source, config.buffer_size, config.emit_comments)
}

fn lex_all_with(source: &str, buf_size: usize, emit_comments: bool) -> Vec<Token> {
    let mut lexer = Lexer::with_options(Cursor::new(source.as_bytes().to_vec()), buf_size, emit_comments)
        .expect("reading from an in-memory buffer never fails");
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let is_eof = tok.category == TokenCategory::Eof;
        tokens.push(tok);
        if is_eof {
            break;
        }
    }
    tokens
}

/// Parses `source` against `tables` with the default buffer size, reporting
/// diagnostics through `handler`. Returns the built concrete parse tree and
/// whether parsing completed without a syntax error.
pub fn parse_source(source: &str, tables: &GrammarTables, handler: &Handler) -> (Tree, bool) {
    parse_source_with(source, tables, handler, buffer::DEFAULT_BUFFER_SIZE)
}

/// Same as `parse_source`, but with a buffer size threaded from a
/// [`Config`]. Comment emission never reaches the parser — `TK_COMMENT`
/// tokens are filtered out by [`cpfe_par::Parser`] regardless of the flag.
pub fn parse_source_with_config(
    source: &str,
    tables: &GrammarTables,
    handler: &Handler,
    config: &Config,
) -> (Tree, bool) {
    parse_source_with(source, tables, handler, config.buffer_size)
}

fn parse_source_with(
    source: &str,
    tables: &GrammarTables,
    handler: &Handler,
    buf_size: usize,
) -> (Tree, bool) {
    let lexer = Lexer::with_options(Cursor::new(source.as_bytes().to_vec()), buf_size, false)
        .expect("reading from an in-memory buffer never fails");
    let parser = Parser::new(lexer, &tables.table, handler);
    let outcome = parser.parse();
    (outcome.tree, outcome.syntax_ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_tables_build_without_conflict() {
        assert!(GrammarTables::build().is_ok());
    }

    #[test]
    fn lex_all_ends_with_eof() {
        let tokens = lex_all("x+y");
        assert_eq!(tokens.last().unwrap().category, TokenCategory::Eof);
    }

    #[test]
    fn parsing_empty_input_reports_a_syntax_error() {
        let tables = GrammarTables::build().unwrap();
        let handler = Handler::new();
        let (_tree, syntax_ok) = parse_source("", &tables, &handler);
        assert!(!syntax_ok);
        assert!(handler.has_errors());
    }

    #[test]
    fn config_driven_lex_all_can_surface_tk_comment() {
        let mut config = Config::default();
        config.emit_comments = true;
        let tokens = lex_all_with_config("% hi\nx", &config);
        let kinds: Vec<_> = tokens.iter().filter_map(|t| t.kind).collect();
        assert!(kinds.contains(&cpfe_lex::TokenKind::TkComment));
    }

    #[test]
    fn config_driven_parse_ignores_comments_regardless_of_emit_flag() {
        let mut config = Config::default();
        config.emit_comments = true;
        let tables = GrammarTables::build().unwrap();
        let handler = Handler::new();
        let (_tree, syntax_ok) =
            parse_source_with_config("% hi\nx<---3;", &tables, &handler, &config);
        assert!(syntax_ok);
        assert!(!handler.has_errors());
    }
}
