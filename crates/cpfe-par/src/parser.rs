//! Stack-driven LL(1) predictive parser.
//!
//! Grounded in the driver loop of `parser.c` (`parseInputSourceCode`) and
//! the stack/tree plumbing in `stack.c`/`tree.c`, generalized from raw
//! pointers to the arena in [`crate::tree`]. Panic-mode recovery follows
//! the textbook table-driven scheme: SYNC cells pop the offending
//! non-terminal as if it derived epsilon, ERROR cells discard the current
//! input token and retry.

use std::io::Read;

use cpfe_lex::{Lexer, Token, TokenCategory, TokenKind};
use cpfe_util::diagnostic::{DiagnosticCode, Handler};
use cpfe_util::Span;

use crate::grammar::{self, SymbolId, END_MARKER};
use crate::parse_table::{Cell, ParseTable};
use crate::tree::{NodeId, Tree};

enum StackEntry {
    Symbol(SymbolId, NodeId),
    EndMarker,
}

pub struct ParseOutcome {
    pub tree: Tree,
    pub syntax_ok: bool,
}

pub struct Parser<'a, R> {
    lexer: Lexer<R>,
    table: &'a ParseTable,
    handler: &'a Handler,
    current: Token,
    last_error_line: Option<u32>,
}

impl<'a, R: Read> Parser<'a, R> {
    pub fn new(mut lexer: Lexer<R>, table: &'a ParseTable, handler: &'a Handler) -> Self {
        let current = Self::next_significant(&mut lexer, handler, &mut None);
        Self {
            lexer,
            table,
            handler,
            current,
            last_error_line: None,
        }
    }

    /// Pulls the next token from the lexer, reporting lexical errors
    /// (over-length identifiers, unrecognized patterns) as diagnostics
    /// without letting them reach the parser's terminal-matching logic.
    /// Also filters out `TK_COMMENT`, which has no production in the
    /// grammar — comment visibility is a token-stream-dump concern only.
    fn next_significant(
        lexer: &mut Lexer<R>,
        handler: &Handler,
        last_error_line: &mut Option<u32>,
    ) -> Token {
        loop {
            let tok = lexer.next_token();
            match tok.category {
                TokenCategory::LengthExceeded | TokenCategory::UnknownPattern => {
                    Self::report_lexical(handler, &tok, last_error_line);
                    continue;
                }
                TokenCategory::Normal if tok.kind == Some(TokenKind::TkComment) => {
                    continue;
                }
                _ => return tok,
            }
        }
    }

    fn report_lexical(handler: &Handler, tok: &Token, last_error_line: &mut Option<u32>) {
        if *last_error_line == Some(tok.line_no) {
            return;
        }
        *last_error_line = Some(tok.line_no);
        handler
            .build_error(Span::new(tok.line_no, 0), tok.printed_form())
            .code(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN)
            .emit(handler);
    }

    fn advance(&mut self) {
        self.current = Self::next_significant(&mut self.lexer, self.handler, &mut self.last_error_line);
    }

    /// Runs the parse to completion, returning the built tree and whether
    /// the input was free of syntax errors.
    pub fn parse(mut self) -> ParseOutcome {
        let mut tree = Tree::new(grammar::START_SYMBOL);
        let mut stack = vec![
            StackEntry::EndMarker,
            StackEntry::Symbol(grammar::START_SYMBOL, tree.root()),
        ];
        let productions = grammar::productions();
        let mut syntax_ok = true;

        while let Some(entry) = stack.pop() {
            match entry {
                StackEntry::EndMarker => {
                    if self.current.kind.map(|k| k.symbol_id()) != Some(END_MARKER) {
                        self.emit_syntax_error("expected end of input");
                        syntax_ok = false;
                    }
                    break;
                }
                StackEntry::Symbol(sym, node) => {
                    if grammar::is_terminal(sym) {
                        self.handle_terminal(sym, node, &mut tree, &mut syntax_ok);
                    } else {
                        self.handle_nonterminal(sym, node, &mut tree, &productions, &mut stack, &mut syntax_ok);
                    }
                }
            }
        }

        ParseOutcome { tree, syntax_ok }
    }

    fn current_symbol(&self) -> SymbolId {
        self.current
            .kind
            .map(|k| k.symbol_id())
            .unwrap_or(END_MARKER)
    }

    fn handle_terminal(&mut self, sym: SymbolId, node: NodeId, tree: &mut Tree, syntax_ok: &mut bool) {
        if self.current_symbol() == sym {
            let n = tree.node_mut(node);
            n.lexeme = Some(self.current.lexeme.clone());
            n.line_no = self.current.line_no;
            self.advance();
        } else {
            self.emit_syntax_error(&format!(
                "expected {}, found {}",
                grammar::symbol_name(sym),
                self.current.printed_form()
            ));
            *syntax_ok = false;
            // the expected terminal never appeared; drop it from the stack
            // and retry matching the same input token against whatever
            // follows.
        }
    }

    fn handle_nonterminal(
        &mut self,
        sym: SymbolId,
        node: NodeId,
        tree: &mut Tree,
        productions: &[crate::grammar::Production],
        stack: &mut Vec<StackEntry>,
        syntax_ok: &mut bool,
    ) {
        match self.table.get(sym, self.current_symbol()) {
            Cell::Production(idx) => {
                let prod = &productions[idx];
                let mut children = Vec::with_capacity(prod.rhs.len());
                for &rhs_sym in &prod.rhs {
                    let is_term = grammar::is_terminal(rhs_sym) || rhs_sym == grammar::EPSILON;
                    let child = tree.add_child(node, rhs_sym, is_term);
                    if rhs_sym == grammar::EPSILON {
                        tree.node_mut(child).lexeme = Some("eps".to_string());
                    }
                    children.push(child);
                }
                for (&rhs_sym, child) in prod.rhs.iter().zip(children.iter()).rev() {
                    if rhs_sym != grammar::EPSILON {
                        stack.push(StackEntry::Symbol(rhs_sym, *child));
                    }
                }
            }
            Cell::Sync => {
                self.emit_syntax_error(&format!(
                    "missing {}",
                    grammar::symbol_name(sym)
                ));
                *syntax_ok = false;
                // treated as if `sym` derived epsilon: do not consume input
            }
            Cell::Error => {
                self.emit_syntax_error(&format!(
                    "unexpected {} while expecting {}",
                    self.current.printed_form(),
                    grammar::symbol_name(sym)
                ));
                *syntax_ok = false;
                self.advance();
                stack.push(StackEntry::Symbol(sym, node));
            }
        }
    }

    fn emit_syntax_error(&mut self, message: &str) {
        let line = self.current.line_no;
        if self.last_error_line == Some(line) {
            return;
        }
        self.last_error_line = Some(line);
        self.handler
            .build_error(Span::new(line, 0), message.to_string())
            .code(DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN)
            .emit(self.handler);
    }
}
