//! Output formatters for the auxiliary dump files: token stream, FIRST/
//! FOLLOW sets, the parse table, and the parse tree itself.
//!
//! Grounded in `printToken` (lexer.c) for the token-stream layout and
//! `printParseTree` (parser.c / tree.c) for the tree column layout.

use cpfe_lex::{Token, TokenKind};

use crate::grammar::symbol_name;
use crate::tree::{Tree, TreeNode};

pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        out.push_str(&tok.printed_form());
        out.push('\n');
    }
    out
}

/// One line per parse-tree node in pre-order: lexeme, line number, token
/// name (or the non-terminal's own name on interior nodes), numeric value
/// (for `TK_NUM`/`TK_RNUM` leaves) or `----`, parent name (`$` for the
/// start symbol's root), whether it's a leaf, and its own symbol name —
/// mirroring `printParseTree`'s fixed-width columns.
pub fn format_tree(tree: &Tree) -> String {
    let mut out = String::new();
    for id in tree.preorder() {
        let node = tree.node(id);
        let lexeme = node.lexeme.as_deref().unwrap_or("----");
        let line_no = if node.is_leaf() {
            node.line_no.to_string()
        } else {
            "----".to_string()
        };
        let token_name = if node.is_terminal {
            symbol_name(node.symbol_id)
        } else {
            "----"
        };
        let value = numeric_value(node);
        let parent_name = node
            .parent
            .map(|p| symbol_name(tree.node(p).symbol_id))
            .unwrap_or("$");
        let is_leaf = if node.is_leaf() { "yes" } else { "no" };
        let own_name = symbol_name(node.symbol_id);

        out.push_str(&format!(
            "{:<15}{:<8}{:<18}{:<8}{:<20}{:<6}{}\n",
            lexeme, line_no, token_name, value, parent_name, is_leaf, own_name
        ));
    }
    out
}

/// Parses a `TK_NUM`/`TK_RNUM` leaf's lexeme into its numeric value for the
/// print column; every other node prints `----`.
fn numeric_value(node: &TreeNode) -> String {
    if !node.is_terminal {
        return "----".to_string();
    }
    let lexeme = match &node.lexeme {
        Some(l) => l,
        None => return "----".to_string(),
    };
    if node.symbol_id == TokenKind::TkNum.symbol_id() {
        lexeme
            .parse::<i64>()
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "----".to_string())
    } else if node.symbol_id == TokenKind::TkRnum.symbol_id() {
        lexeme
            .parse::<f64>()
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "----".to_string())
    } else {
        "----".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar;

    #[test]
    fn token_dump_has_one_line_per_token() {
        let toks = vec![
            Token::normal(cpfe_lex::TokenKind::TkId, "x".into(), 1),
            Token::eof(2),
        ];
        let dump = format_tokens(&toks);
        assert_eq!(dump.lines().count(), 2);
    }

    #[test]
    fn tree_dump_visits_root_first() {
        let tree = Tree::new(grammar::START_SYMBOL);
        let dump = format_tree(&tree);
        assert!(dump.contains("program"));
    }

    #[test]
    fn root_parent_column_is_dollar_sign() {
        let tree = Tree::new(grammar::START_SYMBOL);
        let dump = format_tree(&tree);
        let line = dump.lines().next().unwrap();
        let parent_col = line.split_whitespace().nth(4).unwrap_or_default();
        assert_eq!(parent_col, "$");
    }

    #[test]
    fn numeric_leaf_prints_its_parsed_value() {
        let mut tree = Tree::new(grammar::START_SYMBOL);
        let root = tree.root();
        let leaf = tree.add_child(root, cpfe_lex::TokenKind::TkNum.symbol_id(), true);
        tree.node_mut(leaf).lexeme = Some("42".to_string());
        let dump = format_tree(&tree);
        assert!(dump.lines().any(|l| l.contains("42") && l.contains("TK_NUM")));
    }
}
