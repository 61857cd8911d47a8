//! Exact-match keyword table, transcribed from `keywordTable` in `lexer.c`.

use crate::token::TokenKind;

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("else", TokenKind::TkElse),
    ("with", TokenKind::TkWith),
    ("parameters", TokenKind::TkParameters),
    ("output", TokenKind::TkOutput),
    ("int", TokenKind::TkInt),
    ("read", TokenKind::TkRead),
    ("write", TokenKind::TkWrite),
    ("return", TokenKind::TkReturn),
    ("then", TokenKind::TkThen),
    ("real", TokenKind::TkReal),
    ("endwhile", TokenKind::TkEndwhile),
    ("if", TokenKind::TkIf),
    ("type", TokenKind::TkType),
    ("_main", TokenKind::TkMain),
    ("global", TokenKind::TkGlobal),
    ("endif", TokenKind::TkEndif),
    ("endunion", TokenKind::TkEndunion),
    ("definetype", TokenKind::TkDefinetype),
    ("as", TokenKind::TkAs),
    ("call", TokenKind::TkCall),
    ("record", TokenKind::TkRecord),
    ("endrecord", TokenKind::TkEndrecord),
    ("parameter", TokenKind::TkParameter),
    ("end", TokenKind::TkEnd),
    ("while", TokenKind::TkWhile),
    ("union", TokenKind::TkUnion),
    ("list", TokenKind::TkList),
    ("input", TokenKind::TkInput),
];

/// Looks up `lex` in the fixed keyword table; `None` on a miss (caller
/// decides the default identifier kind from lexing context).
pub fn lookup(lex: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(kw, _)| *kw == lex)
        .map(|(_, kind)| *kind)
}
