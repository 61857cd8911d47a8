//! Token kinds and the `Token` value itself.
//!
//! The kind set and printed names match the fixed external token alphabet;
//! order here matches `lexer.h`'s `TokenType` enum so that table-driven
//! code reads the same way the original does.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    TkMinus,
    TkIf,
    TkDiv,
    TkCall,
    TkWith,
    TkMain,
    TkEndwhile,
    TkType,
    TkElse,
    TkInt,
    TkNot,
    TkGt,
    TkParameters,
    TkThen,
    TkSem,
    TkReturn,
    TkId,
    TkDefinetype,
    TkOp,
    TkWhile,
    TkOr,
    TkFunid,
    TkComma,
    TkInput,
    TkUnion,
    TkRecord,
    TkDot,
    TkRuid,
    TkWrite,
    TkEndunion,
    TkFieldid,
    TkList,
    TkAnd,
    TkCl,
    TkAssignop,
    TkOutput,
    TkEq,
    TkEndif,
    TkGlobal,
    TkAs,
    TkColon,
    TkNe,
    TkGe,
    TkLe,
    TkSqr,
    TkEnd,
    TkPlus,
    TkEndrecord,
    TkRead,
    TkLt,
    TkSql,
    TkNum,
    TkRnum,
    TkParameter,
    TkMul,
    TkReal,
    TkComment,
}

impl TokenKind {
    /// The exact printed name used in token and parse-tree dumps.
    pub const fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            TkMinus => "TK_MINUS",
            TkIf => "TK_IF",
            TkDiv => "TK_DIV",
            TkCall => "TK_CALL",
            TkWith => "TK_WITH",
            TkMain => "TK_MAIN",
            TkEndwhile => "TK_ENDWHILE",
            TkType => "TK_TYPE",
            TkElse => "TK_ELSE",
            TkInt => "TK_INT",
            TkNot => "TK_NOT",
            TkGt => "TK_GT",
            TkParameters => "TK_PARAMETERS",
            TkThen => "TK_THEN",
            TkSem => "TK_SEM",
            TkReturn => "TK_RETURN",
            TkId => "TK_ID",
            TkDefinetype => "TK_DEFINETYPE",
            TkOp => "TK_OP",
            TkWhile => "TK_WHILE",
            TkOr => "TK_OR",
            TkFunid => "TK_FUNID",
            TkComma => "TK_COMMA",
            TkInput => "TK_INPUT",
            TkUnion => "TK_UNION",
            TkRecord => "TK_RECORD",
            TkDot => "TK_DOT",
            TkRuid => "TK_RUID",
            TkWrite => "TK_WRITE",
            TkEndunion => "TK_ENDUNION",
            TkFieldid => "TK_FIELDID",
            TkList => "TK_LIST",
            TkAnd => "TK_AND",
            TkCl => "TK_CL",
            TkAssignop => "TK_ASSIGNOP",
            TkOutput => "TK_OUTPUT",
            TkEq => "TK_EQ",
            TkEndif => "TK_ENDIF",
            TkGlobal => "TK_GLOBAL",
            TkAs => "TK_AS",
            TkColon => "TK_COLON",
            TkNe => "TK_NE",
            TkGe => "TK_GE",
            TkLe => "TK_LE",
            TkSqr => "TK_SQR",
            TkEnd => "TK_END",
            TkPlus => "TK_PLUS",
            TkEndrecord => "TK_ENDRECORD",
            TkRead => "TK_READ",
            TkLt => "TK_LT",
            TkSql => "TK_SQL",
            TkNum => "TK_NUM",
            TkRnum => "TK_RNUM",
            TkParameter => "TK_PARAMETER",
            TkMul => "TK_MUL",
            TkReal => "TK_REAL",
            TkComment => "TK_COMMENT",
        }
    }

    /// Symbol ID in the grammar's single namespace (1..=56), matching
    /// `parserDef.h`'s terminal ordering (see `cpfe_par::grammar`).
    pub const fn symbol_id(self) -> u16 {
        use TokenKind::*;
        match self {
            TkMain => 1,
            TkEnd => 2,
            TkFunid => 3,
            TkSem => 4,
            TkInput => 5,
            TkParameter => 6,
            TkList => 7,
            TkSql => 8,
            TkSqr => 9,
            TkOutput => 10,
            TkInt => 11,
            TkReal => 12,
            TkRuid => 13,
            TkComma => 14,
            TkRecord => 15,
            TkEndrecord => 16,
            TkUnion => 17,
            TkEndunion => 18,
            TkType => 19,
            TkColon => 20,
            TkFieldid => 21,
            TkGlobal => 22,
            TkAssignop => 23,
            TkWhile => 24,
            TkOp => 25,
            TkCl => 26,
            TkIf => 27,
            TkThen => 28,
            TkElse => 29,
            TkEndif => 30,
            TkRead => 31,
            TkWrite => 32,
            TkPlus => 33,
            TkMinus => 34,
            TkMul => 35,
            TkDiv => 36,
            TkNot => 37,
            TkAnd => 38,
            TkOr => 39,
            TkLt => 40,
            TkLe => 41,
            TkEq => 42,
            TkGt => 43,
            TkGe => 44,
            TkNe => 45,
            TkReturn => 46,
            TkDefinetype => 47,
            TkAs => 48,
            TkDot => 49,
            TkCall => 50,
            TkWith => 51,
            TkParameters => 52,
            TkNum => 53,
            TkRnum => 54,
            TkEndwhile => 55,
            TkId => 56,
            TkComment => 0, // never reaches the parser
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category tag carried by every token produced by `next_token`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenCategory {
    Normal,
    LengthExceeded,
    UnknownPattern,
    Eof,
    /// Internal control signal (blank lines, inter-token whitespace,
    /// comments when not in `TK_COMMENT` mode); never reaches the consumer.
    WhitespaceSkip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: Option<TokenKind>,
    pub lexeme: String,
    pub line_no: u32,
    pub category: TokenCategory,
}

impl Token {
    pub fn eof(line_no: u32) -> Self {
        Self {
            kind: None,
            lexeme: String::new(),
            line_no,
            category: TokenCategory::Eof,
        }
    }

    pub fn whitespace_skip(line_no: u32) -> Self {
        Self {
            kind: None,
            lexeme: String::new(),
            line_no,
            category: TokenCategory::WhitespaceSkip,
        }
    }

    pub fn unknown_pattern(lexeme: String, line_no: u32) -> Self {
        Self {
            kind: None,
            lexeme,
            line_no,
            category: TokenCategory::UnknownPattern,
        }
    }

    pub fn length_exceeded(kind: TokenKind, lexeme: String, line_no: u32) -> Self {
        Self {
            kind: Some(kind),
            lexeme,
            line_no,
            category: TokenCategory::LengthExceeded,
        }
    }

    pub fn normal(kind: TokenKind, lexeme: String, line_no: u32) -> Self {
        Self {
            kind: Some(kind),
            lexeme,
            line_no,
            category: TokenCategory::Normal,
        }
    }

    /// `Line no. L  Lexeme X  Token K`, or the length-exceeded/unknown-
    /// pattern error forms.
    pub fn printed_form(&self) -> String {
        match self.category {
            TokenCategory::LengthExceeded => {
                let (kind_word, max) = match self.kind {
                    Some(TokenKind::TkFunid) => ("Function Identifier", 30),
                    _ => ("Variable Identifier", 20),
                };
                format!(
                    "Line no. {}\t Error: {} is longer than the prescribed length of {} characters",
                    self.line_no, kind_word, max
                )
            }
            TokenCategory::UnknownPattern => {
                format!(
                    "Line no. {}\t Error: Unknown pattern <{}> ",
                    self.line_no, self.lexeme
                )
            }
            _ => format!(
                "Line no. {}\t Lexeme {:<10}\t Token {}",
                self.line_no,
                self.lexeme,
                self.kind.map(|k| k.name()).unwrap_or("UNKNOWN_TOKEN")
            ),
        }
    }
}
