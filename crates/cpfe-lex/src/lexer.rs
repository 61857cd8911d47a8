//! Driver that turns a `TwinBuffer` + the DFA tables into a token stream.
//!
//! Grounded in `getNextToken`/`doStateActions`/`token_fun`/`id_fun` in
//! `lexer.c`. The original recurses one character at a time through
//! `getNextToken`; this restructures that recursion into an explicit loop
//! while keeping every state-action mapping identical.

use std::io::Read;

use crate::buffer::{self, TwinBuffer};
use crate::dfa::{self, RetractClass};
use crate::keyword;
use crate::token::{Token, TokenKind};

pub const FUNMAX: usize = 30;
pub const VARMAX: usize = 20;

pub struct Lexer<R> {
    buf: TwinBuffer<R>,
    line_no: u32,
    emit_comments: bool,
}

impl<R: Read> Lexer<R> {
    pub fn new(source: R) -> std::io::Result<Self> {
        Self::with_options(source, buffer::DEFAULT_BUFFER_SIZE, false)
    }

    /// Same as `new`, but with an explicit buffer capacity and a choice of
    /// whether a terminated comment surfaces as `TK_COMMENT` or is silently
    /// folded into whitespace-skip — both threaded from `Config`.
    pub fn with_options(source: R, buf_size: usize, emit_comments: bool) -> std::io::Result<Self> {
        Ok(Self {
            buf: TwinBuffer::with_capacity(source, buf_size)?,
            line_no: 1,
            emit_comments,
        })
    }

    pub fn line_no(&self) -> u32 {
        self.line_no
    }

    /// Produces the next token, including whitespace-skip, comment-skip,
    /// and error-category tokens. Returns `Token::eof` once the input is
    /// exhausted. Never panics on malformed input — lexical errors are
    /// reported as tokens, not as `Err`.
    pub fn next_token(&mut self) -> Token {
        loop {
            let start_line = self.line_no;
            let mut state = dfa::START_STATE;
            let mut lexeme = String::new();
            let mut pos = 0usize;

            loop {
                let ch = self.buf.next_char();
                let next = dfa::next_state(ch, state);

                if next == dfa::TRAP_STATE {
                    if pos >= 1 {
                        self.buf.retract(1);
                    } else if let Some(c) = ch {
                        lexeme.push(c as char);
                    }
                    return Token::unknown_pattern(lexeme, start_line);
                }

                let detail = dfa::state_details(next);

                // `getStateDetails` (lexer.c) performs the unread itself as a
                // side effect of classifying a state as retract-once/-twice;
                // `dfa::state_details` stays pure, so the driver does it here.
                match detail {
                    RetractClass::FinalRetractOnce => self.buf.retract(1),
                    RetractClass::FinalRetractTwice => self.buf.retract(2),
                    _ => {}
                }

                let skip_append = state == 1 && pos >= 1;
                if !skip_append
                    && !matches!(detail, RetractClass::FinalRetractOnce | RetractClass::FinalRetractTwice)
                {
                    if let Some(c) = ch {
                        lexeme.push(c as char);
                        pos += 1;
                    }
                }

                if detail == RetractClass::FinalRetractTwice {
                    lexeme.pop();
                }

                if detail != RetractClass::NonFinal {
                    if let Some(tok) = self.finish(next, &mut lexeme, pos, start_line) {
                        if tok.category == crate::token::TokenCategory::WhitespaceSkip {
                            break; // restart the outer loop for the next token
                        }
                        return tok;
                    }
                    break;
                }

                state = next;
            }
        }
    }

    /// `doStateActions` plus the length-exceeded check and the
    /// comment-line-number bump. Returns `None` to signal "restart
    /// scanning" (whitespace / comment / blank line). State 2 is the only
    /// comment-terminal state (entered via `%`, state 1, to newline); states
    /// 9 and 28 are plain blank-line and space/tab-run whitespace and never
    /// carry comment text, so they always stay `WhitespaceSkip`.
    fn finish(&mut self, state: i32, lexeme: &mut String, pos: usize, line_no: u32) -> Option<Token> {
        match state {
            2 => {
                self.line_no += 1;
                if self.emit_comments {
                    Some(self.emit(TokenKind::TkComment, lexeme, pos, line_no))
                } else {
                    Some(Token::whitespace_skip(line_no))
                }
            }
            9 => {
                self.line_no += 1;
                Some(Token::whitespace_skip(line_no))
            }
            3 => Some(Token::eof(line_no)),
            28 => Some(Token::whitespace_skip(line_no)),
            4 => Some(self.emit(TokenKind::TkMul, lexeme, pos, line_no)),
            7 => Some(self.emit(TokenKind::TkAnd, lexeme, pos, line_no)),
            8 => Some(self.emit(TokenKind::TkNot, lexeme, pos, line_no)),
            12 => Some(self.emit(TokenKind::TkOr, lexeme, pos, line_no)),
            13 => Some(self.emit(TokenKind::TkSql, lexeme, pos, line_no)),
            14 => Some(self.emit(TokenKind::TkMinus, lexeme, pos, line_no)),
            15 => Some(self.emit(TokenKind::TkPlus, lexeme, pos, line_no)),
            16 => Some(self.emit(TokenKind::TkOp, lexeme, pos, line_no)),
            18 => Some(self.emit(TokenKind::TkEq, lexeme, pos, line_no)),
            19 => Some(self.emit(TokenKind::TkCl, lexeme, pos, line_no)),
            20 => Some(self.emit(TokenKind::TkSem, lexeme, pos, line_no)),
            21 => Some(self.emit(TokenKind::TkColon, lexeme, pos, line_no)),
            23 => Some(self.emit(TokenKind::TkNe, lexeme, pos, line_no)),
            24 => Some(self.emit(TokenKind::TkDiv, lexeme, pos, line_no)),
            25 => Some(self.emit(TokenKind::TkDot, lexeme, pos, line_no)),
            26 => Some(self.emit(TokenKind::TkSqr, lexeme, pos, line_no)),
            64 => Some(self.emit(TokenKind::TkComma, lexeme, pos, line_no)),
            36 => Some(self.emit(TokenKind::TkRnum, lexeme, pos, line_no)),
            55 => Some(self.emit(TokenKind::TkGe, lexeme, pos, line_no)),
            56 => Some(self.emit(TokenKind::TkGt, lexeme, pos, line_no)),
            58 => Some(self.emit(TokenKind::TkLe, lexeme, pos, line_no)),
            61 => Some(self.emit(TokenKind::TkAssignop, lexeme, pos, line_no)),
            37 => Some(self.emit(TokenKind::TkRnum, lexeme, pos, line_no)),
            38 => Some(self.emit(TokenKind::TkNum, lexeme, pos, line_no)),
            39 => Some(self.emit(TokenKind::TkNum, lexeme, pos, line_no)),
            42 => Some(self.emit(TokenKind::TkRuid, lexeme, pos, line_no)),
            52 => Some(self.emit(TokenKind::TkId, lexeme, pos, line_no)),
            53 => Some(self.emit(TokenKind::TkFieldid, lexeme, pos, line_no)),
            62 => Some(self.emit(TokenKind::TkLt, lexeme, pos, line_no)),
            63 => Some(self.emit(TokenKind::TkLt, lexeme, pos, line_no)),
            46 => Some(self.emit(id_fun(lexeme), lexeme, pos, line_no)),
            49 => Some(self.emit(token_fun(lexeme), lexeme, pos, line_no)),
            _ => Some(Token::unknown_pattern(std::mem::take(lexeme), line_no)),
        }
    }

    fn emit(&self, kind: TokenKind, lexeme: &mut String, pos: usize, line_no: u32) -> Token {
        let lexeme = std::mem::take(lexeme);
        let over_length = (kind == TokenKind::TkFunid && pos >= FUNMAX)
            || (kind == TokenKind::TkId && pos >= VARMAX);
        if over_length {
            Token::length_exceeded(kind, lexeme, line_no)
        } else {
            Token::normal(kind, lexeme, line_no)
        }
    }
}

/// `token_fun`: keyword lookup, defaulting an unrecognized word to
/// `TK_FIELDID` rather than the generic `TK_ID`.
fn token_fun(lexeme: &str) -> TokenKind {
    match keyword::lookup(lexeme) {
        Some(TokenKind::TkId) | None => TokenKind::TkFieldid,
        Some(k) => k,
    }
}

/// `id_fun`: keyword lookup, defaulting an unrecognized word to
/// `TK_FUNID` (used after leading `_`/record-field DFA paths).
fn id_fun(lexeme: &str) -> TokenKind {
    match keyword::lookup(lexeme) {
        Some(TokenKind::TkId) | None => TokenKind::TkFunid,
        Some(k) => k,
    }
}

/// `removeComments`: strips `%`-to-end-of-line comments, keeping the
/// newline itself so line numbers in any later re-lex stay aligned.
/// Idempotent: running it twice yields the same output as running it once.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut in_comment = false;
    for ch in source.chars() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
                out.push(ch);
            }
        } else if ch == '%' {
            in_comment = true;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lex_all(src: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(Cursor::new(src.as_bytes().to_vec())).unwrap();
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            let is_eof = tok.category == crate::token::TokenCategory::Eof;
            out.push(tok);
            if is_eof {
                break;
            }
        }
        out
    }

    #[test]
    fn lexes_plus_and_number() {
        let toks = lex_all("3+4");
        let kinds: Vec<_> = toks.iter().filter_map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::TkNum, TokenKind::TkPlus, TokenKind::TkNum]
        );
    }

    #[test]
    fn keyword_wins_over_identifier_shape() {
        let toks = lex_all("while");
        assert_eq!(toks[0].kind, Some(TokenKind::TkWhile));
    }

    #[test]
    fn unrecognized_word_via_token_fun_is_fieldid() {
        let toks = lex_all("foo");
        assert_eq!(toks[0].kind, Some(TokenKind::TkFieldid));
    }

    #[test]
    fn underscore_prefixed_word_via_id_fun_is_funid() {
        let toks = lex_all("_helper");
        assert_eq!(toks[0].kind, Some(TokenKind::TkFunid));
    }

    #[test]
    fn underscore_main_is_still_keyword() {
        let toks = lex_all("_main");
        assert_eq!(toks[0].kind, Some(TokenKind::TkMain));
    }

    #[test]
    fn real_number_with_exponent() {
        let toks = lex_all("2.3E+4");
        assert_eq!(toks[0].kind, Some(TokenKind::TkRnum));
        assert_eq!(toks[0].lexeme, "2.3E+4");
    }

    #[test]
    fn integer_dot_without_following_digit_retracts_twice() {
        let toks = lex_all("2.a");
        assert_eq!(toks[0].kind, Some(TokenKind::TkNum));
        assert_eq!(toks[0].lexeme, "2");
    }

    #[test]
    fn assignop_is_three_dashes() {
        let toks = lex_all("<---");
        assert_eq!(toks[0].kind, Some(TokenKind::TkAssignop));
    }

    #[test]
    fn bare_less_than_without_dash() {
        let toks = lex_all("<x");
        assert_eq!(toks[0].kind, Some(TokenKind::TkLt));
    }

    #[test]
    fn unknown_character_reports_error() {
        let toks = lex_all("$");
        assert_eq!(toks[0].category, crate::token::TokenCategory::UnknownPattern);
    }

    #[test]
    fn comment_is_stripped_before_lexing() {
        let src = strip_comments("x % this is a comment\n+y");
        assert_eq!(src, "x \n+y");
    }

    #[test]
    fn comment_is_silently_skipped_by_default() {
        let toks = lex_all("% a comment\nx");
        let kinds: Vec<_> = toks.iter().filter_map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::TkFieldid]);
    }

    #[test]
    fn comment_surfaces_as_tk_comment_when_enabled() {
        let mut lexer =
            Lexer::with_options(Cursor::new(b"% a comment\nx".to_vec()), buffer::DEFAULT_BUFFER_SIZE, true)
                .unwrap();
        let tok = lexer.next_token();
        assert_eq!(tok.kind, Some(TokenKind::TkComment));
        assert_eq!(tok.category, crate::token::TokenCategory::Normal);
    }

    #[test]
    fn strip_comments_is_idempotent() {
        let src = "x % comment\ny % comment2\n";
        let once = strip_comments(src);
        let twice = strip_comments(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn overlong_identifier_is_length_exceeded() {
        let long_word = "a".repeat(VARMAX + 5);
        let toks = lex_all(&long_word);
        assert_eq!(
            toks[0].category,
            crate::token::TokenCategory::LengthExceeded
        );
    }

    // ------------------------------------------------------------------
    // Property-based tests: arbitrary inputs should never panic the DFA,
    // and digit runs below the length cap always come back as a number.
    // ------------------------------------------------------------------

    #[test]
    fn property_arbitrary_bytes_never_panic() {
        use proptest::prelude::*;

        proptest!(|(src in "\\PC{0,200}")| {
            let _ = lex_all(&src);
        });
    }

    #[test]
    fn property_short_digit_runs_are_a_single_number_token() {
        use proptest::prelude::*;

        proptest!(|(digits in "[0-9]{1,8}")| {
            let toks = lex_all(&digits);
            let kinds: Vec<_> = toks.iter().filter_map(|t| t.kind).collect();
            prop_assert_eq!(kinds, vec![TokenKind::TkNum]);
        });
    }
}
