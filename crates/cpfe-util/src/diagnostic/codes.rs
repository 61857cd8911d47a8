//! Diagnostic codes for categorizing lexer and parser errors.
//!
//! # Examples
//!
//! ```
//! use cpfe_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNKNOWN_TOKEN;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1004");
//! ```

/// A unique code identifying a diagnostic message.
///
/// Codes follow the format `{prefix}{number}` where `prefix` is "E" for
/// errors or "W" for warnings and `number` is zero-padded to 4 digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // -------------------------------------------------------------------
    // Lexer codes (E1xxx)
    // -------------------------------------------------------------------

    /// E1001: character has no transition out of any DFA state (trap state)
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: string or comment ran to end of input without a terminator
    pub const E_LEXER_UNTERMINATED: Self = Self::new("E", 1002);
    /// E1003: numeric literal rejected by the lexeme-length limit
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: lexeme accepted by the DFA but not classifiable as any token kind
    pub const E_LEXER_UNKNOWN_TOKEN: Self = Self::new("E", 1004);
    /// E1005: identifier or field/function name longer than its length bound
    pub const E_LEXER_NAME_TOO_LONG: Self = Self::new("E", 1005);

    // -------------------------------------------------------------------
    // Parser codes (E2xxx)
    // -------------------------------------------------------------------

    /// E2001: parse table has no production and no sync entry for (non-terminal, lookahead)
    pub const E_PARSER_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// E2002: terminal on top of stack does not match the lookahead token
    pub const E_PARSER_EXPECTED_TOKEN: Self = Self::new("E", 2002);
    /// E2003: input exhausted while the stack still holds symbols other than the bottom marker
    pub const E_PARSER_UNEXPECTED_EOF: Self = Self::new("E", 2003);

    // -------------------------------------------------------------------
    // Warning codes (W0xxx)
    // -------------------------------------------------------------------

    /// W0001: panic-mode recovery discarded a token to resynchronize
    pub const W_PARSER_TOKEN_DISCARDED: Self = Self::new("W", 1);
    /// W0002: panic-mode recovery popped a non-terminal from the stack
    pub const W_PARSER_SYMBOL_POPPED: Self = Self::new("W", 2);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
pub const E_LEXER_UNTERMINATED: DiagnosticCode = DiagnosticCode::E_LEXER_UNTERMINATED;
pub const E_LEXER_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_NUMBER;
pub const E_LEXER_UNKNOWN_TOKEN: DiagnosticCode = DiagnosticCode::E_LEXER_UNKNOWN_TOKEN;
pub const E_LEXER_NAME_TOO_LONG: DiagnosticCode = DiagnosticCode::E_LEXER_NAME_TOO_LONG;
pub const E_PARSER_UNEXPECTED_TOKEN: DiagnosticCode = DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN;
pub const E_PARSER_EXPECTED_TOKEN: DiagnosticCode = DiagnosticCode::E_PARSER_EXPECTED_TOKEN;
pub const E_PARSER_UNEXPECTED_EOF: DiagnosticCode = DiagnosticCode::E_PARSER_UNEXPECTED_EOF;
pub const W_PARSER_TOKEN_DISCARDED: DiagnosticCode = DiagnosticCode::W_PARSER_TOKEN_DISCARDED;
pub const W_PARSER_SYMBOL_POPPED: DiagnosticCode = DiagnosticCode::W_PARSER_SYMBOL_POPPED;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_pads_number() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 1).as_str(), "W0001");
        assert_eq!(DiagnosticCode::new("E", 1001).as_str(), "E1001");
    }

    #[test]
    fn display_matches_as_str() {
        let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
        assert_eq!(format!("{code}"), code.as_str());
    }

    #[test]
    fn predefined_codes() {
        assert_eq!(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN.as_str(), "E1004");
        assert_eq!(DiagnosticCode::E_PARSER_UNEXPECTED_EOF.as_str(), "E2003");
        assert_eq!(DiagnosticCode::W_PARSER_TOKEN_DISCARDED.as_str(), "W0001");
    }

    #[test]
    fn equality() {
        assert_eq!(
            DiagnosticCode::new("E", 1001),
            DiagnosticCode::new("E", 1001)
        );
        assert_ne!(
            DiagnosticCode::new("E", 1001),
            DiagnosticCode::new("E", 1002)
        );
    }
}
