//! Explicit-state DFA transition and classification tables.
//!
//! A line-for-line transcription of `getState`/`getStateDetails` in
//! `lexer.c`. State numbers are kept identical to the original so the two
//! can be diffed against each other; only the `switch`-over-`char` idiom
//! becomes a `match`-over-`u8`.

pub const TRAP_STATE: i32 = -1;
pub const START_STATE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetractClass {
    NonFinal,
    FinalNoRetract,
    FinalRetractOnce,
    FinalRetractTwice,
}

/// `getState(c, current_state)`. `c` is `None` for true EOF.
pub fn next_state(c: Option<u8>, current_state: i32) -> i32 {
    if current_state == 0 {
        return match c {
            None => 3,
            Some(b'%') => 1,
            Some(b'*') => 4,
            Some(b'&') => 5,
            Some(b'~') => 8,
            Some(b'\n') => 9,
            Some(b'@') => 10,
            Some(b'[') => 13,
            Some(b'-') => 14,
            Some(b'+') => 15,
            Some(b'(') => 16,
            Some(b'=') => 17,
            Some(b')') => 19,
            Some(b';') => 20,
            Some(b':') => 21,
            Some(b'!') => 22,
            Some(b'/') => 24,
            Some(b'.') => 25,
            Some(b']') => 26,
            Some(b'\t') | Some(b' ') => 27,
            Some(b'0'..=b'9') => 29,
            Some(b'#') => 40,
            Some(b'_') => 43,
            Some(b',') => 64,
            Some(b'b') | Some(b'c') | Some(b'd') => 47,
            Some(b'a') | Some(b'e') | Some(b'f') | Some(b'g') | Some(b'h') | Some(b'i')
            | Some(b'j') | Some(b'k') | Some(b'l') | Some(b'm') | Some(b'n') | Some(b'o')
            | Some(b'p') | Some(b'q') | Some(b'r') | Some(b's') | Some(b't') | Some(b'u')
            | Some(b'v') | Some(b'w') | Some(b'x') | Some(b'y') | Some(b'z') => 48,
            Some(b'>') => 54,
            Some(b'<') => 57,
            _ => TRAP_STATE,
        };
    }

    match current_state {
        1 => {
            if c == Some(b'\n') {
                2
            } else {
                1
            }
        }
        5 if c == Some(b'&') => 6,
        6 if c == Some(b'&') => 7,
        10 if c == Some(b'@') => 11,
        11 if c == Some(b'@') => 12,
        17 if c == Some(b'=') => 18,
        22 if c == Some(b'=') => 23,
        27 => {
            if matches!(c, Some(b'\t') | Some(b' ')) {
                27
            } else {
                28
            }
        }
        29 => match c {
            Some(b'0'..=b'9') => 29,
            Some(b'.') => 30,
            _ => 39,
        },
        30 => match c {
            Some(b'0'..=b'9') => 31,
            _ => 38,
        },
        31 if matches!(c, Some(b'0'..=b'9')) => 32,
        32 => match c {
            Some(b'E') | Some(b'e') => 33,
            _ => 37,
        },
        33 => match c {
            Some(b'+') | Some(b'-') => 34,
            Some(b'0'..=b'9') => 35,
            _ => TRAP_STATE,
        },
        34 => match c {
            Some(b'0'..=b'9') => 35,
            _ => TRAP_STATE,
        },
        35 => match c {
            Some(b'0'..=b'9') => 36,
            _ => TRAP_STATE,
        },
        40 if matches!(c, Some(b'a'..=b'z')) => 41,
        41 => match c {
            Some(b'a'..=b'z') => 41,
            _ => 42,
        },
        43 if matches!(c, Some(b'a'..=b'z') | Some(b'A'..=b'Z')) => 44,
        44 => match c {
            Some(b'a'..=b'z') | Some(b'A'..=b'Z') => 44,
            Some(b'0'..=b'9') => 45,
            _ => 46,
        },
        45 => match c {
            Some(b'0'..=b'9') => 45,
            _ => 46,
        },
        47 => match c {
            Some(b'a'..=b'z') => 48,
            Some(b'2'..=b'7') => 50,
            _ => 53,
        },
        48 => match c {
            Some(b'a'..=b'z') => 48,
            _ => 49,
        },
        50 => match c {
            Some(b'b'..=b'd') => 50,
            Some(b'2'..=b'7') => 51,
            _ => 52,
        },
        51 => match c {
            Some(b'2'..=b'7') => 51,
            _ => 52,
        },
        54 => match c {
            Some(b'=') => 55,
            _ => 56,
        },
        57 => match c {
            Some(b'=') => 58,
            Some(b'-') => 59,
            _ => 63,
        },
        59 => match c {
            Some(b'-') => 60,
            _ => 62,
        },
        60 => match c {
            Some(b'-') => 61,
            _ => TRAP_STATE,
        },
        _ => TRAP_STATE,
    }
}

/// `getStateDetails`: classifies a just-entered state. Retraction (if any)
/// is the caller's responsibility — this only reports how many characters
/// to unread, leaving buffer access to the lexer driver.
pub fn state_details(state: i32) -> RetractClass {
    match state {
        2 | 3 | 4 | 7 | 8 | 9 | 12 | 13 | 14 | 15 | 16 | 18 | 19 | 20 | 21 | 23 | 24 | 25 | 26
        | 64 | 36 | 55 | 58 | 61 => RetractClass::FinalNoRetract,
        28 | 37 | 39 | 42 | 46 | 49 | 52 | 53 | 56 | 63 => RetractClass::FinalRetractOnce,
        38 | 62 => RetractClass::FinalRetractTwice,
        _ => RetractClass::NonFinal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_run_stays_in_integer_state() {
        let s = next_state(Some(b'1'), next_state(Some(b'2'), START_STATE));
        assert_eq!(s, 29);
    }

    #[test]
    fn unknown_char_at_start_traps() {
        assert_eq!(next_state(Some(b'@' + 1), START_STATE), TRAP_STATE);
    }

    #[test]
    fn eof_at_start_goes_to_state_3() {
        assert_eq!(next_state(None, START_STATE), 3);
    }

    #[test]
    fn state_3_is_final_no_retract() {
        assert_eq!(state_details(3), RetractClass::FinalNoRetract);
    }

    #[test]
    fn state_38_retracts_twice() {
        assert_eq!(state_details(38), RetractClass::FinalRetractTwice);
    }
}
