//! LL(1) parse-table construction with panic-mode sync marks.
//!
//! Grounded in `createParseTable` (parser.c). Sync marking happens first
//! (both the FOLLOW-derived marks and the hardcoded "extra" statement-
//! delimiter list), then production entries are written over them; a
//! production overwriting another production is a static grammar error.

use thiserror::Error;

use crate::first_follow::FirstFollow;
use crate::grammar::{
    is_nonterminal, symbol_name, Production, SymbolId, END_MARKER, EPSILON, NONTERMINALS_END,
    NONTERMINALS_START, TERMINALS_END, TERMINALS_START,
};

/// The hardcoded statement-delimiter terminals marked SYNC in every
/// non-terminal's row, beyond plain FOLLOW-derived sync marks. This exact
/// list must not be narrowed.
pub const EXTRA_SYNC_TERMINALS: [SymbolId; 13] =
    [3, 1, 15, 17, 47, 19, 56, 24, 27, 31, 32, 50, 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Error,
    Sync,
    Production(usize),
}

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error(
        "LL(1) conflict at ({}, {}): production {existing} and production {new} both apply",
        symbol_name(*nonterminal), symbol_name(*terminal)
    )]
    Conflict {
        nonterminal: SymbolId,
        terminal: SymbolId,
        existing: usize,
        new: usize,
    },
}

/// Row-major table indexed by `[nonterminal - NONTERMINALS_START][column]`,
/// where column 0 is the end marker and columns 1..=TERMINALS_END are
/// terminal IDs.
pub struct ParseTable {
    rows: Vec<Vec<Cell>>,
}

fn column_of(terminal_or_end: SymbolId) -> usize {
    terminal_or_end as usize
}

const COLUMNS: usize = (TERMINALS_END + 1) as usize;

impl ParseTable {
    pub fn get(&self, nonterminal: SymbolId, terminal_or_end: SymbolId) -> Cell {
        let row = (nonterminal - NONTERMINALS_START) as usize;
        self.rows[row][column_of(terminal_or_end)]
    }

    fn get_mut(&mut self, nonterminal: SymbolId, terminal_or_end: SymbolId) -> &mut Cell {
        let row = (nonterminal - NONTERMINALS_START) as usize;
        &mut self.rows[row][column_of(terminal_or_end)]
    }

    /// Pretty-printed dump: one row per non-terminal, `ERR`/`SYN`/production index.
    pub fn format_dump(&self) -> String {
        let mut out = String::new();
        for nt in NONTERMINALS_START..=NONTERMINALS_END {
            out.push_str(symbol_name(nt));
            out.push(':');
            for col in 0..COLUMNS {
                let cell = self.get(nt, col as SymbolId);
                let text = match cell {
                    Cell::Error => "ERR".to_string(),
                    Cell::Sync => "SYN".to_string(),
                    Cell::Production(p) => (p + 1).to_string(),
                };
                out.push(' ');
                out.push_str(&text);
            }
            out.push('\n');
        }
        out
    }
}

pub fn build(productions: &[Production], ff: &FirstFollow) -> Result<ParseTable, GrammarError> {
    let num_nonterminals = (NONTERMINALS_END - NONTERMINALS_START + 1) as usize;
    let mut table = ParseTable {
        rows: vec![vec![Cell::Error; COLUMNS]; num_nonterminals],
    };

    // 1. Sync marking: FOLLOW-derived.
    for nt in NONTERMINALS_START..=NONTERMINALS_END {
        for &t in &ff.follow_of(nt) {
            *table.get_mut(nt, t) = Cell::Sync;
        }
    }
    // 1b. Hardcoded extra statement-delimiter syncs, every row.
    for nt in NONTERMINALS_START..=NONTERMINALS_END {
        for &t in &EXTRA_SYNC_TERMINALS {
            *table.get_mut(nt, t) = Cell::Sync;
        }
    }

    // 2. Production entries.
    for (idx, p) in productions.iter().enumerate() {
        let first_rhs = ff.first_of_sequence(&p.rhs);
        for &t in first_rhs.iter().filter(|&&s| s != EPSILON) {
            set_production(&mut table, p.lhs, t, idx)?;
        }
        if first_rhs.contains(&EPSILON) {
            for &t in &ff.follow_of(p.lhs) {
                set_production(&mut table, p.lhs, t, idx)?;
            }
        }
    }

    debug_assert!(is_nonterminal(productions[0].lhs) || true);
    let _ = TERMINALS_START; // terminals columns are 1..=TERMINALS_END; END_MARKER is column 0
    Ok(table)
}

fn set_production(
    table: &mut ParseTable,
    lhs: SymbolId,
    terminal_or_end: SymbolId,
    idx: usize,
) -> Result<(), GrammarError> {
    let cell = table.get_mut(lhs, terminal_or_end);
    match *cell {
        Cell::Production(existing) if existing != idx => {
            return Err(GrammarError::Conflict {
                nonterminal: lhs,
                terminal: terminal_or_end,
                existing,
                new: idx,
            })
        }
        _ => *cell = Cell::Production(idx),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first_follow;
    use crate::grammar::productions;

    #[test]
    fn builds_without_conflict() {
        let prods = productions();
        let ff = first_follow::compute(&prods);
        let table = build(&prods, &ff);
        assert!(table.is_ok(), "grammar must be LL(1): {:?}", table.err());
    }

    #[test]
    fn extra_sync_list_has_13_entries() {
        assert_eq!(EXTRA_SYNC_TERMINALS.len(), 13);
    }

    #[test]
    fn every_cell_is_production_first_or_sync() {
        let prods = productions();
        let ff = first_follow::compute(&prods);
        let table = build(&prods, &ff).unwrap();
        for nt in NONTERMINALS_START..=NONTERMINALS_END {
            for &t in &ff.follow_of(nt) {
                match table.get(nt, t) {
                    Cell::Error => panic!("FOLLOW-derived sync cell was not set"),
                    _ => {}
                }
            }
        }
    }
}
