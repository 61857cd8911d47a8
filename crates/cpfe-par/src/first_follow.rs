//! Iterative fixed-point FIRST/FOLLOW computation.
//!
//! `parser.c` computes these recursively with manual visited-flags
//! (`FirstSet`/`FollowSet`). This restates them as a fixed point instead,
//! since it removes the re-entrance bookkeeping entirely: start every set
//! empty and keep re-applying the production rules until nothing grows.

use cpfe_util::FxHashMap;
use rustc_hash::FxHashSet;

use crate::grammar::{
    is_terminal, symbol_name, Production, SymbolId, END_MARKER, EPSILON, NONTERMINALS_END,
    NONTERMINALS_START, START_SYMBOL,
};

pub type SymbolSet = FxHashSet<SymbolId>;

#[derive(Debug, Default, Clone)]
pub struct FirstFollow {
    pub first: FxHashMap<SymbolId, SymbolSet>,
    pub follow: FxHashMap<SymbolId, SymbolSet>,
}

impl FirstFollow {
    pub fn first_of(&self, sym: SymbolId) -> SymbolSet {
        if is_terminal(sym) {
            let mut s = SymbolSet::default();
            s.insert(sym);
            return s;
        }
        if sym == EPSILON {
            let mut s = SymbolSet::default();
            s.insert(EPSILON);
            return s;
        }
        self.first.get(&sym).cloned().unwrap_or_default()
    }

    pub fn follow_of(&self, sym: SymbolId) -> SymbolSet {
        self.follow.get(&sym).cloned().unwrap_or_default()
    }

    /// FIRST of a RHS symbol sequence, and whether the whole sequence is
    /// nullable (i.e. its FIRST set includes epsilon).
    pub fn first_of_sequence(&self, seq: &[SymbolId]) -> SymbolSet {
        let mut result = SymbolSet::default();
        let mut all_nullable = true;
        for &sym in seq {
            if sym == EPSILON {
                result.insert(EPSILON);
                break;
            }
            let f = self.first_of(sym);
            let nullable = f.contains(&EPSILON);
            result.extend(f.iter().copied().filter(|&s| s != EPSILON));
            if !nullable {
                all_nullable = false;
                break;
            }
        }
        if all_nullable {
            result.insert(EPSILON);
        }
        result
    }
}

pub fn compute(productions: &[Production]) -> FirstFollow {
    let mut ff = FirstFollow::default();
    for nt in NONTERMINALS_START..=NONTERMINALS_END {
        ff.first.insert(nt, SymbolSet::default());
        ff.follow.insert(nt, SymbolSet::default());
    }
    ff.follow
        .entry(START_SYMBOL)
        .or_default()
        .insert(END_MARKER);

    loop {
        let mut changed = false;

        for p in productions {
            let before = ff.first.get(&p.lhs).cloned().unwrap_or_default();
            let added = ff.first_of_sequence(&p.rhs);
            let entry = ff.first.entry(p.lhs).or_default();
            let before_len = entry.len();
            entry.extend(added);
            if entry.len() != before_len || &before != entry {
                changed = true;
            }
        }

        for p in productions {
            for (i, &sym) in p.rhs.iter().enumerate() {
                if sym == EPSILON || is_terminal(sym) {
                    continue;
                }
                let beta = &p.rhs[i + 1..];
                let first_beta = ff.first_of_sequence(beta);
                let nullable_beta = beta.is_empty() || first_beta.contains(&EPSILON);

                let before_len = ff.follow.get(&sym).map(|s| s.len()).unwrap_or(0);
                {
                    let entry = ff.follow.entry(sym).or_default();
                    entry.extend(first_beta.iter().copied().filter(|&s| s != EPSILON));
                }
                if nullable_beta {
                    let follow_lhs = ff.follow.get(&p.lhs).cloned().unwrap_or_default();
                    ff.follow.entry(sym).or_default().extend(follow_lhs);
                }
                if ff.follow.get(&sym).map(|s| s.len()).unwrap_or(0) != before_len {
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }

    ff
}

/// One line per non-terminal: `NAME ===> t1, t2, ...` with `$` for the end marker.
pub fn format_set_dump(sets: &FxHashMap<SymbolId, SymbolSet>) -> String {
    let mut out = String::new();
    let mut keys: Vec<_> = sets.keys().copied().collect();
    keys.sort_unstable();
    for k in keys {
        let mut names: Vec<&str> = sets[&k]
            .iter()
            .map(|&s| if s == END_MARKER { "$" } else { symbol_name(s) })
            .collect();
        names.sort_unstable();
        out.push_str(&format!("{} ===> {}\n", symbol_name(k), names.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::productions;

    #[test]
    fn first_never_contains_nonterminals() {
        let ff = compute(&productions());
        for (_, set) in &ff.first {
            for &s in set {
                assert!(
                    s == EPSILON || is_terminal(s),
                    "FIRST set contains non-terminal {s}"
                );
            }
        }
    }

    #[test]
    fn follow_never_contains_epsilon() {
        let ff = compute(&productions());
        for (_, set) in &ff.follow {
            assert!(!set.contains(&EPSILON));
        }
    }

    #[test]
    fn follow_never_contains_nonterminals() {
        let ff = compute(&productions());
        for (_, set) in &ff.follow {
            for &s in set {
                assert!(s == END_MARKER || is_terminal(s));
            }
        }
    }

    #[test]
    fn start_symbol_follow_contains_end_marker() {
        let ff = compute(&productions());
        assert!(ff.follow_of(START_SYMBOL).contains(&END_MARKER));
    }

    #[test]
    fn end_marker_never_in_first() {
        let ff = compute(&productions());
        for (_, set) in &ff.first {
            assert!(!set.contains(&END_MARKER));
        }
    }
}
