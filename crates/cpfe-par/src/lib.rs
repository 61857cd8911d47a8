//! Syntax analysis: grammar tables, FIRST/FOLLOW, the LL(1) parse table,
//! the predictive parser, and the concrete parse tree it builds.

pub mod first_follow;
pub mod format;
pub mod grammar;
pub mod parse_table;
pub mod parser;
pub mod tree;

pub use first_follow::FirstFollow;
pub use parse_table::{GrammarError, ParseTable};
pub use parser::{ParseOutcome, Parser};
pub use tree::Tree;
