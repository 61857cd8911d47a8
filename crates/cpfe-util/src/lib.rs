//! cpfe-util - shared diagnostics and source-location types.
//!
//! This crate has no knowledge of lexical or grammatical structure; it
//! only provides the plumbing that the lexer and parser crates build on:
//! [`Span`] for "where in the source", and [`diagnostic::Handler`] /
//! [`diagnostic::DiagnosticBuilder`] for "what went wrong".

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
pub use span::Span;

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
