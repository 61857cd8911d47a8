//! Error type for the driver binary itself — configuration, I/O, and
//! command-line failures. Lexical and syntax errors in the compiled
//! source are reported through [`cpfe_util::diagnostic::Handler`]
//! instead, since they are recoverable and the pipeline keeps going.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file operation failed: {0}")]
    FileOperation(String),

    #[error("compilation failed with {0} error(s)")]
    CompilationFailed(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CpfeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = CpfeError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "configuration error: missing field");
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let err: CpfeError = io_err.into();
        assert!(matches!(err, CpfeError::Io(_)));
    }
}
