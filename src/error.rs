//! Error types for marklite.

use thiserror::Error;

/// Result type for marklite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around Markdown to HTML conversion.
///
/// Conversion itself is total over string input and cannot fail; errors
/// only arise at the edges (file I/O, CLI argument parsing).
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An engine name passed on the command line was not recognized.
    #[error("Unknown engine: {0} (expected \"faithful\" or \"structured\")")]
    UnknownEngine(String),
}
