use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the FlowGrid MVP crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors surfaced outside the pure geometry path.
///
/// Sizing math never fails; out-of-range inputs produce degenerate but
/// defined numbers instead of an error. These variants cover the pieces
/// around the math: palette construction, logging, and demo I/O.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("palette has no colors")]
    EmptyPalette,
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
