//! Error types for `rollbook-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required input field is missing or malformed. The operation aborts
  /// before any write is issued.
  #[error("invalid input: {0}")]
  Validation(String),

  #[error("student not found: {0}")]
  StudentNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
