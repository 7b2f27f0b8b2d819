//! Error type for `rollbook-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] rollbook_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Attempted to delete a student that was not found.
  #[error("student not found: {0}")]
  StudentNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
