use std::path::PathBuf;

/// Errors produced at the crate's API boundaries.
///
/// Lookup and anagram search never return an error: a missing word is
/// simply `false` or an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum DawgError {
  #[error("word `{word}` is not strictly greater than the previously inserted word `{previous}`")]
  OrderViolation { previous: String, word: String },

  #[error("cannot insert into a builder that has already been finalized")]
  PostFinalizeMutation,

  #[error("failed to decode graph: {0}")]
  Decode(String),

  #[error("I/O error at {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid argument: {0}")]
  InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DawgError>;
