use thiserror::Error;

/// Input-validation error shared across wordforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The pattern contains an unrecognized or truncated placeholder.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    /// A length range is impossible or an alphabet is empty.
    #[error("invalid range: {0}")]
    InvalidRange(String),
}

/// Convenience alias for results returned by wordforge crates.
pub type Result<T> = std::result::Result<T, Error>;
