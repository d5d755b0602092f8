use std::error;
use std::fmt;
use std::result;

/// The result type returned by [`crate::Registry`] operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors surfaced by the registry. Every other operation in this crate
/// (normalization, loading, searching) is total and infallible by design.
#[derive(Debug)]
pub enum Error {
    /// `get`/`release` was called with a handle that doesn't name a live
    /// database, either because it was never issued or because it was
    /// already released. This is a programmer error, not a runtime
    /// condition callers are expected to recover from.
    UnknownHandle(i32),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::UnknownHandle(id) => write!(f, "no database for handle {}", id),
        }
    }
}
