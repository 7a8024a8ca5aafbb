use core::fmt;

/// A result type defaulting to this crate's [`Error`].
///
/// Most `hostflake` APIs are infallible: packing, generation, and decoding
/// from a raw `u64` cannot fail. Only the strict string-decoding paths
/// produce errors.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `hostflake` can produce.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An error occurred during hexadecimal decoding.
    ///
    /// This wraps the [`crate::HexError`] type produced by the strict decode
    /// helpers. The fail-soft helpers swallow this and return a zero value
    /// instead.
    HexError(crate::HexError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HexError(e) => write!(f, "{e}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::HexError(e) => Some(e),
        }
    }
}
