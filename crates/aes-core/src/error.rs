//! Error type for the AES-128 engine.

use thiserror::Error;

/// Errors raised by the public AES-128 entry points.
///
/// Every computation past input validation is total over `u8`, so length is
/// the only thing that can go wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A block or key did not have the required length.
    #[error("invalid length for {context}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Which input was rejected (`"plaintext"`, `"key"`, ...).
        context: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Checks that `bytes` is exactly `N` bytes long and copies it into an array.
pub(crate) fn fixed<const N: usize>(bytes: &[u8], context: &'static str) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| {
        log::debug!(
            "rejecting {}: expected {} bytes, got {}",
            context,
            N,
            bytes.len()
        );
        Error::InvalidLength {
            context,
            expected: N,
            actual: bytes.len(),
        }
    })
}
