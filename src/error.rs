//! Error type shared by every primitive in the crate.
//!
//! Messages are safe to log: they carry lengths and limits, never key,
//! nonce, tag or message bytes. Authentication failures in particular carry
//! no detail at all, so a caller cannot learn where a forged tag diverged.

use thiserror::Error;

/// Result type for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the stream ciphers, the MAC and the secretbox layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key slice did not have the required length.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required key length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A nonce slice did not have the required length.
    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength {
        /// Required nonce length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Any other fixed-size input (HSalsa20 input, tag) had the wrong length.
    #[error("invalid input length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Tag verification failed. Nothing was decrypted.
    #[error("authentication failed")]
    AuthenticationFailure,

    /// The request would need a keystream block past counter `u64::MAX`.
    #[error("keystream block counter overflow")]
    CounterOverflow,

    /// The message exceeds the ceiling configured on the box.
    #[error("message too long: max {max} bytes, got {actual}")]
    MessageTooLong {
        /// Configured ceiling
        max: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A combined envelope is shorter than its fixed framing.
    #[error("truncated box: expected at least {minimum} bytes, got {actual}")]
    TruncatedBox {
        /// Smallest well-formed envelope
        minimum: usize,
        /// Length that was supplied
        actual: usize,
    },
}
