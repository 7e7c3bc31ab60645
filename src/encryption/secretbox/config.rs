//! Limits applied by a [`SecretBox`](super::SecretBox).

use tracing::warn;

use crate::error::{Error, Result};

/// Configuration for a secretbox.
///
/// The XSalsa20 block counter is 64 bits wide, so a single message can in
/// principle be 2^70 bytes long. Deployments usually want a much lower
/// ceiling; `max_message_len` sets it. It applies to plaintexts on
/// encryption and to ciphertext bodies (without tag or nonce) on
/// decryption.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SecretBoxConfig {
    /// Largest accepted message body in bytes. `None` leaves only the
    /// block counter range as a bound.
    pub max_message_len: Option<usize>,
}

impl SecretBoxConfig {
    /// Returns a copy of this configuration with the given ceiling.
    pub fn with_max_message_len(mut self, max: usize) -> Self {
        self.max_message_len = Some(max);
        self
    }

    /// Rejects messages longer than the configured ceiling.
    pub(crate) fn check_len(&self, len: usize) -> Result<()> {
        match self.max_message_len {
            Some(max) if len > max => {
                warn!(len, max, "secretbox message exceeds configured ceiling");
                Err(Error::MessageTooLong { max, actual: len })
            }
            _ => Ok(()),
        }
    }
}
