//! Self-contained boxes that carry their own nonce.
//!
//! ```text
//! ┌──────────────┬────────────┬──────────────────────┐
//! │ nonce (24 B) │ tag (16 B) │ ciphertext (N bytes) │
//! └──────────────┴────────────┴──────────────────────┘
//! ```

use rand_core::{CryptoRng, RngCore};
use tracing::trace;

use super::config::SecretBoxConfig;
use super::core::SecretBox;
use crate::error::{Error, Result};
use crate::{Key, NONCE_SIZE, TAG_SIZE};

/// Smallest well-formed simple box: a nonce and a tag around an empty body.
const MIN_BOX_LEN: usize = NONCE_SIZE + TAG_SIZE;

/// A secretbox that manages nonces itself.
///
/// Every [`seal`](SimpleBox::seal) derives a misuse-resistant nonce and
/// prepends it to the output, so callers only handle keys and opaque boxes.
#[derive(Clone, Debug)]
pub struct SimpleBox {
    inner: SecretBox,
}

impl SimpleBox {
    /// Creates a box from a key slice.
    ///
    /// # Errors
    /// - `InvalidKeyLength` if `key` is not 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            inner: SecretBox::new(key)?,
        })
    }

    /// Creates a box from a key array.
    pub fn from_key(key: Key) -> Self {
        Self {
            inner: SecretBox::from_key(key),
        }
    }

    /// Creates a box from a key array and an explicit configuration.
    pub fn with_config(key: Key, config: SecretBoxConfig) -> Self {
        Self {
            inner: SecretBox::with_config(key, config),
        }
    }

    /// Encrypts `plaintext` into `nonce || tag || ciphertext`.
    pub fn seal<R: RngCore + CryptoRng>(&self, plaintext: &[u8], rng: &mut R) -> Result<Vec<u8>> {
        trace!(len = plaintext.len(), "simplebox seal");

        let nonce = self.inner.nonce_for(plaintext, rng);

        let mut boxed = Vec::with_capacity(MIN_BOX_LEN + plaintext.len());
        boxed.extend_from_slice(&nonce);
        boxed.extend_from_slice(&self.inner.seal(&nonce, plaintext)?);

        Ok(boxed)
    }

    /// Opens a box produced by [`seal`](SimpleBox::seal).
    ///
    /// # Errors
    /// - `TruncatedBox` if `boxed` is shorter than a nonce and a tag
    /// - `AuthenticationFailure` if the box was modified or sealed under
    ///   another key
    pub fn open(&self, boxed: &[u8]) -> Result<Vec<u8>> {
        if boxed.len() < MIN_BOX_LEN {
            return Err(Error::TruncatedBox {
                minimum: MIN_BOX_LEN,
                actual: boxed.len(),
            });
        }

        let (nonce, sealed) = boxed.split_at(NONCE_SIZE);
        self.inner.open(nonce, sealed)
    }
}
