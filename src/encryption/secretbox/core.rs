//! XSalsa20-Poly1305 authenticated encryption.
//!
//! ## Algorithm
//!
//! ```text
//! keystream  = XSalsa20(key, nonce)
//! poly_key   = keystream[0..32]            (rest of block 0 is discarded)
//! ciphertext = plaintext ^ keystream[64..]
//! tag        = Poly1305(poly_key, ciphertext)
//! ```
//!
//! Decryption recomputes the tag over the received ciphertext and compares
//! it in constant time. The keystream past block 0 is only applied once the
//! tag has been accepted; a rejected box leaves the caller's buffer as it
//! was and produces no plaintext.
//!
//! ## Notes
//!
//! - The caller must ensure `(key, nonce)` uniqueness.
//! - Tag and ciphertext are separate values. `seal`/`open` additionally
//!   offer a combined `tag || ciphertext` layout.
//! - The ciphertext starts at keystream byte 64, not 32 as in NaCl, so
//!   boxes do not interoperate with NaCl or libsodium.

use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::config::SecretBoxConfig;
use crate::encryption::poly1305::{Poly1305, poly1305};
use crate::error::{Error, Result};
use crate::stream::salsa20::BLOCK_SIZE;
use crate::stream::xsalsa20::XSalsa20;
use crate::stream::xsalsa20::core::{key_array, nonce_array};
use crate::{Key, Nonce, TAG_SIZE, Tag};

/// A secretbox bound to one 256-bit key.
///
/// The key is wiped when the box is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBox {
    pub(super) key: Key,

    #[zeroize(skip)]
    config: SecretBoxConfig,
}

impl SecretBox {
    /// Creates a box from a key slice.
    ///
    /// # Errors
    /// - `InvalidKeyLength` if `key` is not 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self::from_key(*key_array(key)?))
    }

    /// Creates a box from a key array, with the default configuration.
    pub fn from_key(key: Key) -> Self {
        Self::with_config(key, SecretBoxConfig::default())
    }

    /// Creates a box from a key array and an explicit configuration.
    pub fn with_config(key: Key, config: SecretBoxConfig) -> Self {
        Self { key, config }
    }

    /// The configuration this box enforces.
    pub fn config(&self) -> &SecretBoxConfig {
        &self.config
    }

    /// Encrypts `buffer` in place and returns its tag.
    pub fn encrypt_in_place_detached(&self, nonce: &Nonce, buffer: &mut [u8]) -> Result<Tag> {
        self.config.check_len(buffer.len())?;
        trace!(len = buffer.len(), "secretbox encrypt");

        let (mut cipher, poly_key) = self.keystream(nonce)?;
        cipher.apply_keystream(buffer)?;

        Ok(poly1305(&poly_key, buffer))
    }

    /// Verifies `tag` over `buffer`, then decrypts `buffer` in place.
    ///
    /// # Errors
    /// - `AuthenticationFailure` if the tag does not match. `buffer` is left
    ///   untouched.
    pub fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce,
        buffer: &mut [u8],
        tag: &Tag,
    ) -> Result<()> {
        self.config.check_len(buffer.len())?;
        trace!(len = buffer.len(), "secretbox decrypt");

        let mut cipher = self.authenticate(nonce, tag, buffer)?;
        cipher.apply_keystream(buffer)
    }

    /// Encrypts `plaintext`, returning the tag and the ciphertext separately.
    ///
    /// # Errors
    /// - `InvalidNonceLength` if `nonce` is not 24 bytes
    /// - `MessageTooLong` if the configured ceiling is exceeded
    pub fn encrypt(&self, nonce: &[u8], plaintext: &[u8]) -> Result<(Tag, Vec<u8>)> {
        let nonce = nonce_array(nonce)?;

        let mut ciphertext = plaintext.to_vec();
        let tag = self.encrypt_in_place_detached(nonce, &mut ciphertext)?;

        Ok((tag, ciphertext))
    }

    /// Authenticates and decrypts a detached `(tag, ciphertext)` pair.
    ///
    /// # Errors
    /// - `InvalidNonceLength` if `nonce` is not 24 bytes
    /// - `InvalidLength` if `tag` is not 16 bytes
    /// - `AuthenticationFailure` if the tag does not match
    pub fn decrypt(&self, nonce: &[u8], tag: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let nonce = nonce_array(nonce)?;
        let tag: &Tag = tag.try_into().map_err(|_| Error::InvalidLength {
            expected: TAG_SIZE,
            actual: tag.len(),
        })?;

        self.config.check_len(ciphertext.len())?;
        trace!(len = ciphertext.len(), "secretbox decrypt");

        // No plaintext buffer exists until the tag has been accepted
        let mut cipher = self.authenticate(nonce, tag, ciphertext)?;
        let mut plaintext = ciphertext.to_vec();
        cipher.apply_keystream(&mut plaintext)?;

        Ok(plaintext)
    }

    /// Encrypts `plaintext` into a combined `tag || ciphertext` box.
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let nonce = nonce_array(nonce)?;

        let mut boxed = vec![0u8; TAG_SIZE + plaintext.len()];
        let (tag_out, body) = boxed.split_at_mut(TAG_SIZE);
        body.copy_from_slice(plaintext);

        let tag = self.encrypt_in_place_detached(nonce, body)?;
        tag_out.copy_from_slice(&tag);

        Ok(boxed)
    }

    /// Opens a combined `tag || ciphertext` box.
    ///
    /// # Errors
    /// - `TruncatedBox` if `boxed` is shorter than a tag
    /// - `AuthenticationFailure` if the tag does not match
    pub fn open(&self, nonce: &[u8], boxed: &[u8]) -> Result<Vec<u8>> {
        if boxed.len() < TAG_SIZE {
            return Err(Error::TruncatedBox {
                minimum: TAG_SIZE,
                actual: boxed.len(),
            });
        }

        let (tag, ciphertext) = boxed.split_at(TAG_SIZE);
        self.decrypt(nonce, tag, ciphertext)
    }

    /// Checks `tag` over `ciphertext` without decrypting anything.
    ///
    /// On success returns the cipher positioned at block 1, ready to
    /// decrypt.
    fn authenticate(&self, nonce: &Nonce, tag: &Tag, ciphertext: &[u8]) -> Result<XSalsa20> {
        let (cipher, poly_key) = self.keystream(nonce)?;

        let mut mac = Poly1305::new(&poly_key);
        mac.update(ciphertext);
        mac.verify(tag).inspect_err(|_| {
            debug!(len = ciphertext.len(), "secretbox rejected: authentication failed");
        })?;

        Ok(cipher)
    }

    /// Starts the XSalsa20 keystream for `nonce` and consumes block 0.
    ///
    /// Returns the cipher positioned at block 1 together with the Poly1305
    /// one-time key (the first half of block 0). Both are wiped on drop.
    fn keystream(&self, nonce: &Nonce) -> Result<(XSalsa20, Zeroizing<[u8; 32]>)> {
        let mut cipher = XSalsa20::new(&self.key, nonce);

        let mut block0 = Zeroizing::new([0u8; BLOCK_SIZE]);
        cipher.keystream(&mut block0[..])?;

        let mut poly_key = Zeroizing::new([0u8; 32]);
        poly_key.copy_from_slice(&block0[..32]);

        Ok((cipher, poly_key))
    }
}

impl core::fmt::Debug for SecretBox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecretBox")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Encrypts `plaintext` under `(key, nonce)`.
///
/// Returns the 16-byte tag and a ciphertext of the same length as the
/// plaintext.
///
/// # Errors
/// - `InvalidKeyLength` if `key` is not 32 bytes
/// - `InvalidNonceLength` if `nonce` is not 24 bytes
pub fn encrypt(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<(Tag, Vec<u8>)> {
    SecretBox::new(key)?.encrypt(nonce, plaintext)
}

/// Verifies `tag` over `ciphertext` and, only if it matches, decrypts it.
///
/// # Errors
/// - `InvalidKeyLength` / `InvalidNonceLength` / `InvalidLength` on
///   malformed inputs
/// - `AuthenticationFailure` if the tag does not match
pub fn decrypt(key: &[u8], nonce: &[u8], tag: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    SecretBox::new(key)?.decrypt(nonce, tag, ciphertext)
}
