//! Nonce generation helpers.
//!
//! The crate has no randomness of its own: every helper here draws from a
//! caller-supplied cryptographically secure generator.

use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use super::core::SecretBox;
use crate::{NONCE_SIZE, Nonce};

/// Domain label mixed into derived nonces.
const NONCE_DOMAIN: &[u8] = b"xsalsa20poly1305 nonce v1";

/// Draws a fresh 24-byte nonce from `rng`.
///
/// With 192-bit nonces, random generation is safe for any realistic number
/// of messages per key.
pub fn random_nonce<R: RngCore + CryptoRng>(rng: &mut R) -> Nonce {
    let mut nonce = [0u8; NONCE_SIZE];
    rng.fill_bytes(&mut nonce);
    nonce
}

impl SecretBox {
    /// Draws a fresh random nonce from `rng`.
    pub fn nonce<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Nonce {
        random_nonce(rng)
    }

    /// Derives a misuse-resistant nonce for `message`.
    ///
    /// The nonce is the first 24 bytes of
    /// `SHA-512(domain || key || salt || message)` where `salt` is 16 bytes
    /// from `rng`. A healthy generator makes every nonce unique; a broken
    /// one still yields distinct nonces for distinct messages, so a repeated
    /// nonce can only ever encrypt a repeated message.
    pub fn nonce_for<R: RngCore + CryptoRng>(&self, message: &[u8], rng: &mut R) -> Nonce {
        let mut salt = [0u8; 16];
        rng.fill_bytes(&mut salt);

        let mut hasher = Sha512::new();
        hasher.update(NONCE_DOMAIN);
        hasher.update(self.key);
        hasher.update(salt);
        hasher.update(message);
        let mut digest = hasher.finalize();

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&digest[..NONCE_SIZE]);

        digest.as_mut_slice().zeroize();
        salt.zeroize();

        nonce
    }
}
