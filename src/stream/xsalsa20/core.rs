//! XSalsa20 keystream.
//!
//! XSalsa20 splits a 24-byte nonce into a 16-byte head and an 8-byte tail.
//! The head and the key go through HSalsa20 to produce a per-nonce subkey;
//! the tail is the nonce of an ordinary Salsa20 stream under that subkey,
//! with the block counter starting at 0.

use tracing::trace;
use zeroize::Zeroize;

use super::hsalsa20::hsalsa20;
use super::HSALSA20_INPUT_SIZE;
use crate::error::{Error, Result};
use crate::stream::salsa20::{SALSA20_NONCE_SIZE, Salsa20};
use crate::{KEY_SIZE, NONCE_SIZE};

/// XSalsa20 stream cipher with a 192-bit nonce.
///
/// The nonce is used as given; uniqueness per key is the caller's
/// responsibility.
#[derive(Debug)]
pub struct XSalsa20 {
    inner: Salsa20,
}

impl XSalsa20 {
    /// Derives the subkey for `nonce` and positions the keystream at block 0.
    ///
    /// The subkey is wiped once the inner Salsa20 state has been built.
    pub fn new(key: &[u8; 32], nonce: &[u8; 24]) -> Self {
        let mut head = [0u8; HSALSA20_INPUT_SIZE];
        let mut tail = [0u8; SALSA20_NONCE_SIZE];
        head.copy_from_slice(&nonce[..HSALSA20_INPUT_SIZE]);
        tail.copy_from_slice(&nonce[HSALSA20_INPUT_SIZE..]);

        let mut subkey = hsalsa20(key, &head);
        let inner = Salsa20::new(&subkey, &tail);
        subkey.zeroize();

        Self { inner }
    }

    /// Slice variant of [`XSalsa20::new`].
    ///
    /// # Errors
    /// - `InvalidKeyLength` if `key` is not 32 bytes
    /// - `InvalidNonceLength` if `nonce` is not 24 bytes
    pub fn from_slices(key: &[u8], nonce: &[u8]) -> Result<Self> {
        let key = key_array(key)?;
        let nonce = nonce_array(nonce)?;

        Ok(Self::new(key, nonce))
    }

    /// XORs the next `data.len()` keystream bytes into `data`.
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        self.inner.apply_keystream(data)
    }

    /// Writes the next `out.len()` keystream bytes into `out`.
    pub fn keystream(&mut self, out: &mut [u8]) -> Result<()> {
        self.inner.keystream(out)
    }

    /// Repositions the keystream at the start of block `block`.
    pub fn seek_block(&mut self, block: u64) {
        self.inner.seek_block(block);
    }

    /// Counter of the next block that will be generated.
    pub fn block_position(&self) -> u64 {
        self.inner.block_position()
    }

    /// Returns `true` once the last block of the counter range has been
    /// generated.
    pub fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }
}

/// Returns `len` bytes of XSalsa20 keystream for `(key, nonce)`.
///
/// # Errors
/// - `InvalidKeyLength` / `InvalidNonceLength` on malformed inputs
/// - `CounterOverflow` if `len` exceeds the block counter range
pub fn xsalsa20(key: &[u8], nonce: &[u8], len: usize) -> Result<Vec<u8>> {
    trace!(len, "xsalsa20 keystream");

    let mut cipher = XSalsa20::from_slices(key, nonce)?;
    let mut out = vec![0u8; len];
    cipher.apply_keystream(&mut out)?;

    Ok(out)
}

/// Encrypts or decrypts `message` with the XSalsa20 keystream.
///
/// XOR is its own inverse, so applying this twice with the same
/// `(key, nonce)` returns the original message.
pub fn xsalsa20_xor(key: &[u8], nonce: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    trace!(len = message.len(), "xsalsa20 xor");

    let mut cipher = XSalsa20::from_slices(key, nonce)?;
    let mut out = message.to_vec();
    cipher.apply_keystream(&mut out)?;

    Ok(out)
}

pub(crate) fn key_array(key: &[u8]) -> Result<&[u8; KEY_SIZE]> {
    key.try_into().map_err(|_| Error::InvalidKeyLength {
        expected: KEY_SIZE,
        actual: key.len(),
    })
}

pub(crate) fn nonce_array(nonce: &[u8]) -> Result<&[u8; NONCE_SIZE]> {
    nonce.try_into().map_err(|_| Error::InvalidNonceLength {
        expected: NONCE_SIZE,
        actual: nonce.len(),
    })
}
