//! XSalsa20-Poly1305 authenticated encryption
//!
//! This crate provides a from-scratch XSalsa20-Poly1305 secretbox: the
//! XSalsa20 stream cipher combined with the Poly1305 one-time authenticator,
//! together with the building blocks it is made of.
//!
//! Boxes are **not** byte-compatible with NaCl or libsodium. Those start the
//! ciphertext at keystream byte 32; here all of keystream block 0 is kept
//! away from the plaintext and encryption starts at byte 64.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! primitive is written out explicitly over fixed-width words, with wrapping
//! arithmetic where the algorithms call for it and no branches or table
//! lookups on secret data.
//!
//! # Module overview
//!
//! - `stream`
//!   The Salsa20 core permutation, the 64-bit-nonce Salsa20 stream, HSalsa20
//!   subkey derivation and the 192-bit-nonce XSalsa20 stream.
//!
//! - `encryption`
//!   Poly1305 and the secretbox constructions built from it:
//!   [`SecretBox`] (caller-managed nonces, detached or combined tags) and
//!   [`SimpleBox`] (nonce carried inside the box).
//!
//! - `error`
//!   The single [`Error`] type shared by all operations.
//!
//! # Usage
//!
//! ```
//! use xsalsa20poly1305::{decrypt, encrypt};
//!
//! let key = [7u8; 32];
//! let nonce = [9u8; 24];
//!
//! let (tag, ciphertext) = encrypt(&key, &nonce, b"attack at dawn").unwrap();
//! let plaintext = decrypt(&key, &nonce, &tag, &ciphertext).unwrap();
//!
//! assert_eq!(plaintext, b"attack at dawn");
//! ```
//!
//! # Security notes
//!
//! - A nonce must never be used twice under the same key. The crate does
//!   not track nonces; the 24-byte size makes random nonces safe.
//! - Decryption is verify-then-decrypt: no plaintext is produced for a box
//!   whose tag does not match.
//! - Keys, subkeys, keystream and MAC state are wiped after use.
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries.

mod utils;

pub mod encryption;
pub mod error;
pub mod stream;

/// Size of a secretbox / XSalsa20 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of an XSalsa20 nonce in bytes.
pub const NONCE_SIZE: usize = 24;

/// Size of a Poly1305 tag in bytes.
pub const TAG_SIZE: usize = 16;

/// 256-bit secret key.
pub type Key = [u8; KEY_SIZE];

/// 192-bit XSalsa20 nonce.
pub type Nonce = [u8; NONCE_SIZE];

/// 128-bit Poly1305 authentication tag.
pub type Tag = [u8; TAG_SIZE];

pub use encryption::poly1305::{Poly1305, poly1305, poly1305_verify};
pub use encryption::secretbox::{
    SecretBox, SecretBoxConfig, SimpleBox, decrypt, encrypt, random_nonce,
};
pub use error::{Error, Result};
pub use stream::salsa20::{BLOCK_SIZE, SALSA20_NONCE_SIZE, Salsa20};
pub use stream::xsalsa20::{
    HSALSA20_INPUT_SIZE, XSalsa20, hsalsa20, try_hsalsa20, xsalsa20, xsalsa20_xor,
};
