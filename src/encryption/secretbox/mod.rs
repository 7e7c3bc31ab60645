//! XSalsa20-Poly1305 secretbox.
//!
//! This module exposes symmetric authenticated encryption:
//!
//! - XSalsa20 as a stream cipher for confidentiality
//! - Poly1305 as a one-time MAC for authentication
//!
//! Layers:
//!
//! - `core`: the [`SecretBox`] type and the detached / combined APIs
//! - `config`: message length ceiling
//! - `nonce`: random and misuse-resistant nonce helpers
//! - `simple`: [`SimpleBox`], which embeds the nonce in its output
//!
//! There is no associated data: the tag covers the ciphertext only.

mod config;
mod core;
mod nonce;
mod simple;

pub use self::config::SecretBoxConfig;
pub use self::core::{SecretBox, decrypt, encrypt};
pub use self::nonce::random_nonce;
pub use self::simple::SimpleBox;
