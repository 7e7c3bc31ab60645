//! Poly1305 message authentication code.
//!
//! This module provides a from-scratch implementation of the Poly1305
//! one-time authenticator, used as the integrity half of the secretbox
//! construction.
//!
//! The implementation is split into two layers:
//!
//! - `core`: key clamping, chunk absorption, modular reduction and final
//!   tag computation over fixed-size limbs
//! - `mac`: one-shot helpers and constant-time tag verification
//!
//! A Poly1305 key authenticates **one** message. The secretbox layer
//! guarantees this by deriving a fresh key from the keystream of every
//! `(key, nonce)` pair.

mod core;
mod mac;

pub use self::core::Poly1305;
pub use self::mac::{poly1305, poly1305_verify};
