//! Salsa20 family stream ciphers.
//!
//! This module provides the keystream side of the crate:
//!
//! - `salsa20`: the core permutation and the 64-bit-nonce stream cipher
//! - `xsalsa20`: HSalsa20 subkey derivation and the 192-bit-nonce stream
//!
//! None of these provide integrity. Ciphertexts produced here can be
//! modified without detection; use [`crate::encryption::secretbox`] unless
//! authentication is handled elsewhere.

pub mod salsa20;
pub mod xsalsa20;
