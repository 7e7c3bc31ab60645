//! Salsa20 stream cipher.
//!
//! - `core`: the 20-round permutation, its two extraction modes and the
//!   one-shot block function
//! - `stream`: the counter-mode keystream with partial-block buffering

/// Size of a Salsa20 keystream block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Size of a Salsa20 nonce in bytes.
pub const SALSA20_NONCE_SIZE: usize = 8;

pub mod core;
mod stream;

pub use self::core::{Extraction, SIGMA, salsa20_block, salsa20_core};
pub use self::stream::Salsa20;
