//! XSalsa20: Salsa20 extended to a 24-byte nonce.
//!
//! Based on the paper "Extending the Salsa20 Nonce":
//!
//! <https://cr.yp.to/snuffle/xsalsa-20081128.pdf>

/// Size of the HSalsa20 input (the head of an XSalsa20 nonce) in bytes.
pub const HSALSA20_INPUT_SIZE: usize = 16;

pub(crate) mod core;
mod hsalsa20;

pub use self::core::{XSalsa20, xsalsa20, xsalsa20_xor};
pub use self::hsalsa20::{hsalsa20, try_hsalsa20};
