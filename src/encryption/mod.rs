//! Authenticated encryption.
//!
//! - `poly1305`: the one-time authenticator
//! - `secretbox`: XSalsa20-Poly1305, combining the XSalsa20 keystream with
//!   Poly1305 in a verify-then-decrypt construction
//!
//! Nonce reuse with the same key is catastrophic and must be avoided.

pub mod poly1305;
pub mod secretbox;
