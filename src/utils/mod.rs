//! Non-cryptographic helpers shared by the primitives.
//!
//! - `ct`: constant-time comparison and selection
//! - `bytes`: little-endian word loading and XOR helpers

pub(crate) mod bytes;
pub(crate) mod ct;
