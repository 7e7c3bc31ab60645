use zeroize::Zeroize;

use super::core::Poly1305;
use crate::error::{Error, Result};
use crate::utils::ct::ConstantTimeEq;

impl Poly1305 {
    /// Finalizes the computation and compares the result with `expected`
    /// in constant time.
    ///
    /// # Errors
    /// - `AuthenticationFailure` if the tags differ. The error does not
    ///   reveal where.
    pub fn verify(self, expected: &[u8; 16]) -> Result<()> {
        let mut computed = self.finalize();
        let equal = computed.ct_eq(expected);
        computed.zeroize();

        if equal {
            Ok(())
        } else {
            Err(Error::AuthenticationFailure)
        }
    }
}

/// Computes a Poly1305 authentication tag.
///
/// # Parameters
///
/// - `one_time_key`: 256-bit key that authenticates exactly one message
/// - `message`: message to authenticate, of any length
///
/// # Notes
///
/// - Authenticating two different messages under the same key lets an
///   attacker forge tags for that key.
pub fn poly1305(one_time_key: &[u8; 32], message: &[u8]) -> [u8; 16] {
    let mut mac = Poly1305::new(one_time_key);
    mac.update(message);
    mac.finalize()
}

/// Recomputes the tag of `message` and compares it with `tag` in constant
/// time.
pub fn poly1305_verify(one_time_key: &[u8; 32], message: &[u8], tag: &[u8; 16]) -> Result<()> {
    let mut mac = Poly1305::new(one_time_key);
    mac.update(message);
    mac.verify(tag)
}
