/// Constant-time comparison utilities.
///
/// Implementations must not introduce data-dependent branches or early
/// exits: every byte is visited and the differences are folded together
/// before a single final test.
pub(crate) trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8; 16] {
    /// Constant-time equality test for 16-byte tags.
    ///
    /// The execution time does not depend on where the first difference
    /// occurs.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        let diff = self
            .iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0u8, |acc, v| acc | v);

        is_zero(diff)
    }
}

/// Maps `0` to `true` and everything else to `false` without branching
/// on the value.
#[inline(always)]
fn is_zero(x: u8) -> bool {
    // (x - 1) borrows into bit 63 only when x == 0
    (((x as u64).wrapping_sub(1) >> 63) as u8) == 1
}

/// Returns an all-ones mask when `bit == 1` and zero when `bit == 0`.
#[inline(always)]
pub(crate) fn mask_from_bit(bit: u32) -> u32 {
    0u32.wrapping_sub(bit & 1)
}

/// Selects `b` where `mask` is set and `a` elsewhere.
#[inline(always)]
pub(crate) fn select(mask: u32, a: u32, b: u32) -> u32 {
    (a & !mask) | (b & mask)
}
