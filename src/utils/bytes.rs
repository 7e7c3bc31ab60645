/// Loads `N` little-endian `u32` words from `bytes`.
///
/// `bytes` must hold exactly `4 * N` bytes; callers pass fixed-size arrays
/// so the length is known statically.
#[inline(always)]
pub(crate) fn load_le_words<const N: usize>(bytes: &[u8]) -> [u32; N] {
    debug_assert_eq!(bytes.len(), 4 * N);

    let mut words = [0u32; N];
    words
        .iter_mut()
        .zip(bytes.chunks_exact(4))
        .for_each(|(w, c)| *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]));

    words
}

/// XORs `keystream` into `data`, byte for byte.
#[inline(always)]
pub(crate) fn xor_in_place(data: &mut [u8], keystream: &[u8]) {
    debug_assert_eq!(data.len(), keystream.len());

    for (d, k) in data.iter_mut().zip(keystream) {
        *d ^= *k;
    }
}
