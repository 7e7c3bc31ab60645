use zeroize::Zeroize;

use super::HSALSA20_INPUT_SIZE;
use crate::error::{Error, Result};
use crate::stream::salsa20::core::{Extraction, init_state, salsa20_core};
use crate::KEY_SIZE;

/// State words forming the HSalsa20 output: the diagonal, then the
/// words that held the 16-byte input.
const OUTPUT_WORDS: [usize; 8] = [0, 5, 10, 15, 6, 7, 8, 9];

/// The HSalsa20 function from "Extending the Salsa20 nonce".
///
/// <https://cr.yp.to/snuffle/xsalsa-20110204.pdf>
///
/// HSalsa20 takes 512 bits of input:
///
/// - Constants (`u32` x 4)
/// - Key (`u32` x 8)
/// - Input (`u32` x 4)
///
/// It runs the core permutation without feed-forward and returns 256 bits
/// suitable for use as a Salsa20 key.
pub fn hsalsa20(key: &[u8; 32], input: &[u8; 16]) -> [u8; 32] {
    let mut state = init_state(key, input);
    let mut words = salsa20_core(&state, Extraction::Hash);

    let mut subkey = [0u8; 32];
    subkey
        .chunks_exact_mut(4)
        .zip(OUTPUT_WORDS)
        .for_each(|(chunk, idx)| chunk.copy_from_slice(&words[idx].to_le_bytes()));

    state.zeroize();
    words.zeroize();

    subkey
}

/// Slice variant of [`hsalsa20`].
///
/// # Errors
/// - `InvalidLength` if `key` is not 32 bytes or `input` is not 16 bytes.
pub fn try_hsalsa20(key: &[u8], input: &[u8]) -> Result<[u8; 32]> {
    let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| Error::InvalidLength {
        expected: KEY_SIZE,
        actual: key.len(),
    })?;
    let input: &[u8; HSALSA20_INPUT_SIZE] =
        input.try_into().map_err(|_| Error::InvalidLength {
            expected: HSALSA20_INPUT_SIZE,
            actual: input.len(),
        })?;

    Ok(hsalsa20(key, input))
}
