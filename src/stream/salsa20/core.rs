//! Salsa20 core permutation
//!
//! This module provides a low-level, dependency-free implementation of the
//! Salsa20 core function from Bernstein's "The Salsa20 family of stream
//! ciphers".
//!
//! The core maps a 16-word state to a 16-word output through 10 double
//! rounds of add-rotate-XOR operations. It has two extraction modes:
//!
//! - `Stream`: the input is added back to the permuted state (feed-forward).
//!   This is the keystream block function.
//! - `Hash`: the permuted state is returned as is. HSalsa20 uses this mode
//!   and extracts a subset of the words.
//!
//! All arithmetic is modulo 2³² and the code is branch-free with respect to
//! the state contents.

use zeroize::Zeroize;

use super::BLOCK_SIZE;
use crate::utils::bytes::load_le_words;

/// Salsa20 constant words ("sigma").
///
/// These values correspond to the ASCII string `"expand 32-byte k"` encoded
/// as little-endian `u32` words. They occupy the diagonal of the state
/// (positions 0, 5, 10 and 15).
pub const SIGMA: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Number of double rounds performed by Salsa20/20.
const DOUBLE_ROUNDS: usize = 10;

/// Selects how the permuted state is turned into output words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Permuted state without feed-forward (used by HSalsa20).
    Hash,
    /// Permuted state plus the original input (keystream blocks).
    Stream,
}

/// Performs one Salsa20 quarter round on the words at `a`, `b`, `c`, `d`.
///
/// ```text
/// b ^= (a + d) <<< 7
/// c ^= (b + a) <<< 9
/// d ^= (c + b) <<< 13
/// a ^= (d + c) <<< 18
/// ```
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// Applies one column round followed by one row round.
#[inline(always)]
fn double_round(state: &mut [u32; 16]) {
    // Column round
    quarter_round(state, 0, 4, 8, 12);
    quarter_round(state, 5, 9, 13, 1);
    quarter_round(state, 10, 14, 2, 6);
    quarter_round(state, 15, 3, 7, 11);

    // Row round
    quarter_round(state, 0, 1, 2, 3);
    quarter_round(state, 5, 6, 7, 4);
    quarter_round(state, 10, 11, 8, 9);
    quarter_round(state, 15, 12, 13, 14);
}

/// Runs the Salsa20/20 core over `input`.
///
/// The caller chooses whether the original input is added back to the
/// permuted state. The input is not modified.
pub fn salsa20_core(input: &[u32; 16], extraction: Extraction) -> [u32; 16] {
    let mut state = *input;

    for _ in 0..DOUBLE_ROUNDS {
        double_round(&mut state);
    }

    if extraction == Extraction::Stream {
        state.iter_mut().zip(input).for_each(|(s, i)| {
            *s = s.wrapping_add(*i);
        });
    }

    state
}

/// Builds the initial Salsa20 state from a key and a 16-byte input.
///
/// The 16-byte input fills words 6..10: for the stream cipher it is the
/// 8-byte nonce followed by the 64-bit block counter, for HSalsa20 it is the
/// first 16 bytes of the extended nonce.
pub(crate) fn init_state(key: &[u8; 32], input: &[u8; 16]) -> [u32; 16] {
    let k: [u32; 8] = load_le_words(key);
    let n: [u32; 4] = load_le_words(input);

    [
        SIGMA[0], k[0], k[1], k[2], //
        k[3], SIGMA[1], n[0], n[1], //
        n[2], n[3], SIGMA[2], k[4], //
        k[5], k[6], k[7], SIGMA[3],
    ]
}

/// Serializes 16 state words as 64 little-endian bytes.
#[inline(always)]
pub(crate) fn serialize(words: &[u32; 16]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    out.chunks_exact_mut(4)
        .zip(words)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

/// Generates a single 64-byte Salsa20 keystream block.
///
/// # Parameters
/// - `key`: 256-bit secret key
/// - `nonce`: 64-bit nonce
/// - `counter`: 64-bit block counter, stored little-endian in words 8 and 9
///
/// # Security Notes
/// - Reusing the same `(key, nonce, counter)` tuple leaks the XOR of the
///   messages it encrypts.
pub fn salsa20_block(key: &[u8; 32], nonce: &[u8; 8], counter: u64) -> [u8; BLOCK_SIZE] {
    let mut input = [0u8; 16];
    input[..8].copy_from_slice(nonce);
    input[8..].copy_from_slice(&counter.to_le_bytes());

    let mut state = init_state(key, &input);
    let mut words = salsa20_core(&state, Extraction::Stream);
    let out = serialize(&words);

    state.zeroize();
    words.zeroize();

    out
}
