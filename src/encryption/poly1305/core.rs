use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::utils::ct::{mask_from_bit, select};

/// Mask selecting the low 26 bits of a limb.
const LIMB_MASK: u32 = 0x3ff_ffff;

/// Poly1305 block size in bytes.
const CHUNK: usize = 16;

/// Poly1305 accumulator state.
///
/// This structure implements the Poly1305 one-time authenticator. It is a
/// stateful accumulator and **must never be reused** across different
/// messages: a fresh instance, keyed with a fresh one-time key, is created
/// for each authentication.
///
/// All arithmetic uses five 26-bit limbs with 64-bit intermediate products.
/// There are no branches or table lookups indexed by secret data.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    /// Clamped `r` value, split into five 26-bit limbs.
    r: [u32; 5],

    /// Accumulator `h`, five 26-bit limbs (modulo 2^130 - 5).
    h: [u32; 5],

    /// `s` value (second half of the one-time key) as four words.
    s: [u32; 4],

    /// Bytes of an incomplete chunk waiting for more input.
    pending: [u8; CHUNK],

    /// Number of valid bytes in `pending`.
    pending_len: usize,
}

impl Poly1305 {
    /// Creates a new Poly1305 instance from a one-time 32-byte key.
    ///
    /// # Key layout
    ///
    /// - `key[0..16]` → `r` (clamped, used for polynomial multiplication)
    /// - `key[16..32]` → `s` (added at finalization)
    ///
    /// Clamping clears the top four bits of bytes 3, 7, 11, 15 and the
    /// bottom two bits of bytes 4, 8, 12.
    pub fn new(one_time_key: &[u8; 32]) -> Self {
        let mut k = [0u32; 8];
        k.iter_mut()
            .zip(one_time_key.chunks_exact(4))
            .for_each(|(w, c)| *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]));

        let r0 = k[0] & 0x0fff_ffff;
        let r1 = k[1] & 0x0fff_fffc;
        let r2 = k[2] & 0x0fff_fffc;
        let r3 = k[3] & 0x0fff_fffc;

        let r = [
            r0 & LIMB_MASK,
            ((r0 >> 26) | (r1 << 6)) & LIMB_MASK,
            ((r1 >> 20) | (r2 << 12)) & LIMB_MASK,
            ((r2 >> 14) | (r3 << 18)) & LIMB_MASK,
            (r3 >> 8) & LIMB_MASK,
        ];

        let s = [k[4], k[5], k[6], k[7]];
        k.zeroize();

        Poly1305 {
            r,
            h: [0; 5],
            s,
            pending: [0; CHUNK],
            pending_len: 0,
        }
    }

    /// Absorbs message bytes.
    ///
    /// The message may be split at arbitrary points; bytes that do not fill
    /// a 16-byte chunk are held back until more input arrives or
    /// [`finalize`](Self::finalize) is called.
    pub fn update(&mut self, mut data: &[u8]) {
        if self.pending_len > 0 {
            let take = (CHUNK - self.pending_len).min(data.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];

            if self.pending_len < CHUNK {
                return;
            }

            let chunk = self.pending;
            self.absorb(&chunk, 1);
            self.pending.zeroize();
            self.pending_len = 0;
        }

        let mut chunks = data.chunks_exact(CHUNK);
        for chunk in &mut chunks {
            self.absorb(chunk, 1);
        }

        let rem = chunks.remainder();
        self.pending[..rem.len()].copy_from_slice(rem);
        self.pending_len = rem.len();
    }

    /// Adds one chunk to the accumulator and multiplies by `r`:
    ///
    /// ```text
    /// h = (h + chunk) * r mod (2^130 - 5)
    /// ```
    ///
    /// `hibit` is the bit at position 128. It is `1` for full chunks. The
    /// final partial chunk carries its padding bit inside `chunk` instead
    /// and passes `0`.
    fn absorb(&mut self, chunk: &[u8], hibit: u32) {
        debug_assert_eq!(chunk.len(), CHUNK);

        let t0 = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let t1 = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
        let t2 = u32::from_le_bytes([chunk[8], chunk[9], chunk[10], chunk[11]]);
        let t3 = u32::from_le_bytes([chunk[12], chunk[13], chunk[14], chunk[15]]);

        self.h[0] += t0 & LIMB_MASK;
        self.h[1] += ((t0 >> 26) | (t1 << 6)) & LIMB_MASK;
        self.h[2] += ((t1 >> 20) | (t2 << 12)) & LIMB_MASK;
        self.h[3] += ((t2 >> 14) | (t3 << 18)) & LIMB_MASK;
        self.h[4] += (t3 >> 8) | (hibit << 24);

        let [h0, h1, h2, h3, h4] = self.h.map(u64::from);
        let [r0, r1, r2, r3, r4] = self.r.map(u64::from);

        let s1 = r1 * 5;
        let s2 = r2 * 5;
        let s3 = r3 * 5;
        let s4 = r4 * 5;

        let d0 = h0 * r0 + h1 * s4 + h2 * s3 + h3 * s2 + h4 * s1;
        let mut d1 = h0 * r1 + h1 * r0 + h2 * s4 + h3 * s3 + h4 * s2;
        let mut d2 = h0 * r2 + h1 * r1 + h2 * r0 + h3 * s4 + h4 * s3;
        let mut d3 = h0 * r3 + h1 * r2 + h2 * r1 + h3 * r0 + h4 * s4;
        let mut d4 = h0 * r4 + h1 * r3 + h2 * r2 + h3 * r1 + h4 * r0;

        // Partial carry propagation
        let mut c: u64;

        c = d0 >> 26;
        self.h[0] = (d0 as u32) & LIMB_MASK;
        d1 += c;

        c = d1 >> 26;
        self.h[1] = (d1 as u32) & LIMB_MASK;
        d2 += c;

        c = d2 >> 26;
        self.h[2] = (d2 as u32) & LIMB_MASK;
        d3 += c;

        c = d3 >> 26;
        self.h[3] = (d3 as u32) & LIMB_MASK;
        d4 += c;

        c = d4 >> 26;
        self.h[4] = (d4 as u32) & LIMB_MASK;
        self.h[0] += (c * 5) as u32;

        let c = self.h[0] >> 26;
        self.h[0] &= LIMB_MASK;
        self.h[1] += c;
    }

    /// Finalizes the computation and returns the 16-byte tag.
    ///
    /// # Algorithm
    ///
    /// 1. Absorb the pending partial chunk, padded with a single `1` byte
    ///    and zeros
    /// 2. Full carry propagation and reduction modulo `2^130 - 5`
    /// 3. Constant-time conditional subtraction of the modulus
    /// 4. Addition of `s` modulo `2^128`
    pub fn finalize(mut self) -> [u8; 16] {
        if self.pending_len > 0 {
            let mut last = [0u8; CHUNK];
            last[..self.pending_len].copy_from_slice(&self.pending[..self.pending_len]);
            last[self.pending_len] = 1;
            self.absorb(&last, 0);
            last.zeroize();
        }

        let h = &mut self.h;
        let mut c: u32;

        c = h[1] >> 26;
        h[1] &= LIMB_MASK;
        h[2] += c;

        c = h[2] >> 26;
        h[2] &= LIMB_MASK;
        h[3] += c;

        c = h[3] >> 26;
        h[3] &= LIMB_MASK;
        h[4] += c;

        c = h[4] >> 26;
        h[4] &= LIMB_MASK;
        h[0] += c * 5;

        c = h[0] >> 26;
        h[0] &= LIMB_MASK;
        h[1] += c;

        // g = h + 5 - 2^130; the carry out of limb 4 says whether h >= p
        let mut g = [0u32; 5];
        c = 5;
        for (g_i, h_i) in g.iter_mut().zip(h.iter()) {
            *g_i = h_i.wrapping_add(c);
            c = *g_i >> 26;
            *g_i &= LIMB_MASK;
        }

        let mask = mask_from_bit(c);
        for (h_i, g_i) in h.iter_mut().zip(&g) {
            *h_i = select(mask, *h_i, *g_i);
        }
        g.zeroize();

        // Pack into four 32-bit words (mod 2^128)
        let words = [
            h[0] | (h[1] << 26),
            (h[1] >> 6) | (h[2] << 20),
            (h[2] >> 12) | (h[3] << 14),
            (h[3] >> 18) | (h[4] << 8),
        ];

        let mut tag = [0u8; 16];
        let mut carry = 0u64;
        for ((chunk, w), s) in tag.chunks_exact_mut(4).zip(words).zip(self.s) {
            let sum = u64::from(w) + u64::from(s) + carry;
            chunk.copy_from_slice(&(sum as u32).to_le_bytes());
            carry = sum >> 32;
        }

        tag
    }
}
