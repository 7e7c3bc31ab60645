use rand::RngCore;
use salsa20::cipher::consts::U10;
use xsalsa20poly1305::{Error, hsalsa20, try_hsalsa20};

fn hex<const N: usize>(s: &str) -> [u8; N] {
    assert_eq!(s.len(), 2 * N, "hex literal has the wrong length");

    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16).unwrap();
    }
    out
}

// -------------------------------------------------------
// 1. PUBLISHED VECTORS (NaCl tests/core1.c, tests/core2.c)
// -------------------------------------------------------

/// X25519 shared secret from the NaCl box example.
const SHARED: &str = "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";
const FIRSTKEY: &str = "1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389";
const NONCE_PREFIX: &str = "69696ee955b62b73cd62bda875fc73d6";
const SECONDKEY: &str = "dc908dda0b9344a953629b733820778880f3ceb421bb61b91cbd4c3e66256ce4";

#[test]
fn nacl_core1_vector() {
    let key: [u8; 32] = hex(SHARED);

    assert_eq!(hsalsa20(&key, &[0u8; 16]), hex::<32>(FIRSTKEY));
}

#[test]
fn nacl_core2_vector() {
    let key: [u8; 32] = hex(FIRSTKEY);
    let input: [u8; 16] = hex(NONCE_PREFIX);

    assert_eq!(hsalsa20(&key, &input), hex::<32>(SECONDKEY));
}

// -------------------------------------------------------
// 2. INTEROPERABILITY WITH AN INDEPENDENT IMPLEMENTATION
// -------------------------------------------------------

#[test]
fn interoperability() {
    let mut rng = rand::thread_rng();

    for _ in 0..256 {
        let mut key = [0u8; 32];
        let mut input = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut input);

        let theirs = salsa20::hsalsa::<U10>(&key.into(), &input.into());
        let ours = hsalsa20(&key, &input);

        assert_eq!(&ours[..], theirs.as_slice(), "key {key:02x?} input {input:02x?}");
    }
}

#[test]
fn output_depends_on_every_input_byte() {
    let key = [0x11u8; 32];
    let input = [0x22u8; 16];
    let base = hsalsa20(&key, &input);

    for i in 0..32 {
        let mut k = key;
        k[i] ^= 1;
        assert_ne!(hsalsa20(&k, &input), base, "key byte {i}");
    }

    for i in 0..16 {
        let mut n = input;
        n[i] ^= 1;
        assert_ne!(hsalsa20(&key, &n), base, "input byte {i}");
    }
}

// -------------------------------------------------------
// 3. SLICE VARIANT
// -------------------------------------------------------

#[test]
fn slice_variant_matches_array_variant() {
    let key = [0x42u8; 32];
    let input = [0x24u8; 16];

    assert_eq!(try_hsalsa20(&key, &input), Ok(hsalsa20(&key, &input)));
}

#[test]
fn slice_variant_rejects_bad_lengths() {
    assert_eq!(
        try_hsalsa20(&[0u8; 31], &[0u8; 16]),
        Err(Error::InvalidLength {
            expected: 32,
            actual: 31
        })
    );
    assert_eq!(
        try_hsalsa20(&[0u8; 32], &[0u8; 24]),
        Err(Error::InvalidLength {
            expected: 16,
            actual: 24
        })
    );
}
