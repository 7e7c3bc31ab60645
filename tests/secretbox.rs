use crypto_secretbox::XSalsa20Poly1305;
use crypto_secretbox::aead::generic_array::GenericArray;
use crypto_secretbox::aead::{AeadInPlace, KeyInit};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use xsalsa20poly1305::{
    BLOCK_SIZE, Error, SecretBox, SecretBoxConfig, decrypt, encrypt, poly1305, random_nonce,
    xsalsa20,
};

fn random_key_nonce() -> ([u8; 32], [u8; 24]) {
    let mut rng = rand::thread_rng();
    let mut key = [0u8; 32];
    let mut nonce = [0u8; 24];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut nonce);
    (key, nonce)
}

fn random_message(max_len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut msg = vec![0u8; rng.gen_range(0..=max_len)];
    rng.fill_bytes(&mut msg);
    msg
}

// -------------------------------------------------------
// 1. KEYSTREAM OFFSET
// -------------------------------------------------------

/// XORs `data` with `keystream[offset..]`.
fn xor_from(data: &[u8], keystream: &[u8], offset: usize) -> Vec<u8> {
    data.iter()
        .zip(&keystream[offset..])
        .map(|(d, k)| d ^ k)
        .collect()
}

#[test]
fn plaintext_is_encrypted_from_block_one() {
    for _ in 0..32 {
        let (key, nonce) = random_key_nonce();
        let mut plaintext = random_message(2048);
        plaintext.extend_from_slice(b"at least sixteen bytes of body");

        let (_, ciphertext) = encrypt(&key, &nonce, &plaintext).unwrap();
        let keystream = xsalsa20(&key, &nonce, BLOCK_SIZE + plaintext.len()).unwrap();

        assert_eq!(ciphertext, xor_from(&plaintext, &keystream, BLOCK_SIZE));
    }
}

#[test]
fn ciphertext_differs_from_the_nacl_offset() {
    // crypto_secretbox starts its ciphertext at keystream byte 32; this
    // crate leaves all of block 0 unused
    let (key, nonce) = random_key_nonce();
    let plaintext = vec![0x42u8; 100];

    let (tag, ciphertext) = encrypt(&key, &nonce, &plaintext).unwrap();

    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(&key));
    let mut theirs = plaintext.clone();
    let their_tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(&nonce), b"", &mut theirs)
        .unwrap();

    let keystream = xsalsa20(&key, &nonce, BLOCK_SIZE + plaintext.len()).unwrap();
    assert_eq!(theirs, xor_from(&plaintext, &keystream, 32));
    assert_eq!(ciphertext, xor_from(&plaintext, &keystream, BLOCK_SIZE));

    assert_ne!(ciphertext, theirs);
    assert_ne!(&tag[..], their_tag.as_slice());

    // Boxes do not open across the two layouts
    assert_eq!(
        decrypt(&key, &nonce, their_tag.as_slice(), &theirs),
        Err(Error::AuthenticationFailure)
    );
}

// -------------------------------------------------------
// 2. CONSTRUCTION
// -------------------------------------------------------

#[test]
fn ciphertext_and_tag_follow_the_keystream_layout() {
    let (key, nonce) = random_key_nonce();
    let plaintext = b"the first 32 bytes of block zero key the authenticator";

    let (tag, ciphertext) = encrypt(&key, &nonce, plaintext).unwrap();
    let keystream = xsalsa20(&key, &nonce, BLOCK_SIZE + plaintext.len()).unwrap();

    let expected: Vec<u8> = plaintext
        .iter()
        .zip(&keystream[BLOCK_SIZE..])
        .map(|(p, k)| p ^ k)
        .collect();
    assert_eq!(ciphertext, expected);

    let poly_key: [u8; 32] = keystream[..32].try_into().unwrap();
    assert_eq!(tag, poly1305(&poly_key, &ciphertext));
}

#[test]
fn ciphertext_has_plaintext_length() {
    let (key, nonce) = random_key_nonce();

    for len in [0usize, 1, 31, 32, 33, 63, 64, 65, 1000] {
        let (_, ciphertext) = encrypt(&key, &nonce, &vec![0x61u8; len]).unwrap();
        assert_eq!(ciphertext.len(), len);
    }
}

#[test]
fn empty_message_round_trips() {
    let key = [0u8; 32];
    let nonce = [0u8; 24];

    let (tag, ciphertext) = encrypt(&key, &nonce, b"").unwrap();
    assert_eq!(tag.len() + ciphertext.len(), 16);
    assert!(ciphertext.is_empty());
    assert_eq!(decrypt(&key, &nonce, &tag, &ciphertext), Ok(vec![]));

    let boxed = SecretBox::from_key(key).seal(&nonce, b"").unwrap();
    assert_eq!(boxed.len(), 16);
    assert_eq!(&boxed[..], &tag[..]);

    let opened = SecretBox::from_key(key).open(&nonce, &boxed).unwrap();
    assert!(opened.is_empty());
}

#[test]
fn round_trip_many_lengths() {
    let (key, nonce) = random_key_nonce();
    let sb = SecretBox::from_key(key);

    for len in (0..4096).step_by(61) {
        let mut plaintext = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut plaintext);

        let (tag, ciphertext) = sb.encrypt(&nonce, &plaintext).unwrap();
        assert_eq!(sb.decrypt(&nonce, &tag, &ciphertext).unwrap(), plaintext, "length {len}");
    }
}

#[test]
fn seal_is_tag_then_ciphertext() {
    let (key, nonce) = random_key_nonce();
    let sb = SecretBox::from_key(key);

    let (tag, ciphertext) = sb.encrypt(&nonce, b"combined layout").unwrap();
    let boxed = sb.seal(&nonce, b"combined layout").unwrap();

    assert_eq!(&boxed[..16], &tag[..]);
    assert_eq!(&boxed[16..], &ciphertext[..]);
    assert_eq!(sb.open(&nonce, &boxed).unwrap(), b"combined layout");
}

// -------------------------------------------------------
// 3. AUTHENTICATION
// -------------------------------------------------------

#[test]
fn every_tag_bit_flip_is_rejected() {
    let (key, nonce) = random_key_nonce();
    let (tag, ciphertext) = encrypt(&key, &nonce, b"authenticated").unwrap();

    for byte in 0..16 {
        for bit in 0..8 {
            let mut bad = tag;
            bad[byte] ^= 1 << bit;

            assert_eq!(
                decrypt(&key, &nonce, &bad, &ciphertext),
                Err(Error::AuthenticationFailure)
            );
        }
    }
}

#[test]
fn every_ciphertext_bit_flip_is_rejected() {
    let (key, nonce) = random_key_nonce();
    let (tag, ciphertext) = encrypt(&key, &nonce, b"authenticated payload").unwrap();

    for byte in 0..ciphertext.len() {
        for bit in 0..8 {
            let mut bad = ciphertext.clone();
            bad[byte] ^= 1 << bit;

            assert_eq!(
                decrypt(&key, &nonce, &tag, &bad),
                Err(Error::AuthenticationFailure),
                "byte {byte} bit {bit}"
            );
        }
    }
}

#[test]
fn truncated_or_extended_ciphertext_is_rejected() {
    let (key, nonce) = random_key_nonce();
    let (tag, ciphertext) = encrypt(&key, &nonce, b"length matters too").unwrap();

    let shorter = &ciphertext[..ciphertext.len() - 1];
    assert_eq!(decrypt(&key, &nonce, &tag, shorter), Err(Error::AuthenticationFailure));

    let mut longer = ciphertext.clone();
    longer.push(0);
    assert_eq!(decrypt(&key, &nonce, &tag, &longer), Err(Error::AuthenticationFailure));
}

#[test]
fn wrong_key_is_rejected() {
    let (key, nonce) = random_key_nonce();
    let (tag, ciphertext) = encrypt(&key, &nonce, b"secret").unwrap();

    let mut other = key;
    other[0] ^= 1;

    assert_eq!(
        decrypt(&other, &nonce, &tag, &ciphertext),
        Err(Error::AuthenticationFailure)
    );
}

#[test]
fn wrong_nonce_is_rejected() {
    let (key, nonce) = random_key_nonce();
    let (tag, ciphertext) = encrypt(&key, &nonce, b"secret").unwrap();

    let mut other = nonce;
    other[23] ^= 1;

    assert_eq!(
        decrypt(&key, &other, &tag, &ciphertext),
        Err(Error::AuthenticationFailure)
    );
}

#[test]
fn failed_in_place_decryption_leaves_buffer_untouched() {
    let (key, nonce) = random_key_nonce();
    let sb = SecretBox::from_key(key);

    let mut buffer = b"in place".to_vec();
    let mut tag = sb.encrypt_in_place_detached(&nonce, &mut buffer).unwrap();
    let ciphertext = buffer.clone();

    tag[5] ^= 0x10;
    assert_eq!(
        sb.decrypt_in_place_detached(&nonce, &mut buffer, &tag),
        Err(Error::AuthenticationFailure)
    );
    assert_eq!(buffer, ciphertext);

    tag[5] ^= 0x10;
    sb.decrypt_in_place_detached(&nonce, &mut buffer, &tag).unwrap();
    assert_eq!(buffer, b"in place");
}

// -------------------------------------------------------
// 4. INPUT VALIDATION
// -------------------------------------------------------

#[test]
fn rejects_bad_key_length() {
    let err = Error::InvalidKeyLength {
        expected: 32,
        actual: 31,
    };

    assert_eq!(encrypt(&[0u8; 31], &[0u8; 24], b"x").unwrap_err(), err);
    assert_eq!(decrypt(&[0u8; 31], &[0u8; 24], &[0u8; 16], b"x").unwrap_err(), err);
    assert_eq!(SecretBox::new(&[0u8; 31]).unwrap_err(), err);
}

#[test]
fn rejects_bad_nonce_length() {
    let err = Error::InvalidNonceLength {
        expected: 24,
        actual: 12,
    };

    assert_eq!(encrypt(&[0u8; 32], &[0u8; 12], b"x").unwrap_err(), err);
    assert_eq!(decrypt(&[0u8; 32], &[0u8; 12], &[0u8; 16], b"x").unwrap_err(), err);
}

#[test]
fn rejects_bad_tag_length() {
    assert_eq!(
        decrypt(&[0u8; 32], &[0u8; 24], &[0u8; 15], b"x").unwrap_err(),
        Error::InvalidLength {
            expected: 16,
            actual: 15
        }
    );
}

#[test]
fn open_rejects_truncated_box() {
    let sb = SecretBox::from_key([1u8; 32]);

    assert_eq!(
        sb.open(&[0u8; 24], &[0u8; 15]),
        Err(Error::TruncatedBox {
            minimum: 16,
            actual: 15
        })
    );
}

#[test]
fn configured_ceiling_is_enforced() {
    let config = SecretBoxConfig::default().with_max_message_len(10);
    let sb = SecretBox::with_config([3u8; 32], config.clone());
    let nonce = [4u8; 24];

    assert_eq!(sb.config(), &config);
    assert!(sb.encrypt(&nonce, &[0u8; 10]).is_ok());
    assert_eq!(
        sb.encrypt(&nonce, &[0u8; 11]),
        Err(Error::MessageTooLong { max: 10, actual: 11 })
    );
    assert_eq!(
        sb.decrypt(&nonce, &[0u8; 16], &[0u8; 11]),
        Err(Error::MessageTooLong { max: 10, actual: 11 })
    );
}

#[test]
fn debug_output_hides_the_key() {
    let sb = SecretBox::from_key([0xabu8; 32]);
    let rendered = format!("{sb:?}");

    assert!(rendered.starts_with("SecretBox"));
    assert!(!rendered.contains("171"));
}

// -------------------------------------------------------
// 5. NONCES
// -------------------------------------------------------

#[test]
fn random_nonces_differ() {
    let a = random_nonce(&mut OsRng);
    let b = random_nonce(&mut OsRng);

    assert_ne!(a, b);
}

#[test]
fn derived_nonce_is_deterministic_for_a_fixed_generator() {
    let sb = SecretBox::from_key([5u8; 32]);

    let a = sb.nonce_for(b"message", &mut StdRng::seed_from_u64(7));
    let b = sb.nonce_for(b"message", &mut StdRng::seed_from_u64(7));

    assert_eq!(a, b);
}

#[test]
fn derived_nonce_depends_on_message_and_key() {
    let sb = SecretBox::from_key([5u8; 32]);
    let other = SecretBox::from_key([6u8; 32]);

    let base = sb.nonce_for(b"message", &mut StdRng::seed_from_u64(7));

    assert_ne!(base, sb.nonce_for(b"massage", &mut StdRng::seed_from_u64(7)));
    assert_ne!(base, other.nonce_for(b"message", &mut StdRng::seed_from_u64(7)));
    assert_ne!(base, sb.nonce_for(b"message", &mut StdRng::seed_from_u64(8)));
}

#[test]
fn box_nonce_helper_draws_from_the_generator() {
    let sb = SecretBox::from_key([5u8; 32]);

    let ours = sb.nonce(&mut StdRng::seed_from_u64(11));
    let direct = random_nonce(&mut StdRng::seed_from_u64(11));

    assert_eq!(ours, direct);
}
