//! End-to-end scenarios across key generation, encryption and key text.

use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use rsa_textbook::{
    cipher, BigUint, Decryptor, Encryptor, Error, KeyPair, KeyPairBuilder, PrivateKey,
    PrivateKeyParts, PublicKey, PublicKeyParts, Session, DEFAULT_PUBLIC_EXPONENT,
};

#[test]
fn hello_1024() {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let pair = KeyPair::generate_with_rng(&mut rng, 1024).unwrap();

    let ciphertext = cipher::encrypt(pair.public_key(), b"HELLO").unwrap();
    assert_eq!(ciphertext.len(), pair.public_key().size());
    assert_eq!(cipher::decrypt(pair.private_key(), &ciphertext).unwrap(), b"HELLO");
}

#[test]
fn generated_keys_satisfy_invariants() {
    let mut rng = ChaCha8Rng::from_seed([7; 32]);
    for bits in [64, 100, 256, 512] {
        let pair = KeyPair::generate_with_rng(&mut rng, bits).unwrap();
        let n_bits = pair.public_key().n().bits();
        assert!(n_bits == bits || n_bits + 1 == bits, "{} bits for {}", n_bits, bits);
        assert_eq!(pair.public_key().e(), &BigUint::from(DEFAULT_PUBLIC_EXPONENT));
        assert_eq!(pair.private_key().primes().len(), 2);
        pair.validate_with_rng(&mut rng).unwrap();
    }
}

#[test]
fn text_exchange_between_parties() {
    let mut rng = ChaCha8Rng::from_seed([9; 32]);
    let pair = KeyPair::generate_with_rng(&mut rng, 512).unwrap();

    // The sender only sees the public key text.
    let public = PublicKey::from_text(&pair.public_key().to_text()).unwrap();
    let ciphertext = cipher::encrypt_to_hex(&public, "Halo, dunia!".as_bytes()).unwrap();

    // The receiver only sees the private key text and the hex ciphertext.
    let private = PrivateKey::from_text(&pair.private_key().to_text()).unwrap();
    assert!(private.primes().is_empty());
    let plaintext = cipher::decrypt_hex(&private, &ciphertext).unwrap();
    assert_eq!(plaintext, "Halo, dunia!".as_bytes());
}

#[test]
fn malformed_key_text() {
    assert_eq!(PublicKey::from_text("zz 123"), Err(Error::InvalidKeyEncoding));
    assert_eq!(
        PrivateKey::from_text("zz 123").err(),
        Some(Error::InvalidKeyEncoding)
    );
}

#[test]
fn wrong_private_key_is_not_silently_accepted() {
    let mut rng = ChaCha8Rng::from_seed([11; 32]);
    let alice = KeyPair::generate_with_rng(&mut rng, 256).unwrap();
    let bob = KeyPair::generate_with_rng(&mut rng, 256).unwrap();

    let ciphertext = alice.encrypt(b"for alice").unwrap();
    match bob.decrypt(&ciphertext) {
        Ok(plaintext) => assert_ne!(plaintext, b"for alice"),
        Err(err) => assert!(matches!(
            err,
            Error::BlockOverflow | Error::CiphertextLengthMismatch
        )),
    }
}

#[test]
fn session_flow() {
    let mut rng = ChaCha8Rng::from_seed([13; 32]);
    let mut session = Session::new();
    assert_eq!(session.encrypt(b"HELLO"), Err(Error::MissingKey));

    let pair = KeyPairBuilder::new().bits(512).build_with_rng(&mut rng).unwrap();
    session.install(pair);

    let ciphertext = session.encrypt(b"HELLO").unwrap();
    assert_eq!(session.decrypt(&ciphertext).unwrap(), b"HELLO");

    session.reset();
    assert_eq!(session.decrypt(&ciphertext), Err(Error::MissingKey));
}

#[test]
fn keys_are_shared_across_threads() {
    let mut rng = ChaCha8Rng::from_seed([17; 32]);
    let pair = KeyPair::generate_with_rng(&mut rng, 256).unwrap();

    std::thread::scope(|scope| {
        for i in 0..4u8 {
            let pair = &pair;
            scope.spawn(move || {
                let msg = vec![i; 40];
                let ciphertext = pair.encrypt(&msg).unwrap();
                assert_eq!(pair.decrypt(&ciphertext).unwrap(), msg);
            });
        }
    });
}

#[cfg(feature = "getrandom")]
#[test]
fn os_rng_generation() {
    let pair = KeyPair::generate(512).unwrap();
    pair.validate().unwrap();
}
