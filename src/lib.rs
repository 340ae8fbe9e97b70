#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Components
//!
//! - [`prime`]: probable prime generation with Miller-Rabin.
//! - [`KeyPair`] / [`KeyPairBuilder`]: two-prime key derivation using
//!   Carmichael's totient `λ(n) = lcm(p - 1, q - 1)`.
//! - [`codec`]: byte/integer conversions, block chunking, hex and base64.
//! - [`cipher`]: block-wise encryption and decryption.
//! - [`encoding`]: `"<exponent> <modulus>"` key text.
//! - [`Session`]: caller-owned "is a key generated" state.
//!
//! # Usage
//!
//! ```
//! use rsa_textbook::{cipher, KeyPair};
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//!
//! let mut rng = ChaCha8Rng::from_seed([42; 32]);
//! let pair = KeyPair::generate_with_rng(&mut rng, 1024).expect("failed to generate a key");
//!
//! // Encrypt
//! let data = b"HELLO";
//! let enc_data = cipher::encrypt(pair.public_key(), data).expect("failed to encrypt");
//! assert_ne!(&data[..], &enc_data[..]);
//!
//! // Decrypt
//! let dec_data = cipher::decrypt(pair.private_key(), &enc_data).expect("failed to decrypt");
//! assert_eq!(&data[..], &dec_data[..]);
//! ```
//!
//! ## Key text
//!
//! ```
//! use rsa_textbook::{KeyPair, PrivateKey, PublicKey};
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//!
//! let mut rng = ChaCha8Rng::from_seed([42; 32]);
//! let pair = KeyPair::generate_with_rng(&mut rng, 512).expect("failed to generate a key");
//!
//! // base64 for the public key, hex for the private key
//! let public_text = pair.public_key().to_text();
//! let private_text = pair.private_key().to_text();
//!
//! assert_eq!(&PublicKey::from_text(&public_text).unwrap(), pair.public_key());
//! assert_eq!(&PrivateKey::from_text(&private_text).unwrap(), pair.private_key());
//! assert!(PublicKey::from_text("zz 123").is_err());
//! ```

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod cipher;
pub mod codec;
pub mod encoding;
pub mod errors;
mod key;
mod math;
pub mod prime;
mod session;
pub mod traits;
#[cfg(feature = "async")]
pub mod worker;

pub use crate::{
    algorithms::rsa::{decrypt_block, encrypt_block},
    encoding::KeyEncoding,
    errors::{Error, Result},
    key::{
        KeyPair, KeyPairBuilder, KeySize, PrivateKey, PublicKey, DEFAULT_KEY_BITS,
        DEFAULT_MAX_ATTEMPTS, DEFAULT_PUBLIC_EXPONENT, MIN_KEY_BITS, MIN_MODULUS_BITS,
    },
    session::Session,
    traits::{Decryptor, Encryptor, PrivateKeyParts, PublicKeyParts},
};
