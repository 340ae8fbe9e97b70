//! Text encoding of keys for display and copy/paste exchange.
//!
//! A key is written as two whitespace-separated tokens,
//! `"<exponent> <modulus>"`, each an encoded big-endian integer. Public keys
//! conventionally use base64 and private keys hex, but either encoding can be
//! chosen for either key.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use num_bigint::BigUint;

use crate::codec;
use crate::errors::{Error, Result};
use crate::key::{PrivateKey, PublicKey};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Encoding of each integer token in the key text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEncoding {
    /// Hexadecimal digits, either case on input, lowercase on output.
    Hex,
    /// Standard base64 with padding.
    Base64,
}

impl KeyEncoding {
    /// Encoding used for public keys unless stated otherwise.
    pub const PUBLIC_DEFAULT: KeyEncoding = KeyEncoding::Base64;

    /// Encoding used for private keys unless stated otherwise.
    pub const PRIVATE_DEFAULT: KeyEncoding = KeyEncoding::Hex;

    fn encode(self, int: &BigUint) -> String {
        match self {
            KeyEncoding::Hex => codec::hex_encode(int),
            KeyEncoding::Base64 => codec::base64_encode(int),
        }
    }

    fn decode(self, token: &str) -> Result<BigUint> {
        match self {
            KeyEncoding::Hex => codec::hex_decode(token),
            KeyEncoding::Base64 => codec::base64_decode(token),
        }
    }
}

/// Encodes a public key as `"<e> <n>"`.
pub fn encode_public_key(key: &PublicKey, encoding: KeyEncoding) -> String {
    encode_pair(encoding, key.e(), key.n())
}

/// Encodes a private key as `"<d> <n>"`. Prime factors are not included.
pub fn encode_private_key(key: &PrivateKey, encoding: KeyEncoding) -> String {
    encode_pair(encoding, key.d(), key.n())
}

/// Decodes a public key from `"<e> <n>"`.
///
/// Fails with [`Error::InvalidKeyEncoding`] if the text does not hold
/// exactly two tokens, a token does not decode, or the integers do not form
/// a usable key.
pub fn decode_public_key(text: &str, encoding: KeyEncoding) -> Result<PublicKey> {
    let (e, n) = decode_pair(text, encoding)?;
    PublicKey::new(e, n).map_err(|_| Error::InvalidKeyEncoding)
}

/// Decodes a private key from `"<d> <n>"`.
///
/// Fails with [`Error::InvalidKeyEncoding`] like [`decode_public_key`].
pub fn decode_private_key(text: &str, encoding: KeyEncoding) -> Result<PrivateKey> {
    let (d, n) = decode_pair(text, encoding)?;
    PrivateKey::new(d, n).map_err(|_| Error::InvalidKeyEncoding)
}

fn encode_pair(encoding: KeyEncoding, exponent: &BigUint, modulus: &BigUint) -> String {
    format!("{} {}", encoding.encode(exponent), encoding.encode(modulus))
}

fn decode_pair(text: &str, encoding: KeyEncoding) -> Result<(BigUint, BigUint)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [exponent, modulus] => Ok((encoding.decode(exponent)?, encoding.decode(modulus)?)),
        _ => Err(Error::InvalidKeyEncoding),
    }
}

impl PublicKey {
    /// Encodes the key as `"<e> <n>"` in [`KeyEncoding::PUBLIC_DEFAULT`].
    pub fn to_text(&self) -> String {
        encode_public_key(self, KeyEncoding::PUBLIC_DEFAULT)
    }

    /// Decodes a key written by [`PublicKey::to_text`].
    pub fn from_text(text: &str) -> Result<Self> {
        decode_public_key(text, KeyEncoding::PUBLIC_DEFAULT)
    }
}

impl PrivateKey {
    /// Encodes the key as `"<d> <n>"` in [`KeyEncoding::PRIVATE_DEFAULT`].
    pub fn to_text(&self) -> String {
        encode_private_key(self, KeyEncoding::PRIVATE_DEFAULT)
    }

    /// Decodes a key written by [`PrivateKey::to_text`].
    pub fn from_text(text: &str) -> Result<Self> {
        decode_private_key(text, KeyEncoding::PRIVATE_DEFAULT)
    }
}
