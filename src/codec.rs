//! Conversions between bytes, big integers and their text encodings.
//!
//! All integer conversions are big-endian and unsigned. Fixed widths are
//! always explicit: a value never carries its own length marker.

use alloc::string::String;
use alloc::vec::Vec;

use base64ct::{Base64, Encoding};
use num_bigint::BigUint;

use crate::algorithms::pad::uint_to_be_pad;
use crate::errors::{Error, Result};

/// Interprets `bytes` as an unsigned big-endian integer.
///
/// Leading zero bytes do not change the value; an empty slice is zero.
#[inline]
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encodes `int` as exactly `width` big-endian bytes, left padded with zeros.
///
/// Returns [`Error::BlockOverflow`] if `int` needs more than `width` bytes.
#[inline]
pub fn int_to_bytes(int: &BigUint, width: usize) -> Result<Vec<u8>> {
    uint_to_be_pad(int, width)
}

/// Width in bytes of a ciphertext block for the modulus `n`,
/// `⌈bitlen(n) / 8⌉`.
#[inline]
pub fn modulus_width(n: &BigUint) -> usize {
    (n.bits() + 7) / 8
}

/// Size in bytes of a plaintext block for the modulus `n`.
///
/// One byte less than the modulus width, so every block value is strictly
/// below `n`. Returns [`Error::InvalidModulus`] when not even a single byte fits.
pub fn block_size_for(n: &BigUint) -> Result<usize> {
    match modulus_width(n) {
        0 | 1 => Err(Error::InvalidModulus),
        width => Ok(width - 1),
    }
}

/// Splits `msg` into consecutive blocks of `block_size` bytes in order.
/// Only the last block may be shorter.
pub fn chunk_message(msg: &[u8], block_size: usize) -> Result<Vec<&[u8]>> {
    if block_size == 0 {
        return Err(Error::InvalidModulus);
    }

    Ok(msg.chunks(block_size).collect())
}

/// Lowercase hex encoding of the big-endian bytes of `int`.
pub fn hex_encode(int: &BigUint) -> String {
    hex::encode(int.to_bytes_be())
}

/// Decodes a hex integer, either case.
///
/// Returns [`Error::InvalidKeyEncoding`] for empty input, characters outside
/// `[0-9a-fA-F]` or an odd number of digits.
pub fn hex_decode(text: &str) -> Result<BigUint> {
    if text.is_empty() {
        return Err(Error::InvalidKeyEncoding);
    }

    hex::decode(text)
        .map(|bytes| bytes_to_int(&bytes))
        .map_err(|_| Error::InvalidKeyEncoding)
}

/// Standard padded base64 encoding of the big-endian bytes of `int`.
pub fn base64_encode(int: &BigUint) -> String {
    Base64::encode_string(&int.to_bytes_be())
}

/// Decodes a standard padded base64 integer.
///
/// Returns [`Error::InvalidKeyEncoding`] for empty input, characters outside
/// the alphabet or invalid padding.
pub fn base64_decode(text: &str) -> Result<BigUint> {
    if text.is_empty() {
        return Err(Error::InvalidKeyEncoding);
    }

    Base64::decode_vec(text)
        .map(|bytes| bytes_to_int(&bytes))
        .map_err(|_| Error::InvalidKeyEncoding)
}

/// Lowercase hex encoding of raw bytes, used for ciphertext text.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes ciphertext hex text, either case.
///
/// Returns [`Error::InvalidCiphertextEncoding`] for invalid characters or an
/// odd number of digits.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|_| Error::InvalidCiphertextEncoding)
}
