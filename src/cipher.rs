//! Block-wise textbook RSA encryption and decryption.
//!
//! A message is split into blocks one byte narrower than the modulus, so
//! every block value is below `n`. Each encrypted block is written as a
//! big-endian group of exactly [`PublicKeyParts::size`] bytes, and the groups
//! are concatenated in message order.
//!
//! Every block but the last carries exactly `size - 1` message bytes. The
//! last block carries the remaining `0..size - 2` bytes behind a single
//! `0x01` marker byte, which lets decryption restore that block's exact byte
//! count (including leading zero bytes) without any metadata beyond the
//! ciphertext length. When the message length is a multiple of the block
//! size the last block is the marker alone.
//!
//! There is no randomized padding: encrypting the same message twice with
//! the same key yields the same ciphertext.

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::algorithms::rsa::{decrypt_block, encrypt_block};
use crate::codec::{self, block_size_for, bytes_to_int, int_to_bytes};
use crate::errors::{Error, Result};
use crate::key::{KeyPair, PrivateKey, PublicKey};
use crate::traits::{Decryptor, Encryptor, PrivateKeyParts, PublicKeyParts};

/// Marker byte in front of the message tail in the last block.
const TAIL_MARKER: u8 = 0x01;

/// Encrypts `msg` with the public key.
///
/// Returns the concatenated fixed-width ciphertext groups. Fails with
/// [`Error::EmptyMessage`] if `msg` is empty.
pub fn encrypt<K: PublicKeyParts + ?Sized>(key: &K, msg: &[u8]) -> Result<Vec<u8>> {
    if msg.is_empty() {
        return Err(Error::EmptyMessage);
    }

    let width = key.size();
    let block_size = block_size_for(key.n())?;

    let full_len = msg.len() - msg.len() % block_size;
    let (full, tail) = msg.split_at(full_len);

    let blocks = codec::chunk_message(full, block_size)?;
    let mut out = Vec::with_capacity((blocks.len() + 1) * width);

    for block in blocks {
        encrypt_into(key, block, width, &mut out)?;
    }

    let mut last = Zeroizing::new(Vec::with_capacity(tail.len() + 1));
    last.push(TAIL_MARKER);
    last.extend_from_slice(tail);
    encrypt_into(key, &last, width, &mut out)?;

    Ok(out)
}

fn encrypt_into<K: PublicKeyParts + ?Sized>(
    key: &K,
    block: &[u8],
    width: usize,
    out: &mut Vec<u8>,
) -> Result<()> {
    let m = Zeroizing::new(bytes_to_int(block));
    let c = encrypt_block(&m, key.e(), key.n())?;
    out.extend_from_slice(&int_to_bytes(&c, width)?);
    Ok(())
}

/// Decrypts `ciphertext` with the private key.
///
/// # Errors
///
/// - [`Error::CiphertextLengthMismatch`] if the length is not a positive
///   multiple of the block width.
/// - [`Error::BlockOverflow`] if a group is not below the modulus, or a
///   decrypted block does not fit its plaintext width or lacks its marker.
pub fn decrypt<K: PrivateKeyParts + ?Sized>(key: &K, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let width = key.size();
    let block_size = block_size_for(key.n())?;

    if ciphertext.is_empty() || ciphertext.len() % width != 0 {
        return Err(Error::CiphertextLengthMismatch);
    }

    let count = ciphertext.len() / width;
    let mut out = Zeroizing::new(Vec::with_capacity(count * block_size));

    for (i, group) in ciphertext.chunks(width).enumerate() {
        let c = bytes_to_int(group);
        let m = Zeroizing::new(decrypt_block(&c, key.d(), key.n())?);

        if i + 1 < count {
            out.extend_from_slice(&Zeroizing::new(int_to_bytes(&m, block_size)?));
            continue;
        }

        let last = Zeroizing::new(m.to_bytes_be());
        match last.split_first() {
            Some((&TAIL_MARKER, tail)) if last.len() <= block_size => {
                out.extend_from_slice(tail)
            }
            _ => return Err(Error::BlockOverflow),
        }
    }

    Ok(core::mem::take(&mut *out))
}

/// Encrypts `msg` and returns the ciphertext as lowercase hex text.
pub fn encrypt_to_hex<K: PublicKeyParts + ?Sized>(key: &K, msg: &[u8]) -> Result<String> {
    encrypt(key, msg).map(|ciphertext| codec::encode_hex(&ciphertext))
}

/// Decrypts hex ciphertext text as produced by [`encrypt_to_hex`].
///
/// Fails with [`Error::InvalidCiphertextEncoding`] if `text` is not hex.
pub fn decrypt_hex<K: PrivateKeyParts + ?Sized>(key: &K, text: &str) -> Result<Vec<u8>> {
    let ciphertext = codec::decode_hex(text.trim())?;
    decrypt(key, &ciphertext)
}

impl Encryptor for PublicKey {
    fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>> {
        encrypt(self, msg)
    }
}

impl Decryptor for PrivateKey {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt(self, ciphertext)
    }
}

impl Encryptor for KeyPair {
    fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>> {
        encrypt(self.public_key(), msg)
    }
}

impl Decryptor for KeyPair {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt(self.private_key(), ciphertext)
    }
}
