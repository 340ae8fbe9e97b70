//! Encryption-related traits.

use alloc::vec::Vec;

use crate::errors::Result;

/// Encrypt a message with a public key.
pub trait Encryptor {
    /// Encrypt the given message.
    fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>>;
}

/// Decrypt the given message
pub trait Decryptor {
    /// Decrypt the given message.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
