//! Caller-owned key state.
//!
//! The core itself is stateless. A caller that needs to remember whether a
//! key has been generated holds a [`Session`] value and threads it through
//! its own flow; there is no global "current key".

use alloc::vec::Vec;

use crate::cipher;
use crate::errors::{Error, Result};
use crate::key::KeyPair;

/// Whether a key pair is available to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No key has been generated yet, or the session was reset.
    #[default]
    NoKey,
    /// A key pair has been generated and can be used.
    KeyGenerated(KeyPair),
}

impl Session {
    /// Create a session without a key.
    pub fn new() -> Self {
        Session::NoKey
    }

    /// Store a freshly generated key pair, replacing any previous one.
    pub fn install(&mut self, pair: KeyPair) {
        *self = Session::KeyGenerated(pair);
    }

    /// Forget the key pair and return to [`Session::NoKey`].
    pub fn reset(&mut self) {
        *self = Session::NoKey;
    }

    /// Returns the key pair, if one has been generated.
    pub fn key_pair(&self) -> Option<&KeyPair> {
        match self {
            Session::NoKey => None,
            Session::KeyGenerated(pair) => Some(pair),
        }
    }

    /// Returns `true` if a key pair is available.
    pub fn has_key(&self) -> bool {
        self.key_pair().is_some()
    }

    /// Encrypts `msg` with the session's public key.
    ///
    /// Fails with [`Error::MissingKey`] in [`Session::NoKey`].
    pub fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>> {
        let pair = self.key_pair().ok_or(Error::MissingKey)?;
        cipher::encrypt(pair.public_key(), msg)
    }

    /// Decrypts `ciphertext` with the session's private key.
    ///
    /// Fails with [`Error::MissingKey`] in [`Session::NoKey`].
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let pair = self.key_pair().ok_or(Error::MissingKey)?;
        cipher::decrypt(pair.private_key(), ciphertext)
    }
}

impl From<KeyPair> for Session {
    fn from(pair: KeyPair) -> Self {
        Session::KeyGenerated(pair)
    }
}
