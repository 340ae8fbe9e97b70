//! Traits related to the key components

use num_bigint::BigUint;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bytes. Every ciphertext block produced
    /// for this public key has this width.
    fn size(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}

/// Components of an RSA private key.
pub trait PrivateKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the private exponent of the key.
    fn d(&self) -> &BigUint;

    /// Returns the prime factors, if the key was generated locally.
    ///
    /// Keys decoded from text carry no primes and return an empty slice.
    fn primes(&self) -> &[BigUint];

    /// Returns the modulus size in bytes, the width of a ciphertext block.
    fn size(&self) -> usize {
        (self.n().bits() + 7) / 8
    }
}
