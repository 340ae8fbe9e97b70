use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::algorithms::generate::generate_key_with_exp;
use crate::algorithms::pad::uint_to_be_pad;
pub use crate::algorithms::generate::MIN_KEY_BITS;
use crate::errors::{Error, Result};
use crate::math::carmichael_totient;
use crate::prime::{is_probable_prime, DEFAULT_MR_ROUNDS};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Default modulus size, in bits.
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Conventional public exponent, `2^16 + 1`.
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Default number of discarded generation attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Smallest modulus, in bits, that fits a one byte message block.
pub const MIN_MODULUS_BITS: usize = 9;

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PublicKey {
    /// Modulus: product of prime numbers `p` and `q`
    n: BigUint,
    /// Public exponent: power to which a plaintext message is raised in
    /// order to encrypt it.
    e: BigUint,
}

/// Represents the private part of an RSA key.
///
/// The private exponent and the prime factors are zeroized on drop.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrivateKey {
    /// Modulus
    n: BigUint,
    /// Private exponent
    d: BigUint,
    /// Prime factors of N. Empty for keys which were not generated locally.
    #[cfg_attr(feature = "serde", serde(default))]
    primes: Vec<BigUint>,
}

impl PublicKeyParts for PublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PublicKey {
    /// Create a new public key from its components.
    ///
    /// The modulus must have at least [`MIN_MODULUS_BITS`] bits and the
    /// exponent must lie in `[2, n)`.
    pub fn new(e: BigUint, n: BigUint) -> Result<Self> {
        check_modulus(&n)?;

        if e < BigUint::from(2u32) || e >= n {
            return Err(Error::InvalidExponent);
        }

        Ok(Self { n, e })
    }
}

impl PrivateKeyParts for PrivateKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn d(&self) -> &BigUint {
        &self.d
    }

    fn primes(&self) -> &[BigUint] {
        &self.primes
    }
}

impl PrivateKey {
    /// Create a private key from the private exponent and the modulus.
    ///
    /// The modulus must have at least [`MIN_MODULUS_BITS`] bits and the
    /// exponent must lie in `[1, n)`.
    pub fn new(d: BigUint, n: BigUint) -> Result<Self> {
        check_modulus(&n)?;

        if d.is_zero() || d >= n {
            return Err(Error::InvalidExponent);
        }

        Ok(Self {
            n,
            d,
            primes: Vec::new(),
        })
    }
}

impl PartialEq for PrivateKey {
    /// Compares the modulus and, in constant time, the private exponent.
    /// Prime factors are not part of the comparison, so a key equals its
    /// decoded text form.
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && bool::from(self.ct_eq(other))
    }
}

impl Eq for PrivateKey {}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        let width = self.size().max(other.size());
        match (uint_to_be_pad(&self.d, width), uint_to_be_pad(&other.d, width)) {
            (Ok(lhs), Ok(rhs)) => {
                let (lhs, rhs) = (Zeroizing::new(lhs), Zeroizing::new(rhs));
                lhs.as_slice().ct_eq(rhs.as_slice())
            }
            _ => Choice::from(0),
        }
    }
}

impl Hash for PrivateKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Domain separator for private keys
        state.write(b"PrivateKey");
        Hash::hash(&self.n, state);
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n", &self.n)
            .field("d", &"...")
            .field("primes", &self.primes.len())
            .finish()
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
        for prime in self.primes.iter_mut() {
            prime.zeroize();
        }
        self.primes.clear();
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for PrivateKey {}

fn check_modulus(n: &BigUint) -> Result<()> {
    if n.bits() < MIN_MODULUS_BITS {
        return Err(Error::InvalidModulus);
    }
    Ok(())
}

/// A public key together with its matching private key.
///
/// Produced atomically by one generation call and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl KeyPair {
    /// Generate a new key pair of the given bit size with the default
    /// public exponent, using the operating system's random source.
    #[cfg(feature = "getrandom")]
    pub fn generate(bits: usize) -> Result<Self> {
        KeyPairBuilder::new().bits(bits).build()
    }

    /// Generate a new key pair of the given bit size with the default
    /// public exponent, using the passed in `rng`.
    pub fn generate_with_rng<R: CryptoRngCore + ?Sized>(rng: &mut R, bits: usize) -> Result<Self> {
        KeyPairBuilder::new().bits(bits).build_with_rng(rng)
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Returns the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Splits the pair into its public and private keys.
    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public, self.private)
    }

    /// Performs basic sanity checks on the key pair.
    ///
    /// Checks that `n = p * q` for two distinct probable primes,
    /// `1 < e < λ(n)` and `e * d ≡ 1 (mod λ(n))`. Returns
    /// [`Error::KeyGenerationFailure`] if any of them does not hold.
    pub fn validate_with_rng<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<()> {
        let [p, q] = match self.private.primes.as_slice() {
            [p, q] => [p, q],
            _ => return Err(Error::KeyGenerationFailure),
        };

        if p == q
            || &(p * q) != self.public.n()
            || self.public.n() != self.private.n()
            || !is_probable_prime(rng, p, DEFAULT_MR_ROUNDS)
            || !is_probable_prime(rng, q, DEFAULT_MR_ROUNDS)
        {
            return Err(Error::KeyGenerationFailure);
        }

        let lambda = carmichael_totient(p, q);
        let e = self.public.e();
        if e <= &BigUint::one() || e >= &lambda || !e.gcd(&lambda).is_one() {
            return Err(Error::KeyGenerationFailure);
        }

        if !((e * self.private.d()) % &lambda).is_one() {
            return Err(Error::KeyGenerationFailure);
        }

        Ok(())
    }

    /// [`KeyPair::validate_with_rng`] using the operating system's random source.
    #[cfg(feature = "getrandom")]
    pub fn validate(&self) -> Result<()> {
        self.validate_with_rng(&mut rand_core::OsRng)
    }
}

impl From<&KeyPair> for PublicKey {
    fn from(pair: &KeyPair) -> Self {
        pair.public.clone()
    }
}

/// Recommended modulus sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 1024-bit modulus.
    Bits1024,
    /// 2048-bit modulus.
    #[default]
    Bits2048,
    /// 4096-bit modulus.
    Bits4096,
}

impl KeySize {
    /// Returns the modulus size in bits.
    pub const fn bits(self) -> usize {
        match self {
            KeySize::Bits1024 => 1024,
            KeySize::Bits2048 => 2048,
            KeySize::Bits4096 => 4096,
        }
    }
}

impl From<KeySize> for usize {
    fn from(size: KeySize) -> usize {
        size.bits()
    }
}

impl TryFrom<usize> for KeySize {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        match bits {
            1024 => Ok(KeySize::Bits1024),
            2048 => Ok(KeySize::Bits2048),
            4096 => Ok(KeySize::Bits4096),
            _ => Err(Error::InvalidBitLength),
        }
    }
}

/// Builder for key pairs with non-default generation parameters.
///
/// ```
/// use rsa_textbook::{KeyPairBuilder, KeySize};
/// use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
///
/// let mut rng = ChaCha8Rng::from_seed([7; 32]);
/// let pair = KeyPairBuilder::new()
///     .key_size(KeySize::Bits1024)
///     .mr_rounds(32)
///     .build_with_rng(&mut rng)
///     .expect("failed to generate a key");
/// assert!(pair.validate_with_rng(&mut rng).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct KeyPairBuilder {
    bits: usize,
    public_exponent: BigUint,
    mr_rounds: usize,
    max_attempts: usize,
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self {
            bits: DEFAULT_KEY_BITS,
            public_exponent: BigUint::from(DEFAULT_PUBLIC_EXPONENT),
            mr_rounds: DEFAULT_MR_ROUNDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl KeyPairBuilder {
    /// Create a builder with the default parameters: 2048 bits, exponent
    /// 65537, 20 Miller-Rabin rounds, 64 attempts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the modulus size in bits.
    pub fn bits(mut self, bits: usize) -> Self {
        self.bits = bits;
        self
    }

    /// Set the modulus size from one of the recommended sizes.
    pub fn key_size(self, size: KeySize) -> Self {
        self.bits(size.bits())
    }

    /// Set the public exponent. It must be odd and greater than one.
    pub fn public_exponent(mut self, exp: BigUint) -> Self {
        self.public_exponent = exp;
        self
    }

    /// Set the number of Miller-Rabin rounds per prime candidate.
    /// Values below one are raised to one.
    pub fn mr_rounds(mut self, rounds: usize) -> Self {
        self.mr_rounds = rounds.max(1);
        self
    }

    /// Set how many attempts may be discarded (equal primes, exponent not
    /// coprime to `λ(n)`) before generation fails.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Returns the configured modulus size in bits.
    pub fn bit_size(&self) -> usize {
        self.bits
    }

    /// Generate a key pair using the passed in `rng`.
    pub fn build_with_rng<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<KeyPair> {
        let components = generate_key_with_exp(
            rng,
            self.bits,
            &self.public_exponent,
            self.mr_rounds,
            self.max_attempts,
        )?;

        let public = PublicKey {
            n: components.n.clone(),
            e: components.e,
        };
        let [p, q] = components.primes;
        let private = PrivateKey {
            n: components.n,
            d: components.d,
            primes: vec![p, q],
        };

        Ok(KeyPair { public, private })
    }

    /// Generate a key pair using the operating system's random source.
    #[cfg(feature = "getrandom")]
    pub fn build(&self) -> Result<KeyPair> {
        self.build_with_rng(&mut rand_core::OsRng)
    }
}
