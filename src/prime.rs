//! Probable prime generation and Miller-Rabin primality checks.

use alloc::vec::Vec;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::errors::{Error, Result};

/// Smallest prime size, in bits, accepted by [`generate_prime`].
pub const MIN_PRIME_BITS: usize = 8;

/// Default number of Miller-Rabin rounds.
///
/// A composite survives a single round with probability at most ¼, so the
/// default leaves an error probability below 2⁻⁴⁰.
pub const DEFAULT_MR_ROUNDS: usize = 20;

/// Candidates drawn per requested bit before [`generate_prime`] gives up.
const CANDIDATES_PER_BIT: usize = 64;

/// Records the primes < 64.
const PRIME_BIT_MASK: u64 = 1 << 2
    | 1 << 3
    | 1 << 5
    | 1 << 7
    | 1 << 11
    | 1 << 13
    | 1 << 17
    | 1 << 19
    | 1 << 23
    | 1 << 29
    | 1 << 31
    | 1 << 37
    | 1 << 41
    | 1 << 43
    | 1 << 47
    | 1 << 53
    | 1 << 59
    | 1 << 61;

/// A list of small, odd primes that allows us to rapidly exclude some
/// fraction of composite candidates before running Miller-Rabin.
const SMALL_PRIMES: [u32; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// Generate a random probable prime of exactly `bit_length` bits.
///
/// The two most significant bits of every candidate are set, so the product
/// of two primes of `b` bits has exactly `2b` bits, and the lowest bit is set
/// to make the candidate odd. Candidates are screened by trial division and
/// then by `rounds` rounds of Miller-Rabin.
///
/// # Errors
///
/// - [`Error::InvalidBitLength`] if `bit_length < MIN_PRIME_BITS`.
/// - [`Error::KeyGenerationFailure`] if no prime is found within the candidate budget.
pub fn generate_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    rounds: usize,
) -> Result<BigUint> {
    if bit_length < MIN_PRIME_BITS {
        return Err(Error::InvalidBitLength);
    }

    let mut b = bit_length % 8;
    if b == 0 {
        b = 8;
    }

    let bytes_len = (bit_length + 7) / 8;
    let mut bytes: Vec<u8> = vec![0u8; bytes_len];

    for _ in 0..bit_length.saturating_mul(CANDIDATES_PER_BIT) {
        rng.fill_bytes(&mut bytes);
        // Clear bits in the first byte to make sure the candidate has a size <= bits.
        bytes[0] &= ((1u32 << b) - 1) as u8;

        // Set the two most significant bits so that the product of two
        // such values is never one bit short.
        if b >= 2 {
            bytes[0] |= 3u8 << (b - 2);
        } else {
            bytes[0] |= 1;
            bytes[1] |= 0x80;
        }

        // Make the value odd since an even number this large certainly isn't prime.
        bytes[bytes_len - 1] |= 1;

        let candidate = BigUint::from_bytes_be(&bytes);
        if is_probable_prime(rng, &candidate, rounds) {
            bytes.zeroize();
            return Ok(candidate);
        }

        tracing::trace!(bit_length, "rejected composite prime candidate");
    }

    bytes.zeroize();
    tracing::debug!(bit_length, "prime candidate budget exhausted");
    Err(Error::KeyGenerationFailure)
}

/// Reports whether `n` is probably prime.
///
/// Values below 64 are answered exactly. Larger values are trial-divided by
/// the small primes and then subjected to `rounds` rounds of Miller-Rabin
/// with bases drawn from `rng` (at least one round is always performed).
///
/// If `n` is prime this always returns `true`. If `n` is composite it returns
/// `true` with probability at most ¼ʳᵒᵘⁿᵈˢ.
pub fn is_probable_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, n: &BigUint, rounds: usize) -> bool {
    if let Some(small) = n.to_u64() {
        if small < 64 {
            return PRIME_BIT_MASK & (1 << small) != 0;
        }
    }

    if n.is_even() {
        return false;
    }

    for prime in SMALL_PRIMES {
        if (n % prime).is_zero() {
            return false;
        }
    }

    miller_rabin(rng, n, rounds.max(1))
}

/// Reports whether the odd `n > 3` passes `reps` rounds of the Miller-Rabin
/// test with bases chosen uniformly from `[2, n - 2]`.
/// See Handbook of Applied Cryptography, p. 139, Algorithm 4.24.
fn miller_rabin<R: CryptoRngCore + ?Sized>(rng: &mut R, n: &BigUint, reps: usize) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let nm1 = n - &one;

    // determine q, k such that nm1 = q << k
    let mut q = nm1.clone();
    let mut k = 0usize;
    while q.is_even() {
        q >>= 1;
        k += 1;
    }

    'next: for _ in 0..reps {
        let base = rng.gen_biguint_range(&two, &nm1);

        let mut y = base.modpow(&q, n);
        if y.is_one() || y == nm1 {
            continue;
        }

        for _ in 1..k {
            y = y.modpow(&two, n);
            if y == nm1 {
                continue 'next;
            }
            if y.is_one() {
                return false;
            }
        }

        return false;
    }

    true
}
