//! Generate prime components for the RSA key pair

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::{
    errors::{Error, Result},
    math::{carmichael_totient, mod_inverse},
    prime::generate_prime,
};

/// Smallest modulus size, in bits, accepted by key generation.
///
/// Two 9-bit primes, the first size whose `λ(n)` can exceed the default
/// public exponent `65537`.
pub const MIN_KEY_BITS: usize = 18;

pub(crate) struct KeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub primes: [BigUint; 2],
}

/// Generates a two-prime RSA key of the given bit size and public exponent.
///
/// `p` gets `bit_size / 2` bits and `q` the remaining bits, so `n = p * q`
/// has exactly `bit_size` bits. The private exponent is the inverse of `exp`
/// modulo Carmichael's totient `λ(n) = lcm(p - 1, q - 1)`.
///
/// Each attempt draws fresh primes; an attempt is discarded when `q == p`
/// persists, or when `exp` is not a valid exponent for the drawn `λ`. After
/// `max_attempts` discarded attempts the generation fails.
pub(crate) fn generate_key_with_exp<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
    exp: &BigUint,
    rounds: usize,
    max_attempts: usize,
) -> Result<KeyComponents> {
    if bit_size < MIN_KEY_BITS {
        return Err(Error::InvalidBitLength);
    }

    // λ(n) < 2^(bit_size - 1), so such an exponent can never be below it.
    if exp.bits() >= bit_size {
        return Err(Error::InvalidBitLength);
    }

    // λ(n) is always even, so an even exponent is never coprime to it.
    if exp <= &BigUint::one() || exp.is_even() {
        return Err(Error::KeyGenerationFailure);
    }

    let p_bits = bit_size / 2;
    let q_bits = bit_size - p_bits;

    for attempt in 0..max_attempts {
        let p = generate_prime(rng, p_bits, rounds)?;
        let mut q = generate_prime(rng, q_bits, rounds)?;

        let mut redraws = 0;
        while q == p && redraws < max_attempts {
            q = generate_prime(rng, q_bits, rounds)?;
            redraws += 1;
        }
        if q == p {
            tracing::debug!(attempt, "could not draw two distinct primes");
            continue;
        }

        let n = &p * &q;
        if n.bits() != bit_size {
            // This should never happen because generate_prime sets the top
            // two bits in each prime.
            continue;
        }

        let lambda = carmichael_totient(&p, &q);
        if exp >= &lambda {
            tracing::debug!(attempt, "public exponent is not below λ(n), retrying");
            continue;
        }

        match mod_inverse(exp, &lambda) {
            Some(d) => {
                return Ok(KeyComponents {
                    n,
                    e: exp.clone(),
                    d,
                    primes: [p, q],
                })
            }
            None => {
                tracing::debug!(attempt, "public exponent shares a factor with λ(n), retrying");
            }
        }
    }

    tracing::debug!(bit_size, max_attempts, "key generation attempts exhausted");
    Err(Error::KeyGenerationFailure)
}
