//! Number theory helpers used by key generation.

use core::mem;

use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint, IntoBigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Calculate the [modular multiplicative
/// inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse) of `a` modulo `m`
/// with the extended Euclidean algorithm.
///
/// Returns `None` if `gcd(a, m) != 1` or `m < 2`.
pub(crate) fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m <= &BigUint::one() {
        return None;
    }

    let m_int = BigInt::from_biguint(Plus, m.clone());

    // Invariant: old_s * a ≡ old_r (mod m) and s * a ≡ r (mod m).
    let mut old_r = BigInt::from_biguint(Plus, a % m);
    let mut r = m_int.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }

    let mut inverse = old_s % &m_int;
    if inverse.is_negative() {
        inverse += &m_int;
    }

    inverse.into_biguint()
}

/// Carmichael's totient for `n = p * q`, `λ(n) = lcm(p - 1, q - 1)`.
pub(crate) fn carmichael_totient(p: &BigUint, q: &BigUint) -> BigUint {
    let one = BigUint::one();
    (p - &one).lcm(&(q - &one))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn test_mod_inverse() {
        let tests = [
            ["1234567", "458948883992"],
            ["239487239847", "2410312426921032588552076022197566074856950548502459942654116941958108831682612228890093858261341614673227141477904012196503648957050582631942730706805009223062734745341073406696246014589361659774041027169249453200378729434170325843778659198143763193776859869524088940195577346119843545301547043747207749969763750084308926339295559968882457872412993810129130294592999947926365264059284647209730384947211681434464714438488520940127459844288859336526896320919633919"],
        ];

        for test in &tests {
            let element = BigUint::parse_bytes(test[0].as_bytes(), 10).unwrap();
            let modulus = BigUint::parse_bytes(test[1].as_bytes(), 10).unwrap();

            let inverse = mod_inverse(&element, &modulus).unwrap();
            assert!(inverse < modulus);
            assert_eq!(
                (&inverse * &element) % &modulus,
                BigUint::one(),
                "mod_inverse({}, {})",
                element,
                modulus,
            );
        }

        // exhaustive tests for small numbers
        for n in 2..100u64 {
            let modulus = BigUint::from_u64(n).unwrap();
            for x in 1..n {
                let element = BigUint::from_u64(x).unwrap();
                let inverse = mod_inverse(&element, &modulus);

                if !element.gcd(&modulus).is_one() {
                    assert!(inverse.is_none(), "{} has no inverse mod {}", x, n);
                    continue;
                }

                let inverse = inverse.unwrap();
                assert_eq!((&inverse * &element) % &modulus, BigUint::one());
            }
        }
    }

    #[test]
    fn test_mod_inverse_degenerate_modulus() {
        let three = BigUint::from_u64(3).unwrap();
        assert!(mod_inverse(&three, &BigUint::zero()).is_none());
        assert!(mod_inverse(&three, &BigUint::one()).is_none());
    }

    #[test]
    fn test_carmichael_totient() {
        let p = BigUint::from_u64(61).unwrap();
        let q = BigUint::from_u64(53).unwrap();
        // lcm(60, 52) = 780
        assert_eq!(carmichael_totient(&p, &q), BigUint::from_u64(780).unwrap());
    }
}
