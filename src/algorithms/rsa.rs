//! Raw RSA block primitives.
//!
//! These apply modular exponentiation to a single block with no padding.
//! Message framing lives in [`crate::cipher`].

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{Error, Result};

/// Raw RSA encryption of a single block, `m^e mod n`.
///
/// Returns [`Error::BlockOverflow`] unless `0 <= m < n`.
#[inline]
pub fn encrypt_block(m: &BigUint, e: &BigUint, n: &BigUint) -> Result<BigUint> {
    apply(m, e, n)
}

/// Raw RSA decryption of a single block, `c^d mod n`.
///
/// Returns [`Error::BlockOverflow`] unless `0 <= c < n`.
#[inline]
pub fn decrypt_block(c: &BigUint, d: &BigUint, n: &BigUint) -> Result<BigUint> {
    apply(c, d, n)
}

/// Square-and-multiply exponentiation of a block reduced below `n`.
fn apply(block: &BigUint, exp: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() || block >= n {
        return Err(Error::BlockOverflow);
    }

    Ok(block.modpow(exp, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    // p = 61, q = 53, λ = 780, e = 17, d = 413
    fn toy_key() -> (BigUint, BigUint, BigUint) {
        (
            BigUint::from(3233u32),
            BigUint::from(17u32),
            BigUint::from(413u32),
        )
    }

    #[test]
    fn test_textbook_vector() {
        let (n, e, d) = toy_key();
        let m = BigUint::from(65u32);

        let c = encrypt_block(&m, &e, &n).unwrap();
        assert_eq!(c, BigUint::from(2790u32));
        assert_eq!(decrypt_block(&c, &d, &n).unwrap(), m);
    }

    #[test]
    fn test_every_block_below_modulus() {
        let (n, e, d) = toy_key();
        let mut m = BigUint::zero();
        while m < n {
            let c = encrypt_block(&m, &e, &n).unwrap();
            assert!(c < n);
            assert_eq!(decrypt_block(&c, &d, &n).unwrap(), m);
            m += BigUint::one();
        }
    }

    #[test]
    fn test_block_overflow() {
        let (n, e, d) = toy_key();
        assert_eq!(encrypt_block(&n, &e, &n), Err(Error::BlockOverflow));
        assert_eq!(
            decrypt_block(&(&n + BigUint::one()), &d, &n),
            Err(Error::BlockOverflow)
        );
        assert_eq!(
            encrypt_block(&BigUint::zero(), &e, &BigUint::zero()),
            Err(Error::BlockOverflow)
        );
    }
}
