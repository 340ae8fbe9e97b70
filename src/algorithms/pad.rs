//! Special handling for converting the BigUint to u8 vectors

use alloc::vec::Vec;
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Returns a new vector of the given length, with 0s left padded.
#[inline]
pub(crate) fn left_pad(input: &[u8], padded_len: usize) -> Result<Vec<u8>> {
    if input.len() > padded_len {
        return Err(Error::BlockOverflow);
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    Ok(out)
}

/// Converts input to the new vector of the given length, using BE and with 0s left padded.
///
/// Zero is encoded as `padded_len` zero bytes; a `padded_len` of 0 only
/// accepts zero.
#[inline]
pub(crate) fn uint_to_be_pad(input: &BigUint, padded_len: usize) -> Result<Vec<u8>> {
    let bytes = Zeroizing::new(significant_bytes(input));
    left_pad(&bytes, padded_len)
}

/// Big-endian bytes of `input` without leading zeros; zero has no bytes.
fn significant_bytes(input: &BigUint) -> Vec<u8> {
    let mut bytes = input.to_bytes_be();
    let leading = bytes.iter().take_while(|b| **b == 0).count();
    bytes.drain(..leading);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_left_pad() {
        const INPUT_LEN: usize = 3;
        let input = vec![0u8; INPUT_LEN];

        // input len < padded len
        let padded = left_pad(&input, INPUT_LEN + 1).unwrap();
        assert_eq!(padded.len(), INPUT_LEN + 1);

        // input len == padded len
        let padded = left_pad(&input, INPUT_LEN).unwrap();
        assert_eq!(padded.len(), INPUT_LEN);

        // input len > padded len
        let padded = left_pad(&input, INPUT_LEN - 1);
        assert_eq!(padded, Err(Error::BlockOverflow));
    }

    #[test]
    fn test_uint_to_be_pad() {
        let value = BigUint::from(0x0102u32);
        assert_eq!(uint_to_be_pad(&value, 4).unwrap(), vec![0, 0, 1, 2]);
        assert_eq!(uint_to_be_pad(&value, 2).unwrap(), vec![1, 2]);
        assert_eq!(uint_to_be_pad(&value, 1), Err(Error::BlockOverflow));

        assert_eq!(uint_to_be_pad(&BigUint::zero(), 3).unwrap(), vec![0, 0, 0]);
        assert_eq!(uint_to_be_pad(&BigUint::zero(), 0).unwrap(), Vec::<u8>::new());
    }
}
