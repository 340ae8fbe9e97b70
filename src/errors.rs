//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-textbook` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Requested bit length is too small to yield a usable prime or key.
    InvalidBitLength,

    /// Prime or key generation exhausted its retry budget.
    KeyGenerationFailure,

    /// Key text or an encoded integer could not be decoded.
    InvalidKeyEncoding,

    /// Plaintext to encrypt is empty.
    EmptyMessage,

    /// No key has been generated or supplied.
    MissingKey,

    /// Ciphertext length is not a positive multiple of the block width.
    CiphertextLengthMismatch,

    /// A block value does not fit below the modulus or its byte width.
    BlockOverflow,

    /// Ciphertext text is not valid hexadecimal.
    InvalidCiphertextEncoding,

    /// Modulus is too small to hold a single message block.
    InvalidModulus,

    /// Exponent is outside of `[2, n)` (public) or `[1, n)` (private).
    InvalidExponent,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidBitLength => write!(f, "invalid bit length"),
            Error::KeyGenerationFailure => write!(f, "key generation failed"),
            Error::InvalidKeyEncoding => write!(f, "invalid key encoding"),
            Error::EmptyMessage => write!(f, "message is empty"),
            Error::MissingKey => write!(f, "no key available"),
            Error::CiphertextLengthMismatch => {
                write!(f, "ciphertext length is not a multiple of the block width")
            }
            Error::BlockOverflow => write!(f, "block value out of range"),
            Error::InvalidCiphertextEncoding => write!(f, "invalid ciphertext encoding"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
        }
    }
}
