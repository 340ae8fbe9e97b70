//! RSA-related trait definitions.

mod encryption;
pub(crate) mod keys;

pub use encryption::{Decryptor, Encryptor};
pub use keys::{PrivateKeyParts, PublicKeyParts};
