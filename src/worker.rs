//! Key generation off the caller's thread.
//!
//! Generation is CPU bound, so it runs on tokio's blocking pool and its
//! outcome is delivered exactly once through the returned future.
//!
//! Dropping the future does not stop a generation that is already running;
//! its result is simply discarded.

use crate::errors::{Error, Result};
use crate::key::{KeyPair, KeyPairBuilder};

/// Generate a key pair with the given parameters on the blocking pool.
///
/// Must be awaited from within a tokio runtime. A generation task that
/// panics or is cancelled by runtime shutdown is reported as
/// [`Error::KeyGenerationFailure`].
pub async fn generate_key_pair(builder: KeyPairBuilder) -> Result<KeyPair> {
    let bits = builder.bit_size();
    tracing::debug!(bits, "spawning key generation");

    tokio::task::spawn_blocking(move || builder.build())
        .await
        .map_err(|err| {
            tracing::debug!(bits, error = %err, "key generation task did not complete");
            Error::KeyGenerationFailure
        })?
}

/// Generate a key pair of `bits` bits with the default parameters on the
/// blocking pool.
pub async fn generate(bits: usize) -> Result<KeyPair> {
    generate_key_pair(KeyPairBuilder::new().bits(bits)).await
}
