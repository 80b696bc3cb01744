use std::fmt;

use zeroize::Zeroize;

use crate::error::{Error, fixed};
use crate::utils::bin2hex;
use crate::{SIGN_KEYPAIRBYTES, SIGN_PUBLICKEYBYTES, SIGN_SECRETKEYBYTES};

/// A signing key pair: the secret seed followed by the public key.
///
/// The seed is the only secret. Signing re-expands it with SHA-512 on every
/// call, so nothing derived from it is cached here.
///
/// `KeyPair` does not wipe itself on drop. Call [`Zeroize::zeroize`] (or
/// [`crate::utils::memzero`] on exported bytes) once the key is no longer
/// needed.
#[derive(Clone, Zeroize)]
pub struct KeyPair {
    seed: [u8; SIGN_SECRETKEYBYTES],
    public_key: [u8; SIGN_PUBLICKEYBYTES],
}

impl KeyPair {
    pub(crate) fn from_parts(
        seed: &[u8; SIGN_SECRETKEYBYTES],
        public_key: &[u8; SIGN_PUBLICKEYBYTES],
    ) -> Self {
        KeyPair {
            seed: *seed,
            public_key: *public_key,
        }
    }

    /// Restores a key pair from its 64-byte serialization.
    ///
    /// The public half is taken as is; it is not recomputed from the seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = fixed::<SIGN_KEYPAIRBYTES>(bytes, "key pair")?;

        let mut seed = [0u8; SIGN_SECRETKEYBYTES];
        let mut public_key = [0u8; SIGN_PUBLICKEYBYTES];
        seed.copy_from_slice(&bytes[..SIGN_SECRETKEYBYTES]);
        public_key.copy_from_slice(&bytes[SIGN_SECRETKEYBYTES..]);

        Ok(KeyPair { seed, public_key })
    }

    /// Returns the 64-byte serialization `seed || public_key`.
    pub fn to_bytes(&self) -> [u8; SIGN_KEYPAIRBYTES] {
        let mut out = [0u8; SIGN_KEYPAIRBYTES];
        out[..SIGN_SECRETKEYBYTES].copy_from_slice(&self.seed);
        out[SIGN_SECRETKEYBYTES..].copy_from_slice(&self.public_key);
        out
    }

    /// Returns the public half.
    pub fn public_key(&self) -> [u8; SIGN_PUBLICKEYBYTES] {
        self.public_key
    }

    /// Returns the secret seed.
    pub fn secret_key(&self) -> [u8; SIGN_SECRETKEYBYTES] {
        self.seed
    }

    pub(crate) fn seed(&self) -> &[u8; SIGN_SECRETKEYBYTES] {
        &self.seed
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &bin2hex(&self.public_key))
            .finish_non_exhaustive()
    }
}
