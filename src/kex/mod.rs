// Copyright 2020 Hyperledger Ursa Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! A suite of elliptic curve Diffie-Hellman key exchange methods.

use crate::errors::{KexError, KexResult};
use crate::keys::{KeyGenOption, PrivateKey, PublicKey, SharedSecret};
use arrayref::array_ref;
use log::warn;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use sha2::Digest;

/// The operations every key exchange scheme provides.
///
/// Implementations hold only immutable curve parameters, so a single instance can be
/// shared by any number of concurrent exchanges.
pub trait KeyExchange {
    /// Create a new key pair with entropy drawn from `rng`.
    ///
    /// Fails with [`KexError::EntropyError`] when `rng` cannot supply enough bytes.
    fn generate_key<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> KexResult<(PublicKey, PrivateKey)>;

    /// Create new keypairs. If
    /// `option` is None, the keys are generated ephemerally from the `OsRng`
    /// `option` is UseSeed, the keys are generated from a `ChaChaRng` seeded with the
    ///     sha256 hash of the seed
    /// `option` is FromSecretKey, the corresponding public key is returned. This should be used
    ///     for static Diffie-Hellman and loading a long-term key.
    fn keypair(&self, option: Option<KeyGenOption>) -> KexResult<(PublicKey, PrivateKey)> {
        match option {
            Some(mut o) => match o {
                KeyGenOption::UseSeed(ref mut seed) => {
                    let hash = sha2::Sha256::digest(seed.as_slice());
                    zeroize::Zeroize::zeroize(seed);
                    let mut rng = ChaChaRng::from_seed(*array_ref!(&hash[..], 0, 32));
                    self.generate_key(&mut rng)
                }
                KeyGenOption::FromSecretKey(ref sk) => {
                    let pk = self.public_key(sk)?;
                    Ok((pk, sk.clone()))
                }
            },
            None => self.generate_key(&mut OsRng),
        }
    }

    /// Recompute the public key of `private`.
    ///
    /// Fails with [`KexError::PreconditionViolated`] when `private` cannot be used with
    /// this scheme.
    fn public_key(&self, private: &PrivateKey) -> KexResult<PublicKey>;

    /// Verify that `peer_public` can be used in [`compute_secret`](KeyExchange::compute_secret).
    ///
    /// This must succeed before any externally supplied public key is trusted.
    fn check(&self, peer_public: &PublicKey) -> KexResult<()>;

    /// Compute the shared secret of `local_private` and the peer's public key.
    ///
    /// `peer_public` must have passed [`check`](KeyExchange::check). The result for
    /// keys that have not is unspecified.
    fn compute_secret(
        &self,
        local_private: &PrivateKey,
        peer_public: &PublicKey,
    ) -> KexResult<SharedSecret>;

    /// Length of an encoded public key
    fn public_key_size(&self) -> usize;
    /// Length of a private key
    fn private_key_size(&self) -> usize;
    /// Maximum length of a shared secret
    fn shared_secret_size(&self) -> usize;
}

/// Fill `buf` from `rng`, reporting a short read as [`KexError::EntropyError`]
pub(crate) fn fill_random<R: RngCore + CryptoRng>(rng: &mut R, buf: &mut [u8]) -> KexResult<()> {
    let len = buf.len();
    rng.try_fill_bytes(buf).map_err(|e| {
        warn!("entropy source failed to supply {} bytes", len);
        KexError::EntropyError(e.to_string())
    })
}

pub mod curve;
#[cfg(any(
    feature = "p256",
    feature = "p384",
    feature = "p521",
    feature = "k256"
))]
pub mod ecc;
pub mod generic;
pub mod point;
#[cfg(feature = "x25519")]
pub mod x25519;
