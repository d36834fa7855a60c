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
//! ECDH over Curve25519 (X25519).
//!
//! Any 32 byte string is accepted as a peer public key. Low order peer points yield an
//! all-zero shared secret which is returned as is; callers that need to detect this must
//! compare the secret against zero themselves.

use super::*;
use arrayref::array_ref;
use log::{debug, trace};
use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};
use zeroize::Zeroize;

/// Length of X25519 private keys, public keys and shared secrets
pub const KEY_SIZE: usize = 32;

/// Apply the Curve25519 private key bit mask (<https://cr.yp.to/ecdh.html>):
/// clears the three low bits and the top bit and sets the second highest bit.
pub fn clamp(scalar: &mut [u8; KEY_SIZE]) {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
}

/// Key exchange over Curve25519
#[derive(Clone, Copy, Debug, Default)]
pub struct X25519;

impl X25519 {
    /// Create the scheme
    pub fn new() -> Self {
        Self
    }
}

fn to_array(bytes: &[u8], what: &str) -> KexResult<[u8; KEY_SIZE]> {
    if bytes.len() != KEY_SIZE {
        debug!("x25519: {} of {} bytes", what, bytes.len());
        return Err(KexError::PreconditionViolated(format!(
            "{} is not {} bytes",
            what, KEY_SIZE
        )));
    }
    Ok(*array_ref!(bytes, 0, KEY_SIZE))
}

impl KeyExchange for X25519 {
    fn generate_key<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> KexResult<(PublicKey, PrivateKey)> {
        let mut sk = [0u8; KEY_SIZE];
        fill_random(rng, &mut sk)?;
        clamp(&mut sk);
        let pk = x25519(sk, X25519_BASEPOINT_BYTES);
        let private = PrivateKey(sk.to_vec());
        sk.zeroize();
        trace!("x25519: generated key pair");
        Ok((PublicKey(pk.to_vec()), private))
    }

    /// The private key is used as given: it is expected to be clamped already.
    fn public_key(&self, private: &PrivateKey) -> KexResult<PublicKey> {
        let mut sk = to_array(private.as_bytes(), "private key")?;
        let pk = x25519(sk, X25519_BASEPOINT_BYTES);
        sk.zeroize();
        Ok(PublicKey(pk.to_vec()))
    }

    fn check(&self, peer_public: &PublicKey) -> KexResult<()> {
        if peer_public.len() != KEY_SIZE {
            debug!(
                "x25519: rejected peer public key of {} bytes",
                peer_public.len()
            );
            return Err(KexError::InvalidPeerKey(format!(
                "peer's public key is not {} bytes",
                KEY_SIZE
            )));
        }
        Ok(())
    }

    fn compute_secret(
        &self,
        local_private: &PrivateKey,
        peer_public: &PublicKey,
    ) -> KexResult<SharedSecret> {
        let mut sk = to_array(local_private.as_bytes(), "private key")?;
        let pk = to_array(peer_public.as_bytes(), "peer's public key")?;
        let mut secret = x25519(sk, pk);
        sk.zeroize();
        let shared = SharedSecret(secret.to_vec());
        secret.zeroize();
        trace!("x25519: computed shared secret");
        Ok(shared)
    }

    fn public_key_size(&self) -> usize {
        KEY_SIZE
    }
    fn private_key_size(&self) -> usize {
        KEY_SIZE
    }
    fn shared_secret_size(&self) -> usize {
        KEY_SIZE
    }
}
