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
//! Key material exchanged with the schemes in [`kex`](crate::kex).
//!
//! The byte layout of each type depends on the scheme that produced it.
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// A private scalar.
pub struct PrivateKey(pub Vec<u8>);
impl_bytearray!(PrivateKey);

/// A public point, in the wire encoding of the scheme
pub struct PublicKey(pub Vec<u8>);
impl_bytearray!(PublicKey);

/// The raw Diffie-Hellman output. No key derivation has been applied.
pub struct SharedSecret(pub Vec<u8>);
impl_bytearray!(SharedSecret);

/// How [`keypair`](crate::kex::KeyExchange::keypair) obtains the private key
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum KeyGenOption {
    /// Derive the key deterministically from a seed
    UseSeed(Vec<u8>),
    /// Load an existing private key and recompute its public key
    FromSecretKey(PrivateKey),
}

impl Drop for KeyGenOption {
    fn drop(&mut self) {
        match self {
            KeyGenOption::UseSeed(ref mut v) => v.zeroize(),
            KeyGenOption::FromSecretKey(ref mut s) => s.zeroize(),
        }
    }
}
