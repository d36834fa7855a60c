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
#![deny(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unused_import_braces,
    unused_lifetimes,
    unused_parens,
    while_true
)]
//! Elliptic curve Diffie-Hellman key exchange.
//!
//! Every backend implements [`KeyExchange`](kex::KeyExchange):
//!
//! * [`GenericCurve`](kex::generic::GenericCurve) works with any short Weierstrass curve
//!   that implements [`WeierstrassCurve`](kex::curve::WeierstrassCurve). NIST P-256,
//!   P-384 and secp256k1 are provided. Public keys use the uncompressed SEC1 form and the
//!   shared secret is the x-coordinate of the agreed point.
//! * [`X25519`](kex::x25519::X25519) works with Bernstein's Curve25519
//!   (see <https://cr.yp.to/ecdh.html>).
//!
//! The peer's public key must always be passed to `check` before it is used in
//! `compute_secret`:
//!
//! ```
//! # #[cfg(feature = "p256")]
//! # fn main() -> ursa_ecdh::errors::KexResult<()> {
//! use ursa_ecdh::kex::{generic::GenericCurve, KeyExchange};
//!
//! let p256 = GenericCurve::nist_p256()?;
//! let (alice_pk, alice_sk) = p256.keypair(None)?;
//! let (bob_pk, bob_sk) = p256.keypair(None)?;
//!
//! p256.check(&bob_pk)?;
//! let alice_secret = p256.compute_secret(&alice_sk, &bob_pk)?;
//! p256.check(&alice_pk)?;
//! let bob_secret = p256.compute_secret(&bob_sk, &alice_pk)?;
//!
//! assert_eq!(alice_secret, bob_secret);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "p256"))]
//! # fn main() {}
//! ```

// To use macros from util inside of other modules it must be loaded first.
#[macro_use]
pub mod utils;

pub mod encoding;
pub mod errors;
pub mod keys;
pub mod kex;

pub use errors::{KexError, KexResult};
