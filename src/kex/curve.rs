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
//! The curve arithmetic the generic backend relies on.
//!
//! Field elements, coordinates and scalars cross this boundary as big-endian byte strings.
//! Coordinates returned by an implementation are `byte_len()` bytes wide.

/// An affine point `(x, y)` with big-endian coordinates
pub type Coordinates = (Vec<u8>, Vec<u8>);

/// Arithmetic over a short Weierstrass curve `y^2 = x^3 + ax + b`
pub trait WeierstrassCurve: Send + Sync {
    /// Human readable name, used in log records
    fn name(&self) -> &str;

    /// Bit length of the base field
    fn bit_size(&self) -> usize;

    /// Order of the base point, big-endian
    fn order(&self) -> &[u8];

    /// Width in bytes of an encoded coordinate
    fn byte_len(&self) -> usize {
        (self.bit_size() + 7) >> 3
    }

    /// Multiply the base point by `scalar`.
    /// Returns `None` if `scalar` is not a canonical scalar or the result is the identity.
    fn scalar_base_mult(&self, scalar: &[u8]) -> Option<Coordinates>;

    /// Multiply the point `(x, y)` by `scalar`.
    /// Returns `None` if the point or scalar cannot be decoded or the result is the identity.
    fn scalar_mult(&self, x: &[u8], y: &[u8], scalar: &[u8]) -> Option<Coordinates>;

    /// True iff `(x, y)` satisfies the curve equation
    fn is_on_curve(&self, x: &[u8], y: &[u8]) -> bool;
}

impl<C: WeierstrassCurve + ?Sized> WeierstrassCurve for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn bit_size(&self) -> usize {
        (**self).bit_size()
    }

    fn order(&self) -> &[u8] {
        (**self).order()
    }

    fn byte_len(&self) -> usize {
        (**self).byte_len()
    }

    fn scalar_base_mult(&self, scalar: &[u8]) -> Option<Coordinates> {
        (**self).scalar_base_mult(scalar)
    }

    fn scalar_mult(&self, x: &[u8], y: &[u8], scalar: &[u8]) -> Option<Coordinates> {
        (**self).scalar_mult(x, y, scalar)
    }

    fn is_on_curve(&self, x: &[u8], y: &[u8]) -> bool {
        (**self).is_on_curve(x, y)
    }
}
