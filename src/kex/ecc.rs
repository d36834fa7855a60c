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
//! [`WeierstrassCurve`] backed by the RustCrypto `elliptic-curve` arithmetic.

use super::curve::{Coordinates, WeierstrassCurve};
use super::point::trim_leading_zeros;
use elliptic_curve::{
    bigint::Encoding,
    ff::PrimeField,
    group::{Curve as _, Group},
    sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, ProjectivePoint,
};
use std::marker::PhantomData;

/// Curve arithmetic of a RustCrypto curve type such as `p256::NistP256`
#[derive(Clone, Debug)]
pub struct RustCryptoCurve<C> {
    name: &'static str,
    bit_size: usize,
    order: Vec<u8>,
    _curve: PhantomData<fn() -> C>,
}

impl<C> RustCryptoCurve<C>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    /// `bit_size` is the bit length of the base field of `C`
    pub fn new(name: &'static str, bit_size: usize) -> Self {
        let order = C::ORDER.to_be_bytes();
        Self {
            name,
            bit_size,
            order: trim_leading_zeros(order.as_ref()).to_vec(),
            _curve: PhantomData,
        }
    }

    fn field_bytes(value: &[u8]) -> Option<FieldBytes<C>> {
        let value = trim_leading_zeros(value);
        let mut repr = FieldBytes::<C>::default();
        let len = repr.len();
        if value.len() > len {
            return None;
        }
        repr[len - value.len()..].copy_from_slice(value);
        Some(repr)
    }

    fn scalar(value: &[u8]) -> Option<C::Scalar> {
        let repr = Self::field_bytes(value)?;
        Option::from(C::Scalar::from_repr(repr))
    }

    fn affine(x: &[u8], y: &[u8]) -> Option<AffinePoint<C>> {
        let x = Self::field_bytes(x)?;
        let y = Self::field_bytes(y)?;
        let encoded = EncodedPoint::<C>::from_affine_coordinates(&x, &y, false);
        Option::from(AffinePoint::<C>::from_encoded_point(&encoded))
    }

    fn coordinates(point: ProjectivePoint<C>) -> Option<Coordinates> {
        let encoded = point.to_affine().to_encoded_point(false);
        match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => Some((x.to_vec(), y.to_vec())),
            _ => None,
        }
    }
}

impl<C> WeierstrassCurve for RustCryptoCurve<C>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    fn name(&self) -> &str {
        self.name
    }

    fn bit_size(&self) -> usize {
        self.bit_size
    }

    fn order(&self) -> &[u8] {
        self.order.as_slice()
    }

    fn scalar_base_mult(&self, scalar: &[u8]) -> Option<Coordinates> {
        let scalar = Self::scalar(scalar)?;
        Self::coordinates(ProjectivePoint::<C>::generator() * scalar)
    }

    fn scalar_mult(&self, x: &[u8], y: &[u8], scalar: &[u8]) -> Option<Coordinates> {
        let point = ProjectivePoint::<C>::from(Self::affine(x, y)?);
        let scalar = Self::scalar(scalar)?;
        Self::coordinates(point * scalar)
    }

    fn is_on_curve(&self, x: &[u8], y: &[u8]) -> bool {
        Self::affine(x, y).is_some()
    }
}

/// NIST P-256 (secp256r1)
#[cfg(feature = "p256")]
pub fn nist_p256() -> RustCryptoCurve<p256::NistP256> {
    RustCryptoCurve::new("P-256", 256)
}

/// NIST P-384 (secp384r1)
#[cfg(feature = "p384")]
pub fn nist_p384() -> RustCryptoCurve<p384::NistP384> {
    RustCryptoCurve::new("P-384", 384)
}

/// NIST P-521 (secp521r1)
#[cfg(feature = "p521")]
pub fn nist_p521() -> RustCryptoCurve<p521::NistP521> {
    RustCryptoCurve::new("P-521", 521)
}

/// secp256k1
#[cfg(feature = "k256")]
pub fn secp256k1() -> RustCryptoCurve<k256::Secp256k1> {
    RustCryptoCurve::new("secp256k1", 256)
}
