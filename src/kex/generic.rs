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
//! ECDH over any short Weierstrass curve.
//!
//! Public keys are uncompressed points (see [`point`](super::point)). Only the
//! x-coordinate of the agreed point is used as the shared secret, returned without
//! leading zero bytes.

use super::curve::WeierstrassCurve;
use super::point::{self, trim_leading_zeros};
use super::*;
use log::{debug, trace};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// Draws of a random scalar before key generation gives up
const MAX_SCALAR_DRAWS: usize = 64;

/// Key exchange over the curve `C`
#[derive(Clone, Debug)]
pub struct GenericCurve<C> {
    curve: C,
    field_len: usize,
    order: Vec<u8>,
    top_mask: u8,
}

impl<C: WeierstrassCurve> GenericCurve<C> {
    /// Wrap the arithmetic of a curve.
    ///
    /// Fails if the curve reports a zero bit size or a zero order.
    pub fn new(curve: C) -> KexResult<Self> {
        if curve.bit_size() == 0 {
            return Err(KexError::PreconditionViolated(format!(
                "curve {} has no field size",
                curve.name()
            )));
        }
        let order = trim_leading_zeros(curve.order()).to_vec();
        if order.is_empty() {
            return Err(KexError::PreconditionViolated(format!(
                "curve {} has no group order",
                curve.name()
            )));
        }
        let top_mask = 0xffu8 >> order[0].leading_zeros();
        Ok(Self {
            field_len: curve.byte_len(),
            curve,
            order,
            top_mask,
        })
    }

    /// The wrapped curve arithmetic
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// True iff `scalar` is in `[1, order - 1]`. `scalar` must be `order.len()` bytes.
    fn in_range(&self, scalar: &[u8]) -> Choice {
        let zero = vec![0u8; scalar.len()];
        !scalar.ct_eq(zero.as_slice()) & ct_less_than(scalar, &self.order)
    }

    fn check_private(&self, private: &PrivateKey) -> KexResult<()> {
        if private.len() != self.order.len() {
            debug!(
                "{}: private key of {} bytes, expected {}",
                self.curve.name(),
                private.len(),
                self.order.len()
            );
            return Err(KexError::PreconditionViolated(format!(
                "private key is not {} bytes",
                self.order.len()
            )));
        }
        if !bool::from(self.in_range(private.as_bytes())) {
            debug!("{}: private key out of range", self.curve.name());
            return Err(KexError::PreconditionViolated(format!(
                "private key cannot be used with curve {}",
                self.curve.name()
            )));
        }
        Ok(())
    }

    fn encode_base_mult(&self, private: &PrivateKey) -> KexResult<PublicKey> {
        let (x, y) = self
            .curve
            .scalar_base_mult(private.as_bytes())
            .ok_or_else(|| {
                KexError::PreconditionViolated(format!(
                    "private key cannot be used with curve {}",
                    self.curve.name()
                ))
            })?;
        Ok(PublicKey(point::encode(&x, &y, self.field_len)?))
    }
}

/// Constant time `a < b` for big-endian integers of the same length
fn ct_less_than(a: &[u8], b: &[u8]) -> Choice {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = 0u16;
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        let diff = u16::from(*x).wrapping_sub(u16::from(*y)).wrapping_sub(borrow);
        borrow = diff >> 15;
    }
    Choice::from(borrow as u8)
}

impl<C: WeierstrassCurve> KeyExchange for GenericCurve<C> {
    fn generate_key<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> KexResult<(PublicKey, PrivateKey)> {
        let mut private = PrivateKey(vec![0u8; self.order.len()]);
        for _ in 0..MAX_SCALAR_DRAWS {
            fill_random(rng, &mut private.0)?;
            private.0[0] &= self.top_mask;
            if !bool::from(self.in_range(private.as_bytes())) {
                continue;
            }
            let public = self.encode_base_mult(&private)?;
            trace!("{}: generated key pair", self.curve.name());
            return Ok((public, private));
        }
        Err(KexError::EntropyError(format!(
            "no scalar below the order of {} in {} draws",
            self.curve.name(),
            MAX_SCALAR_DRAWS
        )))
    }

    fn public_key(&self, private: &PrivateKey) -> KexResult<PublicKey> {
        self.check_private(private)?;
        self.encode_base_mult(private)
    }

    fn check(&self, peer_public: &PublicKey) -> KexResult<()> {
        if point::decode(peer_public.as_bytes(), self.field_len).is_on_curve(&self.curve) {
            Ok(())
        } else {
            debug!(
                "{}: rejected peer public key of {} bytes",
                self.curve.name(),
                peer_public.len()
            );
            Err(KexError::InvalidPeerKey(format!(
                "peer's public key is not on curve {}",
                self.curve.name()
            )))
        }
    }

    fn compute_secret(
        &self,
        local_private: &PrivateKey,
        peer_public: &PublicKey,
    ) -> KexResult<SharedSecret> {
        self.check_private(local_private)?;
        let product = match point::decode(peer_public.as_bytes(), self.field_len) {
            point::DecodedPoint::Valid { x, y } => {
                self.curve.scalar_mult(&x, &y, local_private.as_bytes())
            }
            point::DecodedPoint::Malformed => None,
        };
        let (mut x, mut y) = product.ok_or_else(|| {
            debug!("{}: unchecked peer public key", self.curve.name());
            KexError::PreconditionViolated(
                "peer's public key must pass check before computing a secret".to_string(),
            )
        })?;
        let secret = SharedSecret(trim_leading_zeros(&x).to_vec());
        x.zeroize();
        y.zeroize();
        trace!("{}: computed shared secret", self.curve.name());
        Ok(secret)
    }

    fn public_key_size(&self) -> usize {
        point::encoded_len(self.field_len)
    }

    fn private_key_size(&self) -> usize {
        self.order.len()
    }

    fn shared_secret_size(&self) -> usize {
        self.field_len
    }
}

#[cfg(feature = "p256")]
impl GenericCurve<super::ecc::RustCryptoCurve<p256::NistP256>> {
    /// ECDH over NIST P-256
    pub fn nist_p256() -> KexResult<Self> {
        Self::new(super::ecc::nist_p256())
    }
}

#[cfg(feature = "p384")]
impl GenericCurve<super::ecc::RustCryptoCurve<p384::NistP384>> {
    /// ECDH over NIST P-384
    pub fn nist_p384() -> KexResult<Self> {
        Self::new(super::ecc::nist_p384())
    }
}

#[cfg(feature = "p521")]
impl GenericCurve<super::ecc::RustCryptoCurve<p521::NistP521>> {
    /// ECDH over NIST P-521
    pub fn nist_p521() -> KexResult<Self> {
        Self::new(super::ecc::nist_p521())
    }
}

#[cfg(feature = "k256")]
impl GenericCurve<super::ecc::RustCryptoCurve<k256::Secp256k1>> {
    /// ECDH over secp256k1
    pub fn secp256k1() -> KexResult<Self> {
        Self::new(super::ecc::secp256k1())
    }
}

#[cfg(test)]
mod tests {
    use super::super::curve::Coordinates;
    use super::super::test_rng::ExhaustedRng;
    use super::*;
    use rand::thread_rng;

    /// `y^2 = x^3 + 2x + 6` over GF(113), small enough to check by hand.
    /// The group has prime order 101, computed by brute force from the base point (1, 3).
    struct ToyCurve {
        order: Vec<u8>,
    }

    const P: u32 = 113;
    const A: u32 = 2;
    const B: u32 = 6;
    const G: (u32, u32) = (1, 3);

    type Pt = Option<(u32, u32)>;

    fn inv(v: u32) -> u32 {
        // Fermat
        let mut result = 1;
        for _ in 0..P - 2 {
            result = result * v % P;
        }
        result
    }

    fn add(p: Pt, q: Pt) -> Pt {
        let ((x1, y1), (x2, y2)) = match (p, q) {
            (None, q) => return q,
            (p, None) => return p,
            (Some(p), Some(q)) => (p, q),
        };
        if x1 == x2 && (y1 + y2) % P == 0 {
            return None;
        }
        let l = if x1 == x2 {
            (3 * x1 * x1 + A) % P * inv(2 * y1 % P) % P
        } else {
            (y2 + P - y1) % P * inv((x2 + P - x1) % P) % P
        };
        let x3 = (l * l + 2 * P - x1 - x2) % P;
        let y3 = (l * ((x1 + P - x3) % P) + P - y1) % P;
        Some((x3, y3))
    }

    fn mul(p: Pt, k: &[u8]) -> Pt {
        let mut acc = None;
        for byte in k {
            for bit in (0..8).rev() {
                acc = add(acc, acc);
                if (byte >> bit) & 1 == 1 {
                    acc = add(acc, p);
                }
            }
        }
        acc
    }

    fn to_coordinates(p: Pt) -> Option<Coordinates> {
        p.map(|(x, y)| (vec![x as u8], vec![y as u8]))
    }

    fn from_coordinates(x: &[u8], y: &[u8]) -> Option<(u32, u32)> {
        match (x, y) {
            ([x], [y]) if u32::from(*x) < P && u32::from(*y) < P => {
                Some((u32::from(*x), u32::from(*y)))
            }
            _ => None,
        }
    }

    impl ToyCurve {
        fn new() -> Self {
            let mut n = 1u32;
            let mut p = Some(G);
            while p.is_some() {
                p = add(p, Some(G));
                n += 1;
            }
            Self {
                order: vec![n as u8],
            }
        }
    }

    impl WeierstrassCurve for ToyCurve {
        fn name(&self) -> &str {
            "toy"
        }

        fn bit_size(&self) -> usize {
            7
        }

        fn order(&self) -> &[u8] {
            &self.order
        }

        fn scalar_base_mult(&self, scalar: &[u8]) -> Option<Coordinates> {
            to_coordinates(mul(Some(G), scalar))
        }

        fn scalar_mult(&self, x: &[u8], y: &[u8], scalar: &[u8]) -> Option<Coordinates> {
            let p = from_coordinates(x, y)?;
            to_coordinates(mul(Some(p), scalar))
        }

        fn is_on_curve(&self, x: &[u8], y: &[u8]) -> bool {
            match from_coordinates(x, y) {
                Some((x, y)) => (y * y) % P == (x * x % P * x + A * x + B) % P,
                None => false,
            }
        }
    }

    #[test]
    fn toy_curve_key_exchange() {
        let scheme = GenericCurve::new(ToyCurve::new()).unwrap();
        assert_eq!(vec![101u8], scheme.curve().order().to_vec());
        assert_eq!(3, scheme.public_key_size());
        assert_eq!(1, scheme.private_key_size());

        let mut rng = thread_rng();
        for _ in 0..32 {
            let (pk, sk) = scheme.generate_key(&mut rng).unwrap();
            let (pk1, sk1) = scheme.generate_key(&mut rng).unwrap();
            assert!(scheme.check(&pk).is_ok());
            assert!(scheme.check(&pk1).is_ok());
            assert_eq!(pk, scheme.public_key(&sk).unwrap());
            assert_eq!(
                scheme.compute_secret(&sk, &pk1).unwrap(),
                scheme.compute_secret(&sk1, &pk).unwrap()
            );
        }
    }

    #[test]
    fn toy_curve_rejects_off_curve_points() {
        let scheme = GenericCurve::new(ToyCurve::new()).unwrap();
        // (1, 4) is not on the curve, (1, 3) is
        assert!(scheme.check(&PublicKey(vec![4, 1, 3])).is_ok());
        let res = scheme.check(&PublicKey(vec![4, 1, 4]));
        assert!(matches!(res, Err(KexError::InvalidPeerKey(_))));
        assert!(scheme.check(&PublicKey(vec![2, 1, 3])).is_err());
        assert!(scheme.check(&PublicKey(vec![4, 1, 3, 0])).is_err());
        // coordinates outside the field
        assert!(scheme.check(&PublicKey(vec![4, 0xff, 3])).is_err());
    }

    #[test]
    fn boxed_curve() {
        let curve: Box<dyn WeierstrassCurve> = Box::new(ToyCurve::new());
        let scheme = GenericCurve::new(curve).unwrap();
        let (pk, sk) = scheme.keypair(None).unwrap();
        assert_eq!(pk, scheme.public_key(&sk).unwrap());
        assert_eq!("toy", scheme.curve().name());
    }

    struct NoOrder;

    impl WeierstrassCurve for NoOrder {
        fn name(&self) -> &str {
            "broken"
        }
        fn bit_size(&self) -> usize {
            8
        }
        fn order(&self) -> &[u8] {
            &[0, 0]
        }
        fn scalar_base_mult(&self, _: &[u8]) -> Option<Coordinates> {
            None
        }
        fn scalar_mult(&self, _: &[u8], _: &[u8], _: &[u8]) -> Option<Coordinates> {
            None
        }
        fn is_on_curve(&self, _: &[u8], _: &[u8]) -> bool {
            false
        }
    }

    #[test]
    fn degenerate_parameters() {
        let res = GenericCurve::new(NoOrder);
        assert!(matches!(res, Err(KexError::PreconditionViolated(_))));
    }

    #[test]
    fn range_check() {
        let order = [0x01u8, 0x00];
        assert!(bool::from(ct_less_than(&[0x00, 0xff], &order)));
        assert!(!bool::from(ct_less_than(&[0x01, 0x00], &order)));
        assert!(!bool::from(ct_less_than(&[0x01, 0x01], &order)));
        assert!(!bool::from(ct_less_than(&[0xff, 0x00], &order)));
    }

    #[cfg(feature = "p256")]
    #[test]
    fn key_exchange() {
        let scheme = GenericCurve::nist_p256().unwrap();
        let res = scheme.keypair(None);
        assert!(res.is_ok());
        let (pk, sk) = res.unwrap();
        assert_eq!(65, pk.len());
        assert_eq!(0x04, pk[0]);
        assert_eq!(32, sk.len());
        let res = scheme.compute_secret(&sk, &pk);
        assert!(res.is_ok());
        let res = scheme.keypair(None);
        assert!(res.is_ok());
        let (pk1, sk1) = res.unwrap();
        let s = scheme.compute_secret(&sk1, &pk).unwrap();
        let s1 = scheme.compute_secret(&sk, &pk1).unwrap();
        assert_eq!(s, s1);
        assert!(s.len() <= scheme.shared_secret_size());
    }

    #[cfg(feature = "p256")]
    #[test]
    fn check_rejects_malformed_keys() {
        let scheme = GenericCurve::nist_p256().unwrap();
        let (pk, _) = scheme.keypair(None).unwrap();
        assert!(scheme.check(&pk).is_ok());

        // wrong total length
        assert!(scheme.check(&PublicKey(pk[0..64].to_vec())).is_err());
        let mut longer = pk.as_bytes().to_vec();
        longer.push(0);
        assert!(scheme.check(&PublicKey(longer)).is_err());
        assert!(scheme.check(&PublicKey(Vec::new())).is_err());

        // compressed tag with otherwise valid coordinates
        let mut tagged = pk.as_bytes().to_vec();
        tagged[0] = 0x02;
        let res = scheme.check(&PublicKey(tagged));
        assert!(matches!(res, Err(KexError::InvalidPeerKey(_))));

        // well formed, off the curve
        let mut off = pk.as_bytes().to_vec();
        off[64] ^= 0x01;
        assert!(scheme.check(&PublicKey(off)).is_err());
    }

    #[cfg(feature = "p256")]
    #[test]
    fn private_key_preconditions() {
        let scheme = GenericCurve::nist_p256().unwrap();
        let (pk, _) = scheme.keypair(None).unwrap();

        let order = PrivateKey(scheme.curve().order().to_vec());
        let res = scheme.public_key(&order);
        assert!(matches!(res, Err(KexError::PreconditionViolated(_))));
        assert!(scheme.public_key(&PrivateKey(vec![0u8; 32])).is_err());
        assert!(scheme.public_key(&PrivateKey(vec![1u8; 33])).is_err());
        assert!(scheme.compute_secret(&order, &pk).is_err());

        let mut one = vec![0u8; 32];
        one[31] = 1;
        let res = scheme.public_key(&PrivateKey(one.clone()));
        assert!(res.is_ok());
        // 1 * G has the base point as its x-coordinate
        let secret = scheme.compute_secret(&PrivateKey(one), &res.unwrap()).unwrap();
        assert_eq!(scheme.curve().scalar_base_mult(&[1u8]).unwrap().0, secret.0);
    }

    #[cfg(feature = "p256")]
    #[test]
    fn shared_secret_drops_leading_zeros() {
        let scheme = GenericCurve::nist_p256().unwrap();
        let mut one = vec![0u8; 32];
        one[31] = 1;
        let base = scheme.public_key(&PrivateKey(one)).unwrap();

        // x(379 * G) = 0x0055438...
        let mut k = vec![0u8; 32];
        k[30] = 0x01;
        k[31] = 0x7b;
        let k = PrivateKey(k);
        let (x, _) = scheme.curve().scalar_base_mult(k.as_bytes()).unwrap();
        assert_eq!(32, x.len());
        assert_eq!(0x00, x[0]);
        assert_eq!(0x55, x[1]);

        let secret = scheme.compute_secret(&k, &base).unwrap();
        assert_eq!(31, secret.len());
        assert_eq!(&x[1..], secret.as_bytes());
        assert_eq!(
            crate::encoding::hex::hex2bin(
                "5543894af3d00ed7d740abdbd75c96b06877b787db5f70eea78b90a8d7c00a"
            )
            .unwrap(),
            secret.0
        );
    }

    #[cfg(feature = "p256")]
    #[test]
    fn unchecked_malformed_peer_key_is_an_error() {
        let scheme = GenericCurve::nist_p256().unwrap();
        let (pk, sk) = scheme.keypair(None).unwrap();
        let res = scheme.compute_secret(&sk, &PublicKey(pk[0..10].to_vec()));
        assert!(matches!(res, Err(KexError::PreconditionViolated(_))));
    }

    #[cfg(feature = "p256")]
    #[test]
    fn short_read() {
        let scheme = GenericCurve::nist_p256().unwrap();
        let mut rng = ExhaustedRng {
            remaining: 31,
            value: 7,
        };
        let res = scheme.generate_key(&mut rng);
        assert!(matches!(res, Err(KexError::EntropyError(_))));
    }

    #[cfg(feature = "p256")]
    #[test]
    fn out_of_range_draws_are_rejected() {
        let scheme = GenericCurve::nist_p256().unwrap();
        // all ones is above the P-256 order, the source runs dry while rejecting
        let mut rng = ExhaustedRng {
            remaining: 32 * 3,
            value: 0xff,
        };
        let res = scheme.generate_key(&mut rng);
        assert!(matches!(res, Err(KexError::EntropyError(_))));

        let mut rng = ExhaustedRng {
            remaining: 32,
            value: 0x11,
        };
        let (pk, sk) = scheme.generate_key(&mut rng).unwrap();
        assert_eq!(PrivateKey(vec![0x11u8; 32]), sk);
        assert_eq!(pk, scheme.public_key(&sk).unwrap());
    }
}
