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
//! Uncompressed point encoding for Weierstrass curves:
//! `0x04 || x || y` with both coordinates big-endian and `field_len` bytes wide.
//!
//! Decoding does not check that the point is on the curve. A malformed encoding
//! decodes to [`DecodedPoint::Malformed`], which never passes the on-curve test.

use super::curve::WeierstrassCurve;
use crate::errors::{KexError, KexResult};

/// Leading byte of an uncompressed point
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Length of an uncompressed point with `field_len` byte coordinates
pub fn encoded_len(field_len: usize) -> usize {
    1 + 2 * field_len
}

/// Result of [`decode`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedPoint {
    /// Well formed coordinates, not yet checked against the curve equation
    Valid {
        /// big-endian x-coordinate
        x: Vec<u8>,
        /// big-endian y-coordinate
        y: Vec<u8>,
    },
    /// Wrong length or tag
    Malformed,
}

impl DecodedPoint {
    /// The on-curve test. Always false for `Malformed`.
    pub fn is_on_curve<C: WeierstrassCurve + ?Sized>(&self, curve: &C) -> bool {
        match self {
            DecodedPoint::Valid { x, y } => curve.is_on_curve(x, y),
            DecodedPoint::Malformed => false,
        }
    }
}

/// Encode `(x, y)` as `0x04 || x || y`, left padding each coordinate to `field_len`.
///
/// A coordinate wider than `field_len` (ignoring leading zeros) is rejected.
pub fn encode(x: &[u8], y: &[u8], field_len: usize) -> KexResult<Vec<u8>> {
    let mut out = vec![0u8; encoded_len(field_len)];
    out[0] = UNCOMPRESSED_TAG;
    put_be(&mut out[1..1 + field_len], x)?;
    put_be(&mut out[1 + field_len..], y)?;
    Ok(out)
}

/// Split an uncompressed encoding into its coordinates
pub fn decode(data: &[u8], field_len: usize) -> DecodedPoint {
    if data.len() != encoded_len(field_len) || data[0] != UNCOMPRESSED_TAG {
        return DecodedPoint::Malformed;
    }
    DecodedPoint::Valid {
        x: data[1..1 + field_len].to_vec(),
        y: data[1 + field_len..].to_vec(),
    }
}

/// Drop leading zero bytes
pub fn trim_leading_zeros(value: &[u8]) -> &[u8] {
    let start = value.iter().position(|b| *b != 0).unwrap_or(value.len());
    &value[start..]
}

fn put_be(dst: &mut [u8], value: &[u8]) -> KexResult<()> {
    let value = trim_leading_zeros(value);
    if value.len() > dst.len() {
        return Err(KexError::PreconditionViolated(format!(
            "coordinate of {} bytes does not fit in {} bytes",
            value.len(),
            dst.len()
        )));
    }
    let offset = dst.len() - value.len();
    dst[offset..].copy_from_slice(value);
    Ok(())
}
