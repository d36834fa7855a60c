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
use crate::errors::{KexError, KexResult};

/// Lowercase hex encoding of `b`
pub fn bin2hex(b: &[u8]) -> String {
    b.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decode a hex string, upper or lower case
pub fn hex2bin(s: &str) -> KexResult<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(KexError::ParseError("Invalid string length".to_string()));
    }
    let digits = s
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            ch.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| KexError::ParseError(format!("Invalid character position {}", i)))
        })
        .collect::<KexResult<Vec<u8>>>()?;

    Ok(digits
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}
