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
//! Errors returned by the key exchange schemes.
use thiserror::Error as ThisError;

/// The errors that can occur during a key exchange
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum KexError {
    /// The entropy source could not supply the requested bytes
    #[error("entropy error: {0}")]
    EntropyError(String),
    /// The peer's public key is malformed or not a point of the curve.
    /// The exchange with this peer must be abandoned.
    #[error("invalid peer public key: {0}")]
    InvalidPeerKey(String),
    /// The caller passed key material or curve parameters the scheme cannot use
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
    /// Returned when key material cannot be decoded from its textual form
    #[error("parse error: {0}")]
    ParseError(String),
    /// Invalid library state
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl From<log::SetLoggerError> for KexError {
    fn from(err: log::SetLoggerError) -> KexError {
        KexError::InvalidState(format!("setting logger failed: {}", err))
    }
}

/// Results returned from the key exchange schemes
pub type KexResult<T> = Result<T, KexError>;
