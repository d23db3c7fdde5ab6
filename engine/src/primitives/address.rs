//! # Addresses
//!
//! Carrack addresses are bech32m strings whose human-readable prefix
//! identifies the network (`crk` on mainnet). The engine never looks
//! inside the payload — it only guarantees that every destination it
//! writes into an output actually decodes and carries the right prefix,
//! so a typo fails at construction time instead of burning funds on
//! chain.

use std::fmt;

use bech32::{Bech32m, Hrp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from address parsing and encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The string is not valid bech32m.
    #[error("malformed address {address:?}: {reason}")]
    Malformed {
        /// The offending input.
        address: String,
        /// Decoder detail.
        reason: String,
    },

    /// The address decodes but belongs to a different network.
    #[error("wrong network prefix in {address:?}: expected {expected:?}, got {got:?}")]
    WrongNetwork {
        /// The offending input.
        address: String,
        /// The prefix the configuration demands.
        expected: String,
        /// The prefix the address carries.
        got: String,
    },

    /// The prefix or payload cannot be encoded.
    #[error("cannot encode address: {0}")]
    Encoding(String),
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A validated destination on the configured network.
///
/// Construction goes through [`Address::parse`] (for caller-supplied
/// strings) or [`Address::encode`] (for payloads the wallet derives), so
/// holding an `Address` means the string form is well-formed and on the
/// right network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Parses and validates a caller-supplied address string.
    pub fn parse(s: &str, expected_hrp: &str) -> Result<Self, AddressError> {
        let (hrp, _payload) = bech32::decode(s).map_err(|e| AddressError::Malformed {
            address: s.to_string(),
            reason: e.to_string(),
        })?;
        if hrp.as_str() != expected_hrp {
            return Err(AddressError::WrongNetwork {
                address: s.to_string(),
                expected: expected_hrp.to_string(),
                got: hrp.as_str().to_string(),
            });
        }
        Ok(Address(s.to_string()))
    }

    /// Encodes a payload into a bech32m address with the given prefix.
    pub fn encode(hrp: &str, payload: &[u8]) -> Result<Self, AddressError> {
        let hrp = Hrp::parse(hrp).map_err(|e| AddressError::Encoding(e.to_string()))?;
        let encoded = bech32::encode::<Bech32m>(hrp, payload)
            .map_err(|e| AddressError::Encoding(e.to_string()))?;
        Ok(Address(encoded))
    }

    /// The address in its canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
