//! Error types for transaction construction.
//!
//! Every failure the engine can produce falls into one of four categories,
//! and the category tells the caller what to do next: fix the request,
//! wait for funds, retry the fetch, or file a bug.

use thiserror::Error;

use crate::chain::Currency;
use crate::oracle::OracleError;
use crate::primitives::amount::Amount;

/// Errors returned by the transaction-construction pipeline.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The request is malformed: a missing field, a non-positive amount,
    /// a destination that does not parse, oracle context that was not
    /// supplied. Caller error; retrying the same request cannot succeed.
    #[error("invalid parameters: {reason}")]
    InvalidParameters {
        /// What exactly was wrong with the request.
        reason: String,
    },

    /// The spendable UTXO pool cannot cover the required amount for an
    /// asset. Retrying is only meaningful after the pool changes.
    #[error("insufficient funds for {currency}: available {available} atoms, required {required} atoms")]
    InsufficientFunds {
        /// The asset that could not be covered.
        currency: Currency,
        /// Total spendable atoms of that asset in the pool.
        available: Amount,
        /// Atoms the operation needs (including fees, for the coin).
        required: Amount,
    },

    /// The chain data provider failed. Retriable; the engine itself
    /// performs no retries.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// A construction invariant was violated: negative change after a
    /// successful selection, an asset mismatch between stages. This is a
    /// bug in the engine, not in the request — fail loudly.
    #[error("internal invariant violation: {reason}")]
    InvariantViolation {
        /// Which invariant broke.
        reason: String,
    },
}

impl BuildError {
    /// Shorthand for [`BuildError::InvalidParameters`].
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        BuildError::InvalidParameters {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`BuildError::InvariantViolation`].
    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        BuildError::InvariantViolation {
            reason: reason.into(),
        }
    }
}
