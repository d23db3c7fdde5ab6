//! # Amounts
//!
//! Every asset quantity in the engine is an [`Amount`]: an exact,
//! non-negative count of indivisible base units ("atoms") stored as a
//! `u128`. The decimal form users see ("12.5 CRK") is parsed once at the
//! request boundary and formatted once for display — no arithmetic ever
//! touches it, and no floating point gets anywhere near money.
//!
//! Atoms are the source of truth. A token with `decimals = 2` and amount
//! `12345` atoms displays as `123.45`; the engine itself never divides.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from parsing or combining amounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// The decimal string is empty or contains characters other than
    /// digits and a single decimal point.
    #[error("malformed decimal amount: {0:?}")]
    Malformed(String),

    /// The fractional part has more digits than the asset's precision.
    #[error("amount {amount:?} has more than {decimals} decimal places")]
    TooManyDecimals {
        /// The offending input.
        amount: String,
        /// The asset's precision.
        decimals: u8,
    },

    /// The value does not fit into `u128` atoms.
    #[error("amount overflow: {0:?}")]
    Overflow(String),
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

/// An exact asset quantity in atoms.
///
/// All arithmetic is checked; overflow surfaces as `None` and is mapped
/// to an error (or an invariant violation) by the caller rather than
/// wrapping silently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Wraps a raw atom count.
    pub const fn from_atoms(atoms: u128) -> Self {
        Amount(atoms)
    }

    /// Returns the raw atom count.
    pub const fn into_atoms(self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction. `None` means the result would be negative,
    /// which in this engine is always an invariant violation, never a
    /// representable state.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Parses a decimal string into atoms using the asset's precision.
    ///
    /// Accepts plain integers (`"10"`), fractions (`"2.5"`, `".5"`) and
    /// trailing-point forms (`"3."`). Rejects empty input, signs, exponent
    /// notation, and fractions finer than `decimals`.
    pub fn from_decimal_str(s: &str, decimals: u8) -> Result<Amount, AmountError> {
        let s = s.trim();
        if s.is_empty() || s == "." {
            return Err(AmountError::Malformed(s.to_string()));
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AmountError::Malformed(s.to_string()));
        }
        if frac_part.len() > decimals as usize {
            // Trailing zeros past the precision are still rejected: the
            // caller asked for finer granularity than the asset has, and
            // silently rounding would misreport what gets spent.
            return Err(AmountError::TooManyDecimals {
                amount: s.to_string(),
                decimals,
            });
        }

        let scale = unit_scale(decimals).ok_or_else(|| AmountError::Overflow(s.to_string()))?;
        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| AmountError::Overflow(s.to_string()))?
        };
        let frac: u128 = if frac_part.is_empty() {
            0
        } else {
            frac_part
                .parse()
                .map_err(|_| AmountError::Overflow(s.to_string()))?
        };
        let frac_scale = unit_scale(decimals - frac_part.len() as u8)
            .ok_or_else(|| AmountError::Overflow(s.to_string()))?;

        whole
            .checked_mul(scale)
            .and_then(|w| frac.checked_mul(frac_scale).and_then(|f| w.checked_add(f)))
            .map(Amount)
            .ok_or_else(|| AmountError::Overflow(s.to_string()))
    }

    /// Formats the amount as a decimal string with the asset's precision.
    ///
    /// The fractional part is zero-padded to the full precision, so the
    /// output round-trips through [`Amount::from_decimal_str`] unchanged.
    pub fn display_decimal(self, decimals: u8) -> String {
        match unit_scale(decimals) {
            None | Some(0) => self.0.to_string(),
            Some(1) => self.0.to_string(),
            Some(scale) => {
                let whole = self.0 / scale;
                let frac = self.0 % scale;
                format!("{}.{:0>width$}", whole, frac, width = decimals as usize)
            }
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Atoms per whole unit for a given precision: `10^decimals`, or `None`
/// when that does not fit into `u128`.
pub fn unit_scale(decimals: u8) -> Option<u128> {
    10u128.checked_pow(decimals as u32)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
