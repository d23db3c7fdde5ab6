//! # Coin Selector
//!
//! Second stage: given the UTXO pool and a required amount for one
//! asset, pick the subset to consume. The selector is greedy
//! largest-first — it does not minimize input count or fragmentation.
//! What it does guarantee is determinism: the same pool and requirement
//! always select the same UTXOs in the same order, which keeps the whole
//! pipeline idempotent and testable.

use crate::chain::currency::Currency;
use crate::chain::utxo::UtxoEntry;
use crate::error::BuildError;
use crate::primitives::amount::Amount;

/// The outcome of selection for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Selection {
    /// Chosen entries, in consumption order.
    pub selected: Vec<UtxoEntry>,
    /// Their combined value.
    pub total: Amount,
}

/// Selects UTXOs covering `required` atoms of `currency`.
///
/// 1. Filter to spendable kinds holding the right asset.
/// 2. Stable-sort descending by amount; ties keep pool order.
/// 3. Accumulate until the requirement is met or exceeded.
/// 4. On an exact match, take one extra UTXO when the pool has one:
///    a selection that lands exactly on the requirement would otherwise
///    produce a zero-value change output, which the ledger rejects. One
///    extra input is the cheaper problem.
///
/// A zero requirement selects nothing. An exhausted pool fails with
/// [`BuildError::InsufficientFunds`].
pub(crate) fn select_utxos(
    pool: &[UtxoEntry],
    required: Amount,
    currency: &Currency,
) -> Result<Selection, BuildError> {
    if required.is_zero() {
        return Ok(Selection::default());
    }

    let mut candidates: Vec<&UtxoEntry> = pool
        .iter()
        .filter(|entry| {
            entry.utxo.kind.is_spendable() && entry.utxo.value.currency() == *currency
        })
        .collect();
    candidates.sort_by(|a, b| b.utxo.value.amount().cmp(&a.utxo.value.amount()));

    let mut selected = Vec::new();
    let mut total = Amount::ZERO;
    let mut remaining = candidates.into_iter();

    while total < required {
        let entry = match remaining.next() {
            Some(entry) => entry,
            None => {
                let available = pool
                    .iter()
                    .filter(|e| e.utxo.kind.is_spendable() && e.utxo.value.currency() == *currency)
                    .fold(Amount::ZERO, |acc, e| {
                        acc.checked_add(e.utxo.value.amount()).unwrap_or(acc)
                    });
                return Err(BuildError::InsufficientFunds {
                    currency: currency.clone(),
                    available,
                    required,
                });
            }
        };
        total = total
            .checked_add(entry.utxo.value.amount())
            .ok_or_else(|| BuildError::invariant("UTXO pool value overflows u128"))?;
        selected.push(entry.clone());
    }

    if total == required {
        if let Some(extra) = remaining.next() {
            total = total
                .checked_add(extra.utxo.value.amount())
                .ok_or_else(|| BuildError::invariant("UTXO pool value overflows u128"))?;
            selected.push(extra.clone());
        }
    }

    Ok(Selection { selected, total })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
