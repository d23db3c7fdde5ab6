//! # Unspent Outputs
//!
//! The chain data provider reports an address's spendable funds as a
//! list of unspent outputs. Each is owned by exactly one address until a
//! later transaction consumes it; the engine treats the list as an
//! immutable snapshot and never re-fetches behind the caller's back.

use serde::{Deserialize, Serialize};

use crate::chain::output::OutputValue;
use crate::primitives::id::OutPoint;

// ---------------------------------------------------------------------------
// UtxoKind
// ---------------------------------------------------------------------------

/// The output type a UTXO was created as.
///
/// Only plain transfers and matured lock-then-transfer outputs can be
/// consumed as ordinary spends; stake and NFT outputs need dedicated
/// operations the selector must never touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UtxoKind {
    /// An ordinary transfer output.
    Transfer,
    /// A transfer that was time-locked and has matured.
    LockThenTransfer,
    /// A staking pool output.
    CreateStakePool,
    /// A non-fungible token output.
    IssueNft,
}

impl UtxoKind {
    /// Whether this output can be consumed as a plain spend.
    pub fn is_spendable(self) -> bool {
        matches!(self, UtxoKind::Transfer | UtxoKind::LockThenTransfer)
    }
}

// ---------------------------------------------------------------------------
// Utxo
// ---------------------------------------------------------------------------

/// An unspent output: its kind plus the value it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    /// The output type.
    pub kind: UtxoKind,
    /// The asset and amount locked in the output.
    pub value: OutputValue,
}

impl Utxo {
    /// Creates a UTXO record.
    pub fn new(kind: UtxoKind, value: OutputValue) -> Self {
        Utxo { kind, value }
    }
}

/// A UTXO together with the outpoint that identifies it, exactly the
/// shape the chain data provider returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoEntry {
    /// Where the output lives.
    pub outpoint: OutPoint,
    /// What the output holds.
    pub utxo: Utxo,
}

impl UtxoEntry {
    /// Pairs an outpoint with its UTXO.
    pub fn new(outpoint: OutPoint, utxo: Utxo) -> Self {
        UtxoEntry { outpoint, utxo }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::amount::Amount;

    #[test]
    fn spendability_by_kind() {
        assert!(UtxoKind::Transfer.is_spendable());
        assert!(UtxoKind::LockThenTransfer.is_spendable());
        assert!(!UtxoKind::CreateStakePool.is_spendable());
        assert!(!UtxoKind::IssueNft.is_spendable());
    }

    #[test]
    fn entry_carries_outpoint_and_value() {
        let entry = UtxoEntry::new(
            OutPoint::new("aa", 0),
            Utxo::new(UtxoKind::Transfer, OutputValue::Coin(Amount::from_atoms(10))),
        );
        assert_eq!(entry.outpoint.index, 0);
        assert_eq!(entry.utxo.value.amount(), Amount::from_atoms(10));
    }
}
