//! # Fee & Change Calculation
//!
//! Third stage: with selection done, work out what is left over per
//! asset and turn positive leftovers into change outputs. Tokens never
//! pay fees; the entire fee burden — per-kind base plus the flat
//! network fee — lands on the coin side.
//!
//! Selection always covers the requirement, so leftovers can never be
//! negative here. If one is, a stage upstream is broken, and that is
//! reported as an invariant violation rather than dressed up as a user
//! error.

use crate::chain::output::{OutputValue, TxOutput};
use crate::error::BuildError;
use crate::primitives::address::Address;
use crate::primitives::amount::Amount;
use crate::primitives::id::TokenId;

/// Per-asset leftovers after covering requirements and fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Settlement {
    /// Coin atoms returning to the change address.
    pub coin_change: Amount,
    /// Token atoms returning to the change address.
    pub token_change: Amount,
}

/// Computes leftovers.
///
/// `fee` is the full fee (base + flat). The coin side must cover
/// `coin_required + fee`; the token side covers `token_required` only.
pub(crate) fn settle(
    coin_selected: Amount,
    coin_required: Amount,
    fee: Amount,
    token_selected: Amount,
    token_required: Amount,
) -> Result<Settlement, BuildError> {
    let coin_debit = coin_required
        .checked_add(fee)
        .ok_or_else(|| BuildError::invariant("coin requirement plus fee overflows"))?;
    let coin_change = coin_selected
        .checked_sub(coin_debit)
        .ok_or_else(|| BuildError::invariant("negative coin change after selection"))?;
    let token_change = token_selected
        .checked_sub(token_required)
        .ok_or_else(|| BuildError::invariant("negative token change after selection"))?;

    Ok(Settlement {
        coin_change,
        token_change,
    })
}

/// Turns positive leftovers into change outputs. Zero leftovers emit
/// nothing — a zero-value output would be rejected by the ledger.
pub(crate) fn change_outputs(
    settlement: Settlement,
    change_destination: &Address,
    token_id: Option<&TokenId>,
) -> Result<Vec<TxOutput>, BuildError> {
    let mut outputs = Vec::new();
    if !settlement.coin_change.is_zero() {
        outputs.push(TxOutput::transfer(
            OutputValue::Coin(settlement.coin_change),
            change_destination.clone(),
        ));
    }
    if !settlement.token_change.is_zero() {
        let token_id = token_id.ok_or_else(|| {
            BuildError::invariant("token change produced without a token selection")
        })?;
        outputs.push(TxOutput::transfer(
            OutputValue::Token(token_id.clone(), settlement.token_change),
            change_destination.clone(),
        ));
    }
    Ok(outputs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(n: u128) -> Amount {
        Amount::from_atoms(n)
    }

    fn change_addr() -> Address {
        Address::encode("crk", &[2u8; 20]).unwrap()
    }

    #[test]
    fn coin_change_subtracts_requirement_and_fee() {
        let settlement = settle(atoms(1_500), atoms(1_000), atoms(200), atoms(0), atoms(0)).unwrap();
        assert_eq!(settlement.coin_change, atoms(300));
        assert_eq!(settlement.token_change, atoms(0));
    }

    #[test]
    fn token_change_never_pays_fees() {
        let settlement = settle(atoms(200), atoms(0), atoms(200), atoms(550), atoms(500)).unwrap();
        assert_eq!(settlement.coin_change, atoms(0));
        assert_eq!(settlement.token_change, atoms(50));
    }

    #[test]
    fn negative_change_is_an_invariant_violation() {
        let err = settle(atoms(100), atoms(100), atoms(1), atoms(0), atoms(0)).unwrap_err();
        assert!(matches!(err, BuildError::InvariantViolation { .. }));

        let err = settle(atoms(0), atoms(0), atoms(0), atoms(10), atoms(20)).unwrap_err();
        assert!(matches!(err, BuildError::InvariantViolation { .. }));
    }

    #[test]
    fn zero_change_emits_no_output() {
        let settlement = Settlement {
            coin_change: atoms(0),
            token_change: atoms(0),
        };
        let outputs = change_outputs(settlement, &change_addr(), None).unwrap();
        assert!(outputs.is_empty());
    }

    #[test]
    fn positive_changes_emit_transfers_to_change_address() {
        let settlement = Settlement {
            coin_change: atoms(300),
            token_change: atoms(50),
        };
        let token_id = TokenId::new("t1");
        let outputs = change_outputs(settlement, &change_addr(), Some(&token_id)).unwrap();

        assert_eq!(outputs.len(), 2);
        assert_eq!(
            outputs[0],
            TxOutput::transfer(OutputValue::Coin(atoms(300)), change_addr())
        );
        assert_eq!(
            outputs[1],
            TxOutput::transfer(OutputValue::Token(token_id, atoms(50)), change_addr())
        );
    }

    #[test]
    fn token_change_without_token_id_is_an_invariant_violation() {
        let settlement = Settlement {
            coin_change: atoms(0),
            token_change: atoms(50),
        };
        let err = change_outputs(settlement, &change_addr(), None).unwrap_err();
        assert!(matches!(err, BuildError::InvariantViolation { .. }));
    }
}
