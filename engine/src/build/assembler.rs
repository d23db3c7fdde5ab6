//! # Transaction Assembler
//!
//! Final stage: concatenate everything the earlier stages produced into
//! the [`UnsignedTransaction`]. Order is the contract — the signer
//! commits to positions, so the assembler never reorders, merges, or
//! de-duplicates.
//!
//! Outputs: operation outputs, then change. Inputs: account commands,
//! then coin-selected UTXOs, then token-selected UTXOs.

use crate::chain::input::TxInput;
use crate::chain::output::TxOutput;
use crate::chain::transaction::UnsignedTransaction;
use crate::chain::utxo::UtxoEntry;

/// Builds the final transaction from the staged parts.
pub(crate) fn assemble(
    operation_outputs: Vec<TxOutput>,
    change_outputs: Vec<TxOutput>,
    account_inputs: Vec<TxInput>,
    coin_selected: &[UtxoEntry],
    token_selected: &[UtxoEntry],
) -> UnsignedTransaction {
    let mut inputs = account_inputs;
    inputs.extend(
        coin_selected
            .iter()
            .map(|entry| TxInput::utxo(entry.outpoint.clone())),
    );
    inputs.extend(
        token_selected
            .iter()
            .map(|entry| TxInput::utxo(entry.outpoint.clone())),
    );

    let mut outputs = operation_outputs;
    outputs.extend(change_outputs);

    UnsignedTransaction::from_parts(inputs, outputs)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::input::{AccountCommand, AccountNonce};
    use crate::chain::output::OutputValue;
    use crate::chain::utxo::{Utxo, UtxoKind};
    use crate::primitives::address::Address;
    use crate::primitives::amount::Amount;
    use crate::primitives::id::{OutPoint, TokenId};

    fn coin_entry(source: &str, atoms: u128) -> UtxoEntry {
        UtxoEntry::new(
            OutPoint::new(source, 0),
            Utxo::new(UtxoKind::Transfer, OutputValue::Coin(Amount::from_atoms(atoms))),
        )
    }

    #[test]
    fn preserves_the_stage_order() {
        let dest = Address::encode("crk", &[1u8; 20]).unwrap();
        let command = TxInput::command(
            AccountNonce::new(1),
            AccountCommand::LockTokenSupply {
                token_id: TokenId::new("t1"),
                authority: dest.clone(),
            },
        );
        let operation_output =
            TxOutput::transfer(OutputValue::Coin(Amount::from_atoms(10)), dest.clone());
        let change_output =
            TxOutput::transfer(OutputValue::Coin(Amount::from_atoms(3)), dest.clone());

        let tx = assemble(
            vec![operation_output.clone()],
            vec![change_output.clone()],
            vec![command.clone()],
            &[coin_entry("coin", 20)],
            &[coin_entry("tok", 5)],
        );

        assert_eq!(tx.inputs().len(), 3);
        assert_eq!(tx.inputs()[0], command);
        assert_eq!(tx.inputs()[1], TxInput::utxo(OutPoint::new("coin", 0)));
        assert_eq!(tx.inputs()[2], TxInput::utxo(OutPoint::new("tok", 0)));

        assert_eq!(tx.outputs().len(), 2);
        assert_eq!(tx.outputs()[0], operation_output);
        assert_eq!(tx.outputs()[1], change_output);
    }

    #[test]
    fn duplicate_outpoints_are_kept_as_given() {
        // De-duplication is not this stage's business; if selection ever
        // produced duplicates, the ledger must see them and reject.
        let tx = assemble(
            vec![],
            vec![],
            vec![],
            &[coin_entry("same", 1), coin_entry("same", 1)],
            &[],
        );
        assert_eq!(tx.inputs().len(), 2);
        assert_eq!(tx.inputs()[0], tx.inputs()[1]);
    }
}
