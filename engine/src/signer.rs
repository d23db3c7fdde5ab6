//! # Signer Interface
//!
//! The engine constructs; it does not sign. This module is the seam to
//! whatever holds key material — a software wallet, a hardware device,
//! a remote service. Keeping the seam a trait keeps construction
//! testable without keys in the process.

use crate::chain::transaction::UnsignedTransaction;

/// A signed transaction, ready for broadcast.
///
/// Opaque to the engine: the witness bytes are whatever the signer
/// produced, one per input, and the engine never interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    transaction: UnsignedTransaction,
    witnesses: Vec<Vec<u8>>,
}

impl SignedTransaction {
    /// Pairs a transaction with its witnesses. Called by signer
    /// implementations, not by the engine.
    pub fn new(transaction: UnsignedTransaction, witnesses: Vec<Vec<u8>>) -> Self {
        SignedTransaction {
            transaction,
            witnesses,
        }
    }

    /// The transaction that was signed.
    pub fn transaction(&self) -> &UnsignedTransaction {
        &self.transaction
    }

    /// The witnesses, one per input, in input order.
    pub fn witnesses(&self) -> &[Vec<u8>] {
        &self.witnesses
    }
}

/// Turns an unsigned transaction into a broadcast-ready one.
///
/// The unsigned transaction is consumed: it is signed exactly once, and
/// the signer commits to the input/output order exactly as constructed.
pub trait TransactionSigner {
    /// Signer-specific failure type.
    type Error;

    /// Signs the transaction.
    fn sign(&self, transaction: UnsignedTransaction) -> Result<SignedTransaction, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::input::TxInput;
    use crate::primitives::id::OutPoint;

    /// A signer that stamps a fixed witness per input. Stands in for the
    /// real wallet in pipeline tests.
    struct StampSigner;

    impl TransactionSigner for StampSigner {
        type Error = std::convert::Infallible;

        fn sign(&self, transaction: UnsignedTransaction) -> Result<SignedTransaction, Self::Error> {
            let witnesses = transaction.inputs().iter().map(|_| vec![0xAB]).collect();
            Ok(SignedTransaction::new(transaction, witnesses))
        }
    }

    #[test]
    fn one_witness_per_input() {
        let tx = UnsignedTransaction::from_parts(
            vec![
                TxInput::utxo(OutPoint::new("aa", 0)),
                TxInput::utxo(OutPoint::new("bb", 1)),
            ],
            vec![],
        );
        let signed = StampSigner.sign(tx.clone()).unwrap();
        assert_eq!(signed.witnesses().len(), 2);
        assert_eq!(signed.transaction(), &tx);
    }
}
