//! # On-Chain Vocabulary
//!
//! The types a Carrack transaction is made of. Construction, not
//! validation: the engine builds well-formed inputs and outputs, and the
//! ledger enforces its own rules when the signed transaction lands.
//!
//! ```text
//! currency.rs    — Coin vs. fungible token
//! utxo.rs        — Unspent outputs as the oracle reports them
//! output.rs      — The closed set of output variants
//! input.rs       — UTXO spends and nonce-ordered account commands
//! transaction.rs — UnsignedTransaction + canonical encoding and id
//! ```

pub mod currency;
pub mod input;
pub mod output;
pub mod transaction;
pub mod utxo;

pub use currency::Currency;
pub use input::{AccountCommand, AccountNonce, TxInput};
pub use output::{OrderTerms, OutputValue, TextHex, TokenIssuance, TokenSupply, TxOutput};
pub use transaction::UnsignedTransaction;
pub use utxo::{Utxo, UtxoEntry, UtxoKind};
