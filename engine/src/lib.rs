// Copyright (c) 2026 Lodestone Systems. MIT License.
// See LICENSE for details.

//! # Carrack Engine — Transaction Construction
//!
//! The wallet-side transaction-construction engine for the Carrack ledger:
//! a UTXO chain with nonce-ordered account commands layered on top for
//! token administration and order book actions.
//!
//! Given a requested operation and a snapshot of an address's unspent
//! outputs, the engine selects inputs, computes fees, emits correctly-typed
//! outputs and returns change — while keeping native-coin and token
//! accounting strictly separated. It does not sign, broadcast, or persist
//! anything; those concerns live behind trait seams.
//!
//! ## Architecture
//!
//! The pipeline is four pure stages wired strictly forward:
//!
//! ```text
//! config.rs      — Chain parameters and fee constants, passed explicitly
//! primitives/    — Amount (integer atoms), Address (bech32m), opaque ids
//! chain/         — On-chain vocabulary: inputs, outputs, UTXOs, transactions
//! oracle.rs      — Read-only chain data provider trait + snapshot fixture
//! build/         — interpreter → selector → fee/change → assembler
//! summary.rs     — Human-readable mirror of a built transaction
//! signer.rs      — Interface to the out-of-scope wallet signer
//! ```
//!
//! ## Design Philosophy
//!
//! 1. All monetary arithmetic is checked integer arithmetic on atoms.
//!    Decimal strings are parsed once at the boundary and formatted once
//!    for display; nothing in between computes on them.
//! 2. Construction is deterministic: identical request, pool, and oracle
//!    data always produce a byte-identical unsigned transaction.
//! 3. No global state. The chain configuration is a value threaded into
//!    every call.
//! 4. Errors are returned, never swallowed. A half-built transaction is
//!    never handed to a caller.

pub mod build;
pub mod chain;
pub mod config;
pub mod error;
pub mod oracle;
pub mod primitives;
pub mod signer;
pub mod summary;

pub use build::{
    build_transaction, construct_transaction, BuildRequest, ChainSnapshot, SupplyPolicy, TxIntent,
};
pub use chain::{
    AccountCommand, AccountNonce, Currency, OrderTerms, OutputValue, TextHex, TokenIssuance,
    TokenSupply, TxInput, TxOutput, UnsignedTransaction, Utxo, UtxoEntry, UtxoKind,
};
pub use config::{ChainConfig, Network};
pub use error::BuildError;
pub use oracle::{ChainOracle, OracleError, OrderDetails, StaticOracle, TokenDetails};
pub use primitives::address::Address;
pub use primitives::amount::Amount;
pub use primitives::id::{OrderId, OutPoint, TokenId};
pub use signer::{SignedTransaction, TransactionSigner};
pub use summary::TxSummary;
