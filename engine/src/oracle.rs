//! # Chain Data Provider
//!
//! The engine's only window onto chain state: a read-only oracle that
//! answers three questions — what can these addresses spend, what is
//! this token, what is this order. The engine treats every answer as a
//! snapshot; it may go stale between fetch and signing, and that
//! staleness surfaces as a broadcast-time rejection, not a construction
//! error. No retries happen here — retry policy belongs to the caller.
//!
//! [`StaticOracle`] serves a fixed snapshot from memory. It exists for
//! tests, examples, and offline construction against pre-fetched state.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chain::input::AccountNonce;
use crate::chain::output::OutputValue;
use crate::chain::utxo::UtxoEntry;
use crate::primitives::address::Address;
use crate::primitives::id::{OrderId, TokenId};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the chain data provider. All retriable from the caller's
/// point of view; the data may exist on the next attempt.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The provider could not be reached or answered with a failure.
    #[error("chain data provider unavailable: {reason}")]
    Unavailable {
        /// Transport or backend detail.
        reason: String,
    },

    /// The provider has no record of the token.
    #[error("unknown token: {0}")]
    UnknownToken(TokenId),

    /// The provider has no record of the order.
    #[error("unknown order: {0}")]
    UnknownOrder(OrderId),
}

// ---------------------------------------------------------------------------
// Metadata records
// ---------------------------------------------------------------------------

/// Chain state of a fungible token, as reported by the provider.
///
/// Required context for any token account command: the authority signs,
/// the decimals scale user-entered amounts, and the nonce orders the
/// command against the token's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDetails {
    /// The token this record describes.
    pub token_id: TokenId,
    /// The account authorized to issue commands against the token.
    pub authority: Address,
    /// Decimal places of the token.
    pub number_of_decimals: u8,
    /// The token account's next expected nonce.
    pub next_nonce: AccountNonce,
}

/// Chain state of an order-book entry, as reported by the provider.
///
/// The balances are authoritative: a partially filled order has less
/// than it started with, and concluding must return exactly what the
/// chain says remains — never an assumed zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// The order this record describes.
    pub order_id: OrderId,
    /// The order account's current nonce.
    pub nonce: AccountNonce,
    /// Remaining balance on the ask side.
    pub ask: OutputValue,
    /// Remaining balance on the give side.
    pub give: OutputValue,
    /// Where balances go when the order concludes.
    pub conclude_destination: Address,
}

// ---------------------------------------------------------------------------
// ChainOracle
// ---------------------------------------------------------------------------

/// Read-only access to the chain state the engine needs.
///
/// The three lookups are independent; callers may issue them in
/// parallel. Implementations must not cache stale data on the engine's
/// behalf — the engine assumes each answer reflects the provider's view
/// at call time, nothing more.
#[async_trait]
pub trait ChainOracle: Send + Sync {
    /// The unspent outputs owned by the given addresses.
    async fn utxos(&self, addresses: &[Address]) -> Result<Vec<UtxoEntry>, OracleError>;

    /// Metadata and account state of a token.
    async fn token_details(&self, token_id: &TokenId) -> Result<TokenDetails, OracleError>;

    /// State of an order-book entry.
    async fn order_details(&self, order_id: &OrderId) -> Result<OrderDetails, OracleError>;
}

// ---------------------------------------------------------------------------
// StaticOracle
// ---------------------------------------------------------------------------

/// An oracle serving a fixed in-memory snapshot.
///
/// Answers are deterministic: UTXOs come back grouped by requested
/// address, in the order the addresses were given and the order the
/// entries were added.
#[derive(Debug, Default, Clone)]
pub struct StaticOracle {
    utxos: HashMap<String, Vec<UtxoEntry>>,
    tokens: HashMap<TokenId, TokenDetails>,
    orders: HashMap<OrderId, OrderDetails>,
}

impl StaticOracle {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a UTXO owned by `address`.
    pub fn with_utxo(mut self, address: &Address, entry: UtxoEntry) -> Self {
        self.utxos
            .entry(address.as_str().to_string())
            .or_default()
            .push(entry);
        self
    }

    /// Registers token state.
    pub fn with_token(mut self, details: TokenDetails) -> Self {
        self.tokens.insert(details.token_id.clone(), details);
        self
    }

    /// Registers order state.
    pub fn with_order(mut self, details: OrderDetails) -> Self {
        self.orders.insert(details.order_id.clone(), details);
        self
    }
}

#[async_trait]
impl ChainOracle for StaticOracle {
    async fn utxos(&self, addresses: &[Address]) -> Result<Vec<UtxoEntry>, OracleError> {
        let mut entries = Vec::new();
        for address in addresses {
            if let Some(bucket) = self.utxos.get(address.as_str()) {
                entries.extend(bucket.iter().cloned());
            }
        }
        Ok(entries)
    }

    async fn token_details(&self, token_id: &TokenId) -> Result<TokenDetails, OracleError> {
        self.tokens
            .get(token_id)
            .cloned()
            .ok_or_else(|| OracleError::UnknownToken(token_id.clone()))
    }

    async fn order_details(&self, order_id: &OrderId) -> Result<OrderDetails, OracleError> {
        self.orders
            .get(order_id)
            .cloned()
            .ok_or_else(|| OracleError::UnknownOrder(order_id.clone()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
