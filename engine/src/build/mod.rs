//! # Transaction Construction Pipeline
//!
//! The engine's entry points. Construction is four pure stages wired
//! strictly forward:
//!
//! ```text
//! request.rs     — TxIntent: one variant per operation, typed parameters
//! interpreter.rs — intent → required outputs, command inputs, amounts, base fee
//! selector.rs    — deterministic largest-first UTXO selection, per asset
//! settle.rs      — fee totalling and change computation
//! assembler.rs   — order-preserving concatenation into the final tx
//! ```
//!
//! [`construct_transaction`] is the pure core: parameters plus a chain
//! snapshot in, an [`UnsignedTransaction`] or an error out — nothing
//! else. [`build_transaction`] is the async convenience that fetches the
//! snapshot from a [`ChainOracle`] first, issuing independent lookups in
//! parallel.
//!
//! The snapshot may go stale between fetch and signing. That is
//! accepted: staleness surfaces when the signed transaction is
//! broadcast, and the retry decision (re-fetch, re-build) belongs to the
//! caller, never to the engine.

mod assembler;
mod interpreter;
pub mod request;
mod selector;
mod settle;

use tracing::{debug, info};

use crate::chain::currency::Currency;
use crate::chain::transaction::UnsignedTransaction;
use crate::chain::utxo::UtxoEntry;
use crate::config::ChainConfig;
use crate::error::BuildError;
use crate::oracle::{ChainOracle, OrderDetails, TokenDetails};
use crate::primitives::address::Address;
use crate::primitives::amount::Amount;
use crate::primitives::id::TokenId;

pub use request::{BuildRequest, SupplyPolicy, TxIntent};

// ---------------------------------------------------------------------------
// ChainSnapshot
// ---------------------------------------------------------------------------

/// The chain state one construction works against.
///
/// Assembled by [`build_transaction`], or by the caller when working
/// against pre-fetched state. The engine reads it and nothing else — no
/// re-fetching, no hidden I/O.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainSnapshot {
    /// Unspent outputs of the funding addresses.
    pub utxos: Vec<UtxoEntry>,
    /// Details of the one token this operation touches, if any.
    pub token: Option<TokenDetails>,
    /// Details of the order this operation touches, if any.
    pub order: Option<OrderDetails>,
}

// ---------------------------------------------------------------------------
// Pure construction
// ---------------------------------------------------------------------------

/// Constructs an unsigned transaction from a request and a snapshot.
///
/// Pure and deterministic: identical arguments produce a byte-identical
/// transaction. Errors follow the four-way taxonomy in [`BuildError`];
/// no partial transaction is ever returned.
pub fn construct_transaction(
    config: &ChainConfig,
    request: &BuildRequest,
    snapshot: &ChainSnapshot,
) -> Result<UnsignedTransaction, BuildError> {
    let change_destination = match request.change.first() {
        Some(address) => Address::parse(address, config.hrp())
            .map_err(|e| BuildError::invalid(e.to_string()))?,
        None => return Err(BuildError::invalid("at least one change address required")),
    };

    let plan = interpreter::interpret(config, request, snapshot)?;
    let fee = plan
        .fee_base
        .checked_add(config.flat_fee())
        .ok_or_else(|| BuildError::invariant("fee overflows"))?;
    debug!(
        intent = request.intent.kind(),
        coin_required = %plan.coin_required,
        fee = %fee,
        "interpreted operation"
    );

    // Coins fund the operation and the whole fee; tokens fund only the
    // token requirement. The two selections are independent.
    let coin_target = plan
        .coin_required
        .checked_add(fee)
        .ok_or_else(|| BuildError::invariant("coin requirement plus fee overflows"))?;
    let coin_selection = selector::select_utxos(&snapshot.utxos, coin_target, &Currency::Coin)?;

    let (token_selection, token_required) = match &plan.token_required {
        Some((token_id, amount)) => (
            selector::select_utxos(
                &snapshot.utxos,
                *amount,
                &Currency::Token(token_id.clone()),
            )?,
            *amount,
        ),
        None => (Default::default(), Amount::ZERO),
    };
    debug!(
        coin_inputs = coin_selection.selected.len(),
        coin_total = %coin_selection.total,
        token_inputs = token_selection.selected.len(),
        token_total = %token_selection.total,
        "selected inputs"
    );

    let settlement = settle::settle(
        coin_selection.total,
        plan.coin_required,
        fee,
        token_selection.total,
        token_required,
    )?;
    let token_id: Option<&TokenId> = plan.token_required.as_ref().map(|(id, _)| id);
    let change = settle::change_outputs(settlement, &change_destination, token_id)?;

    let tx = assembler::assemble(
        plan.outputs,
        change,
        plan.account_inputs,
        &coin_selection.selected,
        &token_selection.selected,
    );
    info!(
        id = %tx.id(),
        inputs = tx.inputs().len(),
        outputs = tx.outputs().len(),
        "constructed unsigned transaction"
    );
    Ok(tx)
}

// ---------------------------------------------------------------------------
// Oracle-backed construction
// ---------------------------------------------------------------------------

/// Fetches the needed chain state and constructs the transaction.
///
/// The UTXO and token lookups are independent and run in parallel. An
/// order lookup, when the intent needs one, runs first: for a fill, the
/// order's ask currency decides whether a token lookup is needed at all.
/// The engine performs no retries — a failed fetch surfaces as
/// [`BuildError::Oracle`] and the caller decides whether to try again.
pub async fn build_transaction<O>(
    config: &ChainConfig,
    oracle: &O,
    request: &BuildRequest,
) -> Result<UnsignedTransaction, BuildError>
where
    O: ChainOracle + ?Sized,
{
    if request.from.is_empty() {
        return Err(BuildError::invalid("at least one funding address required"));
    }
    let from = request
        .from
        .iter()
        .map(|address| Address::parse(address, config.hrp()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| BuildError::invalid(e.to_string()))?;

    let order = match request.intent.order_dependency() {
        Some(order_id) => Some(oracle.order_details(order_id).await?),
        None => None,
    };
    let token_dependency: Option<TokenId> = match &request.intent {
        TxIntent::FillOrder(_) => order
            .as_ref()
            .and_then(|details| details.ask.token_id().cloned()),
        intent => intent.token_dependency().cloned(),
    };

    let (utxos, token) = tokio::try_join!(oracle.utxos(&from), async {
        match &token_dependency {
            Some(token_id) => oracle.token_details(token_id).await.map(Some),
            None => Ok(None),
        }
    })?;

    let snapshot = ChainSnapshot {
        utxos,
        token,
        order,
    };
    construct_transaction(config, request, &snapshot)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::request::TransferParams;
    use super::*;
    use crate::chain::output::{OutputValue, TxOutput};
    use crate::chain::utxo::{Utxo, UtxoKind};
    use crate::primitives::id::OutPoint;

    fn addr(byte: u8) -> Address {
        Address::encode("crk", &[byte; 20]).unwrap()
    }

    fn coin_entry(source: &str, atoms: u128) -> UtxoEntry {
        UtxoEntry::new(
            OutPoint::new(source, 0),
            Utxo::new(UtxoKind::Transfer, OutputValue::Coin(Amount::from_atoms(atoms))),
        )
    }

    fn transfer_request(amount: &str) -> BuildRequest {
        BuildRequest {
            from: vec![addr(1).to_string()],
            change: vec![addr(2).to_string()],
            intent: TxIntent::Transfer(TransferParams {
                destination: addr(3).to_string(),
                amount: amount.into(),
                token_id: None,
            }),
        }
    }

    #[test]
    fn missing_change_address_is_invalid_parameters() {
        let config = ChainConfig::mainnet();
        let mut request = transfer_request("1");
        request.change.clear();
        let err = construct_transaction(&config, &request, &ChainSnapshot::default()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameters { .. }));
    }

    #[test]
    fn change_goes_to_the_first_change_address() {
        let config = ChainConfig::mainnet();
        let mut request = transfer_request("1");
        request.change = vec![addr(2).to_string(), addr(9).to_string()];
        let snapshot = ChainSnapshot {
            utxos: vec![coin_entry("aa", 100 * config.coin_scale())],
            token: None,
            order: None,
        };
        let tx = construct_transaction(&config, &request, &snapshot).unwrap();

        let change = tx
            .outputs()
            .iter()
            .filter_map(|output| match output {
                TxOutput::Transfer { value, destination } if destination == &addr(2) => {
                    Some(value.amount())
                }
                _ => None,
            })
            .next();
        // 100 coins in, 1 transferred, 2 flat fee -> 97 coins change.
        assert_eq!(change, Some(Amount::from_atoms(97 * config.coin_scale())));
    }

    #[tokio::test]
    async fn build_rejects_empty_funding_set() {
        let config = ChainConfig::mainnet();
        let oracle = crate::oracle::StaticOracle::new();
        let mut request = transfer_request("1");
        request.from.clear();
        let err = build_transaction(&config, &oracle, &request).await.unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameters { .. }));
    }
}
