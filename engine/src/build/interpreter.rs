//! # Operation Interpreter
//!
//! First stage of the pipeline: maps a [`TxIntent`] into the outputs it
//! must emit, the account-command inputs it must carry, the amount of
//! each asset that must be funded from the UTXO pool, and the
//! operation's base fee. No selection happens here — the interpreter
//! only states requirements.
//!
//! Checks run cheapest-first: field presence and amount syntax before
//! anything that touches oracle context.

use crate::build::request::{
    BuildRequest, CreateOrderParams, IssueTokenParams, SupplyPolicy, TxIntent,
};
use crate::build::ChainSnapshot;
use crate::chain::input::{AccountCommand, TxInput};
use crate::chain::output::{OrderTerms, OutputValue, TextHex, TokenIssuance, TokenSupply, TxOutput};
use crate::config::{ChainConfig, MAX_DATA_DEPOSIT_BYTES, MAX_METADATA_URI_LEN, MAX_TOKEN_DECIMALS, MAX_TOKEN_TICKER_LEN};
use crate::error::BuildError;
use crate::oracle::TokenDetails;
use crate::primitives::address::Address;
use crate::primitives::amount::Amount;
use crate::primitives::id::TokenId;

// ---------------------------------------------------------------------------
// IntentPlan
// ---------------------------------------------------------------------------

/// What an operation requires of the rest of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IntentPlan {
    /// Outputs the operation itself emits, in final order.
    pub outputs: Vec<TxOutput>,
    /// Account-command inputs the operation carries.
    pub account_inputs: Vec<TxInput>,
    /// Coin atoms that must be funded from the pool, before fees.
    pub coin_required: Amount,
    /// Token atoms that must be funded from the pool, if the operation
    /// spends a token.
    pub token_required: Option<(TokenId, Amount)>,
    /// The operation's base fee; the flat network fee comes on top.
    pub fee_base: Amount,
}

impl IntentPlan {
    fn new() -> Self {
        IntentPlan {
            outputs: Vec::new(),
            account_inputs: Vec::new(),
            coin_required: Amount::ZERO,
            token_required: None,
            fee_base: Amount::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Interpretation
// ---------------------------------------------------------------------------

/// Interprets the request's intent against the supplied snapshot.
pub(crate) fn interpret(
    config: &ChainConfig,
    request: &BuildRequest,
    snapshot: &ChainSnapshot,
) -> Result<IntentPlan, BuildError> {
    match &request.intent {
        TxIntent::Transfer(p) => {
            let destination = parse_destination(config, &p.destination)?;
            let mut plan = IntentPlan::new();
            let value = spend_value(config, snapshot, p.token_id.as_ref(), &p.amount, &mut plan)?;
            plan.outputs.push(TxOutput::transfer(value, destination));
            Ok(plan)
        }

        TxIntent::Burn(p) => {
            let mut plan = IntentPlan::new();
            let value = spend_value(config, snapshot, p.token_id.as_ref(), &p.amount, &mut plan)?;
            plan.outputs.push(TxOutput::burn(value));
            Ok(plan)
        }

        TxIntent::IssueToken(p) => issue_token(config, p),

        TxIntent::MintTokens(p) => {
            let destination = parse_destination(config, &p.destination)?;
            let details = token_context(snapshot, &p.token_id)?;
            let amount = parse_amount(&p.amount, details.number_of_decimals, "mint amount")?;

            let mut plan = IntentPlan::new();
            plan.account_inputs.push(TxInput::command(
                details.next_nonce,
                AccountCommand::MintTokens {
                    token_id: p.token_id.clone(),
                    authority: details.authority.clone(),
                    amount,
                },
            ));
            plan.outputs.push(TxOutput::transfer(
                OutputValue::Token(p.token_id.clone(), amount),
                destination,
            ));
            plan.fee_base = config.account_command_fee();
            Ok(plan)
        }

        TxIntent::UnmintTokens(p) => {
            let details = token_context(snapshot, &p.token_id)?;
            let amount = parse_amount(&p.amount, details.number_of_decimals, "unmint amount")?;
            Ok(token_command_plan(
                config,
                details,
                AccountCommand::UnmintTokens {
                    token_id: p.token_id.clone(),
                    authority: details.authority.clone(),
                    amount,
                },
            ))
        }

        TxIntent::LockTokenSupply(p) => {
            let details = token_context(snapshot, &p.token_id)?;
            Ok(token_command_plan(
                config,
                details,
                AccountCommand::LockTokenSupply {
                    token_id: p.token_id.clone(),
                    authority: details.authority.clone(),
                },
            ))
        }

        TxIntent::ChangeTokenAuthority(p) => {
            let new_authority = parse_destination(config, &p.new_authority)?;
            let details = token_context(snapshot, &p.token_id)?;
            Ok(token_command_plan(
                config,
                details,
                AccountCommand::ChangeTokenAuthority {
                    token_id: p.token_id.clone(),
                    authority: details.authority.clone(),
                    new_authority,
                },
            ))
        }

        TxIntent::ChangeTokenMetadataUri(p) => {
            validate_metadata_uri(&p.new_metadata_uri)?;
            let details = token_context(snapshot, &p.token_id)?;
            Ok(token_command_plan(
                config,
                details,
                AccountCommand::ChangeTokenMetadataUri {
                    token_id: p.token_id.clone(),
                    authority: details.authority.clone(),
                    new_metadata_uri: TextHex::new(p.new_metadata_uri.as_str()),
                },
            ))
        }

        TxIntent::FreezeToken(p) => {
            let details = token_context(snapshot, &p.token_id)?;
            Ok(token_command_plan(
                config,
                details,
                AccountCommand::FreezeToken {
                    token_id: p.token_id.clone(),
                    authority: details.authority.clone(),
                    is_unfreezable: p.is_unfreezable,
                },
            ))
        }

        TxIntent::UnfreezeToken(p) => {
            let details = token_context(snapshot, &p.token_id)?;
            Ok(token_command_plan(
                config,
                details,
                AccountCommand::UnfreezeToken {
                    token_id: p.token_id.clone(),
                    authority: details.authority.clone(),
                },
            ))
        }

        TxIntent::DataDeposit(p) => {
            if p.data.is_empty() {
                return Err(BuildError::invalid("data deposit payload is empty"));
            }
            if p.data.len() > MAX_DATA_DEPOSIT_BYTES {
                return Err(BuildError::invalid(format!(
                    "data deposit payload of {} bytes exceeds the {} byte limit",
                    p.data.len(),
                    MAX_DATA_DEPOSIT_BYTES
                )));
            }
            let mut plan = IntentPlan::new();
            plan.outputs.push(TxOutput::data_deposit(p.data.clone()));
            plan.fee_base = config.data_deposit_fee();
            Ok(plan)
        }

        TxIntent::CreateOrder(p) => create_order(config, snapshot, p),

        TxIntent::FillOrder(p) => {
            let destination = parse_destination(config, &p.destination)?;
            let order = snapshot
                .order
                .as_ref()
                .ok_or_else(|| BuildError::invalid("order details required to fill an order"))?;
            if order.order_id != p.order_id {
                return Err(BuildError::invalid(format!(
                    "order details are for {}, not {}",
                    order.order_id, p.order_id
                )));
            }
            // The fill is priced in the ask currency, so it scales by the
            // ask side's precision.
            let ask_decimals = match order.ask.token_id() {
                None => config.coin_decimals(),
                Some(token_id) => token_context(snapshot, token_id)?.number_of_decimals,
            };
            let fill = parse_amount(&p.amount, ask_decimals, "fill amount")?;

            let mut plan = IntentPlan::new();
            plan.account_inputs.push(TxInput::command(
                order.nonce,
                AccountCommand::FillOrder {
                    order_id: p.order_id.clone(),
                    fill,
                    destination,
                },
            ));
            Ok(plan)
        }

        TxIntent::ConcludeOrder(p) => {
            let order = snapshot.order.as_ref().ok_or_else(|| {
                BuildError::invalid("order details required to conclude an order")
            })?;
            if order.order_id != p.order_id {
                return Err(BuildError::invalid(format!(
                    "order details are for {}, not {}",
                    order.order_id, p.order_id
                )));
            }

            let mut plan = IntentPlan::new();
            plan.account_inputs.push(TxInput::command(
                order.nonce,
                AccountCommand::ConcludeOrder {
                    order_id: p.order_id.clone(),
                    destination: order.conclude_destination.clone(),
                },
            ));
            // Return whatever the chain says remains on each side. A side
            // that was fully drained produces no output — the ledger
            // rejects zero-value outputs.
            for side in [&order.ask, &order.give] {
                if !side.amount().is_zero() {
                    plan.outputs.push(TxOutput::transfer(
                        side.clone(),
                        order.conclude_destination.clone(),
                    ));
                }
            }
            Ok(plan)
        }
    }
}

// ---------------------------------------------------------------------------
// Per-kind helpers
// ---------------------------------------------------------------------------

fn issue_token(config: &ChainConfig, p: &IssueTokenParams) -> Result<IntentPlan, BuildError> {
    if p.ticker.is_empty() || p.ticker.len() > MAX_TOKEN_TICKER_LEN {
        return Err(BuildError::invalid(format!(
            "token ticker must be 1..={} bytes",
            MAX_TOKEN_TICKER_LEN
        )));
    }
    if !p.ticker.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(BuildError::invalid(
            "token ticker must be ASCII alphanumeric",
        ));
    }
    validate_metadata_uri(&p.metadata_uri)?;
    if p.decimals > MAX_TOKEN_DECIMALS {
        return Err(BuildError::invalid(format!(
            "token decimals {} exceed the maximum of {}",
            p.decimals, MAX_TOKEN_DECIMALS
        )));
    }
    let authority = parse_destination(config, &p.authority)?;
    let supply = match &p.supply {
        SupplyPolicy::Unlimited => TokenSupply::Unlimited,
        SupplyPolicy::Lockable => TokenSupply::Lockable,
        SupplyPolicy::Fixed(amount) => {
            TokenSupply::Fixed(parse_amount(amount, p.decimals, "fixed supply")?)
        }
    };

    let mut plan = IntentPlan::new();
    plan.outputs
        .push(TxOutput::issue_fungible_token(TokenIssuance {
            ticker: TextHex::new(p.ticker.as_str()),
            metadata_uri: TextHex::new(p.metadata_uri.as_str()),
            decimals: p.decimals,
            freezable: p.freezable,
            supply,
            authority,
        }));
    plan.fee_base = config.token_issuance_fee();
    Ok(plan)
}

fn create_order(
    config: &ChainConfig,
    snapshot: &ChainSnapshot,
    p: &CreateOrderParams,
) -> Result<IntentPlan, BuildError> {
    if p.ask_token.is_some() && p.give_token.is_some() {
        return Err(BuildError::invalid(
            "an order may involve at most one token; one side must be coins",
        ));
    }
    if p.ask_token == p.give_token {
        return Err(BuildError::invalid(
            "ask and give currencies must differ",
        ));
    }
    let conclude_destination = parse_destination(config, &p.conclude_destination)?;

    let side_value = |token: &Option<TokenId>, amount: &str, what| -> Result<OutputValue, BuildError> {
        match token {
            None => Ok(OutputValue::Coin(parse_amount(
                amount,
                config.coin_decimals(),
                what,
            )?)),
            Some(token_id) => {
                let details = token_context(snapshot, token_id)?;
                Ok(OutputValue::Token(
                    token_id.clone(),
                    parse_amount(amount, details.number_of_decimals, what)?,
                ))
            }
        }
    };
    let ask = side_value(&p.ask_token, &p.ask_amount, "ask amount")?;
    let give = side_value(&p.give_token, &p.give_amount, "give amount")?;

    let mut plan = IntentPlan::new();
    // The creator funds the give side; the ask side is only advertised.
    match &give {
        OutputValue::Coin(amount) => plan.coin_required = *amount,
        OutputValue::Token(token_id, amount) => {
            plan.token_required = Some((token_id.clone(), *amount));
        }
    }
    plan.outputs.push(TxOutput::create_order(OrderTerms {
        ask,
        give,
        conclude_destination,
    }));
    Ok(plan)
}

/// Plan for the token account commands that carry nothing but the
/// command itself and its fee.
fn token_command_plan(
    config: &ChainConfig,
    details: &TokenDetails,
    command: AccountCommand,
) -> IntentPlan {
    let mut plan = IntentPlan::new();
    plan.account_inputs
        .push(TxInput::command(details.next_nonce, command));
    plan.fee_base = config.account_command_fee();
    plan
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Resolves a spend value for transfer/burn: coin when no token id is
/// given, the token otherwise. Accrues the requirement on the plan.
fn spend_value(
    config: &ChainConfig,
    snapshot: &ChainSnapshot,
    token_id: Option<&TokenId>,
    amount: &str,
    plan: &mut IntentPlan,
) -> Result<OutputValue, BuildError> {
    match token_id {
        None => {
            let amount = parse_amount(amount, config.coin_decimals(), "amount")?;
            plan.coin_required = amount;
            Ok(OutputValue::Coin(amount))
        }
        Some(token_id) => {
            let details = token_context(snapshot, token_id)?;
            let amount = parse_amount(amount, details.number_of_decimals, "amount")?;
            plan.token_required = Some((token_id.clone(), amount));
            Ok(OutputValue::Token(token_id.clone(), amount))
        }
    }
}

fn parse_destination(config: &ChainConfig, s: &str) -> Result<Address, BuildError> {
    Address::parse(s, config.hrp()).map_err(|e| BuildError::invalid(e.to_string()))
}

fn parse_amount(s: &str, decimals: u8, what: &str) -> Result<Amount, BuildError> {
    let amount = Amount::from_decimal_str(s, decimals)
        .map_err(|e| BuildError::invalid(format!("{what}: {e}")))?;
    if amount.is_zero() {
        return Err(BuildError::invalid(format!("{what} must be positive")));
    }
    Ok(amount)
}

fn validate_metadata_uri(uri: &str) -> Result<(), BuildError> {
    if uri.is_empty() || uri.len() > MAX_METADATA_URI_LEN {
        return Err(BuildError::invalid(format!(
            "metadata URI must be 1..={} bytes",
            MAX_METADATA_URI_LEN
        )));
    }
    Ok(())
}

/// The token details an operation depends on. Missing or mismatched
/// context means the caller handed the pure entry point an incomplete
/// snapshot.
fn token_context<'a>(
    snapshot: &'a ChainSnapshot,
    token_id: &TokenId,
) -> Result<&'a TokenDetails, BuildError> {
    match &snapshot.token {
        Some(details) if details.token_id == *token_id => Ok(details),
        Some(details) => Err(BuildError::invalid(format!(
            "token details are for {}, not {}",
            details.token_id, token_id
        ))),
        None => Err(BuildError::invalid(format!(
            "token details for {token_id} required"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::request::{
        BurnParams, DataDepositParams, FillOrderParams, MintParams, TransferParams,
    };
    use crate::chain::input::AccountNonce;
    use crate::oracle::OrderDetails;
    use crate::primitives::id::OrderId;

    fn config() -> ChainConfig {
        ChainConfig::mainnet()
    }

    fn addr(byte: u8) -> Address {
        Address::encode("crk", &[byte; 20]).unwrap()
    }

    fn request(intent: TxIntent) -> BuildRequest {
        BuildRequest {
            from: vec![addr(1).to_string()],
            change: vec![addr(2).to_string()],
            intent,
        }
    }

    fn snapshot_with_token(details: TokenDetails) -> ChainSnapshot {
        ChainSnapshot {
            utxos: vec![],
            token: Some(details),
            order: None,
        }
    }

    fn token_details(id: &str, decimals: u8, nonce: u64) -> TokenDetails {
        TokenDetails {
            token_id: TokenId::new(id),
            authority: addr(7),
            number_of_decimals: decimals,
            next_nonce: AccountNonce::new(nonce),
        }
    }

    fn empty_snapshot() -> ChainSnapshot {
        ChainSnapshot {
            utxos: vec![],
            token: None,
            order: None,
        }
    }

    #[test]
    fn coin_transfer_scales_by_coin_decimals() {
        let req = request(TxIntent::Transfer(TransferParams {
            destination: addr(3).to_string(),
            amount: "10".into(),
            token_id: None,
        }));
        let plan = interpret(&config(), &req, &empty_snapshot()).unwrap();

        assert_eq!(plan.coin_required.into_atoms(), 10 * 100_000_000_000);
        assert_eq!(plan.token_required, None);
        assert!(plan.fee_base.is_zero());
        assert_eq!(plan.outputs.len(), 1);
        match &plan.outputs[0] {
            TxOutput::Transfer { value, destination } => {
                assert_eq!(value.amount().into_atoms(), 10 * 100_000_000_000);
                assert_eq!(destination, &addr(3));
            }
            other => panic!("expected transfer output, got {other:?}"),
        }
    }

    #[test]
    fn token_burn_scales_by_token_decimals() {
        let req = request(TxIntent::Burn(BurnParams {
            amount: "5".into(),
            token_id: Some(TokenId::new("t1")),
        }));
        let snapshot = snapshot_with_token(token_details("t1", 2, 0));
        let plan = interpret(&config(), &req, &snapshot).unwrap();

        assert_eq!(
            plan.token_required,
            Some((TokenId::new("t1"), Amount::from_atoms(500)))
        );
        assert!(plan.coin_required.is_zero());
        assert!(matches!(plan.outputs[0], TxOutput::Burn { .. }));
    }

    #[test]
    fn mint_carries_next_nonce_and_credits_destination() {
        let req = request(TxIntent::MintTokens(MintParams {
            token_id: TokenId::new("t1"),
            amount: "3".into(),
            destination: addr(4).to_string(),
        }));
        let snapshot = snapshot_with_token(token_details("t1", 2, 7));
        let plan = interpret(&config(), &req, &snapshot).unwrap();

        assert_eq!(plan.account_inputs.len(), 1);
        match &plan.account_inputs[0] {
            TxInput::Command { nonce, command } => {
                assert_eq!(*nonce, AccountNonce::new(7));
                assert!(matches!(command, AccountCommand::MintTokens { .. }));
            }
            other => panic!("expected command input, got {other:?}"),
        }
        // Minted supply is credited, not funded from the pool.
        assert_eq!(plan.token_required, None);
        assert_eq!(plan.fee_base, config().account_command_fee());
        match &plan.outputs[0] {
            TxOutput::Transfer { value, .. } => assert_eq!(value.amount(), Amount::from_atoms(300)),
            other => panic!("expected transfer output, got {other:?}"),
        }
    }

    #[test]
    fn missing_token_context_is_invalid_parameters() {
        let req = request(TxIntent::Burn(BurnParams {
            amount: "5".into(),
            token_id: Some(TokenId::new("t1")),
        }));
        let err = interpret(&config(), &req, &empty_snapshot()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameters { .. }));
    }

    #[test]
    fn zero_amount_is_invalid_parameters() {
        let req = request(TxIntent::Transfer(TransferParams {
            destination: addr(3).to_string(),
            amount: "0".into(),
            token_id: None,
        }));
        let err = interpret(&config(), &req, &empty_snapshot()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameters { .. }));
    }

    #[test]
    fn malformed_destination_is_invalid_parameters() {
        let req = request(TxIntent::Transfer(TransferParams {
            destination: "not-an-address".into(),
            amount: "1".into(),
            token_id: None,
        }));
        let err = interpret(&config(), &req, &empty_snapshot()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameters { .. }));
    }

    #[test]
    fn issuance_charges_the_issuance_fee() {
        let req = request(TxIntent::IssueToken(IssueTokenParams {
            ticker: "XPL".into(),
            metadata_uri: "ipfs://meta".into(),
            decimals: 8,
            freezable: true,
            supply: SupplyPolicy::Fixed("21.5".into()),
            authority: addr(5).to_string(),
        }));
        let plan = interpret(&config(), &req, &empty_snapshot()).unwrap();

        assert_eq!(plan.fee_base, config().token_issuance_fee());
        assert!(plan.coin_required.is_zero());
        match &plan.outputs[0] {
            TxOutput::IssueFungibleToken(issuance) => {
                assert_eq!(issuance.ticker.text, "XPL");
                assert_eq!(issuance.ticker.hex, "58504c");
                assert_eq!(
                    issuance.supply,
                    TokenSupply::Fixed(Amount::from_atoms(2_150_000_000))
                );
            }
            other => panic!("expected issuance output, got {other:?}"),
        }
    }

    #[test]
    fn issuance_rejects_bad_ticker() {
        for ticker in ["", "WAY-TOO-LONG-TICKER", "ab cd"] {
            let req = request(TxIntent::IssueToken(IssueTokenParams {
                ticker: ticker.into(),
                metadata_uri: "ipfs://meta".into(),
                decimals: 8,
                freezable: false,
                supply: SupplyPolicy::Unlimited,
                authority: addr(5).to_string(),
            }));
            assert!(
                interpret(&config(), &req, &empty_snapshot()).is_err(),
                "ticker {ticker:?} should be rejected"
            );
        }
    }

    #[test]
    fn data_deposit_charges_fee_and_rejects_empty() {
        let req = request(TxIntent::DataDeposit(DataDepositParams {
            data: vec![1, 2, 3],
        }));
        let plan = interpret(&config(), &req, &empty_snapshot()).unwrap();
        assert_eq!(plan.fee_base, config().data_deposit_fee());
        assert!(plan.coin_required.is_zero());

        let empty = request(TxIntent::DataDeposit(DataDepositParams { data: vec![] }));
        assert!(interpret(&config(), &empty, &empty_snapshot()).is_err());
    }

    #[test]
    fn create_order_requires_the_give_side() {
        let req = request(TxIntent::CreateOrder(CreateOrderParams {
            ask_token: None,
            ask_amount: "100".into(),
            give_token: Some(TokenId::new("t1")),
            give_amount: "5".into(),
            conclude_destination: addr(6).to_string(),
        }));
        let snapshot = snapshot_with_token(token_details("t1", 2, 0));
        let plan = interpret(&config(), &req, &snapshot).unwrap();

        assert!(plan.coin_required.is_zero());
        assert_eq!(
            plan.token_required,
            Some((TokenId::new("t1"), Amount::from_atoms(500)))
        );
    }

    #[test]
    fn create_order_rejects_token_token_and_same_currency() {
        let token_token = request(TxIntent::CreateOrder(CreateOrderParams {
            ask_token: Some(TokenId::new("t1")),
            ask_amount: "1".into(),
            give_token: Some(TokenId::new("t2")),
            give_amount: "1".into(),
            conclude_destination: addr(6).to_string(),
        }));
        assert!(interpret(&config(), &token_token, &empty_snapshot()).is_err());

        let coin_coin = request(TxIntent::CreateOrder(CreateOrderParams {
            ask_token: None,
            ask_amount: "1".into(),
            give_token: None,
            give_amount: "1".into(),
            conclude_destination: addr(6).to_string(),
        }));
        assert!(interpret(&config(), &coin_coin, &empty_snapshot()).is_err());
    }

    #[test]
    fn fill_order_scales_by_ask_currency_and_uses_order_nonce() {
        let req = request(TxIntent::FillOrder(FillOrderParams {
            order_id: OrderId::new("o1"),
            amount: "2.5".into(),
            destination: addr(4).to_string(),
        }));
        let snapshot = ChainSnapshot {
            utxos: vec![],
            token: None,
            order: Some(OrderDetails {
                order_id: OrderId::new("o1"),
                nonce: AccountNonce::new(3),
                ask: OutputValue::Coin(Amount::from_atoms(1_000_000_000_000)),
                give: OutputValue::Token(TokenId::new("t1"), Amount::from_atoms(500)),
                conclude_destination: addr(6),
            }),
        };
        let plan = interpret(&config(), &req, &snapshot).unwrap();

        match &plan.account_inputs[0] {
            TxInput::Command { nonce, command } => {
                assert_eq!(nonce.to_string(), "3");
                match command {
                    AccountCommand::FillOrder { fill, .. } => {
                        assert_eq!(fill.into_atoms(), 250_000_000_000);
                    }
                    other => panic!("expected fill command, got {other:?}"),
                }
            }
            other => panic!("expected command input, got {other:?}"),
        }
        assert!(plan.fee_base.is_zero());
    }

    #[test]
    fn conclude_order_returns_oracle_balances() {
        let req = request(TxIntent::ConcludeOrder(
            crate::build::request::ConcludeOrderParams {
                order_id: OrderId::new("o1"),
            },
        ));
        let snapshot = ChainSnapshot {
            utxos: vec![],
            token: None,
            order: Some(OrderDetails {
                order_id: OrderId::new("o1"),
                nonce: AccountNonce::new(2),
                ask: OutputValue::Coin(Amount::from_atoms(700)),
                give: OutputValue::Token(TokenId::new("t1"), Amount::from_atoms(40)),
                conclude_destination: addr(6),
            }),
        };
        let plan = interpret(&config(), &req, &snapshot).unwrap();

        assert_eq!(plan.outputs.len(), 2);
        assert_eq!(
            plan.outputs[0],
            TxOutput::transfer(OutputValue::Coin(Amount::from_atoms(700)), addr(6))
        );
        assert_eq!(
            plan.outputs[1],
            TxOutput::transfer(
                OutputValue::Token(TokenId::new("t1"), Amount::from_atoms(40)),
                addr(6)
            )
        );
    }

    #[test]
    fn conclude_order_skips_drained_sides() {
        let req = request(TxIntent::ConcludeOrder(
            crate::build::request::ConcludeOrderParams {
                order_id: OrderId::new("o1"),
            },
        ));
        let snapshot = ChainSnapshot {
            utxos: vec![],
            token: None,
            order: Some(OrderDetails {
                order_id: OrderId::new("o1"),
                nonce: AccountNonce::new(2),
                ask: OutputValue::Coin(Amount::ZERO),
                give: OutputValue::Token(TokenId::new("t1"), Amount::from_atoms(40)),
                conclude_destination: addr(6),
            }),
        };
        let plan = interpret(&config(), &req, &snapshot).unwrap();
        assert_eq!(plan.outputs.len(), 1);
    }
}
