//! # Build Requests
//!
//! What a caller asks the engine to do. The operation kind is a closed
//! sum type — [`TxIntent`] — with one variant per supported operation,
//! each carrying its own parameter record. Exhaustive matching in the
//! interpreter means a new operation that forgets a rule is a
//! compile-time error, not a silent fall-through.
//!
//! Amounts arrive as decimal strings exactly as a user typed them and
//! are converted to atoms inside the interpreter, using the asset's own
//! precision. Destinations arrive as strings and are validated against
//! the configured network prefix.

use serde::{Deserialize, Serialize};

use crate::primitives::id::{OrderId, TokenId};

// ---------------------------------------------------------------------------
// BuildRequest
// ---------------------------------------------------------------------------

/// A complete construction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Addresses whose UTXOs fund the transaction.
    pub from: Vec<String>,
    /// Change addresses; leftover value returns to the first one.
    pub change: Vec<String>,
    /// The operation to perform.
    pub intent: TxIntent,
}

// ---------------------------------------------------------------------------
// TxIntent
// ---------------------------------------------------------------------------

/// The requested operation, one variant per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxIntent {
    /// Pay coins or tokens to a destination.
    Transfer(TransferParams),
    /// Destroy coins or tokens permanently.
    Burn(BurnParams),
    /// Declare a new fungible token.
    IssueToken(IssueTokenParams),
    /// Mint supply of an existing token to a destination.
    MintTokens(MintParams),
    /// Remove supply of an existing token from circulation.
    UnmintTokens(UnmintParams),
    /// Permanently lock a token's supply.
    LockTokenSupply(TokenCommandParams),
    /// Hand a token's account to a new authority.
    ChangeTokenAuthority(ChangeAuthorityParams),
    /// Replace a token's metadata URI.
    ChangeTokenMetadataUri(ChangeMetadataParams),
    /// Freeze all transfers of a token.
    FreezeToken(FreezeParams),
    /// Lift a token freeze.
    UnfreezeToken(TokenCommandParams),
    /// Anchor an opaque payload on chain.
    DataDeposit(DataDepositParams),
    /// Open an order-book entry.
    CreateOrder(CreateOrderParams),
    /// Fill part of an existing order.
    FillOrder(FillOrderParams),
    /// Close an order and reclaim its remaining balances.
    ConcludeOrder(ConcludeOrderParams),
}

impl TxIntent {
    /// Stable operation name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TxIntent::Transfer(_) => "transfer",
            TxIntent::Burn(_) => "burn",
            TxIntent::IssueToken(_) => "issue_token",
            TxIntent::MintTokens(_) => "mint_tokens",
            TxIntent::UnmintTokens(_) => "unmint_tokens",
            TxIntent::LockTokenSupply(_) => "lock_token_supply",
            TxIntent::ChangeTokenAuthority(_) => "change_token_authority",
            TxIntent::ChangeTokenMetadataUri(_) => "change_token_metadata_uri",
            TxIntent::FreezeToken(_) => "freeze_token",
            TxIntent::UnfreezeToken(_) => "unfreeze_token",
            TxIntent::DataDeposit(_) => "data_deposit",
            TxIntent::CreateOrder(_) => "create_order",
            TxIntent::FillOrder(_) => "fill_order",
            TxIntent::ConcludeOrder(_) => "conclude_order",
        }
    }

    /// The token whose chain state this intent needs before it can be
    /// interpreted, if that token is known from the request alone.
    /// `FillOrder` may also need a token — which one only becomes known
    /// once the order's ask currency is fetched.
    pub fn token_dependency(&self) -> Option<&TokenId> {
        match self {
            TxIntent::Transfer(p) => p.token_id.as_ref(),
            TxIntent::Burn(p) => p.token_id.as_ref(),
            TxIntent::IssueToken(_) => None,
            TxIntent::MintTokens(p) => Some(&p.token_id),
            TxIntent::UnmintTokens(p) => Some(&p.token_id),
            TxIntent::LockTokenSupply(p) => Some(&p.token_id),
            TxIntent::ChangeTokenAuthority(p) => Some(&p.token_id),
            TxIntent::ChangeTokenMetadataUri(p) => Some(&p.token_id),
            TxIntent::FreezeToken(p) => Some(&p.token_id),
            TxIntent::UnfreezeToken(p) => Some(&p.token_id),
            TxIntent::DataDeposit(_) => None,
            // Either side of a new order may be a token that needs its
            // decimals looked up; at most one side is allowed to be.
            TxIntent::CreateOrder(p) => p.give_token.as_ref().or(p.ask_token.as_ref()),
            TxIntent::FillOrder(_) => None,
            TxIntent::ConcludeOrder(_) => None,
        }
    }

    /// The order whose chain state this intent needs, if any.
    pub fn order_dependency(&self) -> Option<&OrderId> {
        match self {
            TxIntent::FillOrder(p) => Some(&p.order_id),
            TxIntent::ConcludeOrder(p) => Some(&p.order_id),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Parameter records
// ---------------------------------------------------------------------------

/// Parameters of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferParams {
    /// Receiving address.
    pub destination: String,
    /// Decimal amount in the asset's display units.
    pub amount: String,
    /// The token to move; `None` moves the native coin.
    pub token_id: Option<TokenId>,
}

/// Parameters of a burn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnParams {
    /// Decimal amount in the asset's display units.
    pub amount: String,
    /// The token to destroy; `None` burns the native coin.
    pub token_id: Option<TokenId>,
}

/// Total-supply policy requested at issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyPolicy {
    /// Mintable without bound.
    Unlimited,
    /// Mintable until locked.
    Lockable,
    /// Fixed at the given decimal amount.
    Fixed(String),
}

/// Parameters of a fungible-token issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTokenParams {
    /// Ticker symbol.
    pub ticker: String,
    /// Metadata URI.
    pub metadata_uri: String,
    /// Decimal places of the new token.
    pub decimals: u8,
    /// Whether the authority may freeze the token.
    pub freezable: bool,
    /// Total-supply policy.
    pub supply: SupplyPolicy,
    /// Address that will own the token's account commands.
    pub authority: String,
}

/// Parameters of a mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintParams {
    /// The token to mint.
    pub token_id: TokenId,
    /// Decimal amount in the token's display units.
    pub amount: String,
    /// Where the minted supply is credited.
    pub destination: String,
}

/// Parameters of an unmint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmintParams {
    /// The token to unmint.
    pub token_id: TokenId,
    /// Decimal amount in the token's display units.
    pub amount: String,
}

/// Parameters of commands that name only a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCommandParams {
    /// The token being acted on.
    pub token_id: TokenId,
}

/// Parameters of an authority change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeAuthorityParams {
    /// The token changing hands.
    pub token_id: TokenId,
    /// The new authority address.
    pub new_authority: String,
}

/// Parameters of a metadata-URI change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeMetadataParams {
    /// The token being updated.
    pub token_id: TokenId,
    /// The new metadata URI.
    pub new_metadata_uri: String,
}

/// Parameters of a freeze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeParams {
    /// The token being frozen.
    pub token_id: TokenId,
    /// Whether a later unfreeze is permitted.
    pub is_unfreezable: bool,
}

/// Parameters of a data deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDepositParams {
    /// The payload to anchor. Opaque to the engine.
    pub data: Vec<u8>,
}

/// Parameters of an order creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderParams {
    /// Token asked for; `None` asks for coins.
    pub ask_token: Option<TokenId>,
    /// Decimal amount asked for, in the ask asset's display units.
    pub ask_amount: String,
    /// Token offered; `None` offers coins.
    pub give_token: Option<TokenId>,
    /// Decimal amount offered, in the give asset's display units.
    pub give_amount: String,
    /// Where remaining balances return when the order concludes.
    pub conclude_destination: String,
}

/// Parameters of an order fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillOrderParams {
    /// The order to fill.
    pub order_id: OrderId,
    /// Decimal amount of the ask currency to pay, in its display units.
    pub amount: String,
    /// Where the filler receives the give-side assets.
    pub destination: String,
}

/// Parameters of an order conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcludeOrderParams {
    /// The order to conclude.
    pub order_id: OrderId,
}
