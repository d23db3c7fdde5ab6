//! # Transaction Inputs
//!
//! A Carrack input either spends a UTXO or carries a nonce-ordered
//! account command: an authorized action against a token account or an
//! order-book entry that consumes no prior output.
//!
//! ## Nonce Model
//!
//! Every account command carries the nonce of the account it acts on.
//! The ledger only accepts a command whose nonce equals the account's
//! next expected value — reuse and gaps are rejected at validation time.
//! The engine's job is narrower: propagate the next nonce exactly as the
//! chain data provider reported it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chain::output::TextHex;
use crate::primitives::address::Address;
use crate::primitives::amount::Amount;
use crate::primitives::id::{OrderId, OutPoint, TokenId};

// ---------------------------------------------------------------------------
// AccountNonce
// ---------------------------------------------------------------------------

/// Strictly increasing per-account counter preventing command replay.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct AccountNonce(u64);

impl AccountNonce {
    /// Wraps a raw nonce value.
    pub const fn new(value: u64) -> Self {
        AccountNonce(value)
    }

    /// The raw nonce value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// AccountCommand
// ---------------------------------------------------------------------------

/// An authorized, nonce-ordered action against a token account or an
/// order. Each variant carries exactly the fields the ledger needs to
/// execute it; there is no generic parameter bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountCommand {
    /// Mints new token supply. The credited output travels separately in
    /// the same transaction.
    MintTokens {
        /// The token being minted.
        token_id: TokenId,
        /// The account authorized to mint.
        authority: Address,
        /// Atoms to mint.
        amount: Amount,
    },
    /// Removes token supply from circulation.
    UnmintTokens {
        /// The token being unminted.
        token_id: TokenId,
        /// The account authorized to unmint.
        authority: Address,
        /// Atoms to unmint.
        amount: Amount,
    },
    /// Permanently locks the token's supply.
    LockTokenSupply {
        /// The token whose supply is being locked.
        token_id: TokenId,
        /// The account authorized to lock.
        authority: Address,
    },
    /// Hands the token account to a new authority.
    ChangeTokenAuthority {
        /// The token changing hands.
        token_id: TokenId,
        /// The current authority.
        authority: Address,
        /// The new authority.
        new_authority: Address,
    },
    /// Replaces the token's metadata URI.
    ChangeTokenMetadataUri {
        /// The token being updated.
        token_id: TokenId,
        /// The account authorized to update.
        authority: Address,
        /// The new URI, text and hex forms.
        new_metadata_uri: TextHex,
    },
    /// Freezes all transfers of the token.
    FreezeToken {
        /// The token being frozen.
        token_id: TokenId,
        /// The account authorized to freeze.
        authority: Address,
        /// Whether a later unfreeze is permitted.
        is_unfreezable: bool,
    },
    /// Lifts a freeze.
    UnfreezeToken {
        /// The token being unfrozen.
        token_id: TokenId,
        /// The account authorized to unfreeze.
        authority: Address,
    },
    /// Fills part of an order at its quoted ratio.
    FillOrder {
        /// The order being filled.
        order_id: OrderId,
        /// Atoms of the ask currency the filler is paying.
        fill: Amount,
        /// Where the filler receives the give-side assets.
        destination: Address,
    },
    /// Closes an order and reclaims its remaining balances.
    ConcludeOrder {
        /// The order being concluded.
        order_id: OrderId,
        /// Where the remaining balances are returned.
        destination: Address,
    },
}

impl AccountCommand {
    /// Stable command name for logs and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            AccountCommand::MintTokens { .. } => "mint_tokens",
            AccountCommand::UnmintTokens { .. } => "unmint_tokens",
            AccountCommand::LockTokenSupply { .. } => "lock_token_supply",
            AccountCommand::ChangeTokenAuthority { .. } => "change_token_authority",
            AccountCommand::ChangeTokenMetadataUri { .. } => "change_token_metadata_uri",
            AccountCommand::FreezeToken { .. } => "freeze_token",
            AccountCommand::UnfreezeToken { .. } => "unfreeze_token",
            AccountCommand::FillOrder { .. } => "fill_order",
            AccountCommand::ConcludeOrder { .. } => "conclude_order",
        }
    }
}

// ---------------------------------------------------------------------------
// TxInput
// ---------------------------------------------------------------------------

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxInput {
    /// Spends an unspent output.
    Utxo(OutPoint),
    /// Executes an account command at the given nonce.
    Command {
        /// The account's next expected nonce, as reported by the chain
        /// data provider at construction time.
        nonce: AccountNonce,
        /// The action being authorized.
        command: AccountCommand,
    },
}

impl TxInput {
    /// A UTXO-spending input.
    pub fn utxo(outpoint: OutPoint) -> Self {
        TxInput::Utxo(outpoint)
    }

    /// An account-command input at the given nonce.
    pub fn command(nonce: AccountNonce, command: AccountCommand) -> Self {
        TxInput::Command { nonce, command }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_displays_as_number() {
        assert_eq!(AccountNonce::new(7).to_string(), "7");
    }

    #[test]
    fn command_names_are_stable() {
        let authority = Address::encode("crk", &[0u8; 20]).unwrap();
        let cmd = AccountCommand::LockTokenSupply {
            token_id: TokenId::new("t1"),
            authority,
        };
        assert_eq!(cmd.name(), "lock_token_supply");
    }
}
