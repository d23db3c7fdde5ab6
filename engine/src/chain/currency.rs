//! The two kinds of value a transaction can move.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::primitives::id::TokenId;

/// The asset an amount is denominated in.
///
/// A single transaction moves the native coin (always, if only for fees)
/// and at most one fungible token. The engine keeps the two ledgers
/// strictly separate: coins pay fees, tokens never do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// The native coin.
    Coin,
    /// A fungible token.
    Token(TokenId),
}

impl Currency {
    /// Returns the token id when this is a token currency.
    pub fn token_id(&self) -> Option<&TokenId> {
        match self {
            Currency::Coin => None,
            Currency::Token(id) => Some(id),
        }
    }

    /// Builds a currency from an optional token id; `None` means coin.
    pub fn from_token_option(token_id: Option<TokenId>) -> Self {
        match token_id {
            None => Currency::Coin,
            Some(id) => Currency::Token(id),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Coin => write!(f, "coin"),
            Currency::Token(id) => write!(f, "token {}", id),
        }
    }
}
