//! # Transaction Outputs
//!
//! The closed set of output variants the engine can emit. Every variant
//! has an explicit constructor so a half-initialized output is not
//! representable; once built, outputs are never mutated.

use serde::{Deserialize, Serialize};

use crate::chain::currency::Currency;
use crate::primitives::address::Address;
use crate::primitives::amount::Amount;
use crate::primitives::id::TokenId;

// ---------------------------------------------------------------------------
// OutputValue
// ---------------------------------------------------------------------------

/// A concrete quantity of a concrete asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputValue {
    /// Native coin atoms.
    Coin(Amount),
    /// Atoms of one fungible token.
    Token(TokenId, Amount),
}

impl OutputValue {
    /// The asset this value is denominated in.
    pub fn currency(&self) -> Currency {
        match self {
            OutputValue::Coin(_) => Currency::Coin,
            OutputValue::Token(id, _) => Currency::Token(id.clone()),
        }
    }

    /// The atom count, whichever asset it is.
    pub fn amount(&self) -> Amount {
        match self {
            OutputValue::Coin(amount) => *amount,
            OutputValue::Token(_, amount) => *amount,
        }
    }

    /// The token id when this is a token value.
    pub fn token_id(&self) -> Option<&TokenId> {
        match self {
            OutputValue::Coin(_) => None,
            OutputValue::Token(id, _) => Some(id),
        }
    }
}

// ---------------------------------------------------------------------------
// TextHex
// ---------------------------------------------------------------------------

/// A string field carried in both its UTF-8 and hex-encoded byte forms.
///
/// The chain's wire format wants the raw bytes; explorers and signing
/// previews want the text. Carrying both, derived once at construction,
/// keeps the two from drifting apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextHex {
    /// The UTF-8 text.
    pub text: String,
    /// Hex encoding of the UTF-8 bytes.
    pub hex: String,
}

impl TextHex {
    /// Derives both forms from the text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let hex = hex::encode(text.as_bytes());
        TextHex { text, hex }
    }
}

// ---------------------------------------------------------------------------
// TokenIssuance
// ---------------------------------------------------------------------------

/// Total-supply policy of a newly issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenSupply {
    /// Supply can grow without bound through mint commands.
    Unlimited,
    /// Supply can grow until the authority locks it, after which mint and
    /// unmint are permanently rejected.
    Lockable,
    /// Supply is fixed at issuance; the given amount is minted once.
    Fixed(Amount),
}

/// Descriptor output for a new fungible token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIssuance {
    /// Ticker symbol, text and hex forms.
    pub ticker: TextHex,
    /// Metadata URI, text and hex forms.
    pub metadata_uri: TextHex,
    /// Decimal places of the token.
    pub decimals: u8,
    /// Whether the authority may freeze transfers of this token.
    pub freezable: bool,
    /// Total-supply policy.
    pub supply: TokenSupply,
    /// Address that will own the token's account commands.
    pub authority: Address,
}

// ---------------------------------------------------------------------------
// OrderTerms
// ---------------------------------------------------------------------------

/// Terms of a new order-book entry.
///
/// The creator funds the give side; fillers pay in the ask currency and
/// drain the give balance. Concluding returns whatever remains of both
/// sides to the conclude destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTerms {
    /// What the creator asks for.
    pub ask: OutputValue,
    /// What the creator is offering (and funding in this transaction).
    pub give: OutputValue,
    /// Where the remaining balances go when the order concludes.
    pub conclude_destination: Address,
}

// ---------------------------------------------------------------------------
// TxOutput
// ---------------------------------------------------------------------------

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxOutput {
    /// Pays a value to a destination.
    Transfer {
        /// The asset and amount being paid.
        value: OutputValue,
        /// The receiving address.
        destination: Address,
    },
    /// Destroys a value permanently.
    Burn {
        /// The asset and amount being destroyed.
        value: OutputValue,
    },
    /// Declares a new fungible token.
    IssueFungibleToken(Box<TokenIssuance>),
    /// Anchors an opaque payload on chain.
    DataDeposit(Vec<u8>),
    /// Opens an order-book entry.
    CreateOrder(Box<OrderTerms>),
}

impl TxOutput {
    /// A transfer of `value` to `destination`.
    pub fn transfer(value: OutputValue, destination: Address) -> Self {
        TxOutput::Transfer { value, destination }
    }

    /// A burn of `value`.
    pub fn burn(value: OutputValue) -> Self {
        TxOutput::Burn { value }
    }

    /// A fungible-token issuance descriptor.
    pub fn issue_fungible_token(issuance: TokenIssuance) -> Self {
        TxOutput::IssueFungibleToken(Box::new(issuance))
    }

    /// A data-deposit payload.
    pub fn data_deposit(data: Vec<u8>) -> Self {
        TxOutput::DataDeposit(data)
    }

    /// An order creation with the given terms.
    pub fn create_order(terms: OrderTerms) -> Self {
        TxOutput::CreateOrder(Box::new(terms))
    }

    /// The value this output moves, when it moves one. Issuance and data
    /// deposits carry no value; their cost is entirely in fees.
    pub fn value(&self) -> Option<&OutputValue> {
        match self {
            TxOutput::Transfer { value, .. } | TxOutput::Burn { value } => Some(value),
            TxOutput::IssueFungibleToken(_) | TxOutput::DataDeposit(_) => None,
            // An order's give side is funded by this transaction; the ask
            // side is only advertised.
            TxOutput::CreateOrder(terms) => Some(&terms.give),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_hex_derives_hex_form() {
        let th = TextHex::new("XPL");
        assert_eq!(th.text, "XPL");
        assert_eq!(th.hex, "58504c");
    }

    #[test]
    fn output_value_accessors() {
        let coin = OutputValue::Coin(Amount::from_atoms(10));
        assert_eq!(coin.currency(), Currency::Coin);
        assert_eq!(coin.amount(), Amount::from_atoms(10));
        assert_eq!(coin.token_id(), None);

        let token = OutputValue::Token(TokenId::new("t1"), Amount::from_atoms(5));
        assert_eq!(token.token_id(), Some(&TokenId::new("t1")));
        assert_eq!(token.amount(), Amount::from_atoms(5));
    }

    #[test]
    fn create_order_value_is_the_give_side() {
        let dest = Address::encode("crk", &[1u8; 20]).unwrap();
        let output = TxOutput::create_order(OrderTerms {
            ask: OutputValue::Coin(Amount::from_atoms(100)),
            give: OutputValue::Token(TokenId::new("t1"), Amount::from_atoms(7)),
            conclude_destination: dest,
        });
        let value = output.value().unwrap();
        assert_eq!(value.amount(), Amount::from_atoms(7));
        assert_eq!(value.token_id(), Some(&TokenId::new("t1")));
    }

    #[test]
    fn non_value_outputs() {
        assert!(TxOutput::data_deposit(vec![1, 2, 3]).value().is_none());
    }
}
