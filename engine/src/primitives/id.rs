//! Opaque chain identifiers.
//!
//! Token and order ids are strings the chain hands out; the engine
//! carries them around and compares them, nothing more. Outpoints
//! reference a prior transaction output by id and index.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TokenId
// ---------------------------------------------------------------------------

/// Identifier of a fungible token. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    /// Wraps a chain-supplied token id.
    pub fn new(id: impl Into<String>) -> Self {
        TokenId(id.into())
    }

    /// The id in its string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Identifier of an order-book entry. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wraps a chain-supplied order id.
    pub fn new(id: impl Into<String>) -> Self {
        OrderId(id.into())
    }

    /// The id in its string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// OutPoint
// ---------------------------------------------------------------------------

/// Reference to a prior transaction output: source transaction id plus
/// output index. Identifies exactly one spendable unit for its entire
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hex id of the transaction that created the output.
    pub source: String,
    /// Index of the output within that transaction.
    pub index: u32,
}

impl OutPoint {
    /// Creates an outpoint from a source transaction id and output index.
    pub fn new(source: impl Into<String>, index: u32) -> Self {
        OutPoint {
            source: source.into(),
            index,
        }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outpoint_display() {
        let op = OutPoint::new("ab12", 3);
        assert_eq!(op.to_string(), "ab12:3");
    }

    #[test]
    fn ids_compare_by_content() {
        assert_eq!(TokenId::new("t1"), TokenId::new("t1"));
        assert_ne!(TokenId::new("t1"), TokenId::new("t2"));
        assert_eq!(OrderId::new("o1").as_str(), "o1");
    }
}
