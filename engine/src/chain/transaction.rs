//! # Unsigned Transactions
//!
//! The assembler's product: ordered inputs plus ordered outputs,
//! immutable once built. Input and output order is significant — the
//! signer commits to positions, so the engine never reorders or
//! de-duplicates what construction produced.
//!
//! ## Canonical Byte Format
//!
//! [`UnsignedTransaction::encoded_bytes`] deterministically serializes
//! the transaction: a format version byte, then length-prefixed input
//! and output lists with a tag byte per variant, length-prefixed strings
//! and fixed-width little-endian integers. JSON/serde is intentionally
//! avoided here because field ordering is not guaranteed across
//! serialization formats. The transaction id is
//! `hex(double_sha256(encoded_bytes))`, stable across signing.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::chain::input::{AccountCommand, TxInput};
use crate::chain::output::{OutputValue, TokenSupply, TxOutput};
use crate::primitives::amount::Amount;

/// Version byte leading the canonical encoding. Bump on any layout
/// change; the value is part of the wire format and must never be
/// reused.
const TX_FORMAT_VERSION: u8 = 1;

// ---------------------------------------------------------------------------
// UnsignedTransaction
// ---------------------------------------------------------------------------

/// A fully constructed, not yet signed transaction.
///
/// Consumed exactly once by the signer. Field access is read-only; the
/// only way to obtain one is through the construction pipeline, which
/// guarantees the accounting invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
}

impl UnsignedTransaction {
    /// Assembles a transaction from already-ordered parts.
    pub(crate) fn from_parts(inputs: Vec<TxInput>, outputs: Vec<TxOutput>) -> Self {
        UnsignedTransaction { inputs, outputs }
    }

    /// The inputs, in signing order.
    pub fn inputs(&self) -> &[TxInput] {
        &self.inputs
    }

    /// The outputs, in signing order.
    pub fn outputs(&self) -> &[TxOutput] {
        &self.outputs
    }

    /// The canonical byte representation used for the transaction id and
    /// for determinism checks.
    pub fn encoded_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(256);
        buf.push(TX_FORMAT_VERSION);

        buf.extend_from_slice(&(self.inputs.len() as u32).to_le_bytes());
        for input in &self.inputs {
            put_input(&mut buf, input);
        }

        buf.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            put_output(&mut buf, output);
        }

        buf
    }

    /// The transaction id: `hex(double_sha256(encoded_bytes))`.
    pub fn id(&self) -> String {
        hex::encode(double_sha256(&self.encoded_bytes()))
    }
}

/// `SHA-256(SHA-256(data))`, the classic transaction-id construction.
fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    second.into()
}

// ---------------------------------------------------------------------------
// Encoding helpers
// ---------------------------------------------------------------------------
//
// Tag values below are part of the wire format and must never change;
// new variants append new values.

fn put_str(buf: &mut Vec<u8>, s: &str) {
    put_bytes(buf, s.as_bytes());
}

fn put_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    buf.extend_from_slice(bytes);
}

fn put_amount(buf: &mut Vec<u8>, amount: Amount) {
    buf.extend_from_slice(&amount.into_atoms().to_le_bytes());
}

fn put_bool(buf: &mut Vec<u8>, value: bool) {
    buf.push(u8::from(value));
}

fn put_value(buf: &mut Vec<u8>, value: &OutputValue) {
    match value {
        OutputValue::Coin(amount) => {
            buf.push(0x01);
            put_amount(buf, *amount);
        }
        OutputValue::Token(token_id, amount) => {
            buf.push(0x02);
            put_str(buf, token_id.as_str());
            put_amount(buf, *amount);
        }
    }
}

fn put_input(buf: &mut Vec<u8>, input: &TxInput) {
    match input {
        TxInput::Utxo(outpoint) => {
            buf.push(0x00);
            put_str(buf, &outpoint.source);
            buf.extend_from_slice(&outpoint.index.to_le_bytes());
        }
        TxInput::Command { nonce, command } => {
            buf.push(0x01);
            buf.extend_from_slice(&nonce.value().to_le_bytes());
            put_command(buf, command);
        }
    }
}

fn put_command(buf: &mut Vec<u8>, command: &AccountCommand) {
    match command {
        AccountCommand::MintTokens {
            token_id,
            authority,
            amount,
        } => {
            buf.push(0x01);
            put_str(buf, token_id.as_str());
            put_str(buf, authority.as_str());
            put_amount(buf, *amount);
        }
        AccountCommand::UnmintTokens {
            token_id,
            authority,
            amount,
        } => {
            buf.push(0x02);
            put_str(buf, token_id.as_str());
            put_str(buf, authority.as_str());
            put_amount(buf, *amount);
        }
        AccountCommand::LockTokenSupply {
            token_id,
            authority,
        } => {
            buf.push(0x03);
            put_str(buf, token_id.as_str());
            put_str(buf, authority.as_str());
        }
        AccountCommand::ChangeTokenAuthority {
            token_id,
            authority,
            new_authority,
        } => {
            buf.push(0x04);
            put_str(buf, token_id.as_str());
            put_str(buf, authority.as_str());
            put_str(buf, new_authority.as_str());
        }
        AccountCommand::ChangeTokenMetadataUri {
            token_id,
            authority,
            new_metadata_uri,
        } => {
            buf.push(0x05);
            put_str(buf, token_id.as_str());
            put_str(buf, authority.as_str());
            put_str(buf, &new_metadata_uri.text);
        }
        AccountCommand::FreezeToken {
            token_id,
            authority,
            is_unfreezable,
        } => {
            buf.push(0x06);
            put_str(buf, token_id.as_str());
            put_str(buf, authority.as_str());
            put_bool(buf, *is_unfreezable);
        }
        AccountCommand::UnfreezeToken {
            token_id,
            authority,
        } => {
            buf.push(0x07);
            put_str(buf, token_id.as_str());
            put_str(buf, authority.as_str());
        }
        AccountCommand::FillOrder {
            order_id,
            fill,
            destination,
        } => {
            buf.push(0x08);
            put_str(buf, order_id.as_str());
            put_amount(buf, *fill);
            put_str(buf, destination.as_str());
        }
        AccountCommand::ConcludeOrder {
            order_id,
            destination,
        } => {
            buf.push(0x09);
            put_str(buf, order_id.as_str());
            put_str(buf, destination.as_str());
        }
    }
}

fn put_output(buf: &mut Vec<u8>, output: &TxOutput) {
    match output {
        TxOutput::Transfer { value, destination } => {
            buf.push(0x00);
            put_value(buf, value);
            put_str(buf, destination.as_str());
        }
        TxOutput::Burn { value } => {
            buf.push(0x01);
            put_value(buf, value);
        }
        TxOutput::IssueFungibleToken(issuance) => {
            buf.push(0x02);
            put_str(buf, &issuance.ticker.text);
            put_str(buf, &issuance.metadata_uri.text);
            buf.push(issuance.decimals);
            put_bool(buf, issuance.freezable);
            match &issuance.supply {
                TokenSupply::Unlimited => buf.push(0x01),
                TokenSupply::Lockable => buf.push(0x02),
                TokenSupply::Fixed(amount) => {
                    buf.push(0x03);
                    put_amount(buf, *amount);
                }
            }
            put_str(buf, issuance.authority.as_str());
        }
        TxOutput::DataDeposit(data) => {
            buf.push(0x03);
            put_bytes(buf, data);
        }
        TxOutput::CreateOrder(terms) => {
            buf.push(0x04);
            put_value(buf, &terms.ask);
            put_value(buf, &terms.give);
            put_str(buf, terms.conclude_destination.as_str());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
