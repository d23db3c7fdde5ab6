//! # Transaction Summaries
//!
//! A human-readable mirror of an [`UnsignedTransaction`], field for
//! field, for signing previews, logs, and audit trails. The summary is
//! derived — it adds display formatting and takes nothing away, so an
//! auditor reading the summary sees exactly what the signer will commit
//! to.

use std::fmt;

use serde::Serialize;

use crate::chain::input::{AccountCommand, TxInput};
use crate::chain::output::{OutputValue, TokenSupply, TxOutput};
use crate::chain::transaction::UnsignedTransaction;
use crate::config::{ChainConfig, COIN_TICKER};
use crate::oracle::TokenDetails;

// ---------------------------------------------------------------------------
// Summary records
// ---------------------------------------------------------------------------

/// Display form of one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InputSummary {
    /// A UTXO spend.
    Utxo {
        /// The consumed outpoint, `txid:index`.
        outpoint: String,
    },
    /// An account command.
    Command {
        /// Stable command name.
        command: String,
        /// The nonce the command executes at, as a string.
        nonce: String,
        /// The token or order the command acts on.
        subject: String,
        /// Command-specific detail (amount, new authority, flags).
        detail: Option<String>,
    },
}

/// Display form of one output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSummary {
    /// Output variant name.
    pub kind: String,
    /// Receiving address, when the variant has one.
    pub destination: Option<String>,
    /// Formatted value, when the variant moves one.
    pub value: Option<String>,
}

/// Human-readable mirror of an unsigned transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxSummary {
    /// The transaction id.
    pub id: String,
    /// Inputs, in signing order.
    pub inputs: Vec<InputSummary>,
    /// Outputs, in signing order.
    pub outputs: Vec<OutputSummary>,
}

impl TxSummary {
    /// Summarizes a transaction.
    ///
    /// Token amounts are formatted with the token's own precision when
    /// `token` matches; unknown tokens fall back to raw atoms, which is
    /// lossless if unfriendly.
    pub fn new(
        tx: &UnsignedTransaction,
        config: &ChainConfig,
        token: Option<&TokenDetails>,
    ) -> Self {
        let format_value = |value: &OutputValue| format_output_value(value, config, token);

        let inputs = tx
            .inputs()
            .iter()
            .map(|input| match input {
                TxInput::Utxo(outpoint) => InputSummary::Utxo {
                    outpoint: outpoint.to_string(),
                },
                TxInput::Command { nonce, command } => InputSummary::Command {
                    command: command.name().to_string(),
                    nonce: nonce.to_string(),
                    subject: command_subject(command),
                    detail: command_detail(command, config, token),
                },
            })
            .collect();

        let outputs = tx
            .outputs()
            .iter()
            .map(|output| match output {
                TxOutput::Transfer { value, destination } => OutputSummary {
                    kind: "transfer".into(),
                    destination: Some(destination.to_string()),
                    value: Some(format_value(value)),
                },
                TxOutput::Burn { value } => OutputSummary {
                    kind: "burn".into(),
                    destination: None,
                    value: Some(format_value(value)),
                },
                TxOutput::IssueFungibleToken(issuance) => OutputSummary {
                    kind: "issue_fungible_token".into(),
                    destination: Some(issuance.authority.to_string()),
                    value: Some(format!(
                        "{} ({} decimals, {})",
                        issuance.ticker.text,
                        issuance.decimals,
                        match &issuance.supply {
                            TokenSupply::Unlimited => "unlimited supply".to_string(),
                            TokenSupply::Lockable => "lockable supply".to_string(),
                            TokenSupply::Fixed(amount) => format!(
                                "fixed supply {}",
                                amount.display_decimal(issuance.decimals)
                            ),
                        }
                    )),
                },
                TxOutput::DataDeposit(data) => OutputSummary {
                    kind: "data_deposit".into(),
                    destination: None,
                    value: Some(format!("{} bytes", data.len())),
                },
                TxOutput::CreateOrder(terms) => OutputSummary {
                    kind: "create_order".into(),
                    destination: Some(terms.conclude_destination.to_string()),
                    value: Some(format!(
                        "ask {}, give {}",
                        format_value(&terms.ask),
                        format_value(&terms.give)
                    )),
                },
            })
            .collect();

        TxSummary {
            id: tx.id(),
            inputs,
            outputs,
        }
    }
}

impl fmt::Display for TxSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "transaction {}", self.id)?;
        writeln!(f, "  inputs:")?;
        for input in &self.inputs {
            match input {
                InputSummary::Utxo { outpoint } => writeln!(f, "    utxo {outpoint}")?,
                InputSummary::Command {
                    command,
                    nonce,
                    subject,
                    detail,
                } => {
                    write!(f, "    {command} nonce={nonce} {subject}")?;
                    if let Some(detail) = detail {
                        write!(f, " ({detail})")?;
                    }
                    writeln!(f)?;
                }
            }
        }
        writeln!(f, "  outputs:")?;
        for output in &self.outputs {
            write!(f, "    {}", output.kind)?;
            if let Some(value) = &output.value {
                write!(f, " {value}")?;
            }
            if let Some(destination) = &output.destination {
                write!(f, " -> {destination}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

fn format_output_value(
    value: &OutputValue,
    config: &ChainConfig,
    token: Option<&TokenDetails>,
) -> String {
    match value {
        OutputValue::Coin(amount) => format!(
            "{} {}",
            amount.display_decimal(config.coin_decimals()),
            COIN_TICKER
        ),
        OutputValue::Token(token_id, amount) => match token {
            Some(details) if details.token_id == *token_id => format!(
                "{} {}",
                amount.display_decimal(details.number_of_decimals),
                token_id
            ),
            _ => format!("{} atoms of {}", amount, token_id),
        },
    }
}

fn command_subject(command: &AccountCommand) -> String {
    match command {
        AccountCommand::MintTokens { token_id, .. }
        | AccountCommand::UnmintTokens { token_id, .. }
        | AccountCommand::LockTokenSupply { token_id, .. }
        | AccountCommand::ChangeTokenAuthority { token_id, .. }
        | AccountCommand::ChangeTokenMetadataUri { token_id, .. }
        | AccountCommand::FreezeToken { token_id, .. }
        | AccountCommand::UnfreezeToken { token_id, .. } => token_id.to_string(),
        AccountCommand::FillOrder { order_id, .. }
        | AccountCommand::ConcludeOrder { order_id, .. } => order_id.to_string(),
    }
}

fn command_detail(
    command: &AccountCommand,
    config: &ChainConfig,
    token: Option<&TokenDetails>,
) -> Option<String> {
    match command {
        AccountCommand::MintTokens { token_id, amount, .. }
        | AccountCommand::UnmintTokens { token_id, amount, .. } => Some(format_output_value(
            &OutputValue::Token(token_id.clone(), *amount),
            config,
            token,
        )),
        AccountCommand::ChangeTokenAuthority { new_authority, .. } => {
            Some(format!("new authority {new_authority}"))
        }
        AccountCommand::ChangeTokenMetadataUri {
            new_metadata_uri, ..
        } => Some(format!("new uri {}", new_metadata_uri.text)),
        AccountCommand::FreezeToken { is_unfreezable, .. } => {
            Some(format!("unfreezable={is_unfreezable}"))
        }
        AccountCommand::FillOrder {
            fill, destination, ..
        } => Some(format!("fill {} atoms -> {destination}", fill)),
        AccountCommand::LockTokenSupply { .. }
        | AccountCommand::UnfreezeToken { .. }
        | AccountCommand::ConcludeOrder { .. } => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
