//! # Chain Configuration & Constants
//!
//! Every magic number the engine relies on lives here: fee schedule,
//! coin precision, address prefixes. The configuration is an explicit
//! value threaded into every call — there is no module-level network
//! state to initialize and no implicit default to trip over.

use serde::{Deserialize, Serialize};

use crate::primitives::amount::Amount;

// ---------------------------------------------------------------------------
// Address Prefixes
// ---------------------------------------------------------------------------

/// Bech32m human-readable prefix for mainnet addresses.
pub const MAINNET_HRP: &str = "crk";

/// Bech32m prefix for testnet addresses.
pub const TESTNET_HRP: &str = "tcrk";

/// Bech32m prefix for devnet addresses.
pub const DEVNET_HRP: &str = "dcrk";

// ---------------------------------------------------------------------------
// Precision
// ---------------------------------------------------------------------------

/// Decimal places of the native coin. One coin is `10^11` atoms.
pub const COIN_DECIMALS: u8 = 11;

/// Display ticker for the native coin. Used only in formatted output;
/// the wire format never carries it.
pub const COIN_TICKER: &str = "CRK";

/// Upper bound on token decimals the engine will work with. Token
/// metadata is oracle-supplied; a value past this bound cannot be scaled
/// into `u128` atoms safely and is rejected at the parsing boundary.
pub const MAX_TOKEN_DECIMALS: u8 = 27;

// ---------------------------------------------------------------------------
// Fee Schedule
// ---------------------------------------------------------------------------
//
// All fees are denominated in whole coins and scaled to atoms through the
// configured coin precision. The flat fee applies to every transaction on
// top of the per-kind base fee.

/// Flat network fee charged on every transaction, in whole coins.
pub const FLAT_FEE_COINS: u128 = 2;

/// Base fee for issuing a new fungible token, in whole coins.
pub const TOKEN_ISSUANCE_FEE_COINS: u128 = 100;

/// Base fee for each token account command (mint, unmint, lock supply,
/// authority/metadata changes, freeze, unfreeze), in whole coins.
pub const ACCOUNT_COMMAND_FEE_COINS: u128 = 50;

/// Base fee for anchoring an opaque data payload on chain, in whole coins.
pub const DATA_DEPOSIT_FEE_COINS: u128 = 100;

// ---------------------------------------------------------------------------
// Validation Limits
// ---------------------------------------------------------------------------

/// Maximum token ticker length in bytes.
pub const MAX_TOKEN_TICKER_LEN: usize = 12;

/// Maximum token metadata URI length in bytes.
pub const MAX_METADATA_URI_LEN: usize = 1024;

/// Maximum data-deposit payload size in bytes.
pub const MAX_DATA_DEPOSIT_BYTES: usize = 1024;

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// The Carrack network a transaction is being constructed for.
///
/// The network determines the address prefix the engine accepts for
/// destinations and change addresses. Nothing else in construction is
/// network-dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// The production chain.
    Mainnet,
    /// The public test chain.
    Testnet,
    /// Local development chains.
    Devnet,
}

impl Network {
    /// Returns the bech32m prefix for addresses on this network.
    pub fn hrp(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_HRP,
            Network::Testnet => TESTNET_HRP,
            Network::Devnet => DEVNET_HRP,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
            Network::Devnet => write!(f, "devnet"),
        }
    }
}

// ---------------------------------------------------------------------------
// ChainConfig
// ---------------------------------------------------------------------------

/// Parameters of the chain a transaction is being constructed for.
///
/// Passed explicitly to every entry point of the engine. Construct one per
/// network and reuse it; the struct is cheap to copy around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    network: Network,
    coin_decimals: u8,
}

impl ChainConfig {
    /// Creates a configuration for the given network with the standard
    /// coin precision.
    pub fn new(network: Network) -> Self {
        Self {
            network,
            coin_decimals: COIN_DECIMALS,
        }
    }

    /// Mainnet configuration.
    pub fn mainnet() -> Self {
        Self::new(Network::Mainnet)
    }

    /// Testnet configuration.
    pub fn testnet() -> Self {
        Self::new(Network::Testnet)
    }

    /// Devnet configuration.
    pub fn devnet() -> Self {
        Self::new(Network::Devnet)
    }

    /// Overrides the native coin precision. Only chains forked with a
    /// non-standard denomination need this; decimals past
    /// [`MAX_TOKEN_DECIMALS`] are not representable in atoms.
    pub fn with_coin_decimals(mut self, decimals: u8) -> Self {
        debug_assert!(decimals <= MAX_TOKEN_DECIMALS);
        self.coin_decimals = decimals;
        self
    }

    /// The network this configuration targets.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The bech32m prefix addresses must carry on this network.
    pub fn hrp(&self) -> &'static str {
        self.network.hrp()
    }

    /// Decimal places of the native coin.
    pub fn coin_decimals(&self) -> u8 {
        self.coin_decimals
    }

    /// Atoms per whole coin: `10^coin_decimals`.
    pub fn coin_scale(&self) -> u128 {
        10u128.saturating_pow(self.coin_decimals as u32)
    }

    /// Flat network fee in atoms, charged on every transaction.
    pub fn flat_fee(&self) -> Amount {
        Amount::from_atoms(FLAT_FEE_COINS.saturating_mul(self.coin_scale()))
    }

    /// Base fee in atoms for a fungible token issuance.
    pub fn token_issuance_fee(&self) -> Amount {
        Amount::from_atoms(TOKEN_ISSUANCE_FEE_COINS.saturating_mul(self.coin_scale()))
    }

    /// Base fee in atoms for a token account command.
    pub fn account_command_fee(&self) -> Amount {
        Amount::from_atoms(ACCOUNT_COMMAND_FEE_COINS.saturating_mul(self.coin_scale()))
    }

    /// Base fee in atoms for a data deposit.
    pub fn data_deposit_fee(&self) -> Amount {
        Amount::from_atoms(DATA_DEPOSIT_FEE_COINS.saturating_mul(self.coin_scale()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrps_are_distinct() {
        assert_ne!(MAINNET_HRP, TESTNET_HRP);
        assert_ne!(MAINNET_HRP, DEVNET_HRP);
        assert_ne!(TESTNET_HRP, DEVNET_HRP);
    }

    #[test]
    fn coin_scale_matches_decimals() {
        let config = ChainConfig::mainnet();
        assert_eq!(config.coin_decimals(), 11);
        assert_eq!(config.coin_scale(), 100_000_000_000);
    }

    #[test]
    fn fee_schedule_in_atoms() {
        let config = ChainConfig::mainnet();
        assert_eq!(config.flat_fee().into_atoms(), 2 * config.coin_scale());
        assert_eq!(
            config.token_issuance_fee().into_atoms(),
            100 * config.coin_scale()
        );
        assert_eq!(
            config.account_command_fee().into_atoms(),
            50 * config.coin_scale()
        );
        assert_eq!(
            config.data_deposit_fee().into_atoms(),
            100 * config.coin_scale()
        );
    }

    #[test]
    fn base_fees_exceed_flat_fee() {
        // The per-kind base fees deliberately dwarf the flat fee; a fee
        // schedule where the flat component dominates would make the
        // per-kind pricing meaningless.
        let config = ChainConfig::mainnet();
        assert!(config.token_issuance_fee() > config.flat_fee());
        assert!(config.account_command_fee() > config.flat_fee());
    }

    #[test]
    fn network_hrp_follows_network() {
        assert_eq!(ChainConfig::mainnet().hrp(), "crk");
        assert_eq!(ChainConfig::testnet().hrp(), "tcrk");
        assert_eq!(ChainConfig::devnet().hrp(), "dcrk");
    }

    #[test]
    fn custom_coin_decimals() {
        let config = ChainConfig::devnet().with_coin_decimals(2);
        assert_eq!(config.coin_scale(), 100);
        assert_eq!(config.flat_fee().into_atoms(), 200);
    }
}
