//! Walks the engine through a coin transfer and a token mint against an
//! in-memory chain snapshot, printing the summaries a wallet would show
//! before signing.
//!
//! Run with: `cargo run --example demo`

use carrack_engine::{
    build::request::{MintParams, TransferParams},
    build_transaction, AccountNonce, Address, Amount, BuildRequest, ChainConfig, ChainOracle,
    OutPoint, OutputValue, StaticOracle, TokenDetails, TokenId, TxIntent, TxSummary, Utxo,
    UtxoEntry, UtxoKind,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ChainConfig::testnet();
    let wallet = Address::encode(config.hrp(), &[1u8; 20])?;
    let change = Address::encode(config.hrp(), &[2u8; 20])?;
    let friend = Address::encode(config.hrp(), &[3u8; 20])?;
    let authority = Address::encode(config.hrp(), &[7u8; 20])?;

    let token_id = TokenId::new("tcrk1tokenxyz");
    let oracle = StaticOracle::new()
        .with_utxo(
            &wallet,
            UtxoEntry::new(
                OutPoint::new("genesis-faucet", 0),
                Utxo::new(
                    UtxoKind::Transfer,
                    OutputValue::Coin(Amount::from_atoms(1_500 * config.coin_scale())),
                ),
            ),
        )
        .with_token(TokenDetails {
            token_id: token_id.clone(),
            authority,
            number_of_decimals: 2,
            next_nonce: AccountNonce::new(7),
        });

    // A plain coin transfer.
    let transfer = BuildRequest {
        from: vec![wallet.to_string()],
        change: vec![change.to_string()],
        intent: TxIntent::Transfer(TransferParams {
            destination: friend.to_string(),
            amount: "10".into(),
            token_id: None,
        }),
    };
    let tx = build_transaction(&config, &oracle, &transfer).await?;
    println!("{}", TxSummary::new(&tx, &config, None));

    // Minting token supply as the token's authority.
    let mint = BuildRequest {
        from: vec![wallet.to_string()],
        change: vec![change.to_string()],
        intent: TxIntent::MintTokens(MintParams {
            token_id: token_id.clone(),
            amount: "250.75".into(),
            destination: friend.to_string(),
        }),
    };
    let details = oracle.token_details(&token_id).await?;
    let tx = build_transaction(&config, &oracle, &mint).await?;
    println!("{}", TxSummary::new(&tx, &config, Some(&details)));

    Ok(())
}
