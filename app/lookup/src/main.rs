use anyhow::{Context, Result};
use rustls::crypto::ring::default_provider;
use tracing::info;

use litelookup::AddressLookupClient;

const EXAMPLE_ADDRESS: &str = "LbPQBNUPSDJvoD6aw7pSEiSs6R2VjMVeNX";

fn install_crypto_provider() {
    // Safe to call once; ignore error if already installed
    let _ = default_provider().install_default();
}

/// Look up the example Litecoin address and print the raw JSON answer.
#[tokio::main]
async fn main() -> Result<()> {
    install_crypto_provider();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = AddressLookupClient::new();
    info!(
        "Using API {} (timeout {}s)",
        client.base_url(),
        client.timeout().as_secs()
    );

    let stats = client
        .get_address(EXAMPLE_ADDRESS)
        .await
        .with_context(|| format!("Failed to look up {}", EXAMPLE_ADDRESS))?;

    println!("{}", stats);

    Ok(())
}
