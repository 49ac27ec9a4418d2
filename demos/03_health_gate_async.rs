//! Wait for a local service to report healthy, then open it (async)
//!
//! Required features: `async`
//!
//! Run with: cargo run --example 03_health_gate_async --features async

use browser_launcher::{BrowserLauncher, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Browser Launcher - Health Gate (Async) ===\n");

    let server = ServerConfig::from_env();
    let endpoint = server.health_check_url();
    let home = format!("http://{}:{}", server.hostname, server.port);

    let launcher = BrowserLauncher::new()?;
    let outcome = launcher.open_if_healthy(Some(&endpoint), [&home]).await?;
    println!("Outcome: {:?}", outcome);

    Ok(())
}
