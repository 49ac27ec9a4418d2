//! Open URLs in the default browser (synchronous)
//!
//! Pass one or more URLs on the command line, or none to open a default page.
//!
//! Required features: `blocking`
//!
//! Run with: cargo run --example 01_open_sync -- https://example.com

use browser_launcher::{Platform, open_home_page};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    println!("=== Browser Launcher - Open URLs (Sync) ===\n");
    println!("Platform: {}", Platform::current());

    let mut urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        urls.push("https://www.rust-lang.org".to_string());
    }

    println!("🌐 Opening {} URL(s)...", urls.len());
    open_home_page(&urls)?;
    println!("✅ Done. Failures, if any, were logged above.");

    Ok(())
}
