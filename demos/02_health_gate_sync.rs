//! Wait for a local service to report healthy, then open it (synchronous)
//!
//! Reads `SERVER_HOSTNAME`, `SERVER_PORT` and `APP_ACTIVE_PROFILES` from the
//! environment and probes `http://{host}:{port}/actuator/health`.
//!
//! Required features: `blocking`
//!
//! Run with: SERVER_PORT=8080 cargo run --example 02_health_gate_sync

use browser_launcher::{GateOutcome, LaunchConfig, ServerConfig, blocking::BrowserLauncher};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Browser Launcher - Health Gate (Sync) ===\n");

    let server = ServerConfig::from_env();
    let home = format!("http://{}:{}", server.hostname, server.port);
    let config = LaunchConfig::builder()
        .url(&home)
        .default_health_check(&server)
        .active_profiles_from_env()
        .build();

    println!("🔍 Checking {}", server.health_check_url());

    let launcher = BrowserLauncher::new()?;
    match launcher.launch(&config)? {
        GateOutcome::Passed | GateOutcome::Skipped => println!("✅ Opened {}", home),
        GateOutcome::Failed { status } => println!("⚠️  Service answered {}", status),
        GateOutcome::Errored => println!("⚠️  Service is not reachable"),
        GateOutcome::ProfileExcluded => println!("⏭️  Launch disabled for this profile"),
    }

    Ok(())
}
