//! # browser-launcher
//!
//! Open one or more URLs in the user's default web browser, optionally only
//! after a local service answers its health check.
//!
//! Everything here is best-effort: a browser that fails to start, an
//! unsupported platform or an unreachable health endpoint is logged through
//! [`tracing`] and never returned as an error. The only error callers see is
//! `InvalidArgument`, for a blank URL.
//!
//! ## Features
//!
//! - **Blocking API** (default): `blocking::BrowserLauncher`, no async runtime required
//! - **Async API** (optional): Runtime-agnostic `BrowserLauncher`
//! - **Browser Integration** (default): Native default-browser support via `webbrowser`,
//!   falling back to `rundll32`, `open` or `xdg-open`
//! - **Profile Exclusion**: Skip launching in `docker`, `test` and similar deployments
//!
//! ## Quick Start (Blocking API)
//!
//! ```no_run
//! use browser_launcher::{ServerConfig, blocking::BrowserLauncher};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let launcher = BrowserLauncher::new()?;
//!     let server = ServerConfig::from_env();
//!
//!     let endpoint = server.health_check_url();
//!     launcher.open_if_healthy(Some(&endpoint), ["http://localhost:8080"])?;
//!     Ok(())
//! }
//! ```
//!
//! ## Quick Start (Async API)
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! use browser_launcher::BrowserLauncher;
//!
//! # #[cfg(feature = "async")]
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let launcher = BrowserLauncher::new()?;
//!     launcher
//!         .open_if_healthy(Some("http://localhost:8080/actuator/health"), ["http://localhost:8080"])
//!         .await?;
//!     Ok(())
//! }
//! # #[cfg(not(feature = "async"))]
//! # fn main() {}
//! ```

mod browser;
mod error;
mod gate;
mod platform;
mod types;

#[cfg(feature = "async")]
mod client;

#[cfg(feature = "blocking")]
pub mod blocking;

// Public API exports
pub use browser::{LaunchMethod, SystemOpener, UrlOpener, open_home_page, open_url};
pub use error::{BrowserLauncherError, Result};
pub use platform::{LaunchCommand, Platform};
pub use types::{
    DEFAULT_HEALTH_CHECK_PATH, GateOutcome, HEALTH_CHECK_TIMEOUT, LaunchConfig,
    LaunchConfigBuilder, ServerConfig, ServerConfigBuilder,
};

#[cfg(feature = "async")]
pub use client::BrowserLauncher;

#[cfg(feature = "blocking")]
pub use blocking::do_health_check_then_open_home_page;
