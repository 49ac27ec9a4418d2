use thiserror::Error;

/// Error types for browser launching and health checking
///
/// Only [`BrowserLauncherError::InvalidArgument`] is ever returned from the
/// public entry points. Every other variant is produced by an internal step,
/// logged, and discarded.
#[derive(Error, Debug)]
pub enum BrowserLauncherError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to launch browser: {0}")]
    LaunchFailure(String),

    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("Failed to spawn process: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Health check failed with status code: {status}")]
    HealthCheckFailure { status: u16 },

    #[error("Health check failed with exception: {0}")]
    HealthCheckError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for browser launcher operations
pub type Result<T> = std::result::Result<T, BrowserLauncherError>;
