use url::Url;

use crate::browser::{open_each, validate_urls};
use crate::types::HEALTH_CHECK_TIMEOUT;
use crate::{GateOutcome, LaunchConfig, Result, SystemOpener, UrlOpener, gate};

/// Async browser launcher with an optional health check gate
///
/// Runtime-agnostic: the probe is an async `reqwest` request. Opening the
/// URLs themselves happens inline, since spawning the browser does not wait
/// for it.
///
/// # Example
///
/// ```no_run
/// use browser_launcher::{BrowserLauncher, ServerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let launcher = BrowserLauncher::new()?;
///     let endpoint = ServerConfig::from_env().health_check_url();
///
///     launcher
///         .open_if_healthy(Some(&endpoint), ["http://localhost:8080"])
///         .await?;
///     Ok(())
/// }
/// ```
pub struct BrowserLauncher<O = SystemOpener> {
    client: reqwest::Client,
    opener: O,
}

impl BrowserLauncher<SystemOpener> {
    /// Create a launcher that opens URLs with the system browser
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new() -> Result<Self> {
        Self::with_opener(SystemOpener::new())
    }
}

impl<O: UrlOpener> BrowserLauncher<O> {
    /// Create a launcher that opens URLs through `opener`
    pub fn with_opener(opener: O) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(HEALTH_CHECK_TIMEOUT)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .build()?;
        Ok(Self::from_parts(client, opener))
    }

    /// Create a launcher from an existing HTTP client
    pub fn from_parts(client: reqwest::Client, opener: O) -> Self {
        Self { client, opener }
    }

    /// Open every URL in order
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any URL is blank
    pub fn open_home_page<I, S>(&self, urls: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let urls = validate_urls(urls)?;
        open_each(&self.opener, &urls);
        Ok(())
    }

    /// GET `endpoint` and require an exact 200
    pub async fn check_health(&self, endpoint: &str) -> Result<()> {
        let url = Url::parse(endpoint)?;
        let response = self
            .client
            .get(url)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await?;
        gate::evaluate(response.status().as_u16())
    }

    /// Probe `endpoint`, then open the URLs only if it answered 200
    ///
    /// Same states as [`crate::blocking::BrowserLauncher::open_if_healthy`].
    pub async fn open_if_healthy<I, S>(
        &self,
        endpoint: Option<&str>,
        urls: I,
    ) -> Result<GateOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let urls = validate_urls(urls)?;

        let Some(endpoint) = gate::endpoint_to_probe(endpoint) else {
            gate::log_skip();
            open_each(&self.opener, &urls);
            return Ok(GateOutcome::Skipped);
        };

        let outcome = gate::settle(endpoint, self.check_health(endpoint).await);
        if outcome.launched() {
            open_each(&self.opener, &urls);
        }
        Ok(outcome)
    }

    /// Run a startup launch described by `config`
    pub async fn launch(&self, config: &LaunchConfig) -> Result<GateOutcome> {
        if let Some(profile) = config.excluded_profile() {
            gate::log_profile_excluded(profile);
            return Ok(GateOutcome::ProfileExcluded);
        }
        self.open_if_healthy(config.health_check_endpoint.as_deref(), &config.urls)
            .await
    }
}
