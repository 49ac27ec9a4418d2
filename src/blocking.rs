use std::sync::OnceLock;

use url::Url;

use crate::browser::{open_each, validate_urls};
use crate::types::HEALTH_CHECK_TIMEOUT;
use crate::{GateOutcome, LaunchConfig, Result, SystemOpener, UrlOpener, gate};

/// Blocking browser launcher with an optional health check gate
///
/// The health check blocks the calling thread for at most five seconds.
///
/// # Example
///
/// ```no_run
/// use browser_launcher::{ServerConfig, blocking::BrowserLauncher};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let launcher = BrowserLauncher::new()?;
///     let server = ServerConfig::from_env();
///
///     let endpoint = server.health_check_url();
///     let outcome = launcher.open_if_healthy(Some(&endpoint), ["http://localhost:8080"])?;
///     println!("{:?}", outcome);
///     Ok(())
/// }
/// ```
pub struct BrowserLauncher<O = SystemOpener> {
    client: reqwest::blocking::Client,
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
        Ok(Self::from_parts(build_client()?, opener))
    }

    /// Create a launcher from an existing HTTP client
    pub fn from_parts(client: reqwest::blocking::Client, opener: O) -> Self {
        Self { client, opener }
    }

    /// Open every URL in order
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any URL is blank; nothing is opened in
    /// that case. Launch failures are logged and never returned.
    pub fn open_home_page<I, S>(&self, urls: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let urls = validate_urls(urls)?;
        open_each(&self.opener, &urls);
        Ok(())
    }

    /// Open a single URL
    pub fn open_url(&self, url: &str) -> Result<()> {
        self.open_home_page([url])
    }

    /// GET `endpoint` and require an exact 200
    ///
    /// # Errors
    ///
    /// `HealthCheckFailure` for any other status, `HealthCheckError` for
    /// transport failures and `UrlParse` for a malformed endpoint
    pub fn check_health(&self, endpoint: &str) -> Result<()> {
        let url = Url::parse(endpoint)?;
        let response = self.client.get(url).timeout(HEALTH_CHECK_TIMEOUT).send()?;
        gate::evaluate(response.status().as_u16())
    }

    /// Probe `endpoint`, then open the URLs only if it answered 200
    ///
    /// A `None` or empty endpoint skips the probe and opens the URLs
    /// directly. The probe is attempted once; there is no retry.
    ///
    /// # Errors
    ///
    /// Only `InvalidArgument`, for a blank URL. Every other failure is
    /// reported through the returned [`GateOutcome`].
    pub fn open_if_healthy<I, S>(&self, endpoint: Option<&str>, urls: I) -> Result<GateOutcome>
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

        let outcome = gate::settle(endpoint, self.check_health(endpoint));
        if outcome.launched() {
            open_each(&self.opener, &urls);
        }
        Ok(outcome)
    }

    /// Run a startup launch described by `config`
    ///
    /// Nothing is probed or opened when an active profile is excluded.
    pub fn launch(&self, config: &LaunchConfig) -> Result<GateOutcome> {
        if let Some(profile) = config.excluded_profile() {
            gate::log_profile_excluded(profile);
            return Ok(GateOutcome::ProfileExcluded);
        }
        self.open_if_healthy(config.health_check_endpoint.as_deref(), &config.urls)
    }
}

fn build_client() -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .connect_timeout(HEALTH_CHECK_TIMEOUT)
        .timeout(HEALTH_CHECK_TIMEOUT)
        .build()?)
}

fn shared_client() -> Result<reqwest::blocking::Client> {
    static CLIENT: OnceLock<reqwest::blocking::Client> = OnceLock::new();
    if let Some(client) = CLIENT.get() {
        return Ok(client.clone());
    }
    let client = build_client()?;
    Ok(CLIENT.get_or_init(|| client).clone())
}

/// Probe `endpoint` and open `urls` in the system browser if it answered 200
///
/// Uses a process-wide HTTP client. See [`BrowserLauncher::open_if_healthy`].
///
/// # Example
///
/// ```no_run
/// use browser_launcher::do_health_check_then_open_home_page;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// do_health_check_then_open_home_page(
///     Some("http://localhost:8080/actuator/health"),
///     ["http://localhost:8080", "http://localhost:8080/swagger-ui.html"],
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn do_health_check_then_open_home_page<I, S>(
    endpoint: Option<&str>,
    urls: I,
) -> Result<GateOutcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let urls = validate_urls(urls)?;
    if gate::endpoint_to_probe(endpoint).is_none() {
        gate::log_skip();
        open_each(&SystemOpener::new(), &urls);
        return Ok(GateOutcome::Skipped);
    }

    match shared_client() {
        Ok(client) => BrowserLauncher::from_parts(client, SystemOpener::new())
            .open_if_healthy(endpoint, &urls),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed with exception");
            Ok(GateOutcome::Errored)
        }
    }
}
