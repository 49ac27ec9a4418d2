use serde::Deserialize;
use std::time::Duration;

/// Timeout applied to every health check request
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Path appended to the host/port pair to build the default health check URL
pub const DEFAULT_HEALTH_CHECK_PATH: &str = "/actuator/health";

const DEFAULT_HOSTNAME: &str = "localhost";
const DEFAULT_PORT: u16 = 8080;

/// Terminal state of a gated launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// No endpoint was given; the URLs were opened without a check
    Skipped,
    /// The endpoint answered 200 and the URLs were opened
    Passed,
    /// The endpoint answered with another status; nothing was opened
    Failed { status: u16 },
    /// The request itself failed; nothing was opened
    Errored,
    /// An active profile is excluded; no check, nothing opened
    ProfileExcluded,
}

impl GateOutcome {
    /// Whether the URLs were handed to the opener
    pub fn launched(&self) -> bool {
        matches!(self, GateOutcome::Skipped | GateOutcome::Passed)
    }
}

/// Host and port of the local service being launched
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Hostname (default: "localhost")
    pub hostname: String,
    /// Port (default: 8080)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Create a new config builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Read `SERVER_HOSTNAME` and `SERVER_PORT` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    ///
    /// Missing or blank values and ports that are not a valid `u16` fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(hostname) = lookup("SERVER_HOSTNAME").filter(|h| !h.trim().is_empty()) {
            builder = builder.hostname(hostname.trim());
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.trim().parse().ok()) {
            builder = builder.port(port);
        }
        builder.build()
    }

    /// The default health check URL, e.g. `http://localhost:8080/actuator/health`
    pub fn health_check_url(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.hostname, self.port, DEFAULT_HEALTH_CHECK_PATH
        )
    }
}

/// Builder for ServerConfig
#[derive(Debug, Clone, Default)]
pub struct ServerConfigBuilder {
    hostname: Option<String>,
    port: Option<u16>,
}

impl ServerConfigBuilder {
    /// Set the hostname
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build the ServerConfig
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            hostname: self.hostname.unwrap_or(defaults.hostname),
            port: self.port.unwrap_or(defaults.port),
        }
    }
}

/// Everything needed to decide whether, and what, to launch at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// URLs to open, in order
    pub urls: Vec<String>,
    /// Endpoint to probe first; `None` or empty skips the check
    pub health_check_endpoint: Option<String>,
    /// Profiles in which nothing is launched (default: docker, test, zimaos)
    pub exclude_profiles: Vec<String>,
    /// Profiles the host application is running with
    pub active_profiles: Vec<String>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            health_check_endpoint: None,
            exclude_profiles: vec!["docker".into(), "test".into(), "zimaos".into()],
            active_profiles: Vec::new(),
        }
    }
}

impl LaunchConfig {
    /// Create a new config builder
    pub fn builder() -> LaunchConfigBuilder {
        LaunchConfigBuilder::default()
    }

    /// Default launch settings with active profiles read from `APP_ACTIVE_PROFILES`
    pub fn from_env() -> Self {
        Self::builder().active_profiles_from_env().build()
    }

    /// The first active profile that is excluded, if any
    pub fn excluded_profile(&self) -> Option<&str> {
        self.active_profiles
            .iter()
            .map(|p| p.as_str())
            .find(|active| self.exclude_profiles.iter().any(|p| p == active))
    }
}

/// Builder for LaunchConfig
#[derive(Debug, Clone, Default)]
pub struct LaunchConfigBuilder {
    urls: Vec<String>,
    health_check_endpoint: Option<String>,
    exclude_profiles: Option<Vec<String>>,
    active_profiles: Option<Vec<String>>,
}

impl LaunchConfigBuilder {
    /// Append a URL to open
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(url.into());
        self
    }

    /// Append several URLs to open
    pub fn urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls.extend(urls.into_iter().map(Into::into));
        self
    }

    /// Set the health check endpoint
    pub fn health_check_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.health_check_endpoint = Some(endpoint.into());
        self
    }

    /// Probe the default `/actuator/health` URL of `server`
    pub fn default_health_check(mut self, server: &ServerConfig) -> Self {
        self.health_check_endpoint = Some(server.health_check_url());
        self
    }

    /// Replace the excluded profiles
    pub fn exclude_profiles<I, S>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_profiles = Some(profiles.into_iter().map(Into::into).collect());
        self
    }

    /// Set the active profiles
    pub fn active_profiles<I, S>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_profiles = Some(profiles.into_iter().map(Into::into).collect());
        self
    }

    /// Read active profiles from comma-separated `APP_ACTIVE_PROFILES`
    pub fn active_profiles_from_env(self) -> Self {
        self.active_profiles_from_lookup(|key| std::env::var(key).ok())
    }

    /// Read active profiles from `APP_ACTIVE_PROFILES` through an arbitrary lookup
    pub fn active_profiles_from_lookup<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("APP_ACTIVE_PROFILES").unwrap_or_default();
        self.active_profiles(parse_profiles(&raw))
    }

    /// Build the LaunchConfig
    pub fn build(self) -> LaunchConfig {
        let defaults = LaunchConfig::default();
        LaunchConfig {
            urls: self.urls,
            health_check_endpoint: self.health_check_endpoint,
            exclude_profiles: self.exclude_profiles.unwrap_or(defaults.exclude_profiles),
            active_profiles: self.active_profiles.unwrap_or(defaults.active_profiles),
        }
    }
}

pub(crate) fn parse_profiles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_health_check_url() {
        assert_eq!(
            ServerConfig::default().health_check_url(),
            "http://localhost:8080/actuator/health"
        );
    }

    #[test]
    fn reads_hostname_and_port() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SERVER_HOSTNAME", "127.0.0.1"),
            ("SERVER_PORT", "9090"),
        ]));
        assert_eq!(config.health_check_url(), "http://127.0.0.1:9090/actuator/health");
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SERVER_HOSTNAME", " "),
            ("SERVER_PORT", "eighty"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn excluded_profile_matches_exactly() {
        let config = LaunchConfig::builder()
            .active_profiles(["dev", "docker"])
            .build();
        assert_eq!(config.excluded_profile(), Some("docker"));

        let partial = LaunchConfig::builder().active_profiles(["dock"]).build();
        assert_eq!(partial.excluded_profile(), None);
    }

    #[test]
    fn empty_exclusions_never_match() {
        let config = LaunchConfig::builder()
            .exclude_profiles(Vec::<String>::new())
            .active_profiles(["test"])
            .build();
        assert_eq!(config.excluded_profile(), None);
    }

    #[test]
    fn parses_profile_list() {
        assert_eq!(parse_profiles(" dev, ,prod "), vec!["dev", "prod"]);
        assert!(parse_profiles("").is_empty());
    }

    #[test]
    fn active_profiles_come_from_lookup() {
        let config = LaunchConfig::builder()
            .active_profiles_from_lookup(lookup(&[("APP_ACTIVE_PROFILES", "dev, zimaos")]))
            .build();
        assert_eq!(config.active_profiles, vec!["dev", "zimaos"]);
        assert_eq!(config.excluded_profile(), Some("zimaos"));

        let unset = LaunchConfig::builder()
            .active_profiles_from_lookup(lookup(&[]))
            .build();
        assert!(unset.active_profiles.is_empty());
    }

    #[test]
    fn deserialized_launch_config_keeps_defaults() {
        let config: LaunchConfig = serde_json::from_str(r#"{"urls":["http://x"]}"#).unwrap();
        assert_eq!(config.urls, vec!["http://x"]);
        assert_eq!(config.health_check_endpoint, None);
        assert_eq!(config.exclude_profiles, vec!["docker", "test", "zimaos"]);
        assert!(config.active_profiles.is_empty());
    }

    #[test]
    fn deserialized_server_config_keeps_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port":9090}"#).unwrap();
        assert_eq!(config.hostname, "localhost");
        assert_eq!(config.port, 9090);

        let empty: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ServerConfig::default());
    }

    #[test]
    fn default_health_check_uses_server() {
        let server = ServerConfig::builder().port(3000).build();
        let config = LaunchConfig::builder()
            .url("http://localhost:3000")
            .default_health_check(&server)
            .build();
        assert_eq!(
            config.health_check_endpoint.as_deref(),
            Some("http://localhost:3000/actuator/health")
        );
        assert_eq!(config.exclude_profiles, vec!["docker", "test", "zimaos"]);
    }
}
