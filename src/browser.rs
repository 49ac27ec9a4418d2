use std::sync::Arc;

use crate::platform::{LaunchCommand, Platform};
use crate::{BrowserLauncherError, Result};

/// How a URL ended up being opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMethod {
    /// The OS browser integration (`webbrowser`)
    Native,
    /// A spawned fallback program such as `xdg-open`
    Command(&'static str),
}

/// A mechanism that can open a single URL
///
/// [`SystemOpener`] is used unless a launcher is built with a custom opener.
pub trait UrlOpener: Send + Sync {
    /// Attempt to open `url`, returning how it was opened
    fn open(&self, url: &str) -> Result<LaunchMethod>;
}

impl<T: UrlOpener + ?Sized> UrlOpener for Arc<T> {
    fn open(&self, url: &str) -> Result<LaunchMethod> {
        (**self).open(url)
    }
}

impl<T: UrlOpener + ?Sized> UrlOpener for Box<T> {
    fn open(&self, url: &str) -> Result<LaunchMethod> {
        (**self).open(url)
    }
}

/// Opens URLs in the user's default web browser
///
/// The native browser integration is tried first when the `browser` feature
/// is enabled and a browser is detected. Otherwise a platform command is
/// spawned and reaped on a background thread.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    platform: Platform,
    #[cfg_attr(not(feature = "browser"), allow(dead_code))]
    prefer_native: bool,
}

impl SystemOpener {
    /// Create an opener for the platform this binary runs on
    pub fn new() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Create an opener that dispatches as if running on `platform`
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            prefer_native: true,
        }
    }

    /// Skip the native integration and always spawn the platform command
    pub fn commands_only(mut self) -> Self {
        self.prefer_native = false;
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<LaunchMethod> {
        #[cfg(feature = "browser")]
        {
            if self.prefer_native && webbrowser::Browser::is_available() {
                webbrowser::open(url).map_err(|e| {
                    BrowserLauncherError::LaunchFailure(format!("Failed to open browser: {}", e))
                })?;
                return Ok(LaunchMethod::Native);
            }
        }

        let command = self
            .platform
            .launch_command(url)
            .ok_or_else(|| BrowserLauncherError::UnsupportedPlatform(self.platform.to_string()))?;
        run_command(&command)
    }
}

fn run_command(command: &LaunchCommand) -> Result<LaunchMethod> {
    command.spawn_detached()?;
    Ok(LaunchMethod::Command(command.program))
}

/// Open every URL in the user's default web browser, in order
///
/// Each URL is attempted once. A URL that fails to open is logged and the
/// remaining URLs are still attempted. Leading and trailing whitespace is
/// stripped from every URL before it is opened.
///
/// # Errors
///
/// Returns `InvalidArgument` if any URL is blank; nothing is opened in that
/// case. Launch failures are never returned.
///
/// # Example
///
/// ```no_run
/// use browser_launcher::open_home_page;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// open_home_page(["https://example.com", "https://www.rust-lang.org"])?;
/// # Ok(())
/// # }
/// ```
pub fn open_home_page<I, S>(urls: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let urls = validate_urls(urls)?;
    open_each(&SystemOpener::new(), &urls);
    Ok(())
}

/// Open a single URL in the user's default web browser
pub fn open_url(url: &str) -> Result<()> {
    open_home_page([url])
}

/// Check every URL before anything is launched
///
/// A blank entry rejects the whole batch, so either all URLs are attempted
/// or none are. Surrounding whitespace is trimmed.
pub(crate) fn validate_urls<I, S>(urls: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .enumerate()
        .map(|(index, url)| {
            let url = url.as_ref().trim();
            if url.is_empty() {
                Err(BrowserLauncherError::InvalidArgument(format!(
                    "URL at position {} is empty",
                    index
                )))
            } else {
                Ok(url.to_string())
            }
        })
        .collect()
}

/// Attempt each URL in order, logging and discarding failures
///
/// Returns the number of URLs that were launched.
pub(crate) fn open_each<O: UrlOpener + ?Sized>(opener: &O, urls: &[String]) -> usize {
    let mut launched = 0;
    for url in urls {
        match opener.open(url) {
            Ok(method) => {
                tracing::debug!(%url, ?method, "opened url");
                launched += 1;
            }
            Err(BrowserLauncherError::UnsupportedPlatform(os)) => {
                tracing::warn!(%url, "Unsupported operating system: {}", os);
            }
            Err(e) => {
                tracing::error!(%url, error = %e, "failed to open url");
            }
        }
    }
    launched
}
