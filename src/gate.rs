//! Decisions shared by the blocking and async launchers.

use crate::types::GateOutcome;
use crate::{BrowserLauncherError, Result};

/// The endpoint to probe, or `None` when the check should be skipped
pub(crate) fn endpoint_to_probe(endpoint: Option<&str>) -> Option<&str> {
    endpoint.map(str::trim).filter(|e| !e.is_empty())
}

pub(crate) fn log_skip() {
    tracing::info!("Health check endpoint is null or empty. Skipping health check.");
}

/// Only an exact 200 counts as healthy
pub(crate) fn evaluate(status: u16) -> Result<()> {
    if status == 200 {
        Ok(())
    } else {
        Err(BrowserLauncherError::HealthCheckFailure { status })
    }
}

/// Log the result of a probe and turn it into a terminal state
pub(crate) fn settle(endpoint: &str, result: Result<()>) -> GateOutcome {
    match result {
        Ok(()) => {
            tracing::info!(%endpoint, "Health check passed. Opening home page...");
            GateOutcome::Passed
        }
        Err(BrowserLauncherError::HealthCheckFailure { status }) => {
            tracing::warn!(%endpoint, status, "Health check failed with status code: {}", status);
            GateOutcome::Failed { status }
        }
        Err(e) => {
            tracing::error!(%endpoint, error = %e, "Health check failed with exception");
            GateOutcome::Errored
        }
    }
}

pub(crate) fn log_profile_excluded(profile: &str) {
    tracing::info!(profile, "Skipping browser launch due to profile exclusion.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_endpoint_is_skipped() {
        assert_eq!(endpoint_to_probe(None), None);
        assert_eq!(endpoint_to_probe(Some("")), None);
        assert_eq!(endpoint_to_probe(Some("   ")), None);
        assert_eq!(
            endpoint_to_probe(Some("http://localhost/health")),
            Some("http://localhost/health")
        );
    }

    #[test]
    fn only_200_passes() {
        assert!(evaluate(200).is_ok());
        for status in [201, 204, 301, 404, 503] {
            assert!(matches!(
                evaluate(status),
                Err(BrowserLauncherError::HealthCheckFailure { status: s }) if s == status
            ));
        }
    }

    #[test]
    fn settle_maps_results() {
        assert_eq!(settle("e", Ok(())), GateOutcome::Passed);
        assert_eq!(settle("e", evaluate(503)), GateOutcome::Failed { status: 503 });
        let parse = url::Url::parse("not a url").map(|_| ()).map_err(Into::into);
        assert_eq!(settle("e", parse), GateOutcome::Errored);
    }
}
