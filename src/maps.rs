//! Declared maps against the download server listing.

use std::time::Duration;

use crate::diagnostics::{CheckKind, CheckReport, Diagnostic, Severity, M001, M002, M100};
use crate::errors::FetchError;
use crate::listing::{listing_url, RemoteMapSet};
use crate::models::ValidationConfig;

/// Source of a remote listing body.
///
/// Synchronous. [`HttpListing`] is the real implementation; tests supply
/// canned bodies.
pub trait ListingSource {
    /// Fetch the body at `url`. Any transport failure is a [`FetchError`].
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches listings over HTTP with `ureq`.
///
/// Redirects are followed up to ureq's default cap. Non-2xx statuses,
/// redirect loops, and timeouts all surface as [`FetchError`].
pub struct HttpListing {
    agent: ureq::Agent,
}

impl HttpListing {
    /// Create a fetcher whose whole request, body included, is bounded by
    /// `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl ListingSource for HttpListing {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| FetchError::new(url, e))?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| FetchError::new(url, e))
    }
}

/// Check every declared map against the server's published set.
///
/// An unreachable server yields a single `M002` diagnostic and no map is
/// checked. With `stop_on_first_failure`, checking ends at the first map
/// that is not published.
#[must_use]
pub fn check_maps(
    config: &ValidationConfig,
    source: &dyn ListingSource,
    stop_on_first_failure: bool,
) -> CheckReport {
    let mut report = CheckReport::new(CheckKind::Maps);
    tracing::info!("validating maps ...");

    if config.maps.is_empty() {
        return report;
    }

    let url = listing_url(&config.download_url);
    let body = match source.fetch(&url) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(url = %e.url, reason = %e.reason, "download server unreachable");
            report.diagnostics.push(Diagnostic::new(
                Severity::Error,
                M002,
                format!(
                    "download server '{}' unreachable: {}",
                    config.download_url, e.reason
                ),
            ));
            return report;
        }
    };

    let published = RemoteMapSet::parse(&body);
    tracing::debug!(url = %url, published = published.len(), "parsed map listing");

    for map in &config.maps {
        if published.contains(map) {
            tracing::info!("map '{map}' found on download server");
            report.diagnostics.push(
                Diagnostic::new(
                    Severity::Info,
                    M100,
                    format!("map '{map}' found on download server"),
                )
                .with_subject(map),
            );
            continue;
        }

        tracing::error!("map '{map}' not available on download server");
        report.diagnostics.push(
            Diagnostic::new(
                Severity::Error,
                M001,
                format!("map '{map}' not available on download server"),
            )
            .with_subject(map),
        );
        if stop_on_first_failure {
            break;
        }
    }

    report
}
