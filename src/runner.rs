//! Runs both checks in a fixed order and aggregates the verdict.

use crate::diagnostics::RunReport;
use crate::errors::Result;
use crate::maps::{check_maps, HttpListing, ListingSource};
use crate::models::{RunOptions, ValidationConfig};
use crate::plugins::check_plugins;

/// Run the map check, then the plugin check.
///
/// With `stop_on_first_failure` a failed map check skips the plugin check
/// entirely, and the returned report holds only the map check.
pub fn run_checks(
    config: &ValidationConfig,
    source: &dyn ListingSource,
    options: &RunOptions,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    let maps = check_maps(config, source, options.stop_on_first_failure);
    let maps_passed = maps.passed();
    report.checks.push(maps);
    if !maps_passed && options.stop_on_first_failure {
        tracing::debug!("map check failed; skipping plugin check");
        return Ok(report);
    }

    report
        .checks
        .push(check_plugins(config, options.stop_on_first_failure)?);
    Ok(report)
}

/// Validate a config against the live download server and the repository.
///
/// Details of any failure go to the log; callers that need them should use
/// [`run_checks`].
pub fn validate(config: &ValidationConfig, options: &RunOptions) -> Result<bool> {
    let source = HttpListing::new(options.timeout);
    Ok(run_checks(config, &source, options)?.passed())
}
