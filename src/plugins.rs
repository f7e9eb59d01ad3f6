//! Declared plugins against the local plugin repository.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::diagnostics::{CheckKind, CheckReport, Diagnostic, Severity, P001, P100, P101};
use crate::errors::Result;
use crate::fs_util::{is_dir, is_file};
use crate::models::{PluginForm, ValidationConfig};

/// Extension of a compiled single-file plugin.
pub const PLUGIN_EXT: &str = "smx";

/// Directory under the repository root that holds plugins.
pub const PLUGINS_DIR: &str = "plugins";

/// Append `.smx` without touching dots already in the name.
fn simple_path(base: &Path) -> PathBuf {
    let mut s: OsString = base.as_os_str().to_owned();
    s.push(".");
    s.push(PLUGIN_EXT);
    PathBuf::from(s)
}

/// Find `name` in the repository at `data_root`.
///
/// `plugins/<name>.smx` as a regular file wins over `plugins/<name>/` as a
/// directory. `Ok(None)` means neither exists.
pub fn resolve_plugin(data_root: &Path, name: &str) -> Result<Option<PluginForm>> {
    let base = data_root.join(PLUGINS_DIR).join(name);

    let simple = simple_path(&base);
    if is_file(&simple)? {
        return Ok(Some(PluginForm::Simple(simple)));
    }
    if is_dir(&base)? {
        return Ok(Some(PluginForm::Bundle(base)));
    }
    Ok(None)
}

/// Check every declared plugin against the repository.
///
/// With `stop_on_first_failure`, checking ends at the first unresolved
/// plugin. A probe that fails for any reason other than absence aborts the
/// check with an error.
pub fn check_plugins(config: &ValidationConfig, stop_on_first_failure: bool) -> Result<CheckReport> {
    let mut report = CheckReport::new(CheckKind::Plugins);
    tracing::info!("validating plugins ...");

    for plugin in &config.plugins {
        match resolve_plugin(&config.data_root, plugin)? {
            Some(PluginForm::Simple(path)) => {
                tracing::info!("found simple plugin '{}'", path.display());
                report.diagnostics.push(
                    Diagnostic::new(
                        Severity::Info,
                        P100,
                        format!("found simple plugin '{}'", path.display()),
                    )
                    .with_subject(plugin),
                );
            }
            Some(PluginForm::Bundle(path)) => {
                tracing::info!("found complex plugin '{}'", path.display());
                report.diagnostics.push(
                    Diagnostic::new(
                        Severity::Info,
                        P101,
                        format!("found complex plugin '{}'", path.display()),
                    )
                    .with_subject(plugin),
                );
            }
            None => {
                let base = config.data_root.join(PLUGINS_DIR).join(plugin);
                tracing::error!("could not find plugin '{}(.{PLUGIN_EXT})'", base.display());
                report.diagnostics.push(
                    Diagnostic::new(
                        Severity::Error,
                        P001,
                        format!("could not find plugin '{}(.{PLUGIN_EXT})'", base.display()),
                    )
                    .with_subject(plugin),
                );
                if stop_on_first_failure {
                    break;
                }
            }
        }
    }

    Ok(report)
}
