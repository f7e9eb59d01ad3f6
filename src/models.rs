use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

/// Default bound on the map listing request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything a validation run needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationConfig {
    /// Game server install directory (`csgo.root_directory`).
    pub server_root: PathBuf,
    /// Repository root holding `plugins/` (`data_src_path`).
    pub data_root: PathBuf,
    /// Map download server base URL (`server_config.sv_downloadurl`).
    pub download_url: String,
    /// Declared maps, in declaration order.
    pub maps: Vec<String>,
    /// Declared plugins, in declaration order.
    pub plugins: Vec<String>,
}

/// Knobs for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop each check at its first miss, and skip the remaining check once
    /// one has failed. When `false`, every declared item is checked.
    pub stop_on_first_failure: bool,
    /// Timeout for the remote listing request.
    pub timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            stop_on_first_failure: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Layout under which a plugin was found in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginForm {
    /// `plugins/<name>.smx`
    Simple(PathBuf),
    /// `plugins/<name>/`
    Bundle(PathBuf),
}

impl PluginForm {
    /// Path that matched.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            PluginForm::Simple(p) | PluginForm::Bundle(p) => p,
        }
    }
}
