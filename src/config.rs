//! Loading deployment configs and the settings file.
//!
//! Both files are YAML. Deployment values are addressed by dotted key path
//! (`csgo.maps`), the settings file supplies `data_src_path`.

use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;

use crate::errors::{GuardError, Result};
use crate::models::ValidationConfig;

/// Settings file read when neither the CLI nor the environment names one.
pub const DEFAULT_SETTINGS_PATH: &str = "/etc/srvguard/main.cfg";

/// Environment variable overriding [`DEFAULT_SETTINGS_PATH`].
pub const SETTINGS_ENV: &str = "SRVGUARD_SETTINGS";

/// Key paths read from a deployment config.
pub const KEY_SERVER_ROOT: &str = "csgo.root_directory";
pub const KEY_DOWNLOAD_URL: &str = "server_config.sv_downloadurl";
pub const KEY_MAPS: &str = "csgo.maps";
pub const KEY_PLUGINS: &str = "sourcemod.plugins";
/// Key read from the settings file.
pub const KEY_DATA_ROOT: &str = "data_src_path";

/// A parsed YAML document with dotted-path lookups.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    root: Value,
}

impl ConfigDocument {
    /// Parse YAML text. An empty document has no keys.
    pub fn parse(content: &str) -> Result<Self> {
        let root: Value = serde_yaml_ng::from_str(content)?;
        Ok(Self { root })
    }

    /// Read and parse a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GuardError::Config {
            message: format!("cannot read '{}': {e}", path.display()),
        })?;
        Self::parse(&content).map_err(|e| GuardError::Config {
            message: format!("'{}': {e}", path.display()),
        })
    }

    /// Look up a dotted key path such as `server_config.sv_downloadurl`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
            .filter(|v| !v.is_null())
    }

    /// Look up a required string value.
    pub fn require_str(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(config_error(format!("'{key}' must be a string"))),
            None => Err(config_error(format!("missing required key '{key}'"))),
        }
    }

    /// Look up a required sequence of names.
    ///
    /// Non-string entries are rejected rather than stringified, so a map
    /// declared as `- 1` or `- yes` surfaces as a config error.
    pub fn require_names(&self, key: &str) -> Result<Vec<String>> {
        let seq = match self.get(key) {
            Some(Value::Sequence(seq)) => seq,
            Some(_) => return Err(config_error(format!("'{key}' must be a list"))),
            None => return Err(config_error(format!("missing required key '{key}'"))),
        };
        seq.iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::String(s) => Ok(s.clone()),
                _ => Err(config_error(format!(
                    "'{key}' entry #{} must be a string",
                    i + 1
                ))),
            })
            .collect()
    }
}

fn config_error(message: String) -> GuardError {
    GuardError::Config { message }
}

/// Settings file location: `$SRVGUARD_SETTINGS`, else the default path.
#[must_use]
pub fn settings_path() -> PathBuf {
    std::env::var_os(SETTINGS_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH))
}

/// Read the plugin repository root from a settings file.
pub fn load_data_root(settings: &Path) -> Result<PathBuf> {
    let doc = ConfigDocument::load(settings)?;
    Ok(PathBuf::from(doc.require_str(KEY_DATA_ROOT)?))
}

impl ValidationConfig {
    /// Build a config from a parsed deployment document.
    pub fn from_document(doc: &ConfigDocument, data_root: PathBuf) -> Result<Self> {
        Ok(Self {
            server_root: PathBuf::from(doc.require_str(KEY_SERVER_ROOT)?),
            data_root,
            download_url: doc.require_str(KEY_DOWNLOAD_URL)?.to_string(),
            maps: doc.require_names(KEY_MAPS)?,
            plugins: doc.require_names(KEY_PLUGINS)?,
        })
    }

    /// Load a deployment config file.
    pub fn load(config_path: &Path, data_root: PathBuf) -> Result<Self> {
        let doc = ConfigDocument::load(config_path)?;
        let config = Self::from_document(&doc, data_root)?;
        tracing::info!(
            config = %config_path.display(),
            server_root = %config.server_root.display(),
            "config validation initialized"
        );
        Ok(config)
    }
}
