pub mod config;
pub mod diagnostics;
pub mod errors;
mod fs_util;
pub mod listing;
pub mod maps;
pub mod models;
pub mod plugins;
pub mod runner;

// Re-export key types at crate root for convenience.
pub use diagnostics::{CheckKind, CheckReport, Diagnostic, RunReport, Severity};
pub use errors::{FetchError, GuardError, Result};
pub use listing::RemoteMapSet;
pub use maps::{check_maps, HttpListing, ListingSource};
pub use models::{PluginForm, RunOptions, ValidationConfig};
pub use plugins::{check_plugins, resolve_plugin};
pub use runner::{run_checks, validate};
