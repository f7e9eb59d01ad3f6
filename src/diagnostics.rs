//! Structured diagnostics for check results.
//!
//! Every checked item produces one diagnostic carrying a stable code, a
//! severity, and the declared name it refers to. A check passes when none
//! of its diagnostics is an error.

use std::fmt;

use serde::Serialize;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A missing item or unreachable source; fails the check.
    Error,
    /// A confirmed item.
    Info,
}

/// A structured diagnostic message from one check.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Stable code (e.g., `"P001"`, `"M100"`).
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Declared plugin or map name the diagnostic refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic with the given severity, code, and message.
    #[must_use]
    pub fn new(severity: Severity, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            subject: None,
        }
    }

    /// Set the declared name this diagnostic refers to.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Returns `true` if this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns `true` if this diagnostic is informational.
    #[must_use]
    pub fn is_info(&self) -> bool {
        self.severity == Severity::Info
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{}", self.message),
            Severity::Info => write!(f, "info: {}", self.message),
        }
    }
}

// ── Codes ───────────────────────────────────────────────────────────────

// Plugin repository (P)

/// Declared plugin resolves to neither `<name>.smx` nor `<name>/`.
pub const P001: &str = "P001";
/// Plugin found as a single `.smx` file.
pub const P100: &str = "P100";
/// Plugin found as a directory bundle.
pub const P101: &str = "P101";

// Map download server (M)

/// Declared map absent from the server listing.
pub const M001: &str = "M001";
/// Download server could not be reached; no map was checked.
pub const M002: &str = "M002";
/// Map present in the server listing.
pub const M100: &str = "M100";

/// Which of the two checks produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Declared maps against the download server listing.
    Maps,
    /// Declared plugins against the local repository.
    Plugins,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Maps => f.write_str("maps"),
            CheckKind::Plugins => f.write_str("plugins"),
        }
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Check that produced this report.
    pub kind: CheckKind,
    /// Diagnostics in the order the items were checked.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Create an empty report for the given check.
    #[must_use]
    pub fn new(kind: CheckKind) -> Self {
        Self {
            kind,
            diagnostics: Vec::new(),
        }
    }

    /// Returns `true` if no diagnostic is an error.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Names reported missing, in declaration order.
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|d| d.code == P001 || d.code == M001)
            .filter_map(|d| d.subject.as_deref())
            .collect()
    }

    /// Returns `true` if the check could not reach its remote source.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        self.diagnostics.iter().any(|d| d.code == M002)
    }
}

/// Aggregate of the checks that were run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Reports in execution order. A check skipped by fail-fast is absent.
    pub checks: Vec<CheckReport>,
}

impl RunReport {
    /// Returns `true` if every check that ran passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckReport::passed)
    }

    /// Look up the report for a given check, if it ran.
    #[must_use]
    pub fn get(&self, kind: CheckKind) -> Option<&CheckReport> {
        self.checks.iter().find(|c| c.kind == kind)
    }
}
