//! Error taxonomy for reconciliation passes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;

/// Invalid run configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No categories configured.
    #[error("category mapping is empty")]
    EmptyMapping,

    /// Two categories resolve to the same root directory.
    #[error("category '{}' reuses root directory {}", .category, .root)]
    DuplicateRoot { category: Category, root: String },
}

/// Kind of non-fatal diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Torrent save path missing or unusable; its files were not indexed.
    SavePathUnresolved,
    /// Category root missing or unreadable; it contributed no disk files.
    CategoryUnreadable,
    /// A path inside an otherwise healthy root could not be read.
    ReadError,
}

/// Non-fatal problem encountered during a pass.
///
/// Diagnostics are collected and surfaced alongside the final report
/// rather than aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Kind of problem.
    pub kind: DiagnosticKind,
    /// Path or torrent the diagnostic refers to.
    pub subject: String,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(kind: DiagnosticKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// A torrent whose save path could not be resolved.
    pub fn save_path_unresolved(torrent: &str) -> Self {
        Self {
            kind: DiagnosticKind::SavePathUnresolved,
            subject: torrent.to_string(),
            message: format!("torrent '{torrent}' has no usable save path; its files were not indexed"),
        }
    }

    /// A category root that could not be scanned at all.
    pub fn category_unreadable(category: &Category, root: &Path, error: &std::io::Error) -> Self {
        Self {
            kind: DiagnosticKind::CategoryUnreadable,
            subject: root.display().to_string(),
            message: format!("category '{category}' root {} not scanned: {error}", root.display()),
        }
    }

    /// A path that failed to read inside an otherwise healthy root.
    pub fn read_error(path: &Path, error: &std::io::Error) -> Self {
        Self {
            kind: DiagnosticKind::ReadError,
            subject: path.display().to_string(),
            message: format!("read error at {}: {error}", path.display()),
        }
    }
}
