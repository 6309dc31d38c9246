//! Core types for seedsweep.
//!
//! This crate provides the data model shared across the seedsweep
//! workspace: categories, normalized path keys, run configuration, the
//! error taxonomy, and the report structures a reconciliation pass
//! produces.

mod category;
mod config;
mod error;
mod key;
mod model;

pub use category::{Category, UNCATEGORIZED};
pub use config::{
    CategoryMapping, DEFAULT_IGNORE_SUFFIXES, ReconcileConfig, ReconcileConfigBuilder,
};
pub use error::{ConfigError, Diagnostic, DiagnosticKind};
pub use key::NormalizedKey;
pub use model::{
    CategoryReport, Classification, DiskFile, ReconcileReport, ReconcileStats, TorrentFile,
    TorrentRecord, Verdict,
};
