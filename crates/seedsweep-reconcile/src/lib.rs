//! Reconciliation pipeline for seedsweep.
//!
//! This crate holds the actual algorithm: indexing the files the
//! download client owns, classifying what the disk scan found, and
//! aggregating orphans per category.
//!
//! # Pipeline
//!
//! 1. [`TrackedIndex::build`] turns the client's torrent records into a
//!    set of normalized keys covering every referenced file.
//! 2. The scan walks the category roots (see `seedsweep-scan`).
//! 3. [`Classifier::classify`] gives each disk file a verdict: ignored
//!    suffixes win over exclude patterns, which win over tracked
//!    membership; everything left is orphaned.
//! 4. [`aggregate`] groups orphans per category with running byte totals.
//!
//! [`reconcile`] runs all four stages and collects non-fatal diagnostics
//! into the report.
//!
//! ```rust,ignore
//! use seedsweep_core::{Category, CategoryMapping, ReconcileConfig};
//! use seedsweep_reconcile::reconcile;
//!
//! let mut mapping = CategoryMapping::new();
//! mapping.insert(Category::named("Films"), "/mnt/films");
//! let config = ReconcileConfig::new(mapping);
//!
//! let report = reconcile(&config, &torrents);
//! for (category, section) in &report.categories {
//!     println!("{category}: {} orphaned bytes", section.total_bytes);
//! }
//! ```

mod aggregate;
mod classify;
mod index;
mod pipeline;

pub use aggregate::aggregate;
pub use classify::Classifier;
pub use index::TrackedIndex;
pub use pipeline::reconcile;

// Re-export core types for convenience
pub use seedsweep_core::{
    Category, CategoryReport, Classification, DiskFile, NormalizedKey, ReconcileConfig,
    ReconcileReport, ReconcileStats, TorrentRecord, Verdict,
};
