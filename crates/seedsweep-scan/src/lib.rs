//! Category folder scanning for seedsweep.
//!
//! Walks each configured category root and collects every regular file as
//! a [`DiskFile`]. Traversal uses an explicit work queue rather than
//! recursion, and follows symlinked directories at most once per category:
//! each real directory identity is entered a single time, which also
//! guards against symlink cycles.
//!
//! # Example
//!
//! ```rust,no_run
//! use seedsweep_core::{Category, CategoryMapping};
//! use seedsweep_scan::FolderScanner;
//!
//! let mut mapping = CategoryMapping::new();
//! mapping.insert(Category::named("Films"), "/mnt/films");
//!
//! let outcome = FolderScanner::new().scan(&mapping);
//! println!("{} files found", outcome.files.len());
//! for diagnostic in &outcome.diagnostics {
//!     eprintln!("{}", diagnostic.message);
//! }
//! ```

mod identity;
mod walker;

pub use identity::{DirIdentity, VisitedDirs};
pub use walker::{FolderScanner, ScanOutcome};

// Re-export core types for convenience
pub use seedsweep_core::{Category, CategoryMapping, Diagnostic, DiagnosticKind, DiskFile};
