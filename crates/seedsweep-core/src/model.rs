//! Data model for a reconciliation pass.
//!
//! Everything here is rebuilt from scratch on every run; the system holds
//! no state between invocations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::Diagnostic;

/// One file inside a torrent, relative to the torrent's save location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentFile {
    /// Path as reported by the client, relative to the save location.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
}

/// A torrent as enumerated from the download client.
///
/// Records are owned by the index builder for the duration of one pass and
/// discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentRecord {
    /// Display name, used in diagnostics.
    pub name: String,
    /// Category the torrent is filed under.
    pub category: Category,
    /// Save location the content paths are relative to.
    pub save_path: Option<PathBuf>,
    /// Content files in client order.
    pub files: Vec<TorrentFile>,
}

/// A regular file found under a category root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskFile {
    /// Category whose root the file was found under.
    pub category: Category,
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
}

/// Outcome of classifying one disk file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Referenced by a torrent.
    Tracked,
    /// On disk but unknown to the download client.
    Orphaned,
    /// Suffix is on the ignore list.
    Ignored,
    /// Path matches an exclude pattern.
    Excluded,
}

/// A verdict paired with the file it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The verdict.
    pub verdict: Verdict,
    /// The originating disk file.
    pub file: DiskFile,
}

/// Orphaned files found under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    /// The category this report covers.
    pub category: Category,
    /// Orphaned files in scan emission order.
    pub orphans: Vec<DiskFile>,
    /// Sum of orphan sizes in bytes.
    pub total_bytes: u64,
}

impl CategoryReport {
    /// Create an empty report for a category.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            orphans: Vec::new(),
            total_bytes: 0,
        }
    }

    /// Record an orphaned file.
    pub fn record(&mut self, file: DiskFile) {
        self.total_bytes += file.size;
        self.orphans.push(file);
    }

    /// Number of orphaned files.
    pub fn orphan_count(&self) -> usize {
        self.orphans.len()
    }

    /// Check if nothing was orphaned in this category.
    pub fn is_empty(&self) -> bool {
        self.orphans.is_empty()
    }

    /// Orphans sorted by path, for stable presentation.
    ///
    /// The stored order follows the scan, which is filesystem-dependent.
    pub fn sorted_orphans(&self) -> Vec<&DiskFile> {
        let mut orphans: Vec<&DiskFile> = self.orphans.iter().collect();
        orphans.sort_by(|a, b| a.path.cmp(&b.path));
        orphans
    }
}

/// Counters accumulated over one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileStats {
    /// Torrents whose files were indexed.
    pub torrents_indexed: u64,
    /// Distinct normalized keys in the tracked index.
    pub tracked_keys: u64,
    /// Disk files classified.
    pub files_scanned: u64,
    /// Files referenced by a torrent.
    pub tracked: u64,
    /// Files unknown to the client.
    pub orphaned: u64,
    /// Files skipped by suffix.
    pub ignored: u64,
    /// Files skipped by exclude pattern.
    pub excluded: u64,
    /// Total bytes across orphaned files.
    pub orphaned_bytes: u64,
}

impl ReconcileStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update counters with one classification.
    pub fn record(&mut self, verdict: Verdict, size: u64) {
        self.files_scanned += 1;
        match verdict {
            Verdict::Tracked => self.tracked += 1,
            Verdict::Orphaned => {
                self.orphaned += 1;
                self.orphaned_bytes += size;
            }
            Verdict::Ignored => self.ignored += 1,
            Verdict::Excluded => self.excluded += 1,
        }
    }
}

/// Complete result of a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Per-category findings. Every scanned category has an entry, empty
    /// when nothing under it was orphaned.
    pub categories: BTreeMap<Category, CategoryReport>,
    /// Non-fatal problems encountered during the pass.
    pub diagnostics: Vec<Diagnostic>,
    /// Summary counters.
    pub stats: ReconcileStats,
}

impl ReconcileReport {
    /// Check if any category has orphaned files.
    pub fn has_orphans(&self) -> bool {
        self.categories.values().any(|report| !report.is_empty())
    }

    /// Total orphaned files across all categories.
    pub fn orphan_count(&self) -> usize {
        self.categories.values().map(CategoryReport::orphan_count).sum()
    }

    /// Total orphaned bytes across all categories.
    pub fn total_orphaned_bytes(&self) -> u64 {
        self.categories.values().map(|report| report.total_bytes).sum()
    }

    /// Check if any diagnostics were raised.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk_file(path: &str, size: u64) -> DiskFile {
        DiskFile {
            category: Category::named("Films"),
            path: PathBuf::from(path),
            size,
        }
    }

    #[test]
    fn test_category_report_accumulates() {
        let mut report = CategoryReport::new(Category::named("Films"));
        assert!(report.is_empty());

        report.record(disk_file("/mnt/films/a.mkv", 5000));
        report.record(disk_file("/mnt/films/b.mkv", 3000));

        assert_eq!(report.orphan_count(), 2);
        assert_eq!(report.total_bytes, 8000);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_sorted_orphans() {
        let mut report = CategoryReport::new(Category::named("Films"));
        report.record(disk_file("/mnt/films/b.mkv", 1));
        report.record(disk_file("/mnt/films/a.mkv", 1));

        let sorted: Vec<_> = report
            .sorted_orphans()
            .into_iter()
            .map(|f| f.path.clone())
            .collect();
        assert_eq!(sorted, vec![PathBuf::from("/mnt/films/a.mkv"), PathBuf::from("/mnt/films/b.mkv")]);
        // Stored order is untouched.
        assert_eq!(report.orphans[0].path, PathBuf::from("/mnt/films/b.mkv"));
    }

    #[test]
    fn test_stats_record() {
        let mut stats = ReconcileStats::new();
        stats.record(Verdict::Tracked, 100);
        stats.record(Verdict::Orphaned, 5000);
        stats.record(Verdict::Ignored, 10);
        stats.record(Verdict::Excluded, 3000);
        stats.record(Verdict::Orphaned, 0);

        assert_eq!(stats.files_scanned, 5);
        assert_eq!(stats.tracked, 1);
        assert_eq!(stats.orphaned, 2);
        assert_eq!(stats.ignored, 1);
        assert_eq!(stats.excluded, 1);
        assert_eq!(stats.orphaned_bytes, 5000);
    }

    #[test]
    fn test_report_totals() {
        let mut films = CategoryReport::new(Category::named("Films"));
        films.record(disk_file("/mnt/films/a.mkv", 5000));
        let shows = CategoryReport::new(Category::named("Shows"));

        let mut categories = BTreeMap::new();
        categories.insert(Category::named("Films"), films);
        categories.insert(Category::named("Shows"), shows);

        let report = ReconcileReport {
            categories,
            diagnostics: Vec::new(),
            stats: ReconcileStats::new(),
        };

        assert!(report.has_orphans());
        assert_eq!(report.orphan_count(), 1);
        assert_eq!(report.total_orphaned_bytes(), 5000);
        assert!(!report.has_diagnostics());
    }
}
