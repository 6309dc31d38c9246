//! End-to-end reconciliation pass.

use tracing::info;

use seedsweep_core::{
    Classification, ReconcileConfig, ReconcileReport, ReconcileStats, TorrentRecord,
};
use seedsweep_scan::{FolderScanner, ScanOutcome};

use crate::aggregate::aggregate;
use crate::classify::Classifier;
use crate::index::TrackedIndex;

/// Run one reconciliation pass.
///
/// Sequential stages: index the torrents, scan the category roots,
/// classify every disk file, aggregate per category. Non-fatal problems
/// (unresolvable save paths, unreadable roots) end up in the report's
/// diagnostics; the run itself always produces a complete report once
/// torrent data is in hand.
pub fn reconcile(config: &ReconcileConfig, torrents: &[TorrentRecord]) -> ReconcileReport {
    let mut diagnostics = Vec::new();

    let index = TrackedIndex::build(torrents, &mut diagnostics);

    let scanner = FolderScanner::with_follow_symlinks(config.follow_symlinks);
    let ScanOutcome {
        files,
        diagnostics: mut scan_diagnostics,
        scanned,
    } = scanner.scan(&config.mapping);
    diagnostics.append(&mut scan_diagnostics);

    let classifier = Classifier::new(config);
    let mut stats = ReconcileStats::new();
    stats.torrents_indexed = index.torrents_indexed();
    stats.tracked_keys = index.len() as u64;

    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let verdict = classifier.classify(&file, &index);
        stats.record(verdict, file.size);
        outcomes.push(Classification { verdict, file });
    }

    let categories = aggregate(outcomes, &scanned);

    info!(
        files = stats.files_scanned,
        orphaned = stats.orphaned,
        orphaned_bytes = stats.orphaned_bytes,
        "reconciliation finished"
    );

    ReconcileReport {
        categories,
        diagnostics,
        stats,
    }
}
