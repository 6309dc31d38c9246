//! Tracked-file index construction.

use std::collections::HashSet;

use tracing::debug;

use seedsweep_core::{Diagnostic, NormalizedKey, TorrentRecord};

/// Set of normalized keys covering every file any torrent references.
///
/// Duplicate torrents referencing the same file collapse to one key; the
/// index carries no ordering and is used purely for membership testing.
#[derive(Debug, Default)]
pub struct TrackedIndex {
    keys: HashSet<NormalizedKey>,
    torrents_indexed: u64,
}

impl TrackedIndex {
    /// Build the index from enumerated torrents.
    ///
    /// Each file's absolute path is the torrent's save path joined with
    /// the relative content path. Torrents with no files are skipped.
    /// A torrent without a usable save path raises a diagnostic and is
    /// skipped; the pass continues with the remaining torrents.
    pub fn build(records: &[TorrentRecord], diagnostics: &mut Vec<Diagnostic>) -> Self {
        let mut index = Self::default();
        for record in records {
            if record.files.is_empty() {
                continue;
            }
            let Some(save_path) = record.save_path.as_deref() else {
                diagnostics.push(Diagnostic::save_path_unresolved(&record.name));
                continue;
            };
            for file in &record.files {
                let absolute = save_path.join(&file.path);
                index.keys.insert(NormalizedKey::from_path(&absolute));
            }
            index.torrents_indexed += 1;
        }
        debug!(
            torrents = index.torrents_indexed,
            keys = index.keys.len(),
            "tracked index built"
        );
        index
    }

    /// Build an index directly from keys, for callers that already hold
    /// resolved paths.
    pub fn from_keys(keys: impl IntoIterator<Item = NormalizedKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            torrents_indexed: 0,
        }
    }

    /// Membership test.
    pub fn contains(&self, key: &NormalizedKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if no files are tracked.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of torrents that contributed files.
    pub fn torrents_indexed(&self) -> u64 {
        self.torrents_indexed
    }
}
