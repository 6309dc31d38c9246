//! Classification policy.

use std::collections::HashSet;
use std::path::Path;

use seedsweep_core::{DiskFile, NormalizedKey, ReconcileConfig, Verdict};

use crate::index::TrackedIndex;

/// Applies ignore, exclude, and tracked-membership rules to disk files.
///
/// Rule order is a deliberate policy: ignored suffixes win over exclude
/// patterns, which win over tracked membership; everything left is
/// orphaned. Suffix matching is case-insensitive; exclude patterns are
/// case-sensitive literal substrings of the absolute path.
#[derive(Debug, Clone)]
pub struct Classifier {
    ignore_suffixes: HashSet<String>,
    exclude_patterns: Vec<String>,
}

impl Classifier {
    /// Build a classifier from the run configuration.
    pub fn new(config: &ReconcileConfig) -> Self {
        Self {
            ignore_suffixes: config.ignore_suffixes(),
            exclude_patterns: config.exclude_patterns.clone(),
        }
    }

    /// Classify one disk file against the tracked index.
    ///
    /// Pure function of its inputs; file size plays no role here.
    pub fn classify(&self, file: &DiskFile, index: &TrackedIndex) -> Verdict {
        if self.has_ignored_suffix(&file.path) {
            return Verdict::Ignored;
        }

        let path_str = file.path.to_string_lossy();
        if self
            .exclude_patterns
            .iter()
            .any(|pattern| path_str.contains(pattern.as_str()))
        {
            return Verdict::Excluded;
        }

        if index.contains(&NormalizedKey::from_path(&file.path)) {
            return Verdict::Tracked;
        }

        Verdict::Orphaned
    }

    fn has_ignored_suffix(&self, path: &Path) -> bool {
        match path.extension() {
            Some(extension) => {
                let suffix = format!(".{}", extension.to_string_lossy().to_lowercase());
                self.ignore_suffixes.contains(&suffix)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedsweep_core::{Category, CategoryMapping};
    use std::path::PathBuf;

    fn config(excludes: &[&str], extra_suffixes: &[&str]) -> ReconcileConfig {
        let mut mapping = CategoryMapping::new();
        mapping.insert(Category::named("Films"), "/mnt/films");
        ReconcileConfig::builder()
            .mapping(mapping)
            .exclude_patterns(excludes.iter().map(|s| (*s).to_string()).collect::<Vec<_>>())
            .extra_ignore_suffixes(
                extra_suffixes
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect::<Vec<_>>(),
            )
            .build()
            .unwrap()
    }

    fn film(path: &str, size: u64) -> DiskFile {
        DiskFile {
            category: Category::named("Films"),
            path: PathBuf::from(path),
            size,
        }
    }

    #[test]
    fn test_decision_order() {
        let classifier = Classifier::new(&config(&["movie"], &[]));
        let index = TrackedIndex::from_keys([NormalizedKey::new("/mnt/films/movie.nfo")]);

        // Ignored beats both the exclude pattern and tracked membership.
        assert_eq!(
            classifier.classify(&film("/mnt/films/movie.nfo", 10), &index),
            Verdict::Ignored
        );

        // Excluded beats tracked membership.
        let index = TrackedIndex::from_keys([NormalizedKey::new("/mnt/films/movie.mkv")]);
        assert_eq!(
            classifier.classify(&film("/mnt/films/movie.mkv", 5000), &index),
            Verdict::Excluded
        );
    }

    #[test]
    fn test_tracked_and_orphaned() {
        let classifier = Classifier::new(&config(&[], &[]));
        let index = TrackedIndex::from_keys([NormalizedKey::new("/mnt/films/movie.mkv")]);

        assert_eq!(
            classifier.classify(&film("/mnt/films/movie.mkv", 5000), &index),
            Verdict::Tracked
        );
        assert_eq!(
            classifier.classify(&film("/mnt/films/other.mkv", 5000), &index),
            Verdict::Orphaned
        );
    }

    #[test]
    fn test_tracked_via_case_and_separator_fold() {
        let classifier = Classifier::new(&config(&[], &[]));
        let index = TrackedIndex::from_keys([NormalizedKey::new("W:\\Films\\Movie.mkv")]);

        assert_eq!(
            classifier.classify(&film("w:/films/movie.mkv", 5000), &index),
            Verdict::Tracked
        );
    }

    #[test]
    fn test_suffix_match_is_case_insensitive() {
        let classifier = Classifier::new(&config(&[], &[]));
        let index = TrackedIndex::default();

        assert_eq!(
            classifier.classify(&film("/mnt/films/Movie.NFO", 10), &index),
            Verdict::Ignored
        );
    }

    #[test]
    fn test_extra_suffixes_apply() {
        let classifier = Classifier::new(&config(&[], &["iso"]));
        let index = TrackedIndex::default();

        assert_eq!(
            classifier.classify(&film("/mnt/films/disc.iso", 10), &index),
            Verdict::Ignored
        );
    }

    #[test]
    fn test_exclude_match_is_case_sensitive() {
        let classifier = Classifier::new(&config(&["Sample"], &[]));
        let index = TrackedIndex::default();

        assert_eq!(
            classifier.classify(&film("/mnt/films/Sample.mkv", 10), &index),
            Verdict::Excluded
        );
        assert_eq!(
            classifier.classify(&film("/mnt/films/sample.mkv", 10), &index),
            Verdict::Orphaned
        );
    }

    #[test]
    fn test_no_extension_is_not_ignored() {
        let classifier = Classifier::new(&config(&[], &[]));
        let index = TrackedIndex::default();

        assert_eq!(
            classifier.classify(&film("/mnt/films/README", 10), &index),
            Verdict::Orphaned
        );
    }

    #[test]
    fn test_zero_byte_file_classified_normally() {
        let classifier = Classifier::new(&config(&[], &[]));
        let index = TrackedIndex::from_keys([NormalizedKey::new("/mnt/films/empty.mkv")]);

        assert_eq!(
            classifier.classify(&film("/mnt/films/empty.mkv", 0), &index),
            Verdict::Tracked
        );
        assert_eq!(
            classifier.classify(&film("/mnt/films/other-empty.mkv", 0), &index),
            Verdict::Orphaned
        );
    }
}
