//! Run configuration types.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::ConfigError;
use crate::key::NormalizedKey;

/// Suffixes ignored by default: sidecar metadata, artwork, subtitles.
pub const DEFAULT_IGNORE_SUFFIXES: &[&str] = &[
    ".nfo", ".jpg", ".jpeg", ".png", ".svg", ".bin", ".txt", ".srt", ".sub", ".idx",
];

/// Immutable mapping from category to its on-disk root directory.
///
/// Insertion order is preserved; scanning and reporting follow it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryMapping {
    roots: IndexMap<Category, PathBuf>,
}

impl CategoryMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category root. A later insert for the same category
    /// replaces the earlier one.
    pub fn insert(&mut self, category: Category, root: impl Into<PathBuf>) {
        self.roots.insert(category, root.into());
    }

    /// Get the root directory for a category.
    pub fn root_of(&self, category: &Category) -> Option<&Path> {
        self.roots.get(category).map(PathBuf::as_path)
    }

    /// Iterate categories and roots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &Path)> + '_ {
        self.roots.iter().map(|(category, root)| (category, root.as_path()))
    }

    /// Number of configured categories.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Check if no categories are configured.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Validate the mapping: non-empty, with pairwise-distinct roots.
    ///
    /// Distinctness is judged on the normalized form, so two spellings of
    /// the same directory (case, separators, trailing slash) collide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roots.is_empty() {
            return Err(ConfigError::EmptyMapping);
        }
        let mut seen = HashSet::new();
        for (category, root) in &self.roots {
            let folded = root.to_string_lossy();
            let key = NormalizedKey::new(folded.trim_end_matches(['/', '\\']));
            if !seen.insert(key) {
                return Err(ConfigError::DuplicateRoot {
                    category: category.clone(),
                    root: root.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(Category, PathBuf)> for CategoryMapping {
    fn from_iter<I: IntoIterator<Item = (Category, PathBuf)>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

/// Configuration for a reconciliation pass.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ReconcileConfig {
    /// Category to root-directory mapping.
    pub mapping: CategoryMapping,

    /// Literal substrings; any absolute path containing one is excluded.
    #[builder(default)]
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Suffixes to ignore in addition to [`DEFAULT_IGNORE_SUFFIXES`].
    #[builder(default)]
    #[serde(default)]
    pub extra_ignore_suffixes: Vec<String>,

    /// Follow symlinked directories during the scan. Each real directory
    /// is still entered at most once per category.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,
}

fn default_true() -> bool {
    true
}

impl ReconcileConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.mapping {
            Some(mapping) => mapping.validate().map_err(|e| e.to_string()),
            None => Err("category mapping is required".to_string()),
        }
    }
}

impl ReconcileConfig {
    /// Create a new config builder.
    pub fn builder() -> ReconcileConfigBuilder {
        ReconcileConfigBuilder::default()
    }

    /// Create a simple config for a mapping, with default policy.
    pub fn new(mapping: CategoryMapping) -> Self {
        Self {
            mapping,
            exclude_patterns: Vec::new(),
            extra_ignore_suffixes: Vec::new(),
            follow_symlinks: true,
        }
    }

    /// The effective ignore set: defaults plus configured extras,
    /// lowercased and dot-prefixed.
    pub fn ignore_suffixes(&self) -> HashSet<String> {
        let mut set: HashSet<String> = DEFAULT_IGNORE_SUFFIXES
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        for extra in &self.extra_ignore_suffixes {
            let suffix = extra.trim().to_lowercase();
            if suffix.is_empty() {
                continue;
            }
            if suffix.starts_with('.') {
                set.insert(suffix);
            } else {
                set.insert(format!(".{suffix}"));
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn films_mapping() -> CategoryMapping {
        let mut mapping = CategoryMapping::new();
        mapping.insert(Category::named("Films"), "/mnt/films");
        mapping
    }

    #[test]
    fn test_config_builder() {
        let config = ReconcileConfig::builder()
            .mapping(films_mapping())
            .exclude_patterns(vec![" - 720p.mkv".to_string()])
            .follow_symlinks(false)
            .build()
            .unwrap();

        assert_eq!(config.mapping.len(), 1);
        assert_eq!(config.exclude_patterns.len(), 1);
        assert!(!config.follow_symlinks);
    }

    #[test]
    fn test_config_simple() {
        let config = ReconcileConfig::new(films_mapping());
        assert!(config.exclude_patterns.is_empty());
        assert!(config.follow_symlinks);
    }

    #[test]
    fn test_builder_requires_mapping() {
        assert!(ReconcileConfig::builder().build().is_err());
    }

    #[test]
    fn test_builder_rejects_empty_mapping() {
        assert!(
            ReconcileConfig::builder()
                .mapping(CategoryMapping::new())
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_mapping_rejects_duplicate_roots() {
        let mut mapping = films_mapping();
        // Same directory spelled differently still collides.
        mapping.insert(Category::named("Movies"), "/Mnt/Films/");
        let err = mapping.validate().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRoot { .. }));
    }

    #[test]
    fn test_mapping_preserves_order() {
        let mut mapping = CategoryMapping::new();
        mapping.insert(Category::named("Shows"), "/mnt/shows");
        mapping.insert(Category::named("Films"), "/mnt/films");
        let order: Vec<_> = mapping.iter().map(|(c, _)| c.as_str().to_string()).collect();
        assert_eq!(order, vec!["Shows", "Films"]);
    }

    #[test]
    fn test_ignore_suffixes_normalized() {
        let config = ReconcileConfig::builder()
            .mapping(films_mapping())
            .extra_ignore_suffixes(vec!["iso".to_string(), ".SAMPLE".to_string(), " ".to_string()])
            .build()
            .unwrap();

        let suffixes = config.ignore_suffixes();
        assert!(suffixes.contains(".nfo"));
        assert!(suffixes.contains(".iso"));
        assert!(suffixes.contains(".sample"));
        assert!(!suffixes.contains(""));
    }
}
