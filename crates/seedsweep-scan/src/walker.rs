//! Explicit-queue directory walker.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use seedsweep_core::{Category, CategoryMapping, Diagnostic, DiskFile};

use crate::identity::{DirIdentity, VisitedDirs};

/// Result of scanning a category mapping.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Regular files found, in traversal order.
    pub files: Vec<DiskFile>,
    /// Non-fatal problems raised along the way.
    pub diagnostics: Vec<Diagnostic>,
    /// Categories whose roots were actually walked, in mapping order.
    pub scanned: Vec<Category>,
}

/// Walks category roots and collects regular files.
///
/// Each call to [`FolderScanner::scan`] performs a fresh traversal; no
/// state is carried between scans.
#[derive(Debug, Clone)]
pub struct FolderScanner {
    follow_symlinks: bool,
}

impl FolderScanner {
    /// Create a scanner that follows symlinked directories.
    pub fn new() -> Self {
        Self {
            follow_symlinks: true,
        }
    }

    /// Create a scanner with explicit symlink policy.
    pub fn with_follow_symlinks(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }

    /// Scan every category in the mapping.
    ///
    /// A missing or unreadable root degrades to a diagnostic and the scan
    /// continues with the next category. Per-path failures inside a
    /// healthy root also degrade to diagnostics.
    pub fn scan(&self, mapping: &CategoryMapping) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        for (category, root) in mapping.iter() {
            match self.scan_category(category, root, &mut outcome) {
                Ok(()) => outcome.scanned.push(category.clone()),
                Err(error) => {
                    warn!(
                        category = %category,
                        root = %root.display(),
                        %error,
                        "category root not scanned"
                    );
                    outcome
                        .diagnostics
                        .push(Diagnostic::category_unreadable(category, root, &error));
                }
            }
        }
        debug!(
            files = outcome.files.len(),
            categories = outcome.scanned.len(),
            "disk scan finished"
        );
        outcome
    }

    /// Walk one category root with an explicit work queue.
    fn scan_category(
        &self,
        category: &Category,
        root: &Path,
        outcome: &mut ScanOutcome,
    ) -> io::Result<()> {
        let root_metadata = fs::metadata(root)?;
        if !root_metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                "category root is not a directory",
            ));
        }

        let mut visited = VisitedDirs::new();
        visited.enter(DirIdentity::of(root, &root_metadata)?);

        let mut pending = VecDeque::new();
        pending.push_back(root.to_path_buf());

        while let Some(dir) = pending.pop_front() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(error) => {
                    if dir.as_path() == root {
                        return Err(error);
                    }
                    outcome.diagnostics.push(Diagnostic::read_error(&dir, &error));
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(error) => {
                        outcome.diagnostics.push(Diagnostic::read_error(&dir, &error));
                        continue;
                    }
                };
                let path = entry.path();

                // macOS resource forks carry no content worth reporting
                if entry.file_name().to_string_lossy().starts_with("._") {
                    continue;
                }

                let file_type = match entry.file_type() {
                    Ok(file_type) => file_type,
                    Err(error) => {
                        outcome.diagnostics.push(Diagnostic::read_error(&path, &error));
                        continue;
                    }
                };
                if file_type.is_symlink() && !self.follow_symlinks {
                    continue;
                }

                // Stat through symlinks to see what the entry points at.
                let metadata = match fs::metadata(&path) {
                    Ok(metadata) => metadata,
                    Err(error) => {
                        if file_type.is_symlink() {
                            debug!(path = %path.display(), %error, "skipping broken symlink");
                        } else {
                            outcome.diagnostics.push(Diagnostic::read_error(&path, &error));
                        }
                        continue;
                    }
                };

                if metadata.is_dir() {
                    let identity = match DirIdentity::of(&path, &metadata) {
                        Ok(identity) => identity,
                        Err(error) => {
                            outcome.diagnostics.push(Diagnostic::read_error(&path, &error));
                            continue;
                        }
                    };
                    if visited.enter(identity) {
                        pending.push_back(path);
                    }
                } else if metadata.is_file() {
                    outcome.files.push(DiskFile {
                        category: category.clone(),
                        path,
                        size: metadata.len(),
                    });
                }
                // Sockets, FIFOs, and devices are not media files.
            }
        }

        Ok(())
    }
}

impl Default for FolderScanner {
    fn default() -> Self {
        Self::new()
    }
}
