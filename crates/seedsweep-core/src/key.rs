//! Path normalization for cross-platform comparison.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Case-folded, separator-canonicalized path string.
///
/// Disk files and torrent contents are compared through these keys, so
/// comparison is case-insensitive and indifferent to `/` versus `\`. The
/// fold is symmetric: both sides of every comparison pass through
/// [`NormalizedKey::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Normalize a path string into a comparison key.
    ///
    /// Case is folded to lowercase, `\` becomes `/`, and runs of
    /// separators collapse to one. The path structure itself is untouched:
    /// no symlink resolution and no `.`/`..` collapsing. Any string is
    /// acceptable input; the empty string yields an empty key.
    pub fn new(path: &str) -> Self {
        let mut out = String::with_capacity(path.len());
        let mut prev_sep = false;
        for c in path.chars() {
            if c == '/' || c == '\\' {
                if !prev_sep {
                    out.push('/');
                }
                prev_sep = true;
            } else {
                prev_sep = false;
                out.extend(c.to_lowercase());
            }
        }
        Self(out)
    }

    /// Normalize an OS path.
    pub fn from_path(path: &Path) -> Self {
        Self::new(&path.to_string_lossy())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
