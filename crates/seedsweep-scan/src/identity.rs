//! Directory identity tracking for symlink-cycle protection.

use std::collections::HashSet;
use std::fs::Metadata;
use std::io;
use std::path::Path;
#[cfg(not(unix))]
use std::path::PathBuf;

/// Identity of a directory on disk.
///
/// Two paths with the same identity are the same directory, however they
/// were reached (directly or through a symlink). On Unix the identity is
/// the (device, inode) pair; elsewhere it falls back to the canonicalized
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirIdentity(Repr);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
    #[cfg(unix)]
    Inode { device: u64, inode: u64 },
    #[cfg(not(unix))]
    Canonical(PathBuf),
}

impl DirIdentity {
    /// Identity for the directory at `path` with the given metadata.
    #[cfg(unix)]
    pub fn of(_path: &Path, metadata: &Metadata) -> io::Result<Self> {
        use std::os::unix::fs::MetadataExt;
        Ok(Self(Repr::Inode {
            device: metadata.dev(),
            inode: metadata.ino(),
        }))
    }

    /// Identity for the directory at `path` with the given metadata.
    #[cfg(not(unix))]
    pub fn of(path: &Path, _metadata: &Metadata) -> io::Result<Self> {
        Ok(Self(Repr::Canonical(path.canonicalize()?)))
    }
}

/// Tracks directories already entered within one category traversal.
#[derive(Debug, Default)]
pub struct VisitedDirs {
    seen: HashSet<DirIdentity>,
}

impl VisitedDirs {
    /// Create a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a directory as entered. Returns `true` the first time; a
    /// repeat means the directory was already reached by another route.
    pub fn enter(&mut self, identity: DirIdentity) -> bool {
        self.seen.insert(identity)
    }

    /// Number of distinct directories entered.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if no directories have been entered.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_enter_same_directory_once() {
        let temp = TempDir::new().unwrap();
        let metadata = fs::metadata(temp.path()).unwrap();
        let identity = DirIdentity::of(temp.path(), &metadata).unwrap();

        let mut visited = VisitedDirs::new();
        assert!(visited.enter(identity.clone()));
        assert!(!visited.enter(identity));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_distinct_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();

        let a = temp.path().join("a");
        let b = temp.path().join("b");
        let id_a = DirIdentity::of(&a, &fs::metadata(&a).unwrap()).unwrap();
        let id_b = DirIdentity::of(&b, &fs::metadata(&b).unwrap()).unwrap();

        let mut visited = VisitedDirs::new();
        assert!(visited.enter(id_a));
        assert!(visited.enter(id_b));
        assert_eq!(visited.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_shares_identity_with_target() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        // fs::metadata follows the link, so both resolve to the target.
        let id_target = DirIdentity::of(&target, &fs::metadata(&target).unwrap()).unwrap();
        let id_link = DirIdentity::of(&link, &fs::metadata(&link).unwrap()).unwrap();
        assert_eq!(id_target, id_link);
    }
}
