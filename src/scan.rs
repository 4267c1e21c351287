//! Source tree traversal.
//!
//! [`walk_files`] lazily yields every non-directory path below a root,
//! depth-first, in the order the filesystem lists each directory. Nothing is
//! sorted, so sibling order is platform-dependent.
//!
//! Symlinks are followed, so a link to a directory is traversed like the
//! directory itself. A link that points back to one of its ancestors is
//! reported as [`ScanError::Loop`] instead of being entered.
//!
//! ## Failures
//!
//! A directory that cannot be listed (missing, permission denied) or an entry
//! that cannot be stat'd (e.g. a dangling symlink) yields one `Err` item. The
//! subtree below it is skipped and the walk carries on with the remaining
//! entries. The caller decides how to report it; nothing here is fatal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("symlink loop back to {}", ancestor.display())]
    Loop { path: PathBuf, ancestor: PathBuf },
}

impl ScanError {
    /// The path that could not be read.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::Io { path, .. } | ScanError::Loop { path, .. } => path,
        }
    }

    fn from_walk(err: walkdir::Error, root: &Path) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        if let Some(ancestor) = err.loop_ancestor() {
            return ScanError::Loop {
                path,
                ancestor: ancestor.to_path_buf(),
            };
        }
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("unreadable directory entry"));
        ScanError::Io { path, source }
    }
}

/// Iterator returned by [`walk_files`].
pub struct SourceFiles {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl Iterator for SourceFiles {
    type Item = Result<PathBuf, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) if entry.file_type().is_dir() => continue,
                Ok(entry) => return Some(Ok(entry.into_path())),
                Err(err) => return Some(Err(ScanError::from_walk(err, &self.root))),
            }
        }
    }
}

/// Walk `root` depth-first, yielding file paths (directories are entered,
/// never yielded). Paths are `root` joined with the relative entry path.
pub fn walk_files(root: &Path) -> SourceFiles {
    SourceFiles {
        root: root.to_path_buf(),
        inner: WalkDir::new(root).follow_links(true).into_iter(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    fn collect_ok(root: &Path) -> BTreeSet<PathBuf> {
        walk_files(root)
            .filter_map(Result::ok)
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn yields_files_recursively() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b")).unwrap();
        fs::write(tmp.path().join("top.jpg"), "").unwrap();
        fs::write(tmp.path().join("a/mid.png"), "").unwrap();
        fs::write(tmp.path().join("a/b/deep.txt"), "").unwrap();

        let files = collect_ok(tmp.path());
        let expected: BTreeSet<PathBuf> = ["top.jpg", "a/mid.png", "a/b/deep.txt"]
            .into_iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(files, expected);
    }

    #[test]
    fn directories_are_not_yielded() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("empty/nested")).unwrap();

        assert!(collect_ok(tmp.path()).is_empty());
    }

    #[test]
    fn depth_first_subtree_is_contiguous() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("sub")).unwrap();
        for name in ["x1", "x2", "x3"] {
            fs::write(tmp.path().join("sub").join(name), "").unwrap();
        }
        fs::write(tmp.path().join("before"), "").unwrap();
        fs::write(tmp.path().join("after"), "").unwrap();

        let sub = tmp.path().join("sub");
        let order: Vec<PathBuf> = walk_files(tmp.path()).map(Result::unwrap).collect();
        let positions: Vec<usize> = order
            .iter()
            .enumerate()
            .filter(|(_, p)| p.parent() == Some(sub.as_path()))
            .map(|(i, _)| i)
            .collect();

        assert_eq!(order.len(), 5);
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[2] - positions[0], 2);
    }

    #[test]
    fn yielded_paths_are_joined_to_root() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("photo.jpg"), "").unwrap();

        let paths: Vec<PathBuf> = walk_files(tmp.path()).map(Result::unwrap).collect();
        assert_eq!(paths, vec![tmp.path().join("photo.jpg")]);
    }

    #[test]
    fn missing_root_yields_single_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");

        let items: Vec<_> = walk_files(&missing).collect();
        assert_eq!(items.len(), 1);
        let err = items[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            ScanError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        ));
        assert_eq!(err.path(), missing);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_reported_and_walk_continues() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("real.jpg"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("dangling.jpg"))
            .unwrap();

        let items: Vec<_> = walk_files(tmp.path()).collect();
        assert_eq!(items.iter().filter(|r| r.is_err()).count(), 1);
        assert_eq!(collect_ok(tmp.path()), BTreeSet::from([PathBuf::from("real.jpg")]));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_is_reported_not_followed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a")).unwrap();
        fs::write(tmp.path().join("a/photo.jpg"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("a"), tmp.path().join("a/again")).unwrap();

        let items: Vec<_> = walk_files(tmp.path()).collect();
        let loops = items
            .iter()
            .filter(|r| matches!(r, Err(ScanError::Loop { .. })))
            .count();
        assert_eq!(loops, 1);
        assert_eq!(
            collect_ok(tmp.path()),
            BTreeSet::from([PathBuf::from("a/photo.jpg")])
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_traversed() {
        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("linked.png"), "").unwrap();
        std::os::unix::fs::symlink(outside.path(), tmp.path().join("shared")).unwrap();

        assert_eq!(
            collect_ok(tmp.path()),
            BTreeSet::from([PathBuf::from("shared/linked.png")])
        );
    }
}
