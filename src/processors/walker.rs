// minipix/src/processors/walker.rs
use crate::core::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily enumerates every regular file below a root, root included.
///
/// Symlinks are not followed into directories, but a link that resolves to a
/// file is yielded like any other file. Errors from the underlying walk are
/// yielded, not skipped; the caller decides whether to stop. An optional
/// directory can be excluded together with everything beneath it.
pub struct FileWalker {
    root: PathBuf,
    exclude: Option<PathBuf>,
}

impl FileWalker {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            exclude: None,
        }
    }

    pub fn excluding<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.exclude = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Yields `(directory, file name)` pairs, sorted by name within each
    /// directory so the order is stable across runs. Names are passed through
    /// untouched, whatever their encoding.
    pub fn files(self) -> impl Iterator<Item = Result<(PathBuf, OsString)>> {
        let exclude = self.exclude;

        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| match &exclude {
                Some(dir) => entry.path() != dir.as_path(),
                None => true,
            })
            .filter_map(|entry| match entry {
                Ok(entry) if is_file_like(&entry) => {
                    let dir = entry
                        .path()
                        .parent()
                        .map(Path::to_path_buf)
                        .unwrap_or_default();
                    let name = entry.file_name().to_os_string();
                    Some(Ok((dir, name)))
                }
                Ok(_) => None,
                Err(e) => Some(Err(e.into())),
            })
    }
}

fn is_file_like(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}
