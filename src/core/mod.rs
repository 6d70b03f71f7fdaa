// minipix/src/core/mod.rs
pub mod sweeper;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Threshold used when the operator accepts the default.
pub const DEFAULT_MIN_SIZE_KB: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    /// Relocate the file, removing it from its source directory.
    Move,
    /// Duplicate the file, leaving the source untouched.
    Copy,
}

impl TransferMode {
    pub fn from_move_flag(move_files: bool) -> Self {
        if move_files {
            TransferMode::Move
        } else {
            TransferMode::Copy
        }
    }
}

/// One iteration's worth of operator input.
///
/// A negative threshold is accepted and simply matches nothing.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub root: PathBuf,
    pub min_size_kb: i64,
    pub mode: TransferMode,
    root_name: OsString,
}

impl ScanRequest {
    /// Builds a request for `root`. The root is made absolute without
    /// resolving symlinks, so its basename is the one the operator typed.
    pub fn new<P: AsRef<Path>>(root: P, min_size_kb: i64, mode: TransferMode) -> Result<Self> {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(MinipixError::InvalidDirectory(root.to_path_buf()));
        }

        let root = std::path::absolute(root)?;
        // `.` and `..` style inputs have no basename of their own
        let root_name = match root.file_name() {
            Some(name) => name.to_os_string(),
            None => root
                .canonicalize()?
                .file_name()
                .map(OsStr::to_os_string)
                .unwrap_or_default(),
        };

        Ok(Self {
            root,
            min_size_kb,
            mode,
            root_name,
        })
    }

    pub fn root_name(&self) -> &OsStr {
        &self.root_name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub path: PathBuf,
    /// Lowercased extension including the leading dot, e.g. `.jpg`.
    pub extension: String,
    pub size_kb: f64,
}

/// Everything a single scan produced. Owned by the caller, discarded after
/// reporting.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub destination: PathBuf,
    pub found: Vec<ImageRecord>,
    pub moved: Vec<ImageRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatStats {
    pub extension: String,
    pub found: usize,
    pub moved: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_found: usize,
    pub total_moved: usize,
    pub per_format: Vec<FormatStats>,
    pub average_found_kb: f64,
    pub average_moved_kb: f64,
}

#[derive(Error, Debug)]
pub enum MinipixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not a directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("Failed to transfer {} to {}: {source}", from.display(), to.display())]
    Transfer {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MinipixError>;
