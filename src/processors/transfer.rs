// minipix/src/processors/transfer.rs
use crate::core::{MinipixError, Result, TransferMode};
use std::fs;
use std::path::Path;

/// Moves or copies single files. An existing destination is overwritten.
#[derive(Debug, Clone, Copy)]
pub struct Transferer {
    mode: TransferMode,
}

impl Transferer {
    pub fn new(mode: TransferMode) -> Self {
        Self { mode }
    }

    pub fn transfer(&self, from: &Path, to: &Path) -> Result<()> {
        if to.exists() {
            log::warn!("Overwriting existing file: {}", to.display());
        }

        let outcome = match self.mode {
            TransferMode::Copy => fs::copy(from, to).map(|_| ()),
            TransferMode::Move => move_file(from, to),
        };

        outcome.map_err(|source| MinipixError::Transfer {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;

        log::info!("{:?} {} -> {}", self.mode, from.display(), to.display());
        Ok(())
    }
}

fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) => {
            // rename cannot cross filesystems
            log::debug!("Rename failed ({}), falling back to copy", e);
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_keeps_source() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("a.jpg");
        let dst = temp.path().join("b.jpg");
        fs::write(&src, b"pixels").unwrap();

        Transferer::new(TransferMode::Copy).transfer(&src, &dst).unwrap();

        assert!(src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"pixels");
    }

    #[test]
    fn move_removes_source() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("a.jpg");
        let dst = temp.path().join("b.jpg");
        fs::write(&src, b"pixels").unwrap();

        Transferer::new(TransferMode::Move).transfer(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"pixels");
    }

    #[test]
    fn existing_destination_is_overwritten() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("a.jpg");
        let dst = temp.path().join("b.jpg");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old").unwrap();

        Transferer::new(TransferMode::Copy).transfer(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"new");
    }

    #[test]
    fn missing_source_reports_both_paths() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("missing.jpg");
        let dst = temp.path().join("out.jpg");

        let err = Transferer::new(TransferMode::Copy)
            .transfer(&src, &dst)
            .unwrap_err();

        match err {
            MinipixError::Transfer { from, to, .. } => {
                assert_eq!(from, src);
                assert_eq!(to, dst);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
