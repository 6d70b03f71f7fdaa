// minipix/src/processors/pruner.rs
use crate::core::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Removes every empty directory below `root` in one bottom-up pass.
///
/// Children are visited before their parent and emptiness is read from the
/// filesystem at visit time, so a parent emptied by pruning its children is
/// removed in the same pass. `root` itself is kept. Returns the removed
/// directories in removal order.
pub fn prune_empty_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).contents_first(true) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if is_empty_dir(path)? {
            fs::remove_dir(path)?;
            log::info!("Deleted empty directory: {}", path.display());
            removed.push(path.to_path_buf());
        }
    }

    Ok(removed)
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_nested_empty_chain() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a/b/c")).unwrap();

        let removed = prune_empty_dirs(temp.path()).unwrap();

        assert_eq!(removed.len(), 3);
        assert!(!temp.path().join("a").exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn keeps_directories_with_files() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("full/empty")).unwrap();
        fs::write(temp.path().join("full/keep.txt"), b"x").unwrap();

        let removed = prune_empty_dirs(temp.path()).unwrap();

        assert_eq!(removed, vec![temp.path().join("full/empty")]);
        assert!(temp.path().join("full/keep.txt").exists());
    }

    #[test]
    fn parent_with_emptied_siblings_is_removed() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("p/x")).unwrap();
        fs::create_dir_all(temp.path().join("p/y")).unwrap();

        prune_empty_dirs(temp.path()).unwrap();

        assert!(!temp.path().join("p").exists());
    }

    #[test]
    fn empty_root_is_kept() {
        let temp = tempfile::tempdir().unwrap();
        let removed = prune_empty_dirs(temp.path()).unwrap();

        assert!(removed.is_empty());
        assert!(temp.path().exists());
    }
}
