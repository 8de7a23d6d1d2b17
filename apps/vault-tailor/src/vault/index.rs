//! Name → path index of a vault, built once per run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::vault::links::NOTE_EXTENSION;

#[derive(Debug, Default)]
pub struct VaultIndex {
    root: PathBuf,
    by_name: HashMap<String, Vec<PathBuf>>,
}

impl VaultIndex {
    /// Walks `root` recursively and records every note file by file name.
    ///
    /// Candidates sharing a name are ordered with files under hidden
    /// directories (`.trash`, `.obsidian`) last, then shallowest first, then
    /// by path.
    pub fn build(root: &Path) -> Self {
        let mut by_name: HashMap<String, Vec<PathBuf>> = HashMap::new();

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable vault entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(NOTE_EXTENSION) {
                continue;
            }
            by_name.entry(name).or_default().push(entry.into_path());
        }

        for paths in by_name.values_mut() {
            paths.sort_by(|a, b| {
                in_hidden_dir(root, a)
                    .cmp(&in_hidden_dir(root, b))
                    .then_with(|| a.components().count().cmp(&b.components().count()))
                    .then_with(|| a.cmp(b))
            });
        }

        debug!(
            "Indexed {} note names under {}",
            by_name.len(),
            root.display()
        );

        Self {
            root: root.to_path_buf(),
            by_name,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All files named `name`, best candidate first.
    pub fn candidates(&self, name: &str) -> &[PathBuf] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct note names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Whether any directory between `root` and `path` is a dot-directory.
fn in_hidden_dir(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.parent()
        .map(|dir| {
            dir.components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_indexes_nested_notes_only() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Portfolio.md");
        touch(dir.path(), "work/Acme.md");
        touch(dir.path(), "attachments/logo.png");

        let index = VaultIndex::build(dir.path());
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.candidates("Acme.md"),
            [dir.path().join("work/Acme.md")]
        );
        assert!(index.candidates("logo.png").is_empty());
    }

    #[test]
    fn test_indexes_notes_in_hidden_directories() {
        let dir = tempdir().unwrap();
        touch(dir.path(), ".old/Archive.md");

        let index = VaultIndex::build(dir.path());
        assert_eq!(
            index.candidates("Archive.md"),
            [dir.path().join(".old/Archive.md")]
        );
    }

    #[test]
    fn test_hidden_duplicates_sort_last() {
        let dir = tempdir().unwrap();
        touch(dir.path(), ".trash/Skills.md");
        touch(dir.path(), "work/deep/Skills.md");

        let index = VaultIndex::build(dir.path());
        assert_eq!(
            index.candidates("Skills.md"),
            [
                dir.path().join("work/deep/Skills.md"),
                dir.path().join(".trash/Skills.md"),
            ]
        );
    }

    #[test]
    fn test_duplicate_names_prefer_shallowest() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a/deep/Skills.md");
        touch(dir.path(), "z/Skills.md");
        touch(dir.path(), "b/Skills.md");

        let index = VaultIndex::build(dir.path());
        let candidates = index.candidates("Skills.md");
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0], dir.path().join("b/Skills.md"));
        assert_eq!(candidates[1], dir.path().join("z/Skills.md"));
        assert_eq!(candidates[2], dir.path().join("a/deep/Skills.md"));
    }

    #[test]
    fn test_missing_root_yields_empty_index() {
        let dir = tempdir().unwrap();
        let index = VaultIndex::build(&dir.path().join("does-not-exist"));
        assert!(index.is_empty());
        assert!(index.candidates("Anything.md").is_empty());
    }
}
