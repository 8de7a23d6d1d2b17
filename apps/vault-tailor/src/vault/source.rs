//! Link resolution: the one narrow interface the traversal reads notes through.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::vault::index::VaultIndex;
use crate::vault::links::NOTE_EXTENSION;

/// A note located and read successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNote {
    /// File name of the resolved path, used in the corpus header.
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(ResolvedNote),
    NotFound,
    /// The file exists but could not be read as text.
    Unreadable { path: PathBuf, reason: String },
}

/// Resolves a link to note content.
///
/// `link` is the raw text between the brackets; `canonical` is its normalized
/// note name (see [`crate::vault::links::canonical_name`]).
pub trait NoteSource {
    fn resolve(&self, link: &str, canonical: &str) -> Resolution;
}

/// Notes on disk, looked up through a prebuilt [`VaultIndex`].
pub struct FsVault {
    index: VaultIndex,
}

impl FsVault {
    pub fn open(root: &Path) -> Self {
        Self {
            index: VaultIndex::build(root),
        }
    }

    pub fn index(&self) -> &VaultIndex {
        &self.index
    }

    /// Name match anywhere in the tree first; otherwise the link read as a
    /// path relative to the vault root.
    fn locate(&self, link: &str, canonical: &str) -> Option<PathBuf> {
        let candidates = self.index.candidates(canonical);
        if let Some(first) = candidates.first() {
            if candidates.len() > 1 {
                let all: Vec<String> = candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                warn!(
                    "Ambiguous link [[{link}]]: {} files named {canonical}, using {} (candidates: {})",
                    candidates.len(),
                    first.display(),
                    all.join(", ")
                );
            }
            return Some(first.clone());
        }

        let fallback = with_note_extension(self.index.root().join(link), link);
        fallback.is_file().then_some(fallback)
    }
}

impl NoteSource for FsVault {
    fn resolve(&self, link: &str, canonical: &str) -> Resolution {
        let Some(path) = self.locate(link, canonical) else {
            return Resolution::NotFound;
        };

        match fs::read_to_string(&path) {
            Ok(content) => Resolution::Found(ResolvedNote {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| canonical.to_string()),
                path,
                content,
            }),
            Err(e) => Resolution::Unreadable {
                path,
                reason: e.to_string(),
            },
        }
    }
}

fn with_note_extension(path: PathBuf, link: &str) -> PathBuf {
    if link.ends_with(NOTE_EXTENSION) {
        return path;
    }
    let mut raw: OsString = path.into_os_string();
    raw.push(NOTE_EXTENSION);
    PathBuf::from(raw)
}
