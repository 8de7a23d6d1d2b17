//! Breadth-first aggregation of linked notes.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::vault::links::{canonical_name, extract_links};
use crate::vault::source::{FsVault, NoteSource, Resolution};
use crate::vault::VaultError;

/// One note's contribution to the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// Aggregated notes in discovery order, plus what had to be skipped.
#[derive(Debug, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    unresolved: Vec<String>,
    unreadable: Vec<PathBuf>,
}

impl Corpus {
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Links that matched no file, in the order they were dropped.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn unreadable(&self) -> &[PathBuf] {
        &self.unreadable
    }

    /// Concatenates every note, each behind a `--- NOTE: <file> ---` header.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&note_header(&entry.name));
            out.push_str(&entry.content);
        }
        out
    }
}

fn note_header(name: &str) -> String {
    format!("\n\n--- NOTE: {name} ---\n\n")
}

/// Outcome of a single [`TraversalState::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Added { name: String, links_found: usize },
    AlreadyVisited(String),
    Unresolved(String),
    Unreadable { link: String, path: PathBuf },
}

/// Queue, visited set and growing corpus of a traversal in progress.
#[derive(Debug)]
pub struct TraversalState {
    queue: VecDeque<String>,
    visited: HashSet<String>,
    corpus: Corpus,
}

impl TraversalState {
    pub fn new(root_link: impl Into<String>) -> Self {
        Self {
            queue: VecDeque::from([root_link.into()]),
            visited: HashSet::new(),
            corpus: Corpus::default(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    /// Processes the link at the front of the queue. Returns `None` once the
    /// queue is empty.
    ///
    /// A note is marked visited only after it has been read, so a note that
    /// failed to read is attempted again if another link names it.
    pub fn step<S: NoteSource + ?Sized>(&mut self, source: &S) -> Option<Step> {
        let link = self.queue.pop_front()?;
        let canonical = canonical_name(&link);

        if self.visited.contains(&canonical) {
            return Some(Step::AlreadyVisited(canonical));
        }

        let step = match source.resolve(&link, &canonical) {
            Resolution::Found(note) => {
                let links = extract_links(&note.content);
                let links_found = links.len();
                self.queue.extend(links);
                self.visited.insert(canonical);
                debug!("Added {} ({} links)", note.path.display(), links_found);

                let name = note.name.clone();
                self.corpus.entries.push(CorpusEntry {
                    name: note.name,
                    path: note.path,
                    content: note.content,
                });
                Step::Added { name, links_found }
            }
            Resolution::NotFound => {
                warn!("Could not find linked note: {link}");
                self.corpus.unresolved.push(link.clone());
                Step::Unresolved(link)
            }
            Resolution::Unreadable { path, reason } => {
                error!("An error occurred while reading {}: {reason}", path.display());
                self.corpus.unreadable.push(path.clone());
                Step::Unreadable { link, path }
            }
        };
        Some(step)
    }

    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }
}

/// Walks every note reachable from `root_link` through `source`.
pub fn aggregate<S: NoteSource + ?Sized>(root_link: &str, source: &S) -> Corpus {
    let mut state = TraversalState::new(root_link);
    while !state.is_done() {
        state.step(source);
    }
    state.into_corpus()
}

/// Aggregates the vault rooted at the directory containing `root_path`,
/// starting from that note.
pub fn aggregate_vault(root_path: &Path) -> Result<Corpus, VaultError> {
    let vault_root = match root_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Some(root_link) = root_path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Err(VaultError::EmptyCorpus(root_path.to_path_buf()));
    };

    let vault = FsVault::open(vault_root);
    if vault.index().is_empty() {
        warn!("No notes found under {}", vault_root.display());
    } else {
        info!(
            "Indexed {} notes under {}",
            vault.index().len(),
            vault_root.display()
        );
    }

    let corpus = aggregate(&root_link, &vault);
    if corpus.is_empty() {
        return Err(VaultError::EmptyCorpus(root_path.to_path_buf()));
    }

    for entry in corpus.entries() {
        debug!("Included {} ({} chars)", entry.path.display(), entry.content.len());
    }
    info!(
        "Aggregated {} notes ({} unresolved links, {} unreadable files)",
        corpus.len(),
        corpus.unresolved().len(),
        corpus.unreadable().len()
    );
    Ok(corpus)
}
