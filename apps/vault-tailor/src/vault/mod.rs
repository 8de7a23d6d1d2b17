//! Vault traversal — flattens a graph of `[[linked]]` notes into one corpus.
//!
//! Flow: build a name → path index of the root note's directory tree once,
//! then walk links breadth-first from the root note, reading each note the
//! first time its name is seen.

use std::path::PathBuf;

use thiserror::Error;

pub mod index;
pub mod links;
pub mod source;
pub mod traversal;

pub use traversal::aggregate_vault;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("No notes could be aggregated starting from {}", .0.display())]
    EmptyCorpus(PathBuf),
}
