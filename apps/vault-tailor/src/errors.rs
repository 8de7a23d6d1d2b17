use std::path::PathBuf;

use thiserror::Error;

/// Pipeline-level failures that stop a run before anything is written.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error: Job description file not found at {}", .0.display())]
    JobDescriptionNotFound(PathBuf),

    #[error("An error occurred while reading the job description: {0}")]
    JobDescriptionUnreadable(#[source] std::io::Error),

    #[error(transparent)]
    Vault(#[from] crate::vault::VaultError),
}
