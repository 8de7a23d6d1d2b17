use std::path::PathBuf;

use clap::Parser;

/// Generate resume suggestions based on an Obsidian portfolio and a job description.
#[derive(Parser, Debug)]
#[command(name = "vault-tailor", version, about)]
pub struct Cli {
    /// The file path to the master portfolio note.
    pub portfolio_path: PathBuf,

    /// The file path to the text file containing the job description.
    pub job_description_path: PathBuf,
}
