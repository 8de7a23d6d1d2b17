mod cli;
mod config;
mod errors;
mod generation;
mod llm_client;
mod output;
mod vault;

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::errors::AppError;
use crate::generation::suggestions::generate_suggestions;
use crate::llm_client::{GenerativeClient, TextGenerator};
use crate::output::write_suggestions;
use crate::vault::aggregate_vault;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Fails on a missing API_URL before any work is done
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting vault-tailor v{}", env!("CARGO_PKG_VERSION"));

    let llm = GenerativeClient::new(&config.llm)?;
    info!("Generation client initialized (timeout {:?})", config.llm.timeout);

    match run(&cli, &config, &llm).await {
        Ok(()) => {}
        Err(AppError::Vault(e)) => {
            error!("{e}");
            println!("Could not parse portfolio. Exiting.");
        }
        Err(e) => println!("{e}"),
    }

    Ok(())
}

/// Aggregate the vault, read the job description, request suggestions, write
/// them out. Returns early, having written nothing, when either input is
/// unusable; request failures are written as the suggestions text.
async fn run(cli: &Cli, config: &Config, llm: &dyn TextGenerator) -> Result<(), AppError> {
    println!("Step 1: Parsing your Obsidian portfolio...");
    let corpus = aggregate_vault(&cli.portfolio_path)?;
    let portfolio_context = corpus.render();
    println!(
        "Successfully parsed {} characters of portfolio data from {} notes.",
        portfolio_context.chars().count(),
        corpus.len()
    );
    if !corpus.unresolved().is_empty() {
        println!(
            "Skipped {} unresolved links: {}",
            corpus.unresolved().len(),
            corpus.unresolved().join(", ")
        );
    }

    println!("\nStep 2: Reading job description...");
    let job_description = read_job_description(&cli.job_description_path)?;
    println!("Successfully read job description.");

    println!("\nStep 3: Generating tailored resume suggestions with AI...");
    let suggestions = generate_suggestions(llm, &portfolio_context, &job_description).await;

    match write_suggestions(&config.output_path, &suggestions) {
        Ok(()) => println!(
            "\nSuccess! Your resume suggestions have been saved to '{}'",
            config.output_path.display()
        ),
        Err(e) => {
            error!("Failed to write {}: {e}", config.output_path.display());
            println!("\nAn error occurred while writing the output file: {e}");
            println!("\n--- AI Response ---");
            println!("{suggestions}");
        }
    }

    Ok(())
}

fn read_job_description(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::JobDescriptionNotFound(path.to_path_buf()),
        _ => AppError::JobDescriptionUnreadable(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    use crate::config::LlmSettings;
    use crate::llm_client::LlmError;

    struct FixedGenerator(Result<&'static str, u16>);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(LlmError::Api {
                    status,
                    message: "Internal Server Error".to_string(),
                }),
            }
        }
    }

    fn fixture() -> (TempDir, Cli, Config) {
        let dir = tempdir().unwrap();
        let vault = dir.path().join("vault");
        fs::create_dir_all(&vault).unwrap();
        fs::write(vault.join("Portfolio.md"), "Me. [[Skills]]").unwrap();
        fs::write(vault.join("Skills.md"), "Rust").unwrap();
        fs::write(dir.path().join("jd.txt"), "Rust engineer wanted").unwrap();

        let cli = Cli {
            portfolio_path: vault.join("Portfolio.md"),
            job_description_path: dir.path().join("jd.txt"),
        };
        let config = Config {
            llm: LlmSettings {
                api_url: "http://127.0.0.1:9/unused".to_string(),
                api_key: None,
                timeout: Duration::from_secs(1),
            },
            output_path: dir.path().join("resume_suggestions.txt"),
            rust_log: "info".to_string(),
        };
        (dir, cli, config)
    }

    #[tokio::test]
    async fn test_run_writes_suggestions() {
        let (_dir, cli, config) = fixture();
        run(&cli, &config, &FixedGenerator(Ok("Emphasize Rust.")))
            .await
            .unwrap();

        assert_eq!(
            fs::read_to_string(&config.output_path).unwrap(),
            "Emphasize Rust."
        );
    }

    #[tokio::test]
    async fn test_run_missing_job_description_writes_nothing() {
        let (dir, mut cli, config) = fixture();
        cli.job_description_path = dir.path().join("missing.txt");

        let err = run(&cli, &config, &FixedGenerator(Ok("unused")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::JobDescriptionNotFound(ref p) if p == &cli.job_description_path));
        assert!(err.to_string().starts_with("Error: Job description file not found at"));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn test_run_unresolvable_root_writes_nothing() {
        let (dir, mut cli, config) = fixture();
        cli.portfolio_path = dir.path().join("vault/Nope.md");

        let err = run(&cli, &config, &FixedGenerator(Ok("unused")))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Vault(_)));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn test_run_server_error_is_written_as_text() {
        let (_dir, cli, config) = fixture();
        run(&cli, &config, &FixedGenerator(Err(500))).await.unwrap();

        let written = fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(
            written,
            "An error occurred with the API request: API error (status 500): Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_run_unwritable_output_still_succeeds() {
        let (dir, cli, mut config) = fixture();
        // A directory cannot be written as a file.
        config.output_path = dir.path().to_path_buf();

        run(&cli, &config, &FixedGenerator(Ok("fallback text")))
            .await
            .unwrap();
    }

    #[test]
    fn test_read_job_description_not_found() {
        let missing = PathBuf::from("/definitely/not/here/jd.txt");
        assert!(matches!(
            read_job_description(&missing),
            Err(AppError::JobDescriptionNotFound(_))
        ));
    }
}
