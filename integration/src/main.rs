//! Command-line bookmark import
//!
//! Prints the import summary as JSON on stdout; logs go to stderr.

use anyhow::{bail, Context, Result};
use clap::Parser;
use integration::{
    BookmarkImportService, ImportConfig, LoggerConfig, UnifiedErrorHandler, UnifiedLogger,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookmark-import")]
#[command(about = "Import a browser bookmark export and print the result as JSON")]
#[command(version)]
struct Cli {
    /// Netscape bookmark export (.html or .htm)
    file: PathBuf,

    /// JSON import configuration; missing fields take defaults
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ImportConfig::from_json_file(path)?,
        None => ImportConfig::default(),
    };

    UnifiedLogger::init(LoggerConfig {
        level: config.log_level.clone(),
        ..LoggerConfig::default()
    })?;

    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let service = BookmarkImportService::with_config(config);
    let handler = UnifiedErrorHandler::new();

    match service.import_upload(&file_name, bytes).await {
        Ok(summary) => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Err(e) => {
            let message = handler.handle_error(&e, "bookmark-import").await;
            bail!(message)
        }
    }
}
