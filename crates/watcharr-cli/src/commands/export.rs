use super::session::open_service;
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use serde_json::json;
use std::path::PathBuf;
use watcharr_config::{Config, PathManager};
use watcharr_models::DownloadFormat;

pub async fn run_export(
    paths: &PathManager,
    config: &Config,
    format: &str,
    file: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let service = open_service(paths, config, output).await?;

    let Some(file) = file else {
        let url = service
            .build_export_url_named(format)
            .ok_or_else(|| eyre!("Export to {} failed", format))?;
        match output.format() {
            OutputFormat::Human => output.info(&url),
            OutputFormat::Json | OutputFormat::JsonPretty => output.json(&json!({ "url": url })),
        }
        return Ok(());
    };

    let format: DownloadFormat = format.parse().map_err(|e: String| eyre!(e))?;
    let document = watcharr_core::render(format, &service.store().snapshot())
        .wrap_err_with(|| format!("Failed to export as {}", format))?;
    std::fs::write(&file, document)
        .wrap_err_with(|| format!("Failed to write {}", file.display()))?;

    output.success(format!(
        "Exported {} entries to {}",
        service.store().len(),
        file.display()
    ));
    Ok(())
}
