use super::session::open_service;
use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;
use watcharr_config::{Config, PathManager};
use watcharr_core::UpsertOutcome;
use watcharr_models::{MediaType, Watched, WatchedStatus};

pub async fn run_list(paths: &PathManager, config: &Config, output: &Output) -> Result<()> {
    let service = open_service(paths, config, output).await?;
    let mut entries = service.store().snapshot();
    entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    if output.format() != OutputFormat::Human {
        output.json(&serde_json::to_value(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        output.info("Your watched list is empty");
        return Ok(());
    }

    output.info(render_table(&entries).to_string());
    Ok(())
}

fn render_table(entries: &[Watched]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Type").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("TMDB").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Status").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Rating").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Updated").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.id),
            Cell::new(&entry.content.title),
            Cell::new(entry.content.media_type),
            Cell::new(entry.content.tmdb_id),
            Cell::new(entry.status).fg(status_color(entry.status)),
            Cell::new(entry.rating.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())),
            Cell::new(entry.updated_at.format("%Y-%m-%d")),
        ]);
    }
    table
}

fn status_color(status: WatchedStatus) -> comfy_table::Color {
    match status {
        WatchedStatus::Planned => comfy_table::Color::Blue,
        WatchedStatus::Watching => comfy_table::Color::Cyan,
        WatchedStatus::Finished => comfy_table::Color::Green,
        WatchedStatus::Hold => comfy_table::Color::Yellow,
        WatchedStatus::Dropped => comfy_table::Color::Red,
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn run_set(
    paths: &PathManager,
    config: &Config,
    tmdb_id: u64,
    media_type: MediaType,
    status: Option<WatchedStatus>,
    rating: Option<u8>,
    thoughts: Option<String>,
    output: &Output,
) -> Result<()> {
    let service = open_service(paths, config, output).await?;

    match service
        .upsert_watched(tmdb_id, media_type, status, rating, thoughts)
        .await
    {
        UpsertOutcome::Created(id) | UpsertOutcome::Updated(id) => {
            if let Some(entry) = service.store().find(id) {
                output.json(&json!({ "entry": entry }));
            }
            Ok(())
        }
        UpsertOutcome::Unchanged => {
            output.warn("Already on your watched list. Pass --status, --rating or --thoughts to change it");
            Ok(())
        }
        // The façade already told the user what went wrong
        UpsertOutcome::Failed => Err(eyre!("Could not save {} {}", media_type, tmdb_id)),
    }
}

pub async fn run_remove(paths: &PathManager, config: &Config, id: u64, output: &Output) -> Result<()> {
    let service = open_service(paths, config, output).await?;

    if !service.remove_watched(id).await {
        return Err(eyre!("Could not remove watched entry {}", id));
    }
    output.success(format!("Removed watched entry {}", id));
    Ok(())
}

pub async fn run_jellyfin(
    paths: &PathManager,
    config: &Config,
    media_type: MediaType,
    name: &str,
    tmdb_id: u64,
    output: &Output,
) -> Result<()> {
    let service = open_service(paths, config, output).await?;

    match service.check_jellyfin(media_type, name, tmdb_id).await {
        Some(found) if found.has_content => {
            output.success(format!("{} is in your Jellyfin library: {}", name, found.url));
            output.json(&json!({ "hasContent": true, "url": found.url }));
        }
        Some(_) => {
            output.info(format!("{} is not in your Jellyfin library", name));
            output.json(&json!({ "hasContent": false }));
        }
        None => {
            output.warn("Jellyfin lookup unavailable (not a Jellyfin account, or the lookup failed)");
        }
    }
    Ok(())
}
