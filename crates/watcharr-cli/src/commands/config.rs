use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;
use watcharr_config::{Config, PathManager};

use super::session::load_settings;

pub fn run_config(cmd: ConfigCommands, paths: &PathManager, config: Config, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(paths, &config, output),
        ConfigCommands::SetUrl { url } => set_url(paths, config, url, output),
    }
}

fn show(paths: &PathManager, config: &Config, output: &Output) -> Result<()> {
    let settings = load_settings(paths)?;
    let token = settings.get_token().map(|t| mask(t));
    let username = settings.get_username().cloned();
    let user_type = settings.get_user_type().map(|t| format!("{:?}", t));

    if output.format() != OutputFormat::Human {
        output.json(&json!({
            "config_file": paths.config_file(),
            "base_url": config.server.base_url,
            "timeout_seconds": config.server.timeout_seconds,
            "log_level": config.logging.level,
            "log_file": config.logging.file,
            "username": username,
            "user_type": user_type,
            "token": token,
        }));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    let unset = || "(not set)".to_string();
    table.add_row(vec!["Config File".to_string(), paths.config_file().display().to_string()]);
    table.add_row(vec!["Base URL".to_string(), config.server.base_url.clone()]);
    table.add_row(vec!["Timeout".to_string(), format!("{}s", config.server.timeout_seconds)]);
    table.add_row(vec!["Log Level".to_string(), config.logging.level.clone()]);
    table.add_row(vec![
        "Log File".to_string(),
        config.logging.file.as_ref().map(|f| f.display().to_string()).unwrap_or_else(unset),
    ]);
    table.add_row(vec!["Username".to_string(), username.unwrap_or_else(unset)]);
    table.add_row(vec!["User Type".to_string(), user_type.unwrap_or_else(unset)]);
    table.add_row(vec!["Token".to_string(), token.unwrap_or_else(unset)]);

    output.info(table.to_string());
    Ok(())
}

fn set_url(paths: &PathManager, mut config: Config, url: String, output: &Output) -> Result<()> {
    config.server.base_url = url.trim_end_matches('/').to_string();
    config.validate().wrap_err("Refusing to save configuration")?;

    paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create config directory: {}", e))?;
    config
        .save_to_file(&paths.config_file())
        .map_err(|e| eyre!("Failed to save config: {}", e))?;

    output.success(format!("Server URL set to {}", config.server.base_url));
    Ok(())
}

/// Keep only the last few characters of a secret
fn mask(secret: &str) -> String {
    let visible: String = secret.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("****{}", visible)
    }
}
