use crate::output::Output;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use watcharr_api::WatcharrClient;
use watcharr_config::{Config, PathManager, SettingsStore};
use watcharr_core::{WatchedService, WatchedStore};
use watcharr_models::UserType;

pub type CliService = WatchedService<WatcharrClient, Output, Option<UserType>>;

pub fn load_settings(paths: &PathManager) -> Result<SettingsStore> {
    let settings_file = paths.settings_file();
    SettingsStore::open(settings_file.clone())
        .map_err(|e| eyre!("Failed to load settings from {}: {}", settings_file.display(), e))
}

/// Client without a session, for login and registration
pub fn anonymous_client(config: &Config) -> Result<WatcharrClient> {
    config.validate().wrap_err("Invalid configuration")?;
    WatcharrClient::from_config(config).wrap_err("Failed to create HTTP client")
}

/// Build the façade for the stored session and load the watched list into it
pub async fn open_service(paths: &PathManager, config: &Config, output: &Output) -> Result<CliService> {
    let settings = load_settings(paths)?;
    let token = settings
        .get_token()
        .cloned()
        .ok_or_else(|| eyre!("Not logged in. Run `watcharr login` first"))?;

    let client = anonymous_client(config)?.with_token(token);
    let service = WatchedService::new(
        client,
        WatchedStore::default(),
        *output,
        settings.get_user_type(),
    );

    if !service.refresh().await {
        return Err(eyre!("Could not load the watched list from {}", config.api_root()));
    }
    tracing::debug!("Session ready with {} entries", service.store().len());
    Ok(service)
}
