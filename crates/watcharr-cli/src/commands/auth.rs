use super::prompts::{prompt_password, username_or_prompt};
use super::session::{anonymous_client, load_settings};
use crate::output::Output;
use clap::ValueEnum;
use color_eyre::eyre::Context;
use color_eyre::Result;
use watcharr_config::{Config, PathManager};
use watcharr_models::UserType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccountKind {
    Watcharr,
    Jellyfin,
}

impl From<AccountKind> for UserType {
    fn from(kind: AccountKind) -> Self {
        match kind {
            AccountKind::Watcharr => UserType::Watcharr,
            AccountKind::Jellyfin => UserType::Jellyfin,
        }
    }
}

pub async fn run_login(
    paths: &PathManager,
    config: &Config,
    username: Option<String>,
    kind: AccountKind,
    output: &Output,
) -> Result<()> {
    let username = username_or_prompt(username)?;
    let password = prompt_password("Password", false)?;

    let mut client = anonymous_client(config)?;
    let token = match client.login(&username, &password).await {
        Ok(token) => token,
        Err(e) => {
            output.error(format!("Failed to login: {}", e));
            return Err(e).wrap_err("Login failed");
        }
    };

    save_session(paths, token, username.clone(), kind.into())?;
    output.success(format!("Logged in as {}", username));
    Ok(())
}

pub async fn run_register(paths: &PathManager, config: &Config, username: Option<String>, output: &Output) -> Result<()> {
    let username = username_or_prompt(username)?;
    let password = prompt_password("Password", true)?;

    let mut client = anonymous_client(config)?;
    let token = match client.register(&username, &password).await {
        Ok(token) => token,
        Err(e) => {
            output.error(format!("Failed to register: {}", e));
            return Err(e).wrap_err("Registration failed");
        }
    };

    save_session(paths, token, username.clone(), UserType::Watcharr)?;
    output.success(format!("Registered and logged in as {}", username));
    Ok(())
}

pub fn run_logout(paths: &PathManager, output: &Output) -> Result<()> {
    let mut settings = load_settings(paths)?;
    if settings.get_token().is_none() {
        output.info("No active session");
        return Ok(());
    }

    settings.clear_session();
    settings.save().map_err(|e| color_eyre::eyre::eyre!("Failed to save settings: {}", e))?;
    output.success("Logged out");
    Ok(())
}

fn save_session(paths: &PathManager, token: String, username: String, user_type: UserType) -> Result<()> {
    let mut settings = load_settings(paths)?;
    settings.set_token(token);
    settings.set_username(username);
    settings.set_user_type(user_type);
    settings
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save settings: {}", e))
}
