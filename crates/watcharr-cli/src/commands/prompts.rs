use color_eyre::Result;
use dialoguer::{Input, Password};

/// Prompt for a non-empty string
pub fn prompt_string(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for a password (masked input)
pub fn prompt_password(prompt: &str, confirm: bool) -> Result<String> {
    let mut password = Password::new().with_prompt(prompt);
    if confirm {
        password = password.with_confirmation("Confirm password", "Passwords don't match");
    }
    password
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read password: {}", e))
}

/// Use the flag value if given, otherwise ask
pub fn username_or_prompt(username: Option<String>) -> Result<String> {
    match username {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => prompt_string("Username"),
    }
}
