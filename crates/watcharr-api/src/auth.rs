use crate::error::ApiError;
use reqwest::Client;
use tracing::info;
use watcharr_models::{AuthRequest, AuthResponse};

pub fn login_url(base_url: &str) -> String {
    format!("{}/auth/", base_url)
}

pub fn register_url(base_url: &str) -> String {
    format!("{}/auth/register", base_url)
}

/// Log in with username and password. Sent without an auth header.
pub async fn login(client: &Client, base_url: &str, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
    info!("Logging in as {}", request.username);
    authenticate(client, &login_url(base_url), request, "Failed to login").await
}

/// Create an account and receive a session token for it
pub async fn register(client: &Client, base_url: &str, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
    info!("Registering {}", request.username);
    authenticate(client, &register_url(base_url), request, "Failed to register").await
}

async fn authenticate(
    client: &Client,
    url: &str,
    request: &AuthRequest,
    context: &'static str,
) -> Result<AuthResponse, ApiError> {
    let response = client
        .post(url)
        .header("Accept", "application/json")
        .json(request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(ApiError::from_body(context, status, &error_text));
    }

    Ok(response.json().await?)
}
