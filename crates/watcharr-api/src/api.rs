use crate::error::ApiError;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use watcharr_models::{
    JellyfinFoundContent, MediaType, Watched, WatchedAddRequest, WatchedUpdateRequest,
    WatchedUpdateResponse,
};

pub fn watched_url(base_url: &str) -> String {
    format!("{}/watched", base_url)
}

pub fn watched_entry_url(base_url: &str, id: u64) -> String {
    format!("{}/watched/{}", base_url, id)
}

/// The content name is a single path segment, so slashes and spaces in titles
/// must be escaped.
pub fn jellyfin_url(base_url: &str, media_type: MediaType, name: &str, tmdb_id: u64) -> String {
    format!(
        "{}/jellyfin/{}/{}/{}",
        base_url,
        media_type,
        urlencoding::encode(name),
        tmdb_id
    )
}

fn authorized(request: RequestBuilder, token: &str) -> RequestBuilder {
    request
        .header("Authorization", token)
        .header("Accept", "application/json")
}

async fn check(response: Response, context: &'static str) -> Result<Response, ApiError> {
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(ApiError::from_body(context, status, &error_text));
    }
    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: Response, context: &'static str) -> Result<T, ApiError> {
    let response = check(response, context).await?;
    Ok(response.json().await?)
}

/// Fetch the user's full watched list
pub async fn get_watched(client: &Client, base_url: &str, token: &str) -> Result<Vec<Watched>, ApiError> {
    let response = authorized(client.get(watched_url(base_url)), token).send().await?;
    let watched: Vec<Watched> = parse(response, "Failed to fetch watched list").await?;
    debug!("Fetched {} watched entries", watched.len());
    Ok(watched)
}

pub async fn add_watched(
    client: &Client,
    base_url: &str,
    token: &str,
    request: &WatchedAddRequest,
) -> Result<Watched, ApiError> {
    let response = authorized(client.post(watched_url(base_url)), token)
        .json(request)
        .send()
        .await?;
    parse(response, "Failed to add watched").await
}

pub async fn update_watched(
    client: &Client,
    base_url: &str,
    token: &str,
    id: u64,
    request: &WatchedUpdateRequest,
) -> Result<WatchedUpdateResponse, ApiError> {
    let response = authorized(client.put(watched_entry_url(base_url, id)), token)
        .json(request)
        .send()
        .await?;
    let response = check(response, "Failed to update watched").await?;
    parse_update_body(&response.text().await?)
}

/// Older servers answer with an empty body when nothing new was logged
fn parse_update_body(body: &str) -> Result<WatchedUpdateResponse, ApiError> {
    if body.trim().is_empty() {
        return Ok(WatchedUpdateResponse::default());
    }
    Ok(serde_json::from_str(body)?)
}

pub async fn remove_watched(client: &Client, base_url: &str, token: &str, id: u64) -> Result<(), ApiError> {
    let response = authorized(client.delete(watched_entry_url(base_url, id)), token)
        .send()
        .await?;
    check(response, "Failed to remove watched").await?;
    Ok(())
}

pub async fn jellyfin_content(
    client: &Client,
    base_url: &str,
    token: &str,
    media_type: MediaType,
    name: &str,
    tmdb_id: u64,
) -> Result<JellyfinFoundContent, ApiError> {
    let url = jellyfin_url(base_url, media_type, name, tmdb_id);
    let response = authorized(client.get(&url), token).send().await?;
    parse(response, "Failed to query Jellyfin").await
}
