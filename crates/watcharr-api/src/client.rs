use crate::api;
use crate::auth;
use crate::error::ApiError;
use crate::traits::WatchedApi;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use watcharr_config::Config;
use watcharr_models::{
    AuthRequest, JellyfinFoundContent, MediaType, Watched, WatchedAddRequest,
    WatchedUpdateRequest, WatchedUpdateResponse,
};

/// HTTP client for a Watcharr server
#[derive(Clone)]
pub struct WatcharrClient {
    client: Arc<Client>,
    base_url: String,
    token: Option<String>,
}

impl WatcharrClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(
            config.api_root(),
            Duration::from_secs(config.server.timeout_seconds),
        )
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn token(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::NotAuthenticated)
    }

    /// Log in and keep the returned token for subsequent calls
    pub async fn login(&mut self, username: &str, password: &str) -> Result<String, ApiError> {
        let request = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = auth::login(&self.client, &self.base_url, &request).await?;
        self.token = Some(response.token.clone());
        Ok(response.token)
    }

    pub async fn register(&mut self, username: &str, password: &str) -> Result<String, ApiError> {
        let request = AuthRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = auth::register(&self.client, &self.base_url, &request).await?;
        self.token = Some(response.token.clone());
        Ok(response.token)
    }
}

#[async_trait]
impl WatchedApi for WatcharrClient {
    async fn get_watched(&self) -> Result<Vec<Watched>, ApiError> {
        api::get_watched(&self.client, &self.base_url, self.token()?).await
    }

    async fn add_watched(&self, request: &WatchedAddRequest) -> Result<Watched, ApiError> {
        api::add_watched(&self.client, &self.base_url, self.token()?, request).await
    }

    async fn update_watched(
        &self,
        id: u64,
        request: &WatchedUpdateRequest,
    ) -> Result<WatchedUpdateResponse, ApiError> {
        api::update_watched(&self.client, &self.base_url, self.token()?, id, request).await
    }

    async fn remove_watched(&self, id: u64) -> Result<(), ApiError> {
        api::remove_watched(&self.client, &self.base_url, self.token()?, id).await
    }

    async fn jellyfin_content(
        &self,
        media_type: MediaType,
        name: &str,
        tmdb_id: u64,
    ) -> Result<JellyfinFoundContent, ApiError> {
        api::jellyfin_content(&self.client, &self.base_url, self.token()?, media_type, name, tmdb_id).await
    }
}
