use crate::error::ApiError;
use async_trait::async_trait;
use watcharr_models::{
    JellyfinFoundContent, MediaType, Watched, WatchedAddRequest, WatchedUpdateRequest,
    WatchedUpdateResponse,
};

/// The slice of the Watcharr REST API the watched-list façade talks to.
///
/// `WatcharrClient` is the HTTP implementation; tests substitute fakes.
#[async_trait]
pub trait WatchedApi: Send + Sync {
    /// `GET /watched`
    async fn get_watched(&self) -> Result<Vec<Watched>, ApiError>;

    /// `POST /watched`
    async fn add_watched(&self, request: &WatchedAddRequest) -> Result<Watched, ApiError>;

    /// `PUT /watched/{id}`
    async fn update_watched(
        &self,
        id: u64,
        request: &WatchedUpdateRequest,
    ) -> Result<WatchedUpdateResponse, ApiError>;

    /// `DELETE /watched/{id}`
    async fn remove_watched(&self, id: u64) -> Result<(), ApiError>;

    /// `GET /jellyfin/{type}/{name}/{tmdbId}`
    async fn jellyfin_content(
        &self,
        media_type: MediaType,
        name: &str,
        tmdb_id: u64,
    ) -> Result<JellyfinFoundContent, ApiError>;
}
