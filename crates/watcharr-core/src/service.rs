use crate::export;
use crate::notify::{Notification, Notifier};
use crate::store::WatchedStore;
use crate::user_type::UserTypeSource;
use tracing::{debug, error, info, warn};
use watcharr_api::WatchedApi;
use watcharr_models::{
    DownloadFormat, JellyfinFoundContent, MediaType, UserType, WatchedAddRequest, WatchedStatus,
    WatchedUpdateRequest,
};

/// Result of [`WatchedService::upsert_watched`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new entry was created with this id
    Created(u64),
    /// The existing entry with this id was patched
    Updated(u64),
    /// The content is already tracked and nothing was supplied to change
    Unchanged,
    /// The request failed; the store was left untouched
    Failed,
}

/// Façade over the watched-list endpoints.
///
/// Owns no state of its own: it talks to the server through `api`, and
/// reflects successful responses into the injected `store`. Failures are
/// logged and surfaced through `notifier`, never returned as errors.
pub struct WatchedService<A, N, U> {
    api: A,
    store: WatchedStore,
    notifier: N,
    user_type: U,
}

impl<A, N, U> WatchedService<A, N, U>
where
    A: WatchedApi,
    N: Notifier,
    U: UserTypeSource,
{
    pub fn new(api: A, store: WatchedStore, notifier: N, user_type: U) -> Self {
        Self {
            api,
            store,
            notifier,
            user_type,
        }
    }

    pub fn store(&self) -> &WatchedStore {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Reload the whole list from the server
    pub async fn refresh(&self) -> bool {
        match self.api.get_watched().await {
            Ok(entries) => {
                info!("Loaded {} watched entries", entries.len());
                self.store.replace(entries);
                true
            }
            Err(e) => {
                error!("Failed to load watched list: {}", e);
                self.notifier.notify(Notification::error("Failed To Load Watched List!"));
                false
            }
        }
    }

    /// Track `(content_id, content_type)` or change how it is tracked.
    ///
    /// If the content is already on the list only the supplied fields are
    /// sent; otherwise a new entry is created. A rating of 0 counts as not
    /// supplied, and `Some("")` thoughts clears existing thoughts.
    pub async fn upsert_watched(
        &self,
        content_id: u64,
        content_type: MediaType,
        status: Option<WatchedStatus>,
        rating: Option<u8>,
        thoughts: Option<String>,
    ) -> UpsertOutcome {
        let rating = rating.filter(|r| *r != 0);

        if let Some(existing) = self.store.find_by_content(content_id, content_type) {
            return self.update_existing(existing.id, status, rating, thoughts).await;
        }

        if thoughts.is_some() {
            debug!("Thoughts are not sent when adding {} {}", content_type, content_id);
        }
        self.add_new(content_id, content_type, status, rating).await
    }

    async fn update_existing(
        &self,
        id: u64,
        status: Option<WatchedStatus>,
        rating: Option<u8>,
        thoughts: Option<String>,
    ) -> UpsertOutcome {
        let request = WatchedUpdateRequest::new(status, rating, thoughts);
        if request.is_empty() {
            debug!("Nothing to update for watched entry {}", id);
            return UpsertOutcome::Unchanged;
        }

        let response = match self.api.update_watched(id, &request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to update watched entry {}: {}", id, e);
                self.notifier.notify(Notification::error("Failed To Update!"));
                return UpsertOutcome::Failed;
            }
        };

        let patched = self.store.update_entry(id, |entry| {
            if let Some(status) = request.status {
                entry.status = status;
            }
            if let Some(rating) = request.rating {
                entry.rating = Some(rating);
            }
            if let Some(thoughts) = request.thoughts {
                entry.thoughts = if request.remove_thoughts { None } else { Some(thoughts) };
            }
            if let Some(activity) = response.new_activity {
                entry.push_activity(activity);
            }
        });
        if !patched {
            // Removed locally while the request was in flight
            warn!("Watched entry {} left the list before its update landed", id);
        }

        self.notifier.notify(Notification::success("Saved!"));
        UpsertOutcome::Updated(id)
    }

    async fn add_new(
        &self,
        content_id: u64,
        content_type: MediaType,
        status: Option<WatchedStatus>,
        rating: Option<u8>,
    ) -> UpsertOutcome {
        let request = WatchedAddRequest {
            content_id,
            content_type,
            rating,
            status,
        };

        match self.api.add_watched(&request).await {
            Ok(entry) => {
                let id = entry.id;
                info!("Added watched: {} ({} {})", id, content_type, content_id);
                self.store.push(entry);
                self.notifier.notify(Notification::success("Added!"));
                UpsertOutcome::Created(id)
            }
            Err(e) => {
                error!("Failed to add {} {} to watched: {}", content_type, content_id, e);
                self.notifier.notify(Notification::error("Failed To Add!"));
                UpsertOutcome::Failed
            }
        }
    }

    /// Delete an entry by its watched id. Unknown ids are reported without
    /// contacting the server.
    pub async fn remove_watched(&self, id: u64) -> bool {
        if self.store.find(id).is_none() {
            info!("Watched entry {} does not exist", id);
            self.notifier
                .notify(Notification::error("Item Doesn't Exist On Watched List!"));
            return false;
        }

        match self.api.remove_watched(id).await {
            Ok(()) => {
                info!("Removed watched: {}", id);
                self.store.remove(id);
                true
            }
            Err(e) => {
                error!("Failed to remove watched entry {}: {}", id, e);
                self.notifier.notify(Notification::error("Failed To Remove!"));
                false
            }
        }
    }

    /// Ask the server whether the linked Jellyfin library has this content.
    ///
    /// Only Jellyfin accounts can ask; everyone else gets `None` without a
    /// request. Errors are logged and also come back as `None`.
    pub async fn check_jellyfin(
        &self,
        media_type: MediaType,
        name: &str,
        content_id: u64,
    ) -> Option<JellyfinFoundContent> {
        if self.user_type.user_type() != Some(UserType::Jellyfin) {
            debug!("Skipping Jellyfin lookup for non-Jellyfin user");
            return None;
        }

        match self.api.jellyfin_content(media_type, name, content_id).await {
            Ok(found) => {
                debug!("Jellyfin lookup for {} {}: {:?}", media_type, content_id, found);
                Some(found)
            }
            Err(e) => {
                error!("Jellyfin lookup for {} {} failed: {}", media_type, content_id, e);
                None
            }
        }
    }

    /// Serialize the current list into a downloadable data URL
    pub fn build_export_url(&self, format: DownloadFormat) -> Option<String> {
        let entries = self.store.snapshot();
        match export::data_url(format, &entries) {
            Ok(url) => Some(url),
            Err(e) => {
                error!("Failed to export watched list as {}: {}", format, e);
                let text = match format {
                    DownloadFormat::Xml => "Failed To Export XML!",
                    DownloadFormat::Json | DownloadFormat::Csv => "Failed To Export!",
                };
                self.notifier.notify(Notification::error(text));
                None
            }
        }
    }

    /// [`Self::build_export_url`] for a format given by name
    pub fn build_export_url_named(&self, format: &str) -> Option<String> {
        match format.parse::<DownloadFormat>() {
            Ok(format) => self.build_export_url(format),
            Err(e) => {
                error!("{}", e);
                self.notifier.notify(Notification::error("Failed To Export!"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
