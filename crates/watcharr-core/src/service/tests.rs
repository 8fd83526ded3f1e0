use super::*;
use crate::fixtures::{activity, watched};
use crate::notify::{NotificationKind, RecordingNotifier};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use watcharr_api::ApiError;
use watcharr_models::{Watched, WatchedUpdateResponse};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Get,
    Add(WatchedAddRequest),
    Update(u64, WatchedUpdateRequest),
    Remove(u64),
    Jellyfin(MediaType, String, u64),
}

#[derive(Default)]
struct FakeApi {
    calls: Mutex<Vec<Call>>,
    fail: bool,
    new_activity: Option<watcharr_models::Activity>,
    remote: Vec<Watched>,
}

impl FakeApi {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            Err(ApiError::NotAuthenticated)
        } else {
            Ok(())
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WatchedApi for FakeApi {
    async fn get_watched(&self) -> Result<Vec<Watched>, ApiError> {
        self.record(Call::Get)?;
        Ok(self.remote.clone())
    }

    async fn add_watched(&self, request: &WatchedAddRequest) -> Result<Watched, ApiError> {
        self.record(Call::Add(request.clone()))?;
        let mut entry = watched(100, request.content_id, request.content_type);
        entry.status = request.status.unwrap_or(WatchedStatus::Finished);
        entry.rating = request.rating;
        entry.thoughts = None;
        Ok(entry)
    }

    async fn update_watched(
        &self,
        id: u64,
        request: &WatchedUpdateRequest,
    ) -> Result<WatchedUpdateResponse, ApiError> {
        self.record(Call::Update(id, request.clone()))?;
        Ok(WatchedUpdateResponse {
            new_activity: self.new_activity.clone(),
        })
    }

    async fn remove_watched(&self, id: u64) -> Result<(), ApiError> {
        self.record(Call::Remove(id))
    }

    async fn jellyfin_content(
        &self,
        media_type: MediaType,
        name: &str,
        tmdb_id: u64,
    ) -> Result<JellyfinFoundContent, ApiError> {
        self.record(Call::Jellyfin(media_type, name.to_string(), tmdb_id))?;
        Ok(JellyfinFoundContent {
            has_content: true,
            url: format!("http://jellyfin.local/items/{}", tmdb_id),
        })
    }
}

type TestService = WatchedService<FakeApi, Arc<RecordingNotifier>, Option<UserType>>;

fn build(api: FakeApi, entries: Vec<Watched>, user_type: Option<UserType>) -> (TestService, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = WatchedService::new(api, WatchedStore::new(entries), notifier.clone(), user_type);
    (service, notifier)
}

fn texts(notifier: &RecordingNotifier) -> Vec<String> {
    notifier.take().into_iter().map(|n| n.text).collect()
}

#[tokio::test]
async fn test_upsert_unknown_content_creates() {
    let (service, notifier) = build(FakeApi::default(), vec![watched(1, 603, MediaType::Movie)], None);
    let mut rx = service.store().subscribe();

    // Same TMDB id but a different media type is a different item
    let outcome = service
        .upsert_watched(603, MediaType::Tv, Some(WatchedStatus::Planned), Some(8), None)
        .await;

    assert_eq!(outcome, UpsertOutcome::Created(100));
    assert_eq!(
        service.api().calls(),
        vec![Call::Add(WatchedAddRequest {
            content_id: 603,
            content_type: MediaType::Tv,
            rating: Some(8),
            status: Some(WatchedStatus::Planned),
        })]
    );
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().len(), 2);
    assert_eq!(
        service.store().find_by_content(603, MediaType::Tv).map(|w| w.status),
        Some(WatchedStatus::Planned)
    );
    assert_eq!(texts(&notifier), vec!["Added!"]);
}

#[tokio::test]
async fn test_upsert_known_content_updates_only_supplied_fields() {
    let new_activity = activity(55, 1, "RATING_CHANGED");
    let api = FakeApi {
        new_activity: Some(new_activity.clone()),
        ..FakeApi::default()
    };
    let (service, notifier) = build(api, vec![watched(1, 603, MediaType::Movie)], None);

    let outcome = service.upsert_watched(603, MediaType::Movie, None, Some(9), None).await;

    assert_eq!(outcome, UpsertOutcome::Updated(1));
    assert_eq!(
        service.api().calls(),
        vec![Call::Update(1, WatchedUpdateRequest::new(None, Some(9), None))]
    );

    let entry = service.store().find(1).unwrap();
    assert_eq!(entry.rating, Some(9));
    assert_eq!(entry.status, WatchedStatus::Watching);
    assert_eq!(entry.thoughts.as_deref(), Some("solid so far"));
    assert_eq!(entry.activity.len(), 2);
    assert_eq!(entry.activity.last(), Some(&new_activity));
    assert_eq!(entry.updated_at, new_activity.created_at);
    assert_eq!(texts(&notifier), vec!["Saved!"]);
}

#[tokio::test]
async fn test_update_without_new_activity_keeps_timestamp() {
    let (service, _notifier) = build(FakeApi::default(), vec![watched(1, 603, MediaType::Movie)], None);
    let before = service.store().find(1).unwrap();

    service
        .upsert_watched(603, MediaType::Movie, Some(WatchedStatus::Finished), None, None)
        .await;

    let after = service.store().find(1).unwrap();
    assert_eq!(after.status, WatchedStatus::Finished);
    assert_eq!(after.activity.len(), before.activity.len());
    assert_eq!(after.updated_at, before.updated_at);
}

#[tokio::test]
async fn test_empty_thoughts_removes_thoughts() {
    let (service, _notifier) = build(FakeApi::default(), vec![watched(1, 603, MediaType::Movie)], None);

    let outcome = service
        .upsert_watched(603, MediaType::Movie, None, None, Some(String::new()))
        .await;

    assert_eq!(outcome, UpsertOutcome::Updated(1));
    match &service.api().calls()[0] {
        Call::Update(1, request) => {
            assert!(request.remove_thoughts);
            assert_eq!(request.thoughts.as_deref(), Some(""));
        }
        other => panic!("unexpected call {:?}", other),
    }
    assert_eq!(service.store().find(1).unwrap().thoughts, None);
}

#[tokio::test]
async fn test_known_content_without_fields_is_noop() {
    let (service, notifier) = build(FakeApi::default(), vec![watched(1, 603, MediaType::Movie)], None);
    let rx = service.store().subscribe();

    // Zero rating means "no rating supplied"
    let outcome = service.upsert_watched(603, MediaType::Movie, None, Some(0), None).await;

    assert_eq!(outcome, UpsertOutcome::Unchanged);
    assert!(service.api().calls().is_empty());
    assert!(!rx.has_changed().unwrap());
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_failed_update_leaves_store_untouched() {
    let original = watched(1, 603, MediaType::Movie);
    let (service, notifier) = build(FakeApi::failing(), vec![original.clone()], None);
    let rx = service.store().subscribe();

    let outcome = service
        .upsert_watched(603, MediaType::Movie, Some(WatchedStatus::Dropped), Some(2), Some("meh".to_string()))
        .await;

    assert_eq!(outcome, UpsertOutcome::Failed);
    assert_eq!(service.store().snapshot(), vec![original]);
    assert!(!rx.has_changed().unwrap());
    let seen = notifier.take();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, NotificationKind::Error);
    assert_eq!(seen[0].text, "Failed To Update!");
}

#[tokio::test]
async fn test_failed_add_leaves_store_untouched() {
    let (service, notifier) = build(FakeApi::failing(), Vec::new(), None);

    let outcome = service.upsert_watched(27205, MediaType::Movie, None, None, None).await;

    assert_eq!(outcome, UpsertOutcome::Failed);
    assert!(service.store().is_empty());
    assert_eq!(texts(&notifier), vec!["Failed To Add!"]);
}

#[tokio::test]
async fn test_remove_unknown_id_never_calls_network() {
    let (service, notifier) = build(FakeApi::default(), vec![watched(1, 603, MediaType::Movie)], None);

    assert!(!service.remove_watched(42).await);
    assert!(service.api().calls().is_empty());
    assert_eq!(service.store().len(), 1);

    let seen = notifier.take();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].is_error());
    assert_eq!(seen[0].text, "Item Doesn't Exist On Watched List!");
}

#[tokio::test]
async fn test_remove_known_id() {
    let (service, notifier) = build(
        FakeApi::default(),
        vec![watched(1, 603, MediaType::Movie), watched(2, 1399, MediaType::Tv)],
        None,
    );
    let mut rx = service.store().subscribe();

    assert!(service.remove_watched(1).await);
    assert_eq!(service.api().calls(), vec![Call::Remove(1)]);
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().iter().map(|w| w.id).collect::<Vec<_>>(), vec![2]);
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_failed_remove_keeps_entry() {
    let (service, notifier) = build(FakeApi::failing(), vec![watched(1, 603, MediaType::Movie)], None);

    assert!(!service.remove_watched(1).await);
    assert_eq!(service.store().len(), 1);
    assert_eq!(texts(&notifier), vec!["Failed To Remove!"]);
}

#[tokio::test]
async fn test_jellyfin_lookup_only_for_jellyfin_users() {
    let (service, _notifier) = build(FakeApi::default(), Vec::new(), Some(UserType::Watcharr));
    assert!(service.check_jellyfin(MediaType::Movie, "Heat", 949).await.is_none());
    assert!(service.api().calls().is_empty());

    let (service, _notifier) = build(FakeApi::default(), Vec::new(), None);
    assert!(service.check_jellyfin(MediaType::Movie, "Heat", 949).await.is_none());
    assert!(service.api().calls().is_empty());
}

#[tokio::test]
async fn test_jellyfin_lookup_returns_content() {
    let (service, _notifier) = build(FakeApi::default(), Vec::new(), Some(UserType::Jellyfin));

    let found = service.check_jellyfin(MediaType::Tv, "The Wire", 1438).await.unwrap();

    assert!(found.has_content);
    assert_eq!(found.url, "http://jellyfin.local/items/1438");
    assert_eq!(
        service.api().calls(),
        vec![Call::Jellyfin(MediaType::Tv, "The Wire".to_string(), 1438)]
    );
}

#[tokio::test]
async fn test_jellyfin_errors_are_swallowed() {
    let (service, notifier) = build(FakeApi::failing(), Vec::new(), Some(UserType::Jellyfin));

    assert!(service.check_jellyfin(MediaType::Movie, "Heat", 949).await.is_none());
    assert_eq!(service.api().calls().len(), 1);
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_refresh_replaces_store() {
    let api = FakeApi {
        remote: vec![watched(3, 1, MediaType::Movie), watched(4, 2, MediaType::Tv)],
        ..FakeApi::default()
    };
    let (service, _notifier) = build(api, vec![watched(1, 603, MediaType::Movie)], None);

    assert!(service.refresh().await);
    assert_eq!(service.store().snapshot().iter().map(|w| w.id).collect::<Vec<_>>(), vec![3, 4]);
}

#[tokio::test]
async fn test_failed_refresh_keeps_store() {
    let (service, notifier) = build(FakeApi::failing(), vec![watched(1, 603, MediaType::Movie)], None);

    assert!(!service.refresh().await);
    assert_eq!(service.store().len(), 1);
    assert_eq!(texts(&notifier), vec!["Failed To Load Watched List!"]);
}

#[test]
fn test_export_urls_reflect_store() {
    let (service, notifier) = build(FakeApi::default(), vec![watched(1, 603, MediaType::Movie)], None);

    for (format, mime) in [
        (DownloadFormat::Json, "text/json"),
        (DownloadFormat::Csv, "text/csv"),
        (DownloadFormat::Xml, "text/xml"),
    ] {
        let url = service.build_export_url(format).unwrap();
        assert!(url.starts_with(&format!("data:{};charset=utf-8,", mime)));
    }

    let json_url = service.build_export_url(DownloadFormat::Json).unwrap();
    let body = urlencoding::decode(json_url.split_once(',').unwrap().1).unwrap();
    let parsed: Vec<Watched> = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed, service.store().snapshot());
    assert!(notifier.notifications().is_empty());
}

#[test]
fn test_export_by_unknown_name() {
    let (service, notifier) = build(FakeApi::default(), Vec::new(), None);
    assert!(service.build_export_url_named("yaml").is_none());

    let seen = notifier.take();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].is_error());
    assert_eq!(seen[0].text, "Failed To Export!");

    assert!(service.build_export_url_named("CSV").is_some());
    assert!(notifier.notifications().is_empty());
}
