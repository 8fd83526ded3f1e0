//! Sample entries shared by the unit tests

use chrono::{TimeZone, Utc};
use watcharr_models::{Activity, Content, MediaType, Watched, WatchedStatus};

pub fn watched(id: u64, tmdb_id: u64, media_type: MediaType) -> Watched {
    let created = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
    Watched {
        id,
        status: WatchedStatus::Watching,
        rating: Some(7),
        thoughts: Some("solid so far".to_string()),
        content: Content {
            id: id + 100,
            title: format!("Title {}", tmdb_id),
            poster_path: Some(format!("/{}.jpg", tmdb_id)),
            overview: None,
            media_type,
            tmdb_id,
            release_date: None,
        },
        activity: vec![activity(id * 10, id, "ADDED_WATCHED")],
        created_at: created,
        updated_at: created,
    }
}

pub fn activity(id: u64, watched_id: u64, activity_type: &str) -> Activity {
    Activity {
        id,
        watched_id,
        activity_type: activity_type.to_string(),
        data: None,
        created_at: Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap(),
    }
}
