use crate::activity::Activity;
use crate::content::Content;
use crate::status::WatchedStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's tracked-media record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Watched {
    pub id: u64,
    pub status: WatchedStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<String>,
    pub content: Content,
    #[serde(default)]
    pub activity: Vec<Activity>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Watched {
    /// Append a server-created activity record and bump `updated_at` to it,
    /// so "recently modified" ordering reflects the change.
    pub fn push_activity(&mut self, activity: Activity) {
        self.updated_at = activity.created_at;
        self.activity.push(activity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaType;

    const SERVER_JSON: &str = r#"{
        "id": 7,
        "createdAt": "2023-05-01T10:00:00Z",
        "updatedAt": "2023-05-02T10:00:00Z",
        "deletedAt": null,
        "status": "WATCHING",
        "rating": 8,
        "thoughts": "",
        "content": {
            "id": 3,
            "title": "Severance",
            "poster_path": "/abc.jpg",
            "overview": "Office drama",
            "type": "tv",
            "tmdbId": 95396
        },
        "activity": [
            {"id": 1, "watchedId": 7, "type": "ADDED_WATCHED", "data": "", "createdAt": "2023-05-01T10:00:00Z"}
        ]
    }"#;

    #[test]
    fn test_deserialize_server_watched() {
        let watched: Watched = serde_json::from_str(SERVER_JSON).unwrap();
        assert_eq!(watched.id, 7);
        assert_eq!(watched.status, WatchedStatus::Watching);
        assert_eq!(watched.rating, Some(8));
        assert!(watched.content.is(95396, MediaType::Tv));
        assert!(!watched.content.is(95396, MediaType::Movie));
        assert_eq!(watched.activity.len(), 1);
        assert_eq!(watched.activity[0].activity_type, "ADDED_WATCHED");
    }

    #[test]
    fn test_missing_activity_defaults_to_empty() {
        let json = r#"{
            "id": 1, "status": "PLANNED",
            "createdAt": "2023-05-01T10:00:00Z", "updatedAt": "2023-05-01T10:00:00Z",
            "content": {"id": 1, "title": "Heat", "type": "movie", "tmdbId": 949}
        }"#;
        let watched: Watched = serde_json::from_str(json).unwrap();
        assert!(watched.activity.is_empty());
        assert_eq!(watched.rating, None);
    }

    #[test]
    fn test_push_activity_updates_timestamp() {
        let mut watched: Watched = serde_json::from_str(SERVER_JSON).unwrap();
        let created_at: DateTime<Utc> = "2023-06-01T12:00:00Z".parse().unwrap();
        watched.push_activity(Activity {
            id: 2,
            watched_id: 7,
            activity_type: "RATING_CHANGED".to_string(),
            data: Some("9".to_string()),
            created_at,
        });
        assert_eq!(watched.activity.len(), 2);
        assert_eq!(watched.updated_at, created_at);
    }
}
