use crate::media::MediaType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cached TMDB content a watched entry refers to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(rename = "tmdbId")]
    pub tmdb_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
}

impl Content {
    /// Whether this content is the TMDB item `(tmdb_id, media_type)`
    pub fn is(&self, tmdb_id: u64, media_type: MediaType) -> bool {
        self.tmdb_id == tmdb_id && self.media_type == media_type
    }
}
