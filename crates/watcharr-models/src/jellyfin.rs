use serde::{Deserialize, Serialize};

/// Answer of the Jellyfin library lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JellyfinFoundContent {
    pub has_content: bool,
    #[serde(default)]
    pub url: String,
}
