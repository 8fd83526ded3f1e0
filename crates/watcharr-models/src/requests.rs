use crate::activity::Activity;
use crate::media::MediaType;
use crate::status::WatchedStatus;
use serde::{Deserialize, Serialize};

/// Body of `POST /watched`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchedAddRequest {
    pub content_id: u64,
    pub content_type: MediaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WatchedStatus>,
}

/// Body of `PUT /watched/{id}`. Only the fields being changed are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchedUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WatchedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub remove_thoughts: bool,
}

impl WatchedUpdateRequest {
    /// Build an update carrying only the supplied fields.
    ///
    /// Empty `thoughts` clears them on the server, which needs the explicit
    /// `removeThoughts` flag alongside the empty string.
    pub fn new(status: Option<WatchedStatus>, rating: Option<u8>, thoughts: Option<String>) -> Self {
        let remove_thoughts = thoughts.as_deref() == Some("");
        Self {
            status,
            rating,
            thoughts,
            remove_thoughts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.rating.is_none() && self.thoughts.is_none()
    }
}

/// Response of `PUT /watched/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchedUpdateResponse {
    #[serde(default)]
    pub new_activity: Option<Activity>,
}

/// Body of `POST /auth/` and `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_sends_only_supplied_fields() {
        let req = WatchedUpdateRequest::new(Some(WatchedStatus::Finished), None, None);
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"status": "FINISHED"}));
    }

    #[test]
    fn test_empty_thoughts_sets_remove_flag() {
        let req = WatchedUpdateRequest::new(None, None, Some(String::new()));
        assert!(req.remove_thoughts);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"thoughts": "", "removeThoughts": true})
        );
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(WatchedUpdateRequest::new(None, None, None).is_empty());
        assert!(!WatchedUpdateRequest::new(None, Some(5), None).is_empty());
    }

    #[test]
    fn test_add_request_wire_format() {
        let req = WatchedAddRequest {
            content_id: 603,
            content_type: MediaType::Movie,
            rating: None,
            status: Some(WatchedStatus::Planned),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"contentId": 603, "contentType": "movie", "status": "PLANNED"})
        );
    }

    #[test]
    fn test_update_response_without_activity() {
        let resp: WatchedUpdateResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.new_activity.is_none());
    }
}
