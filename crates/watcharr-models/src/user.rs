use serde::{Deserialize, Serialize};

/// Account kind, persisted by the client as its numeric code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserType {
    Watcharr,
    Jellyfin,
}

impl UserType {
    pub fn code(&self) -> u8 {
        match self {
            UserType::Watcharr => 0,
            UserType::Jellyfin => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(UserType::Watcharr),
            1 => Some(UserType::Jellyfin),
            _ => None,
        }
    }

    /// Parse the persisted setting value (`"0"`, `"1"`)
    pub fn from_setting(value: &str) -> Option<Self> {
        value.trim().parse::<u8>().ok().and_then(Self::from_code)
    }
}
