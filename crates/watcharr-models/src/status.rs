use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Watch status of an entry, as understood by the server
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum WatchedStatus {
    /// Want to watch
    Planned,
    /// Currently watching
    Watching,
    /// Finished watching
    Finished,
    /// On hold
    Hold,
    /// Stopped watching
    Dropped,
}

impl WatchedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchedStatus::Planned => "PLANNED",
            WatchedStatus::Watching => "WATCHING",
            WatchedStatus::Finished => "FINISHED",
            WatchedStatus::Hold => "HOLD",
            WatchedStatus::Dropped => "DROPPED",
        }
    }
}

impl fmt::Display for WatchedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchedStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PLANNED" => Ok(WatchedStatus::Planned),
            "WATCHING" => Ok(WatchedStatus::Watching),
            "FINISHED" => Ok(WatchedStatus::Finished),
            "HOLD" => Ok(WatchedStatus::Hold),
            "DROPPED" => Ok(WatchedStatus::Dropped),
            _ => Err(format!(
                "Invalid status: {}. Use planned, watching, finished, hold or dropped",
                s
            )),
        }
    }
}
