use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formats the watched list can be exported to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    Json,
    Csv,
    Xml,
}

impl DownloadFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            DownloadFormat::Json => "text/json",
            DownloadFormat::Csv => "text/csv",
            DownloadFormat::Xml => "text/xml",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Json => "json",
            DownloadFormat::Csv => "csv",
            DownloadFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DownloadFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DownloadFormat::Json),
            "csv" => Ok(DownloadFormat::Csv),
            "xml" => Ok(DownloadFormat::Xml),
            _ => Err(format!("Invalid format: {}", s)),
        }
    }
}
