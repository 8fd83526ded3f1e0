use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a watched entry points at. Serialized the way the server
/// stores it (`movie` / `tv`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(MediaType::Movie),
            "tv" | "show" => Ok(MediaType::Tv),
            _ => Err(format!("Invalid media type: {}. Use 'movie' or 'tv'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_wire_format() {
        assert_eq!(serde_json::to_string(&MediaType::Tv).unwrap(), "\"tv\"");
        let parsed: MediaType = serde_json::from_str("\"movie\"").unwrap();
        assert_eq!(parsed, MediaType::Movie);
    }

    #[test]
    fn test_media_type_from_str() {
        assert_eq!("TV".parse::<MediaType>().unwrap(), MediaType::Tv);
        assert_eq!("show".parse::<MediaType>().unwrap(), MediaType::Tv);
        assert!("anime".parse::<MediaType>().is_err());
    }
}
