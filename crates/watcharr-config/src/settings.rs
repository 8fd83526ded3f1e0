use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use watcharr_models::UserType;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";
const USER_TYPE_KEY: &str = "userType";

#[derive(Debug, Serialize, Deserialize, Default)]
struct SettingsData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// Persisted client-side settings (session token, username, user type).
///
/// Plays the role of the browser's local storage: a flat string map that
/// survives restarts.
pub struct SettingsStore {
    path: PathBuf,
    settings: HashMap<String, String>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            settings: HashMap::new(),
        }
    }

    /// Create a store and load whatever is already on disk
    pub fn open(path: PathBuf) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let data: SettingsData = toml::from_str(&content)?;
            self.settings = data.data;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = SettingsData {
            data: self.settings.clone(),
        };
        let content = toml::to_string_pretty(&data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.settings.get(key)
    }

    pub fn set(&mut self, key: String, value: String) {
        self.settings.insert(key, value);
    }

    pub fn remove(&mut self, key: &str) {
        self.settings.remove(key);
    }

    pub fn get_token(&self) -> Option<&String> {
        self.get(TOKEN_KEY)
    }

    pub fn set_token(&mut self, token: String) {
        self.set(TOKEN_KEY.to_string(), token);
    }

    pub fn get_username(&self) -> Option<&String> {
        self.get(USERNAME_KEY)
    }

    pub fn set_username(&mut self, username: String) {
        self.set(USERNAME_KEY.to_string(), username);
    }

    /// Stored as the numeric code so the file matches what the web client keeps
    pub fn get_user_type(&self) -> Option<UserType> {
        self.get(USER_TYPE_KEY).and_then(|v| UserType::from_setting(v))
    }

    pub fn set_user_type(&mut self, user_type: UserType) {
        self.set(USER_TYPE_KEY.to_string(), user_type.code().to_string());
    }

    /// Forget the current session
    pub fn clear_session(&mut self) {
        self.remove(TOKEN_KEY);
        self.remove(USERNAME_KEY);
        self.remove(USER_TYPE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut store = SettingsStore::new(path.clone());
        store.set_token("abc.def.ghi".to_string());
        store.set_username("alice".to_string());
        store.set_user_type(UserType::Jellyfin);
        store.save().unwrap();

        let reopened = SettingsStore::open(path).unwrap();
        assert_eq!(reopened.get_token().map(String::as_str), Some("abc.def.ghi"));
        assert_eq!(reopened.get_username().map(String::as_str), Some("alice"));
        assert_eq!(reopened.get_user_type(), Some(UserType::Jellyfin));
    }

    #[test]
    fn test_user_type_stored_as_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut store = SettingsStore::new(path.clone());
        store.set_user_type(UserType::Jellyfin);
        store.save().unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("userType = \"1\""));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path().join("absent.toml")).unwrap();
        assert!(store.get_token().is_none());
        assert!(store.get_user_type().is_none());
    }

    #[test]
    fn test_unknown_user_type_code_is_ignored() {
        let mut store = SettingsStore::new(PathBuf::from("unused.toml"));
        store.set(USER_TYPE_KEY.to_string(), "9".to_string());
        assert_eq!(store.get_user_type(), None);
    }

    #[test]
    fn test_clear_session() {
        let mut store = SettingsStore::new(PathBuf::from("unused.toml"));
        store.set_token("t".to_string());
        store.set_user_type(UserType::Watcharr);
        store.set("other".to_string(), "kept".to_string());
        store.clear_session();
        assert!(store.get_token().is_none());
        assert!(store.get_user_type().is_none());
        assert_eq!(store.get("other").map(String::as_str), Some("kept"));
    }
}
