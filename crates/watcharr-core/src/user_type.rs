use watcharr_config::SettingsStore;
use watcharr_models::UserType;

/// Where the façade reads the current account kind from. Consulted on every
/// call that depends on it, so a settings change takes effect immediately.
pub trait UserTypeSource: Send + Sync {
    fn user_type(&self) -> Option<UserType>;
}

impl UserTypeSource for UserType {
    fn user_type(&self) -> Option<UserType> {
        Some(*self)
    }
}

impl UserTypeSource for Option<UserType> {
    fn user_type(&self) -> Option<UserType> {
        *self
    }
}

impl UserTypeSource for SettingsStore {
    fn user_type(&self) -> Option<UserType> {
        self.get_user_type()
    }
}

impl<T: UserTypeSource + ?Sized> UserTypeSource for std::sync::RwLock<T> {
    fn user_type(&self) -> Option<UserType> {
        self.read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .user_type()
    }
}

impl<T: UserTypeSource + ?Sized> UserTypeSource for std::sync::Arc<T> {
    fn user_type(&self) -> Option<UserType> {
        (**self).user_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, RwLock};

    #[test]
    fn test_settings_change_is_seen() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Arc::new(RwLock::new(SettingsStore::new(dir.path().join("settings.toml"))));
        assert_eq!(settings.user_type(), None);

        settings.write().unwrap().set_user_type(UserType::Jellyfin);
        assert_eq!(settings.user_type(), Some(UserType::Jellyfin));
    }
}
