use web_sys::window;

use crate::shared::config::config;

/// Source of the bearer token used for authenticated requests
pub trait CredentialProvider {
    fn get_token(&self) -> Option<String>;
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Reads the token the login flow left in localStorage. Read-only.
#[derive(Debug, Clone)]
pub struct LocalStorageCredentials {
    key: String,
}

impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Use the storage key from the app configuration
    pub fn from_config() -> Self {
        Self::new(config().auth.token_key.clone())
    }
}

impl CredentialProvider for LocalStorageCredentials {
    fn get_token(&self) -> Option<String> {
        get_local_storage()?
            .get_item(&self.key)
            .ok()?
            .filter(|token| !token.is_empty())
    }
}
