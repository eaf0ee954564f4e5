//! Runtime configuration of the panel
//!
//! The embedded defaults come from `contracts::shared::config`; the API base
//! can be redirected per browser through localStorage without a rebuild.

use contracts::shared::config::{load_config, ApiConfig};
use leptos::prelude::*;
use web_sys::window;

const API_BASE_KEY: &str = "categories_api_base";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the API base override from localStorage
pub fn get_api_base_override() -> Option<String> {
    get_local_storage()?.get_item(API_BASE_KEY).ok()?
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

impl AppConfig {
    /// Read the embedded config and the localStorage override. Called once at startup.
    pub fn load() -> Self {
        let override_url = get_api_base_override();
        if let Some(url) = override_url.as_deref() {
            log::info!("API base overridden from localStorage: {url}");
        }
        Self::resolve(override_url.as_deref())
    }

    pub fn resolve(override_url: Option<&str>) -> Self {
        let api = match load_config() {
            Ok(config) => config.api,
            Err(e) => {
                log::error!("Invalid embedded config, using defaults: {e}");
                ApiConfig::default()
            }
        };
        Self {
            api: api.with_override(override_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}

/// API base as a `Copy` handle for event handlers and spawned tasks
pub fn use_api_base() -> StoredValue<String> {
    StoredValue::new(use_app_config().base_url().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_override() {
        let config = AppConfig::resolve(None);
        assert_eq!(config.base_url(), "https://api.escuelajs.co/api/v1");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_resolve_with_override() {
        let config = AppConfig::resolve(Some("http://127.0.0.1:3000/api/v1/"));
        assert_eq!(config.base_url(), "http://127.0.0.1:3000/api/v1");
    }
}
