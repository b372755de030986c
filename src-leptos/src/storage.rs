//! Admin config persisted to localStorage.
//!
//! Outside the browser nothing is stored and the default config is used.

use mortgage_types::{AdminConfig, ConfigError};

#[cfg(target_arch = "wasm32")]
const CONFIG_STORAGE_KEY: &str = "mortgage_admin_config";

/// Load the stored config, falling back to defaults.
pub fn load_config() -> AdminConfig {
    match read_stored_config() {
        Ok(stored) => config_from_stored(stored.as_deref()),
        Err(e) => {
            log::error!("Failed to read admin config: {}", e);
            AdminConfig::default()
        }
    }
}

/// Save the config for the next visit.
pub fn save_config(config: &AdminConfig) -> Result<(), ConfigError> {
    let json = config.to_json()?;
    write_stored_config(&json)
}

fn config_from_stored(stored: Option<&str>) -> AdminConfig {
    let Some(json) = stored else {
        return AdminConfig::default();
    };
    AdminConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("Ignoring stored admin config: {}", e);
        AdminConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, ConfigError> {
    let storage_error = |message: &str| ConfigError::Storage { message: message.to_string() };
    let window = web_sys::window().ok_or_else(|| storage_error("no window"))?;
    window
        .local_storage()
        .map_err(|_| storage_error("localStorage access denied"))?
        .ok_or_else(|| storage_error("localStorage unavailable"))
}

#[cfg(target_arch = "wasm32")]
fn read_stored_config() -> Result<Option<String>, ConfigError> {
    local_storage()?
        .get_item(CONFIG_STORAGE_KEY)
        .map_err(|_| ConfigError::Storage { message: "localStorage read failed".to_string() })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_stored_config() -> Result<Option<String>, ConfigError> {
    Ok(None)
}

#[cfg(target_arch = "wasm32")]
fn write_stored_config(json: &str) -> Result<(), ConfigError> {
    local_storage()?
        .set_item(CONFIG_STORAGE_KEY, json)
        .map_err(|_| ConfigError::Storage { message: "localStorage write failed".to_string() })
}

#[cfg(not(target_arch = "wasm32"))]
fn write_stored_config(json: &str) -> Result<(), ConfigError> {
    let _ = json;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_types::Theme;

    #[test]
    fn test_nothing_stored_gives_default() {
        assert_eq!(config_from_stored(None), AdminConfig::default());
        assert_eq!(load_config(), AdminConfig::default());
    }

    #[test]
    fn test_corrupt_value_gives_default() {
        assert_eq!(config_from_stored(Some("][")), AdminConfig::default());
    }

    #[test]
    fn test_stored_value_is_used() {
        let config = config_from_stored(Some(r#"{"confirm_delete":false,"theme":"dark"}"#));
        assert!(!config.confirm_delete);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn test_save_outside_browser_is_noop() {
        assert!(save_config(&AdminConfig::default()).is_ok());
    }
}
