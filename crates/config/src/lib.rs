use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "billogram-client";
const KEYCHAIN_SERVICE: &str = "billogram.api.credentials";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_user: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_user: None,
        }
    }
}

fn default_base_url() -> String {
    "https://billogram.com/api/v2".to_string()
}

pub fn load() -> Result<AppConfig> {
    let cfg: AppConfig = confy::load(APP_NAME, None).context("Failed to load app config")?;
    Ok(cfg)
}

pub fn store(cfg: &AppConfig) -> Result<()> {
    confy::store(APP_NAME, None, cfg).context("Failed to store app config")?;
    Ok(())
}

/// Store the API key for an API user in the OS keychain
pub fn store_api_key(api_user: &str, key: &str) -> Result<()> {
    let entry = keyring::Entry::new(KEYCHAIN_SERVICE, api_user)?;
    entry.set_password(key)?;
    Ok(())
}

/// Retrieve the API key for an API user from the OS keychain
pub fn get_api_key(api_user: &str) -> Result<String> {
    let entry = keyring::Entry::new(KEYCHAIN_SERVICE, api_user)?;
    let key = entry.get_password()?;
    Ok(key)
}

/// Delete the API key for an API user from the OS keychain
pub fn delete_api_key(api_user: &str) -> Result<()> {
    let entry = keyring::Entry::new(KEYCHAIN_SERVICE, api_user)?;
    entry.delete_password()?;
    Ok(())
}
