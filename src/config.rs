use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Preference file used by the `inspect` CLI
    pub preferences_file: PathBuf,

    // Locale used when a request carries no Accept-Language header.
    // When unset, the process locale (LC_ALL / LC_MESSAGES / LANG) is used.
    pub locale_override: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },

            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "data/preferences.json".to_string())
                .into(),

            locale_override: std::env::var("LOCALE_OVERRIDE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }
}
