//! Build-time client configuration.
//!
//! A browser bundle has no process environment, so overrides are captured
//! with `option_env!` when the crate is compiled:
//!
//! - `AUTHDASH_API_BASE_URL`: backend origin (default `http://localhost:3000`)
//! - `AUTHDASH_STORAGE_NAMESPACE`: prefix for `localStorage` keys (default `authdash`)
//! - `AUTHDASH_TOAST_MS`: notification lifetime in milliseconds (default 5000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_STORAGE_NAMESPACE: &str = "authdash";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub storage_namespace: String,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_owned(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Resolve the configuration baked in at compile time.
    ///
    /// Invalid values are logged and replaced by the defaults.
    pub fn from_build_env() -> Self {
        let resolved = Self::from_lookup(|key| {
            let value = match key {
                "AUTHDASH_API_BASE_URL" => option_env!("AUTHDASH_API_BASE_URL"),
                "AUTHDASH_STORAGE_NAMESPACE" => option_env!("AUTHDASH_STORAGE_NAMESPACE"),
                "AUTHDASH_TOAST_MS" => option_env!("AUTHDASH_TOAST_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        });
        match resolved {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid build configuration, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Build a config from a key lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the base URL is not an `http(s)` URL or
    /// the storage namespace is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = parse_base_url(lookup("AUTHDASH_API_BASE_URL").as_deref())?;

        let storage_namespace = match lookup("AUTHDASH_STORAGE_NAMESPACE") {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(ConfigError::EmptyNamespace);
                }
                trimmed.to_owned()
            }
            None => DEFAULT_STORAGE_NAMESPACE.to_owned(),
        };

        let toast_duration_ms = lookup("AUTHDASH_TOAST_MS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_TOAST_DURATION_MS);

        Ok(Self { api_base_url, storage_namespace, toast_duration_ms })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split("://").nth(1).is_some_and(|rest| !rest.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}
