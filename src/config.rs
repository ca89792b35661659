use std::env;
use std::path::PathBuf;

use validator::Validate;

use crate::errors::{config_error, PageFiltersError};

pub const ENV_STORAGE_DIR: &str = "PAGE_FILTERS_STORAGE_DIR";
pub const ENV_LOG_LEVEL: &str = "PAGE_FILTERS_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PAGE_FILTERS_LOG_DIR";

const DEFAULT_STORAGE_DIR: &str = "data/global-selection";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Validate)]
pub struct PageFiltersConfig {
    /// Directory holding one persisted selection blob per organization.
    #[validate(length(min = 1))]
    pub storage_dir: String,
    #[validate(length(min = 1))]
    pub log_level: String,
    /// Enables the rolling file writer when set.
    pub log_dir: Option<String>,
}

impl Default for PageFiltersConfig {
    fn default() -> Self {
        Self {
            storage_dir: DEFAULT_STORAGE_DIR.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            log_dir: None,
        }
    }
}

impl PageFiltersConfig {
    /// Load from the process environment, reading `.env` first when present.
    ///
    /// Loading `.env` mutates the process environment; call this once at
    /// startup.
    pub fn from_env() -> Result<Self, PageFiltersError> {
        let _ = dotenvy::dotenv();
        Self::from_process_env()
    }

    /// Read the process environment as-is, without touching `.env`.
    pub fn from_process_env() -> Result<Self, PageFiltersError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PageFiltersError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let cfg = Self {
            storage_dir: lookup(ENV_STORAGE_DIR).unwrap_or(defaults.storage_dir),
            log_level: lookup(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: lookup(ENV_LOG_DIR).filter(|v| !v.trim().is_empty()),
        };

        cfg.validate().map_err(config_error)?;
        Ok(cfg)
    }

    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = PageFiltersConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.storage_dir, "data/global-selection");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.log_dir.is_none());
    }

    #[test]
    fn overrides_are_read() {
        let cfg = PageFiltersConfig::from_lookup(lookup_from(&[
            (ENV_STORAGE_DIR, "/var/lib/filters"),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_DIR, "/var/log/filters"),
        ]))
        .unwrap();
        assert_eq!(cfg.storage_path(), PathBuf::from("/var/lib/filters"));
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.log_dir.as_deref(), Some("/var/log/filters"));
    }

    #[test]
    fn empty_storage_dir_is_rejected() {
        let err = PageFiltersConfig::from_lookup(lookup_from(&[(ENV_STORAGE_DIR, "")])).unwrap_err();
        assert!(matches!(err, PageFiltersError::Config(_)));
    }
}
