use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageFiltersError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Helper for mapping any storage failure into a storage error
pub fn storage_error<E: ToString>(err: E) -> PageFiltersError {
    PageFiltersError::Storage(err.to_string())
}

/// Helper for mapping config validation failures
pub fn config_error<E: ToString>(err: E) -> PageFiltersError {
    PageFiltersError::Config(err.to_string())
}
