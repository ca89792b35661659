use anyhow::{Context, Result};

use crate::domain::selection::constants::LOCAL_STORAGE_KEY;
use crate::errors::PageFiltersError;

use super::persisted_selection_entity::PersistedSelectionEntity;
use super::selection_storage_adapter_trait::SelectionStorageAdapterTrait;

/// `"<LOCAL_STORAGE_KEY>:<org_id>"`
pub fn storage_key(org_id: &str) -> String {
    format!("{}:{}", LOCAL_STORAGE_KEY, org_id)
}

/// API-facing repository abstraction for persisted selections.
pub trait SelectionApiRepository {
    fn storage_adapter(&self) -> &dyn SelectionStorageAdapterTrait;

    fn read(&self, org_id: &str) -> Result<Option<PersistedSelectionEntity>> {
        let key = storage_key(org_id);
        let Some(raw) = self.storage_adapter().get(&key)? else {
            return Ok(None);
        };

        let entity = serde_json::from_str(&raw)
            .map_err(PageFiltersError::from)
            .with_context(|| format!("Corrupt selection blob at {}", key))?;
        Ok(Some(entity))
    }

    fn update(&self, org_id: &str, entity: &PersistedSelectionEntity) -> Result<()> {
        let raw = serde_json::to_string(entity).map_err(PageFiltersError::from)?;
        self.storage_adapter().set(&storage_key(org_id), &raw)
    }

    fn delete(&self, org_id: &str) -> Result<()> {
        self.storage_adapter().remove(&storage_key(org_id))
    }
}
