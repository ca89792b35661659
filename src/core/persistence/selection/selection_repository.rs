use std::path::PathBuf;

use crate::config::PageFiltersConfig;

use super::selection_api_repository_trait::SelectionApiRepository;
use super::selection_fs_adapter::SelectionFsAdapter;
use super::selection_storage_adapter_trait::SelectionStorageAdapterTrait;

pub struct SelectionRepository {
    adapter: SelectionFsAdapter,
}

impl SelectionRepository {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            adapter: SelectionFsAdapter::new(base_dir),
        }
    }

    pub fn from_config(cfg: &PageFiltersConfig) -> Self {
        Self::new(cfg.storage_path())
    }
}

impl SelectionApiRepository for SelectionRepository {
    fn storage_adapter(&self) -> &dyn SelectionStorageAdapterTrait {
        &self.adapter
    }
}
