pub mod persisted_selection_entity;
pub mod selection_api_repository_trait;
pub mod selection_fs_adapter;
pub mod selection_memory_adapter;
pub mod selection_repository;
pub mod selection_storage_adapter_trait;
