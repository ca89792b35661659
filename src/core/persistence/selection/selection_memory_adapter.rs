use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;

use crate::errors::storage_error;

use super::selection_storage_adapter_trait::SelectionStorageAdapterTrait;

/// In-process store, for tests and embedders without a writable disk.
#[derive(Default)]
pub struct SelectionMemoryAdapter {
    state: Mutex<HashMap<String, String>>,
}

impl SelectionMemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = match self.state.lock() {
            Ok(state) => state.keys().cloned().collect(),
            Err(_) => Vec::new(),
        };
        keys.sort();
        keys
    }
}

impl SelectionStorageAdapterTrait for SelectionMemoryAdapter {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let state = self.state.lock().map_err(storage_error)?;
        Ok(state.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock().map_err(storage_error)?;
        state.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut state = self.state.lock().map_err(storage_error)?;
        state.remove(key);
        Ok(())
    }
}
