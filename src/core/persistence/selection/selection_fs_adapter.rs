use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::persistence::storage_path::selection_blob_path;

use super::selection_storage_adapter_trait::SelectionStorageAdapterTrait;

/// FS adapter for persisted selections.
///
/// One file per key with atomic writes.
pub struct SelectionFsAdapter {
    base_dir: PathBuf,
}

impl SelectionFsAdapter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl SelectionStorageAdapterTrait for SelectionFsAdapter {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = selection_blob_path(&self.base_dir, key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read selection file {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = selection_blob_path(&self.base_dir, key);
        fs::create_dir_all(&self.base_dir).context("Failed to create selection directory")?;

        let tmp_path = path.with_extension("json.tmp");
        let mut f = File::create(&tmp_path).context("Failed to create temp selection file")?;
        f.write_all(value.as_bytes())?;
        f.flush()?;
        f.sync_all().context("Failed to sync temp selection file")?;
        fs::rename(&tmp_path, &path).context("Failed to finalize selection file")?;

        #[cfg(unix)]
        File::open(&self.base_dir)
            .and_then(|dir| dir.sync_all())
            .context("Failed to sync selection directory")?;

        debug!(key, path = %path.display(), "selection blob written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = selection_blob_path(&self.base_dir, key);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "selection blob removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).context("Failed to delete selection file"),
        }
    }
}
