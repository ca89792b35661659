use anyhow::Result;

/// Synchronous string-keyed blob store (the browser's local storage contract).
pub trait SelectionStorageAdapterTrait {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a key that was never set succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}
