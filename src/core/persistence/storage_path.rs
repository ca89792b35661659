use std::path::{Path, PathBuf};

/// File holding the blob stored under `key`.
///
/// Characters outside `[A-Za-z0-9._-]` are percent-encoded so any key maps to
/// a single flat file name.
pub fn selection_blob_path(base_dir: &Path, key: &str) -> PathBuf {
    base_dir.join(format!("{}.json", encode_key(key)))
}

fn encode_key(key: &str) -> String {
    // urlencoding leaves `~` unescaped
    urlencoding::encode(key).replace('~', "%7E")
}
