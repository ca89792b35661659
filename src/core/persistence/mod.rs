pub mod selection;
pub mod storage_path;
