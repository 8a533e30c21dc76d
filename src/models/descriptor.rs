use std::path::PathBuf;
use std::time::SystemTime;

/// A candidate session log before its content has been read: path, the log
/// directory that owns it, and the mtime used as the recency proxy.
#[derive(Debug, Clone)]
pub struct LogFileDescriptor {
    pub path: PathBuf,
    pub project_dir_name: String,
    pub modified: SystemTime,
}
