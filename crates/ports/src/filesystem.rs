// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use jid_sort_shared_kernel::Result;

/// Suffix appended to the source name to form its backup.
pub const BACKUP_SUFFIX: &str = "~";

/// `<path>~`, next to the original.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Port for loading and replacing a JID list file.
pub trait JidListStore: Send + Sync {
    /// Read every line of `path`. Failing to open or read is fatal.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;

    /// Move `path` to its backup, replacing any previous backup, then write
    /// `contents` to `path`. Returns the backup location.
    ///
    /// The move must finish before `path` is opened for writing.
    fn replace_with_backup(&self, path: &Path, contents: &str) -> Result<PathBuf>;
}
