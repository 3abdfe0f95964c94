// crates/infra/src/filesystem.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use jid_sort_ports::filesystem::{JidListStore, backup_path_for};
use jid_sort_shared_kernel::{InfrastructureError, Result};
use log::debug;

use crate::persistence::{FileReader, FileWriter};

/// Filesystem adapter implementing the `JidListStore` port on the local disk.
#[derive(Debug, Default)]
pub struct LocalListStore;

impl LocalListStore {
    pub fn new() -> Self {
        Self
    }
}

impl JidListStore for LocalListStore {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        FileReader::read_lines(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }

    fn replace_with_backup(&self, path: &Path, contents: &str) -> Result<PathBuf> {
        replace_with(path, contents.as_bytes(), |target, data| FileWriter::write_all(target, data))
    }
}

// The rename completes before `write` opens `path`; if the write fails the
// backup is the only copy left.
fn replace_with<F>(path: &Path, contents: &[u8], write: F) -> Result<PathBuf>
where
    F: FnOnce(&Path, &[u8]) -> io::Result<()>,
{
    let backup = backup_path_for(path);

    remove_stale_backup(&backup)?;
    fs::rename(path, &backup).map_err(|source| fs_op("rename to backup", path, source))?;
    debug!("moved {} to {}", path.display(), backup.display());

    write(path, contents).map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;

    Ok(backup)
}

// An earlier backup is dropped without asking.
fn remove_stale_backup(backup: &Path) -> Result<()> {
    match fs::remove_file(backup) {
        Ok(()) => {
            debug!("removed previous backup {}", backup.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(fs_op("remove stale backup", backup, source).into()),
    }
}

fn fs_op(operation: &str, path: &Path, source: io::Error) -> InfrastructureError {
    InfrastructureError::FileSystemOperation { operation: operation.to_string(), path: path.to_path_buf(), source }
}
