//! Scratch JID list files backed by `tempfile`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary directory holding one JID list.
#[allow(dead_code)]
pub struct ListFixture {
    dir: TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl ListFixture {
    pub fn new(contents: &str) -> Self {
        Self::named("users.txt", contents)
    }

    pub fn named(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}"));
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        self.dir.path().join(format!("{}~", self.file_name()))
    }

    pub fn write_backup(&self, contents: &str) {
        fs::write(self.backup_path(), contents).unwrap_or_else(|e| panic!("Failed to write backup: {e}"));
    }

    pub fn contents(&self) -> String {
        read(&self.path)
    }

    pub fn backup_contents(&self) -> String {
        read(&self.backup_path())
    }

    fn file_name(&self) -> String {
        self.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
    }
}

#[allow(dead_code)]
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}

/// The compiled binary with logging silenced.
#[allow(dead_code)]
pub fn jid_sort() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jid_sort"));
    cmd.env_remove("RUST_LOG");
    cmd
}
