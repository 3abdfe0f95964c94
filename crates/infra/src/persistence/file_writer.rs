use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, truncating any existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Create `path` and write `data` to it, flushing before the handle drops.
    pub fn write_all<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let mut w = Self::create(path)?;
        w.write_all(data)?;
        w.flush()
    }
}
