use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read `path` as UTF-8 and split it on `\r\n`, `\n` or a bare `\r`.
    /// Terminators are removed and a trailing one does not start an extra line.
    /// The handle is closed before returning.
    pub fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
        let mut text = String::new();
        Self::open_buffered(path)?.read_to_string(&mut text)?;
        Ok(split_lines(&text))
    }
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(end) = rest.find(['\r', '\n']) {
        lines.push(rest[..end].to_owned());
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_owned());
    }
    lines
}
