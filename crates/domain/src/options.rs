// crates/domain/src/options.rs

/// Where the sorted list goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Rename the source to `<file>~` and write the sorted list in its place.
    #[default]
    InPlace,
    /// Print the sorted list and leave the source untouched.
    Stdout,
}

impl From<bool> for OutputMode {
    /// `true` selects [`OutputMode::Stdout`].
    #[inline]
    fn from(stdout: bool) -> Self {
        if stdout { Self::Stdout } else { Self::InPlace }
    }
}

/// Line separator written after the last entry of a rewritten file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// Separator native to the build target.
    pub const fn platform() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::platform()
    }
}
