use std::{fmt, str::FromStr};

use jid_sort_shared_kernel::{DomainError, DomainResult};

const USER_SEPARATOR: char = '@';
const RESOURCE_SEPARATOR: char = '#';

/// A Jabber ID reduced to its `username@domain` part.
///
/// Any `#resource` suffix is dropped while parsing and is never written
/// back out, so a parse/serialize pass normalizes the line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Jid {
    username: String,
    domain: String,
}

impl Jid {
    pub fn new(username: impl Into<String>, domain: impl Into<String>) -> Self {
        Self { username: username.into(), domain: domain.into() }
    }

    /// Parse one raw line, trimming surrounding whitespace first.
    ///
    /// # Errors
    /// Returns [`DomainError::UnparsableLine`] carrying the trimmed line when
    /// it has no `@`.
    pub fn parse_line(raw: &str) -> DomainResult<Self> {
        let line = raw.trim();
        let Some(at) = line.find(USER_SEPARATOR) else {
            return Err(DomainError::UnparsableLine { line: line.to_owned() });
        };

        let rest = &line[at + USER_SEPARATOR.len_utf8()..];
        let domain = rest.find(RESOURCE_SEPARATOR).map_or(rest, |hash| &rest[..hash]);

        Ok(Self::new(&line[..at], domain))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl FromStr for Jid {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{USER_SEPARATOR}{}", self.username, self.domain)
    }
}
