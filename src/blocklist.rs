//! Common-pattern blocklist
//!
//! Holds the lowercase tokens that a password must not contain, and loads
//! extra tokens from external files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Tokens rejected by the default policy.
///
/// Matching is a case-insensitive substring search, so every entry must be
/// long enough not to reject ordinary strong passwords.
pub const DEFAULT_COMMON_PATTERNS: &[&str] = &[
    "password",
    "passw0rd",
    "qwerty",
    "asdfgh",
    "zxcvbn",
    "letmein",
    "welcome",
    "iloveyou",
    "trustno1",
    "abc123",
    "123456",
    "654321",
    "111111",
    "000000",
    "monkey",
    "dragon",
    "sunshine",
    "princess",
    "football",
    "baseball",
    "superman",
    "batman",
    "master",
    "shadow",
    "changeme",
    "default",
    "secret",
];

#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("Blocklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blocklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blocklist file is empty")]
    EmptyFile,
}

/// Lowercase, deduplicated list of forbidden substrings.
///
/// Tokens keep insertion order; `seen` backs the duplicate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocklist {
    tokens: Vec<String>,
    seen: HashSet<String>,
}

impl Default for Blocklist {
    fn default() -> Self {
        Self::new(DEFAULT_COMMON_PATTERNS.iter().copied())
    }
}

impl Blocklist {
    /// Builds a blocklist from arbitrary tokens.
    ///
    /// Tokens are trimmed and lowercased; blank ones are dropped.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::empty();
        list.extend(tokens);
        list
    }

    /// A blocklist that rejects nothing.
    pub fn empty() -> Self {
        Self {
            tokens: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Loads one token per line from `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no tokens
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlocklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blocklist load FAILED: FileNotFound {:?}", path);
            return Err(BlocklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::new(content.lines());

        if list.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blocklist load FAILED: Empty file {:?}", path);
            return Err(BlocklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blocklist loaded: {} tokens from {:?}", list.len(), path);

        Ok(list)
    }

    /// Adds tokens, skipping blanks and duplicates.
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref().trim().to_lowercase();
            if !token.is_empty() && self.seen.insert(token.clone()) {
                self.tokens.push(token);
            }
        }
    }

    /// Merges another blocklist into this one.
    pub fn merge(&mut self, other: Blocklist) {
        self.extend(other.tokens);
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` if `password` contains any token, ignoring case.
    pub fn matches(&self, password: &str) -> bool {
        if self.tokens.is_empty() {
            return false;
        }
        let lowered = password.to_lowercase();
        self.tokens.iter().any(|t| lowered.contains(t.as_str()))
    }
}
