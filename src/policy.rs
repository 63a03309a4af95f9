//! Password policy configuration.

use std::env::VarError;
use std::path::PathBuf;
use std::sync::LazyLock;
use thiserror::Error;

use crate::blocklist::{Blocklist, BlocklistError};

/// Minimum number of characters required by the default policy.
pub const DEFAULT_MIN_LENGTH: usize = 12;

/// Environment variable holding the path of an extra blocklist file.
pub const BLOCKLIST_PATH_ENV: &str = "PWD_BLOCKLIST_PATH";

/// Environment variable overriding the minimum length.
pub const MIN_LENGTH_ENV: &str = "PWD_MIN_LENGTH";

static DEFAULT_POLICY: LazyLock<PasswordPolicy> = LazyLock::new(PasswordPolicy::default);

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid PWD_MIN_LENGTH value '{value}': expected a positive integer")]
    InvalidMinLength { value: String },
    #[error("Environment variable {name} is not valid unicode")]
    NotUnicode { name: &'static str },
    #[error(transparent)]
    Blocklist(#[from] BlocklistError),
}

/// Which characters satisfy the special character rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpecialCharacters {
    /// Anything that is neither ASCII alphanumeric nor whitespace.
    #[default]
    AnySymbol,
    /// Only the listed characters, narrowed to symbols.
    Only(String),
}

impl SpecialCharacters {
    /// Letters, digits and whitespace are never special, even when listed.
    pub fn accepts(&self, c: char) -> bool {
        let symbol = !c.is_ascii_alphanumeric() && !c.is_whitespace();
        match self {
            SpecialCharacters::AnySymbol => symbol,
            SpecialCharacters::Only(allowed) => symbol && allowed.contains(c),
        }
    }

    /// Hint appended to the special character error message.
    pub(crate) fn hint(&self) -> String {
        match self {
            SpecialCharacters::AnySymbol => "e.g. !@#$%^&*".to_string(),
            SpecialCharacters::Only(allowed) => allowed.clone(),
        }
    }
}

/// Rules applied by [`PasswordPolicy::validate`] and
/// [`PasswordPolicy::check_requirements`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub special_characters: SpecialCharacters,
    pub blocklist: Blocklist,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            special_characters: SpecialCharacters::default(),
            blocklist: Blocklist::default(),
        }
    }
}

impl PasswordPolicy {
    /// Shared default policy used by the free validation functions.
    pub fn shared() -> &'static PasswordPolicy {
        &DEFAULT_POLICY
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_special_characters(mut self, special_characters: SpecialCharacters) -> Self {
        self.special_characters = special_characters;
        self
    }

    pub fn with_blocklist(mut self, blocklist: Blocklist) -> Self {
        self.blocklist = blocklist;
        self
    }

    /// Builds the default policy, then applies environment overrides.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_MIN_LENGTH`: positive integer replacing the minimum length
    /// - `PWD_BLOCKLIST_PATH`: file whose tokens are merged into the
    ///   built-in blocklist
    ///
    /// # Errors
    ///
    /// Returns error if `PWD_MIN_LENGTH` is not a positive integer or the
    /// blocklist file cannot be loaded.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Some(value) = env_var(MIN_LENGTH_ENV)? {
            policy.min_length = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Policy configuration FAILED: invalid {}", MIN_LENGTH_ENV);
                    return Err(PolicyError::InvalidMinLength { value });
                }
            };
        }

        if let Some(path) = blocklist_path()? {
            let extra = Blocklist::from_path(&path)?;
            policy.blocklist.merge(extra);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Password policy configured: min_length={}, blocklist={} tokens",
            policy.min_length,
            policy.blocklist.len()
        );

        Ok(policy)
    }
}

/// Returns the extra blocklist path from `PWD_BLOCKLIST_PATH`, if set.
///
/// # Errors
///
/// Returns error if the variable is set but not valid unicode.
pub fn blocklist_path() -> Result<Option<PathBuf>, PolicyError> {
    Ok(env_var(BLOCKLIST_PATH_ENV)?
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from))
}

/// `Ok(None)` when unset; non-unicode values are an error, not "unset".
fn env_var(name: &'static str) -> Result<Option<String>, PolicyError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy configuration FAILED: {} is not valid unicode", name);
            Err(PolicyError::NotUnicode { name })
        }
    }
}
