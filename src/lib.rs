//! Password policy validation library
//!
//! This library checks passwords against a fixed set of structural rules
//! (length, character classes, no whitespace) plus a common-pattern
//! blocklist, and reports either a per-rule checklist or an ordered list of
//! human-readable reasons.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live feedback with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize` for the result types
//!
//! # Environment Variables
//!
//! Read by [`PasswordPolicy::from_env`] only:
//!
//! - `PWD_MIN_LENGTH`: Minimum password length (default: 12)
//! - `PWD_BLOCKLIST_PATH`: File with extra blocklist tokens, one per line
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{check_password_requirements, validate_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("StrongP@ssw0rd!".to_string().into());
//!
//! let result = validate_password(Some(&password));
//! assert!(result.is_valid());
//!
//! let checklist = check_password_requirements(Some(&password));
//! assert!(checklist.all_met());
//!
//! let missing = validate_password(None);
//! assert_eq!(missing.errors(), &["Password is required".to_string()]);
//! ```

// Internal modules
mod blocklist;
mod policy;
mod sections;
mod types;
mod validator;

// Public API
pub use blocklist::{Blocklist, BlocklistError, DEFAULT_COMMON_PATTERNS};
pub use policy::{
    blocklist_path, PasswordPolicy, PolicyError, SpecialCharacters, BLOCKLIST_PATH_ENV,
    DEFAULT_MIN_LENGTH, MIN_LENGTH_ENV,
};
pub use types::{RequirementResult, ValidationResult};
pub use validator::{check_password_requirements, validate_password, PASSWORD_REQUIRED};

#[cfg(feature = "async")]
pub use validator::{check_password_requirements_tx, LIVE_FEEDBACK_DEBOUNCE};
