//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::policy::PasswordPolicy;

/// Counts characters, not bytes.
pub fn meets_min_length(pwd: &str, policy: &PasswordPolicy) -> bool {
    pwd.chars().count() >= policy.min_length
}

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    if !meets_min_length(password.expose_secret(), policy) {
        return Some(format!(
            "Password must be at least {} characters",
            policy.min_length
        ));
    }
    None
}
