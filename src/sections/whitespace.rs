//! Whitespace section - rejects spaces, tabs and other whitespace.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::policy::PasswordPolicy;

pub fn has_no_spaces(pwd: &str) -> bool {
    !pwd.chars().any(char::is_whitespace)
}

pub fn whitespace_section(password: &SecretString, _policy: &PasswordPolicy) -> SectionResult {
    if !has_no_spaces(password.expose_secret()) {
        return Some("Password cannot contain spaces".to_string());
    }
    None
}
