//! Common patterns section - rejects passwords containing blocklisted words.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::policy::PasswordPolicy;

/// Checks the password against the policy blocklist.
///
/// # Returns
/// - `Some(reason)` if any blocklisted token appears, ignoring case
/// - `None` otherwise
pub fn common_patterns_section(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    if policy.blocklist.matches(password.expose_secret()) {
        return Some("Password cannot contain common patterns or dictionary words".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocklist::Blocklist;

    #[test]
    fn test_common_patterns_section_dictionary_word() {
        let pwd = SecretString::new("password123!@#".to_string().into());
        let result = common_patterns_section(&pwd, &PasswordPolicy::default());
        assert_eq!(
            result,
            Some("Password cannot contain common patterns or dictionary words".to_string())
        );
    }

    #[test]
    fn test_common_patterns_section_upper_case_match() {
        let pwd = SecretString::new("MyPASSWORD!2024x".to_string().into());
        assert!(common_patterns_section(&pwd, &PasswordPolicy::default()).is_some());
    }

    #[test]
    fn test_common_patterns_section_strong_password() {
        let pwd = SecretString::new("CorrectHorseBatteryStaple!123".to_string().into());
        assert_eq!(common_patterns_section(&pwd, &PasswordPolicy::default()), None);
    }

    #[test]
    fn test_common_patterns_section_empty_blocklist() {
        let policy = PasswordPolicy::default().with_blocklist(Blocklist::empty());
        let pwd = SecretString::new("password123!@#".to_string().into());
        assert_eq!(common_patterns_section(&pwd, &policy), None);
    }
}
