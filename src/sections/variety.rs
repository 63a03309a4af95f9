//! Character variety sections - uppercase, lowercase, numbers, special chars.
//!
//! Each class is reported separately so callers get one message per missing
//! class.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::policy::PasswordPolicy;

pub fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_number(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(pwd: &str, policy: &PasswordPolicy) -> bool {
    pwd.chars().any(|c| policy.special_characters.accepts(c))
}

pub fn uppercase_section(password: &SecretString, _policy: &PasswordPolicy) -> SectionResult {
    if !has_uppercase(password.expose_secret()) {
        return Some("Password must contain at least one uppercase letter".to_string());
    }
    None
}

pub fn lowercase_section(password: &SecretString, _policy: &PasswordPolicy) -> SectionResult {
    if !has_lowercase(password.expose_secret()) {
        return Some("Password must contain at least one lowercase letter".to_string());
    }
    None
}

pub fn number_section(password: &SecretString, _policy: &PasswordPolicy) -> SectionResult {
    if !has_number(password.expose_secret()) {
        return Some("Password must contain at least one number".to_string());
    }
    None
}

/// The message ends with a hint listing acceptable characters.
pub fn special_section(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    if !has_special(password.expose_secret(), policy) {
        return Some(format!(
            "Password must contain at least one special character ({})",
            policy.special_characters.hint()
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::SpecialCharacters;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let policy = PasswordPolicy::default();
        let pwd = secret("lowercase123!");
        assert_eq!(
            uppercase_section(&pwd, &policy),
            Some("Password must contain at least one uppercase letter".to_string())
        );
        assert_eq!(lowercase_section(&pwd, &policy), None);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let policy = PasswordPolicy::default();
        let pwd = secret("UPPERCASE123!");
        assert_eq!(
            lowercase_section(&pwd, &policy),
            Some("Password must contain at least one lowercase letter".to_string())
        );
        assert_eq!(uppercase_section(&pwd, &policy), None);
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let pwd = secret("NoNumbers!");
        assert_eq!(
            number_section(&pwd, &PasswordPolicy::default()),
            Some("Password must contain at least one number".to_string())
        );
    }

    #[test]
    fn test_variety_section_missing_special() {
        let pwd = secret("NoSpecial123");
        let reason = special_section(&pwd, &PasswordPolicy::default()).expect("should fail");
        assert!(reason.contains("Password must contain at least one special character"));
    }

    #[test]
    fn test_space_is_not_special() {
        let policy = PasswordPolicy::default();
        assert!(!has_special("No Special 123", &policy));
        assert!(!has_special("tab\there", &policy));
    }

    #[test]
    fn test_non_ascii_letters_do_not_count_as_case() {
        assert!(!has_uppercase("ÉÀÜ"));
        assert!(!has_lowercase("éàü"));
        assert!(!has_number("٣٤٥"));
    }

    #[test]
    fn test_custom_special_set() {
        let policy = PasswordPolicy::default()
            .with_special_characters(SpecialCharacters::Only("@$!%*?&".to_string()));
        let pwd = secret("HasHash123#");
        assert_eq!(
            special_section(&pwd, &policy),
            Some("Password must contain at least one special character (@$!%*?&)".to_string())
        );
        assert_eq!(special_section(&secret("HasBang123!"), &policy), None);
    }

    #[test]
    fn test_custom_special_set_ignores_spaces_and_alphanumerics() {
        let spaced = PasswordPolicy::default()
            .with_special_characters(SpecialCharacters::Only(" !".to_string()));
        assert!(!has_special("Valid Pass1234", &spaced));
        assert!(special_section(&secret("Valid Pass1234"), &spaced).is_some());

        let alnum = PasswordPolicy::default()
            .with_special_characters(SpecialCharacters::Only("a1".to_string()));
        assert!(!has_special("Abcdefgh1234", &alnum));
    }

    #[test]
    fn test_variety_section_all_categories() {
        let policy = PasswordPolicy::default();
        let pwd = secret("HasAll123!@#");
        assert_eq!(uppercase_section(&pwd, &policy), None);
        assert_eq!(lowercase_section(&pwd, &policy), None);
        assert_eq!(number_section(&pwd, &policy), None);
        assert_eq!(special_section(&pwd, &policy), None);
    }
}
