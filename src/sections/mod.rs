//! Password policy sections
//!
//! Each section checks one rule and reports a human-readable reason on
//! failure.

mod common_patterns;
mod length;
mod variety;
mod whitespace;

pub use common_patterns::common_patterns_section;
pub use length::{length_section, meets_min_length};
pub use variety::{
    has_lowercase, has_number, has_special, has_uppercase, lowercase_section, number_section,
    special_section, uppercase_section,
};
pub use whitespace::{has_no_spaces, whitespace_section};

/// Result type for section functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// Signature shared by all sections.
pub type SectionFn = fn(&secrecy::SecretString, &crate::policy::PasswordPolicy) -> SectionResult;
