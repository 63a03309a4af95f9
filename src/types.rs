//! Result types returned by the validator.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Per-rule outcome used for live checklist feedback.
///
/// All six rules are always present; an empty password reports every rule as
/// unmet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct RequirementResult {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special: bool,
    pub no_spaces: bool,
}

impl RequirementResult {
    /// Outcome for an empty or missing password.
    pub fn unmet_all() -> Self {
        Self::default()
    }

    pub fn all_met(&self) -> bool {
        self.iter().all(|(_, met)| met)
    }

    /// `(name, met)` pairs in rule order, using the camelCase wire names.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        [
            ("minLength", self.min_length),
            ("hasUppercase", self.has_uppercase),
            ("hasLowercase", self.has_lowercase),
            ("hasNumber", self.has_number),
            ("hasSpecial", self.has_special),
            ("noSpaces", self.no_spaces),
        ]
        .into_iter()
    }

    /// Names of the rules that are not satisfied.
    pub fn unmet(&self) -> Vec<&'static str> {
        self.iter().filter(|(_, met)| !met).map(|(name, _)| name).collect()
    }
}

/// Final accept/reject decision with ordered reasons.
///
/// Built only from the list of failures, so `is_valid()` is true exactly when
/// `errors()` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}
