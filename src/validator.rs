//! Password policy validator - rule evaluation and aggregation.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::PasswordPolicy;
use crate::sections::{
    common_patterns_section, has_lowercase, has_no_spaces, has_number, has_special,
    has_uppercase, length_section, lowercase_section, meets_min_length, number_section,
    special_section, uppercase_section, whitespace_section, SectionFn,
};
use crate::types::{RequirementResult, ValidationResult};

/// Reason returned for an empty or missing password.
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Delay before live feedback is computed, so fast typing only evaluates the
/// last keystroke.
#[cfg(feature = "async")]
pub const LIVE_FEEDBACK_DEBOUNCE: Duration = Duration::from_millis(300);

/// Sections in reporting order.
const SECTIONS: [(&str, SectionFn); 7] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("number", number_section),
    ("special", special_section),
    ("whitespace", whitespace_section),
    ("common_patterns", common_patterns_section),
];

/// `None` for missing or empty input.
fn non_empty(password: Option<&SecretString>) -> Option<&SecretString> {
    password.filter(|p| !p.expose_secret().is_empty())
}

impl PasswordPolicy {
    /// Evaluates the six structural rules.
    ///
    /// An empty or missing password reports every rule as unmet.
    pub fn check_requirements(&self, password: Option<&SecretString>) -> RequirementResult {
        let Some(password) = non_empty(password) else {
            return RequirementResult::unmet_all();
        };
        let pwd = password.expose_secret();

        RequirementResult {
            min_length: meets_min_length(pwd, self),
            has_uppercase: has_uppercase(pwd),
            has_lowercase: has_lowercase(pwd),
            has_number: has_number(pwd),
            has_special: has_special(pwd, self),
            no_spaces: has_no_spaces(pwd),
        }
    }

    /// Runs every rule and the blocklist, collecting one message per failure
    /// in a fixed order.
    pub fn validate(&self, password: Option<&SecretString>) -> ValidationResult {
        let Some(password) = non_empty(password) else {
            return ValidationResult::from_errors(vec![PASSWORD_REQUIRED.to_string()]);
        };

        let mut reasons = Vec::new();

        for (_section_name, section_fn) in SECTIONS {
            if let Some(reason) = section_fn(password, self) {
                #[cfg(feature = "tracing")]
                tracing::trace!("Password policy section failed: {}", _section_name);
                reasons.push(reason);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Password validation finished: {} failed rules", reasons.len());

        ValidationResult::from_errors(reasons)
    }
}

/// Evaluates the structural rules of the default policy.
///
/// # Arguments
/// * `password` - The candidate, `None` when the field is missing
///
/// # Returns
/// A `RequirementResult` with all six rules; all `false` for empty input.
pub fn check_password_requirements(password: Option<&SecretString>) -> RequirementResult {
    PasswordPolicy::shared().check_requirements(password)
}

/// Validates a password against the default policy.
///
/// # Arguments
/// * `password` - The candidate, `None` when the field is missing
///
/// # Returns
/// A `ValidationResult` that is valid iff no rule failed.
pub fn validate_password(password: Option<&SecretString>) -> ValidationResult {
    PasswordPolicy::shared().validate(password)
}

/// Debounced live feedback that sends the requirements via channel.
///
/// Waits [`LIVE_FEEDBACK_DEBOUNCE`], then sends nothing if `token` was
/// cancelled in the meantime.
#[cfg(feature = "async")]
pub async fn check_password_requirements_tx(
    policy: &PasswordPolicy,
    password: Option<&SecretString>,
    token: CancellationToken,
    tx: mpsc::Sender<RequirementResult>,
) {
    tokio::time::sleep(LIVE_FEEDBACK_DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Live password feedback superseded");
        return;
    }

    let requirements = policy.check_requirements(password);

    if let Err(_e) = tx.send(requirements).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password requirements: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_requirements_tx_sends_after_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = secret("StrongP@ssw0rd!");

        check_password_requirements_tx(PasswordPolicy::shared(), Some(&pwd), token, tx).await;

        let requirements = rx.recv().await.expect("Should receive requirements");
        assert!(requirements.all_met());
    }

    #[tokio::test(start_paused = true)]
    async fn test_requirements_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = secret("StrongP@ssw0rd!");

        let canceller = {
            let token = token.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                token.cancel();
            }
        };

        tokio::join!(
            check_password_requirements_tx(PasswordPolicy::shared(), Some(&pwd), token, tx),
            canceller,
        );

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_requirements_tx_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let token = CancellationToken::new();

        check_password_requirements_tx(PasswordPolicy::shared(), None, token, tx).await;
    }
}
