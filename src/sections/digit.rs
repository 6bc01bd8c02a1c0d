//! Digit section.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

// `\d` is Unicode-aware: any decimal digit (Nd) matches, not only 0-9.
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

/// Passes when the password contains a decimal digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !DIGIT.is_match(password.expose_secret()) {
        return Some("Include at least one number (0-9).");
    }
    None
}
