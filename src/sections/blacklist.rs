//! Blacklist section - checks if password is a known common password.

use crate::blacklist::is_blacklisted;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Fails when the lower-cased password exactly matches a blacklist entry.
pub fn blacklist_section(password: &SecretString) -> SectionResult {
    if is_blacklisted(password.expose_secret()) {
        return Some("This password is too common. Choose a more secure one.");
    }
    None
}
