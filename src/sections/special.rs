//! Special character section - only the fixed set `!@#$%^&*` counts.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

pub fn special_character_section(password: &SecretString) -> SectionResult {
    if !password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARACTERS.contains(c))
    {
        return Some("Add at least one special character (!@#$%^&*).");
    }
    None
}
