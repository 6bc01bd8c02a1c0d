//! Case section - checks for both upper-case and lower-case letters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Passes when the password has at least one ASCII upper-case letter and one
/// ASCII lower-case letter.
pub fn case_mix_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some("Include both uppercase and lowercase letters.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_mix_section_missing_uppercase() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        assert!(case_mix_section(&pwd).is_some());
    }

    #[test]
    fn test_case_mix_section_missing_lowercase() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        assert!(case_mix_section(&pwd).is_some());
    }

    #[test]
    fn test_case_mix_section_non_ascii_letters_ignored() {
        let pwd = SecretString::new("Éé".to_string().into());
        assert!(case_mix_section(&pwd).is_some());
    }

    #[test]
    fn test_case_mix_section_mixed() {
        let pwd = SecretString::new("aB".to_string().into());
        assert_eq!(case_mix_section(&pwd), None);
    }
}
