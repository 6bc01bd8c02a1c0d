//! Password evaluation sections
//!
//! Each section checks one property of the password and reports a feedback
//! message when the check fails.

mod blacklist;
mod case_mix;
mod digit;
mod length;
mod special;

pub use blacklist::blacklist_section;
pub use case_mix::case_mix_section;
pub use digit::digit_section;
pub use length::{MIN_LENGTH, length_section};
pub use special::{SPECIAL_CHARACTERS, special_character_section};

/// Result type for section functions.
/// - `Some(feedback)` - Section failed, with the remediation hint
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;
