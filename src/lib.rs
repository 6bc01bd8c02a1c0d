//! Password strength meter library
//!
//! Scores a password against a few heuristic checks (length, mixed case,
//! digit, special character) with a common-password blacklist override, and
//! generates random passwords from a fixed 68-symbol alphabet.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_BLACKLIST_PATH`: Custom path to blacklist file
//!   (default: `./assets/blacklist.txt`). A built-in list of five common
//!   passwords is used until a file is loaded.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{evaluate_password_strength, generate_password, MAX_SCORE};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! // Optional: replace the built-in blacklist (call once at startup)
//! pwd_meter::init_blacklist().expect("Failed to load blacklist");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password_strength(&password);
//!
//! println!("Strength: {} ({}/{})", report.strength, report.score, MAX_SCORE);
//! for tip in &report.feedback {
//!     println!("- {tip}");
//! }
//!
//! let suggestion = generate_password(16).expect("length is positive");
//! println!("Try: {}", suggestion.expose_secret());
//! ```

mod blacklist;
mod evaluator;
mod generator;
mod report;
mod sections;

pub use blacklist::{
    BLACKLIST_PATH_ENV, BUILTIN_BLACKLIST, BlacklistError, get_blacklist, get_blacklist_path,
    init_blacklist, init_blacklist_from_path, is_blacklisted,
};
pub use evaluator::{evaluate_password_strength, password_breakdown};
pub use generator::{
    ALPHABET, DEFAULT_LENGTH, GeneratorError, generate_default_password, generate_password,
    generate_password_with_rng,
};
pub use report::{Breakdown, ColorHint, MAX_SCORE, SECURITY_TIPS, ScoreReport, Strength};
pub use sections::{MIN_LENGTH, SPECIAL_CHARACTERS};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_password_strength_tx};
