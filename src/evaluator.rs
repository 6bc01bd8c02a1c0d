//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::report::{Breakdown, ScoreReport};
use crate::sections::{
    SectionResult, blacklist_section, case_mix_section, digit_section, length_section,
    special_character_section,
};

/// Score forced onto blacklisted passwords.
const BLACKLISTED_SCORE: u8 = 1;

/// Delay before an async evaluation starts, so keystrokes can cancel it.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

type Section = fn(&SecretString) -> SectionResult;

/// Scoring sections, in feedback order. Each passing section adds one point.
const SCORING_SECTIONS: [(&str, Section); 4] = [
    ("length", length_section),
    ("case", case_mix_section),
    ("digit", digit_section),
    ("special", special_character_section),
];

/// Evaluates password strength.
///
/// Runs the scoring sections, then overrides the score with 1 if the
/// password is blacklisted. Never fails; an empty password fails every
/// scoring section.
///
/// # Example
///
/// ```rust
/// use pwd_meter::{evaluate_password_strength, Strength};
/// use secrecy::SecretString;
///
/// let pwd = SecretString::new("Password123!".to_string().into());
/// let report = evaluate_password_strength(&pwd);
/// assert_eq!(report.score, 4);
/// assert_eq!(report.strength, Strength::Moderate);
/// ```
pub fn evaluate_password_strength(password: &SecretString) -> ScoreReport {
    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    for (_section_name, section_fn) in SCORING_SECTIONS {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("section failed: {}", _section_name);
                feedback.push(reason.to_string());
            }
            None => score += 1,
        }
    }

    if let Some(reason) = blacklist_section(password) {
        #[cfg(feature = "tracing")]
        tracing::debug!("blacklisted password, score {} overridden", score);
        score = BLACKLISTED_SCORE;
        feedback.push(reason.to_string());
    }

    let report = ScoreReport::new(score, feedback, password_breakdown(password));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: score={} strength={}",
        report.score,
        report.strength
    );

    report
}

/// Computes the per-section pass flags without the blacklist override.
pub fn password_breakdown(password: &SecretString) -> Breakdown {
    Breakdown {
        length_ok: length_section(password).is_none(),
        case_mixed: case_mix_section(password).is_none(),
        has_digit: digit_section(password).is_none(),
        has_special: special_character_section(password).is_none(),
    }
}

/// Evaluates after [`EVALUATION_DEBOUNCE`] and sends the report via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let report = evaluate_password_strength(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
