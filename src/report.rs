//! Evaluation result types and the helpers a UI needs to render them.

use std::fmt;

/// Denominator used when rendering the score as a progress bar.
pub const MAX_SCORE: u8 = 5;

/// General advice shown next to the meter, independent of the password.
pub const SECURITY_TIPS: [&str; 3] = [
    "Use at least 12 characters.",
    "Avoid common words & patterns.",
    "Include uppercase, lowercase, numbers & symbols.",
];

/// Three-level classification derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Maps a score to its strength band.
    ///
    /// `Strong` requires a score of 5 or more, which the four scoring checks
    /// can never produce.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3 | 4 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }

    pub fn color_hint(self) -> ColorHint {
        match self {
            Strength::Weak => ColorHint::Red,
            Strength::Moderate => ColorHint::Orange,
            Strength::Strong => ColorHint::Green,
        }
    }

    /// Headline message for this strength level.
    pub fn summary(self) -> &'static str {
        match self {
            Strength::Weak => "Your password is weak! Improve it:",
            Strength::Moderate => "Your password is okay, but could be stronger!",
            Strength::Strong => "Great! Your password is strong.",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Display color tag paired with a [`Strength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorHint {
    Red,
    Orange,
    Green,
}

impl ColorHint {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorHint::Red => "red",
            ColorHint::Orange => "orange",
            ColorHint::Green => "green",
        }
    }
}

/// Per-check pass flags, not affected by the blacklist override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    pub length_ok: bool,
    pub case_mixed: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl Breakdown {
    /// Chart labels paired with their flags, in check order.
    pub fn labeled(&self) -> [(&'static str, bool); 4] {
        [
            ("Length", self.length_ok),
            ("Uppercase/Lowercase", self.case_mixed),
            ("Digits", self.has_digit),
            ("Special Characters", self.has_special),
        ]
    }

    pub fn passed(&self) -> usize {
        self.labeled().iter().filter(|(_, ok)| *ok).count()
    }

    /// Percentage share of each flag for a pie chart.
    ///
    /// Returns `None` when no check passed, since there is nothing to draw.
    pub fn proportions(&self) -> Option<[f32; 4]> {
        let passed = self.passed();
        if passed == 0 {
            return None;
        }
        let share = 100.0 / passed as f32;
        Some(self.labeled().map(|(_, ok)| if ok { share } else { 0.0 }))
    }
}

/// Full result of a password evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub score: u8,
    pub strength: Strength,
    /// One message per failed check, in check order.
    pub feedback: Vec<String>,
    pub color_hint: ColorHint,
    pub breakdown: Breakdown,
}

impl ScoreReport {
    pub(crate) fn new(score: u8, feedback: Vec<String>, breakdown: Breakdown) -> Self {
        let strength = Strength::from_score(score);
        Self {
            score,
            strength,
            feedback,
            color_hint: strength.color_hint(),
            breakdown,
        }
    }

    /// Fill ratio of the progress bar, `score / MAX_SCORE`.
    pub fn progress(&self) -> f32 {
        f32::from(self.score) / f32::from(MAX_SCORE)
    }
}
