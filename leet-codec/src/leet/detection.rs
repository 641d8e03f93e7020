//! Detector: does this text already carry a lot of leetspeak?
//!
//! A coarse frequency heuristic, not a grammar check. Numeric-heavy text such as
//! serial numbers reads as leetspeak, and leetspeak built only from glyph
//! variants (`/\/\`) goes unnoticed because those characters are not indicators.

use serde::{Deserialize, Serialize};

/// Characters that count as leetspeak indicators.
pub const INDICATORS: &str = "0123456789@#$+";

/// Default share of indicators (against alphanumerics) that flags a text.
pub const DEFAULT_THRESHOLD: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeetScore {
    /// Indicator characters seen.
    pub leet_count: usize,
    /// ASCII alphanumerics seen.
    pub total_count: usize,
}

impl LeetScore {
    pub fn ratio(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.leet_count as f64 / self.total_count as f64
        }
    }

    pub fn exceeds(&self, threshold: f64) -> bool {
        self.total_count > 0 && self.ratio() >= threshold
    }
}

pub fn score(text: &str) -> LeetScore {
    text.chars().fold(LeetScore::default(), |mut score, c| {
        if c.is_ascii_alphanumeric() {
            score.total_count += 1;
        }
        if INDICATORS.contains(c) {
            score.leet_count += 1;
        }
        score
    })
}

pub fn looks_like_leetspeak(text: &str, threshold: f64) -> bool {
    score(text).exceeds(threshold)
}
