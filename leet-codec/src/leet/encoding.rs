//! Encoder: normal text to leetspeak
//!
//! Every character that case-folds to a canonical letter is replaced with
//! probability `0.2 × intensity`. A replacement is drawn uniformly from the first
//! `⌊intensity × variants / 5⌋ + 1` variants of the letter, so low intensities
//! stay with the simple digit substitutions at the head of each row. Everything
//! else passes through untouched.
//!
//! Randomness comes in through [`Dice`]; any `rand` generator is a `Dice`, and
//! tests can script exact rolls with [`crate::leet::testing::ScriptedDice`].

use crate::leet::variants::{Letter, VariantTable};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// How aggressive the encoder is, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Out-of-range levels are clamped, never rejected.
    pub fn new(level: i64) -> Self {
        Intensity(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Probability that a letter gets substituted: 0.2 at level 1, 1.0 at level 5.
    pub fn replacement_chance(self) -> f64 {
        0.2 * self.0 as f64
    }

    /// How many leading variants of a row are eligible at this level.
    pub fn pool_size(self, variant_count: usize) -> usize {
        (self.0 as usize * variant_count / 5 + 1).min(variant_count)
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity(3)
    }
}

impl From<i64> for Intensity {
    fn from(level: i64) -> Self {
        Intensity::new(level)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Random source for the encoder.
pub trait Dice {
    /// A uniform sample in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// A uniform index below `len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        ((self.roll() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl<R: RngCore> Dice for R {
    fn roll(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Encodes `text` against `table`.
pub fn encode<D: Dice + ?Sized>(
    table: &VariantTable,
    text: &str,
    intensity: Intensity,
    dice: &mut D,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let chance = intensity.replacement_chance();
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut replaced = 0usize;

    for c in text.chars() {
        let letter = match Letter::from_char(c) {
            Some(letter) => letter,
            None => {
                out.push(c);
                continue;
            }
        };

        if dice.roll() >= chance {
            out.push(c);
            continue;
        }

        let variants = table.variants(letter);
        let pool = &variants[..intensity.pool_size(variants.len())];
        if pool.is_empty() {
            out.push(c);
            continue;
        }
        out.push_str(pool[dice.pick(pool.len())]);
        replaced += 1;
    }

    trace!(%intensity, replaced, input_len = text.len(), "encoded text");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leet::testing::ScriptedDice;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table() -> &'static VariantTable {
        VariantTable::standard()
    }

    #[test]
    fn intensity_is_clamped() {
        assert_eq!(Intensity::new(0).level(), 1);
        assert_eq!(Intensity::new(-3).level(), 1);
        assert_eq!(Intensity::new(9).level(), 5);
        assert_eq!(Intensity::new(4).level(), 4);
        assert_eq!(Intensity::default().level(), 3);
    }

    #[test]
    fn replacement_chance_scales_with_level() {
        assert!((Intensity::new(1).replacement_chance() - 0.2).abs() < 1e-9);
        assert!((Intensity::new(5).replacement_chance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pool_grows_with_intensity() {
        assert_eq!(Intensity::new(1).pool_size(6), 2);
        assert_eq!(Intensity::new(3).pool_size(4), 3);
        assert_eq!(Intensity::new(5).pool_size(5), 5);
        assert_eq!(Intensity::new(1).pool_size(4), 1);
    }

    #[test]
    fn intensity_deserializes_with_clamping() {
        let parsed: Intensity = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, Intensity::new(5));
        assert_eq!(serde_json::to_string(&Intensity::new(2)).unwrap(), "2");
    }

    #[test]
    fn empty_text_stays_empty() {
        let mut dice = ScriptedDice::always(0.0);
        for level in 1..=5 {
            assert_eq!(encode(table(), "", Intensity::new(level), &mut dice), "");
        }
    }

    #[test]
    fn scripted_rolls_pick_exact_variants() {
        // 'a' replaced with pool[0] of ["4", "@"], 'B' kept, '?' never rolls
        let mut dice = ScriptedDice::new(vec![0.0, 0.0, 0.9]);
        assert_eq!(encode(table(), "aB?", Intensity::new(1), &mut dice), "4B?");
    }

    #[test]
    fn full_intensity_reaches_exotic_variants() {
        let mut dice = ScriptedDice::new(vec![0.0, 0.5]);
        assert_eq!(encode(table(), "m", Intensity::new(5), &mut dice), "/\\/\\");
    }

    #[test]
    fn unreplaced_letters_keep_their_case() {
        let mut dice = ScriptedDice::always(0.99);
        assert_eq!(
            encode(table(), "Hello, World!", Intensity::new(1), &mut dice),
            "Hello, World!"
        );
    }

    #[test]
    fn non_letters_pass_through() {
        let mut dice = ScriptedDice::always(0.0);
        let out = encode(table(), "123 !? \t\n", Intensity::new(5), &mut dice);
        assert_eq!(out, "123 !? \t\n");
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let text = "the quick brown fox jumps over the lazy dog";
        let a = encode(table(), text, Intensity::new(4), &mut StdRng::seed_from_u64(42));
        let b = encode(table(), text, Intensity::new(4), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
