//! Deterministic randomness for encoder tests.
//!
//! ```rust,ignore
//! use leet_codec::leet::testing::ScriptedDice;
//!
//! // Replace every letter, always with the first eligible variant
//! let mut dice = ScriptedDice::always(0.0);
//! ```

use crate::leet::encoding::Dice;

/// A [`Dice`] that replays a fixed sequence of rolls, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<f64>,
    cursor: usize,
}

impl ScriptedDice {
    /// Rolls outside `[0, 1)` are clamped into it.
    pub fn new(rolls: Vec<f64>) -> Self {
        let rolls = rolls
            .into_iter()
            .map(|r| r.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { rolls, cursor: 0 }
    }

    pub fn always(roll: f64) -> Self {
        Self::new(vec![roll])
    }

    /// Number of rolls consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_and_cycles() {
        let mut dice = ScriptedDice::new(vec![0.1, 0.7]);
        assert_eq!(dice.roll(), 0.1);
        assert_eq!(dice.roll(), 0.7);
        assert_eq!(dice.roll(), 0.1);
        assert_eq!(dice.consumed(), 3);
    }

    #[test]
    fn picks_floor_of_scaled_roll() {
        let mut dice = ScriptedDice::new(vec![0.5, 0.99]);
        assert_eq!(dice.pick(4), 2);
        assert_eq!(dice.pick(4), 3);
    }

    #[test]
    fn empty_script_rolls_zero() {
        let mut dice = ScriptedDice::new(Vec::new());
        assert_eq!(dice.roll(), 0.0);
    }
}
