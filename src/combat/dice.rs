//! Dice sources for combat resolution.
//!
//! Randomness enters the game in exactly one place: the two dice drawn
//! per attack. The engine takes the source as a parameter, so production
//! play uses an entropy-seeded generator while tests substitute a
//! scripted sequence and stay fully deterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed die faces in `1..=6`.
pub trait DiceRoller {
    /// Draws the next die face.
    fn roll(&mut self) -> u8;
}

/// Production dice backed by a `SmallRng`.
#[derive(Debug)]
pub struct EntropyDice {
    rng: SmallRng,
}

impl EntropyDice {
    /// Creates dice seeded from OS entropy; rolls differ across runs.
    pub fn new() -> Self {
        EntropyDice {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates dice from a fixed seed; the same seed replays the same
    /// sequence of rolls.
    pub fn seeded(seed: u64) -> Self {
        EntropyDice {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyDice {
    fn default() -> Self {
        EntropyDice::new()
    }
}

impl DiceRoller for EntropyDice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

/// Dice that replay a fixed sequence of faces, for deterministic tests.
///
/// Panics if rolled past the end of the script; a test that runs out of
/// faces is a test with a wrong scenario.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Creates a scripted source that yields `faces` in order.
    pub fn new(faces: &[u8]) -> Self {
        ScriptedDice {
            faces: faces.to_vec(),
            next: 0,
        }
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.next];
        self.next += 1;
        face
    }
}
