//! Combat engine: dice sources and single-attack resolution.
//!
//! This is where all of the game's branching logic lives. The resolver
//! is pure apart from the two dice draws and the in-place troop and
//! ownership updates it reports.

pub mod dice;
pub mod resolve;

pub use dice::{DiceRoller, EntropyDice, ScriptedDice};
pub use resolve::{resolve_attack, AttackOutcome, BattleReport, BattleWinner};
