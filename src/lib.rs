//! Guerra engine library.
//!
//! A single-player territory-conquest simulation: a fixed set of
//! territories, each owned by an army color and holding troops, attacked
//! pairwise with dice until the player stops. Exposes the territory
//! store, the combat engine, and the console session for use by
//! integration tests and the binary entry point.

pub mod combat;
pub mod console;
pub mod map;

pub use combat::{
    resolve_attack, AttackOutcome, BattleReport, BattleWinner, DiceRoller, EntropyDice,
    ScriptedDice,
};
pub use console::{SelectionError, Session};
pub use map::{MapError, Territory, TerritoryMap, MAX_COLOR_LEN, MAX_NAME_LEN};
