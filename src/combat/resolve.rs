//! Single-attack resolution.
//!
//! One attack pits an attacker territory against a defender territory:
//! each side draws one die, the higher face wins with ties going to the
//! attacker, and the loser gives up one troop. A defender driven to zero
//! is conquered — its troop count is reset to exactly 1 and its owner
//! becomes the attacker's color. A losing attacker simply decrements and
//! may sit at zero; that asymmetry is part of the game rules.

use super::dice::DiceRoller;
use crate::map::TerritoryMap;

/// The side that won a resolved battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleWinner {
    Attacker,
    Defender,
}

/// The details of one resolved battle, for narration by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    /// The attacker's die face.
    pub attacker_roll: u8,
    /// The defender's die face.
    pub defender_roll: u8,
    /// Which side won the roll comparison.
    pub winner: BattleWinner,
    /// True if the defender was conquered by this attack.
    pub conquest: bool,
    /// The attacker's troop count after the attack.
    pub attacker_troops: i32,
    /// The defender's troop count after the attack.
    pub defender_troops: i32,
}

/// The outcome of one attack request.
///
/// Troop shortages are ordinary game states, not errors; the caller
/// narrates them and the map is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The attacker has no troops to attack with; nothing changed.
    InsufficientAttackerTroops,
    /// The defender already has no troops; nothing changed.
    DefenderAlreadyDepleted,
    /// Dice were rolled and troop counts adjusted.
    Resolved(BattleReport),
}

/// Resolves one attack between two territories.
///
/// `attacker` and `defender` must be distinct in-range indices; the
/// console layer rejects anything else before calling. At most the two
/// named territories are mutated, and only as the report describes.
pub fn resolve_attack<D: DiceRoller>(
    map: &mut TerritoryMap,
    attacker: usize,
    defender: usize,
    dice: &mut D,
) -> AttackOutcome {
    if map.get(attacker).troops < 1 {
        return AttackOutcome::InsufficientAttackerTroops;
    }
    if map.get(defender).troops < 1 {
        return AttackOutcome::DefenderAlreadyDepleted;
    }

    let attacker_roll = dice.roll();
    let defender_roll = dice.roll();

    // Ties go to the attacker.
    if attacker_roll >= defender_roll {
        let remaining = map.get(defender).troops - 1;
        let conquest = remaining <= 0;
        if conquest {
            // A conquered territory keeps a single garrison troop.
            let color = map.get(attacker).color.clone();
            map.set_troops(defender, 1);
            map.set_owner(defender, &color);
        } else {
            map.set_troops(defender, remaining);
        }
        AttackOutcome::Resolved(BattleReport {
            attacker_roll,
            defender_roll,
            winner: BattleWinner::Attacker,
            conquest,
            attacker_troops: map.get(attacker).troops,
            defender_troops: map.get(defender).troops,
        })
    } else {
        map.set_troops(attacker, map.get(attacker).troops - 1);
        AttackOutcome::Resolved(BattleReport {
            attacker_roll,
            defender_roll,
            winner: BattleWinner::Defender,
            conquest: false,
            attacker_troops: map.get(attacker).troops,
            defender_troops: map.get(defender).troops,
        })
    }
}
