//! Map table and battle narration rendering.
//!
//! All game output goes through these writers so the session can run
//! against stdout in production and `Vec<u8>` sinks in tests. Messages
//! match the original console protocol, in Portuguese.

use std::io::{self, Write};

use crate::combat::{AttackOutcome, BattleWinner};
use crate::map::TerritoryMap;

const RULE: &str = "--------------------------------------";

/// Writes the current map as a table with 1-based ids.
pub fn write_map<W: Write>(out: &mut W, map: &TerritoryMap) -> io::Result<()> {
    writeln!(out, "\nEstado atual do mapa:")?;
    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "| {:<2} | {:<20} | {:<10} | {:<6} |",
        "ID", "Nome", "Cor", "Tropas"
    )?;
    writeln!(out, "{}", RULE)?;
    for (i, t) in map.iter().enumerate() {
        writeln!(
            out,
            "| {:<2} | {:<20} | {:<10} | {:<6} |",
            i + 1,
            t.name,
            t.color,
            t.troops
        )?;
    }
    writeln!(out, "{}", RULE)?;
    Ok(())
}

/// The names and colors of both sides, captured before the attack so the
/// narration shows the defender's pre-conquest color.
#[derive(Debug, Clone)]
pub struct Matchup {
    pub attacker_name: String,
    pub attacker_color: String,
    pub defender_name: String,
    pub defender_color: String,
}

impl Matchup {
    /// Captures both sides of an attack from the map.
    pub fn capture(map: &TerritoryMap, attacker: usize, defender: usize) -> Self {
        let atk = map.get(attacker);
        let def = map.get(defender);
        Matchup {
            attacker_name: atk.name.clone(),
            attacker_color: atk.color.clone(),
            defender_name: def.name.clone(),
            defender_color: def.color.clone(),
        }
    }
}

/// Writes the narration for one attack outcome.
pub fn write_battle<W: Write>(
    out: &mut W,
    matchup: &Matchup,
    outcome: &AttackOutcome,
) -> io::Result<()> {
    let report = match outcome {
        AttackOutcome::InsufficientAttackerTroops => {
            return writeln!(
                out,
                "O território atacante não possui tropas suficientes para atacar."
            );
        }
        AttackOutcome::DefenderAlreadyDepleted => {
            return writeln!(out, "O território defensor já não possui tropas!");
        }
        AttackOutcome::Resolved(report) => report,
    };

    writeln!(
        out,
        "\nAtaque: {} (Cor: {}) VS {} (Cor: {})",
        matchup.attacker_name, matchup.attacker_color, matchup.defender_name, matchup.defender_color
    )?;
    writeln!(out, "Dado atacante: {}", report.attacker_roll)?;
    writeln!(out, "Dado defensor: {}", report.defender_roll)?;

    match report.winner {
        BattleWinner::Attacker => {
            writeln!(out, "O atacante venceu!")?;
            if report.conquest {
                writeln!(
                    out,
                    "O território {} foi conquistado pelo exército {}!",
                    matchup.defender_name, matchup.attacker_color
                )?;
            }
        }
        BattleWinner::Defender => {
            writeln!(out, "O defensor resistiu ao ataque!")?;
        }
    }
    Ok(())
}
