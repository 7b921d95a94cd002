//! The interactive game session.
//!
//! Holds the territory map and dice between attacks and runs the console
//! protocol: territory setup (cadastro), then the attack loop. Input and
//! output are generic so tests can script a whole session against
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::combat::{resolve_attack, DiceRoller};
use crate::console::parser::{parse_selection, validate_pair, wants_another};
use crate::console::table::{write_battle, write_map, Matchup};
use crate::map::{Territory, TerritoryMap};

/// The rejection message for any invalid selection.
const INVALID_SELECTION: &str = "Escolha inválida. Tente novamente.";

/// Reads one line, with the trailing newline stripped.
///
/// Returns `None` when the input is exhausted; every prompt treats that
/// as the player walking away.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
}

/// Prompts for and reads the initial data of `count` territories.
///
/// Non-numeric troop input is rejected and re-prompted. Returns `None`
/// if the input ends before the cadastro is complete.
pub fn read_territories<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    count: usize,
) -> io::Result<Option<Vec<Territory>>> {
    let mut territories = Vec::with_capacity(count);
    for i in 0..count {
        writeln!(out, "\nTerritório {}", i + 1)?;

        write!(out, "Nome: ")?;
        out.flush()?;
        let Some(name) = read_line(input)? else {
            return Ok(None);
        };

        write!(out, "Cor do Exército: ")?;
        out.flush()?;
        let Some(color) = read_line(input)? else {
            return Ok(None);
        };

        let troops = loop {
            write!(out, "Número de Tropas: ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(None);
            };
            match line.trim().parse::<i32>() {
                Ok(v) => break v,
                Err(_) => writeln!(out, "{}", INVALID_SELECTION)?,
            }
        };

        territories.push(Territory::new(&name, &color, troops));
    }
    Ok(Some(territories))
}

/// A running game: the territory map plus the dice it rolls with.
#[derive(Debug)]
pub struct Session<D: DiceRoller> {
    map: TerritoryMap,
    dice: D,
}

impl<D: DiceRoller> Session<D> {
    /// Creates a session over an already-populated map.
    pub fn new(map: TerritoryMap, dice: D) -> Self {
        Session { map, dice }
    }

    /// Returns the current map state.
    pub fn map(&self) -> &TerritoryMap {
        &self.map
    }

    /// Runs the attack loop until the player declines another attack or
    /// the input ends.
    ///
    /// Displays the map, then repeatedly: prompts for attacker and
    /// defender ids (1-based), rejects invalid pairs, resolves the
    /// attack, narrates it, re-displays the map, and asks whether to
    /// continue.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        write_map(out, &self.map)?;

        loop {
            let count = self.map.len();

            write!(out, "\nEscolha o território atacante (1 a {}): ", count)?;
            out.flush()?;
            let Some(attacker_line) = read_line(input)? else {
                break;
            };

            write!(out, "Escolha o território defensor (1 a {}): ", count)?;
            out.flush()?;
            let Some(defender_line) = read_line(input)? else {
                break;
            };

            let pair = parse_selection(&attacker_line, count).and_then(|attacker| {
                parse_selection(&defender_line, count)
                    .and_then(|defender| validate_pair(attacker, defender).map(|()| (attacker, defender)))
            });
            let (attacker, defender) = match pair {
                Ok(pair) => pair,
                Err(_) => {
                    writeln!(out, "{}", INVALID_SELECTION)?;
                    continue;
                }
            };

            let matchup = Matchup::capture(&self.map, attacker, defender);
            let outcome = resolve_attack(&mut self.map, attacker, defender, &mut self.dice);
            write_battle(out, &matchup, &outcome)?;
            write_map(out, &self.map)?;

            write!(out, "\nDeseja realizar outro ataque? (s/n): ")?;
            out.flush()?;
            let Some(answer) = read_line(input)? else {
                break;
            };
            if !wants_another(&answer) {
                break;
            }
        }

        writeln!(out, "Fim da simulação!")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ScriptedDice;
    use std::io::Cursor;

    fn sample_map() -> TerritoryMap {
        TerritoryMap::create(&[
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Argentina", "Azul", 1),
            Territory::new("Chile", "Vermelho", 3),
        ])
        .unwrap()
    }

    fn run_session(map: TerritoryMap, faces: &[u8], script: &str) -> (Session<ScriptedDice>, String) {
        let mut session = Session::new(map, ScriptedDice::new(faces));
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        session.run(&mut input, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn single_conquest_then_quit() {
        let (session, output) = run_session(sample_map(), &[6, 1], "1\n2\nn\n");

        assert!(output.contains("O atacante venceu!"));
        assert!(output.contains("O território Argentina foi conquistado pelo exército Verde!"));
        assert!(output.contains("Fim da simulação!"));
        assert_eq!(session.map().get(1).color, "Verde");
        assert_eq!(session.map().get(1).troops, 1);
    }

    #[test]
    fn invalid_pair_is_rejected_and_reprompted() {
        let (session, output) = run_session(sample_map(), &[3, 4], "2\n2\n1\n3\nn\n");

        assert!(output.contains("Escolha inválida. Tente novamente."));
        // The rejected pair never reached the engine; the scripted attack did.
        assert!(output.contains("Dado atacante: 3"));
        assert_eq!(session.map().get(0).troops, 4);
        assert_eq!(session.map().get(2).troops, 3);
    }

    #[test]
    fn out_of_range_and_non_numeric_are_rejected() {
        let (_, output) = run_session(sample_map(), &[], "9\n1\nbrasil\n2\n");

        let rejections = output.matches("Escolha inválida. Tente novamente.").count();
        assert_eq!(rejections, 2);
        assert!(!output.contains("Dado atacante"));
    }

    #[test]
    fn map_is_redisplayed_after_each_resolved_attack() {
        let (_, output) = run_session(sample_map(), &[2, 5], "1\n3\nn\n");

        // Once up front, once after the attack.
        assert_eq!(output.matches("Estado atual do mapa:").count(), 2);
    }

    #[test]
    fn end_of_input_ends_the_session_cleanly() {
        let (session, output) = run_session(sample_map(), &[], "1\n");

        assert!(output.contains("Fim da simulação!"));
        assert_eq!(session.map().get(0).troops, 5);
    }

    #[test]
    fn uppercase_s_continues_the_loop() {
        let (session, output) = run_session(sample_map(), &[5, 2, 2, 6], "1\n3\nS\n3\n1\nn\n");

        assert_eq!(output.matches("Dado atacante").count(), 2);
        assert_eq!(session.map().get(2).troops, 1); // lost one as defender, one as attacker
    }

    #[test]
    fn setup_reads_count_territories() {
        let script = "Brasil\nVerde\n5\nArgentina\nAzul\n3\n";
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();

        let territories = read_territories(&mut input, &mut out, 2).unwrap().unwrap();

        assert_eq!(territories.len(), 2);
        assert_eq!(territories[0].name, "Brasil");
        assert_eq!(territories[1].color, "Azul");
        assert_eq!(territories[1].troops, 3);

        let prompts = String::from_utf8(out).unwrap();
        assert!(prompts.contains("Território 1"));
        assert!(prompts.contains("Território 2"));
        assert!(prompts.contains("Cor do Exército: "));
    }

    #[test]
    fn setup_reprompts_on_bad_troop_count() {
        let script = "Brasil\nVerde\nmuitas\n5\n";
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();

        let territories = read_territories(&mut input, &mut out, 1).unwrap().unwrap();

        assert_eq!(territories[0].troops, 5);
        let prompts = String::from_utf8(out).unwrap();
        assert_eq!(prompts.matches("Número de Tropas: ").count(), 2);
    }

    #[test]
    fn setup_returns_none_when_input_ends() {
        let mut input = Cursor::new("Brasil\n".to_string());
        let mut out = Vec::new();

        let result = read_territories(&mut input, &mut out, 2).unwrap();

        assert!(result.is_none());
    }
}
