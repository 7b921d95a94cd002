//! Guerra -- a territory-conquest dice battle simulator.
//!
//! This binary reads the territory cadastro and attack selections from
//! stdin and writes the map table and battle narration to stdout.
//! Exits 0 on normal completion, 1 if the map cannot be allocated.

use std::io::{self, Write};
use std::process::ExitCode;

use guerra::combat::EntropyDice;
use guerra::console::{read_territories, Session};
use guerra::map::TerritoryMap;

/// Number of territories in the shipped game.
const TERRITORY_COUNT: usize = 5;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match run(&mut input, &mut out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("erro de E/S: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the cadastro and the attack loop over the given streams.
fn run<R: io::BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<ExitCode> {
    writeln!(out, "Cadastro dos territórios:")?;
    let initial = match read_territories(input, out, TERRITORY_COUNT)? {
        Some(territories) => territories,
        None => {
            // Input ended before the cadastro finished; nothing to play.
            out.flush()?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let map = match TerritoryMap::create(&initial) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Erro ao alocar memória! ({})", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut session = Session::new(map, EntropyDice::new());
    session.run(input, out)?;
    Ok(ExitCode::SUCCESS)
}
