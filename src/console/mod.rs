//! Console interaction layer.
//!
//! Owns everything between the player's keyboard and the combat engine:
//! selection parsing, table and narration rendering, and the session
//! loop that ties them together.

pub mod parser;
pub mod session;
pub mod table;

pub use parser::{parse_selection, validate_pair, wants_another, SelectionError};
pub use session::{read_territories, Session};
pub use table::{write_battle, write_map, Matchup};
