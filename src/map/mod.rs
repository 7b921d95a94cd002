//! Territory store: the map of named holdings the player fights over.
//!
//! Contains the territory value type and the ordered, fixed-count store
//! the combat engine mutates in place.

pub mod store;
pub mod territory;

pub use store::{MapError, TerritoryMap};
pub use territory::{Territory, MAX_COLOR_LEN, MAX_NAME_LEN};
