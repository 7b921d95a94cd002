//! The territory value type.
//!
//! A territory is a named holding with an owning army color and a troop
//! count. Name and color lengths are bounded; the constructor clamps
//! oversized input rather than rejecting it.

/// Maximum number of characters in a territory name.
pub const MAX_NAME_LEN: usize = 49;

/// Maximum number of characters in an army color label.
pub const MAX_COLOR_LEN: usize = 29;

/// A named holding with an owning army color and a troop count.
///
/// Identity is positional: a territory is addressed by its index in the
/// [`TerritoryMap`](super::TerritoryMap), and carries no id of its own.
/// The troop count is signed at this boundary because setup input accepts
/// any integer; the combat engine never drives it below zero itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub name: String,
    pub color: String,
    pub troops: i32,
}

impl Territory {
    /// Creates a territory, clamping `name` and `color` to their maximum
    /// lengths (counted in characters, so multi-byte input stays valid).
    pub fn new(name: &str, color: &str, troops: i32) -> Self {
        Territory {
            name: clamp_chars(name, MAX_NAME_LEN),
            color: clamp_chars(color, MAX_COLOR_LEN),
            troops,
        }
    }
}

/// Returns `s` truncated to at most `max` characters.
fn clamp_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
