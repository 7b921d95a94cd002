//! The territory map: an ordered, fixed-count territory store.
//!
//! Territories are addressed by their 0-based index; the set never grows
//! or shrinks after creation. Creation is the only fallible operation —
//! everything else assumes the caller has already bounds-checked, which
//! the console layer does before invoking the combat engine.

use thiserror::Error;

use super::territory::Territory;

/// Errors that can occur when creating a territory map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to allocate storage for {0} territories")]
    Allocation(usize),
}

/// An ordered, index-addressed collection of territories.
///
/// The count is fixed at creation; attacks mutate troop counts and
/// ownership in place but never add or remove entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryMap {
    territories: Vec<Territory>,
}

impl TerritoryMap {
    /// Creates a map holding copies of the given territories.
    ///
    /// The backing storage is reserved up front; if the allocation fails
    /// this returns [`MapError::Allocation`], the one startup-fatal error
    /// in the whole program.
    pub fn create(initial: &[Territory]) -> Result<Self, MapError> {
        let mut territories = Vec::new();
        territories
            .try_reserve_exact(initial.len())
            .map_err(|_| MapError::Allocation(initial.len()))?;
        territories.extend_from_slice(initial);
        Ok(TerritoryMap { territories })
    }

    /// Returns the territory at `idx`.
    ///
    /// Panics on an out-of-range index; callers validate indices before
    /// reaching the store.
    pub fn get(&self, idx: usize) -> &Territory {
        &self.territories[idx]
    }

    /// Sets the troop count of the territory at `idx`.
    pub fn set_troops(&mut self, idx: usize, troops: i32) {
        self.territories[idx].troops = troops;
    }

    /// Sets the owning army color of the territory at `idx`.
    pub fn set_owner(&mut self, idx: usize, color: &str) {
        self.territories[idx].color = color.to_string();
    }

    /// Returns the number of territories.
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Returns true if the map holds no territories.
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Iterates over the territories in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.territories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TerritoryMap {
        TerritoryMap::create(&[
            Territory::new("Brasil", "Verde", 5),
            Territory::new("Argentina", "Azul", 3),
            Territory::new("Chile", "Vermelho", 2),
        ])
        .unwrap()
    }

    #[test]
    fn create_preserves_order_and_count() {
        let map = sample();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(0).name, "Brasil");
        assert_eq!(map.get(1).name, "Argentina");
        assert_eq!(map.get(2).name, "Chile");
    }

    #[test]
    fn create_empty_is_allowed() {
        let map = TerritoryMap::create(&[]).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn set_troops_touches_only_one_entry() {
        let mut map = sample();
        map.set_troops(1, 9);
        assert_eq!(map.get(0).troops, 5);
        assert_eq!(map.get(1).troops, 9);
        assert_eq!(map.get(2).troops, 2);
    }

    #[test]
    fn set_owner_replaces_color() {
        let mut map = sample();
        map.set_owner(2, "Verde");
        assert_eq!(map.get(2).color, "Verde");
        assert_eq!(map.get(2).name, "Chile");
        assert_eq!(map.get(2).troops, 2);
    }

    #[test]
    fn iter_walks_index_order() {
        let map = sample();
        let names: Vec<&str> = map.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Brasil", "Argentina", "Chile"]);
    }
}
