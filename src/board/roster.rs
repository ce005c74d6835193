//! The territory roster.
//!
//! An ordered, exclusively owned list of territories. Positions are stable
//! for the lifetime of a run, so attack attempts address territories by
//! index.

use std::collections::HashSet;
use std::ops::Index;

use serde::Serialize;

use super::territory::{Faction, Territory};

/// Errors that can occur while building a roster.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster has no territories")]
    Empty,

    #[error("duplicate territory '{0}'")]
    DuplicateTerritory(String),
}

/// Ordered collection of every territory in the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    territories: Vec<Territory>,
}

impl Roster {
    /// Builds a roster, rejecting empty lists and repeated names.
    pub fn new(territories: Vec<Territory>) -> Result<Self, RosterError> {
        if territories.is_empty() {
            return Err(RosterError::Empty);
        }
        let mut seen = HashSet::with_capacity(territories.len());
        for t in &territories {
            if !seen.insert(t.name.as_str()) {
                return Err(RosterError::DuplicateTerritory(t.name.clone()));
            }
        }
        Ok(Roster { territories })
    }

    /// The fixed starting map: three Red territories followed by three Blue.
    pub fn initial() -> Result<Self, RosterError> {
        Roster::new(vec![
            Territory::new("North America", Faction::Red, 5),
            Territory::new("South America", Faction::Red, 3),
            Territory::new("Africa", Faction::Red, 4),
            Territory::new("Europe", Faction::Blue, 6),
            Territory::new("Asia", Faction::Blue, 7),
            Territory::new("Oceania", Faction::Blue, 2),
        ])
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.territories.iter()
    }

    /// Borrows two distinct territories mutably at once.
    ///
    /// Returns `None` if either index is out of range or both are equal.
    pub fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Option<(&mut Territory, &mut Territory)> {
        let len = self.territories.len();
        if first == second || first >= len || second >= len {
            return None;
        }
        if first < second {
            let (head, tail) = self.territories.split_at_mut(second);
            Some((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(first);
            Some((&mut tail[0], &mut head[second]))
        }
    }

    /// Counts territories held by a faction.
    pub fn count_held_by(&self, faction: Faction) -> usize {
        self.territories.iter().filter(|t| t.faction == faction).count()
    }
}

impl Index<usize> for Roster {
    type Output = Territory;

    fn index(&self, index: usize) -> &Territory {
        &self.territories[index]
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Territory;
    type IntoIter = std::slice::Iter<'a, Territory>;

    fn into_iter(self) -> Self::IntoIter {
        self.territories.iter()
    }
}
