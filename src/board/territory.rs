//! Factions and territory records.
//!
//! A territory is a named region held by one faction with a non-negative
//! troop count. Factions are a closed set, so ownership changes are plain
//! copies of a `Faction` value.

use std::fmt;

use serde::Serialize;

/// One of the two sides contesting the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Red,
    Blue,
}

/// Both factions in display order.
pub const ALL_FACTIONS: [Faction; 2] = [Faction::Red, Faction::Blue];

impl Faction {
    /// Returns the capitalised display name.
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Red => "Red",
            Faction::Blue => "Blue",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A territory on the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Territory {
    pub name: String,
    pub faction: Faction,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<String>, faction: Faction, troops: u32) -> Self {
        Territory {
            name: name.into(),
            faction,
            troops,
        }
    }

    /// Returns true if `other` is held by the same faction.
    pub fn is_allied_with(&self, other: &Territory) -> bool {
        self.faction == other.faction
    }
}
