//! Board representation.
//!
//! Contains the territory and faction types, the roster that owns every
//! territory, and the static mission list.

pub mod mission;
pub mod roster;
pub mod territory;

pub use mission::{Mission, MISSIONS};
pub use roster::{Roster, RosterError};
pub use territory::{Faction, Territory, ALL_FACTIONS};
