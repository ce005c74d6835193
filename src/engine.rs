//! Simulation state management.
//!
//! Holds the roster and the dice, and runs attack attempts against them:
//! validate first, then resolve. Rejected attempts leave the roster
//! untouched and never stop a run.

use serde::Serialize;
use tracing::debug;

use crate::board::Roster;
use crate::resolve::{resolve_attack, validate_attack, AttackError, Battle, DiceSource};

/// A proposed attack, addressed by roster position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AttackAttempt {
    pub attacker: usize,
    pub defender: usize,
}

impl AttackAttempt {
    pub const fn new(attacker: usize, defender: usize) -> Self {
        AttackAttempt { attacker, defender }
    }
}

/// The demonstration run: one legal attack, a self-attack, an attack on an
/// ally, then a counter-attack from the Blue side.
pub const SCRIPTED_ATTACKS: [AttackAttempt; 4] = [
    AttackAttempt::new(0, 3),
    AttackAttempt::new(1, 1),
    AttackAttempt::new(0, 1),
    AttackAttempt::new(4, 2),
];

/// Result of a single attempt within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptReport {
    pub attempt: AttackAttempt,
    pub result: Result<Battle, AttackError>,
}

impl Serialize for AttemptReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("attempt", &self.attempt)?;
        match &self.result {
            Ok(battle) => map.serialize_entry("battle", battle)?,
            Err(e) => map.serialize_entry("rejected", e.reason())?,
        }
        map.end()
    }
}

/// Owns the roster and the dice for one simulation.
pub struct Simulator<D> {
    roster: Roster,
    dice: D,
}

impl<D: DiceSource> Simulator<D> {
    pub fn new(roster: Roster, dice: D) -> Self {
        Simulator { roster, dice }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Validates and, if legal, resolves one attack.
    pub fn attack(&mut self, attacker: usize, defender: usize) -> Result<Battle, AttackError> {
        let a = self
            .roster
            .get(attacker)
            .ok_or(AttackError::UnknownTerritory(attacker))?;
        let d = self
            .roster
            .get(defender)
            .ok_or(AttackError::UnknownTerritory(defender))?;

        if let Err(e) = validate_attack(a, d) {
            debug!(attacker = %a.name, defender = %d.name, reason = e.reason(), "attack rejected");
            return Err(e);
        }

        // Validation guarantees two distinct, in-range positions.
        let (a, d) = self
            .roster
            .pair_mut(attacker, defender)
            .ok_or(AttackError::SameTerritory)?;
        Ok(resolve_attack(a, d, &mut self.dice))
    }

    /// Runs attempts in order, recording each result.
    pub fn run(&mut self, attempts: &[AttackAttempt]) -> Vec<AttemptReport> {
        attempts
            .iter()
            .map(|&attempt| AttemptReport {
                attempt,
                result: self.attack(attempt.attacker, attempt.defender),
            })
            .collect()
    }
}
