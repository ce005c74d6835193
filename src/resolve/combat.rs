//! Dice-resolved combat between two territories.
//!
//! One round of combat: attacker and defender each roll a six-sided die.
//! The attacker must roll strictly higher to win; ties go to the defender.
//!
//! - Attacker wins: the defender switches to the attacker's faction and its
//!   troop count is halved (rounding down) from its pre-battle value. The
//!   attacker keeps all of its troops.
//! - Defender wins: the attacker loses exactly one troop. Ownership is
//!   unchanged.
//!
//! Randomness comes from a [`DiceSource`], so tests and replays can force
//! exact rolls.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::board::{Faction, Territory};

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// Errors that can occur while building a scripted dice sequence.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DiceError {
    #[error("dice script is empty")]
    Empty,

    #[error("die value {0} is outside 1..=6")]
    OutOfRange(u8),

    #[error("'{0}' is not a die value")]
    Invalid(String),
}

/// A source of six-sided die rolls.
pub trait DiceSource {
    /// Rolls one die, returning a value in `1..=6`.
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Uniform random dice backed by a small, fast PRNG.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: SmallRng,
}

impl Dice {
    /// Dice with a reproducible sequence for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Dice {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for Dice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Dice that replay a fixed script of values, starting over when the
/// script runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedDice {
    script: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Builds scripted dice, rejecting an empty script or impossible faces.
    pub fn new(script: Vec<u8>) -> Result<Self, DiceError> {
        if script.is_empty() {
            return Err(DiceError::Empty);
        }
        if let Some(&bad) = script.iter().find(|&&v| v == 0 || v > DIE_FACES) {
            return Err(DiceError::OutOfRange(bad));
        }
        Ok(ScriptedDice { script, next: 0 })
    }

    /// Parses a comma-separated list of die values such as `"6,1,2,5"`.
    pub fn parse(s: &str) -> Result<Self, DiceError> {
        let mut values = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let v = part
                .parse::<u8>()
                .map_err(|_| DiceError::Invalid(part.to_string()))?;
            values.push(v);
        }
        ScriptedDice::new(values)
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let v = self.script[self.next];
        self.next = (self.next + 1) % self.script.len();
        v
    }
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BattleOutcome {
    /// The defender was taken and now holds `troops`.
    Conquered { troops: u32 },
    /// The attack failed; the attacker is left with `attacker_troops`.
    Repelled { attacker_troops: u32 },
}

/// Record of one resolved battle, captured before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Battle {
    pub attacker: String,
    pub attacker_faction: Faction,
    pub defender: String,
    pub defender_faction: Faction,
    pub attack_roll: u8,
    pub defense_roll: u8,
    pub outcome: BattleOutcome,
}

impl Battle {
    pub fn attacker_won(&self) -> bool {
        matches!(self.outcome, BattleOutcome::Conquered { .. })
    }
}

/// Resolves one round of combat, mutating both territories.
///
/// The caller must have validated the pair with
/// [`validate_attack`](super::validate_attack); no checks are repeated here.
pub fn resolve_attack<D: DiceSource + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
) -> Battle {
    let attack_roll = dice.roll();
    let defense_roll = dice.roll();
    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attack_roll,
        defense_roll,
        "dice rolled"
    );

    let attacker_faction = attacker.faction;
    let defender_faction = defender.faction;

    let outcome = if attack_roll > defense_roll {
        defender.faction = attacker.faction;
        defender.troops /= 2;
        info!(
            territory = %defender.name,
            faction = %defender.faction,
            troops = defender.troops,
            "territory conquered"
        );
        BattleOutcome::Conquered {
            troops: defender.troops,
        }
    } else {
        attacker.troops = attacker.troops.saturating_sub(1);
        debug!(
            territory = %attacker.name,
            troops = attacker.troops,
            "attack repelled"
        );
        BattleOutcome::Repelled {
            attacker_troops: attacker.troops,
        }
    };

    Battle {
        attacker: attacker.name.clone(),
        attacker_faction,
        defender: defender.name.clone(),
        defender_faction,
        attack_roll,
        defense_roll,
        outcome,
    }
}
