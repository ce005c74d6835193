//! Attack resolution.
//!
//! Validates attack attempts and resolves legal ones with a dice roll.

pub mod combat;
pub mod validate;

pub use combat::{
    resolve_attack, Battle, BattleOutcome, Dice, DiceError, DiceSource, ScriptedDice, DIE_FACES,
};
pub use validate::{validate_attack, AttackError, MIN_ATTACKING_TROOPS};
