//! Attack legality.
//!
//! Decides whether an attacker may attack a defender. Rules are checked in a
//! fixed order and the first failing rule is reported.

use crate::board::Territory;

/// Minimum troops an attacker must hold to launch an attack. One troop
/// always stays behind to hold the territory.
pub const MIN_ATTACKING_TROOPS: u32 = 2;

/// Reasons an attack attempt is rejected.
///
/// `InsufficientTroops` carries the attacker's troop count and
/// `UnknownTerritory` the offending roster index.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AttackError {
    #[error("same territory")]
    SameTerritory,

    #[error("same faction")]
    SameFaction,

    #[error("insufficient troops")]
    InsufficientTroops(u32),

    #[error("unknown territory index {0}")]
    UnknownTerritory(usize),
}

impl AttackError {
    /// Short rejection reason, independent of any carried detail.
    pub const fn reason(&self) -> &'static str {
        match self {
            AttackError::SameTerritory => "same territory",
            AttackError::SameFaction => "same faction",
            AttackError::InsufficientTroops(_) => "insufficient troops",
            AttackError::UnknownTerritory(_) => "unknown territory",
        }
    }
}

/// Checks whether `attacker` may attack `defender`.
///
/// Territories are compared by identity: two distinct records that happen to
/// share a name are not the same territory.
pub fn validate_attack(attacker: &Territory, defender: &Territory) -> Result<(), AttackError> {
    if std::ptr::eq(attacker, defender) {
        return Err(AttackError::SameTerritory);
    }
    if attacker.is_allied_with(defender) {
        return Err(AttackError::SameFaction);
    }
    if attacker.troops < MIN_ATTACKING_TROOPS {
        return Err(AttackError::InsufficientTroops(attacker.troops));
    }
    Ok(())
}
