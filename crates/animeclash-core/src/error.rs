//! Error types for battle validation and damage application.

use thiserror::Error;

use crate::fighter::FighterId;

/// Errors raised before or outside of a battle.
///
/// The validation kinds (`SameFighter`, `EmptyName`, `DeadFighter`,
/// `InvalidPower`) are
/// permanent for a given pair of fighters: the caller has to change the
/// inputs and validate again. There is no retry path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// Both sides of the battle are the same fighter.
    #[error("{name} cannot fight themselves")]
    SameFighter {
        /// Name of the fighter that appeared twice
        name: String,
    },
    /// One of the fighters has an empty name.
    #[error("fighter {id} has an empty name")]
    EmptyName {
        /// Identity of the unnamed fighter
        id: FighterId,
    },
    /// One of the fighters has no health left.
    #[error("{name} is dead and cannot battle")]
    DeadFighter {
        /// Name of the defeated fighter
        name: String,
    },
    /// One of the fighters has a non-positive base power.
    #[error("{name} has invalid power {power}")]
    InvalidPower {
        /// Name of the offending fighter
        name: String,
        /// The rejected power value
        power: i32,
    },
    /// A negative damage amount was applied to a fighter.
    #[error("invalid damage amount: {0}")]
    InvalidAmount(i32),
}

impl BattleError {
    /// Returns true for the kinds produced by pre-battle validation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::InvalidAmount(_))
    }
}
