//! # Animeclash Core
//!
//! Battle resolution core for Animeclash.
//!
//! This crate provides the deterministic battle engine: fighters with a
//! shield-absorption damage model, pre-battle validation, and a fixed-round
//! arena that reports its progress to an observer.
//!
//! ## Architecture
//!
//! - **Fighters**: [`fighter::Character`] with a [`fighter::CharacterKind`] variant
//! - **Validation**: [`validator::validate_for_battle`]
//! - **Arena**: [`arena::BattleArena`] driving a [`arena::Bout`] state machine
//! - **Observers**: [`observer::BattleObserver`] notified of start, attacks and end
//!
//! ## Usage
//!
//! ```
//! use animeclash_core::arena::BattleArena;
//! use animeclash_core::fighter::{Character, CharacterKind, Universe};
//! use animeclash_core::observer::EventLog;
//! use animeclash_core::validator::validate_for_battle;
//!
//! let mut eren = Character::new(
//!     "Eren", 120, 30, Universe::AttackOnTitan, 0,
//!     CharacterKind::shifter("Attack Titan"),
//! );
//! let mut gojo = Character::new(
//!     "Gojo", 110, 28, Universe::JujutsuKaisen, 10,
//!     CharacterKind::energy_user(250),
//! );
//!
//! validate_for_battle(&eren, &gojo)?;
//!
//! let mut log = EventLog::new();
//! let report = BattleArena::new().fight(&mut eren, &mut gojo, &mut log);
//! assert_eq!(report.winner_name, "Eren");
//! # Ok::<(), animeclash_core::error::BattleError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod arena;
pub mod error;
pub mod fighter;
pub mod observer;
pub mod roster;
pub mod tournament;
pub mod validator;

// Re-exports for convenience
pub use arena::{ArenaConfig, BattleArena, BattlePhase, BattleReport, Bout};
pub use error::BattleError;
pub use fighter::{Character, CharacterKind, DamageReport, Fighter, FighterId, Universe};
pub use observer::{BattleEvent, BattleObserver, EventLog};
pub use validator::validate_for_battle;

#[cfg(test)]
mod tests;
