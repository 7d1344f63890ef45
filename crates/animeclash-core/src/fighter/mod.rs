//! Fighter module: the combatants of a battle.
//!
//! This module provides the fighter types for Animeclash:
//! - [`Fighter`]: The capability set the arena and validator work against
//! - [`FighterId`]: Unique identity of a fighter
//! - [`CharacterKind`]: Tagged variant deciding the attack formula
//! - [`Character`]: The concrete fighter
//!
//! # Attack Formulas
//!
//! | Variant      | Attack value                 |
//! |--------------|------------------------------|
//! | `Base`       | `power`                      |
//! | `Shifter`    | `power + 20`                 |
//! | `EnergyUser` | `power + cursed_energy / 10` |
//!
//! # Example
//!
//! ```
//! use animeclash_core::fighter::{Character, CharacterKind, Fighter, Universe};
//!
//! let gojo = Character::new(
//!     "Gojo", 110, 28, Universe::JujutsuKaisen, 10,
//!     CharacterKind::energy_user(250),
//! );
//!
//! assert_eq!(gojo.attack_value(), 53);
//! assert_eq!(gojo.shield(), 10);
//! ```

pub mod damage;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BattleError;

pub use damage::{DamageReport, Vitals, MAX_SHIELD};

/// Flat attack bonus of a [`CharacterKind::Shifter`].
pub const SHIFTER_BONUS: i32 = 20;

/// Divisor applied to cursed energy by a [`CharacterKind::EnergyUser`].
pub const CURSED_ENERGY_DIVISOR: i32 = 10;

static NEXT_FIGHTER_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a fighter.
///
/// Two characters that share a name are still different fighters; the
/// validator compares these ids, never names.
///
/// # Example
///
/// ```
/// use animeclash_core::fighter::FighterId;
///
/// let id = FighterId::new(7);
/// assert_eq!(id.as_u64(), 7);
/// assert!(FighterId::new(1) < id);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FighterId(u64);

impl FighterId {
    /// Creates a new `FighterId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocates the next process-wide unique id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_FIGHTER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FighterId({})", self.0)
    }
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FighterId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// The series a character comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Universe {
    /// Attack on Titan
    AttackOnTitan,
    /// Jujutsu Kaisen
    JujutsuKaisen,
    /// Demon Slayer
    DemonSlayer,
}

impl Universe {
    /// Every universe, in declaration order.
    pub const ALL: [Self; 3] = [Self::AttackOnTitan, Self::JujutsuKaisen, Self::DemonSlayer];

    /// Human-readable series title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AttackOnTitan => "Attack on Titan",
            Self::JujutsuKaisen => "Jujutsu Kaisen",
            Self::DemonSlayer => "Demon Slayer",
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Character variant, fixed at construction.
///
/// Each variant carries the parameters its attack formula needs, and
/// [`CharacterKind::attack_value`] is the single place the formulas live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterKind {
    /// Plain fighter, attacks with its base power.
    Base,
    /// Can take a titan form; attacks with a flat bonus.
    Shifter {
        /// Name of the titan form (flavor only)
        titan_form: String,
    },
    /// Draws on an auxiliary energy pool.
    EnergyUser {
        /// Auxiliary resource, a tenth of it is added to attacks
        cursed_energy: i32,
    },
}

impl CharacterKind {
    /// Shorthand for [`CharacterKind::Shifter`].
    #[must_use]
    pub fn shifter(titan_form: impl Into<String>) -> Self {
        Self::Shifter {
            titan_form: titan_form.into(),
        }
    }

    /// Shorthand for [`CharacterKind::EnergyUser`].
    #[must_use]
    pub const fn energy_user(cursed_energy: i32) -> Self {
        Self::EnergyUser { cursed_energy }
    }

    /// Attack value for a fighter of this kind with the given base power.
    #[must_use]
    pub const fn attack_value(&self, power: i32) -> i32 {
        match self {
            Self::Base => power,
            Self::Shifter { .. } => power.saturating_add(SHIFTER_BONUS),
            Self::EnergyUser { cursed_energy } => {
                power.saturating_add(*cursed_energy / CURSED_ENERGY_DIVISOR)
            }
        }
    }

    /// Short label of the variant.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Base => "Character",
            Self::Shifter { .. } => "Titan Shifter",
            Self::EnergyUser { .. } => "Sorcerer",
        }
    }
}

/// Capability set shared by everything that can enter the arena.
///
/// Implementors supply identity, stats, the attack formula and the
/// infallible [`Fighter::apply_damage`] primitive. [`Fighter::take_damage`]
/// is the checked entry point for signed amounts.
pub trait Fighter {
    /// Identity used for same-fighter detection.
    fn id(&self) -> FighterId;

    /// Display name.
    fn name(&self) -> &str;

    /// Current health, never negative.
    fn health(&self) -> u32;

    /// Base power.
    fn power(&self) -> i32;

    /// Damage this fighter deals per attack. Must be pure.
    fn attack_value(&self) -> i32;

    /// Applies raw damage, shield first.
    fn apply_damage(&mut self, amount: u32) -> DamageReport;

    /// Applies a signed damage amount.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::InvalidAmount`] for negative amounts; the
    /// fighter is left untouched.
    fn take_damage(&mut self, amount: i32) -> Result<DamageReport, BattleError> {
        let amount = u32::try_from(amount).map_err(|_| BattleError::InvalidAmount(amount))?;
        Ok(self.apply_damage(amount))
    }

    /// Returns true once health has reached 0.
    fn is_defeated(&self) -> bool {
        self.health() == 0
    }
}

/// A character of one of the supported variants.
///
/// `id`, `name`, `power`, `universe` and `kind` never change after
/// construction. Health and shield change only through damage and the
/// clamping [`Character::set_shield`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    id: FighterId,
    name: String,
    power: i32,
    universe: Universe,
    kind: CharacterKind,
    vitals: Vitals,
}

impl Character {
    /// Creates a character with a freshly allocated [`FighterId`].
    ///
    /// `shield` is clamped into `0..=MAX_SHIELD`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        health: u32,
        power: i32,
        universe: Universe,
        shield: i32,
        kind: CharacterKind,
    ) -> Self {
        Self::with_id(FighterId::next(), name, health, power, universe, shield, kind)
    }

    /// Creates a character with a caller-chosen id.
    #[must_use]
    pub fn with_id(
        id: FighterId,
        name: impl Into<String>,
        health: u32,
        power: i32,
        universe: Universe,
        shield: i32,
        kind: CharacterKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            power,
            universe,
            kind,
            vitals: Vitals::new(health, shield),
        }
    }

    /// Universe the character belongs to.
    #[must_use]
    pub const fn universe(&self) -> Universe {
        self.universe
    }

    /// Variant of the character.
    #[must_use]
    pub const fn kind(&self) -> &CharacterKind {
        &self.kind
    }

    /// Current shield.
    #[must_use]
    pub const fn shield(&self) -> u32 {
        self.vitals.shield()
    }

    /// Assigns the shield, clamped into `0..=MAX_SHIELD`.
    pub fn set_shield(&mut self, value: i32) {
        self.vitals.set_shield(value);
    }

    /// Current health and shield.
    #[must_use]
    pub const fn vitals(&self) -> Vitals {
        self.vitals
    }
}

impl Fighter for Character {
    fn id(&self) -> FighterId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> u32 {
        self.vitals.health()
    }

    fn power(&self) -> i32 {
        self.power
    }

    fn attack_value(&self) -> i32 {
        self.kind.attack_value(self.power)
    }

    fn apply_damage(&mut self, amount: u32) -> DamageReport {
        let report = self.vitals.absorb(amount);
        debug!(
            fighter = %self.name,
            incoming = report.incoming,
            absorbed = report.absorbed,
            dealt = report.dealt,
            shield = report.shield_after,
            health = report.health_after,
            "damage applied"
        );
        report
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | HP: {} | Power: {} | Shield: {} | Universe: {}",
            self.name,
            self.vitals.health(),
            self.power,
            self.vitals.shield(),
            self.universe
        )
    }
}
