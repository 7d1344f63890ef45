//! Health and shield bookkeeping.
//!
//! Incoming damage is consumed by the shield first; whatever the shield does
//! not absorb is subtracted from health, which saturates at 0.

use serde::{Deserialize, Serialize};

/// Upper bound of a fighter's shield.
pub const MAX_SHIELD: u32 = 100;

/// Mutable combat state of a fighter.
///
/// # Invariants
///
/// - `shield` is always within `0..=MAX_SHIELD`
/// - `health` is unsigned, so it can never drop below 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    health: u32,
    shield: u32,
}

impl Vitals {
    /// Creates vitals, clamping `shield` into `0..=MAX_SHIELD`.
    #[must_use]
    pub fn new(health: u32, shield: i32) -> Self {
        Self {
            health,
            shield: clamp_shield(shield),
        }
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> u32 {
        self.health
    }

    /// Current shield.
    #[must_use]
    pub const fn shield(&self) -> u32 {
        self.shield
    }

    /// Assigns the shield, clamping out-of-range values instead of rejecting them.
    pub fn set_shield(&mut self, value: i32) {
        self.shield = clamp_shield(value);
    }

    /// Applies `amount` of raw damage and reports how it was split.
    pub fn absorb(&mut self, amount: u32) -> DamageReport {
        let absorbed = self.shield.min(amount);
        self.shield -= absorbed;
        let dealt = amount - absorbed;
        self.health = self.health.saturating_sub(dealt);

        DamageReport {
            incoming: amount,
            absorbed,
            dealt,
            shield_after: self.shield,
            health_after: self.health,
        }
    }
}

fn clamp_shield(value: i32) -> u32 {
    // Non-negative after the clamp, so unsigned_abs is the identity.
    value.clamp(0, 100).unsigned_abs()
}

/// Outcome of a single damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Raw damage before the shield
    pub incoming: u32,
    /// Portion soaked up by the shield
    pub absorbed: u32,
    /// Portion passed on to health
    pub dealt: u32,
    /// Shield remaining afterwards
    pub shield_after: u32,
    /// Health remaining afterwards
    pub health_after: u32,
}
