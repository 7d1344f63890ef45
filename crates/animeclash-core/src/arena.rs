//! Arena module: the fixed-round battle loop.
//!
//! A battle moves through the [`BattlePhase`] states:
//!
//! ```text
//! NotStarted -> RoundInProgress(1) -> ... -> RoundInProgress(rounds) -> Concluded
//! ```
//!
//! Every round, `a` attacks first. If `b` drops to 0 health, the round ends
//! immediately and `b` never strikes back. A round is skipped entirely (and
//! the battle concludes) when either side is already at 0 health.
//!
//! # Winner
//!
//! `a` wins only with strictly more health than `b`. Ties, including a
//! double knockout, go to `b`.
//!
//! # Failure Semantics
//!
//! The arena never fails. Callers are expected to run
//! [`crate::validator::validate_for_battle`] first. A negative attack value
//! (only reachable when validation was skipped) hits for 0.
//!
//! # Example
//!
//! ```
//! use animeclash_core::arena::{BattleArena, BattlePhase, Bout};
//! use animeclash_core::fighter::{Character, CharacterKind, Fighter, Universe};
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
//! // Step through the battle one round at a time
//! let mut bout = Bout::new(&mut eren, &mut gojo, 3);
//! assert_eq!(bout.advance(&mut ()), BattlePhase::RoundInProgress(1));
//! assert_eq!(bout.advance(&mut ()), BattlePhase::RoundInProgress(2));
//! let report = bout.run(&mut ());
//!
//! assert_eq!(report.winner_name, "Eren");
//! assert_eq!(report.rounds_fought, 3);
//! assert_eq!(gojo.health(), 0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::fighter::{DamageReport, Fighter, FighterId};
use crate::observer::BattleObserver;

/// Number of rounds in a standard battle.
pub const DEFAULT_ROUNDS: u32 = 3;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a [`BattleArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Maximum number of rounds per battle
    pub rounds: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl ArenaConfig {
    /// Create a config with the given round limit.
    #[must_use]
    pub const fn with_rounds(rounds: u32) -> Self {
        Self { rounds }
    }
}

// =============================================================================
// Records
// =============================================================================

/// Where a battle currently stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Nobody has been notified yet.
    NotStarted,
    /// The given round (1-based) is next to be played.
    RoundInProgress(u32),
    /// A winner has been decided. Terminal.
    Concluded,
}

/// A single resolved attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRecord {
    /// Round the attack happened in (1-based)
    pub round: u32,
    /// Attacking fighter
    pub attacker: FighterId,
    /// Attacker's name
    pub attacker_name: String,
    /// Defending fighter
    pub defender: FighterId,
    /// Defender's name
    pub defender_name: String,
    /// Attack value announced by the attacker
    pub attack: i32,
    /// How the defender took it
    pub damage: DamageReport,
}

/// Result of a concluded battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    /// Winning fighter
    pub winner: FighterId,
    /// Winner's name
    pub winner_name: String,
    /// Rounds in which at least one attack landed
    pub rounds_fought: u32,
    /// Every attack, in order
    pub attacks: Vec<AttackRecord>,
    /// Final health of `a`
    pub a_health: u32,
    /// Final health of `b`
    pub b_health: u32,
}

// =============================================================================
// Bout
// =============================================================================

/// One battle between two borrowed fighters, advanced step by step.
///
/// The observer is passed to every call instead of being stored, so a
/// `Bout` never outlives or owns its listener.
#[derive(Debug)]
pub struct Bout<'a, A: ?Sized, B: ?Sized> {
    a: &'a mut A,
    b: &'a mut B,
    rounds: u32,
    phase: BattlePhase,
    rounds_fought: u32,
    attacks: Vec<AttackRecord>,
    report: Option<BattleReport>,
}

impl<'a, A, B> Bout<'a, A, B>
where
    A: Fighter + ?Sized,
    B: Fighter + ?Sized,
{
    /// Prepares a battle of at most `rounds` rounds.
    #[must_use]
    pub fn new(a: &'a mut A, b: &'a mut B, rounds: u32) -> Self {
        Self {
            a,
            b,
            rounds,
            phase: BattlePhase::NotStarted,
            rounds_fought: 0,
            attacks: Vec::new(),
            report: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Report of the battle, once concluded.
    #[must_use]
    pub const fn report(&self) -> Option<&BattleReport> {
        self.report.as_ref()
    }

    /// Performs the next transition and returns the new phase.
    ///
    /// - `NotStarted`: announces the battle
    /// - `RoundInProgress(n)`: plays round `n`
    /// - `Concluded`: does nothing
    pub fn advance(&mut self, observer: &mut dyn BattleObserver) -> BattlePhase {
        self.phase = match self.phase {
            BattlePhase::NotStarted => {
                info!(a = self.a.name(), b = self.b.name(), "battle started");
                observer.on_battle_start(self.a.name(), self.b.name());
                if self.rounds == 0 {
                    self.conclude(observer)
                } else {
                    BattlePhase::RoundInProgress(1)
                }
            }
            BattlePhase::RoundInProgress(round) => self.play_round(round, observer),
            BattlePhase::Concluded => BattlePhase::Concluded,
        };
        self.phase
    }

    /// Advances until the battle concludes and returns the report.
    pub fn run(mut self, observer: &mut dyn BattleObserver) -> BattleReport {
        loop {
            self.advance(observer);
            if let Some(report) = self.report.take() {
                return report;
            }
        }
    }

    fn play_round(&mut self, round: u32, observer: &mut dyn BattleObserver) -> BattlePhase {
        if self.a.is_defeated() || self.b.is_defeated() {
            return self.conclude(observer);
        }
        self.rounds_fought = round;

        let record = strike(round, &*self.a, &mut *self.b);
        observer.on_attack(&record);
        self.attacks.push(record);
        if self.b.is_defeated() {
            return self.conclude(observer);
        }

        let record = strike(round, &*self.b, &mut *self.a);
        observer.on_attack(&record);
        self.attacks.push(record);

        if round >= self.rounds {
            self.conclude(observer)
        } else {
            BattlePhase::RoundInProgress(round + 1)
        }
    }

    fn conclude(&mut self, observer: &mut dyn BattleObserver) -> BattlePhase {
        let (winner, winner_name) = if self.a.health() > self.b.health() {
            (self.a.id(), self.a.name().to_string())
        } else {
            (self.b.id(), self.b.name().to_string())
        };

        info!(
            winner = %winner_name,
            rounds = self.rounds_fought,
            a_health = self.a.health(),
            b_health = self.b.health(),
            "battle concluded"
        );
        observer.on_battle_end(&winner_name);

        self.report = Some(BattleReport {
            winner,
            winner_name,
            rounds_fought: self.rounds_fought,
            attacks: std::mem::take(&mut self.attacks),
            a_health: self.a.health(),
            b_health: self.b.health(),
        });
        BattlePhase::Concluded
    }
}

/// `attacker` hits `defender` with its current attack value.
fn strike<X, Y>(round: u32, attacker: &X, defender: &mut Y) -> AttackRecord
where
    X: Fighter + ?Sized,
    Y: Fighter + ?Sized,
{
    let attack = attacker.attack_value();
    let amount = u32::try_from(attack).unwrap_or_else(|_| {
        warn!(
            attacker = attacker.name(),
            attack, "negative attack value, hitting for 0"
        );
        0
    });

    debug!(round, attacker = attacker.name(), attack, "attack");
    let damage = defender.apply_damage(amount);

    AttackRecord {
        round,
        attacker: attacker.id(),
        attacker_name: attacker.name().to_string(),
        defender: defender.id(),
        defender_name: defender.name().to_string(),
        attack,
        damage,
    }
}

// =============================================================================
// Arena
// =============================================================================

/// Runs complete battles.
///
/// The arena holds only its configuration, so one instance can be shared
/// across threads and reused for any number of independent battles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleArena {
    config: ArenaConfig,
}

impl BattleArena {
    /// Creates an arena with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ArenaConfig) -> Self {
        Self { config }
    }

    /// The arena's configuration.
    #[must_use]
    pub const fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Runs one complete battle between `a` and `b`.
    ///
    /// The observer is notified of the start, every attack and the winner.
    /// Each call is a full run from `NotStarted` to `Concluded`.
    pub fn fight<A, B>(
        &self,
        a: &mut A,
        b: &mut B,
        observer: &mut dyn BattleObserver,
    ) -> BattleReport
    where
        A: Fighter + ?Sized,
        B: Fighter + ?Sized,
    {
        Bout::new(a, b, self.config.rounds).run(observer)
    }
}
