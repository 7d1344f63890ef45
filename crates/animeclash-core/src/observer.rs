//! Battle observers.
//!
//! An observer is told when a battle starts, about every attack, and who
//! won. The arena only borrows it for the duration of a single
//! [`crate::arena::BattleArena::fight`] call and never keeps it.
//!
//! # Available Observers
//!
//! - `()`: Ignores everything
//! - [`EventLog`]: Records [`BattleEvent`]s for later inspection

use serde::{Deserialize, Serialize};

use crate::arena::AttackRecord;

/// Listener for battle progress.
///
/// # Example
///
/// ```
/// use animeclash_core::observer::BattleObserver;
///
/// struct Announcer;
///
/// impl BattleObserver for Announcer {
///     fn on_battle_start(&mut self, a: &str, b: &str) {
///         println!("Battle started: {a} vs {b}");
///     }
///
///     fn on_battle_end(&mut self, winner: &str) {
///         println!("Winner: {winner}");
///     }
/// }
/// ```
pub trait BattleObserver {
    /// Called once before the first round.
    fn on_battle_start(&mut self, a: &str, b: &str);

    /// Called after every resolved attack.
    fn on_attack(&mut self, _record: &AttackRecord) {}

    /// Called once the winner is known.
    fn on_battle_end(&mut self, winner: &str);
}

impl BattleObserver for () {
    fn on_battle_start(&mut self, _a: &str, _b: &str) {}

    fn on_battle_end(&mut self, _winner: &str) {}
}

/// Something an observer was told about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// The battle began.
    Started {
        /// Name of the first fighter
        a: String,
        /// Name of the second fighter
        b: String,
    },
    /// One fighter hit the other.
    Attack(AttackRecord),
    /// The battle finished.
    Ended {
        /// Name of the winner
        winner: String,
    },
}

/// Observer that records every notification in order.
///
/// # Example
///
/// ```
/// use animeclash_core::observer::{BattleEvent, BattleObserver, EventLog};
///
/// let mut log = EventLog::new();
/// log.on_battle_start("Eren", "Gojo");
/// log.on_battle_end("Eren");
///
/// let events = log.take_events();
/// assert_eq!(events.len(), 2);
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<BattleEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Drains and returns all recorded events.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Only the attack records, oldest first.
    pub fn attacks(&self) -> impl Iterator<Item = &AttackRecord> + '_ {
        self.events.iter().filter_map(|event| match event {
            BattleEvent::Attack(record) => Some(record),
            _ => None,
        })
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl BattleObserver for EventLog {
    fn on_battle_start(&mut self, a: &str, b: &str) {
        self.events.push(BattleEvent::Started {
            a: a.to_string(),
            b: b.to_string(),
        });
    }

    fn on_attack(&mut self, record: &AttackRecord) {
        self.events.push(BattleEvent::Attack(record.clone()));
    }

    fn on_battle_end(&mut self, winner: &str) {
        self.events.push(BattleEvent::Ended {
            winner: winner.to_string(),
        });
    }
}
