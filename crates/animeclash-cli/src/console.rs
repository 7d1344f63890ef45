//! Console transcript of a battle.

use animeclash_core::arena::AttackRecord;
use animeclash_core::observer::BattleObserver;

/// Observer that turns battle notifications into transcript lines.
///
/// Lines are buffered so the caller decides where they go and can
/// propagate write errors.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    lines: Vec<String>,
}

impl ConsoleLogger {
    /// Creates a logger with no buffered lines.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the buffered lines.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl BattleObserver for ConsoleLogger {
    fn on_battle_start(&mut self, a: &str, b: &str) {
        self.lines.push(String::new());
        self.lines.push(format!("Battle started: {a} vs {b}"));
    }

    fn on_attack(&mut self, record: &AttackRecord) {
        self.lines.push(format!(
            "Round {}: {} attacks for {}",
            record.round, record.attacker_name, record.attack
        ));
        if record.damage.absorbed > 0 {
            self.lines.push(format!(
                "🛡 Shield absorbed {}. Shield now: {}",
                record.damage.absorbed, record.damage.shield_after
            ));
        }
        self.lines.push(format!(
            "Took {} damage. HP now: {}",
            record.damage.dealt, record.damage.health_after
        ));
    }

    fn on_battle_end(&mut self, winner: &str) {
        self.lines.push(format!("Winner: {winner}"));
    }
}
