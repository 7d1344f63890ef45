//! The scripted demonstration.

use std::io::Write;

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use animeclash_core::arena::BattleArena;
use animeclash_core::error::BattleError;
use animeclash_core::fighter::{Character, CharacterKind, Fighter, Universe};
use animeclash_core::roster::{by_power_desc, names_with_health_above, pick_random, status_lines};
use animeclash_core::validator::validate_for_battle;

use crate::config::DemoConfig;
use crate::console::ConsoleLogger;

/// Mikasa, Eren and Gojo with their demo stats.
pub fn cast() -> Vec<Character> {
    vec![
        Character::new(
            "Mikasa",
            90,
            25,
            Universe::AttackOnTitan,
            15,
            CharacterKind::Base,
        ),
        Character::new(
            "Eren",
            120,
            30,
            Universe::AttackOnTitan,
            30,
            CharacterKind::shifter("Attack Titan"),
        ),
        Character::new(
            "Gojo",
            110,
            28,
            Universe::JujutsuKaisen,
            10,
            CharacterKind::energy_user(250),
        ),
    ]
}

/// Runs the whole script, writing the transcript to `out`.
///
/// Validation failures are reported in the transcript. Anything else,
/// including write errors, is returned.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let mut fighters = cast();
    info!(seed = config.seed, fighters = fighters.len(), "demo started");

    writeln!(out, "Universe ready: {}", Universe::JujutsuKaisen)?;

    writeln!(out)?;
    writeln!(out, "Polymorphism demo:")?;
    for fighter in &fighters {
        writeln!(out, "{fighter}")?;
        writeln!(
            out,
            "{} ({}) attack damage: {}",
            fighter.name(),
            fighter.kind().label(),
            fighter.attack_value()
        )?;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    writeln!(out)?;
    if let Some(fighter) = pick_random(&fighters, &mut rng) {
        writeln!(out, "Random character: {}", fighter.name())?;
    }
    if let Some(universe) = pick_random(&Universe::ALL, &mut rng) {
        writeln!(out, "Random universe: {universe}")?;
    }

    if let [_, eren, gojo] = fighters.as_mut_slice() {
        battle(config, eren, gojo, out)?;
    }

    writeln!(out)?;
    writeln!(out, "Functional Programming results:")?;
    writeln!(out, "map -> {:?}", status_lines(&fighters))?;
    writeln!(
        out,
        "filter -> {:?}",
        names_with_health_above(&fighters, config.health_threshold)
    )?;
    writeln!(out, "sorted -> {:?}", by_power_desc(&fighters))?;

    Ok(())
}

fn battle<W: Write>(
    config: &DemoConfig,
    a: &mut Character,
    b: &mut Character,
    out: &mut W,
) -> Result<()> {
    match validate_for_battle(&*a, &*b) {
        Ok(()) => {
            let mut logger = ConsoleLogger::new();
            BattleArena::with_config(config.arena).fight(a, b, &mut logger);
            for line in logger.take_lines() {
                writeln!(out, "{line}")?;
            }
        }
        Err(BattleError::EmptyName { id }) => {
            writeln!(out, "Error: fighter #{id} needs a name before it can battle")?;
        }
        Err(BattleError::DeadFighter { name }) => {
            writeln!(out, "Error: dead fighter cannot battle ({name})")?;
        }
        Err(BattleError::SameFighter { name }) => {
            writeln!(out, "Error: {name} cannot fight themselves")?;
        }
        Err(BattleError::InvalidPower { name, power }) => {
            writeln!(out, "Error: {name} has no fighting power ({power})")?;
        }
        Err(err @ BattleError::InvalidAmount(_)) => return Err(err.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use animeclash_core::fighter::FighterId;

    fn transcript(config: &DemoConfig) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn battle_section_matches_expected_rounds() {
        let text = transcript(&DemoConfig::default());

        assert!(text.contains("Battle started: Eren vs Gojo"));
        assert!(text.contains("Round 1: Eren attacks for 50"));
        assert!(text.contains("🛡 Shield absorbed 10. Shield now: 0"));
        assert!(text.contains("Round 1: Gojo attacks for 53"));
        assert!(text.contains("🛡 Shield absorbed 30. Shield now: 0"));
        assert!(text.contains("Round 3: Eren attacks for 50"));
        assert!(!text.contains("Round 3: Gojo"));
        assert!(text.contains("Winner: Eren"));
    }

    #[test]
    fn functional_lines_reflect_post_battle_state() {
        let text = transcript(&DemoConfig::default());

        assert!(text.contains(r#"map -> ["Mikasa (HP: 90)", "Eren (HP: 44)", "Gojo (HP: 0)"]"#));
        assert!(text.contains(r#"filter -> ["Mikasa"]"#));
        assert!(text.contains(r#"sorted -> ["Eren:30", "Gojo:28", "Mikasa:25"]"#));
    }

    #[test]
    fn status_lines_printed_for_every_fighter() {
        let text = transcript(&DemoConfig::default());

        assert!(text.contains(
            "Name: Mikasa | HP: 90 | Power: 25 | Shield: 15 | Universe: Attack on Titan"
        ));
        assert!(text.contains("Gojo (Sorcerer) attack damage: 53"));
        assert!(text.contains("Eren (Titan Shifter) attack damage: 50"));
    }

    #[test]
    fn same_seed_same_transcript() {
        let config = DemoConfig {
            seed: 99,
            ..DemoConfig::default()
        };
        assert_eq!(transcript(&config), transcript(&config));
    }

    #[test]
    fn zero_rounds_announces_winner_without_attacks() {
        let config = DemoConfig::from_lookup(|key| {
            (key == "ANIMECLASH_ROUNDS").then(|| "0".to_string())
        });
        let text = transcript(&config);

        assert!(text.contains("Battle started: Eren vs Gojo"));
        assert!(!text.contains("attacks for"));
        assert!(text.contains("Winner: Eren"));
        assert!(text.contains(r#"map -> ["Mikasa (HP: 90)", "Eren (HP: 120)", "Gojo (HP: 110)"]"#));
    }

    #[test]
    fn dead_fighter_reported_without_failing() {
        let mut a = cast().remove(1);
        let mut b = Character::new(
            "Nanami",
            0,
            27,
            Universe::JujutsuKaisen,
            0,
            CharacterKind::Base,
        );
        let mut out = Vec::new();
        battle(&DemoConfig::default(), &mut a, &mut b, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Error: dead fighter cannot battle (Nanami)\n");
    }

    #[test]
    fn unnamed_fighter_reported_without_failing() {
        let mut a = cast().remove(1);
        let mut b = Character::with_id(
            FighterId::new(900),
            "",
            100,
            27,
            Universe::JujutsuKaisen,
            0,
            CharacterKind::Base,
        );
        let mut out = Vec::new();
        battle(&DemoConfig::default(), &mut a, &mut b, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Error: fighter #900 needs a name before it can battle\n");
        assert_eq!(a.health(), 120);
    }
}
