//! Fighter factories for tests.

use crate::fighter::{Character, CharacterKind, FighterId, Universe};

/// Shifter with 120 health, power 30 (attack 50) and no shield.
pub fn shifter_a() -> Character {
    Character::with_id(
        FighterId::new(100),
        "Eren",
        120,
        30,
        Universe::AttackOnTitan,
        0,
        CharacterKind::shifter("Attack Titan"),
    )
}

/// Energy user with 110 health, power 28, cursed energy 250 (attack 53) and shield 10.
pub fn energy_user_b() -> Character {
    Character::with_id(
        FighterId::new(101),
        "Gojo",
        110,
        28,
        Universe::JujutsuKaisen,
        10,
        CharacterKind::energy_user(250),
    )
}

/// Base character with the given stats and no shield.
pub fn spawn_base(id: u64, health: u32, power: i32) -> Character {
    spawn_with_shield(id, health, power, 0)
}

/// Base character with the given stats and shield.
pub fn spawn_with_shield(id: u64, health: u32, power: i32, shield: i32) -> Character {
    Character::with_id(
        FighterId::new(id),
        format!("Fighter {id}"),
        health,
        power,
        Universe::DemonSlayer,
        shield,
        CharacterKind::Base,
    )
}
