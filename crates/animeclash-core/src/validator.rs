//! Pre-battle checks.
//!
//! The arena itself never fails, so callers run [`validate_for_battle`]
//! first and only fight pairs that pass.

use crate::error::BattleError;
use crate::fighter::Fighter;

/// Checks that two fighters may engage.
///
/// Checks run in order and the first failure is returned:
/// 1. `SameFighter` when both sides share a [`crate::fighter::FighterId`]
/// 2. `EmptyName` when either side has an empty name (`a` reported first)
/// 3. `DeadFighter` when either side has 0 health (`a` reported first)
/// 4. `InvalidPower` when either side has power ≤ 0 (`a` reported first)
///
/// # Errors
///
/// Returns the [`BattleError`] of the first failed check.
///
/// # Example
///
/// ```
/// use animeclash_core::fighter::{Character, CharacterKind, Universe};
/// use animeclash_core::validator::validate_for_battle;
/// use animeclash_core::BattleError;
///
/// let tanjiro = Character::new("Tanjiro", 100, 24, Universe::DemonSlayer, 0, CharacterKind::Base);
/// let nezuko = Character::new("Nezuko", 0, 22, Universe::DemonSlayer, 0, CharacterKind::Base);
///
/// assert!(matches!(
///     validate_for_battle(&tanjiro, &nezuko),
///     Err(BattleError::DeadFighter { .. })
/// ));
/// ```
pub fn validate_for_battle<A, B>(a: &A, b: &B) -> Result<(), BattleError>
where
    A: Fighter + ?Sized,
    B: Fighter + ?Sized,
{
    if a.id() == b.id() {
        return Err(BattleError::SameFighter {
            name: a.name().to_string(),
        });
    }

    for (id, name) in [(a.id(), a.name()), (b.id(), b.name())] {
        if name.is_empty() {
            return Err(BattleError::EmptyName { id });
        }
    }

    for (name, health) in [(a.name(), a.health()), (b.name(), b.health())] {
        if health == 0 {
            return Err(BattleError::DeadFighter {
                name: name.to_string(),
            });
        }
    }

    for (name, power) in [(a.name(), a.power()), (b.name(), b.power())] {
        if power <= 0 {
            return Err(BattleError::InvalidPower {
                name: name.to_string(),
                power,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::{Character, CharacterKind, FighterId, Universe};

    fn fighter(id: u64, name: &str, health: u32, power: i32) -> Character {
        Character::with_id(
            FighterId::new(id),
            name,
            health,
            power,
            Universe::JujutsuKaisen,
            0,
            CharacterKind::Base,
        )
    }

    #[test]
    fn accepts_healthy_distinct_pair() {
        let a = fighter(1, "Yuji", 100, 20);
        let b = fighter(2, "Megumi", 90, 18);
        assert_eq!(validate_for_battle(&a, &b), Ok(()));
    }

    #[test]
    fn rejects_same_identity() {
        let a = fighter(1, "Yuji", 100, 20);
        let err = validate_for_battle(&a, &a).unwrap_err();
        assert_eq!(
            err,
            BattleError::SameFighter {
                name: "Yuji".to_string()
            }
        );
    }

    #[test]
    fn same_name_different_identity_is_allowed() {
        let a = fighter(1, "Yuji", 100, 20);
        let b = fighter(2, "Yuji", 100, 20);
        assert!(validate_for_battle(&a, &b).is_ok());
    }

    #[test]
    fn different_name_same_identity_is_rejected() {
        let a = fighter(5, "Yuji", 100, 20);
        let b = fighter(5, "Sukuna", 100, 20);
        assert!(matches!(
            validate_for_battle(&a, &b),
            Err(BattleError::SameFighter { .. })
        ));
    }

    #[test]
    fn rejects_empty_names() {
        let named = fighter(1, "Yuji", 100, 20);
        let unnamed = fighter(2, "", 100, 20);

        assert_eq!(
            validate_for_battle(&named, &unnamed),
            Err(BattleError::EmptyName {
                id: FighterId::new(2)
            })
        );
        assert_eq!(
            validate_for_battle(&unnamed, &named),
            Err(BattleError::EmptyName {
                id: FighterId::new(2)
            })
        );
    }

    #[test]
    fn two_unnamed_fighters_rejected_first_side_reported() {
        let a = Character::new("", 100, 20, Universe::JujutsuKaisen, 0, CharacterKind::Base);
        let b = Character::new("", 100, 20, Universe::JujutsuKaisen, 0, CharacterKind::Base);

        assert_eq!(
            validate_for_battle(&a, &b),
            Err(BattleError::EmptyName { id: a.id() })
        );
    }

    #[test]
    fn empty_name_checked_before_health() {
        let a = fighter(1, "", 0, 0);
        let b = fighter(2, "Megumi", 90, 18);
        assert!(matches!(
            validate_for_battle(&a, &b),
            Err(BattleError::EmptyName { .. })
        ));
    }

    #[test]
    fn rejects_dead_fighter_on_either_side() {
        let alive = fighter(1, "Yuji", 100, 20);
        let dead = fighter(2, "Junpei", 0, 10);

        assert_eq!(
            validate_for_battle(&alive, &dead),
            Err(BattleError::DeadFighter {
                name: "Junpei".to_string()
            })
        );
        assert_eq!(
            validate_for_battle(&dead, &alive),
            Err(BattleError::DeadFighter {
                name: "Junpei".to_string()
            })
        );
    }

    #[test]
    fn rejects_non_positive_power() {
        let a = fighter(1, "Yuji", 100, 20);
        let zero = fighter(2, "Panda", 100, 0);
        let negative = fighter(3, "Inumaki", 100, -4);

        assert_eq!(
            validate_for_battle(&a, &zero),
            Err(BattleError::InvalidPower {
                name: "Panda".to_string(),
                power: 0
            })
        );
        assert_eq!(
            validate_for_battle(&negative, &a),
            Err(BattleError::InvalidPower {
                name: "Inumaki".to_string(),
                power: -4
            })
        );
    }

    #[test]
    fn dead_checked_before_power() {
        let a = fighter(1, "Yuji", 0, 0);
        let b = fighter(2, "Megumi", 90, 18);
        assert!(matches!(
            validate_for_battle(&a, &b),
            Err(BattleError::DeadFighter { .. })
        ));
    }
}
