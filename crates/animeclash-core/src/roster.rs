//! Collection helpers over groups of fighters.
//!
//! These are the map/filter/sort views the demo prints, plus a uniform
//! random pick that takes the RNG from the caller so results can be
//! reproduced with a seeded [`rand_chacha::ChaCha8Rng`].

use std::cmp::Reverse;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::fighter::Fighter;

/// "Name (HP: n)" for every fighter, in input order.
pub fn status_lines<F: Fighter>(fighters: &[F]) -> Vec<String> {
    fighters
        .iter()
        .map(|f| format!("{} (HP: {})", f.name(), f.health()))
        .collect()
}

/// Names of fighters with health strictly above `threshold`.
pub fn names_with_health_above<F: Fighter>(fighters: &[F], threshold: u32) -> Vec<String> {
    fighters
        .iter()
        .filter(|f| f.health() > threshold)
        .map(|f| f.name().to_string())
        .collect()
}

/// "Name:power" ordered by power, strongest first.
///
/// Fighters with equal power keep their input order.
pub fn by_power_desc<F: Fighter>(fighters: &[F]) -> Vec<String> {
    let mut sorted: Vec<&F> = fighters.iter().collect();
    sorted.sort_by_key(|f| Reverse(f.power()));
    sorted
        .into_iter()
        .map(|f| format!("{}:{}", f.name(), f.power()))
        .collect()
}

/// Picks one element uniformly at random, `None` when `items` is empty.
///
/// # Example
///
/// ```
/// use animeclash_core::roster::pick_random;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let picked = pick_random(&["Mikasa", "Eren", "Gojo"], &mut rng);
/// assert!(picked.is_some());
///
/// let empty: [&str; 0] = [];
/// assert!(pick_random(&empty, &mut rng).is_none());
/// ```
pub fn pick_random<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::fighter::{Character, CharacterKind, Universe};

    fn roster() -> Vec<Character> {
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
                40,
                28,
                Universe::JujutsuKaisen,
                10,
                CharacterKind::energy_user(250),
            ),
        ]
    }

    #[test]
    fn status_lines_keep_order() {
        assert_eq!(
            status_lines(&roster()),
            vec!["Mikasa (HP: 90)", "Eren (HP: 120)", "Gojo (HP: 40)"]
        );
    }

    #[test]
    fn filter_is_strictly_greater() {
        let fighters = roster();
        assert_eq!(names_with_health_above(&fighters, 50), vec!["Mikasa", "Eren"]);
        assert_eq!(names_with_health_above(&fighters, 90), vec!["Eren"]);
        assert!(names_with_health_above(&fighters, 120).is_empty());
    }

    #[test]
    fn sorted_by_power_descending() {
        assert_eq!(
            by_power_desc(&roster()),
            vec!["Eren:30", "Gojo:28", "Mikasa:25"]
        );
    }

    #[test]
    fn equal_power_keeps_input_order() {
        let fighters = vec![
            Character::new("A", 1, 10, Universe::DemonSlayer, 0, CharacterKind::Base),
            Character::new("B", 1, 20, Universe::DemonSlayer, 0, CharacterKind::Base),
            Character::new("C", 1, 10, Universe::DemonSlayer, 0, CharacterKind::Base),
        ];
        assert_eq!(by_power_desc(&fighters), vec!["B:20", "A:10", "C:10"]);
    }

    #[test]
    fn pick_random_is_seed_deterministic() {
        let fighters = roster();
        let mut r1 = ChaCha8Rng::seed_from_u64(7);
        let mut r2 = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..10 {
            let p1 = pick_random(&fighters, &mut r1).map(Fighter::name);
            let p2 = pick_random(&fighters, &mut r2).map(Fighter::name);
            assert_eq!(p1, p2);
        }
    }

    #[test]
    fn pick_random_reaches_every_item() {
        let universes = Universe::ALL;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [false; 3];

        for _ in 0..200 {
            if let Some(u) = pick_random(&universes, &mut rng) {
                let index = universes.iter().position(|x| x == u).unwrap();
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
