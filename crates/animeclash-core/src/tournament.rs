//! Many independent battles at once.
//!
//! Every pair owns its two fighters, so battles share no mutable state and
//! run in parallel with rayon. Results come back in input order regardless
//! of which battle finished first.

use rayon::prelude::*;
use tracing::debug;

use crate::arena::{BattleArena, BattleReport};
use crate::error::BattleError;
use crate::fighter::Fighter;
use crate::validator::validate_for_battle;

/// Validates and fights every pair in parallel.
///
/// Each entry is `Err` when its pair fails validation; the remaining pairs
/// still fight. Observers are not involved: inspect the reports instead.
///
/// # Example
///
/// ```
/// use animeclash_core::arena::BattleArena;
/// use animeclash_core::fighter::{Character, CharacterKind, Universe};
/// use animeclash_core::tournament::run_tournament;
///
/// let pairs = vec![(
///     Character::new("Tanjiro", 100, 24, Universe::DemonSlayer, 0, CharacterKind::Base),
///     Character::new("Rui", 80, 20, Universe::DemonSlayer, 0, CharacterKind::Base),
/// )];
///
/// let results = run_tournament(&BattleArena::new(), pairs);
/// assert_eq!(results[0].as_ref().unwrap().winner_name, "Tanjiro");
/// ```
pub fn run_tournament<F>(
    arena: &BattleArena,
    pairs: Vec<(F, F)>,
) -> Vec<Result<BattleReport, BattleError>>
where
    F: Fighter + Send,
{
    debug!(battles = pairs.len(), "tournament started");
    pairs
        .into_par_iter()
        .map(|(mut a, mut b)| {
            validate_for_battle(&a, &b)?;
            Ok(arena.fight(&mut a, &mut b, &mut ()))
        })
        .collect()
}
