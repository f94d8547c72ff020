//! Highscore ranking over characters that have fought.

use std::cmp::Reverse;

use crate::entities::Character;

/// Rank characters by victories (most first), then defeats (fewest first).
///
/// Characters that never fought are left out entirely. Ties keep their input order.
pub fn rank<'a, I>(characters: I) -> Vec<Character>
where
    I: IntoIterator<Item = &'a Character>,
{
    let mut ranked: Vec<Character> = characters
        .into_iter()
        .filter(|character| character.fights > 0)
        .cloned()
        .collect();
    ranked.sort_by_key(|character| (Reverse(character.victories), character.defeats));
    ranked
}
