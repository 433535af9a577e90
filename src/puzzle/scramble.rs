//! Initial-arrangement policies.
//!
//! Two historical variants of the puzzle scrambled words differently; both
//! are kept as explicit, independently testable policies rather than one
//! silently replacing the other. Either way the first and last tile stay
//! pinned and words of two letters or fewer are never scrambled.

use super::tile::LetterTile;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the middle tiles of a freshly loaded word are arranged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ScramblePolicy {
    /// Uniform Fisher-Yates shuffle of the middle tiles.
    RandomShuffle,
    /// Middle tiles ordered to match the letter sequence of the entry's
    /// hint token (skipping the hint's own first and last character).
    HintDerived,
}

/// Computes the initial arrangement for a fresh set of tiles.
pub(crate) fn scramble(
    tiles: Vec<LetterTile>,
    policy: ScramblePolicy,
    hint: &str,
    rng: &mut impl Rng,
) -> Vec<LetterTile> {
    if tiles.len() <= 2 {
        return tiles;
    }
    match policy {
        ScramblePolicy::RandomShuffle => random_shuffle(tiles, rng),
        ScramblePolicy::HintDerived => hint_derived(tiles, hint),
    }
}

fn random_shuffle(tiles: Vec<LetterTile>, rng: &mut impl Rng) -> Vec<LetterTile> {
    let last = tiles.len() - 1;
    let mut middle: Vec<LetterTile> = tiles[1..last].to_vec();
    middle.shuffle(rng);
    rebuild(&tiles, middle)
}

/// Orders the middle tiles after the hint's letters.
///
/// A hint letter with no remaining unmatched tile is skipped, so a hint
/// that is not an anagram of the word leaves the arrangement shorter than
/// the word. That entry can then never be solved; dictionary validation
/// flags it up front rather than inventing a filler tile here.
fn hint_derived(tiles: Vec<LetterTile>, hint: &str) -> Vec<LetterTile> {
    let last = tiles.len() - 1;
    let mut pool: Vec<Option<LetterTile>> = tiles[1..last].iter().cloned().map(Some).collect();
    let hint_letters: Vec<char> = hint.chars().filter(|c| !c.is_whitespace()).collect();
    let inner: &[char] = if hint_letters.len() > 2 {
        &hint_letters[1..hint_letters.len() - 1]
    } else {
        &[]
    };

    let mut middle = Vec::with_capacity(pool.len());
    for &letter in inner {
        let wanted = letter.to_ascii_uppercase();
        let found = pool.iter_mut().find_map(|slot| {
            if slot.as_ref().is_some_and(|tile| tile.letter() == wanted) {
                slot.take()
            } else {
                None
            }
        });
        match found {
            Some(tile) => middle.push(tile),
            None => debug!(%letter, "hint letter has no unmatched tile, skipping"),
        }
    }
    rebuild(&tiles, middle)
}

fn rebuild(tiles: &[LetterTile], middle: Vec<LetterTile>) -> Vec<LetterTile> {
    let mut arranged = Vec::with_capacity(middle.len() + 2);
    arranged.push(tiles[0].clone());
    arranged.extend(middle);
    arranged.push(tiles[tiles.len() - 1].clone());
    arranged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::tile::{TileId, tiles_for};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    fn letters(tiles: &[LetterTile]) -> String {
        tiles.iter().map(LetterTile::letter).collect()
    }

    #[test]
    fn short_words_are_never_scrambled() {
        let mut rng = StdRng::seed_from_u64(1);
        for policy in ScramblePolicy::iter() {
            let arranged = scramble(tiles_for("Go"), policy, "go", &mut rng);
            assert_eq!(letters(&arranged), "GO");
        }
    }

    #[test]
    fn random_shuffle_pins_endpoints_and_permutes_middle() {
        let tiles = tiles_for("Harmony");
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let arranged = scramble(tiles.clone(), ScramblePolicy::RandomShuffle, "", &mut rng);
            assert_eq!(arranged.len(), 7);
            assert_eq!(arranged[0].letter(), 'H');
            assert_eq!(arranged[6].letter(), 'Y');
            let mut middle: Vec<char> = arranged[1..6].iter().map(LetterTile::letter).collect();
            middle.sort_unstable();
            assert_eq!(middle, vec!['A', 'M', 'N', 'O', 'R']);
        }
    }

    #[test]
    fn random_shuffle_preserves_tile_identities() {
        let tiles = tiles_for("Elephant");
        let mut rng = StdRng::seed_from_u64(7);
        let arranged = scramble(tiles.clone(), ScramblePolicy::RandomShuffle, "", &mut rng);
        let mut original: Vec<&TileId> = tiles.iter().map(LetterTile::id).collect();
        let mut shuffled: Vec<&TileId> = arranged.iter().map(LetterTile::id).collect();
        original.sort();
        shuffled.sort();
        assert_eq!(original, shuffled);
    }

    #[test]
    fn hint_derived_follows_the_hint_letters() {
        let mut rng = StdRng::seed_from_u64(0);
        let arranged = scramble(
            tiles_for("Harmony"),
            ScramblePolicy::HintDerived,
            "hamorny",
            &mut rng,
        );
        assert_eq!(letters(&arranged), "HAMORNY");
    }

    #[test]
    fn hint_derived_with_repeated_letters_consumes_distinct_tiles() {
        let mut rng = StdRng::seed_from_u64(0);
        let arranged = scramble(
            tiles_for("Elephant"),
            ScramblePolicy::HintDerived,
            "elpehant",
            &mut rng,
        );
        assert_eq!(letters(&arranged), "ELPEHANT");
        let ids: std::collections::HashSet<&TileId> = arranged.iter().map(LetterTile::id).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn malformed_hint_silently_drops_unmatched_tiles() {
        let mut rng = StdRng::seed_from_u64(0);
        let arranged = scramble(tiles_for("Cat"), ScramblePolicy::HintDerived, "cobt", &mut rng);
        // Neither 'o' nor 'b' matches a tile, so only the endpoints survive.
        assert_eq!(letters(&arranged), "CT");
    }
}
