//! Letter tiles with stable drag identities.

use serde::{Deserialize, Serialize};

/// Stable identifier of a tile, derived from its original position and
/// letter (`"{index}-{LETTER}"`). Valid for the lifetime of one puzzle
/// instance; the next word mints a fresh set.
pub type TileId = String;

/// One letter of the puzzle word.
///
/// The identity stays fixed while the tile is dragged around, so the
/// presentation layer can animate by id rather than by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTile {
    id: TileId,
    letter: char,
    original_index: usize,
}

impl LetterTile {
    fn new(original_index: usize, letter: char) -> Self {
        Self {
            id: format!("{original_index}-{letter}"),
            letter,
            original_index,
        }
    }

    /// Stable identity of this tile.
    pub fn id(&self) -> &TileId {
        &self.id
    }

    /// Uppercase letter shown on the tile.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Position of this letter in the unscrambled word.
    pub fn original_index(&self) -> usize {
        self.original_index
    }
}

/// Splits a word into uppercase tiles in original order. Whitespace
/// characters produce no tile.
pub(crate) fn tiles_for(word: &str) -> Vec<LetterTile> {
    word.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .enumerate()
        .map(|(index, letter)| LetterTile::new(index, letter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_uppercased_and_indexed() {
        let tiles = tiles_for("Cat");
        let letters: Vec<char> = tiles.iter().map(LetterTile::letter).collect();
        assert_eq!(letters, vec!['C', 'A', 'T']);
        assert_eq!(tiles[0].id(), "0-C");
        assert_eq!(tiles[2].id(), "2-T");
        assert_eq!(tiles[1].original_index(), 1);
    }

    #[test]
    fn whitespace_produces_no_tile() {
        let tiles = tiles_for("ice cream");
        assert_eq!(tiles.len(), 8);
        assert_eq!(tiles[3].letter(), 'C');
        assert_eq!(tiles[3].id(), "3-C");
    }

    #[test]
    fn repeated_letters_get_distinct_identities() {
        let tiles = tiles_for("LL");
        assert_ne!(tiles[0].id(), tiles[1].id());
    }
}
