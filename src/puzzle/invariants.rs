//! First-class invariants for the puzzle engine.
//!
//! Invariants are logical properties that must hold across every engine
//! mutation. They are testable independently and serve as documentation of
//! the guarantees the presentation layer can rely on.

use super::engine::PuzzleEngine;
use super::tile::tiles_for;
use std::collections::HashSet;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The first tile sits at position 0 and the word's final letter tile sits
/// at the end of the arrangement, whatever order the caller reported.
#[derive(Debug, Clone, Copy)]
pub struct EndpointsPinned;

impl Invariant<PuzzleEngine> for EndpointsPinned {
    fn holds(engine: &PuzzleEngine) -> bool {
        let tiles = engine.tiles();
        match tiles.len() {
            0 => true,
            1 => tiles[0].original_index() == 0 || engine.target_len() == 1,
            n => {
                tiles[0].original_index() == 0
                    && tiles[n - 1].original_index() == engine.target_len() - 1
            }
        }
    }

    fn description() -> &'static str {
        "first and last tile are pinned to the ends of the arrangement"
    }
}

/// No tile identity appears twice in the arrangement.
#[derive(Debug, Clone, Copy)]
pub struct UniqueTileIdentities;

impl Invariant<PuzzleEngine> for UniqueTileIdentities {
    fn holds(engine: &PuzzleEngine) -> bool {
        let ids: HashSet<&str> = engine.tiles().iter().map(|t| t.id().as_str()).collect();
        ids.len() == engine.tiles().len()
    }

    fn description() -> &'static str {
        "tile identities are unique within the arrangement"
    }
}

/// Every tile in the arrangement was minted from the current word; the
/// arrangement never grows beyond the word's letters. (It may be shorter
/// when a malformed hint-derived scramble dropped tiles.)
#[derive(Debug, Clone, Copy)]
pub struct TilesFromWord;

impl Invariant<PuzzleEngine> for TilesFromWord {
    fn holds(engine: &PuzzleEngine) -> bool {
        let minted: HashSet<(usize, char)> = tiles_for(engine.entry().word())
            .iter()
            .map(|t| (t.original_index(), t.letter()))
            .collect();
        engine.tiles().len() <= minted.len()
            && engine
                .tiles()
                .iter()
                .all(|t| minted.contains(&(t.original_index(), t.letter())))
    }

    fn description() -> &'static str {
        "every arranged tile was minted from the current word"
    }
}
