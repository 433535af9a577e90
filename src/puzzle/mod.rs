//! Puzzle engine: tiles, scramble policies, and the per-word state machine.

mod engine;
mod invariants;
mod scramble;
mod tile;

pub use engine::{
    Evaluation, GRACE_DELAY, InstanceToken, Phase, PuzzleEngine, ReorderError,
};
pub use invariants::{
    EndpointsPinned, Invariant, InvariantSet, InvariantViolation, TilesFromWord,
    UniqueTileIdentities,
};
pub use scramble::ScramblePolicy;
pub use tile::{LetterTile, TileId};
