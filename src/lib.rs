//! Unjumble - word-unscramble puzzle engine.
//!
//! A word's letters are shown scrambled with the first and last letter
//! pinned; the player drags the middle letters back into place. This crate
//! is the state machine behind that interaction:
//!
//! - **Dictionary**: `{word, hint, sentence}` entries, with a built-in list
//!   embedded in the crate.
//! - **Sequencer**: shuffled play order over the dictionary, cycling
//!   forever without reshuffling.
//! - **Puzzle engine**: tile identities, scramble policies, reorder
//!   validation, completion detection, elapsed/move counters, and the
//!   post-solve grace-then-lock transition.
//! - **Hint composer**: the entry's sentence with the live arrangement
//!   substituted for the hint token.
//! - **Session**: the facade a presentation layer drives through gesture
//!   callbacks, rendering from [`PuzzleView`] snapshots.
//!
//! The crate owns no threads and no timers. Hosts schedule the
//! once-per-second tick and the [`GRACE_DELAY`] one-shot themselves and
//! hand back the [`InstanceToken`] they were issued; tokens from a
//! superseded word are recognized and ignored, so a dangling timer can
//! never corrupt the next puzzle.
//!
//! # Example
//!
//! ```
//! use unjumble::{Dictionary, ScramblePolicy, Session};
//!
//! let mut session = Session::with_seed(Dictionary::builtin(), ScramblePolicy::RandomShuffle, 7);
//! let view = session.view();
//! assert!(!view.tiles.is_empty());
//! assert_eq!(view.elapsed_display(), "00:00");
//!
//! // The host's one-second timer delivers ticks with the instance token.
//! let token = session.instance_token();
//! session.tick(token);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dictionary;
mod hint;
mod puzzle;
mod sequencer;
mod session;
mod view;

pub use dictionary::{Dictionary, DictionaryEntry, DictionaryError, DictionaryWarning};
pub use hint::compose;
pub use puzzle::{
    EndpointsPinned, Evaluation, GRACE_DELAY, InstanceToken, Invariant, InvariantSet,
    InvariantViolation, LetterTile, Phase, PuzzleEngine, ReorderError, ScramblePolicy, TileId,
    TilesFromWord, UniqueTileIdentities,
};
pub use sequencer::SessionSequencer;
pub use session::Session;
pub use view::{PuzzleView, TileView, format_elapsed};
