//! Puzzle state machine for a single word.
//!
//! One engine instance is reused across words; every load bumps an instance
//! number that backs the [`InstanceToken`] cancellation scheme. The phase of
//! a puzzle instance runs `Scrambled → Solved → Locked`, with loading the
//! next word superseding any pending lock.

use super::scramble::{ScramblePolicy, scramble};
use super::tile::{LetterTile, TileId, tiles_for};
use crate::dictionary::DictionaryEntry;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Pause between solving and locking interaction, so the settle animation
/// plays before tiles stop responding to drags. Hosts schedule a one-shot
/// of this length and then call [`PuzzleEngine::lock_after_grace`].
pub const GRACE_DELAY: Duration = Duration::from_millis(1500);

/// Phase of the current puzzle instance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Phase {
    /// Tiles are arranged and draggable; the timer is running.
    Scrambled,
    /// The word has been assembled; the timer is stopped and the grace
    /// delay is pending.
    Solved,
    /// The grace delay elapsed; tiles no longer respond to interaction.
    Locked,
}

/// Cancellation token tying host-scheduled deferred work (ticks, the grace
/// one-shot) to one puzzle instance. Tokens from a superseded instance are
/// recognized and ignored, so a dangling host timer can never mutate the
/// next word's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceToken {
    instance: u64,
}

/// Outcome of a completion check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The arrangement does not spell the word.
    Unsolved,
    /// This evaluation solved the puzzle. The host should schedule the
    /// grace one-shot with the enclosed token.
    JustSolved(InstanceToken),
    /// The puzzle was already solved by an earlier evaluation.
    AlreadySolved,
}

/// Errors raised when applying a reported tile order.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReorderError {
    /// Interaction is locked for the current word.
    #[display("Interaction is locked for the current word")]
    InteractionLocked,

    /// The reported order names a tile that is not part of this puzzle.
    #[display("Tile {:?} is not part of the current puzzle", _0)]
    UnknownTile(TileId),

    /// The reported order names the same tile twice.
    #[display("Tile {:?} appears more than once in the reported order", _0)]
    DuplicateTile(TileId),

    /// The reported order omits middle tiles.
    #[display("Reported order is missing {} middle tile(s)", _0)]
    MissingTiles(usize),
}

impl std::error::Error for ReorderError {}

/// State machine driving one word at a time.
#[derive(Debug, Clone)]
pub struct PuzzleEngine {
    entry: DictionaryEntry,
    tiles: Vec<LetterTile>,
    target_len: usize,
    phase: Phase,
    elapsed_seconds: u32,
    moves: u32,
    instance: u64,
}

impl PuzzleEngine {
    /// Creates an engine loaded with its first entry.
    pub fn new(entry: DictionaryEntry, policy: ScramblePolicy, rng: &mut impl Rng) -> Self {
        let mut engine = Self {
            entry: entry.clone(),
            tiles: Vec::new(),
            target_len: 0,
            phase: Phase::Scrambled,
            elapsed_seconds: 0,
            moves: 0,
            instance: 0,
        };
        engine.load(entry, policy, rng);
        engine
    }

    /// Loads the next entry: mints fresh tiles, computes the initial
    /// arrangement, resets all counters, and invalidates every token issued
    /// for the previous instance.
    ///
    /// A word whose initial arrangement already spells the target (two
    /// letters or fewer, or a trivial scramble) starts solved: the timer
    /// stops at zero and the grace delay is immediately pending.
    #[instrument(skip(self, entry, rng), fields(word = %entry.word()))]
    pub fn load(&mut self, entry: DictionaryEntry, policy: ScramblePolicy, rng: &mut impl Rng) {
        self.instance += 1;
        let minted = tiles_for(entry.word());
        self.target_len = minted.len();
        self.tiles = scramble(minted, policy, entry.hint(), rng);
        self.entry = entry;
        self.phase = Phase::Scrambled;
        self.elapsed_seconds = 0;
        self.moves = 0;
        if self.spells_target() {
            self.phase = Phase::Solved;
            info!(word = %self.entry.word(), "word starts solved");
        }
        self.debug_check();
    }

    /// The entry currently being played.
    pub fn entry(&self) -> &DictionaryEntry {
        &self.entry
    }

    /// Tiles in display order.
    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    /// Concatenated letters of the current arrangement.
    pub fn arrangement(&self) -> String {
        self.tiles.iter().map(LetterTile::letter).collect()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the word has been assembled.
    pub fn solved(&self) -> bool {
        matches!(self.phase, Phase::Solved | Phase::Locked)
    }

    /// Whether interaction is locked.
    pub fn locked(&self) -> bool {
        self.phase == Phase::Locked
    }

    /// Seconds elapsed while this word was unsolved.
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Completed drag gestures for this word.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Token for the live puzzle instance.
    pub fn instance_token(&self) -> InstanceToken {
        InstanceToken {
            instance: self.instance,
        }
    }

    /// Token for the pending grace one-shot, if the puzzle is solved but
    /// not yet locked.
    pub fn pending_grace(&self) -> Option<InstanceToken> {
        (self.phase == Phase::Solved).then(|| self.instance_token())
    }

    /// Advances the elapsed-time counter by one second.
    ///
    /// Returns false, mutating nothing, when the token is stale or the
    /// puzzle is no longer unsolved. The counter never resumes for a word
    /// once it has been solved.
    pub fn tick(&mut self, token: InstanceToken) -> bool {
        if token != self.instance_token() || self.phase != Phase::Scrambled {
            debug!(?token, phase = %self.phase, "ignoring stale or post-solve tick");
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    /// Records a completed drag gesture.
    ///
    /// Counted independently of whether the gesture changed correctness;
    /// ignored (returning false) once interaction is locked. Programmatic
    /// reorders never call this.
    pub fn register_move(&mut self) -> bool {
        if self.phase == Phase::Locked {
            return false;
        }
        self.moves += 1;
        true
    }

    /// Applies a reported tile order.
    ///
    /// The first and last tile are re-pinned no matter where the report
    /// puts them; the remainder must be a permutation of the live middle
    /// identity set. Does not evaluate completion.
    ///
    /// # Errors
    ///
    /// Returns a [`ReorderError`] when interaction is locked or the report
    /// is not a permutation of the live tiles. The arrangement is left
    /// untouched on error.
    #[instrument(skip(self, order), fields(word = %self.entry.word()))]
    pub fn reorder(&mut self, order: &[TileId]) -> Result<(), ReorderError> {
        if self.phase == Phase::Locked {
            return Err(ReorderError::InteractionLocked);
        }
        let n = self.tiles.len();
        if n <= 1 {
            return Ok(());
        }

        let first = self.tiles[0].clone();
        let last = self.tiles[n - 1].clone();
        let all_ids: HashSet<&TileId> = self.tiles.iter().map(LetterTile::id).collect();
        let mut pool: HashMap<&TileId, &LetterTile> = self.tiles[1..n - 1]
            .iter()
            .map(|tile| (tile.id(), tile))
            .collect();

        let mut middle: Vec<LetterTile> = Vec::with_capacity(n - 2);
        for id in order {
            if id == first.id() || id == last.id() {
                continue;
            }
            match pool.remove(id) {
                Some(tile) => middle.push(tile.clone()),
                None if all_ids.contains(id) => {
                    return Err(ReorderError::DuplicateTile(id.clone()));
                }
                None => return Err(ReorderError::UnknownTile(id.clone())),
            }
        }
        if !pool.is_empty() {
            return Err(ReorderError::MissingTiles(pool.len()));
        }

        let mut arranged = Vec::with_capacity(n);
        arranged.push(first);
        arranged.extend(middle);
        arranged.push(last);
        self.tiles = arranged;
        debug!(arrangement = %self.arrangement(), "applied reorder");
        self.debug_check();
        Ok(())
    }

    /// Checks the current arrangement against the target word.
    ///
    /// The comparison is case- and whitespace-insensitive. The first match
    /// transitions to [`Phase::Solved`], stops the elapsed counter for the
    /// rest of this instance, and returns the token the host needs for the
    /// grace one-shot.
    #[instrument(skip(self), fields(word = %self.entry.word()))]
    pub fn evaluate(&mut self) -> Evaluation {
        match self.phase {
            Phase::Solved | Phase::Locked => Evaluation::AlreadySolved,
            Phase::Scrambled => {
                if self.spells_target() {
                    self.phase = Phase::Solved;
                    info!(
                        word = %self.entry.word(),
                        seconds = self.elapsed_seconds,
                        moves = self.moves,
                        "puzzle solved"
                    );
                    Evaluation::JustSolved(self.instance_token())
                } else {
                    Evaluation::Unsolved
                }
            }
        }
    }

    /// Locks interaction after the grace delay.
    ///
    /// Returns false, mutating nothing, when the token is stale (the word
    /// advanced before the delay elapsed) or the puzzle is not in the
    /// solved-awaiting-lock phase.
    pub fn lock_after_grace(&mut self, token: InstanceToken) -> bool {
        if token != self.instance_token() || self.phase != Phase::Solved {
            debug!(?token, phase = %self.phase, "ignoring stale grace callback");
            return false;
        }
        self.phase = Phase::Locked;
        debug!(word = %self.entry.word(), "interaction locked");
        true
    }

    pub(crate) fn target_len(&self) -> usize {
        self.target_len
    }

    fn spells_target(&self) -> bool {
        normalize(&self.arrangement()) == normalize(self.entry.word())
    }

    #[cfg(debug_assertions)]
    fn debug_check(&self) {
        use super::invariants::{
            EndpointsPinned, InvariantSet, TilesFromWord, UniqueTileIdentities,
        };
        if let Err(violations) =
            <(EndpointsPinned, UniqueTileIdentities, TilesFromWord) as InvariantSet<Self>>::check_all(
                self,
            )
        {
            panic!("puzzle invariant violated: {violations:?}");
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check(&self) {}
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
