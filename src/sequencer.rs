//! Shuffled play order over dictionary entries.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Owns the shuffled play order and the current position within it.
///
/// The order is shuffled exactly once, when the session starts; advancing
/// past the last entry wraps to the first entry of the same order. The RNG
/// is injected so callers can seed a deterministic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSequencer {
    order: Vec<usize>,
    index: usize,
}

impl SessionSequencer {
    /// Produces a random permutation of `0..len` and sets the position to
    /// its first element.
    #[instrument(skip(rng))]
    pub fn start(len: usize, rng: &mut impl Rng) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(rng);
        debug!(?order, "shuffled play order");
        Self { order, index: 0 }
    }

    /// Dictionary index at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the sequencer was started over zero entries.
    pub fn current(&self) -> usize {
        self.order[self.index]
    }

    /// Moves to the next position, wrapping after the last entry, and
    /// returns the dictionary index there. Never reshuffles; the sequence
    /// is infinite via wraparound.
    ///
    /// # Panics
    ///
    /// Panics if the sequencer was started over zero entries.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.order.len();
        self.current()
    }

    /// Number of entries in the play order.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the play order is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The full shuffled order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}
