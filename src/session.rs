//! Session facade driven by the presentation layer.
//!
//! Ties the dictionary, play-order sequencer, puzzle engine, and hint
//! composer together behind the gesture-callback surface the UI forwards
//! into: reorders, drag completions, timer ticks, and the next-word action.

use crate::dictionary::Dictionary;
use crate::hint;
use crate::puzzle::{
    Evaluation, InstanceToken, PuzzleEngine, ReorderError, ScramblePolicy, TileId,
};
use crate::sequencer::SessionSequencer;
use crate::view::{PuzzleView, TileView};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{instrument, warn};

/// One play session: a shuffled tour of the dictionary, one puzzle at a
/// time, cycling forever.
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Dictionary,
    policy: ScramblePolicy,
    sequencer: SessionSequencer,
    engine: PuzzleEngine,
    rng: StdRng,
    hint_text: String,
}

impl Session {
    /// Starts a session with a randomized play order.
    pub fn new(dictionary: Dictionary, policy: ScramblePolicy) -> Self {
        Self::with_rng(dictionary, policy, StdRng::from_entropy())
    }

    /// Starts a session with a deterministic play order and scramble.
    pub fn with_seed(dictionary: Dictionary, policy: ScramblePolicy, seed: u64) -> Self {
        Self::with_rng(dictionary, policy, StdRng::seed_from_u64(seed))
    }

    #[instrument(skip(dictionary, rng), fields(entries = dictionary.len()))]
    fn with_rng(dictionary: Dictionary, policy: ScramblePolicy, mut rng: StdRng) -> Self {
        for warning in dictionary.validate() {
            warn!(%warning, "malformed dictionary entry");
        }
        let sequencer = SessionSequencer::start(dictionary.len(), &mut rng);
        let entry = dictionary.entry(sequencer.current()).clone();
        let engine = PuzzleEngine::new(entry, policy, &mut rng);
        let hint_text = hint::compose(engine.entry(), &engine.arrangement());
        Self {
            dictionary,
            policy,
            sequencer,
            engine,
            rng,
            hint_text,
        }
    }

    /// Applies a reported tile order, evaluates completion, and recomposes
    /// the hint to track the new arrangement.
    ///
    /// On [`Evaluation::JustSolved`] the host should schedule the grace
    /// one-shot ([`crate::GRACE_DELAY`]) with the enclosed token and call
    /// [`Session::lock_after_grace`] when it fires.
    ///
    /// # Errors
    ///
    /// Propagates [`ReorderError`] from the engine; state is unchanged on
    /// error.
    pub fn on_reorder(&mut self, order: &[TileId]) -> Result<Evaluation, ReorderError> {
        self.engine.reorder(order)?;
        let evaluation = self.engine.evaluate();
        self.hint_text = hint::compose(self.engine.entry(), &self.engine.arrangement());
        Ok(evaluation)
    }

    /// Records a completed drag gesture. Returns false once interaction is
    /// locked.
    pub fn on_drag_complete(&mut self) -> bool {
        self.engine.register_move()
    }

    /// Advances the elapsed-time counter by one second. Stale or post-solve
    /// ticks return false and mutate nothing.
    pub fn tick(&mut self, token: InstanceToken) -> bool {
        self.engine.tick(token)
    }

    /// Locks interaction after the grace delay. Stale callbacks return
    /// false and mutate nothing.
    pub fn lock_after_grace(&mut self, token: InstanceToken) -> bool {
        self.engine.lock_after_grace(token)
    }

    /// Token for the live puzzle instance, for scheduling tick timers.
    pub fn instance_token(&self) -> InstanceToken {
        self.engine.instance_token()
    }

    /// Token for the pending grace one-shot, if the puzzle is solved but
    /// not yet locked. Words that start solved report this immediately.
    pub fn pending_grace(&self) -> Option<InstanceToken> {
        self.engine.pending_grace()
    }

    /// Loads the next word in the play order, wrapping after the last
    /// entry. Cancels all deferred work for the superseded instance and
    /// returns the fresh token for the new one.
    ///
    /// The engine accepts this at any time; the presentation layer shows
    /// the control only once solved.
    #[instrument(skip(self))]
    pub fn next_word(&mut self) -> InstanceToken {
        let index = self.sequencer.advance();
        let entry = self.dictionary.entry(index).clone();
        self.engine.load(entry, self.policy, &mut self.rng);
        self.hint_text = hint::compose(self.engine.entry(), &self.engine.arrangement());
        self.engine.instance_token()
    }

    /// Snapshot of everything the presentation layer draws.
    pub fn view(&self) -> PuzzleView {
        PuzzleView {
            tiles: self
                .engine
                .tiles()
                .iter()
                .map(|tile| TileView {
                    id: tile.id().clone(),
                    letter: tile.letter(),
                })
                .collect(),
            solved: self.engine.solved(),
            locked: self.engine.locked(),
            hint: self.hint_text.clone(),
            elapsed_seconds: self.engine.elapsed_seconds(),
            moves: self.engine.moves(),
        }
    }

    /// The entry currently being played.
    pub fn entry(&self) -> &crate::dictionary::DictionaryEntry {
        self.engine.entry()
    }

    /// The scramble policy this session was started with.
    pub fn policy(&self) -> ScramblePolicy {
        self.policy
    }

    /// The dictionary backing this session.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
