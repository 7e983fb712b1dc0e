use rand::{RngCore, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Cards currently face up and waiting to be compared.
pub type Selection = SmallVec<[CardId; 2]>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub moves: u32,
    pub matches: u32,
}

/// Observable engine state, without the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    pub state: EngineState,
    pub stats: Stats,
    pub selection: Selection,
    pub locked: bool,
    pub difficulty: Difficulty,
    pub config: GameConfig,
    pub generation: u32,
}

/// Memory game state machine.
///
/// Every [`start`](Self::start) deals a new deck and begins a new generation.
/// Turning up a second card locks the board and schedules a [`ResolveTask`]
/// tagged with that generation; the board stays locked until the task comes
/// back through [`resolve`](Self::resolve). Tasks from earlier generations are
/// ignored, so a restart never has to cancel anything.
#[derive(Debug)]
pub struct MemoryEngine<R, S, T> {
    difficulty: Difficulty,
    config: GameConfig,
    pacing: Pacing,
    deck: Deck,
    selection: Selection,
    locked: bool,
    stats: Stats,
    state: EngineState,
    generation: u32,
    rng: SmallRng,
    renderer: R,
    stats_display: S,
    scheduler: T,
}

impl<R, S, T> MemoryEngine<R, S, T>
where
    R: BoardRenderer,
    S: StatsDisplay,
    T: Scheduler,
{
    pub fn new(seed: u64, renderer: R, stats_display: S, scheduler: T) -> Self {
        let difficulty = Difficulty::default();
        Self {
            difficulty,
            config: difficulty.game_config(),
            pacing: Pacing::default(),
            deck: Deck::default(),
            selection: Selection::new(),
            locked: false,
            stats: Stats::default(),
            state: EngineState::default(),
            generation: 0,
            rng: SmallRng::seed_from_u64(seed),
            renderer,
            stats_display,
            scheduler,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn configure_difficulty(&mut self, difficulty: Difficulty) {
        log::debug!("difficulty: {}", difficulty);
        self.difficulty = difficulty;
        self.config = difficulty.game_config();

        if self.state.is_started() {
            self.restart();
        } else {
            self.renderer.layout_changed(self.config);
        }
    }

    pub fn configure_difficulty_named(&mut self, name: &str) {
        self.configure_difficulty(Difficulty::parse_or_default(name));
    }

    /// Deals a fresh deck for the current difficulty and starts playing it.
    pub fn start(&mut self) {
        let seed = self.rng.next_u64();
        let deck = RandomDeckGenerator::new(seed).generate(self.config);
        self.deal(deck);
    }

    /// Starts playing a prepared deck. A deck without cards is refused and
    /// the current game is left untouched.
    pub fn start_with_deck(&mut self, deck: Deck) -> Result<()> {
        if deck.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        self.deal(deck);
        Ok(())
    }

    fn deal(&mut self, deck: Deck) {
        self.generation = self.generation.wrapping_add(1);
        self.deck = deck;
        self.selection.clear();
        self.locked = false;
        self.stats = Stats::default();
        self.state = EngineState::Playing;

        log::debug!(
            "game {} started with {} pairs",
            self.generation,
            self.deck.pair_count()
        );

        self.renderer.render_board(self.deck.cards(), self.config);
        self.stats_display.update_moves(self.stats.moves);
        self.stats_display.update_matches(self.stats.matches);
    }

    pub fn restart(&mut self) {
        log::debug!("restarting game {}", self.generation);
        self.state = EngineState::Ready;
        self.selection.clear();
        self.locked = false;
        self.start();
    }

    /// Turns a card face up, ignoring the request when it is not allowed.
    pub fn select_card(&mut self, id: CardId) -> SelectOutcome {
        self.try_select_card(id).unwrap_or_else(|err| {
            log::trace!("ignored selection of {}: {}", id, err);
            SelectOutcome::NoChange
        })
    }

    pub fn try_select_card(&mut self, id: CardId) -> Result<SelectOutcome> {
        self.check_playing()?;
        if self.locked {
            return Err(GameError::Locked);
        }

        let pos = self.deck.position(id).ok_or(GameError::UnknownCard(id))?;
        if self.deck[pos].is_matched() {
            return Err(GameError::AlreadyMatched(id));
        }
        if self.selection.contains(&id) {
            return Err(GameError::AlreadyFaceUp(id));
        }

        self.selection.push(id);
        self.renderer.set_face_up(id);

        let &[first, second] = self.selection.as_slice() else {
            return Ok(SelectOutcome::Revealed);
        };

        self.stats.moves = self.stats.moves.saturating_add(1);
        self.stats_display.update_moves(self.stats.moves);
        self.locked = true;

        let verdict = self.compare(first, second);
        let task = ResolveTask {
            generation: self.generation,
            pair: [first, second],
            verdict,
        };
        self.scheduler
            .schedule_after(self.pacing.delay_for(verdict), task);

        Ok(match verdict {
            Verdict::Match => SelectOutcome::PairMatching,
            Verdict::Mismatch => SelectOutcome::PairMismatching,
        })
    }

    /// Applies a task handed out through the scheduler.
    pub fn resolve(&mut self, task: ResolveTask) -> ResolveOutcome {
        if task.generation != self.generation
            || !self.locked
            || self.selection.as_slice() != task.pair
        {
            log::trace!("stale resolve task: {:?}", task);
            return ResolveOutcome::Stale;
        }

        let [first, second] = task.pair;
        let outcome = match self.compare(first, second) {
            Verdict::Match => {
                for id in task.pair {
                    if let Some(pos) = self.deck.position(id) {
                        self.deck.mark_matched(pos);
                    }
                    self.renderer.set_matched(id);
                }
                self.stats.matches = self.stats.matches.saturating_add(1);
                self.stats_display.update_matches(self.stats.matches);
                ResolveOutcome::Matched
            }
            Verdict::Mismatch => {
                for id in task.pair {
                    self.renderer.set_face_down(id);
                }
                ResolveOutcome::Mismatched
            }
        };

        self.selection.clear();
        self.locked = false;

        if outcome == ResolveOutcome::Matched && self.check_win() {
            ResolveOutcome::Won
        } else {
            outcome
        }
    }

    fn check_win(&mut self) -> bool {
        if self.state.is_finished() || self.stats.matches < u32::from(self.deck.pair_count()) {
            return false;
        }

        self.state = EngineState::Won;
        log::debug!(
            "game {} won in {} moves",
            self.generation,
            self.stats.moves
        );
        self.stats_display.announce_win(self.stats.moves);
        true
    }

    fn compare(&self, first: CardId, second: CardId) -> Verdict {
        let face = |id| self.deck.get(id).map(Card::face);
        match (face(first), face(second)) {
            (Some(a), Some(b)) if a == b => Verdict::Match,
            _ => Verdict::Mismatch,
        }
    }

    fn check_playing(&self) -> Result<()> {
        match self.state {
            EngineState::Ready => Err(GameError::NotStarted),
            EngineState::Playing => Ok(()),
            EngineState::Won => Err(GameError::AlreadyWon),
        }
    }
}

impl<R, S, T> MemoryEngine<R, S, T> {
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.state.is_started()
    }

    pub fn is_won(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    pub fn is_face_up(&self, id: CardId) -> bool {
        self.selection.contains(&id) || self.deck.get(id).is_some_and(Card::is_matched)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            state: self.state,
            stats: self.stats,
            selection: self.selection.clone(),
            locked: self.locked,
            difficulty: self.difficulty,
            config: self.config,
            generation: self.generation,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn stats_display(&self) -> &S {
        &self.stats_display
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}

impl<R, S> MemoryEngine<R, S, TaskQueue>
where
    R: BoardRenderer,
    S: StatsDisplay,
{
    /// Resolves every queued task in order, returning how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut count = 0;
        while let Some(task) = self.scheduler.pop() {
            self.resolve(task);
            count += 1;
        }
        count
    }
}
