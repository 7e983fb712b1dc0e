#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use deck::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use host::*;
pub use types::*;

mod deck;
mod difficulty;
mod engine;
mod error;
mod generator;
mod host;
mod types;

#[cfg(test)]
mod testing;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Span2,
    pub pairs: PairCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Span2, pairs: PairCount) -> Self {
        Self { size, pairs }
    }

    /// Builds a config whose pair count fits both the board and the alphabet.
    pub fn new((columns, rows): Span2, pairs: PairCount) -> Self {
        let rows = rows.max(1);
        // at least one pair has to fit
        let columns = columns.max(if rows < 2 { 2 } else { 1 });
        let board_pairs = (columns as usize * rows as usize / 2).clamp(1, PairCount::MAX as usize);
        let max_pairs = (board_pairs as PairCount).min(alphabet_len());
        Self::new_unchecked((columns, rows), pairs.clamp(1, max_pairs))
    }

    pub const fn columns(&self) -> Span {
        self.size.0
    }

    pub const fn rows(&self) -> Span {
        self.size.1
    }

    pub const fn card_count(&self) -> usize {
        self.pairs as usize * 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().game_config()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    /// First card of a pair is face up, waiting for the second.
    Revealed,
    /// Second card turned up and the pair will resolve as a match.
    PairMatching,
    /// Second card turned up and the pair will be turned back down.
    PairMismatching,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    Stale,
    Matched,
    Mismatched,
    Won,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        use ResolveOutcome::*;
        match self {
            Stale => false,
            Matched => true,
            Mismatched => true,
            Won => true,
        }
    }
}
