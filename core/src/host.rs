//! Seams between the engine and whatever presents it.
//!
//! The engine never touches a display or a clock directly: it reports board
//! changes to a [`BoardRenderer`], counters to a [`StatsDisplay`], and hands
//! deferred work to a [`Scheduler`] as [`ResolveTask`] values that the host
//! feeds back into [`MemoryEngine::resolve`] once the delay has passed.

use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

pub trait BoardRenderer {
    /// A fresh board, in display order, laid out as `config.size`.
    fn render_board(&mut self, cards: &[Card], config: GameConfig);
    fn set_face_up(&mut self, id: CardId);
    fn set_face_down(&mut self, id: CardId);
    fn set_matched(&mut self, id: CardId);

    /// Layout changed while no game is running.
    fn layout_changed(&mut self, _config: GameConfig) {}
}

pub trait StatsDisplay {
    fn update_moves(&mut self, moves: u32);
    fn update_matches(&mut self, matches: u32);
    fn announce_win(&mut self, moves_taken: u32);
}

pub trait Scheduler {
    fn schedule_after(&mut self, delay_ms: u32, task: ResolveTask);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Match,
    Mismatch,
}

/// Deferred resolution of a face-up pair, only valid for the game it was issued in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveTask {
    pub generation: u32,
    pub pair: [CardId; 2],
    pub verdict: Verdict,
}

/// How long a revealed pair stays visible before it resolves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    pub match_delay_ms: u32,
    pub mismatch_delay_ms: u32,
}

impl Pacing {
    pub const fn instant() -> Self {
        Self {
            match_delay_ms: 0,
            mismatch_delay_ms: 0,
        }
    }

    pub const fn delay_for(self, verdict: Verdict) -> u32 {
        match verdict {
            Verdict::Match => self.match_delay_ms,
            Verdict::Mismatch => self.mismatch_delay_ms,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            match_delay_ms: 350,
            mismatch_delay_ms: 900,
        }
    }
}

/// Scheduler for hosts without a clock, tasks run when drained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskQueue {
    tasks: VecDeque<(u32, ResolveTask)>,
}

impl TaskQueue {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn pop(&mut self) -> Option<ResolveTask> {
        self.tasks.pop_front().map(|(_, task)| task)
    }

    /// Delay requested for the next task, if any.
    pub fn next_delay(&self) -> Option<u32> {
        self.tasks.front().map(|&(delay_ms, _)| delay_ms)
    }
}

impl Scheduler for TaskQueue {
    fn schedule_after(&mut self, delay_ms: u32, task: ResolveTask) {
        self.tasks.push_back((delay_ms, task));
    }
}

/// Discards every signal, for hosts that only poll the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Headless;

impl BoardRenderer for Headless {
    fn render_board(&mut self, _cards: &[Card], _config: GameConfig) {}
    fn set_face_up(&mut self, _id: CardId) {}
    fn set_face_down(&mut self, _id: CardId) {}
    fn set_matched(&mut self, _id: CardId) {}
}

impl StatsDisplay for Headless {
    fn update_moves(&mut self, _moves: u32) {}
    fn update_matches(&mut self, _matches: u32) {}
    fn announce_win(&mut self, _moves_taken: u32) {}
}
