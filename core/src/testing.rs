use alloc::vec::Vec;

use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum BoardEvent {
    Render(Vec<Card>, GameConfig),
    FaceUp(CardId),
    FaceDown(CardId),
    Matched(CardId),
    Layout(GameConfig),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingBoard {
    pub events: Vec<BoardEvent>,
}

impl BoardRenderer for RecordingBoard {
    fn render_board(&mut self, cards: &[Card], config: GameConfig) {
        self.events.push(BoardEvent::Render(cards.to_vec(), config));
    }

    fn set_face_up(&mut self, id: CardId) {
        self.events.push(BoardEvent::FaceUp(id));
    }

    fn set_face_down(&mut self, id: CardId) {
        self.events.push(BoardEvent::FaceDown(id));
    }

    fn set_matched(&mut self, id: CardId) {
        self.events.push(BoardEvent::Matched(id));
    }

    fn layout_changed(&mut self, config: GameConfig) {
        self.events.push(BoardEvent::Layout(config));
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum StatsEvent {
    Moves(u32),
    Matches(u32),
    Won(u32),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingStats {
    pub events: Vec<StatsEvent>,
}

impl RecordingStats {
    pub fn wins(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                StatsEvent::Won(moves) => Some(*moves),
                _ => None,
            })
            .collect()
    }
}

impl StatsDisplay for RecordingStats {
    fn update_moves(&mut self, moves: u32) {
        self.events.push(StatsEvent::Moves(moves));
    }

    fn update_matches(&mut self, matches: u32) {
        self.events.push(StatsEvent::Matches(matches));
    }

    fn announce_win(&mut self, moves_taken: u32) {
        self.events.push(StatsEvent::Won(moves_taken));
    }
}

pub(crate) type TestEngine = MemoryEngine<RecordingBoard, RecordingStats, TaskQueue>;

pub(crate) fn engine(seed: u64) -> TestEngine {
    MemoryEngine::new(
        seed,
        RecordingBoard::default(),
        RecordingStats::default(),
        TaskQueue::default(),
    )
}

/// Easy-sized deck where cards `2n` and `2n + 1` form a pair.
pub(crate) fn ordered_deck(pairs: u8) -> Deck {
    let faces: Vec<Face> = (0..pairs).flat_map(|i| [Face(i), Face(i)]).collect();
    Deck::from_faces(&faces).unwrap()
}

/// Every pair on the board, in order of first appearance.
pub(crate) fn pairs_of(cards: &[Card]) -> Vec<[CardId; 2]> {
    let mut pairs = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        if let Some(other) = cards[i + 1..].iter().find(|other| other.face() == card.face()) {
            pairs.push([card.id(), other.id()]);
        }
    }
    pairs
}
