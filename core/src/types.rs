use core::fmt;
use serde::{Deserialize, Serialize};

/// Icons a deck can draw its faces from.
pub const ALPHABET: [&str; 12] = [
    "🍎", "🚀", "⚽", "🎧", "🎲", "🏝️", "🐶", "🌟", "📚", "🎯", "🔑", "🎵",
];

/// Count type used for pairs, moves and matches.
pub type PairCount = u8;

/// Single layout axis used for column and row counts.
pub type Span = u8;

/// Layout dimensions `(columns, rows)`.
pub type Span2 = (Span, Span);

/// Number of distinct faces available.
pub const fn alphabet_len() -> PairCount {
    ALPHABET.len() as PairCount
}

/// Unique identity of a card within one deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Face value of a card, an index into [`ALPHABET`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Face(pub u8);

impl Face {
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < ALPHABET.len()
    }

    pub fn glyph(self) -> &'static str {
        ALPHABET.get(self.0 as usize).copied().unwrap_or("?")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face: Face,
    matched: bool,
}

impl Card {
    pub const fn new(id: CardId, face: Face) -> Self {
        Self {
            id,
            face,
            matched: false,
        }
    }

    pub const fn id(&self) -> CardId {
        self.id
    }

    pub const fn face(&self) -> Face {
        self.face
    }

    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// One-way transition, a matched card never turns back.
    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }
}
