use thiserror::Error;

use crate::{CardId, Face};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game has not been started")]
    NotStarted,
    #[error("Game is already won, no new moves are accepted")]
    AlreadyWon,
    #[error("Board is locked until the current pair resolves")]
    Locked,
    #[error("No card {0} on the board")]
    UnknownCard(CardId),
    #[error("Card {0} is already face up")]
    AlreadyFaceUp(CardId),
    #[error("Card {0} is already matched")]
    AlreadyMatched(CardId),
    #[error("Face {0:?} is not part of the alphabet")]
    UnknownFace(Face),
    #[error("Face {0:?} does not appear exactly twice")]
    UnpairedFace(Face),
    #[error("Deck has no cards")]
    EmptyDeck,
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
