use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered cards of one game, every face appears exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Lays out `faces` in order, numbering cards by position.
    pub fn from_faces(faces: &[Face]) -> Result<Self> {
        if faces.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let mut seen = [0u8; ALPHABET.len()];
        for &face in faces {
            if !face.is_valid() {
                return Err(GameError::UnknownFace(face));
            }
            seen[face.0 as usize] += 1;
            if seen[face.0 as usize] > 2 {
                return Err(GameError::UnpairedFace(face));
            }
        }
        if let Some(&face) = faces.iter().find(|face| seen[face.0 as usize] != 2) {
            return Err(GameError::UnpairedFace(face));
        }

        Ok(Self::from_cards_unchecked(
            faces
                .iter()
                .enumerate()
                .map(|(i, &face)| Card::new(CardId(i as u8), face))
                .collect(),
        ))
    }

    pub(crate) fn from_cards_unchecked(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> PairCount {
        (self.cards.len() / 2) as PairCount
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count()
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.position(id).map(|pos| &self.cards[pos])
    }

    pub(crate) fn mark_matched(&mut self, pos: usize) {
        self.cards[pos].mark_matched();
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::from_cards_unchecked(Vec::new())
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, pos: usize) -> &Self::Output {
        &self.cards[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_faces_numbers_cards_by_position() {
        let deck = Deck::from_faces(&[Face(3), Face(1), Face(3), Face(1)]).unwrap();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.pair_count(), 2);
        assert_eq!(deck[2].id(), CardId(2));
        assert_eq!(deck[2].face(), Face(3));
        assert_eq!(deck.position(CardId(1)), Some(1));
        assert_eq!(deck.matched_count(), 0);
    }

    #[test]
    fn from_faces_rejects_single_and_tripled_faces() {
        assert_eq!(
            Deck::from_faces(&[Face(0), Face(0), Face(1)]),
            Err(GameError::UnpairedFace(Face(1)))
        );
        assert_eq!(
            Deck::from_faces(&[Face(2), Face(2), Face(2), Face(2)]),
            Err(GameError::UnpairedFace(Face(2)))
        );
    }

    #[test]
    fn from_faces_rejects_empty_layout() {
        assert_eq!(Deck::from_faces(&[]), Err(GameError::EmptyDeck));
    }

    #[test]
    fn from_faces_rejects_faces_outside_alphabet() {
        assert_eq!(
            Deck::from_faces(&[Face(12), Face(12)]),
            Err(GameError::UnknownFace(Face(12)))
        );
    }

    #[test]
    fn unknown_card_has_no_position() {
        let deck = Deck::from_faces(&[Face(0), Face(0)]).unwrap();
        assert_eq!(deck.get(CardId(7)), None);
    }
}
