use alloc::vec::Vec;
use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};

use super::*;

/// Picks faces uniformly from the alphabet and deals the pairs in a uniformly random order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, config: GameConfig) -> Deck {
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let pairs = config.pairs.min(alphabet_len());
        if pairs < config.pairs {
            log::warn!(
                "Alphabet too small, requested {} pairs but only {} faces exist",
                config.pairs,
                pairs
            );
        }

        let mut faces: Vec<Face> = (0..alphabet_len()).map(Face).collect();
        faces.shuffle(&mut rng);
        faces.truncate(pairs.into());

        let mut cards: Vec<Card> = faces
            .iter()
            .zip(0u8..)
            .flat_map(|(&face, i)| {
                [
                    Card::new(CardId(2 * i), face),
                    Card::new(CardId(2 * i + 1), face),
                ]
            })
            .collect();
        cards.shuffle(&mut rng);

        Deck::from_cards_unchecked(cards)
    }
}
