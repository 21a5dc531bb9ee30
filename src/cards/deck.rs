use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// The cards not yet dealt.
///
/// Wraps a [`Hand`] of remaining cards. Draws are uniform over what is left
/// and take their randomness from a caller-owned source, so two decks driven
/// by identically seeded sources deal identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card.
    ///
    /// Picks the i-th set bit by clearing the i lowest ones first.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.size() > 0, "draw from empty deck");
        let i = rng.random_range(0..self.size());
        let mut bits = u64::from(self.0);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
}

/// the remaining cards are whatever has not been used
impl From<Hand> for Deck {
    fn from(remaining: Hand) -> Self {
        Self(remaining)
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
