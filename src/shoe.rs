//! The shoe the round draws from.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// Anything a hand can draw cards from.
pub trait DrawSource {
    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns an error if no card can be drawn.
    fn draw(&mut self) -> Result<Card, DrawError>;
}

/// One or more shuffled 52-card decks.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards; the next draw is the last element.
    cards: Vec<Card>,
    /// Number of decks the shoe is built from.
    decks: u8,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe of `decks` decks.
    ///
    /// The same seed always produces the same card order.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_cards(decks, &mut rng);
        Self { cards, decks, rng }
    }

    /// Creates a single-deck shoe that deals exactly `draws`, in order.
    ///
    /// ```
    /// use bjrules::{Card, DrawSource, Rank, Shoe, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, Rank::Ace);
    /// let mut shoe = Shoe::from_draws(&[ace]);
    /// assert_eq!(shoe.draw(), Ok(ace));
    /// assert!(shoe.draw().is_err());
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            decks: 1,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    fn create_cards(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Rebuilds and reshuffles the full shoe.
    pub fn reshuffle(&mut self) {
        self.cards = Self::create_cards(self.decks, &mut self.rng);
    }

    /// Returns whether the dealt fraction of the shoe has reached
    /// `penetration`. A penetration of 0 never needs reshuffling.
    #[must_use]
    pub fn needs_reshuffle(&self, penetration: f64) -> bool {
        if penetration <= 0.0 {
            return false;
        }

        let total_cards = self.decks as usize * DECK_SIZE;
        if total_cards == 0 {
            return false;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.cards.len() as f64 / total_cards as f64);

        used_ratio >= penetration
    }

    /// Removes a specific card from the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::CardNotFound`] if the card is no longer in the shoe.
    pub fn take(&mut self, card: Card) -> Result<Card, DrawError> {
        let position = self
            .cards
            .iter()
            .rposition(|c| *c == card)
            .ok_or(DrawError::CardNotFound)?;
        Ok(self.cards.remove(position))
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}

impl DrawSource for Shoe {
    fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyShoe)
    }
}
