//! Player and dealer hand representations.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::card::{Card, Rank};
use crate::error::{ActionError, DealError};
use crate::result::HandOutcome;
use crate::shoe::DrawSource;
use crate::values::{BLACKJACK, Values};

/// Number of cards in an initial deal.
pub const INITIAL_CARDS: usize = 2;

/// A hand of cards.
///
/// Player hands carry a stake; the dealer's hand does not. A hand takes
/// actions until it is finished, and finishing is permanent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Bet amount for this hand, `None` for the dealer.
    bet: Option<usize>,
    /// Whether the hand is still taking actions.
    active: bool,
    /// Whether this hand is from a split.
    from_split: bool,
    /// Outcome, once the hand has been resolved against the dealer.
    outcome: Option<HandOutcome>,
}

impl Hand {
    /// Creates a new empty player hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet: Some(bet),
            active: true,
            from_split: false,
            outcome: None,
        }
    }

    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn dealer() -> Self {
        Self {
            cards: Vec::new(),
            bet: None,
            active: true,
            from_split: false,
            outcome: None,
        }
    }

    /// Creates a new hand from a split with a single card.
    fn from_split(card: Card, bet: Option<usize>) -> Self {
        Self {
            cards: alloc::vec![card],
            bet,
            active: true,
            from_split: true,
            outcome: None,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Deals the initial `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::AlreadyDealt`] if the hand already holds cards, or
    /// the draw error if the source runs out.
    pub fn deal<S: DrawSource + ?Sized>(
        &mut self,
        source: &mut S,
        count: usize,
    ) -> Result<(), DealError> {
        if !self.cards.is_empty() {
            return Err(DealError::AlreadyDealt);
        }

        for _ in 0..count {
            self.cards.push(source.draw()?);
        }
        Ok(())
    }

    /// Draws one card into the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is finished or the source is empty.
    pub fn hit<S: DrawSource + ?Sized>(&mut self, source: &mut S) -> Result<Card, ActionError> {
        if !self.active {
            return Err(ActionError::HandNotActive);
        }

        let card = source.draw()?;
        self.cards.push(card);
        Ok(card)
    }

    /// Stops the hand from taking further actions.
    pub const fn finish(&mut self) {
        self.active = false;
    }

    /// Splits a pair into two hands, returning the new sibling.
    ///
    /// The second card moves to a new hand with the same bet, both hands are
    /// marked as coming from a split and each draws one card. Split aces
    /// finish immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSplit`] unless the hand is exactly two
    /// cards of equal rank, or the draw error if the source runs out.
    pub fn split<S: DrawSource + ?Sized>(&mut self, source: &mut S) -> Result<Self, ActionError> {
        if !self.active {
            return Err(ActionError::HandNotActive);
        }
        if !self.can_split() {
            return Err(ActionError::CannotSplit);
        }

        // Both draws happen before the pair is broken up.
        let first = source.draw()?;
        let second = source.draw()?;

        let Some(split_card) = self.cards.pop() else {
            return Err(ActionError::CannotSplit);
        };
        let mut sibling = Self::from_split(split_card, self.bet);
        self.from_split = true;

        self.cards.push(first);
        sibling.cards.push(second);

        if split_card.rank == Rank::Ace {
            self.finish();
            sibling.finish();
        }

        debug!("Split into {} and {}", self, sibling);
        Ok(sibling)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, the dealer's visible card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the bet amount, `None` for the dealer.
    #[must_use]
    pub const fn bet(&self) -> Option<usize> {
        self.bet
    }

    /// Returns whether the hand is still taking actions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns the resolved outcome, if any.
    #[must_use]
    pub const fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }

    /// Records the outcome. Only the first outcome is kept.
    pub(crate) const fn set_outcome(&mut self, outcome: HandOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }

    /// Returns every total the hand can represent.
    #[must_use]
    pub fn values(&self) -> Values {
        self.cards
            .iter()
            .fold(Values::zero(), |acc, card| acc.combine(&Values::from_rank(card.rank)))
    }

    /// Returns the best total that does not bust, `None` if the hand is bust.
    #[must_use]
    pub fn best_value(&self) -> Option<u16> {
        self.values().best_eligible()
    }

    /// Returns whether the hand is two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == INITIAL_CARDS && self.best_value() == Some(BLACKJACK)
    }

    /// Returns whether every interpretation of the hand exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.values().min().is_some_and(|value| value > BLACKJACK)
    }

    /// Returns whether the hand is a pair that can be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank == b.rank)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders the hand.
    ///
    /// The full form shows every card and the totals that do not bust, or all
    /// totals when the hand is bust. The masked form shows only the first card
    /// and its own values.
    #[must_use]
    pub fn show(&self, masked: bool) -> String {
        if masked {
            if let Some(card) = self.cards.first() {
                return format!("[{card} ??] {}", Values::from_rank(card.rank));
            }
        }

        let faces = self
            .cards
            .iter()
            .map(|card| format!("{card}"))
            .collect::<Vec<_>>()
            .join(" ");

        let values = self.values();
        let eligible = values.eligible();
        if eligible.is_empty() {
            format!("[{faces}] {values}")
        } else {
            format!("[{faces}] {eligible}")
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show(false))
    }
}
