extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, INITIAL_CARDS};
use crate::shoe::DrawSource;

/// An action a player can take on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Draw a card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Draw exactly one card, then stand.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
    /// Take insurance against a dealer ace; ends the hand.
    TakeInsurance,
}

impl PlayerAction {
    /// All actions, in the order they are offered.
    pub const ALL: [Self; 5] = [
        Self::Hit,
        Self::Stand,
        Self::DoubleDown,
        Self::Split,
        Self::TakeInsurance,
    ];

    /// Returns the short input key of the action.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hit => "h",
            Self::Stand => "s",
            Self::DoubleDown => "d",
            Self::Split => "sp",
            Self::TakeInsurance => "t",
        }
    }

    /// Returns the action for an input key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "Double down",
            Self::Split => "Split",
            Self::TakeInsurance => "Take insurance",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.key(), self.label())
    }
}

/// Returns whether `funds` cover `numerator / 2` times `bet`.
fn covers(funds: isize, bet: usize, numerator: i128) -> bool {
    funds as i128 * 2 >= bet as i128 * numerator
}

/// Returns the legal actions for a player hand.
///
/// A bust hand has no actions, and neither does a blackjack unless the dealer
/// shows an ace. Otherwise hit and stand are always offered and double down,
/// split and insurance are each gated on the hand shape and on `funds`.
///
/// ```
/// use bjrules::{Card, Hand, PlayerAction, Rank, Suit, player_options};
///
/// let mut hand = Hand::new(10);
/// hand.add_card(Card::new(Suit::Clubs, Rank::Eight));
/// hand.add_card(Card::new(Suit::Hearts, Rank::Eight));
/// let dealer_up = Card::new(Suit::Spades, Rank::Six);
///
/// assert_eq!(
///     player_options(&hand, &dealer_up, 100),
///     [
///         PlayerAction::Hit,
///         PlayerAction::Stand,
///         PlayerAction::DoubleDown,
///         PlayerAction::Split,
///     ]
/// );
/// ```
#[must_use]
pub fn player_options(hand: &Hand, dealer_up: &Card, funds: isize) -> Vec<PlayerAction> {
    let dealer_has_ace = dealer_up.is_ace();

    if hand.is_bust() || (hand.is_blackjack() && !dealer_has_ace) {
        return Vec::new();
    }

    let bet = hand.bet().unwrap_or(0);
    let two_cards = hand.len() == INITIAL_CARDS;

    let mut options = alloc::vec![PlayerAction::Hit, PlayerAction::Stand];

    if two_cards && covers(funds, bet, 4) {
        options.push(PlayerAction::DoubleDown);
    }

    if hand.can_split() && covers(funds, bet, 4) {
        options.push(PlayerAction::Split);
    }

    if two_cards && dealer_has_ace && covers(funds, bet, 3) {
        options.push(PlayerAction::TakeInsurance);
    }

    options
}

/// Applies `action` to `hand`, drawing from `source` as needed.
///
/// Returns the new sibling hand when the action is a split.
///
/// # Errors
///
/// Returns an error if the hand is not active, a split is attempted on
/// anything but a pair, or the source runs out of cards.
pub fn apply_action<S: DrawSource + ?Sized>(
    hand: &mut Hand,
    action: PlayerAction,
    source: &mut S,
) -> Result<Option<Hand>, ActionError> {
    if !hand.is_active() {
        return Err(ActionError::HandNotActive);
    }

    match action {
        PlayerAction::Hit => {
            hand.hit(source)?;
        }
        PlayerAction::Stand | PlayerAction::TakeInsurance => hand.finish(),
        PlayerAction::DoubleDown => {
            hand.hit(source)?;
            hand.finish();
        }
        PlayerAction::Split => return hand.split(source).map(Some),
    }

    Ok(None)
}
