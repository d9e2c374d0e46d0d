use alloc::vec::Vec;

use log::info;

use crate::error::{BetError, DealError};
use crate::hand::{Hand, INITIAL_CARDS};

use super::{Game, GameState, TurnPosition};

impl Game {
    /// Places a bet for the specified player, opening their hand for the round.
    ///
    /// The stake is not taken from the bankroll up front; the bankroll only
    /// changes when the hand is settled. Betting again replaces the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the player cannot
    /// be found, the bet is zero or below the table minimum, or the player
    /// lacks funds.
    pub fn bet(&mut self, player_id: u8, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount < self.options.min_bet {
            return Err(BetError::BelowMinimum);
        }

        let player = self
            .players
            .get_mut(&player_id)
            .ok_or(BetError::PlayerNotFound)?;

        let covered = isize::try_from(amount).is_ok_and(|amount| player.money >= amount);
        if !covered {
            return Err(BetError::InsufficientFunds);
        }

        player.hands = alloc::vec![Hand::new(amount)];

        Ok(())
    }

    /// Returns the current bet for the specified player.
    #[must_use]
    pub fn get_bet(&self, player_id: u8) -> Option<usize> {
        self.players
            .get(&player_id)
            .and_then(|player| player.hands.first())
            .and_then(Hand::bet)
    }

    /// Deals the initial two cards to every bet hand, then to the dealer.
    ///
    /// Hands with no legal action (bust or blackjack against a non-ace) are
    /// finished straight away. If no hand is left to play the game moves on to
    /// the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bets have been
    /// placed, a bet hand already holds cards, or there are not enough cards in
    /// the shoe. No card is drawn when an error is returned.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        // Get player IDs who have bet (in order)
        let betting_players: Vec<u8> = self
            .seats
            .iter()
            .filter(|id| {
                self.players
                    .get(*id)
                    .is_some_and(|player| !player.hands.is_empty())
            })
            .copied()
            .collect();

        if betting_players.is_empty() {
            return Err(DealError::NoBets);
        }

        let dealt = betting_players.iter().any(|id| {
            self.players
                .get(id)
                .is_some_and(|player| player.hands.iter().any(|hand| !hand.is_empty()))
        });
        if dealt {
            return Err(DealError::AlreadyDealt);
        }

        let cards_needed = (betting_players.len() + 1) * INITIAL_CARDS;
        if self.shoe.len() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        self.dealer_hand = Hand::dealer();

        for player_id in &betting_players {
            if let Some(hand) = self
                .players
                .get_mut(player_id)
                .and_then(|player| player.hands.first_mut())
            {
                hand.deal(&mut self.shoe, INITIAL_CARDS)?;
            }
        }

        self.dealer_hand.deal(&mut self.shoe, INITIAL_CARDS)?;
        info!(
            "Dealt {} hand(s), dealer shows {}",
            betting_players.len(),
            self.dealer_hand.show(true)
        );

        self.betting_order = betting_players;
        self.current_turn = TurnPosition::default();
        self.state = GameState::PlayerTurn;

        // Skip hands with nothing to decide
        self.advance_to_next_active_hand();

        Ok(())
    }
}
