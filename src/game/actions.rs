use alloc::vec::Vec;

use log::debug;

use crate::error::ActionError;
use crate::rules::{PlayerAction, apply_action, player_options};

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, player_id: u8, hand_index: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if !self.players.contains_key(&player_id) {
            return Err(ActionError::PlayerNotFound);
        }

        if !self.is_player_turn(player_id, hand_index) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Returns the legal actions for the player's hand whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not the
    /// player's turn, or the player or hand cannot be found.
    pub fn legal_actions(
        &self,
        player_id: u8,
        hand_index: usize,
    ) -> Result<Vec<PlayerAction>, ActionError> {
        self.ensure_player_turn(player_id, hand_index)?;

        let player = self
            .players
            .get(&player_id)
            .ok_or(ActionError::PlayerNotFound)?;
        let hand = player
            .hands
            .get(hand_index)
            .ok_or(ActionError::HandNotFound)?;

        if !hand.is_active() {
            return Err(ActionError::HandNotActive);
        }

        let up_card = self.dealer_hand.up_card().ok_or(ActionError::InvalidState)?;
        Ok(player_options(hand, up_card, player.money))
    }

    /// Takes `action` on the player's hand whose turn it is.
    ///
    /// A split inserts the new hand directly after the one it came from. Once
    /// the hand is finished the turn moves on, and after the last hand the game
    /// moves to the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not the
    /// player's turn, the player or hand cannot be found, the hand is not
    /// active, the action is not one of the hand's options, or the shoe is
    /// empty.
    pub fn act(
        &mut self,
        player_id: u8,
        hand_index: usize,
        action: PlayerAction,
    ) -> Result<(), ActionError> {
        if !self.legal_actions(player_id, hand_index)?.contains(&action) {
            return Err(ActionError::NotAllowed);
        }

        let hands = &mut self
            .players
            .get_mut(&player_id)
            .ok_or(ActionError::PlayerNotFound)?
            .hands;
        let hand = hands
            .get_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?;

        debug!("Player {player_id} hand {hand_index}: {action} on {hand}");
        if let Some(sibling) = apply_action(hand, action, &mut self.shoe)? {
            hands.insert(hand_index + 1, sibling);
        }

        self.advance_to_next_active_hand();
        Ok(())
    }

    /// Checks if it's the specified player's turn on the specified hand.
    fn is_player_turn(&self, player_id: u8, hand_index: usize) -> bool {
        self.betting_order
            .get(self.current_turn.player_index)
            .is_some_and(|&current| {
                current == player_id && self.current_turn.hand_index == hand_index
            })
    }

    /// Moves the turn to the next hand that still has a decision to make.
    ///
    /// Hands left without a legal action (bust, or blackjack against a
    /// non-ace) are finished on the way. When no hand is left the game moves
    /// to the dealer's turn.
    pub(super) fn advance_to_next_active_hand(&mut self) {
        let up_card = self.dealer_hand.up_card().copied();

        while let Some(player_id) = self.betting_order.get(self.current_turn.player_index) {
            let hand_index = self.current_turn.hand_index;
            let seat = self.players.get_mut(player_id).and_then(|player| {
                let money = player.money;
                player.hands.get_mut(hand_index).map(|hand| (money, hand))
            });

            let Some((money, hand)) = seat else {
                // Move to next player
                self.current_turn.player_index += 1;
                self.current_turn.hand_index = 0;
                continue;
            };

            if hand.is_active()
                && up_card.is_some_and(|up| player_options(hand, &up, money).is_empty())
            {
                hand.finish();
            }

            if hand.is_active() {
                return;
            }

            self.current_turn.hand_index += 1;
        }

        self.state = GameState::DealerTurn;
    }
}
