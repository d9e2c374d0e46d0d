use alloc::vec::Vec;

use log::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::Hand;
use crate::result::{HandResult, PlayerResult, RoundResult};
use crate::rules::{hand_outcome, play_dealer};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until the highest total of the hand reaches 17 or
    /// more.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state, a player hand
    /// is still in play, or the shoe is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let in_play = self
            .players
            .values()
            .flat_map(|player| &player.hands)
            .any(Hand::is_active);
        if in_play {
            return Err(ShowdownError::HandsInPlay);
        }

        let drawn = play_dealer(&mut self.dealer_hand, &mut self.shoe)?;
        info!("Dealer finishes with {}", self.dealer_hand);

        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Performs the showdown and settles every hand.
    ///
    /// This function:
    /// 1. Resolves each player hand against the dealer's hand
    /// 2. Records the outcome on the hand
    /// 3. Applies the outcome to the player's money
    /// 4. Returns detailed results for each player
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer = &self.dealer_hand;
        let mut player_results = Vec::new();

        for &player_id in &self.betting_order {
            let Some(player) = self.players.get_mut(&player_id) else {
                continue;
            };

            let mut hand_results = Vec::new();
            let mut net: isize = 0;

            for (hand_index, hand) in player.hands.iter_mut().enumerate() {
                let bet = hand.bet().unwrap_or(0);
                let outcome = hand_outcome(hand, dealer);
                hand.set_outcome(outcome);

                let delta = outcome.delta(bet);
                outcome.apply(&mut player.money, bet);
                net += delta;
                debug!("Player {player_id} hand {hand_index} {hand}: {outcome}");

                hand_results.push(HandResult {
                    hand_index,
                    outcome,
                    bet,
                    delta,
                    player_value: hand.best_value(),
                });
            }

            info!("Player {player_id} settles {net:+}, money {}", player.money);
            player_results.push(PlayerResult {
                player_id,
                hands: hand_results,
                net,
                money: player.money,
            });
        }

        self.state = GameState::Settled;

        Ok(RoundResult {
            players: player_results,
            dealer_value: dealer.best_value(),
            dealer_bust: dealer.is_bust(),
            dealer_blackjack: dealer.is_blackjack(),
        })
    }
}
