//! Game engine and round management.

use alloc::vec::Vec;
use core::cmp::Ordering;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use log::info;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::{BetError, JoinError, ReshuffleError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{GameState, TurnPosition};

/// A seated player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Bankroll, changed only by settlement. Losses may take it below zero.
    pub money: isize,
    /// Hands for the current round (several after a split).
    pub hands: Vec<Hand>,
}

/// A blackjack table that runs rounds for its players.
///
/// The game owns the shoe, the players and the dealer's hand. Every operation
/// takes `&mut self`, so a round has exactly one driver.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Next player ID to assign.
    next_id: u8,
    /// Seated player IDs, in seating order.
    seats: Vec<u8>,
    /// Players by ID.
    players: HashMap<u8, Player>,
    /// Dealer's hand.
    dealer_hand: Hand,
    /// Players who bet this round, in seating order.
    betting_order: Vec<u8>,
    /// Current turn position.
    current_turn: TurnPosition,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForPlayers);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed);

        Self {
            shoe,
            options,
            state: GameState::WaitingForPlayers,
            next_id: 0,
            seats: Vec::new(),
            players: HashMap::new(),
            dealer_hand: Hand::dealer(),
            betting_order: Vec::new(),
            current_turn: TurnPosition::default(),
        }
    }

    /// Reshuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress (not in `WaitingForPlayers`
    /// or `Betting` state).
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state != GameState::WaitingForPlayers && self.state != GameState::Betting {
            return Err(ReshuffleError::InvalidState);
        }

        self.shoe.reshuffle();
        info!("Shoe reshuffled, {} cards", self.shoe.len());
        Ok(())
    }

    /// Returns whether the shoe needs reshuffling based on penetration.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.shoe.needs_reshuffle(self.options.penetration)
    }

    /// Checks penetration and reshuffles if needed.
    ///
    /// This should be called at the start of a new round (before betting or
    /// dealing). Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Joins the game with the specified money amount.
    ///
    /// Returns the assigned player ID. IDs of players who left are reused
    /// once the counter wraps.
    ///
    /// # Errors
    ///
    /// Returns an error if every player ID is taken.
    pub fn join(&mut self, money: isize) -> Result<u8, JoinError> {
        let id = (0..=u8::MAX)
            .map(|offset| self.next_id.wrapping_add(offset))
            .find(|id| !self.players.contains_key(id))
            .ok_or(JoinError::TableFull)?;
        self.next_id = id.wrapping_add(1);
        self.seats.push(id);
        self.players.insert(
            id,
            Player {
                money,
                hands: Vec::new(),
            },
        );
        info!("Player {id} joined with {money}");
        Ok(id)
    }

    /// Leaves the game.
    ///
    /// Leaving during the player turn phase forfeits the player's hands and
    /// passes the turn on if it was theirs.
    pub fn leave(&mut self, player_id: u8) {
        self.seats.retain(|&id| id != player_id);
        if self.players.remove(&player_id).is_none() {
            return;
        }
        info!("Player {player_id} left");

        let Some(position) = self.betting_order.iter().position(|&id| id == player_id) else {
            return;
        };
        self.betting_order.remove(position);

        if self.state == GameState::PlayerTurn {
            match position.cmp(&self.current_turn.player_index) {
                Ordering::Less => self.current_turn.player_index -= 1,
                Ordering::Equal => self.current_turn.hand_index = 0,
                Ordering::Greater => {}
            }
            self.advance_to_next_active_hand();
        }
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Starts the betting phase.
    ///
    /// Hands left over from a settled round are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is waiting for players or the last
    /// round has been settled.
    pub fn start_betting(&mut self) -> Result<(), BetError> {
        if self.state != GameState::WaitingForPlayers && self.state != GameState::Settled {
            return Err(BetError::InvalidState);
        }

        self.reset_round();
        self.state = GameState::Betting;
        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current turn position.
    #[must_use]
    pub const fn current_turn(&self) -> TurnPosition {
        self.current_turn
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` outside the player turn phase.
    #[must_use]
    pub fn current_player(&self) -> Option<u8> {
        if self.state != GameState::PlayerTurn {
            return None;
        }
        self.betting_order
            .get(self.current_turn.player_index)
            .copied()
    }

    /// Returns the current money for the specified player.
    #[must_use]
    pub fn get_money(&self, player_id: u8) -> Option<isize> {
        self.players.get(&player_id).map(|player| player.money)
    }

    /// Returns the player's hands.
    ///
    /// Returns `None` if the player ID is not found.
    #[must_use]
    pub fn get_hands(&self, player_id: u8) -> Option<&[Hand]> {
        self.players
            .get(&player_id)
            .map(|player| player.hands.as_slice())
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Clears all hands (called at the end of a round).
    ///
    /// This also resets the turn position and returns the game to the
    /// `WaitingForPlayers` state.
    pub fn clear_round(&mut self) {
        self.reset_round();
        self.state = GameState::WaitingForPlayers;
    }

    /// Discards every hand and resets the turn cursor.
    fn reset_round(&mut self) {
        for player in self.players.values_mut() {
            player.hands.clear();
        }
        self.dealer_hand = Hand::dealer();
        self.betting_order.clear();
        self.current_turn = TurnPosition::default();
    }
}
