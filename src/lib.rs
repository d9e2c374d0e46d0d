//! Blackjack hand rules with optional `no_std` support.
//!
//! The rule engine in [`rules`] is a set of pure functions over [`Hand`]s:
//! ace-flexible [`Values`], the legal [`PlayerAction`]s for a hand, the
//! dealer's forced play and the [`HandOutcome`] of a finished hand. Cards are
//! drawn from any [`DrawSource`], usually a seeded [`Shoe`]. [`Game`] drives
//! those rules through betting, player turns, dealer play and settlement.
//!
//! # Example
//!
//! ```
//! use bjrules::{Card, Hand, HandOutcome, Rank, Suit, hand_outcome};
//!
//! let mut player = Hand::new(10);
//! player.add_card(Card::new(Suit::Clubs, Rank::Ten));
//! player.add_card(Card::new(Suit::Hearts, Rank::Ace));
//!
//! let mut dealer = Hand::dealer();
//! dealer.add_card(Card::new(Suit::Spades, Rank::Ten));
//! dealer.add_card(Card::new(Suit::Diamonds, Rank::Seven));
//!
//! assert!(player.is_blackjack());
//! assert_eq!(hand_outcome(&player, &dealer), HandOutcome::Win);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rules;
pub mod shoe;
pub mod values;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BetError, DealError, DrawError, JoinError, ParseCardError, ReshuffleError,
    ShowdownError,
};
pub use game::{Game, GameState, Player, TurnPosition};
pub use hand::{Hand, INITIAL_CARDS};
pub use options::GameOptions;
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use rules::{
    DEALER_STANDS_ON, PlayerAction, apply_action, hand_outcome, play_dealer, player_options,
};
pub use shoe::{DrawSource, Shoe};
pub use values::{BLACKJACK, Values};
