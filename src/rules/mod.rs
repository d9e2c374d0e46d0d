//! The pure blackjack rule engine.
//!
//! Nothing here owns state: every function works on the hands and draw source
//! it is handed. [`Game`](crate::Game) drives these functions through a round.

mod action;
mod dealer;
mod outcome;

pub use action::{PlayerAction, apply_action, player_options};
pub use dealer::{DEALER_STANDS_ON, play_dealer};
pub use outcome::hand_outcome;
