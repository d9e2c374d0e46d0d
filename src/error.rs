//! Error types for game operations.

use thiserror::Error;

/// Errors reported by a draw source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
    /// The requested card is not in the shoe.
    #[error("requested card is not in the shoe")]
    CardNotFound,
}

/// Errors that can occur when joining a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Every player ID is taken.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount is below the table minimum.
    #[error("bet amount is below the table minimum")]
    BelowMinimum,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The hand already holds cards.
    #[error("hand has already been dealt to")]
    AlreadyDealt,
    /// No players have placed bets.
    #[error("no players have placed bets")]
    NoBets,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
    /// The draw source failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// The action is not among the hand's legal options.
    #[error("action is not allowed for this hand")]
    NotAllowed,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The draw source failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The dealer does not hold exactly the two initial cards.
    #[error("dealer hand must hold exactly two cards before playing")]
    DealerNotDealt,
    /// A hand is still taking actions.
    #[error("a hand is still in play")]
    HandsInPlay,
    /// The draw source failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Errors that can occur while parsing a card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The identifier is not exactly two characters.
    #[error("card identifier must be two characters")]
    InvalidLength,
    /// Unknown rank character.
    #[error("'{0}' is not a valid rank")]
    InvalidRank(char),
    /// Unknown suit character.
    #[error("'{0}' is not a valid suit")]
    InvalidSuit(char),
}
