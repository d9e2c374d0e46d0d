//! Hand outcomes, settlement and round results.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Result of a single finished hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player wins the bet.
    Win,
    /// Player loses the bet.
    Lose,
    /// Push, the bet is returned.
    Draw,
}

impl HandOutcome {
    /// Returns the bankroll change this outcome produces for `bet`.
    ///
    /// ```
    /// use bjrules::HandOutcome;
    ///
    /// assert_eq!(HandOutcome::Win.delta(10), 10);
    /// assert_eq!(HandOutcome::Lose.delta(10), -10);
    /// assert_eq!(HandOutcome::Draw.delta(10), 0);
    /// ```
    #[must_use]
    pub const fn delta(self, bet: usize) -> isize {
        #[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
        let bet = bet as isize;
        match self {
            Self::Win => bet,
            Self::Lose => -bet,
            Self::Draw => 0,
        }
    }

    /// Applies the outcome of a hand staked with `bet` to `money`.
    ///
    /// Losses are applied in full, so the bankroll can go negative.
    pub const fn apply(self, money: &mut isize, bet: usize) {
        *money += self.delta(bet);
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Draw => "draw",
        })
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand.
    pub bet: usize,
    /// The bankroll change applied for this hand.
    pub delta: isize,
    /// The player's best total, `None` if bust.
    pub player_value: Option<u16>,
}

/// Result for a single player after showdown.
#[derive(Debug, Clone)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: u8,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Bankroll after settlement.
    pub money: isize,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Results for each player.
    pub players: Vec<PlayerResult>,
    /// The dealer's best total, `None` if bust.
    pub dealer_value: Option<u16>,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
