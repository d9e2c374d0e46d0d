use core::cmp::Ordering;

use crate::hand::Hand;
use crate::result::HandOutcome;

/// Resolves a finished player hand against the finished dealer hand.
///
/// Bust and blackjack are checked before totals are compared: a player bust
/// loses, a dealer bust wins, and a dealer blackjack beats everything except
/// another blackjack.
#[must_use]
pub fn hand_outcome(player: &Hand, dealer: &Hand) -> HandOutcome {
    // A hand has no best total exactly when it is bust.
    let Some(player_value) = player.best_value() else {
        return HandOutcome::Lose;
    };
    let Some(dealer_value) = dealer.best_value() else {
        return HandOutcome::Win;
    };

    if dealer.is_blackjack() {
        return if player.is_blackjack() {
            HandOutcome::Draw
        } else {
            HandOutcome::Lose
        };
    }

    match player_value.cmp(&dealer_value) {
        Ordering::Greater => HandOutcome::Win,
        Ordering::Equal => HandOutcome::Draw,
        Ordering::Less => HandOutcome::Lose,
    }
}
