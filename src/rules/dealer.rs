extern crate alloc;

use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::{Hand, INITIAL_CARDS};
use crate::shoe::DrawSource;

/// The dealer draws while the highest total is below this value.
pub const DEALER_STANDS_ON: u16 = 17;

/// Plays out the dealer's hand.
///
/// The dealer draws while the highest interpretation of the hand is below 17,
/// then finishes. Soft totals are not treated specially.
///
/// Returns the cards drawn.
///
/// # Errors
///
/// Returns [`ShowdownError::DealerNotDealt`] unless the hand holds exactly the
/// two initial cards, or the draw error if the source runs out.
pub fn play_dealer<S: DrawSource + ?Sized>(
    hand: &mut Hand,
    source: &mut S,
) -> Result<Vec<Card>, ShowdownError> {
    if hand.len() != INITIAL_CARDS {
        return Err(ShowdownError::DealerNotDealt);
    }

    let mut drawn = Vec::new();
    while hand.values().max().is_some_and(|value| value < DEALER_STANDS_ON) {
        let card = source.draw()?;
        hand.add_card(card);
        debug!("Dealer draws {card}, hand {hand}");
        drawn.push(card);
    }

    hand.finish();
    Ok(drawn)
}
