//! Legal-card generation with run compression
//!
//! Within a maximal run of adjacent ranks every card wins and loses against
//! exactly the same opposing cards, so only the lowest card of each run needs
//! to be searched.

use super::hands::Hand;
use super::types::*;

/// Get playable cards for a seat: follow suit, else trump, else anything
pub fn playable_cards(hand: &Hand, lead_suit: Option<Suit>, trump: Option<Suit>) -> Hand {
    let Some(suit) = lead_suit else {
        return *hand;
    };

    // Must follow suit if possible
    if !hand.suit(suit).is_empty() {
        return hand.only(suit);
    }

    // Must ruff when void in the led suit
    if let Some(trump) = trump {
        if !hand.suit(trump).is_empty() {
            return hand.only(trump);
        }
    }

    // Discard anything
    *hand
}

/// Candidate cards to search: the playable cards reduced to run starts per suit
#[inline]
pub fn candidate_cards(hand: &Hand, lead_suit: Option<Suit>, trump: Option<Suit>) -> Hand {
    playable_cards(hand, lead_suit, trump).run_starts()
}
