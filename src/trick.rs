//! Tricks and the trick-winning rule

use super::cards::Card;
use super::error::SolverError;
use super::types::*;
use std::fmt;

/// Strength class of a card relative to the led suit: trump 2, led suit 1, anything else 0
#[inline]
pub fn suit_level(card: Card, lead_suit: Suit, trump: Option<Suit>) -> u8 {
    if Some(card.suit) == trump {
        2
    } else if card.suit == lead_suit {
        1
    } else {
        0
    }
}

/// True if `challenger` takes over the trick from `incumbent`
///
/// Two level-0 cards tie, so a discard never displaces the current winner.
#[inline]
pub fn beats(challenger: Card, incumbent: Card, lead_suit: Suit, trump: Option<Suit>) -> bool {
    let challenger_level = suit_level(challenger, lead_suit, trump);
    let incumbent_level = suit_level(incumbent, lead_suit, trump);
    if challenger_level != incumbent_level {
        return challenger_level > incumbent_level;
    }
    challenger_level > 0 && challenger.rank > incumbent.rank
}

/// A completed trick: one card per seat in play order, plus the winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trick {
    leader: Seat,
    cards: [Card; NUM_SEATS],
    winner: Seat,
}

impl Trick {
    pub fn new(leader: Seat, cards: [Card; NUM_SEATS], winner: Seat) -> Self {
        Trick {
            leader,
            cards,
            winner,
        }
    }

    /// Build a trick and work out its winner
    pub fn resolve(leader: Seat, cards: [Card; NUM_SEATS], trump: Option<Suit>) -> Self {
        let lead_suit = cards[0].suit;
        let mut top = (leader, cards[0]);
        for (seat, &card) in seats_from(leader).zip(cards.iter()).skip(1) {
            if beats(card, top.1, lead_suit, trump) {
                top = (seat, card);
            }
        }
        Trick::new(leader, cards, top.0)
    }

    #[inline]
    pub fn leader(&self) -> Seat {
        self.leader
    }

    #[inline]
    pub fn winner(&self) -> Seat {
        self.winner
    }

    /// Cards in play order, starting with the lead
    #[inline]
    pub fn cards(&self) -> &[Card; NUM_SEATS] {
        &self.cards
    }

    #[inline]
    pub fn lead_suit(&self) -> Suit {
        self.cards[0].suit
    }

    /// (seat, card) pairs in play order
    pub fn plays(&self) -> impl Iterator<Item = (Seat, Card)> + '_ {
        seats_from(self.leader).zip(self.cards.iter().copied())
    }

    /// Card played by a given seat
    pub fn card_of(&self, seat: Seat) -> Card {
        let offset = (seat.index() + NUM_SEATS - self.leader.index()) % NUM_SEATS;
        self.cards[offset]
    }
}

/// "K♠ 9♠ 7♠ -> South"
impl fmt::Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{} ", card)?;
        }
        write!(f, "-> {}", self.winner)
    }
}

/// Cards committed so far to the trick being built, with the current winner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialTrick {
    leader: Seat,
    cards: [Option<Card>; NUM_SEATS],
    len: usize,
    top: Option<(Seat, Card)>,
}

impl PartialTrick {
    /// Create a new partial trick with no cards played
    pub fn new(leader: Seat) -> Self {
        PartialTrick {
            leader,
            cards: [None; NUM_SEATS],
            len: 0,
            top: None,
        }
    }

    #[inline]
    pub fn leader(&self) -> Seat {
        self.leader
    }

    /// Get the number of cards played
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == NUM_SEATS
    }

    /// Get the lead suit (suit of the first card played)
    #[inline]
    pub fn lead_suit(&self) -> Option<Suit> {
        self.cards[0].map(|card| card.suit)
    }

    /// Current winning seat and card
    #[inline]
    pub fn top(&self) -> Option<(Seat, Card)> {
        self.top
    }

    /// The trick after `seat` adds `card`; the first card always takes the lead
    pub fn push(&self, seat: Seat, card: Card, trump: Option<Suit>) -> Result<Self, SolverError> {
        if self.is_full() {
            return Err(SolverError::StateInvariantViolation(format!(
                "{} played {} to a trick that already has {} cards",
                seat, card, NUM_SEATS
            )));
        }
        let top = match (self.top, self.lead_suit()) {
            (Some((top_seat, top_card)), Some(lead_suit)) => {
                if beats(card, top_card, lead_suit, trump) {
                    (seat, card)
                } else {
                    (top_seat, top_card)
                }
            }
            _ => (seat, card),
        };
        let mut next = *self;
        next.cards[self.len] = Some(card);
        next.len += 1;
        next.top = Some(top);
        Ok(next)
    }

    /// Seal a full trick
    pub fn finish(&self) -> Result<Trick, SolverError> {
        let incomplete = || {
            SolverError::StateInvariantViolation(format!(
                "trick led by {} has {} of {} cards",
                self.leader, self.len, NUM_SEATS
            ))
        };
        let (winner, _) = self.top.ok_or_else(incomplete)?;
        let mut cards = [Card::new(Suit::Spades, Rank::MIN); NUM_SEATS];
        for (slot, card) in cards.iter_mut().zip(self.cards.iter()) {
            *slot = card.ok_or_else(incomplete)?;
        }
        Ok(Trick::new(self.leader, cards, winner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_suit_level() {
        assert_eq!(suit_level(card("♥7"), Suit::Spades, Some(Suit::Hearts)), 2);
        assert_eq!(suit_level(card("♠7"), Suit::Spades, Some(Suit::Hearts)), 1);
        assert_eq!(suit_level(card("♣A"), Suit::Spades, Some(Suit::Hearts)), 0);
        assert_eq!(suit_level(card("♥7"), Suit::Hearts, Some(Suit::Hearts)), 2);
        assert_eq!(suit_level(card("♥7"), Suit::Spades, None), 0);
    }

    #[test]
    fn test_beats() {
        let led = Suit::Spades;
        assert!(beats(card("♠8"), card("♠7"), led, None));
        assert!(!beats(card("♠7"), card("♠8"), led, None));
        // Off-suit cards never win, and never displace each other
        assert!(!beats(card("♣A"), card("♠7"), led, None));
        assert!(!beats(card("♣A"), card("♦7"), led, None));
        // Any trump beats the led suit, higher trump beats lower
        assert!(beats(card("♥7"), card("♠A"), led, Some(Suit::Hearts)));
        assert!(beats(card("♥8"), card("♥7"), led, Some(Suit::Hearts)));
        assert!(!beats(card("♠A"), card("♥7"), led, Some(Suit::Hearts)));
    }

    #[test]
    fn test_resolve_no_trump() {
        let trick = Trick::resolve(Seat::South, [card("♠K"), card("♠A"), card("♣A")], None);
        assert_eq!(trick.winner(), Seat::East);
        assert_eq!(trick.lead_suit(), Suit::Spades);
        assert_eq!(trick.card_of(Seat::West), card("♣A"));
        assert_eq!(trick.card_of(Seat::South), card("♠K"));
    }

    #[test]
    fn test_resolve_with_trump() {
        let cards = [card("♠A"), card("♥7"), card("♥8")];
        let trick = Trick::resolve(Seat::East, cards, Some(Suit::Hearts));
        assert_eq!(trick.winner(), Seat::South);
        let trick = Trick::resolve(Seat::East, cards, None);
        assert_eq!(trick.winner(), Seat::East);
    }

    #[test]
    fn test_plays_and_display() {
        let trick = Trick::resolve(Seat::West, [card("♦9"), card("♦10"), card("♦8")], None);
        let plays: Vec<_> = trick.plays().collect();
        assert_eq!(
            plays,
            vec![
                (Seat::West, card("♦9")),
                (Seat::South, card("♦10")),
                (Seat::East, card("♦8")),
            ]
        );
        assert_eq!(trick.to_string(), "9♦ 10♦ 8♦ -> South");
    }

    #[test]
    fn test_partial_trick_builder() {
        let partial = PartialTrick::new(Seat::East);
        assert!(partial.is_empty());
        assert_eq!(partial.lead_suit(), None);
        assert!(partial.finish().is_err());

        let partial = partial.push(Seat::East, card("♠9"), None).unwrap();
        assert_eq!(partial.top(), Some((Seat::East, card("♠9"))));
        assert_eq!(partial.lead_suit(), Some(Suit::Spades));

        let partial = partial.push(Seat::West, card("♣A"), None).unwrap();
        assert_eq!(partial.top(), Some((Seat::East, card("♠9"))));

        let partial = partial.push(Seat::South, card("♠10"), None).unwrap();
        assert!(partial.is_full());
        assert_eq!(partial.top(), Some((Seat::South, card("♠10"))));

        let trick = partial.finish().unwrap();
        assert_eq!(trick, Trick::resolve(Seat::East, *trick.cards(), None));
        assert_eq!(trick.winner(), Seat::South);

        assert!(matches!(
            partial.push(Seat::East, card("♠7"), None),
            Err(SolverError::StateInvariantViolation(_))
        ));
    }
}
