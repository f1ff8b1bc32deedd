//! Whole-table game state: every seat's hand plus whose turn it is

use super::cards::Card;
use super::error::SolverError;
use super::hands::Hand;
use super::trick::Trick;
use super::types::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    hands: [Hand; NUM_SEATS],
    turn: Seat,
}

impl Position {
    /// Create from hands in `Seat::ALL` order
    pub fn new(hands: [Hand; NUM_SEATS], turn: Seat) -> Self {
        Position { hands, turn }
    }

    /// Create from a (seat, hand) mapping; seats not mentioned hold nothing
    pub fn from_seats<I: IntoIterator<Item = (Seat, Hand)>>(hands: I, turn: Seat) -> Self {
        let mut position = Position::empty(turn);
        for (seat, hand) in hands {
            position.hands[seat.index()] = hand;
        }
        position
    }

    pub fn empty(turn: Seat) -> Self {
        Position {
            hands: [Hand::new(); NUM_SEATS],
            turn,
        }
    }

    #[inline]
    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    #[inline]
    pub fn turn(&self) -> Seat {
        self.turn
    }

    /// Terminal once every hand is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hands.iter().all(Hand::is_empty)
    }

    /// Total cards left on the table
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum()
    }

    /// All (seat, card) pairs still held
    pub fn cards(&self) -> impl Iterator<Item = (Seat, Card)> + '_ {
        Seat::ALL
            .iter()
            .flat_map(move |&seat| self.hand(seat).cards().map(move |card| (seat, card)))
    }

    /// Memoization key; equal keys mean interchangeable positions
    pub fn key(&self) -> PositionKey {
        let mut stacks = [[0u16; NUM_SUITS]; NUM_SEATS];
        for (seat_stacks, hand) in stacks.iter_mut().zip(self.hands.iter()) {
            for (bits, suit) in seat_stacks.iter_mut().zip(Suit::ALL) {
                *bits = hand.suit(suit).bits();
            }
        }
        PositionKey {
            turn: self.turn,
            stacks,
        }
    }

    /// The successor position after `trick`; the winner leads next
    ///
    /// The trick's cards are matched to seats in cycle order from the current turn.
    pub fn play(&self, trick: &Trick) -> Result<Position, SolverError> {
        if trick.leader() != self.turn {
            return Err(SolverError::StateInvariantViolation(format!(
                "trick led by {} but it is {}'s turn",
                trick.leader(),
                self.turn
            )));
        }
        let mut hands = self.hands;
        for (seat, card) in seats_from(self.turn).zip(trick.cards().iter()) {
            hands[seat.index()] = hands[seat.index()].remove(*card)?;
        }
        Ok(Position {
            hands,
            turn: trick.winner(),
        })
    }
}

impl std::ops::Index<Seat> for Position {
    type Output = Hand;

    #[inline]
    fn index(&self, seat: Seat) -> &Self::Output {
        &self.hands[seat.index()]
    }
}

/// Canonical string form of the position
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Turn plus per-seat, per-suit rank bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    turn: Seat,
    stacks: [[u16; NUM_SUITS]; NUM_SEATS],
}

/// "South:78|9||A:...:..." - seats in `Seat::ALL` order, suits in `Suit::ALL` order
impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.turn)?;
        for seat_stacks in &self.stacks {
            write!(f, ":")?;
            for (i, &bits) in seat_stacks.iter().enumerate() {
                if i > 0 {
                    write!(f, "|")?;
                }
                for offset in 0..SUIT_SIZE as u32 {
                    if bits & (1 << offset) != 0 {
                        write!(f, "{}", Rank::from_offset(offset).to_char())?;
                    }
                }
            }
        }
        Ok(())
    }
}
