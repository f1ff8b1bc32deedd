//! Core type definitions: suits, ranks, seats and deck constants

use super::error::SolverError;
use std::fmt;
use std::str::FromStr;

pub const DECK_SIZE: usize = 32;
pub const NUM_SUITS: usize = 4;
pub const SUIT_SIZE: usize = DECK_SIZE / NUM_SUITS;
pub const ACE: u8 = 14;
pub const MIN_RANK: u8 = ACE + 1 - SUIT_SIZE as u8;
pub const NUM_SEATS: usize = 3;

// Stacks keep one bit per rank in a u16
const _: () = assert!(SUIT_SIZE <= 16);

/// Suits in their fixed enumeration (and display) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    Spades = 0,
    Clubs = 1,
    Diamonds = 2,
    Hearts = 3,
}

impl Suit {
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }

    /// Single letter (S, C, D, H)
    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
        }
    }

    /// Parse a suit symbol, letter or English name
    pub fn from_token(token: &str) -> Result<Suit, SolverError> {
        let trimmed = token.trim();
        let suit = match trimmed.to_ascii_lowercase().as_str() {
            "♠" | "s" | "spade" | "spades" => Suit::Spades,
            "♣" | "c" | "club" | "clubs" => Suit::Clubs,
            "♦" | "d" | "diamond" | "diamonds" => Suit::Diamonds,
            "♥" | "h" | "heart" | "hearts" => Suit::Hearts,
            _ => return Err(SolverError::InvalidSuit(token.to_string())),
        };
        Ok(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::from_token(s)
    }
}

/// Card rank in `MIN_RANK..=ACE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(ACE);
    pub const MIN: Rank = Rank(MIN_RANK);

    pub fn new(value: u8) -> Result<Rank, SolverError> {
        if (MIN_RANK..=ACE).contains(&value) {
            Ok(Rank(value))
        } else {
            Err(SolverError::InvalidRank(value.to_string()))
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Two ranks are adjacent iff their values differ by exactly one
    #[inline]
    pub fn is_adjacent(self, other: Rank) -> bool {
        self.0.abs_diff(other.0) == 1
    }

    /// Parse "7".."10", "T", "J", "Q", "K" or "A"
    pub fn from_token(token: &str) -> Result<Rank, SolverError> {
        let trimmed = token.trim();
        let value = match trimmed.to_ascii_uppercase().as_str() {
            "T" => 10,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            "A" => 14,
            digits => digits
                .parse::<u8>()
                .map_err(|_| SolverError::InvalidRank(token.to_string()))?,
        };
        Rank::new(value).map_err(|_| SolverError::InvalidRank(token.to_string()))
    }

    /// Single character form, 'T' for ten
    pub fn to_char(self) -> char {
        match self.0 {
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            14 => 'A',
            v => char::from(b'0' + v),
        }
    }

    /// All ranks, lowest first
    pub fn all() -> impl Iterator<Item = Rank> {
        (MIN_RANK..=ACE).map(Rank)
    }

    #[inline]
    pub(crate) fn offset(self) -> u32 {
        (self.0 - MIN_RANK) as u32
    }

    #[inline]
    pub(crate) fn from_offset(offset: u32) -> Rank {
        Rank(MIN_RANK + offset as u8)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            v if v <= 10 => write!(f, "{}", v),
            _ => write!(f, "{}", self.to_char()),
        }
    }
}

impl FromStr for Rank {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::from_token(s)
    }
}

/// Seats in their fixed cyclic order: East, West, South
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Seat {
    East = 0,
    West = 1,
    South = 2,
}

impl Seat {
    pub const ALL: [Seat; NUM_SEATS] = [Seat::East, Seat::West, Seat::South];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn next(self) -> Seat {
        next_seat(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::East => "East",
            Seat::West => "West",
            Seat::South => "South",
        }
    }

    pub fn from_token(token: &str) -> Result<Seat, SolverError> {
        let seat = match token.trim().to_ascii_lowercase().as_str() {
            "east" | "e" => Seat::East,
            "west" | "w" => Seat::West,
            "south" | "s" => Seat::South,
            _ => return Err(SolverError::InvalidSeat(token.to_string())),
        };
        Ok(seat)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Seat {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seat::from_token(s)
    }
}

/// Get next seat in the cycle
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    Seat::ALL[(seat.index() + 1) % NUM_SEATS]
}

/// The full seat cycle starting at `start`, each seat exactly once
pub fn seats_from(start: Seat) -> SeatCycle {
    SeatCycle {
        next: start,
        remaining: NUM_SEATS,
    }
}

#[derive(Debug, Clone)]
pub struct SeatCycle {
    next: Seat,
    remaining: usize,
}

impl Iterator for SeatCycle {
    type Item = Seat;

    fn next(&mut self) -> Option<Seat> {
        if self.remaining == 0 {
            return None;
        }
        let seat = self.next;
        self.next = next_seat(seat);
        self.remaining -= 1;
        Some(seat)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SeatCycle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_constants() {
        assert_eq!(SUIT_SIZE, 8);
        assert_eq!(MIN_RANK, 7);
        assert_eq!(Rank::all().count(), SUIT_SIZE);
    }

    #[test]
    fn test_next_seat() {
        assert_eq!(next_seat(Seat::East), Seat::West);
        assert_eq!(next_seat(Seat::West), Seat::South);
        assert_eq!(next_seat(Seat::South), Seat::East);
    }

    #[test]
    fn test_seats_from() {
        let seats: Vec<_> = seats_from(Seat::South).collect();
        assert_eq!(seats, vec![Seat::South, Seat::East, Seat::West]);
        assert_eq!(seats_from(Seat::West).len(), NUM_SEATS);
    }

    #[test]
    fn test_rank_tokens() {
        assert_eq!(Rank::from_token("7").unwrap().value(), 7);
        assert_eq!(Rank::from_token("10").unwrap().value(), 10);
        assert_eq!(Rank::from_token("t").unwrap().value(), 10);
        assert_eq!(Rank::from_token("A").unwrap(), Rank::ACE);
        assert_eq!(
            Rank::from_token("6"),
            Err(SolverError::InvalidRank("6".to_string()))
        );
        assert!(Rank::from_token("X").is_err());
        assert!(Rank::new(15).is_err());
    }

    #[test]
    fn test_rank_display() {
        let shown: Vec<String> = Rank::all().map(|r| r.to_string()).collect();
        assert_eq!(shown, ["7", "8", "9", "10", "J", "Q", "K", "A"]);
        assert_eq!(Rank::from_token("10").unwrap().to_char(), 'T');
    }

    #[test]
    fn test_rank_adjacency() {
        let nine = Rank::new(9).unwrap();
        assert!(nine.is_adjacent(Rank::new(10).unwrap()));
        assert!(nine.is_adjacent(Rank::new(8).unwrap()));
        assert!(!nine.is_adjacent(nine));
        assert!(!nine.is_adjacent(Rank::new(11).unwrap()));
    }

    #[test]
    fn test_suit_tokens() {
        assert_eq!(Suit::from_token("♠").unwrap(), Suit::Spades);
        assert_eq!(Suit::from_token("h").unwrap(), Suit::Hearts);
        assert_eq!("Diamonds".parse::<Suit>().unwrap(), Suit::Diamonds);
        assert_eq!(
            Suit::from_token("N"),
            Err(SolverError::InvalidSuit("N".to_string()))
        );
    }

    #[test]
    fn test_seat_tokens() {
        assert_eq!(Seat::from_token("South").unwrap(), Seat::South);
        assert_eq!(Seat::from_token("e").unwrap(), Seat::East);
        assert!(Seat::from_token("North").is_err());
    }
}
