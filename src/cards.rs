//! Cards and per-suit rank sets
//!
//! A `Stack` holds the ranks of one suit within one hand as a bitboard:
//! bit 0 = `MIN_RANK`, bit `SUIT_SIZE - 1` = Ace. Stacks are `Copy` values,
//! so every removal produces a new stack and leaves the source stack untouched.

use super::error::SolverError;
use super::types::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    /// Build a card from separate suit and rank tokens
    pub fn from_tokens(suit: &str, rank: &str) -> Result<Self, SolverError> {
        Ok(Card::new(Suit::from_token(suit)?, Rank::from_token(rank)?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses the suit-first form, e.g. "♠10" or "HA"
impl FromStr for Card {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next()
            .ok_or_else(|| SolverError::InvalidSuit(s.to_string()))?;
        Card::from_tokens(suit.encode_utf8(&mut [0; 4]), chars.as_str())
    }
}

/// Ascending, duplicate-free set of ranks of one suit
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stack {
    bits: u16,
}

impl Stack {
    #[inline]
    pub const fn new() -> Self {
        Stack { bits: 0 }
    }

    /// Build from ranks; order and duplicates are irrelevant to the set
    pub fn from_ranks<I: IntoIterator<Item = Rank>>(ranks: I) -> Self {
        let bits = ranks
            .into_iter()
            .fold(0u16, |bits, rank| bits | (1 << rank.offset()));
        Stack { bits }
    }

    #[inline]
    pub fn bits(&self) -> u16 {
        self.bits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn contains(&self, rank: Rank) -> bool {
        self.bits & (1 << rank.offset()) != 0
    }

    /// New stack without `rank`
    pub fn remove(&self, rank: Rank) -> Result<Stack, SolverError> {
        if !self.contains(rank) {
            return Err(SolverError::RankNotFound(rank));
        }
        Ok(Stack {
            bits: self.bits & !(1 << rank.offset()),
        })
    }

    /// New stack with `rank` added
    pub fn with(&self, rank: Rank) -> Stack {
        Stack {
            bits: self.bits | (1 << rank.offset()),
        }
    }

    pub fn lowest(&self) -> Option<Rank> {
        self.iter().next()
    }

    pub fn highest(&self) -> Option<Rank> {
        (!self.is_empty()).then(|| Rank::from_offset(15 - self.bits.leading_zeros()))
    }

    /// Lowest rank of every maximal run of adjacent ranks
    ///
    /// {7, 8, 9, J} -> {7, J}
    #[inline]
    pub fn run_starts(&self) -> Stack {
        Stack {
            bits: self.bits & !(self.bits << 1),
        }
    }

    /// Iterate over ranks, lowest first
    pub fn iter(&self) -> StackIter {
        StackIter { bits: self.bits }
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack(")?;
        for rank in self.iter() {
            write!(f, "{}", rank.to_char())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

/// Iterator over the ranks of a stack, lowest first
pub struct StackIter {
    bits: u16,
}

impl Iterator for StackIter {
    type Item = Rank;

    #[inline]
    fn next(&mut self) -> Option<Rank> {
        if self.bits == 0 {
            None
        } else {
            let offset = self.bits.trailing_zeros();
            self.bits &= self.bits - 1; // Clear lowest set bit
            Some(Rank::from_offset(offset))
        }
    }
}

impl IntoIterator for Stack {
    type Item = Rank;
    type IntoIter = StackIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Rank> for Stack {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        Stack::from_ranks(iter)
    }
}
