//! One player's hand - one `Stack` per suit, no heap allocation

use super::cards::*;
use super::error::SolverError;
use super::types::*;

/// Cards held by one seat, a stack for every suit (possibly empty)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand {
    stacks: [Stack; NUM_SUITS],
}

impl Hand {
    /// Create an empty hand
    #[inline]
    pub const fn new() -> Self {
        Hand {
            stacks: [Stack::new(); NUM_SUITS],
        }
    }

    /// Create from stacks in `Suit::ALL` order
    #[inline]
    pub const fn from_stacks(stacks: [Stack; NUM_SUITS]) -> Self {
        Hand { stacks }
    }

    /// Create from a (suit, stack) mapping; suits not mentioned are empty
    pub fn from_suits<I: IntoIterator<Item = (Suit, Stack)>>(suits: I) -> Self {
        let mut stacks = [Stack::new(); NUM_SUITS];
        for (suit, stack) in suits {
            stacks[suit.index()] = stack;
        }
        Hand { stacks }
    }

    /// Create from individual cards
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let mut stacks = [Stack::new(); NUM_SUITS];
        for card in cards {
            stacks[card.suit.index()] = stacks[card.suit.index()].with(card.rank);
        }
        Hand { stacks }
    }

    /// Get the stack for a suit
    #[inline]
    pub fn suit(&self, suit: Suit) -> Stack {
        self.stacks[suit.index()]
    }

    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.suit(card.suit).contains(card.rank)
    }

    /// Count number of cards
    #[inline]
    pub fn len(&self) -> usize {
        self.stacks.iter().map(Stack::len).sum()
    }

    /// True when every suit is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(Stack::is_empty)
    }

    /// New hand without `card`; the other suits are carried over as is
    pub fn remove(&self, card: Card) -> Result<Hand, SolverError> {
        let stack = self
            .suit(card.suit)
            .remove(card.rank)
            .map_err(|_| SolverError::NotFound(card))?;
        let mut stacks = self.stacks;
        stacks[card.suit.index()] = stack;
        Ok(Hand { stacks })
    }

    /// Keep only the run starts of every suit
    pub fn run_starts(&self) -> Hand {
        Hand {
            stacks: self.stacks.map(|stack| stack.run_starts()),
        }
    }

    /// Keep only the given suit
    pub fn only(&self, suit: Suit) -> Hand {
        let mut hand = Hand::new();
        hand.stacks[suit.index()] = self.suit(suit);
        hand
    }

    /// Iterate over cards in suit order, lowest rank first within a suit
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Suit::ALL
            .iter()
            .flat_map(move |&suit| self.suit(suit).iter().map(move |rank| Card::new(suit, rank)))
    }
}

impl std::fmt::Debug for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hand(")?;
        for (i, suit) in Suit::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            for rank in self.suit(*suit) {
                write!(f, "{}", rank.to_char())?;
            }
        }
        write!(f, ")")
    }
}

/// One line per suit, e.g. "♠: 7 10 Q"
impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", suit, self.suit(*suit))?;
        }
        Ok(())
    }
}
