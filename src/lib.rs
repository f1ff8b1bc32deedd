//! Preference Double-Dummy Solver
//!
//! Works out how many tricks South can force in a three-handed trick-taking
//! game (32-card deck, East/West/South) when every hand is visible and all
//! seats play perfectly, with an optional trump suit and an optional misère
//! objective in which South tries to take as few tricks as possible.
//!
//! The algorithm uses:
//! - Exhaustive minimax over whole tricks
//! - A memo table keyed by the full position
//! - Run compression: only the lowest card of a run of adjacent ranks is searched
//!
//! # Example
//!
//! ```
//! use pref_solver::{Analyzer, Card, Hand, Position, Seat};
//!
//! let hand = |cards: &[&str]| {
//!     Hand::from_cards(cards.iter().map(|c| c.parse::<Card>().unwrap()))
//! };
//! let position = Position::new(
//!     [hand(&["♠9", "♠10"]), hand(&["♠7", "♠8"]), hand(&["♠K", "♠A"])],
//!     Seat::South,
//! );
//!
//! let mut analyzer = Analyzer::new(None, false);
//! let result = analyzer.analyze(&position).unwrap();
//! assert_eq!(result.num_tricks, 2);
//! ```

mod analyzer;
pub mod cards;
mod error;
mod hands;
pub mod play;
mod position;
mod trick;
pub mod types;

pub use analyzer::{AnalysisResult, Analyzer, AnalyzerStats, Goal};
pub use cards::{Card, Stack};
pub use error::SolverError;
pub use hands::Hand;
pub use position::{Position, PositionKey};
pub use trick::{beats, suit_level, PartialTrick, Trick};
pub use types::{next_seat, seats_from, Rank, Seat, Suit};
pub use types::{ACE, DECK_SIZE, MIN_RANK, NUM_SEATS, NUM_SUITS, SUIT_SIZE};
