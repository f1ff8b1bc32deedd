//! JSON deal description
//!
//! ```json
//! {
//!   "hands": {
//!     "East":  {"♠": [9, 10]},
//!     "West":  {"♠": ["7", "8"]},
//!     "South": {"♠": ["K", "A"]}
//!   },
//!   "turn": "South",
//!   "trump": null,
//!   "misere": false
//! }
//! ```
//!
//! Suits left out of a hand are empty.

use pref_solver::{Card, Hand, Position, Rank, Seat, SolverError, Stack, Suit, NUM_SEATS};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// A rank as written in the JSON: 7, "7", "10", "J", ...
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RankToken {
    Number(u8),
    Text(String),
}

impl RankToken {
    fn to_rank(&self) -> Result<Rank, SolverError> {
        match self {
            RankToken::Number(value) => Rank::new(*value),
            RankToken::Text(text) => Rank::from_token(text),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DealSpec {
    pub hands: BTreeMap<String, BTreeMap<String, Vec<RankToken>>>,
    pub turn: String,
    #[serde(default)]
    pub trump: Option<String>,
    #[serde(default)]
    pub misere: bool,
}

#[derive(Debug, Error)]
pub enum DealError {
    #[error("malformed deal JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Token(#[from] SolverError),
    #[error("{0} is dealt more than once")]
    Duplicate(Card),
    #[error("no hand given for {0}")]
    MissingSeat(Seat),
    #[error("hands differ in size: {0}")]
    UnevenHands(String),
}

/// A loaded deal: the starting position and the analysis parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub position: Position,
    pub trump: Option<Suit>,
    pub misere: bool,
}

impl Deal {
    pub fn from_json(text: &str) -> Result<Deal, DealError> {
        let spec: DealSpec = serde_json::from_str(text)?;
        spec.into_deal()
    }
}

impl DealSpec {
    pub fn into_deal(self) -> Result<Deal, DealError> {
        let mut seen: HashSet<Card> = HashSet::new();
        let mut hands: [Option<Hand>; NUM_SEATS] = [None; NUM_SEATS];

        for (seat_token, suits) in &self.hands {
            let seat = Seat::from_token(seat_token)?;
            let mut stacks = Vec::with_capacity(suits.len());
            for (suit_token, tokens) in suits {
                let suit = Suit::from_token(suit_token)?;
                let mut ranks = tokens
                    .iter()
                    .map(RankToken::to_rank)
                    .collect::<Result<Vec<Rank>, SolverError>>()?;
                for &rank in &ranks {
                    let card = Card::new(suit, rank);
                    if !seen.insert(card) {
                        return Err(DealError::Duplicate(card));
                    }
                }
                ranks.sort();
                stacks.push((suit, Stack::from_ranks(ranks)));
            }
            hands[seat.index()] = Some(Hand::from_suits(stacks));
        }

        let mut loaded = [Hand::new(); NUM_SEATS];
        for seat in Seat::ALL {
            loaded[seat.index()] = hands[seat.index()].ok_or(DealError::MissingSeat(seat))?;
        }
        if loaded.iter().any(|hand| hand.len() != loaded[0].len()) {
            let sizes: Vec<String> = Seat::ALL
                .iter()
                .map(|&seat| format!("{} {}", seat, loaded[seat.index()].len()))
                .collect();
            return Err(DealError::UnevenHands(sizes.join(", ")));
        }

        let trump = self.trump.as_deref().map(Suit::from_token).transpose()?;
        Ok(Deal {
            position: Position::new(loaded, Seat::from_token(&self.turn)?),
            trump,
            misere: self.misere,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "hands": {
            "East":  {"♠": [9, 10], "♣": [], "♦": [], "♥": []},
            "West":  {"♠": ["7", "8"]},
            "South": {"♠": ["A", "K"]}
        },
        "turn": "South"
    }"#;

    #[test]
    fn test_load_sample() {
        let deal = Deal::from_json(SAMPLE).unwrap();
        assert_eq!(deal.trump, None);
        assert!(!deal.misere);
        assert_eq!(deal.position.turn(), Seat::South);
        assert_eq!(deal.position.card_count(), 6);
        let south = deal.position[Seat::South];
        assert!(south.contains("♠K".parse().unwrap()));
        assert!(south.contains("♠A".parse().unwrap()));
    }

    #[test]
    fn test_trump_and_misere() {
        let text = SAMPLE.replace(r#""turn": "South""#, r#""turn": "East", "trump": "♥", "misere": true"#);
        let deal = Deal::from_json(&text).unwrap();
        assert_eq!(deal.trump, Some(Suit::Hearts));
        assert!(deal.misere);
        assert_eq!(deal.position.turn(), Seat::East);
    }

    #[test]
    fn test_rejects_bad_tokens() {
        let text = SAMPLE.replace("[9, 10]", "[6, 10]");
        assert!(matches!(
            Deal::from_json(&text),
            Err(DealError::Token(SolverError::InvalidRank(_)))
        ));

        let text = SAMPLE.replace("\"♣\": []", "\"X\": []");
        assert!(matches!(
            Deal::from_json(&text),
            Err(DealError::Token(SolverError::InvalidSuit(_)))
        ));

        let text = SAMPLE.replace("\"turn\": \"South\"", "\"turn\": \"North\"");
        assert!(matches!(
            Deal::from_json(&text),
            Err(DealError::Token(SolverError::InvalidSeat(_)))
        ));

        assert!(matches!(Deal::from_json("{"), Err(DealError::Json(_))));
    }

    #[test]
    fn test_rejects_bad_deals() {
        let text = SAMPLE.replace("[\"7\", \"8\"]", "[\"7\", \"9\"]");
        assert!(matches!(Deal::from_json(&text), Err(DealError::Duplicate(_))));

        let text = SAMPLE.replace("[\"7\", \"8\"]", "[\"7\"]");
        assert!(matches!(Deal::from_json(&text), Err(DealError::UnevenHands(_))));

        let text = SAMPLE.replace("\"West\"", "\"W\"").replace("\"South\":", "\"East\":");
        assert!(matches!(Deal::from_json(&text), Err(DealError::MissingSeat(Seat::South))));
    }
}
