//! Error type shared by the data model and the analyzer

use super::cards::Card;
use super::position::Position;
use super::types::Rank;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("invalid rank token '{0}'")]
    InvalidRank(String),
    #[error("invalid suit token '{0}'")]
    InvalidSuit(String),
    #[error("invalid seat token '{0}'")]
    InvalidSeat(String),
    #[error("rank {0} not found in stack")]
    RankNotFound(Rank),
    #[error("card {0} not found in hand")]
    NotFound(Card),
    #[error("state invariant violated: {0}")]
    StateInvariantViolation(String),
    /// A failure while solving, tagged with the position being solved
    #[error("analysis failed at position {position}: {source}")]
    Analysis {
        position: Box<Position>,
        #[source]
        source: Box<SolverError>,
    },
}

impl SolverError {
    /// Attach the position being solved, unless an inner position is already attached
    pub(crate) fn at(self, position: &Position) -> SolverError {
        match self {
            SolverError::Analysis { .. } => self,
            other => SolverError::Analysis {
                position: Box::new(*position),
                source: Box::new(other),
            },
        }
    }

    /// The offending position, if this error came out of an analysis
    pub fn position(&self) -> Option<&Position> {
        match self {
            SolverError::Analysis { position, .. } => Some(position),
            _ => None,
        }
    }
}
