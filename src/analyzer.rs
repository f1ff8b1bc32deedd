//! Double-dummy analyzer
//!
//! Exhaustive minimax over whole tricks. South plays for the declarer goal,
//! East and West for the defender goal. Each trick is built card by card;
//! once it is complete the successor position is analyzed recursively and
//! the result is memoized under the position key for the lifetime of the
//! analyzer.

use super::error::SolverError;
use super::play::{candidate_cards, playable_cards};
use super::position::{Position, PositionKey};
use super::trick::{PartialTrick, Trick};
use super::types::*;
use log::{debug, error, trace};
use rustc_hash::FxHashMap;

/// Direction a seat pushes South's trick count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Maximize,
    Minimize,
}

impl Goal {
    /// True if `candidate` is strictly better than `best`
    ///
    /// Equal outcomes keep the earlier candidate, so the chosen line follows
    /// move-generation order.
    #[inline]
    pub fn prefers(self, candidate: u8, best: u8) -> bool {
        match self {
            Goal::Maximize => candidate > best,
            Goal::Minimize => candidate < best,
        }
    }
}

/// Tricks South takes under optimal play, and one line of play achieving it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    pub num_tricks: u8,
    pub gameplay: Vec<Trick>,
}

/// Search counters, cumulative over the analyzer's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzerStats {
    /// Partial-trick search nodes visited
    pub nodes: u64,
    /// Positions computed and stored in the memo table
    pub positions_solved: u64,
    /// Memo lookups answered from the table
    pub cache_hits: u64,
}

pub struct Analyzer {
    trump: Option<Suit>,
    declarer_goal: Goal,
    defender_goal: Goal,
    run_compression: bool,
    cache: FxHashMap<PositionKey, AnalysisResult>,
    stats: AnalyzerStats,
}

impl Analyzer {
    /// Create an analyzer; `misere` makes South minimize its tricks
    pub fn new(trump: Option<Suit>, misere: bool) -> Self {
        let (declarer_goal, defender_goal) = if misere {
            (Goal::Minimize, Goal::Maximize)
        } else {
            (Goal::Maximize, Goal::Minimize)
        };
        Analyzer {
            trump,
            declarer_goal,
            defender_goal,
            run_compression: true,
            cache: FxHashMap::default(),
            stats: AnalyzerStats::default(),
        }
    }

    /// Enable or disable run-compression pruning (on by default)
    ///
    /// Disabling it searches every legal card. The trick count is the same
    /// either way; only the search cost and possibly the reported line differ.
    pub fn with_run_compression(mut self, enabled: bool) -> Self {
        if enabled != self.run_compression {
            self.cache.clear();
        }
        self.run_compression = enabled;
        self
    }

    #[inline]
    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    #[inline]
    pub fn declarer_goal(&self) -> Goal {
        self.declarer_goal
    }

    #[inline]
    pub fn defender_goal(&self) -> Goal {
        self.defender_goal
    }

    #[inline]
    pub fn stats(&self) -> AnalyzerStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = AnalyzerStats::default();
    }

    /// Number of positions in the memo table
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Solve a position
    ///
    /// On failure the error carries the position whose analysis broke.
    pub fn analyze(&mut self, position: &Position) -> Result<AnalysisResult, SolverError> {
        debug!(
            "analyzing {} (trump {}, South {:?})",
            position,
            self.trump.map_or("none".to_string(), |s| s.to_string()),
            self.declarer_goal
        );
        let before = self.stats;
        let result = self.analyze_position(position);
        match &result {
            Ok(analysis) => debug!(
                "South takes {} tricks; {} nodes, {} positions solved, {} cache hits",
                analysis.num_tricks,
                self.stats.nodes - before.nodes,
                self.stats.positions_solved - before.positions_solved,
                self.stats.cache_hits - before.cache_hits
            ),
            Err(err) => error!("{}", err),
        }
        result
    }

    fn analyze_position(&mut self, position: &Position) -> Result<AnalysisResult, SolverError> {
        if position.is_empty() {
            return Ok(AnalysisResult::default());
        }

        let key = position.key();
        if let Some(result) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return Ok(result.clone());
        }

        let turn = position.turn();
        let result = self
            .best_line(position, PartialTrick::new(turn), turn)
            .map_err(|err| err.at(position))?;
        self.stats.positions_solved += 1;
        trace!("solved {}: {} tricks", key, result.num_tricks);
        self.cache.insert(key, result.clone());
        Ok(result)
    }

    /// Best continuation of `partial` with `turn` to play next
    fn best_line(
        &mut self,
        position: &Position,
        partial: PartialTrick,
        turn: Seat,
    ) -> Result<AnalysisResult, SolverError> {
        self.stats.nodes += 1;

        if partial.is_full() {
            if turn != position.turn() {
                return Err(SolverError::StateInvariantViolation(format!(
                    "trick completed with {} to play but {} led",
                    turn,
                    position.turn()
                )));
            }
            let trick = partial.finish()?;
            let rest = self.analyze_position(&position.play(&trick)?)?;
            return Ok(prepend(trick, rest));
        }

        let goal = if turn == Seat::South {
            self.declarer_goal
        } else {
            self.defender_goal
        };
        let candidates = if self.run_compression {
            candidate_cards(position.hand(turn), partial.lead_suit(), self.trump)
        } else {
            playable_cards(position.hand(turn), partial.lead_suit(), self.trump)
        };

        let mut best: Option<AnalysisResult> = None;
        for card in candidates.cards() {
            let next = partial.push(turn, card, self.trump)?;
            let outcome = self.best_line(position, next, next_seat(turn))?;
            let improves = best
                .as_ref()
                .map_or(true, |b| goal.prefers(outcome.num_tricks, b.num_tricks));
            if improves {
                best = Some(outcome);
            }
        }

        best.ok_or_else(|| {
            SolverError::StateInvariantViolation(format!(
                "{} has no card for the trick led by {} ({} of {} cards played)",
                turn,
                partial.leader(),
                partial.len(),
                NUM_SEATS
            ))
        })
    }
}

/// Put `trick` in front of the line that follows it
fn prepend(trick: Trick, rest: AnalysisResult) -> AnalysisResult {
    let mut gameplay = Vec::with_capacity(rest.gameplay.len() + 1);
    gameplay.push(trick);
    gameplay.extend(rest.gameplay);
    AnalysisResult {
        num_tricks: rest.num_tricks + u8::from(trick.winner() == Seat::South),
        gameplay,
    }
}
