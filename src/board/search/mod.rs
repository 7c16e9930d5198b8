//! Search module implementing minimax with alpha-beta pruning.
//!
//! Features:
//! - Fixed-perspective minimax (maximizing and minimizing plies alternate)
//! - Quiescence search over captures with stand-pat
//! - Iterative deepening under a deadline and a cooperative stop flag
//! - MVV-LVA move ordering
//! - A small opening book keyed by piece placement

mod iterative;
mod minimax;
mod move_order;
mod opening;
mod params;
mod quiescence;

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SearchError;
use super::{Board, Color, Move};
use minimax::SearchContext;
pub use params::SearchParams;

/// Score of a mate delivered at the root; mates further away score lower.
pub const MATE_SCORE: i32 = 1_000_000;

/// Bound larger than any reachable score.
pub(crate) const INFINITY: i32 = MATE_SCORE + 1_000;

/// A move together with its search score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Outcome of [`search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The move to play
    pub best_move: Move,
    /// Score of `best_move` from the searching side's point of view
    pub score: i32,
    /// Deepest fully completed iteration (0 for a book move)
    pub depth: u32,
    /// Nodes visited across all iterations
    pub nodes: u64,
    /// Whether the move came from the opening book
    pub from_book: bool,
    pub elapsed: Duration,
}

/// Information about a completed search iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub time_ms: u64,
    pub best_move: Move,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Strength tiers for the automated opponent, expressed as thinking time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Wall-clock budget for one move.
    #[must_use]
    pub const fn time_budget(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(1),
            Difficulty::Medium => Duration::from_secs(3),
            Difficulty::Hard => Duration::from_secs(5),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// UNIFIED SEARCH API
// ============================================================================

/// Configuration for a search operation.
///
/// `SearchConfig::default()` sets neither a time limit nor a depth cap, so
/// only `params.max_depth` or the stop flag ends it; on anything but a tiny
/// position that is effectively unbounded. Use [`SearchConfig::depth`],
/// [`SearchConfig::time`] or [`SearchConfig::difficulty`] for a bounded search.
#[derive(Clone)]
pub struct SearchConfig {
    /// Maximum depth to search (None = `params.max_depth`)
    pub max_depth: Option<u32>,
    /// Time allowed from the start of the search (None = unlimited)
    pub time_limit: Option<Duration>,
    /// Absolute deadline; combined with `time_limit`, the earlier wins
    pub deadline: Option<Instant>,
    /// Whether to consult the opening book first
    pub use_book: bool,
    pub params: SearchParams,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: None,
            time_limit: None,
            deadline: None,
            use_book: true,
            params: SearchParams::default(),
            info_callback: None,
        }
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("max_depth", &self.max_depth)
            .field("time_limit", &self.time_limit)
            .field("deadline", &self.deadline)
            .field("use_book", &self.use_book)
            .field("params", &self.params)
            .field("info_callback", &self.info_callback.is_some())
            .finish()
    }
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Create a time-limited search config
    #[must_use]
    pub fn time(time_limit: Duration) -> Self {
        SearchConfig {
            time_limit: Some(time_limit),
            ..Default::default()
        }
    }

    /// Create a config with the budget of a difficulty tier
    #[must_use]
    pub fn difficulty(difficulty: Difficulty) -> Self {
        Self::time(difficulty.time_budget())
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_book(mut self, use_book: bool) -> Self {
        self.use_book = use_book;
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }

    /// The effective deadline for a search starting at `start`.
    fn resolve_deadline(&self, start: Instant) -> Option<Instant> {
        let from_limit = self.time_limit.and_then(|limit| start.checked_add(limit));
        match (from_limit, self.deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Unified search function that accepts a configuration.
///
/// Tries the opening book (when enabled), then deepens iteratively until the
/// depth cap, the deadline or `stop`. The first iteration always completes,
/// so a legal move is returned whenever one exists.
///
/// # Errors
/// [`SearchError::NoLegalMoves`] when `side` has no legal move.
pub fn search(
    board: &Board,
    side: Color,
    last_move: Option<Move>,
    config: &SearchConfig,
    stop: &AtomicBool,
) -> Result<SearchResult, SearchError> {
    let start = Instant::now();

    if config.use_book {
        if let Some(mv) = opening::book_move(board, side, last_move) {
            log::trace!("book move {mv} for {side}");
            return Ok(SearchResult {
                best_move: mv,
                score: board.evaluate(side),
                depth: 0,
                nodes: 0,
                from_book: true,
                elapsed: start.elapsed(),
            });
        }
    }

    let mut ctx = SearchContext::new(side, &config.params);
    ctx.deadline = config.resolve_deadline(start);
    ctx.stop = Some(stop);

    let max_depth = config
        .max_depth
        .unwrap_or(config.params.max_depth)
        .max(1);
    let (best, depth) = ctx
        .iterative_deepening(board, last_move, max_depth, start, config.info_callback.as_ref())
        .ok_or(SearchError::NoLegalMoves { side })?;

    Ok(SearchResult {
        best_move: best.mv,
        score: best.score,
        depth,
        nodes: ctx.nodes,
        from_book: false,
        elapsed: start.elapsed(),
    })
}

/// Fixed-depth root search from `side`'s point of view, without clock,
/// stop flag or book. Deterministic for a given position.
#[must_use]
pub fn best_move_at_depth(
    board: &Board,
    side: Color,
    last_move: Option<Move>,
    depth: u32,
    params: &SearchParams,
) -> Option<ScoredMove> {
    let mut ctx = SearchContext::new(side, params);
    ctx.search_root(board, depth.max(1), last_move, None)
}

/// Pick a move for the automated opponent: book first, then iterative
/// deepening within the difficulty's time budget.
///
/// # Errors
/// [`SearchError::NoLegalMoves`] when `side` has no legal move.
pub fn find_best_move(
    board: &Board,
    side: Color,
    last_move: Option<Move>,
    difficulty: Difficulty,
) -> Result<Move, SearchError> {
    let stop = AtomicBool::new(false);
    search(
        board,
        side,
        last_move,
        &SearchConfig::difficulty(difficulty),
        &stop,
    )
    .map(|result| result.best_move)
}
