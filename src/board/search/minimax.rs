use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::move_order::{order_moves, promote_first};
use super::{ScoredMove, SearchParams, INFINITY, MATE_SCORE};
use crate::board::{Board, Color, Move};

/// State for one search: the fixed perspective, limits and counters.
///
/// Scores are always from `perspective`'s point of view. Plies where
/// `perspective` is on move maximize; the others minimize.
pub(crate) struct SearchContext<'a> {
    pub perspective: Color,
    pub params: &'a SearchParams,
    pub deadline: Option<Instant>,
    pub stop: Option<&'a AtomicBool>,
    /// When false the deadline and stop flag are ignored.
    pub interruptible: bool,
    pub nodes: u64,
    pub aborted: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(perspective: Color, params: &'a SearchParams) -> Self {
        SearchContext {
            perspective,
            params,
            deadline: None,
            stop: None,
            interruptible: false,
            nodes: 0,
            aborted: false,
        }
    }

    /// Count a node and report whether the search must unwind.
    ///
    /// Limits are only consulted every `poll_interval` nodes; once tripped the
    /// flag stays set so every frame returns promptly.
    pub fn visit(&mut self) -> bool {
        self.nodes += 1;
        if self.aborted {
            return true;
        }
        if !self.interruptible || self.nodes % self.params.poll_interval.max(1) != 0 {
            return false;
        }
        self.aborted = self.limits_reached();
        self.aborted
    }

    pub fn limits_reached(&self) -> bool {
        self.stop.is_some_and(|stop| stop.load(Ordering::Relaxed))
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    pub fn mover(&self, maximizing: bool) -> Color {
        if maximizing {
            self.perspective
        } else {
            self.perspective.opponent()
        }
    }

    /// Score for a node where `mover` has no legal move.
    pub fn terminal_score(&self, board: &Board, mover: Color, ply: u32) -> i32 {
        if !board.is_check(mover) {
            return 0;
        }
        let mate = MATE_SCORE - ply as i32;
        if mover == self.perspective {
            -mate
        } else {
            mate
        }
    }

    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// `last_move` is the move that produced `board`, so en passant is
    /// available to the side now on move.
    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        last_move: Option<Move>,
    ) -> i32 {
        if self.visit() {
            return 0;
        }
        if depth == 0 {
            return self.quiescence(
                board,
                self.params.quiescence_depth,
                ply,
                alpha,
                beta,
                maximizing,
                last_move,
            );
        }

        let mover = self.mover(maximizing);
        let mut moves = board.legal_moves(mover, last_move);
        if moves.is_empty() {
            return self.terminal_score(board, mover, ply);
        }
        order_moves(board, &mut moves, last_move);

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            let Ok(child) = board.apply_move(mv) else {
                continue;
            };
            let score = self.minimax(&child, depth - 1, ply + 1, alpha, beta, !maximizing, Some(mv));
            if self.aborted {
                return 0;
            }
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Search every root move to `depth` and return the best one.
    ///
    /// `first` (typically the previous iteration's choice) is tried first;
    /// ties keep the earliest move. Returns `None` when there is no legal
    /// move or the search was aborted before any move was scored.
    pub fn search_root(
        &mut self,
        board: &Board,
        depth: u32,
        last_move: Option<Move>,
        first: Option<Move>,
    ) -> Option<ScoredMove> {
        let mut moves = board.legal_moves(self.perspective, last_move);
        order_moves(board, &mut moves, last_move);
        if let Some(first) = first {
            promote_first(&mut moves, first);
        }

        let mut best: Option<ScoredMove> = None;
        let mut alpha = -INFINITY;
        for mv in moves {
            let Ok(child) = board.apply_move(mv) else {
                continue;
            };
            let score = self.minimax(
                &child,
                depth.saturating_sub(1),
                1,
                alpha,
                INFINITY,
                false,
                Some(mv),
            );
            if self.aborted {
                break;
            }
            if best.map_or(true, |b| score > b.score) {
                best = Some(ScoredMove { mv, score });
                alpha = alpha.max(score);
            }
        }
        best
    }
}
