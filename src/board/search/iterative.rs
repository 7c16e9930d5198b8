use std::time::Instant;

use super::minimax::SearchContext;
use super::{ScoredMove, SearchInfoCallback, SearchIterationInfo, MATE_SCORE};
use crate::board::{Board, Move};

/// Scores beyond this are forced mates; deeper iterations cannot improve them.
const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

impl SearchContext<'_> {
    /// Iterative deepening from depth 1 up to `max_depth`.
    ///
    /// Depth 1 runs with limits disabled so a move is always available.
    /// Later iterations honour the deadline and stop flag; one that is cut
    /// short is thrown away and the previous result stands. Returns the best
    /// move with the depth it was found at, or `None` without legal moves.
    pub fn iterative_deepening(
        &mut self,
        board: &Board,
        last_move: Option<Move>,
        max_depth: u32,
        start: Instant,
        info_callback: Option<&SearchInfoCallback>,
    ) -> Option<(ScoredMove, u32)> {
        let root_moves = board.legal_moves(self.perspective, last_move).len();
        if root_moves == 0 {
            return None;
        }

        let mut best: Option<(ScoredMove, u32)> = None;
        for depth in 1..=max_depth.max(1) {
            self.interruptible = depth > 1;
            if self.interruptible && self.limits_reached() {
                log::trace!("search limits reached before depth {depth}");
                break;
            }

            let previous = best.map(|(found, _)| found.mv);
            let Some(found) = self.search_root(board, depth, last_move, previous) else {
                break;
            };
            if self.aborted {
                log::trace!("depth {depth} aborted after {} nodes", self.nodes);
                break;
            }
            best = Some((found, depth));

            let elapsed = start.elapsed();
            log::debug!(
                "depth {depth} score {} nodes {} time {}ms best {}",
                found.score,
                self.nodes,
                elapsed.as_millis(),
                found.mv
            );
            if let Some(cb) = info_callback {
                cb(&SearchIterationInfo {
                    depth,
                    score: found.score,
                    nodes: self.nodes,
                    time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                    best_move: found.mv,
                });
            }

            if root_moves == 1 || found.score.abs() >= MATE_THRESHOLD {
                break;
            }
        }

        best
    }
}
