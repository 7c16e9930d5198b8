use super::minimax::SearchContext;
use super::move_order::order_moves;
use crate::board::{Board, Move};

impl SearchContext<'_> {
    /// Capture-only search below the horizon, with stand-pat.
    ///
    /// The side on move may decline every capture and keep the static
    /// evaluation, so captures can only improve on it. A side with no legal
    /// move is scored as mated when in check and as a draw otherwise.
    #[allow(clippy::too_many_arguments)]
    pub fn quiescence(
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

        let mover = self.mover(maximizing);
        let in_check = board.is_check(mover);
        if in_check && !board.has_legal_move(mover, last_move) {
            return self.terminal_score(board, mover, ply);
        }

        let stand_pat = board.evaluate(self.perspective);
        if maximizing {
            if stand_pat >= beta {
                return stand_pat;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return stand_pat;
            }
            beta = beta.min(stand_pat);
        }

        // Stalemate is a draw, not the material count.
        if !in_check && !board.has_legal_move(mover, last_move) {
            return self.terminal_score(board, mover, ply);
        }
        if depth == 0 {
            return stand_pat;
        }

        let mut captures = board.capture_moves(mover, last_move);
        order_moves(board, &mut captures, last_move);

        let mut best = stand_pat;
        for mv in captures {
            let Ok(child) = board.apply_move(mv) else {
                continue;
            };
            let score = self.quiescence(&child, depth - 1, ply + 1, alpha, beta, !maximizing, Some(mv));
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
}
