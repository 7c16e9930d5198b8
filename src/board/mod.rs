//! Chess board representation and game rules.
//!
//! A [`Board`] is an immutable-by-convention value: rule queries borrow it,
//! and [`Board::apply_move`] returns the next position. The side to move and
//! the previous move are passed explicitly to every query that needs them.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::White, None);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod apply;
mod attacks;
mod builder;
pub mod error;
mod eval;
mod fen;
mod movegen;
mod pst;
mod record;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, GameError, MoveError, MoveParseError, SearchError, SquareError};
pub use record::MoveRecord;
pub use state::Board;
pub use types::{CastlingRights, Color, Move, Piece, Square};

// Public API - search functions and configuration
pub use search::{
    best_move_at_depth, find_best_move, search, Difficulty, ScoredMove, SearchConfig,
    SearchInfoCallback, SearchIterationInfo, SearchParams, SearchResult, MATE_SCORE,
};
