pub mod board;
pub mod engine;
pub mod game;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::{Game, GameStatus};
