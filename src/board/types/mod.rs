//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - an on-board (rank, file) pair
//! - `Move` - a (from, to) pair
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
