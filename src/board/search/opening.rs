//! A tiny opening book keyed by piece placement.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::board::{Board, Color, Move};

static OPENING_BOOK: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut book = HashMap::new();
    book.insert("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "e2e4");
    book.insert("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR", "g1f3");
    book.insert("rnbqkbnr/pppp1ppp/4p3/8/4P3/8/PPPP1PPP/RNBQKBNR", "d2d4");
    book
});

/// Look up a book move for `side`. Entries that are not legal for `side`
/// in this position are ignored.
pub(crate) fn book_move(board: &Board, side: Color, last_move: Option<Move>) -> Option<Move> {
    let entry = OPENING_BOOK.get(board.placement().as_str())?;
    let mv: Move = entry.parse().ok()?;
    board
        .is_legal_move(mv.from, mv.to, side, last_move)
        .then_some(mv)
}
