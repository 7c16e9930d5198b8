//! A game in progress: position, turn, previous move and history.
//!
//! The board core is stateless; `Game` bundles the state a front end would
//! otherwise carry between calls and keeps it consistent.

use std::fmt;

use crate::board::error::{GameError, MoveError, SearchError};
use crate::board::search::{find_best_move, Difficulty};
use crate::board::{Board, Color, Move, MoveRecord, Square};

/// Where the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// The given side is in check but has a move
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "Ongoing"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "Stalemate"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    last_move: Option<Move>,
    history: Vec<MoveRecord>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Start from an arbitrary position. No previous move is known, so en
    /// passant is unavailable on the first turn.
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let status = Self::compute_status(&board, side_to_move, None);
        Game {
            board,
            side_to_move,
            last_move: None,
            history: Vec::new(),
            status,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Legal destinations for the piece on `from`, if it belongs to the side
    /// to move.
    #[must_use]
    pub fn possible_moves(&self, from: Square) -> Vec<Square> {
        self.board
            .possible_moves(from, self.side_to_move, self.last_move)
    }

    /// Play `mv` for the side to move.
    ///
    /// # Errors
    /// Returns why the move was rejected; the game is left unchanged.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        self.board
            .validate_move(mv.from, mv.to, self.side_to_move, self.last_move)?;
        let record = MoveRecord::from_move(&self.board, mv)?;
        let next = self.board.apply_move(mv)?;

        self.board = next;
        self.history.push(record);
        self.last_move = Some(mv);
        self.side_to_move = self.side_to_move.opponent();
        self.status = Self::compute_status(&self.board, self.side_to_move, self.last_move);
        Ok(self.status)
    }

    /// Ask the engine for a move without playing it.
    ///
    /// # Errors
    /// [`SearchError::NoLegalMoves`] when the game is already over.
    pub fn engine_move(&self, difficulty: Difficulty) -> Result<Move, SearchError> {
        find_best_move(&self.board, self.side_to_move, self.last_move, difficulty)
    }

    /// Let the engine choose and play a move for the side to move.
    ///
    /// # Errors
    /// Fails when there is no legal move to play.
    pub fn play_engine_move(&mut self, difficulty: Difficulty) -> Result<GameStatus, GameError> {
        let mv = self.engine_move(difficulty)?;
        Ok(self.play(mv)?)
    }

    /// White's winning chances in percent, from the static evaluation.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.board.win_rate()
    }

    fn compute_status(board: &Board, side: Color, last_move: Option<Move>) -> GameStatus {
        let in_check = board.is_check(side);
        let can_move = board.has_legal_move(side, last_move);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate {
                winner: side.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check(side),
            (false, true) => GameStatus::Ongoing,
        }
    }
}
