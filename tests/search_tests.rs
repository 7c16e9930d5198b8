//! Search tests through the public API: configured searches, the background
//! search job and engine moves inside a game.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chess_core::board::search::{search, Difficulty, SearchConfig, SearchIterationInfo};
use chess_core::board::{Board, Color, Move, Piece, SearchError};
use chess_core::engine::SearchJob;
use chess_core::{Game, GameStatus};

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let (board, side) = Board::try_from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1").unwrap();
    let stop = AtomicBool::new(false);

    let result = search(&board, side, None, &SearchConfig::depth(4), &stop).unwrap();
    assert_eq!(result.best_move, mv("e1e8"), "Should find Qe8# (back rank mate)");
}

/// Test that the engine finds scholar's mate
#[test]
fn finds_mate_in_one_queen() {
    let (board, side) = Board::try_from_fen(
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4",
    )
    .unwrap();
    let stop = AtomicBool::new(false);

    let result = search(&board, side, None, &SearchConfig::depth(3), &stop).unwrap();
    assert_eq!(result.best_move, mv("h5f7"), "Should find Qxf7# (scholar's mate)");
}

/// Test that the engine does not leave its queen en prise
#[test]
fn avoids_hanging_queen() {
    // The queen on d4 is attacked by the pawn on e5.
    let (board, side) = Board::try_from_fen("4k3/8/8/4p3/3Q4/8/8/4K3 w - - 0 1").unwrap();
    let stop = AtomicBool::new(false);

    let result = search(&board, side, None, &SearchConfig::depth(2), &stop).unwrap();
    let after = board.apply_move(result.best_move).unwrap();
    let queen_square = after
        .pieces_of(Color::White)
        .find(|(_, piece)| *piece == Piece::Queen)
        .map(|(sq, _)| sq)
        .expect("queen still on the board");
    assert!(
        !after.is_square_attacked(queen_square, Color::Black),
        "queen left hanging after {}",
        result.best_move
    );
}

#[test]
fn search_reports_progress_per_iteration() {
    let iterations = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&iterations);
    let config = SearchConfig::depth(3)
        .with_book(false)
        .with_info_callback(Arc::new(move |info: &SearchIterationInfo| {
            counter.fetch_add(1, Ordering::SeqCst);
            assert!(info.depth >= 1 && info.depth <= 3);
        }));
    let stop = AtomicBool::new(false);

    let result = search(&Board::new(), Color::White, None, &config, &stop).unwrap();
    assert_eq!(result.depth, 3);
    assert_eq!(iterations.load(Ordering::SeqCst), 3);
}

#[test]
fn difficulty_budgets_are_ordered() {
    assert!(Difficulty::Easy.time_budget() < Difficulty::Medium.time_budget());
    assert!(Difficulty::Medium.time_budget() < Difficulty::Hard.time_budget());
    assert_eq!(Difficulty::default(), Difficulty::Medium);
}

// ============================================================================
// Background search
// ============================================================================

#[test]
fn search_job_can_be_stopped() {
    let config = SearchConfig::time(Duration::from_secs(30)).with_book(false);
    let job = SearchJob::spawn(Board::new(), Color::White, None, config).unwrap();
    std::thread::sleep(Duration::from_millis(50));

    let result = job.stop_and_wait().unwrap();
    assert!(result.depth >= 1);
    assert!(Board::new().is_legal_move(
        result.best_move.from,
        result.best_move.to,
        Color::White,
        None
    ));
}

#[test]
fn search_job_reports_no_legal_moves() {
    let (board, side) = Board::try_from_fen("k7/8/1QK5/8/8/8/8/8 b - - 0 1").unwrap();
    let job = SearchJob::spawn(board, side, None, SearchConfig::depth(2)).unwrap();
    assert_eq!(job.wait(), Err(SearchError::NoLegalMoves { side: Color::Black }));
}

// ============================================================================
// Games against the engine
// ============================================================================

#[test]
fn engine_replies_with_legal_moves() {
    let mut game = Game::new();
    game.play(mv("e2e4")).unwrap();
    for _ in 0..4 {
        if game.status().is_over() {
            break;
        }
        let side = game.side_to_move();
        let reply = game.engine_move(Difficulty::Easy).unwrap();
        assert!(game
            .board()
            .is_legal_move(reply.from, reply.to, side, game.last_move()));
        game.play(reply).unwrap();
    }
    assert!(game.history().len() >= 2);
}

#[test]
fn engine_delivers_mate_in_game() {
    let (board, side) = Board::try_from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1").unwrap();
    let mut game = Game::from_board(board, side);
    let status = game.play_engine_move(Difficulty::Easy).unwrap();
    assert_eq!(status, GameStatus::Checkmate { winner: Color::White });
    assert!(status.is_over());
    assert!(game.win_rate() > 50.0);
}
