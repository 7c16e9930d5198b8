//! Background search jobs.

use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::error::SearchError;
use crate::board::search::{
    search, SearchConfig, SearchInfoCallback, SearchIterationInfo, SearchResult,
};
use crate::board::{Board, Color, Move};

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// A search running on its own thread.
///
/// The job owns a snapshot of the position, so the caller is free to keep
/// using its own board. Stopping only interrupts iterations after the first,
/// so [`SearchJob::wait`] still yields a move whenever one exists.
pub struct SearchJob {
    /// Stop flag for the search
    stop: Arc<AtomicBool>,
    /// Most recent completed iteration
    progress: Arc<Mutex<Option<SearchIterationInfo>>>,
    /// Handle to the search thread
    handle: JoinHandle<Result<SearchResult, SearchError>>,
}

impl SearchJob {
    /// Start searching `board` for `side` on a new thread.
    ///
    /// # Errors
    /// Fails only if the operating system refuses to spawn the thread.
    pub fn spawn(
        board: Board,
        side: Color,
        last_move: Option<Move>,
        config: SearchConfig,
    ) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let progress: Arc<Mutex<Option<SearchIterationInfo>>> = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&progress);
        let forward = config.info_callback.clone();
        let callback: SearchInfoCallback = Arc::new(move |info: &SearchIterationInfo| {
            *slot.lock() = Some(*info);
            if let Some(cb) = &forward {
                cb(info);
            }
        });
        let config = config.with_info_callback(callback);

        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("chess-search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                log::debug!("search job started for {side}");
                let result = search(&board, side, last_move, &config, &thread_stop);
                match &result {
                    Ok(found) => log::debug!(
                        "search job finished: {} at depth {} ({} nodes)",
                        found.best_move,
                        found.depth,
                        found.nodes
                    ),
                    Err(err) => log::debug!("search job finished: {err}"),
                }
                result
            })?;

        Ok(SearchJob {
            stop,
            progress,
            handle,
        })
    }

    /// Returns true once the search thread has produced its result.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        log::debug!("search job stop requested");
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Latest completed iteration, if any.
    #[must_use]
    pub fn progress(&self) -> Option<SearchIterationInfo> {
        *self.progress.lock()
    }

    /// Wait for the search to finish and take its result.
    ///
    /// # Errors
    /// Returns the search's own error (no legal move for the side).
    pub fn wait(self) -> Result<SearchResult, SearchError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /// Stop the search and wait for the thread to finish
    ///
    /// # Errors
    /// Same as [`SearchJob::wait`].
    pub fn stop_and_wait(self) -> Result<SearchResult, SearchError> {
        self.signal_stop();
        self.wait()
    }
}
