//! Board generation on a background thread.
//!
//! The backtracking fill is the one potentially expensive operation in the
//! engine, so callers driving a UI can run it off the main thread and poll
//! for the result. There is no cancellation: a started generation runs until
//! it completes or exhausts its retry budget.

use std::{fmt, sync::mpsc, thread};

use derive_more::{Display, Error};
use hexudoku_core::GameBoardState;
use hexudoku_generator::{BoardGenerator, GenerateError};

/// Error produced while waiting on a background generation.
#[derive(Debug, Display, Error)]
pub enum BackgroundError {
    /// The worker thread went away without delivering a result.
    #[display("background generation worker disconnected")]
    WorkerDisconnected,
    /// Generation itself failed on the worker thread.
    #[display("board generation failed: {_0}")]
    Generation(#[error(source)] GenerateError),
}

/// A handle for polling the completion of a background board generation.
pub struct GenerationHandle {
    receiver: mpsc::Receiver<Result<GameBoardState, GenerateError>>,
}

impl fmt::Debug for GenerationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationHandle").finish()
    }
}

impl GenerationHandle {
    /// Attempts to poll for a completed board without blocking.
    ///
    /// Returns `Ok(None)` while the worker is still running.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError::Generation`] if generation failed, or
    /// [`BackgroundError::WorkerDisconnected`] if the worker thread went
    /// away without a result.
    pub fn poll(&mut self) -> Result<Option<GameBoardState>, BackgroundError> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(Ok(board)) => Ok(Some(board)),
            Ok(Err(err)) => Err(BackgroundError::Generation(err)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(BackgroundError::WorkerDisconnected),
        }
    }

    /// Blocks until the worker delivers its result.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError::Generation`] if generation failed, or
    /// [`BackgroundError::WorkerDisconnected`] if the worker thread went
    /// away without a result.
    pub fn wait(self) -> Result<GameBoardState, BackgroundError> {
        match self.receiver.recv() {
            Ok(Ok(board)) => Ok(board),
            Ok(Err(err)) => Err(BackgroundError::Generation(err)),
            Err(mpsc::RecvError) => Err(BackgroundError::WorkerDisconnected),
        }
    }
}

/// Starts a default board generation on a background thread.
///
/// Equivalent to [`generate_board`](crate::generate_board), delivered through
/// a [`GenerationHandle`].
#[must_use]
pub fn spawn_board_generation() -> GenerationHandle {
    spawn(move || BoardGenerator::new().generate().map(|generated| generated.board))
}

/// Starts a seeded generation with explicit generator settings on a
/// background thread.
#[must_use]
pub fn spawn_board_generation_with(generator: BoardGenerator, seed: u64) -> GenerationHandle {
    spawn(move || {
        generator
            .generate_with_seed(seed)
            .map(|generated| generated.board)
    })
}

fn spawn<F>(work: F) -> GenerationHandle
where
    F: FnOnce() -> Result<GameBoardState, GenerateError> + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let _ = sender.send(work());
    });
    GenerationHandle { receiver }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_generator() -> BoardGenerator {
        BoardGenerator::new().max_fill_attempts(64)
    }

    #[test]
    fn test_wait_delivers_generated_board() {
        let handle = spawn_board_generation_with(test_generator(), 31);
        let board = handle.wait().expect("generation succeeds");
        assert_eq!(board.len(), 49);
        assert_eq!(board.cells().filter(|cell| cell.is_filled()).count(), 15);
    }

    #[test]
    fn test_background_matches_foreground() {
        let generator = test_generator();
        let handle = spawn_board_generation_with(generator, 32);
        let background = handle.wait().expect("generation succeeds");
        let foreground = generator
            .generate_with_seed(32)
            .expect("generation succeeds")
            .board;
        assert_eq!(background, foreground);
    }

    #[test]
    fn test_poll_eventually_completes() {
        let mut handle = spawn_board_generation_with(test_generator(), 33);
        let board = loop {
            match handle.poll() {
                Ok(Some(board)) => break board,
                Ok(None) => thread::yield_now(),
                Err(err) => panic!("background generation failed: {err}"),
            }
        };
        assert_eq!(board.len(), 49);
    }
}
