//! External interface of the hexudoku puzzle engine.
//!
//! This crate is what a UI or state-management layer talks to:
//!
//! - [`generate_board`] / [`generate_board_with_seed`] run the full pipeline
//!   (flower topology, random fill, pruning to [`DEFAULT_CLUE_COUNT`] clues,
//!   validity pass) and hand back a ready-to-play board.
//! - [`spawn_board_generation`] does the same on a background thread behind a
//!   pollable [`GenerationHandle`], keeping a UI responsive while the
//!   backtracking fill runs.
//! - [`serialise_game_state`] / [`deserialise_game_state`] move boards
//!   through the versioned, schema-validated save format;
//!   [`load_saved_state`] treats any decode failure as absent state.
//!
//! Per-edit services (validity checking, unit lookup, note clearing) come
//! straight from `hexudoku-core` and operate on the same
//! [`GameBoardState`].
//!
//! # Examples
//!
//! ```no_run
//! use hexudoku_game::generate_board;
//!
//! // Hard generation failure is unrecoverable; present it as such.
//! let board = generate_board().expect("puzzle generation failed");
//! assert_eq!(board.len(), 49);
//! ```

pub use hexudoku_core::GameBoardState;
pub use hexudoku_generator::{BoardGenerator, DEFAULT_CLUE_COUNT, GenerateError, GeneratedBoard};

pub use self::{
    background::{
        BackgroundError, GenerationHandle, spawn_board_generation,
        spawn_board_generation_with,
    },
    serialize::{
        DecodeError, EncodeError, SCHEMA_VERSION, deserialise_game_state, load_saved_state,
        serialise_game_state,
    },
};

pub mod background;
pub mod serialize;

/// Generates a new puzzle board with [`DEFAULT_CLUE_COUNT`] clues.
///
/// # Errors
///
/// Returns [`GenerateError`] when the random fill exhausts its retry budget;
/// there is no fallback puzzle, so callers surface this as an unrecoverable
/// generation failure.
pub fn generate_board() -> Result<GameBoardState, GenerateError> {
    Ok(BoardGenerator::new().generate()?.board)
}

/// Generates a puzzle board reproducibly from the given seed.
///
/// # Errors
///
/// Returns [`GenerateError`] when the random fill exhausts its retry budget.
pub fn generate_board_with_seed(seed: u64) -> Result<GameBoardState, GenerateError> {
    Ok(BoardGenerator::new().generate_with_seed(seed)?.board)
}
