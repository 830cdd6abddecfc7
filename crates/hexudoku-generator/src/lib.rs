//! Puzzle generation for the hexudoku engine.
//!
//! Turns an empty flower board from `hexudoku-core` into a playable puzzle:
//!
//! 1. [`fill_board_with_random_numbers`] solves the empty board with a
//!    randomized backtracking search, retrying fills whose first two clusters
//!    repeat the same digit sequence.
//! 2. [`prune_board`] removes digits down to a target clue count, marking the
//!    holes editable.
//!
//! [`BoardGenerator`] bundles both steps behind a reproducible `u64` seed.
//!
//! # Examples
//!
//! ```
//! use hexudoku_generator::BoardGenerator;
//!
//! let generated = BoardGenerator::new()
//!     .max_fill_attempts(16)
//!     .generate_with_seed(42)
//!     .expect("generation succeeds for this seed");
//! assert_eq!(generated.seed, 42);
//! assert_eq!(generated.board.len(), 49);
//! ```

pub use self::{
    fill::{
        DEFAULT_MAX_FILL_ATTEMPTS, FillError, fill_board_with_attempts,
        fill_board_with_random_numbers,
    },
    generate::{BoardGenerator, DEFAULT_CLUE_COUNT, GenerateError, GeneratedBoard},
    prune::prune_board,
};

pub mod fill;
pub mod generate;
pub mod prune;
