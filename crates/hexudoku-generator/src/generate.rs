//! Seeded end-to-end board generation.

use derive_more::{Display, Error, From};
use hexudoku_core::{GameBoardState, update_board_validity};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::{
    fill::{DEFAULT_MAX_FILL_ATTEMPTS, FillError, fill_board_with_attempts},
    prune::prune_board,
};

/// Default number of clue cells left on a generated puzzle.
pub const DEFAULT_CLUE_COUNT: usize = 15;

/// A generated puzzle board together with the seed that produced it.
///
/// Feeding the seed back into [`BoardGenerator::generate_with_seed`] with the
/// same generator settings reproduces the board exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The pruned puzzle board, validity flags refreshed.
    pub board: GameBoardState,
    /// The RNG seed the board was generated from.
    pub seed: u64,
}

/// Error produced when board generation fails.
#[derive(Debug, Display, Error, From)]
pub enum GenerateError {
    /// The random fill could not produce a usable solved board.
    #[display("board fill failed: {_0}")]
    Fill(FillError),
}

/// Generates flower-board puzzles: topology, random fill, then pruning.
///
/// # Examples
///
/// ```
/// use hexudoku_generator::BoardGenerator;
///
/// let generator = BoardGenerator::new()
///     .target_clues(20)
///     .max_fill_attempts(16);
/// let generated = generator
///     .generate_with_seed(12345)
///     .expect("generation succeeds for this seed");
/// let clues = generated
///     .board
///     .cells()
///     .filter(|cell| cell.is_filled())
///     .count();
/// assert_eq!(clues, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGenerator {
    target_clues: usize,
    max_fill_attempts: usize,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardGenerator {
    /// Creates a generator with [`DEFAULT_CLUE_COUNT`] clues and
    /// [`DEFAULT_MAX_FILL_ATTEMPTS`] fill attempts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target_clues: DEFAULT_CLUE_COUNT,
            max_fill_attempts: DEFAULT_MAX_FILL_ATTEMPTS,
        }
    }

    /// Sets how many clue cells the pruned puzzle keeps.
    #[must_use]
    pub const fn target_clues(mut self, target_clues: usize) -> Self {
        self.target_clues = target_clues;
        self
    }

    /// Sets the fill retry budget.
    #[must_use]
    pub const fn max_fill_attempts(mut self, max_fill_attempts: usize) -> Self {
        self.max_fill_attempts = max_fill_attempts;
        self
    }

    /// Generates a puzzle from a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Fill`] when the random fill exhausts its
    /// attempt budget.
    pub fn generate(&self) -> Result<GeneratedBoard, GenerateError> {
        self.generate_with_seed(rand::rng().random())
    }

    /// Generates a puzzle reproducibly from the given seed.
    ///
    /// Runs the flower topology generator, the backtracking fill, and the
    /// pruning pass, then refreshes every cell's validity flag.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Fill`] when the random fill exhausts its
    /// attempt budget.
    pub fn generate_with_seed(&self, seed: u64) -> Result<GeneratedBoard, GenerateError> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let mut board = GameBoardState::flower();

        fill_board_with_attempts(&mut board, &mut rng, self.max_fill_attempts)?;
        prune_board(&mut board, self.target_clues, &mut rng);
        update_board_validity(&mut board);

        Ok(GeneratedBoard { board, seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_generator() -> BoardGenerator {
        // Large retry budget so fixed-seed tests cannot hit the budget.
        BoardGenerator::new().max_fill_attempts(64)
    }

    #[test]
    fn test_generated_board_shape() {
        let generated = test_generator()
            .generate_with_seed(100)
            .expect("generation succeeds");
        let board = &generated.board;

        assert_eq!(board.len(), 49);
        assert_eq!(board.cells().filter(|cell| cell.is_filled()).count(), 15);
        assert!(!board.is_complete());
        assert!(board.cells().all(|cell| cell.is_valid));
        for cell in board.cells() {
            assert_eq!(cell.is_editable, !cell.is_filled());
        }
    }

    #[test]
    fn test_same_seed_reproduces_board() {
        let generator = test_generator();
        let first = generator.generate_with_seed(7).expect("generation succeeds");
        let second = generator.generate_with_seed(7).expect("generation succeeds");
        assert_eq!(first, second);
        assert_eq!(first.seed, 7);
    }

    #[test]
    fn test_different_seeds_differ() {
        let generator = test_generator();
        let first = generator.generate_with_seed(1).expect("generation succeeds");
        let second = generator.generate_with_seed(2).expect("generation succeeds");
        assert_ne!(first.board, second.board);
    }

    #[test]
    fn test_target_clues_is_respected() {
        let generated = test_generator()
            .target_clues(30)
            .generate_with_seed(5)
            .expect("generation succeeds");
        let clues = generated
            .board
            .cells()
            .filter(|cell| cell.is_filled())
            .count();
        assert_eq!(clues, 30);
    }
}
