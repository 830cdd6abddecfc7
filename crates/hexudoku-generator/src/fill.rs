//! Randomized backtracking board fill.

use derive_more::{Display, Error};
use hexudoku_core::{CellValidity, Digit, GameBoardState, check_cell_validity};
use log::debug;
use rand::{Rng, seq::SliceRandom};

/// Default number of fill attempts before giving up on a non-repeating board.
///
/// A policy constant, not a hard limit; see [`fill_board_with_attempts`].
pub const DEFAULT_MAX_FILL_ATTEMPTS: usize = 4;

/// Error produced when the random fill cannot deliver a usable board.
///
/// Neither variant is recoverable by retrying from the caller's side: an
/// unfillable board indicates a topology bug, and an exhausted attempt budget
/// means the caller has no fallback puzzle.
#[derive(Debug, Clone, Copy, Display, Error)]
pub enum FillError {
    /// Backtracking exhausted every digit ordering without completing the
    /// board.
    #[display("backtracking could not complete a board fill")]
    Unfillable,
    /// Every attempt produced a fill whose first two clusters repeat the same
    /// digit sequence.
    #[display("no non-repeating fill found within {attempts} attempts")]
    RepeatingPattern {
        /// How many attempts were made.
        attempts: usize,
    },
}

/// Fills the board with a complete valid digit assignment, using the default
/// attempt budget of [`DEFAULT_MAX_FILL_ATTEMPTS`].
///
/// See [`fill_board_with_attempts`] for the algorithm, the error conditions,
/// and the panics.
///
/// # Errors
///
/// Returns a [`FillError`] when no usable fill is found.
pub fn fill_board_with_random_numbers<R>(
    board: &mut GameBoardState,
    rng: &mut R,
) -> Result<(), FillError>
where
    R: Rng + ?Sized,
{
    fill_board_with_attempts(board, rng, DEFAULT_MAX_FILL_ATTEMPTS)
}

/// Fills the board with a complete valid digit assignment via randomized
/// depth-first backtracking.
///
/// Each attempt resets every cell to empty and editable, then walks the cells
/// in generation order, trying the digits 1-7 in a random permutation per
/// cell: a digit is tentatively placed (and the cell marked non-editable),
/// kept if the single-cell validity check finds no conflict and the rest of
/// the board can be filled, and undone otherwise. A completed fill is
/// rejected as a repeating pattern when cluster 0 and cluster 1 carry
/// identical digit sequences, which makes for a boring puzzle; the fill is
/// then retried, up to `max_attempts` times.
///
/// The result is reproducible only for an identically seeded `rng`.
///
/// # Errors
///
/// Returns [`FillError::Unfillable`] if backtracking cannot complete the
/// board at all, or [`FillError::RepeatingPattern`] if every attempt
/// produced a repeating fill. On error the board is left in the state of the
/// failed attempt.
///
/// # Panics
///
/// Panics if group 0 does not contain exactly 7 cells; this is a sanity
/// check on the topology the board was generated from.
pub fn fill_board_with_attempts<R>(
    board: &mut GameBoardState,
    rng: &mut R,
    max_attempts: usize,
) -> Result<(), FillError>
where
    R: Rng + ?Sized,
{
    let group_len = board.cells().filter(|cell| cell.group == 0).count();
    assert_eq!(group_len, 7, "Expected group 0 to have exactly 7 cells");

    for attempt in 1..=max_attempts {
        clear_board(board);

        if !try_fill_from(board, 0, rng) {
            return Err(FillError::Unfillable);
        }

        // The hex grid allows two clusters to hold the same digits in the
        // same order, which makes for a boring puzzle.
        if !has_repeating_clusters(board) {
            return Ok(());
        }
        debug!("fill attempt {attempt} produced a repeating pattern, retrying");
    }

    Err(FillError::RepeatingPattern {
        attempts: max_attempts,
    })
}

/// Resets every cell to empty and editable, in case a previous fill left
/// partial state behind.
fn clear_board(board: &mut GameBoardState) {
    for cell in board.cells_mut() {
        cell.value = None;
        cell.is_editable = true;
    }
}

fn try_fill_from<R>(board: &mut GameBoardState, index: usize, rng: &mut R) -> bool
where
    R: Rng + ?Sized,
{
    if index >= board.len() {
        return true;
    }

    // Skip cells that are already filled
    if board.cell_at(index).is_filled() {
        return try_fill_from(board, index + 1, rng);
    }

    let coordinate = board.cell_at(index).coordinate;
    let mut digits = Digit::ALL;
    digits.shuffle(rng);

    for digit in digits {
        let cell = board.cell_at_mut(index);
        cell.value = Some(digit);
        cell.is_editable = false;

        if check_cell_validity(board, coordinate) != CellValidity::Invalid
            && try_fill_from(board, index + 1, rng)
        {
            return true;
        }

        let cell = board.cell_at_mut(index);
        cell.value = None;
        cell.is_editable = true;
    }

    // Nothing worked; backtrack to the previous choice point.
    false
}

/// Returns whether clusters 0 and 1 hold identical digit sequences, compared
/// cell by cell in generation order within each cluster.
fn has_repeating_clusters(board: &GameBoardState) -> bool {
    let cluster = |group: u8| {
        board
            .cells()
            .filter(move |cell| cell.group == group)
            .map(|cell| cell.value)
    };
    cluster(0).eq(cluster(1))
}
