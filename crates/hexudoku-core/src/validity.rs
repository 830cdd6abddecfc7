//! Constraint validity checking.

use crate::{DigitSet, GameBoardState, HexCoordinate, UnitType};

/// The validity of a single cell against all unit constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValidity {
    /// The cell has no value.
    Blank,
    /// The cell's value violates no unit constraint.
    Valid,
    /// The cell's value appears in another cell of at least one of its units.
    Invalid,
}

/// Checks the cell at `coordinate` against all four unit types.
///
/// Returns [`CellValidity::Blank`] for an empty cell. Otherwise the cell's
/// digit is tested for uniqueness within each of its units, short-circuiting
/// to [`CellValidity::Invalid`] on the first unit containing the same digit
/// elsewhere; any single violation is sufficient.
///
/// # Panics
///
/// Panics if `coordinate` is not a cell on the board.
#[must_use]
pub fn check_cell_validity(board: &GameBoardState, coordinate: HexCoordinate) -> CellValidity {
    let cell = board
        .cell(coordinate)
        .expect("Expected starting coordinate to be on the board");
    let Some(value) = cell.value else {
        return CellValidity::Blank;
    };

    for unit_type in UnitType::ALL {
        let mut seen = DigitSet::new();
        for other in board.unit(coordinate, unit_type) {
            if other.coordinate == coordinate {
                continue;
            }
            if let Some(digit) = other.value {
                seen.insert(digit);
            }
        }
        if seen.contains(value) {
            return CellValidity::Invalid;
        }
    }

    CellValidity::Valid
}

/// Recomputes every cell's `is_valid` flag and the board completion state.
///
/// A cell is flagged valid unless its value conflicts within a unit (blank
/// cells stay valid); the board is complete iff every cell checks as
/// [`CellValidity::Valid`], so a single blank or invalid cell anywhere keeps
/// it incomplete. The update happens in place behind the mutable borrow, so
/// no reader can observe a partially refreshed board. Calling this twice
/// without an intervening mutation yields the same result.
pub fn update_board_validity(board: &mut GameBoardState) {
    let mut is_complete = true;
    let mut flags = Vec::with_capacity(board.len());

    for cell in board.cells() {
        let validity = check_cell_validity(board, cell.coordinate);
        if validity != CellValidity::Valid {
            is_complete = false;
        }
        flags.push(validity != CellValidity::Invalid);
    }

    for (cell, is_valid) in board.cells_mut().zip(flags) {
        cell.is_valid = is_valid;
    }
    board.is_complete = is_complete;
}
