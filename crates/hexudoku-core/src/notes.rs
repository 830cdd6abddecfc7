//! Note cleanup after a digit placement.

use crate::{Digit, GameBoardState, HexCoordinate, HexDirection};

/// Removes `value` from the candidate notes of every cell sharing a unit with
/// a placement at `from`.
///
/// Walks each of the six directions outward from `from` until a coordinate
/// misses the board (covering all three ranks through the placement, one
/// half-rank per walk), then sweeps the placement's group. Only editable
/// cells are touched; clue cells and the committing cell itself keep their
/// notes. This is a best-effort aid for the player, not a correctness rule.
///
/// # Panics
///
/// Panics if `from` is not a cell on the board.
pub fn clear_notes_in_appropriate_cells(
    board: &mut GameBoardState,
    value: Digit,
    from: HexCoordinate,
) {
    let group = board
        .cell(from)
        .expect("Expected starting coordinate to be on the board")
        .group;

    // Clear the ranks
    for direction in HexDirection::ALL {
        let mut coordinate = from.next(direction);
        while let Some(cell) = board.cell_mut(coordinate) {
            coordinate = coordinate.next(direction);
            if !cell.is_editable {
                continue;
            }
            cell.center_notes.remove(value);
            cell.outer_notes.remove(value);
        }
    }

    // Clear the group
    for cell in board.cells_mut() {
        if !cell.is_editable || cell.group != group || cell.coordinate == from {
            continue;
        }
        cell.center_notes.remove(value);
        cell.outer_notes.remove(value);
    }
}
