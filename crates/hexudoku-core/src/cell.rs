//! Per-cell board state.

use crate::{Digit, DigitSet, HexCoordinate};

/// The state of a single board cell.
///
/// The coordinate and group are fixed at topology generation; the remaining
/// fields are mutated in place by the generator, the validity checker, and
/// player actions. Fields are public because the board is the single source
/// of truth and its algorithms read and write cells directly (the solver
/// mutates cells as a backtracking side channel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellState {
    /// The cell's coordinate, its identity on the board.
    pub coordinate: HexCoordinate,
    /// Which of the seven flower clusters (0-6) the cell belongs to.
    pub group: u8,
    /// The placed digit, or `None` for an empty cell.
    pub value: Option<Digit>,
    /// Candidate digits noted in the cell center.
    pub center_notes: DigitSet,
    /// Candidate digits noted around the cell edge.
    pub outer_notes: DigitSet,
    /// Whether the cell is currently selected. Owned by the UI layer; the
    /// solver and validity checker never read it.
    pub is_selected: bool,
    /// `false` for original clue cells, `true` for player-fillable cells.
    pub is_editable: bool,
    /// Whether the current value violates no unit constraint. Recomputed by
    /// the validity checker; an empty cell counts as valid.
    pub is_valid: bool,
}

impl CellState {
    /// Creates an empty, editable, valid cell at the given coordinate.
    #[must_use]
    pub const fn new(coordinate: HexCoordinate, group: u8) -> Self {
        Self {
            coordinate,
            group,
            value: None,
            center_notes: DigitSet::EMPTY,
            outer_notes: DigitSet::EMPTY,
            is_selected: false,
            is_editable: true,
            is_valid: true,
        }
    }

    /// Returns whether the cell has a placed digit.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.value.is_some()
    }
}
