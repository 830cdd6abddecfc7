//! The game board: flower topology and constraint units.

use std::collections::HashMap;

use derive_more::{Display, Error};

use crate::{CellState, HexCoordinate, HexDirection};

/// The cluster centers of the flower board, in generation order.
///
/// Each center spawns a cluster of seven cells (itself plus its six
/// neighbors) tagged with the center's index as group id. The list and its
/// order are part of the board-shape contract: changing either produces a
/// different topology.
pub const FLOWER_CENTERS: [HexCoordinate; 7] = [
    HexCoordinate::new(4, 2),
    HexCoordinate::new(3, 0),
    HexCoordinate::new(6, -1),
    HexCoordinate::new(7, 1),
    HexCoordinate::new(5, 4),
    HexCoordinate::new(2, 5),
    HexCoordinate::new(1, 3),
];

/// A kind of constraint unit: the set of cells that must hold each digit at
/// most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    /// All cells with the same group id. The flower-cluster equivalent of a
    /// Sudoku box.
    Group,
    /// All cells sharing the same `q` value.
    QRank,
    /// All cells sharing the same `r` value.
    RRank,
    /// All cells sharing the same `s = -q - r` value.
    SRank,
}

impl UnitType {
    /// All four unit types, in the order the validity checker consults them.
    pub const ALL: [Self; 4] = [Self::Group, Self::QRank, Self::RRank, Self::SRank];
}

/// Error returned when rebuilding a board from a cell list that contains the
/// same coordinate twice.
#[derive(Debug, Display, Error)]
#[display("duplicate coordinate {coordinate} in cell list")]
pub struct DuplicateCoordinate {
    /// The coordinate that appeared more than once.
    pub coordinate: HexCoordinate,
}

/// The state of the whole game board.
///
/// Cells are stored as a flat array in generation order, with a
/// coordinate-to-index map built once at construction; the backtracking
/// solver mutates cells through direct index access while lookups by
/// coordinate stay cheap. There is exactly one entry per generated
/// coordinate.
///
/// # Examples
///
/// ```
/// use hexudoku_core::{GameBoardState, HexCoordinate};
///
/// let board = GameBoardState::flower();
/// assert_eq!(board.len(), 49);
/// assert!(board.cell(HexCoordinate::new(4, 2)).is_some());
/// assert!(!board.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoardState {
    cells: Vec<CellState>,
    index: HashMap<HexCoordinate, usize>,
    pub(crate) is_complete: bool,
}

impl GameBoardState {
    /// Builds the fixed 49-cell flower board.
    ///
    /// For each center in [`FLOWER_CENTERS`], the center cell is inserted
    /// first, followed by its six neighbors in [`HexDirection::ALL`] order,
    /// all tagged with the center's group id. If a coordinate were shared
    /// between clusters, the first insertion would win; the published center
    /// list produces no overlaps. All cells start empty and editable.
    #[must_use]
    pub fn flower() -> Self {
        let mut board = Self {
            cells: Vec::with_capacity(49),
            index: HashMap::with_capacity(49),
            is_complete: false,
        };

        #[expect(clippy::cast_possible_truncation)]
        for (group, center) in FLOWER_CENTERS.into_iter().enumerate() {
            board.insert_if_absent(CellState::new(center, group as u8));
            for direction in HexDirection::ALL {
                let coordinate = center.next(direction);
                board.insert_if_absent(CellState::new(coordinate, group as u8));
            }
        }

        board
    }

    fn insert_if_absent(&mut self, cell: CellState) {
        if self.index.contains_key(&cell.coordinate) {
            return;
        }
        self.index.insert(cell.coordinate, self.cells.len());
        self.cells.push(cell);
    }

    /// Rebuilds a board from an explicit cell list, preserving its order.
    ///
    /// The completion flag starts `false`; callers restoring a saved board
    /// run the validity pass or set it from their own record.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateCoordinate`] if two cells share a coordinate.
    pub fn from_cells(
        cells: impl IntoIterator<Item = CellState>,
    ) -> Result<Self, DuplicateCoordinate> {
        let cells: Vec<_> = cells.into_iter().collect();
        let mut index = HashMap::with_capacity(cells.len());
        for (i, cell) in cells.iter().enumerate() {
            if index.insert(cell.coordinate, i).is_some() {
                return Err(DuplicateCoordinate {
                    coordinate: cell.coordinate,
                });
            }
        }
        Ok(Self {
            cells,
            index,
            is_complete: false,
        })
    }

    /// Returns the number of cells on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether the board has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns whether every cell is filled and valid. Maintained by the
    /// validity checker.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Returns whether the coordinate corresponds to a cell on the board.
    #[must_use]
    pub fn contains(&self, coordinate: HexCoordinate) -> bool {
        self.index.contains_key(&coordinate)
    }

    /// Returns the cell at the given coordinate, if any.
    #[must_use]
    pub fn cell(&self, coordinate: HexCoordinate) -> Option<&CellState> {
        self.index.get(&coordinate).map(|&i| &self.cells[i])
    }

    /// Returns a mutable reference to the cell at the given coordinate.
    #[must_use]
    pub fn cell_mut(&mut self, coordinate: HexCoordinate) -> Option<&mut CellState> {
        self.index.get(&coordinate).map(|&i| &mut self.cells[i])
    }

    /// Returns the cell at the given generation-order position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> &CellState {
        &self.cells[index]
    }

    /// Returns a mutable reference to the cell at the given generation-order
    /// position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn cell_at_mut(&mut self, index: usize) -> &mut CellState {
        &mut self.cells[index]
    }

    /// Returns an iterator over all cells in generation order.
    pub fn cells(&self) -> impl Iterator<Item = &CellState> {
        self.cells.iter()
    }

    /// Returns a mutable iterator over all cells in generation order.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut CellState> {
        self.cells.iter_mut()
    }

    /// Returns all cells forming the given unit through `start`, including
    /// the start cell itself.
    ///
    /// Callers must not depend on any ordering beyond board iteration order.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a cell on the board; passing an off-board
    /// coordinate is a caller bug, not a recoverable condition.
    #[must_use]
    pub fn unit(&self, start: HexCoordinate, unit_type: UnitType) -> Vec<&CellState> {
        self.unit_indices(start, unit_type)
            .map(|i| &self.cells[i])
            .collect()
    }

    /// Iterator form of [`unit`](Self::unit), yielding generation-order
    /// indices. Same contract, same panic.
    pub(crate) fn unit_indices(
        &self,
        start: HexCoordinate,
        unit_type: UnitType,
    ) -> impl Iterator<Item = usize> {
        let start_cell = self
            .cell(start)
            .expect("Expected starting coordinate to be on the board");
        let group = start_cell.group;

        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let same_unit = match unit_type {
                UnitType::Group => cell.group == group,
                UnitType::QRank => cell.coordinate.q == start.q,
                UnitType::RRank => cell.coordinate.r == start.r,
                UnitType::SRank => cell.coordinate.s() == start.s(),
            };
            same_unit.then_some(i)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_flower_has_49_cells_in_7_groups() {
        let board = GameBoardState::flower();
        assert_eq!(board.len(), 49);

        let mut group_sizes = [0usize; 7];
        for cell in board.cells() {
            group_sizes[usize::from(cell.group)] += 1;
        }
        assert_eq!(group_sizes, [7; 7]);
    }

    #[test]
    fn test_flower_cells_start_empty_and_editable() {
        let board = GameBoardState::flower();
        for cell in board.cells() {
            assert_eq!(cell.value, None);
            assert!(cell.is_editable);
            assert!(cell.is_valid);
        }
        assert!(!board.is_complete());
    }

    #[test]
    fn test_flower_cluster_layout() {
        let board = GameBoardState::flower();

        // Each center leads its cluster in generation order.
        for (group, center) in FLOWER_CENTERS.into_iter().enumerate() {
            assert_eq!(board.cell_at(group * 7).coordinate, center);
            let center_cell = board.cell(center).expect("center is on the board");
            assert_eq!(usize::from(center_cell.group), group);
            for direction in HexDirection::ALL {
                let neighbor = board
                    .cell(center.next(direction))
                    .expect("center neighbor is on the board");
                assert_eq!(usize::from(neighbor.group), group);
            }
        }
    }

    #[test]
    fn test_flower_is_reproducible() {
        assert_eq!(GameBoardState::flower(), GameBoardState::flower());
    }

    #[test]
    fn test_group_units_have_7_cells() {
        let board = GameBoardState::flower();
        for center in FLOWER_CENTERS {
            let unit = board.unit(center, UnitType::Group);
            assert_eq!(unit.len(), 7);
        }
    }

    #[test]
    fn test_rank_units_partition_the_board() {
        let board = GameBoardState::flower();
        // Interior ranks hold 7 cells; edge ranks taper to 5 and 2. Each rank
        // family covers all 49 cells exactly once.
        for unit_type in [UnitType::QRank, UnitType::RRank, UnitType::SRank] {
            let mut sizes: HashMap<i32, usize> = HashMap::new();
            for cell in board.cells() {
                let key = match unit_type {
                    UnitType::QRank => cell.coordinate.q,
                    UnitType::RRank => cell.coordinate.r,
                    UnitType::SRank => cell.coordinate.s(),
                    UnitType::Group => unreachable!(),
                };
                *sizes.entry(key).or_default() += 1;
            }

            let mut counts: Vec<_> = sizes.values().copied().collect();
            counts.sort_unstable();
            assert_eq!(counts, [2, 2, 5, 5, 7, 7, 7, 7, 7]);
            assert_eq!(counts.iter().sum::<usize>(), 49);

            for cell in board.cells() {
                let unit = board.unit(cell.coordinate, unit_type);
                let key = match unit_type {
                    UnitType::QRank => cell.coordinate.q,
                    UnitType::RRank => cell.coordinate.r,
                    UnitType::SRank => cell.coordinate.s(),
                    UnitType::Group => unreachable!(),
                };
                assert_eq!(unit.len(), sizes[&key]);
            }
        }
    }

    #[test]
    fn test_unit_includes_start_cell() {
        let board = GameBoardState::flower();
        let start = HexCoordinate::new(4, 2);
        for unit_type in UnitType::ALL {
            let unit = board.unit(start, unit_type);
            assert!(unit.iter().any(|cell| cell.coordinate == start));
        }
    }

    #[test]
    fn test_qrank_unit_shares_q() {
        let board = GameBoardState::flower();
        let unit = board.unit(HexCoordinate::new(4, 2), UnitType::QRank);
        assert_eq!(unit.len(), 7);
        assert!(unit.iter().all(|cell| cell.coordinate.q == 4));
    }

    #[test]
    #[should_panic(expected = "starting coordinate to be on the board")]
    fn test_unit_panics_off_board() {
        let board = GameBoardState::flower();
        let _ = board.unit(HexCoordinate::new(100, 100), UnitType::Group);
    }

    #[test]
    fn test_from_cells_rejects_duplicates() {
        let coord = HexCoordinate::new(1, 1);
        let cells = vec![CellState::new(coord, 0), CellState::new(coord, 1)];
        let err = GameBoardState::from_cells(cells).expect_err("duplicate coordinate");
        assert_eq!(err.coordinate, coord);
    }

    #[test]
    fn test_from_cells_round_trips_flower() {
        let board = GameBoardState::flower();
        let rebuilt = GameBoardState::from_cells(board.cells().cloned().collect::<Vec<_>>())
            .expect("flower board has unique coordinates");
        assert_eq!(rebuilt, board);
    }
}
