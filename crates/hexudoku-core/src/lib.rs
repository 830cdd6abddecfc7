//! Core data structures and rules for the hexudoku puzzle engine.
//!
//! Hexudoku is a Sudoku variant played on a hexagonal "flower" board: seven
//! clusters of seven cells each, where every cluster and every rank of cells
//! sharing an axial coordinate must contain the digits 1-7 at most once.
//!
//! # Overview
//!
//! - [`coord`]: axial hex coordinates ([`HexCoordinate`]) and the six unit
//!   directions ([`HexDirection`])
//! - [`digit`] / [`digit_set`]: type-safe digits 1-7 and candidate-note sets
//! - [`cell`]: per-cell state ([`CellState`])
//! - [`board`]: the flower topology ([`GameBoardState::flower`]) and
//!   constraint-unit resolution ([`GameBoardState::unit`])
//! - [`validity`]: per-cell and whole-board constraint checking
//! - [`notes`]: candidate-note cleanup after a placement
//!
//! Puzzle generation (random fill and pruning) lives in the
//! `hexudoku-generator` crate; the save format and background generation in
//! `hexudoku-game`.
//!
//! # Examples
//!
//! ```
//! use hexudoku_core::{
//!     CellValidity, Digit, GameBoardState, HexCoordinate, check_cell_validity,
//! };
//!
//! let mut board = GameBoardState::flower();
//! assert_eq!(board.len(), 49);
//!
//! let coord = HexCoordinate::new(4, 2);
//! board.cell_mut(coord).unwrap().value = Some(Digit::D3);
//! assert_eq!(check_cell_validity(&board, coord), CellValidity::Valid);
//! ```

pub use self::{
    board::{DuplicateCoordinate, FLOWER_CENTERS, GameBoardState, UnitType},
    cell::CellState,
    coord::{HexCoordinate, HexDirection},
    digit::Digit,
    digit_set::DigitSet,
    notes::clear_notes_in_appropriate_cells,
    validity::{CellValidity, check_cell_validity, update_board_validity},
};

pub mod board;
pub mod cell;
pub mod coord;
pub mod digit;
pub mod digit_set;
pub mod notes;
pub mod validity;
