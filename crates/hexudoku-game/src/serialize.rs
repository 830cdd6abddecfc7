//! Versioned save format for game boards.
//!
//! Boards are encoded to a plain JSON record mirroring the core types field
//! for field: per-cell coordinate, value, selection, editability, note sets,
//! group, and validity, plus the board-level completion flag. The record is
//! tagged with [`SCHEMA_VERSION`]; decoding rejects any other version. Core
//! types stay serde-free, the serde derives live on the save-format DTOs
//! here.

use derive_more::{Display, Error, From};
use hexudoku_core::{
    CellState, Digit, DigitSet, DuplicateCoordinate, GameBoardState, HexCoordinate,
    update_board_validity,
};
use log::warn;
use serde::{Deserialize, Serialize};

/// Version tag written into every saved board. Decoding fails unless the
/// saved tag matches exactly.
pub const SCHEMA_VERSION: u32 = 1;

/// Error produced when a board cannot be encoded.
#[derive(Debug, Display, Error, From)]
pub enum EncodeError {
    /// The JSON encoder failed.
    #[display("failed to encode game state: {_0}")]
    Json(#[error(source)] serde_json::Error),
}

/// Error produced when a saved board cannot be decoded.
#[derive(Debug, Display, Error, From)]
pub enum DecodeError {
    /// The input is not valid JSON for the save schema.
    #[display("failed to parse saved game state: {_0}")]
    Json(#[error(source)] serde_json::Error),
    /// The saved version tag does not match [`SCHEMA_VERSION`].
    #[display("saved state version {found} does not match current version {expected}")]
    #[from(skip)]
    VersionMismatch {
        /// The version this build understands.
        expected: u32,
        /// The version found in the saved state.
        found: u32,
    },
    /// A saved cell carries a digit outside 1-7.
    #[display("saved cell at ({q}, {r}) has out-of-range digit {value}")]
    #[from(skip)]
    InvalidDigit {
        /// The cell's q coordinate.
        q: i32,
        /// The cell's r coordinate.
        r: i32,
        /// The offending digit value.
        value: u8,
    },
    /// A saved cell carries a group id outside 0-6.
    #[display("saved cell at ({q}, {r}) has out-of-range group {group}")]
    #[from(skip)]
    InvalidGroup {
        /// The cell's q coordinate.
        q: i32,
        /// The cell's r coordinate.
        r: i32,
        /// The offending group id.
        group: u8,
    },
    /// Two saved cells share a coordinate.
    #[display("{_0}")]
    DuplicateCoordinate(#[error(source)] DuplicateCoordinate),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedBoard {
    version: u32,
    cells: Vec<SavedCell>,
    is_complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedCell {
    q: i32,
    r: i32,
    value: Option<u8>,
    is_selected: bool,
    is_editable: bool,
    center_notes: Vec<u8>,
    outer_notes: Vec<u8>,
    group: u8,
    is_valid: bool,
}

impl From<&CellState> for SavedCell {
    fn from(cell: &CellState) -> Self {
        Self {
            q: cell.coordinate.q,
            r: cell.coordinate.r,
            value: cell.value.map(Digit::value),
            is_selected: cell.is_selected,
            is_editable: cell.is_editable,
            center_notes: cell.center_notes.iter().map(Digit::value).collect(),
            outer_notes: cell.outer_notes.iter().map(Digit::value).collect(),
            group: cell.group,
            is_valid: cell.is_valid,
        }
    }
}

/// Encodes a board into the versioned JSON save format.
///
/// # Errors
///
/// Returns [`EncodeError::Json`] if the JSON encoder fails.
pub fn serialise_game_state(board: &GameBoardState) -> Result<String, EncodeError> {
    let saved = SavedBoard {
        version: SCHEMA_VERSION,
        cells: board.cells().map(SavedCell::from).collect(),
        is_complete: board.is_complete(),
    };
    Ok(serde_json::to_string(&saved)?)
}

/// Decodes a board from the versioned JSON save format.
///
/// The restored board goes through a full validity pass, so the per-cell
/// validity flags and the completion flag of an inconsistent save are
/// recomputed rather than trusted.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the input is not valid JSON for the
/// schema, the version tag differs from [`SCHEMA_VERSION`], a digit or group
/// id is out of range, or two cells share a coordinate.
pub fn deserialise_game_state(serialised: &str) -> Result<GameBoardState, DecodeError> {
    let saved: SavedBoard = serde_json::from_str(serialised)?;

    if saved.version != SCHEMA_VERSION {
        return Err(DecodeError::VersionMismatch {
            expected: SCHEMA_VERSION,
            found: saved.version,
        });
    }

    let cells = saved
        .cells
        .iter()
        .map(restore_cell)
        .collect::<Result<Vec<_>, _>>()?;

    let mut board = GameBoardState::from_cells(cells)?;
    update_board_validity(&mut board);
    Ok(board)
}

/// Decodes a saved board, treating any failure as absent state.
///
/// A failed decode is logged and yields `None`; callers fall back to
/// generating a fresh board instead of crashing on stale saves.
#[must_use]
pub fn load_saved_state(serialised: &str) -> Option<GameBoardState> {
    match deserialise_game_state(serialised) {
        Ok(board) => Some(board),
        Err(err) => {
            warn!("Failed to restore saved game state: {err}");
            None
        }
    }
}

fn restore_cell(saved: &SavedCell) -> Result<CellState, DecodeError> {
    let digit = |value: u8| {
        Digit::try_from_value(value).ok_or(DecodeError::InvalidDigit {
            q: saved.q,
            r: saved.r,
            value,
        })
    };

    if saved.group > 6 {
        return Err(DecodeError::InvalidGroup {
            q: saved.q,
            r: saved.r,
            group: saved.group,
        });
    }

    let value = saved.value.map(digit).transpose()?;
    let mut center_notes = DigitSet::new();
    for &note in &saved.center_notes {
        center_notes.insert(digit(note)?);
    }
    let mut outer_notes = DigitSet::new();
    for &note in &saved.outer_notes {
        outer_notes.insert(digit(note)?);
    }

    Ok(CellState {
        coordinate: HexCoordinate::new(saved.q, saved.r),
        group: saved.group,
        value,
        center_notes,
        outer_notes,
        is_selected: saved.is_selected,
        is_editable: saved.is_editable,
        is_valid: saved.is_valid,
    })
}
