//! Clue pruning for solved boards.

use hexudoku_core::GameBoardState;
use rand::{Rng, seq::SliceRandom};

/// Clears randomly chosen filled cells until `target_filled` clues remain.
///
/// Given a fully solved board, shuffles the filled cells and empties
/// `filled - target_filled` of them, marking each cleared cell editable. The
/// surviving clue cells keep their values and stay non-editable. Removing
/// values cannot introduce new conflicts, so no validity re-check happens
/// here; pruning cannot fail. A target at or above the current filled count
/// clears nothing.
pub fn prune_board<R>(board: &mut GameBoardState, target_filled: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let mut filled: Vec<usize> = (0..board.len())
        .filter(|&i| board.cell_at(i).is_filled())
        .collect();

    let prune_count = filled.len().saturating_sub(target_filled);
    filled.shuffle(rng);

    for &index in filled.iter().take(prune_count) {
        let cell = board.cell_at_mut(index);
        cell.value = None;
        cell.is_editable = true;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::fill::fill_board_with_attempts;

    fn solved_board(seed: u64) -> GameBoardState {
        let mut board = GameBoardState::flower();
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        fill_board_with_attempts(&mut board, &mut rng, 64).expect("flower board is fillable");
        board
    }

    #[test]
    fn test_prune_leaves_target_clue_count() {
        let mut board = solved_board(10);
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        prune_board(&mut board, 15, &mut rng);

        let filled = board.cells().filter(|cell| cell.is_filled()).count();
        assert_eq!(filled, 15);

        let empty_editable = board
            .cells()
            .filter(|cell| !cell.is_filled() && cell.is_editable)
            .count();
        assert_eq!(empty_editable, 34);
    }

    #[test]
    fn test_prune_keeps_clues_locked() {
        let mut board = solved_board(12);
        let mut rng = Pcg64Mcg::seed_from_u64(13);
        prune_board(&mut board, 15, &mut rng);

        for cell in board.cells() {
            if cell.is_filled() {
                assert!(!cell.is_editable, "clue at {} is editable", cell.coordinate);
            } else {
                assert!(cell.is_editable, "hole at {} is locked", cell.coordinate);
            }
        }
    }

    #[test]
    fn test_prune_with_high_target_clears_nothing() {
        let mut board = solved_board(14);
        let before = board.clone();
        let mut rng = Pcg64Mcg::seed_from_u64(15);
        prune_board(&mut board, 49, &mut rng);
        assert_eq!(board, before);

        prune_board(&mut board, 100, &mut rng);
        assert_eq!(board, before);
    }

    #[test]
    fn test_prune_to_zero_empties_the_board() {
        let mut board = solved_board(16);
        let mut rng = Pcg64Mcg::seed_from_u64(17);
        prune_board(&mut board, 0, &mut rng);
        assert!(board.cells().all(|cell| !cell.is_filled() && cell.is_editable));
    }
}
