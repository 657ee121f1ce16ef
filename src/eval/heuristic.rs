//! Heuristic scoring of empty cells

use crate::board::{Board, Move, Player};
use crate::rules::{ANTI_DIAGONAL, COL_MASKS, MAIN_DIAGONAL, ROW_MASKS};

use super::patterns::LineWeight;

/// Score a cell for `player`.
///
/// `ROW * row marks + COLUMN * column marks`, plus
/// `DIAGONAL * max(main diagonal marks, anti-diagonal marks)` when the cell
/// lies on either long diagonal. The diagonal term uses the better diagonal
/// even if the cell is only on the other one.
#[must_use]
pub fn score_cell(board: &Board, pos: Move, player: Player) -> i32 {
    let marks = board.marks(player);

    let row_count = marks.count_in(ROW_MASKS[pos.row as usize]) as i32;
    let col_count = marks.count_in(COL_MASKS[pos.col as usize]) as i32;
    let mut score = row_count * LineWeight::ROW + col_count * LineWeight::COLUMN;

    if pos.on_main_diagonal() || pos.on_anti_diagonal() {
        let main = marks.count_in(MAIN_DIAGONAL) as i32;
        let anti = marks.count_in(ANTI_DIAGONAL) as i32;
        score += main.max(anti) * LineWeight::DIAGONAL;
    }

    score
}

/// Highest scoring empty cell and its score.
///
/// Cells are visited row-major and only a strictly greater score replaces
/// the running best, so ties go to the earliest cell.
#[must_use]
pub fn best_scored_cell(board: &Board, player: Player) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;

    for pos in board.empty_cells() {
        let score = score_cell(board, pos, player);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        for pos in Move::all() {
            assert_eq!(score_cell(&board, pos, Player::Computer), 0);
        }
    }

    #[test]
    fn test_row_and_column_counts() {
        // X at (0,1) and (2,3)
        let board = Board::from_rows([".X..", "....", "...X", "...."]);
        // (0,3): row 0 has 1, col 3 has 1, on anti-diagonal with max(0, 0)
        assert_eq!(score_cell(&board, Move::new(0, 3), Player::Computer), 4);
        // (2,1): row 2 has 1, col 1 has 1, anti-diagonal
        assert_eq!(score_cell(&board, Move::new(2, 1), Player::Computer), 4);
        // (1,0): nothing in row 1 or column 0
        assert_eq!(score_cell(&board, Move::new(1, 0), Player::Computer), 0);
    }

    #[test]
    fn test_diagonal_uses_best_of_both() {
        // Two on the main diagonal, one on the anti-diagonal
        let board = Board::from_rows(["X...", ".X..", "....", "X..."]);
        // (1,2) is on the anti-diagonal only, but the main diagonal count wins:
        // row 1 -> 1, col 2 -> 0, diag max(2, 1) = 2
        assert_eq!(score_cell(&board, Move::new(1, 2), Player::Computer), 2 + 6);
        // (2,2): row 0, col 0, diag 2
        assert_eq!(score_cell(&board, Move::new(2, 2), Player::Computer), 6);
        // (2,3) is off both diagonals
        assert_eq!(score_cell(&board, Move::new(2, 3), Player::Computer), 0);
    }

    #[test]
    fn test_only_own_marks_count() {
        let board = Board::from_rows(["OO..", "....", "....", "...."]);
        assert_eq!(score_cell(&board, Move::new(0, 2), Player::Computer), 0);
        assert_eq!(score_cell(&board, Move::new(0, 2), Player::Human), 4);
    }

    #[test]
    fn test_best_cell_picks_maximum() {
        let board = Board::from_rows(["X...", "....", "..X.", "...."]);
        // Anti-diagonal cells sharing a row or column with an X reach
        // 2 + 3 * 2 = 8: (0,3), (1,2), (2,1), (3,0). (0,3) comes first.
        let (pos, score) = best_scored_cell(&board, Player::Computer).unwrap();
        assert_eq!(pos, Move::new(0, 3));
        assert_eq!(score, 8);
        assert_eq!(score_cell(&board, Move::new(1, 1), Player::Computer), 6);
    }

    #[test]
    fn test_best_cell_tie_goes_to_first() {
        let board = Board::new();
        assert_eq!(
            best_scored_cell(&board, Player::Computer),
            Some((Move::new(0, 0), 0))
        );
    }

    #[test]
    fn test_best_cell_none_when_full() {
        let board = Board::from_rows(["XXOO", "OOXX", "XXOO", "OOXX"]);
        assert_eq!(best_scored_cell(&board, Player::Computer), None);
    }
}
