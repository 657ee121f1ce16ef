//! Board rendering for the GUI

use crate::rules::WinningLine;
use crate::{Board, Cell, Move, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Move>,
        winning_line: Option<WinningLine>,
        accepts_input: bool,
    ) -> Option<Move> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(2.0 * BOARD_MARGIN + 40.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked_pos = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if board.get(board_pos) == Cell::Empty {
                        painter.rect_filled(self.cell_rect(board_pos).shrink(4.0), CornerRadius::same(4), hover_valid());
                    }
                    // Occupied cells are reported too; the session rejects them
                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the inner grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for pos in board.occupied().iter_ones() {
            self.draw_mark(painter, pos, board.get(pos));
        }
    }

    /// `O` as a ring, `X` as two strokes
    fn draw_mark(&self, painter: &Painter, pos: Move, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_RATIO;

        match cell {
            Cell::Human => {
                painter.circle_stroke(center, radius, Stroke::new(MARK_STROKE, HUMAN_MARK));
            }
            Cell::Computer => {
                let stroke = Stroke::new(MARK_STROKE, COMPUTER_MARK);
                let d = Vec2::splat(radius * 0.9);
                painter.line_segment([center - d, center + d], stroke);
                painter.line_segment(
                    [center + Vec2::new(-d.x, d.y), center + Vec2::new(d.x, -d.y)],
                    stroke,
                );
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Move) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-12.0, 12.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &WinningLine) {
        let stroke = Stroke::new(5.0, WIN_HIGHLIGHT);

        let first = self.board_to_screen(line.cells[0]);
        let last = self.board_to_screen(line.cells[BOARD_SIZE - 1]);
        painter.line_segment([first, last], stroke);

        for &pos in &line.cells {
            painter.rect_stroke(
                self.cell_rect(pos).shrink(3.0),
                CornerRadius::same(4),
                Stroke::new(2.0, WIN_HIGHLIGHT),
                egui::StrokeKind::Inside,
            );
        }
    }

    /// Screen rectangle covered by a cell
    fn cell_rect(&self, pos: Move) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Move> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }
        Move::try_new(y.floor() as usize, x.floor() as usize)
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Move) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(2.0 * BOARD_MARGIN + 400.0)),
        }
    }

    #[test]
    fn test_screen_to_board() {
        let view = view();
        let m = BOARD_MARGIN;
        assert_eq!(view.screen_to_board(Pos2::new(m + 1.0, m + 1.0)), Some(Move::new(0, 0)));
        assert_eq!(view.screen_to_board(Pos2::new(m + 350.0, m + 150.0)), Some(Move::new(1, 3)));
        assert_eq!(view.screen_to_board(Pos2::new(m - 5.0, m + 10.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(m + 405.0, m + 10.0)), None);
    }

    #[test]
    fn test_board_to_screen_round_trip() {
        let view = view();
        for pos in Move::all() {
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }
}
