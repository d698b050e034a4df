//! Board rendering for the Connect Four GUI

use crate::board::{Window, COLUMN_COUNT, ROW_COUNT};
use crate::{is_legal_move, Board, Mark, Pos};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Area covered by the 6x7 grid of holes
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any.
    ///
    /// The hover piece and clicks are only shown/accepted while
    /// `accepting_input` is true.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Pos>,
        winning_line: Option<Window>,
        accepting_input: bool,
    ) -> Option<usize> {
        let available = ui.available_size();
        let cols = COLUMN_COUNT as f32;
        let rows = ROW_COUNT as f32 + DROP_ZONE;

        // Fit the grid plus drop zone and label band into the panel
        let by_width = (available.x - 2.0 * BOARD_MARGIN) / cols;
        let by_height = (available.y - 2.0 * BOARD_MARGIN - LABEL_BAND) / rows;
        self.cell_size = by_width.min(by_height).max(10.0);

        let size = Vec2::new(
            cols * self.cell_size + 2.0 * BOARD_MARGIN,
            rows * self.cell_size + 2.0 * BOARD_MARGIN + LABEL_BAND,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());

        let grid_min = response.rect.min
            + Vec2::new(BOARD_MARGIN, BOARD_MARGIN + DROP_ZONE * self.cell_size);
        self.grid_rect = Rect::from_min_size(
            grid_min,
            Vec2::new(cols * self.cell_size, ROW_COUNT as f32 * self.cell_size),
        );

        let hovered_column = if accepting_input {
            response
                .hover_pos()
                .and_then(|pointer| self.screen_to_column(pointer))
        } else {
            None
        };

        if let Some(col) = hovered_column {
            self.draw_column_highlight(&painter, col);
        }

        // Board body
        painter.rect_filled(
            self.grid_rect.translate(Vec2::new(3.0, 3.0)).expand(6.0),
            CornerRadius::same(10),
            BOARD_SHADOW,
        );
        painter.rect_filled(self.grid_rect.expand(6.0), CornerRadius::same(10), BOARD_BG);

        self.draw_pieces(&painter, board);
        self.draw_column_numbers(&painter);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked_column = None;

        if let Some(col) = hovered_column {
            let playable = is_legal_move(board, col);
            self.draw_hover_piece(&painter, col, current_turn, playable);

            if response.clicked() && playable {
                clicked_column = Some(col);
            }
        }

        clicked_column
    }

    /// Draw every hole, filled or empty
    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for row in 0..ROW_COUNT {
            for col in 0..COLUMN_COUNT {
                let pos = Pos::new(row as u8, col as u8);
                match board.get(pos).mark() {
                    Some(mark) => self.draw_piece(painter, self.cell_center(pos), mark),
                    None => {
                        let radius = self.cell_size * PIECE_RADIUS_RATIO;
                        painter.circle_filled(self.cell_center(pos), radius, HOLE);
                    }
                }
            }
        }
    }

    /// Draw a single piece with a small highlight
    fn draw_piece(&self, painter: &Painter, center: Pos2, mark: Mark) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, highlight) = piece_colors(mark);

        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(
            center,
            radius * 0.75,
            Stroke::new(radius * 0.08, highlight),
        );
    }

    /// Translucent piece above the hovered column
    fn draw_hover_piece(&self, painter: &Painter, col: usize, turn: Mark, playable: bool) {
        let center = Pos2::new(
            self.grid_rect.min.x + (col as f32 + 0.5) * self.cell_size,
            self.grid_rect.min.y - 0.5 * DROP_ZONE * self.cell_size,
        );
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        if playable {
            let (fill, _) = piece_colors(turn);
            painter.circle_filled(center, radius, hover_piece(fill));
        } else {
            painter.circle_stroke(center, radius, Stroke::new(2.0, TEXT_MUTED));
        }
    }

    fn draw_column_highlight(&self, painter: &Painter, col: usize) {
        let left = self.grid_rect.min.x + col as f32 * self.cell_size;
        let rect = Rect::from_min_max(
            Pos2::new(left, self.grid_rect.min.y - DROP_ZONE * self.cell_size),
            Pos2::new(left + self.cell_size, self.grid_rect.max.y),
        );
        painter.rect_filled(rect, CornerRadius::same(6), hover_column());
    }

    /// Column numbers 1-7 under the board
    fn draw_column_numbers(&self, painter: &Painter) {
        let font = egui::FontId::proportional(14.0);
        let y = self.grid_rect.max.y + 6.0 + LABEL_BAND * 0.5;

        for col in 0..COLUMN_COUNT {
            let x = self.grid_rect.min.x + (col as f32 + 0.5) * self.cell_size;
            painter.text(
                Pos2::new(x, y),
                egui::Align2::CENTER_CENTER,
                format!("{}", col + 1),
                font.clone(),
                TEXT_SECONDARY,
            );
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &Window) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }

        // Draw circles around winning pieces
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.cell_center(pos), radius, stroke);
        }
    }

    /// Convert a screen x coordinate to a board column
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let x = (screen_pos.x - self.grid_rect.min.x) / self.cell_size;
        let col = x.floor() as i32;

        if (0..COLUMN_COUNT as i32).contains(&col) {
            Some(col as usize)
        } else {
            None
        }
    }

    /// Centre of a grid cell on screen
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.grid_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.grid_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 50.0,
            grid_rect: Rect::from_min_size(Pos2::new(100.0, 100.0), Vec2::new(350.0, 300.0)),
        }
    }

    #[test]
    fn test_screen_to_column() {
        let view = view();
        assert_eq!(view.screen_to_column(Pos2::new(101.0, 0.0)), Some(0));
        assert_eq!(view.screen_to_column(Pos2::new(275.0, 250.0)), Some(3));
        assert_eq!(view.screen_to_column(Pos2::new(449.0, 120.0)), Some(6));
        assert_eq!(view.screen_to_column(Pos2::new(99.0, 120.0)), None);
        assert_eq!(view.screen_to_column(Pos2::new(451.0, 120.0)), None);
    }

    #[test]
    fn test_cell_center() {
        let view = view();
        assert_eq!(view.cell_center(Pos::new(0, 0)), Pos2::new(125.0, 125.0));
        assert_eq!(view.cell_center(Pos::new(5, 6)), Pos2::new(425.0, 375.0));
    }

    #[test]
    fn test_piece_colors_differ() {
        let (red, _) = piece_colors(Mark::Red);
        let (yellow, _) = piece_colors(Mark::Yellow);
        assert_ne!(red, yellow);
        assert_eq!(red, RED_PIECE);
    }
}
