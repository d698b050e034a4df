//! Theme constants for the Connect Four GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(28, 78, 190);
pub const BOARD_SHADOW: Color32 = Color32::from_rgb(18, 52, 130);
pub const HOLE: Color32 = Color32::from_rgb(20, 22, 26);

// Piece colors
pub const RED_PIECE: Color32 = Color32::from_rgb(220, 40, 40);
pub const RED_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(250, 110, 100);
pub const YELLOW_PIECE: Color32 = Color32::from_rgb(245, 205, 30);
pub const YELLOW_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(255, 240, 140);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(240, 240, 245);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_piece(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 140)
}

pub fn hover_column() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 24)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAIT: Color32 = Color32::from_rgb(255, 180, 50);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
/// Space above the grid for the hovering piece, in cells
pub const DROP_ZONE: f32 = 1.0;
/// Space below the grid for column numbers
pub const LABEL_BAND: f32 = 24.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.42;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Fill and highlight color for a mark's pieces
pub fn piece_colors(mark: crate::Mark) -> (Color32, Color32) {
    match mark {
        crate::Mark::Red => (RED_PIECE, RED_PIECE_HIGHLIGHT),
        crate::Mark::Yellow => (YELLOW_PIECE, YELLOW_PIECE_HIGHLIGHT),
    }
}
