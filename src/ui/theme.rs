//! Theme constants for the GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 232, 222);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 72, 78);

// Marks
pub const HUMAN_MARK: Color32 = Color32::from_rgb(40, 110, 200);
pub const COMPUTER_MARK: Color32 = Color32::from_rgb(205, 60, 60);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 170, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 90);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 110, 200, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_LOSS: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_STROKE: f32 = 6.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
