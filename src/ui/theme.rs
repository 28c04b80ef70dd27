// LogSage - ui/theme.rs
//
// Colour and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Error highlight (matched snippet lines, failure messages).
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Warning / caution text.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Success / ready text.
pub const OK_TEXT: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Muted secondary text.
pub const MUTED_TEXT: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 320.0;
pub const PREVIEW_PANE_HEIGHT: f32 = 220.0;
pub const SNIPPET_TEXT_SIZE: f32 = 11.5;
