//! Color theme constants for the portfolio UI
//!
//! A dark terminal palette with a single peach accent.

use ratatui::style::Color;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the cursor, selection and active file
pub const COLOR_ACCENT: Color = Color::Rgb(255, 199, 153);

/// Section titles
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for hints and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Directory entries in the file tree
pub const COLOR_FOLDER: Color = Color::Rgb(130, 170, 255);

/// Links and key hints
pub const COLOR_LINK: Color = Color::Cyan;

// ============================================================================
// Status Bar
// ============================================================================

/// Mode badge background in NORMAL mode
pub const COLOR_MODE_NORMAL: Color = Color::Rgb(130, 170, 255);

/// Mode badge background in COMMAND mode
pub const COLOR_MODE_COMMAND: Color = Color::Rgb(255, 199, 153);

/// Status bar background
pub const COLOR_STATUS_BG: Color = Color::Rgb(30, 30, 40);

// ============================================================================
// Overlays
// ============================================================================

/// Background for palette and help dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(18, 18, 26);

/// Background of the selected palette row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(45, 45, 60);

/// Toast colors
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);
pub const COLOR_ERROR: Color = Color::Red;
