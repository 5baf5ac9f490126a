//! UI rendering for the portfolio
//!
//! Layout, back to front:
//! - Title bar with the open file path (and the menu button when narrow)
//! - Sidebar file tree
//! - Content: the section document or a project page
//! - Status bar, then the toast above it
//! - Overlays: keyboard help, then the command palette
//!
//! Rendering also rebuilds the [`HitAreaRegistry`] used for mouse clicks, in
//! the same back-to-front order so overlays win hit tests.

mod document;
mod help;
pub mod interaction;
pub mod layout;
mod notification;
mod palette;
mod sidebar;
mod status_bar;
mod theme;

pub use help::HELP_TITLE;
pub use layout::{AppLayout, LayoutContext, PaletteAnchors};
pub use palette::{NO_RESULTS, PLACEHOLDER};
pub use status_bar::copyright_text;
pub use theme::COLOR_ACCENT;

use ratatui::Frame;

use crate::app::App;
use interaction::HitAreaRegistry;

/// Render the whole UI and refresh the app's hit areas.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.sync_area(area);

    let previous = std::mem::take(&mut app.hit_areas);
    let mut hits = HitAreaRegistry::new();
    let layout = app.layout();

    document::render_title_bar(frame, app, layout.title_bar, &mut hits);
    if let Some(sidebar_area) = layout.sidebar {
        sidebar::render_sidebar(frame, app, sidebar_area, &previous, &mut hits);
    }
    document::render_content(frame, app, layout.content);
    status_bar::render_status_bar(frame, app, layout.status_bar);

    if let Some(toast) = &app.notification {
        let above_status = ratatui::layout::Rect::new(
            area.x,
            area.y,
            area.width,
            layout.status_bar.y.saturating_sub(area.y),
        );
        notification::render_notification(frame, toast, above_status);
    }

    if app.help_open {
        help::render_help(frame, area, &mut hits);
    }

    if app.palette.is_open() {
        if let Some(anchors) = PaletteAnchors::compute(area) {
            palette::render_palette(frame, &app.palette, &anchors, &mut hits);
        }
    }

    if let Some((x, y)) = app.mouse_position {
        hits.update_hover(x, y);
    }
    app.hit_areas = hits;
}
