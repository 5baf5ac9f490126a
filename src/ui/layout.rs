//! Responsive Layout System
//!
//! Splits the terminal into the title bar, sidebar, content and status bar,
//! and computes the overlay rectangles for the command palette and the help
//! dialog. Everything here is a pure function of the terminal size.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Breakpoints
// ============================================================================

pub mod breakpoints {
    /// Below this width the sidebar collapses behind a menu toggle
    pub const NARROW_WIDTH: u16 = crate::state::NARROW_WIDTH;
    /// Smallest terminal the palette can be laid out in
    pub const MIN_PALETTE_WIDTH: u16 = 30;
    pub const MIN_PALETTE_HEIGHT: u16 = 8;
}

/// Sidebar width on wide terminals
pub const SIDEBAR_WIDTH: u16 = 26;

const PALETTE_MAX_WIDTH: u16 = 72;
const PALETTE_MAX_HEIGHT: u16 = 20;
const HELP_WIDTH: u16 = 52;
const HELP_HEIGHT: u16 = 16;

/// Terminal dimensions with proportional sizing helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width as a percentage of the terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Height as a percentage of the terminal height, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::NARROW_WIDTH
    }

    pub fn fits_palette(&self) -> bool {
        self.width >= breakpoints::MIN_PALETTE_WIDTH && self.height >= breakpoints::MIN_PALETTE_HEIGHT
    }
}

/// Screen regions of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title_bar: Rect,
    /// `None` when the sidebar is hidden
    pub sidebar: Option<Rect>,
    /// Document or project page. Empty when a narrow sidebar covers it.
    pub content: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect, sidebar_visible: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        let (title_bar, body, status_bar) = (rows[0], rows[1], rows[2]);

        let ctx = LayoutContext::from_rect(area);
        let (sidebar, content) = match (sidebar_visible, ctx.is_narrow()) {
            (false, _) => (None, body),
            // The narrow sidebar is a full-width menu covering the content
            (true, true) => (Some(body), Rect::new(body.x, body.y, 0, 0)),
            (true, false) => {
                let cols = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                    .split(body);
                (Some(cols[0]), cols[1])
            }
        };

        Self {
            title_bar,
            sidebar,
            content,
            status_bar,
        }
    }

    /// Rows of document text visible in the content area.
    pub fn content_rows(&self) -> usize {
        self.content.height as usize
    }
}

/// Where the palette pieces go on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteAnchors {
    /// Full-screen backdrop
    pub overlay: Rect,
    /// Bordered dialog
    pub content: Rect,
    /// Query line
    pub input: Rect,
    /// Result list
    pub list: Rect,
    /// Key hint line at the bottom of the dialog
    pub hint: Rect,
}

impl PaletteAnchors {
    /// Lay out the palette, or `None` if the terminal is too small.
    pub fn compute(area: Rect) -> Option<Self> {
        let ctx = LayoutContext::from_rect(area);
        if !ctx.fits_palette() {
            return None;
        }

        let width = ctx
            .percent_width(60)
            .clamp(breakpoints::MIN_PALETTE_WIDTH, PALETTE_MAX_WIDTH)
            .min(area.width);
        let height = area.height.saturating_sub(2).min(PALETTE_MAX_HEIGHT);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 4;

        let content = Rect::new(x, y, width, height);
        let inner = Rect::new(x + 1, y + 1, width - 2, height - 2);

        Some(Self {
            overlay: area,
            content,
            input: Rect::new(inner.x, inner.y, inner.width, 1),
            // Row 1 of the inner area is the divider under the query
            list: Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 3),
            hint: Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
        })
    }

    pub fn list_rows(&self) -> usize {
        self.list.height as usize
    }
}

/// Centered rectangle for the keyboard help dialog.
pub fn help_area(area: Rect) -> Rect {
    let width = HELP_WIDTH.min(area.width);
    let height = HELP_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
