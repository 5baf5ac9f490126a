//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`View`] - Which page the content area shows
//! - [`Platform`] - Launcher and clipboards used by actions
//!
//! Key handling lives in `handlers`, action dispatch in `actions`.

mod actions;
mod handlers;
mod platform;

pub use platform::Platform;

use std::sync::Arc;
use std::time::Instant;

use chrono::Datelike;
use ratatui::layout::Rect;

use crate::commands::CommandRegistry;
use crate::error::FolioResult;
use crate::input::{KeyboardRouter, RouteContext};
use crate::models::{Project, SectionId};
use crate::startup::FolioConfig;
use crate::state::{CommandPalette, DocumentState, Notification, SidebarState};
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::{AppLayout, PaletteAnchors};

/// What the content area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// The stacked section document
    #[default]
    Document,
    /// A project's detail page
    Project { id: String, scroll: usize },
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub config: FolioConfig,
    pub palette: CommandPalette,
    pub router: KeyboardRouter,
    pub document: DocumentState,
    pub sidebar: SidebarState,
    /// Keyboard help overlay visibility
    pub help_open: bool,
    pub view: View,
    pub notification: Option<Notification>,
    pub platform: Platform,
    /// Click targets from the last render
    pub hit_areas: HitAreaRegistry,
    /// Last known mouse position, for hover styling
    pub mouse_position: Option<(u16, u16)>,
    /// Year shown in the footer copyright
    pub copyright_year: i32,
    /// Flag indicating whether the UI needs to be redrawn
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Terminal area the layout was last computed for
    area: Rect,
}

impl App {
    pub fn new(config: FolioConfig, registry: Arc<CommandRegistry>, platform: Platform) -> Self {
        let document = DocumentState::new(&config.sections);
        Self {
            config,
            palette: CommandPalette::new(registry),
            router: KeyboardRouter::new(),
            document,
            sidebar: SidebarState::new(),
            help_open: false,
            view: View::Document,
            notification: None,
            platform,
            hit_areas: HitAreaRegistry::new(),
            mouse_position: None,
            copyright_year: chrono::Local::now().year(),
            needs_redraw: true,
            should_quit: false,
            area: Rect::default(),
        }
    }

    /// Build the registry from the config and create the app.
    pub fn from_config(config: FolioConfig, platform: Platform) -> FolioResult<Self> {
        let registry = CommandRegistry::from_config(&config)?;
        Ok(Self::new(config, Arc::new(registry), platform))
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The fragment of the last navigation, e.g. `#about`.
    pub fn fragment(&self) -> Option<String> {
        self.document.fragment().map(|id| format!("#{}", id))
    }

    /// Apply the initial fragment from the command line.
    ///
    /// Unknown sections are ignored and the document stays at the top.
    pub fn apply_fragment(&mut self, id: &SectionId) -> bool {
        let found = self.document.scroll_to_section(id);
        if !found {
            tracing::info!("Initial section '{}' not found, starting at the top", id);
        }
        self.mark_dirty();
        found
    }

    /// Recompute size-dependent state for a new terminal area.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.sidebar.set_width(area.width);
        // Title bar and status bar take one row each.
        self.document
            .set_viewport_rows(area.height.saturating_sub(2) as usize);
        self.palette
            .set_list_rows(PaletteAnchors::compute(area).map(|a| a.list_rows()));
        self.mark_dirty();
    }

    /// Resize only when the area actually changed.
    pub fn sync_area(&mut self, area: Rect) {
        if area != self.area {
            self.resize(area);
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn layout(&self) -> AppLayout {
        AppLayout::compute(self.area, self.sidebar.is_visible())
    }

    /// Project shown on the project page, if any.
    pub fn current_project(&self) -> Option<&Project> {
        match &self.view {
            View::Project { id, .. } => self.config.project(id),
            View::Document => None,
        }
    }

    pub(crate) fn route_context(&self) -> RouteContext {
        RouteContext {
            help_open: self.help_open,
            on_project_page: matches!(self.view, View::Project { .. }),
            section_count: self.document.section_count(),
        }
    }

    /// Status bar mode label.
    pub fn mode_label(&self) -> &'static str {
        if self.palette.is_open() {
            "COMMAND"
        } else {
            "NORMAL"
        }
    }

    /// Expire the notification once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
        self.mark_dirty();
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::test_app;
    use super::*;
    use crate::state::NOTIFICATION_TTL;

    #[test]
    fn test_new_app_defaults() {
        let t = test_app();
        assert!(!t.app.palette.is_open());
        assert!(!t.app.help_open);
        assert_eq!(t.app.view, View::Document);
        assert_eq!(t.app.mode_label(), "NORMAL");
        assert!(t.app.copyright_year >= 2024);
        assert_eq!(t.app.fragment(), None);
    }

    #[test]
    fn test_apply_fragment() {
        let mut t = test_app();
        assert!(t.app.apply_fragment(&SectionId::new("about")));
        assert_eq!(t.app.fragment().as_deref(), Some("#about"));
        assert!(!t.app.apply_fragment(&SectionId::new("missing")));
        assert_eq!(t.app.fragment().as_deref(), Some("#about"));
    }

    #[test]
    fn test_tiny_terminal_disables_palette() {
        let mut t = test_app();
        t.app.palette.open();
        t.app.resize(Rect::new(0, 0, 20, 6));
        assert!(!t.app.palette.is_open());
        t.app.palette.open();
        assert!(!t.app.palette.is_open());

        t.app.resize(Rect::new(0, 0, 100, 30));
        t.app.palette.open();
        assert!(t.app.palette.is_open());
        assert_eq!(t.app.mode_label(), "COMMAND");
    }

    #[test]
    fn test_tick_expires_notification() {
        let mut t = test_app();
        let start = Instant::now();
        t.app.notify(Notification::info("hello", start));
        t.app.needs_redraw = false;

        t.app.tick(start);
        assert!(t.app.notification.is_some());
        assert!(!t.app.needs_redraw);

        t.app.tick(start + NOTIFICATION_TTL);
        assert!(t.app.notification.is_none());
        assert!(t.app.needs_redraw);
    }
}
