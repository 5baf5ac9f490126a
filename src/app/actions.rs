//! Performing router actions and command actions.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::clipboard::copy_with_fallback;
use crate::error::FolioError;
use crate::input::{PaletteKey, RouterAction, ScrollMotion};
use crate::models::{Action, SectionId};
use crate::state::Notification;

use super::{App, View};

/// Toast shown after a successful copy, whichever clipboard took it.
pub const EMAIL_COPIED_MESSAGE: &str = "Email copied to clipboard!";

/// Lines scrolled per mouse wheel notch.
pub const WHEEL_LINES: isize = 3;

impl App {
    /// Apply the outcome of keyboard routing.
    pub fn apply(&mut self, action: RouterAction) {
        debug!("apply: {:?}", action);
        self.mark_dirty();

        match action {
            RouterAction::TogglePalette => self.toggle_palette(),
            RouterAction::ClosePalette => self.palette.close(),
            RouterAction::CloseHelp => self.help_open = false,
            RouterAction::ShowHelp => self.show_help(),
            RouterAction::JumpToSection(index) => {
                if let Some(id) = self.document.section_id(index).cloned() {
                    self.perform(Action::ScrollToSection(id));
                }
            }
            RouterAction::DownloadResume => self.perform(Action::DownloadResume),
            RouterAction::Palette(key) => self.apply_palette_key(key),
            RouterAction::Scroll(motion) => self.scroll(motion),
            RouterAction::ToggleSidebar => {
                self.sidebar.toggle_narrow();
            }
            RouterAction::Back => self.view = View::Document,
            RouterAction::OpenProjectLink => {
                if let Some(url) = self.current_project().and_then(|p| p.url.clone()) {
                    self.launch(&url);
                }
            }
            RouterAction::Quit => self.quit(),
        }
    }

    fn apply_palette_key(&mut self, key: PaletteKey) {
        match key {
            PaletteKey::Next => self.palette.select_next(),
            PaletteKey::Previous => self.palette.select_previous(),
            PaletteKey::Confirm => {
                if let Some(action) = self.palette.execute_selected() {
                    self.perform(action);
                }
            }
            PaletteKey::Insert(c) => self.palette.push_char(c),
            PaletteKey::Backspace => self.palette.pop_char(),
        }
    }

    /// Perform a command action.
    ///
    /// Callers running a palette command close the palette first, so
    /// [`Action::TogglePalette`] from the palette opens it again.
    pub fn perform(&mut self, action: Action) {
        info!("perform: {:?}", action);
        self.mark_dirty();

        match action {
            Action::ScrollToSection(id) => self.scroll_to_section(&id),
            Action::OpenProject(id) => self.open_project(&id),
            Action::OpenUrl(url) => self.launch(&url),
            Action::CopyEmail => self.copy_email(),
            Action::DownloadResume => {
                let resume = self.config.profile.resume.clone();
                self.launch(&resume);
            }
            Action::TogglePalette => self.toggle_palette(),
            Action::ShowHelp => self.show_help(),
        }
    }

    /// Open or close the palette. Opening it hides the help overlay.
    pub fn toggle_palette(&mut self) {
        if !self.palette.is_open() {
            self.help_open = false;
        }
        self.palette.toggle();
    }

    /// Show the keyboard help overlay, replacing any open overlay.
    pub fn show_help(&mut self) {
        self.palette.close();
        self.help_open = true;
    }

    pub fn scroll_to_section(&mut self, id: &SectionId) {
        self.view = View::Document;
        if self.document.scroll_to_section(id) {
            self.sidebar.file_chosen();
        }
    }

    pub fn open_project(&mut self, id: &str) {
        if self.config.project(id).is_none() {
            debug!("Unknown project '{}', ignoring", id);
            return;
        }
        self.view = View::Project {
            id: id.to_string(),
            scroll: 0,
        };
        self.sidebar.file_chosen();
    }

    pub fn scroll(&mut self, motion: ScrollMotion) {
        match &mut self.view {
            View::Document => match motion {
                ScrollMotion::LineDown => self.document.scroll_by(1),
                ScrollMotion::LineUp => self.document.scroll_by(-1),
                ScrollMotion::PageDown => self.document.page_down(),
                ScrollMotion::PageUp => self.document.page_up(),
                ScrollMotion::Top => self.document.scroll_to_top(),
                ScrollMotion::Bottom => self.document.scroll_to_bottom(),
            },
            // Project pages are short; the renderer clamps the offset.
            View::Project { scroll, .. } => {
                let page = self.document.viewport_rows().saturating_sub(1).max(1);
                *scroll = match motion {
                    ScrollMotion::LineDown => scroll.saturating_add(1),
                    ScrollMotion::LineUp => scroll.saturating_sub(1),
                    ScrollMotion::PageDown => scroll.saturating_add(page),
                    ScrollMotion::PageUp => scroll.saturating_sub(page),
                    ScrollMotion::Top => 0,
                    ScrollMotion::Bottom => usize::MAX,
                };
            }
        }
    }

    /// Copy the email address, falling back to OSC 52.
    ///
    /// The same toast is shown for either path. When both fail the failure
    /// is only logged.
    pub fn copy_email(&mut self) {
        let email = self.config.profile.email();
        let platform = &mut self.platform;
        match copy_with_fallback(
            platform.clipboard.as_mut(),
            platform.clipboard_fallback.as_mut(),
            &email,
        ) {
            Ok(path) => {
                info!("Copied email via {:?} clipboard", path);
                self.notify(Notification::info(EMAIL_COPIED_MESSAGE, Instant::now()));
            }
            Err(e) => warn!("Failed to copy email: {}", e),
        }
    }

    /// Open an external target, surfacing failures as a toast.
    pub fn launch(&mut self, target: &str) {
        match self.platform.launcher.launch(target) {
            Ok(()) => info!("Opened {}", target),
            Err(e) => {
                warn!("Launch failed: {}", e);
                let message = FolioError::from(e).user_message();
                self.notify(Notification::error(message, Instant::now()));
            }
        }
    }
}
