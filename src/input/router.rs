//! Keyboard router.
//!
//! Every key passes through [`KeyboardRouter::route`] before anything else
//! sees it. The router is stateless: it reads the palette and overlay state it
//! is given and yields at most one [`RouterAction`] for the application to
//! apply. Priority, highest first:
//!
//! 1. global chords (Ctrl+K / Super+K, Ctrl+C)
//! 2. Esc closes the topmost overlay: help, then palette, then project page
//! 3. while the palette is open, every other key belongs to it
//! 4. single-key shortcuts and section digits (no Ctrl/Alt/Super)
//! 5. bindings of the current view

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::state::CommandPalette;

/// Keys the palette understands while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKey {
    Next,
    Previous,
    Confirm,
    Insert(char),
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollMotion {
    LineDown,
    LineUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
}

/// Outcome of routing one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouterAction {
    TogglePalette,
    ClosePalette,
    CloseHelp,
    ShowHelp,
    /// Zero-based section index
    JumpToSection(usize),
    DownloadResume,
    Palette(PaletteKey),
    Scroll(ScrollMotion),
    ToggleSidebar,
    /// Leave the project page
    Back,
    OpenProjectLink,
    Quit,
}

/// Overlay and view state the router needs besides the palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteContext {
    pub help_open: bool,
    pub on_project_page: bool,
    /// Number of sections reachable by digit keys
    pub section_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardRouter {
    bindings: KeybindingConfig,
}

impl KeyboardRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeybindingConfig) -> Self {
        Self { bindings }
    }

    /// Map a key event to an action. `None` means the key is ignored (or, while
    /// the palette is open, swallowed).
    pub fn route(
        &self,
        key: &KeyEvent,
        palette: &CommandPalette,
        ctx: &RouteContext,
    ) -> Option<RouterAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let combo = KeyCombo::from_event(key);

        if let Some(action) = self.bindings.global.get(&combo) {
            return Some(*action);
        }

        if key.code == KeyCode::Esc {
            if ctx.help_open {
                return Some(RouterAction::CloseHelp);
            }
            if palette.is_open() {
                return Some(RouterAction::ClosePalette);
            }
        }

        if palette.is_open() {
            return Self::route_palette(key);
        }

        if has_command_modifier(key.modifiers) {
            return None;
        }

        if let Some(action) = self.bindings.shortcuts.get(&combo) {
            return Some(*action);
        }

        if let Some(index) = section_digit(key, ctx.section_count) {
            return Some(RouterAction::JumpToSection(index));
        }

        let view = if ctx.on_project_page {
            &self.bindings.project
        } else {
            &self.bindings.document
        };
        view.get(&combo).copied()
    }

    fn route_palette(key: &KeyEvent) -> Option<RouterAction> {
        let palette_key = match key.code {
            KeyCode::Down => PaletteKey::Next,
            KeyCode::Up => PaletteKey::Previous,
            KeyCode::Enter => PaletteKey::Confirm,
            KeyCode::Backspace => PaletteKey::Backspace,
            KeyCode::Char(c) if !has_command_modifier(key.modifiers) => PaletteKey::Insert(c),
            _ => return None,
        };
        Some(RouterAction::Palette(palette_key))
    }
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

/// `1..=count` with no modifiers at all (Shift included) maps to a section.
fn section_digit(key: &KeyEvent, count: usize) -> Option<usize> {
    if !key.modifiers.is_empty() {
        return None;
    }
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let digit = c.to_digit(10)? as usize;
    (1..=count.min(9)).contains(&digit).then(|| digit - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandRegistry;
    use crate::startup::FolioConfig;
    use std::sync::Arc;

    fn palette() -> CommandPalette {
        let registry = CommandRegistry::from_config(&FolioConfig::default()).unwrap();
        CommandPalette::new(Arc::new(registry))
    }

    fn open_palette() -> CommandPalette {
        let mut p = palette();
        p.open();
        p
    }

    fn ctx() -> RouteContext {
        RouteContext {
            help_open: false,
            on_project_page: false,
            section_count: 5,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn route(key: KeyEvent, palette: &CommandPalette, ctx: RouteContext) -> Option<RouterAction> {
        KeyboardRouter::new().route(&key, palette, &ctx)
    }

    #[test]
    fn test_ctrl_and_super_k_toggle_everywhere() {
        for p in [palette(), open_palette()] {
            for m in [KeyModifiers::CONTROL, KeyModifiers::SUPER] {
                assert_eq!(
                    route(key_mod(KeyCode::Char('k'), m), &p, ctx()),
                    Some(RouterAction::TogglePalette)
                );
            }
        }
    }

    #[test]
    fn test_colon_toggles_only_outside_palette() {
        assert_eq!(
            route(key(KeyCode::Char(':')), &palette(), ctx()),
            Some(RouterAction::TogglePalette)
        );
        assert_eq!(
            route(key_mod(KeyCode::Char(':'), KeyModifiers::SHIFT), &palette(), ctx()),
            Some(RouterAction::TogglePalette)
        );
        assert_eq!(
            route(key(KeyCode::Char(':')), &open_palette(), ctx()),
            Some(RouterAction::Palette(PaletteKey::Insert(':')))
        );
    }

    #[test]
    fn test_digits_jump_to_sections() {
        assert_eq!(
            route(key(KeyCode::Char('1')), &palette(), ctx()),
            Some(RouterAction::JumpToSection(0))
        );
        assert_eq!(
            route(key(KeyCode::Char('5')), &palette(), ctx()),
            Some(RouterAction::JumpToSection(4))
        );
        assert_eq!(route(key(KeyCode::Char('6')), &palette(), ctx()), None);
        assert_eq!(route(key(KeyCode::Char('0')), &palette(), ctx()), None);
    }

    #[test]
    fn test_digits_require_no_modifiers() {
        for m in [KeyModifiers::SHIFT, KeyModifiers::CONTROL, KeyModifiers::ALT] {
            assert_eq!(route(key_mod(KeyCode::Char('2'), m), &palette(), ctx()), None);
        }
    }

    #[test]
    fn test_digits_type_into_open_palette() {
        assert_eq!(
            route(key(KeyCode::Char('2')), &open_palette(), ctx()),
            Some(RouterAction::Palette(PaletteKey::Insert('2')))
        );
    }

    #[test]
    fn test_resume_shortcut() {
        assert_eq!(
            route(key(KeyCode::Char('r')), &palette(), ctx()),
            Some(RouterAction::DownloadResume)
        );
        assert_eq!(
            route(key_mod(KeyCode::Char('R'), KeyModifiers::SHIFT), &palette(), ctx()),
            Some(RouterAction::DownloadResume)
        );
        assert_eq!(
            route(key_mod(KeyCode::Char('r'), KeyModifiers::CONTROL), &palette(), ctx()),
            None
        );
        assert_eq!(
            route(key(KeyCode::Char('r')), &open_palette(), ctx()),
            Some(RouterAction::Palette(PaletteKey::Insert('r')))
        );
    }

    #[test]
    fn test_question_mark_shows_help() {
        assert_eq!(
            route(key_mod(KeyCode::Char('?'), KeyModifiers::SHIFT), &palette(), ctx()),
            Some(RouterAction::ShowHelp)
        );
        let help = RouteContext {
            help_open: true,
            ..ctx()
        };
        assert_eq!(
            route(key(KeyCode::Char('?')), &palette(), help),
            Some(RouterAction::ShowHelp)
        );
    }

    #[test]
    fn test_escape_priority() {
        let help = RouteContext {
            help_open: true,
            ..ctx()
        };
        assert_eq!(
            route(key(KeyCode::Esc), &open_palette(), help),
            Some(RouterAction::CloseHelp)
        );
        assert_eq!(
            route(key(KeyCode::Esc), &open_palette(), ctx()),
            Some(RouterAction::ClosePalette)
        );
        assert_eq!(route(key(KeyCode::Esc), &palette(), ctx()), None);

        let project = RouteContext {
            on_project_page: true,
            ..ctx()
        };
        assert_eq!(
            route(key(KeyCode::Esc), &palette(), project),
            Some(RouterAction::Back)
        );
    }

    #[test]
    fn test_palette_navigation_keys() {
        let p = open_palette();
        assert_eq!(
            route(key(KeyCode::Down), &p, ctx()),
            Some(RouterAction::Palette(PaletteKey::Next))
        );
        assert_eq!(
            route(key(KeyCode::Up), &p, ctx()),
            Some(RouterAction::Palette(PaletteKey::Previous))
        );
        assert_eq!(
            route(key(KeyCode::Enter), &p, ctx()),
            Some(RouterAction::Palette(PaletteKey::Confirm))
        );
        assert_eq!(
            route(key(KeyCode::Backspace), &p, ctx()),
            Some(RouterAction::Palette(PaletteKey::Backspace))
        );
        // Unhandled keys are swallowed, not passed to the document.
        assert_eq!(route(key(KeyCode::PageDown), &p, ctx()), None);
        assert_eq!(
            route(key(KeyCode::Char('q')), &p, ctx()),
            Some(RouterAction::Palette(PaletteKey::Insert('q')))
        );
    }

    #[test]
    fn test_document_and_project_bindings() {
        assert_eq!(
            route(key(KeyCode::Char('j')), &palette(), ctx()),
            Some(RouterAction::Scroll(ScrollMotion::LineDown))
        );
        assert_eq!(
            route(key(KeyCode::Char('m')), &palette(), ctx()),
            Some(RouterAction::ToggleSidebar)
        );
        let project = RouteContext {
            on_project_page: true,
            ..ctx()
        };
        assert_eq!(
            route(key(KeyCode::Char('o')), &palette(), project),
            Some(RouterAction::OpenProjectLink)
        );
        assert_eq!(route(key(KeyCode::Char('o')), &palette(), ctx()), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = key(KeyCode::Char('1'));
        release.kind = KeyEventKind::Release;
        assert_eq!(route(release, &palette(), ctx()), None);
    }
}
