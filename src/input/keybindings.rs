//! Default keybindings for the application.
//!
//! Bindings are plain lookup tables from a [`KeyCombo`] to a [`RouterAction`].
//! Context rules that a table cannot express (overlay priority, the palette
//! input, section digits) live in [`super::router`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::router::{RouterAction, ScrollMotion};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Super (Cmd on macOS) modifier.
    pub const fn super_key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SUPER)
    }

    /// Builds the lookup combo for a key event.
    ///
    /// Shift is dropped for character keys because it is already reflected in
    /// the character itself (`?`, `:`, `R`). Control and Super chords are
    /// normalized to lowercase so Ctrl+Shift+K still reads as Ctrl+K.
    pub fn from_event(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Char(c) => {
                let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
                let c = if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER) {
                    c.to_ascii_lowercase()
                } else {
                    c
                };
                Self::new(KeyCode::Char(c), modifiers)
            }
            code => Self::new(code, key.modifiers),
        }
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active everywhere, including inside the palette input
    pub global: HashMap<KeyCombo, RouterAction>,
    /// Single-key shortcuts, ignored while typing in the palette
    pub shortcuts: HashMap<KeyCombo, RouterAction>,
    /// Document view
    pub document: HashMap<KeyCombo, RouterAction>,
    /// Project detail page
    pub project: HashMap<KeyCombo, RouterAction>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            shortcuts: HashMap::new(),
            document: HashMap::new(),
            project: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_shortcut_bindings();
        config.setup_document_bindings();
        config.setup_project_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        // Ctrl+K / Cmd+K: Command palette
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('k')), RouterAction::TogglePalette);
        self.global.insert(
            KeyCombo::super_key(KeyCode::Char('k')),
            RouterAction::TogglePalette,
        );

        // Ctrl+C: Quit
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), RouterAction::Quit);
    }

    fn setup_shortcut_bindings(&mut self) {
        self.shortcuts
            .insert(KeyCombo::plain(KeyCode::Char(':')), RouterAction::TogglePalette);
        self.shortcuts
            .insert(KeyCombo::plain(KeyCode::Char('?')), RouterAction::ShowHelp);
        self.shortcuts
            .insert(KeyCombo::plain(KeyCode::Char('r')), RouterAction::DownloadResume);
        self.shortcuts
            .insert(KeyCombo::plain(KeyCode::Char('R')), RouterAction::DownloadResume);
    }

    fn setup_document_bindings(&mut self) {
        insert_scroll_bindings(&mut self.document);
        self.document
            .insert(KeyCombo::plain(KeyCode::Char('m')), RouterAction::ToggleSidebar);
        self.document
            .insert(KeyCombo::plain(KeyCode::Char('q')), RouterAction::Quit);
    }

    fn setup_project_bindings(&mut self) {
        insert_scroll_bindings(&mut self.project);
        self.project
            .insert(KeyCombo::plain(KeyCode::Esc), RouterAction::Back);
        self.project
            .insert(KeyCombo::plain(KeyCode::Backspace), RouterAction::Back);
        self.project
            .insert(KeyCombo::plain(KeyCode::Char('h')), RouterAction::Back);
        self.project
            .insert(KeyCombo::plain(KeyCode::Char('o')), RouterAction::OpenProjectLink);
        self.project
            .insert(KeyCombo::plain(KeyCode::Char('q')), RouterAction::Quit);
    }
}

fn insert_scroll_bindings(map: &mut HashMap<KeyCombo, RouterAction>) {
    let bindings = [
        (KeyCode::Char('j'), ScrollMotion::LineDown),
        (KeyCode::Down, ScrollMotion::LineDown),
        (KeyCode::Char('k'), ScrollMotion::LineUp),
        (KeyCode::Up, ScrollMotion::LineUp),
        (KeyCode::PageDown, ScrollMotion::PageDown),
        (KeyCode::Char(' '), ScrollMotion::PageDown),
        (KeyCode::PageUp, ScrollMotion::PageUp),
        (KeyCode::Home, ScrollMotion::Top),
        (KeyCode::Char('g'), ScrollMotion::Top),
        (KeyCode::End, ScrollMotion::Bottom),
        (KeyCode::Char('G'), ScrollMotion::Bottom),
    ];
    for (code, motion) in bindings {
        map.insert(KeyCombo::plain(code), RouterAction::Scroll(motion));
    }
}
