//! Shared fixtures for integration tests.
//!
//! Builds an [`App`] over the default portfolio with recording doubles for
//! the launcher and both clipboards, and renders it into a `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio::adapters::mock::{MemoryClipboard, RecordingLauncher};
use folio::app::{App, Platform};
use folio::startup::FolioConfig;
use folio::ui;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

pub struct Harness {
    pub app: App,
    pub launcher: RecordingLauncher,
    pub clipboard: MemoryClipboard,
    pub fallback: MemoryClipboard,
    width: u16,
    height: u16,
}

impl Harness {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(FolioConfig::default(), width, height)
    }

    pub fn with_config(config: FolioConfig, width: u16, height: u16) -> Self {
        let launcher = RecordingLauncher::new();
        let clipboard = MemoryClipboard::new();
        let fallback = MemoryClipboard::new();
        let platform = Platform::new(launcher.clone(), clipboard.clone(), fallback.clone());
        let mut app = App::from_config(config, platform).expect("default config is valid");
        app.resize(Rect::new(0, 0, width, height));
        Self {
            app,
            launcher,
            clipboard,
            fallback,
            width,
            height,
        }
    }

    /// Render one frame and return the screen, one string per row.
    pub fn draw(&mut self) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(self.width, self.height)).unwrap();
        terminal.draw(|f| ui::render(f, &mut self.app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    pub fn ctrl(&mut self, c: char) {
        self.app
            .handle_event(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)));
    }

    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }
}

pub fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}
