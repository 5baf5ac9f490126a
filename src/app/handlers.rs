//! Terminal event handling for the App.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::input::ScrollMotion;
use crate::ui::interaction::handle_click_action;

use super::actions::WHEEL_LINES;
use super::{App, View};

impl App {
    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.resize(Rect::new(0, 0, width, height)),
            _ => {}
        }
    }

    /// Route a key through the keyboard router and apply the result.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctx = self.route_context();
        if let Some(action) = self.router.route(&key, &self.palette, &ctx) {
            self.apply(action);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::ScrollDown => self.wheel(WHEEL_LINES),
            MouseEventKind::ScrollUp => self.wheel(-WHEEL_LINES),
            MouseEventKind::Moved => {
                self.mouse_position = Some((mouse.column, mouse.row));
                if self.hit_areas.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    /// Wheel scrolling moves the palette selection while it is open and the
    /// page otherwise. The help overlay blocks it.
    fn wheel(&mut self, lines: isize) {
        if self.help_open {
            return;
        }
        self.mark_dirty();

        if self.palette.is_open() {
            if lines > 0 {
                self.palette.select_next();
            } else {
                self.palette.select_previous();
            }
            return;
        }

        match self.view {
            View::Document => self.document.scroll_by(lines),
            View::Project { .. } => {
                let motion = if lines > 0 {
                    ScrollMotion::LineDown
                } else {
                    ScrollMotion::LineUp
                };
                for _ in 0..lines.unsigned_abs() {
                    self.scroll(motion);
                }
            }
        }
    }
}
