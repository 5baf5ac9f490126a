//! Hit areas for mouse interaction.
//!
//! Components register hit areas during rendering, and the event loop queries
//! the registry to determine what action to take on mouse events.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::models::{CommandId, SectionId};

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Command palette
    /// Run the palette command rendered in this row
    PaletteItem(CommandId),
    /// Dimmed area around the palette: closes it
    PaletteBackdrop,
    /// Palette frame outside any item: swallows the click
    PaletteContent,

    // Keyboard help overlay
    HelpClose,
    HelpBackdrop,
    HelpContent,

    // Sidebar file tree
    /// Jump to the section backing this file
    SidebarFile(SectionId),
    /// Expand or collapse the `projects/` folder
    SidebarFolder,
    /// Open a project page
    SidebarProject(String),
    /// Menu button shown on narrow terminals
    SidebarToggle,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// A fresh registry is filled on every render. Later registrations sit on top
/// of earlier ones, so overlays register after the content beneath them.
#[derive(Debug, Default, Clone)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas and reset hover state.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Returns the action for the topmost hit area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y)
            .and_then(|i| self.areas.get(i))
            .map(|area| area.action.clone())
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let hovered = self.find_index(x, y);
        let changed = hovered != self.hovered;
        self.hovered = hovered;
        changed
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    /// Hover style for `rect` if it is the hovered area.
    pub fn hover_style_for(&self, rect: Rect) -> Option<Style> {
        let area = self.areas.get(self.hovered?)?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    pub fn hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), ClickAction::HelpClose);

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(area.contains(20, 15));

        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10)); // x + width is exclusive
        assert!(!area.contains(10, 20)); // y + height is exclusive
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(make_rect(5, 5, 0, 0), ClickAction::SidebarFolder);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_overlay_registered_last_wins() {
        let mut registry = HitAreaRegistry::new();

        registry.register(make_rect(0, 0, 80, 24), ClickAction::PaletteBackdrop, None);
        registry.register(make_rect(20, 5, 40, 10), ClickAction::PaletteContent, None);
        registry.register(
            make_rect(21, 8, 38, 1),
            ClickAction::PaletteItem(CommandId::new("about")),
            None,
        );

        assert_eq!(
            registry.hit_test(30, 8),
            Some(ClickAction::PaletteItem(CommandId::new("about")))
        );
        assert_eq!(registry.hit_test(30, 6), Some(ClickAction::PaletteContent));
        assert_eq!(registry.hit_test(2, 2), Some(ClickAction::PaletteBackdrop));
        assert_eq!(registry.hit_test(100, 100), None);
    }

    #[test]
    fn test_hover_tracking_and_style() {
        let mut registry = HitAreaRegistry::new();
        let style = Style::default().fg(Color::Yellow);
        let file = make_rect(0, 0, 10, 1);

        registry.register(
            file,
            ClickAction::SidebarFile(SectionId::new("hero")),
            Some(style),
        );
        registry.register(make_rect(0, 1, 10, 1), ClickAction::SidebarFolder, None);

        assert!(registry.update_hover(3, 0));
        assert!(!registry.update_hover(5, 0));
        assert_eq!(registry.hover_style_for(file), Some(style));

        assert!(registry.update_hover(3, 1));
        assert_eq!(registry.hover_style_for(file), None);

        assert!(registry.update_hover(50, 50));
        assert!(registry.hovered().is_none());
    }

    #[test]
    fn test_clear() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), ClickAction::HelpBackdrop, None);
        registry.update_hover(1, 1);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.hovered().is_none());
    }
}
