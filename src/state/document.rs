//! Scrollable portfolio document.
//!
//! All sections are stacked into one list of lines. Each section begins with a
//! title line, followed by its body and a blank spacer. The state tracks the
//! scroll position, the viewport height and the current fragment.

use crate::models::{Section, SectionId};

/// A section whose top is at most this many rows below the viewport top can
/// become the active section.
pub const ACTIVE_THRESHOLD_ROWS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Body,
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLine {
    /// Index of the owning section
    pub section: usize,
    pub kind: LineKind,
    pub text: String,
}

/// Where a section begins in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionAnchor {
    id: SectionId,
    file_name: String,
    start: usize,
}

#[derive(Debug, Clone)]
pub struct DocumentState {
    lines: Vec<DocumentLine>,
    anchors: Vec<SectionAnchor>,
    viewport_rows: usize,
    scroll: usize,
    fragment: Option<SectionId>,
}

impl DocumentState {
    pub fn new(sections: &[Section]) -> Self {
        let mut lines = Vec::new();
        let mut anchors = Vec::with_capacity(sections.len());

        for (index, section) in sections.iter().enumerate() {
            anchors.push(SectionAnchor {
                id: section.id.clone(),
                file_name: section.file_name.clone(),
                start: lines.len(),
            });
            lines.push(DocumentLine {
                section: index,
                kind: LineKind::Title,
                text: section.title.clone(),
            });
            lines.extend(section.body.iter().map(|text| DocumentLine {
                section: index,
                kind: LineKind::Body,
                text: text.clone(),
            }));
            lines.push(DocumentLine {
                section: index,
                kind: LineKind::Spacer,
                text: String::new(),
            });
        }

        Self {
            lines,
            anchors,
            viewport_rows: 1,
            scroll: 0,
            fragment: None,
        }
    }

    pub fn lines(&self) -> &[DocumentLine] {
        &self.lines
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn section_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// The fragment recorded by the last navigation, if any.
    pub fn fragment(&self) -> Option<&SectionId> {
        self.fragment.as_ref()
    }

    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_rows)
    }

    /// Update the viewport height, keeping the scroll position in range.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.scroll = target.min(self.max_scroll());
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_step() as isize);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.page_step() as isize));
    }

    fn page_step(&self) -> usize {
        self.viewport_rows.saturating_sub(1).max(1)
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// First line of a section, by id.
    pub fn section_start(&self, id: &SectionId) -> Option<usize> {
        self.anchors.iter().find(|a| &a.id == id).map(|a| a.start)
    }

    pub fn section_id(&self, index: usize) -> Option<&SectionId> {
        self.anchors.get(index).map(|a| &a.id)
    }

    /// Scroll so the section starts at the top of the viewport and record its
    /// fragment. Returns `false` for unknown ids, leaving state untouched.
    pub fn scroll_to_section(&mut self, id: &SectionId) -> bool {
        let Some(start) = self.section_start(id) else {
            tracing::debug!("Unknown section '{}', ignoring", id);
            return false;
        };
        self.scroll = start.min(self.max_scroll());
        self.fragment = Some(id.clone());
        true
    }

    /// The section nearest the viewport top among those starting above the
    /// activation threshold. Defaults to the first section.
    pub fn active_section(&self) -> Option<usize> {
        let scroll = self.scroll as i64;
        let mut best: Option<(usize, i64)> = None;

        for (index, anchor) in self.anchors.iter().enumerate() {
            let top = anchor.start as i64 - scroll;
            if top >= ACTIVE_THRESHOLD_ROWS {
                continue;
            }
            let distance = top.abs();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }

        match best {
            Some((index, _)) => Some(index),
            None if self.anchors.is_empty() => None,
            None => Some(0),
        }
    }

    pub fn active_section_id(&self) -> Option<&SectionId> {
        self.active_section().and_then(|i| self.section_id(i))
    }

    /// File name of the active section, shown in the status bar.
    pub fn active_file_name(&self) -> &str {
        self.active_section()
            .and_then(|i| self.anchors.get(i))
            .map(|a| a.file_name.as_str())
            .unwrap_or("README.md")
    }

    /// Simulated vim position: `line = floor(scroll fraction * 100) + 1`.
    pub fn status_position(&self) -> String {
        let max = self.max_scroll();
        let line = if max == 0 {
            1
        } else {
            self.scroll * 100 / max + 1
        };
        format!("{}:1", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("hero", "README.md", "Hello", &["a", "b", "c"]),
            Section::new("about", "about.md", "About", &["d", "e", "f", "g", "h"]),
            Section::new("experience", "experience.json", "Experience", &["i", "j"]),
        ]
    }

    fn document(rows: usize) -> DocumentState {
        let mut doc = DocumentState::new(&sections());
        doc.set_viewport_rows(rows);
        doc
    }

    #[test]
    fn test_layout_of_lines() {
        let doc = document(5);
        // 3 sections: title + body + spacer
        assert_eq!(doc.total_lines(), 5 + 7 + 4);
        assert_eq!(doc.section_start(&SectionId::new("hero")), Some(0));
        assert_eq!(doc.section_start(&SectionId::new("about")), Some(5));
        assert_eq!(doc.section_start(&SectionId::new("experience")), Some(12));
        assert_eq!(doc.lines()[5].kind, LineKind::Title);
        assert_eq!(doc.lines()[4].kind, LineKind::Spacer);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut doc = document(5);
        doc.scroll_by(-3);
        assert_eq!(doc.scroll(), 0);
        doc.scroll_by(1000);
        assert_eq!(doc.scroll(), doc.max_scroll());
        doc.scroll_to_top();
        doc.page_down();
        assert_eq!(doc.scroll(), 4);
        doc.page_up();
        assert_eq!(doc.scroll(), 0);
    }

    #[test]
    fn test_scroll_to_section_records_fragment() {
        let mut doc = document(5);
        assert!(doc.scroll_to_section(&SectionId::new("about")));
        assert_eq!(doc.scroll(), 5);
        assert_eq!(doc.fragment(), Some(&SectionId::new("about")));
        assert_eq!(doc.active_section_id(), Some(&SectionId::new("about")));
    }

    #[test]
    fn test_scroll_to_last_section_clamps() {
        let mut doc = document(5);
        assert!(doc.scroll_to_section(&SectionId::new("experience")));
        assert_eq!(doc.scroll(), doc.max_scroll());
        assert_eq!(doc.active_file_name(), "experience.json");
    }

    #[test]
    fn test_unknown_section_is_noop() {
        let mut doc = document(5);
        doc.scroll_by(2);
        assert!(!doc.scroll_to_section(&SectionId::new("missing")));
        assert_eq!(doc.scroll(), 2);
        assert_eq!(doc.fragment(), None);
    }

    #[test]
    fn test_active_section_threshold() {
        let mut doc = document(5);
        assert_eq!(doc.active_file_name(), "README.md");
        // At scroll 2 "hero" is 2 rows above the top and "about" 3 below.
        doc.scroll_by(2);
        assert_eq!(doc.active_section(), Some(0));
        doc.scroll_by(1);
        assert_eq!(doc.active_section(), Some(1));
    }

    #[test]
    fn test_status_position() {
        let mut doc = document(5);
        assert_eq!(doc.status_position(), "1:1");
        doc.scroll_to_bottom();
        assert_eq!(doc.status_position(), "101:1");

        let mut short = document(100);
        short.scroll_to_bottom();
        assert_eq!(short.status_position(), "1:1");
    }

    #[test]
    fn test_viewport_shrink_keeps_scroll_in_range() {
        let mut doc = document(2);
        doc.scroll_to_bottom();
        doc.set_viewport_rows(50);
        assert_eq!(doc.scroll(), 0);
    }
}
