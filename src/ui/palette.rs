//! Command palette overlay rendering
//!
//! Draws the palette into the rectangles from [`PaletteAnchors`]: a query
//! line, a divider, the grouped result list and a key hint line. Every visible
//! command row is registered as a click target bound to its command id.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{CommandPalette, PaletteRow};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::PaletteAnchors;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG,
};

/// Shown in the query line while it is empty
pub const PLACEHOLDER: &str = "Type a command or search...";

/// Shown instead of the list when nothing matches
pub const NO_RESULTS: &str = "No commands found";

const HINT: &str = "↑↓ navigate  ↵ select  esc close";

/// Render the palette and register its hit areas.
pub fn render_palette(
    frame: &mut Frame,
    palette: &CommandPalette,
    anchors: &PaletteAnchors,
    hits: &mut HitAreaRegistry,
) {
    // Backdrop first so the dialog and its rows sit on top of it
    hits.register(anchors.overlay, ClickAction::PaletteBackdrop, None);
    hits.register(anchors.content, ClickAction::PaletteContent, None);

    frame.render_widget(Clear, anchors.content);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    frame.render_widget(block, anchors.content);

    render_query(frame, palette.query(), anchors.input);

    let divider_y = anchors.input.y + 1;
    let divider = "─".repeat(anchors.input.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(divider, Style::default().fg(COLOR_BORDER))),
        Rect::new(anchors.input.x, divider_y, anchors.input.width, 1),
    );

    render_list(frame, palette, anchors.list, hits);

    frame.render_widget(
        Paragraph::new(Span::styled(HINT, Style::default().fg(COLOR_DIM))),
        anchors.hint,
    );
}

fn render_query(frame: &mut Frame, query: &str, area: Rect) {
    let prompt = Span::styled(
        ": ",
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    );
    let cursor = Span::styled("█", Style::default().fg(COLOR_ACCENT));

    let line = if query.is_empty() {
        Line::from(vec![
            prompt,
            cursor,
            Span::styled(PLACEHOLDER, Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(query.to_string(), Style::default().fg(COLOR_HEADER)),
            cursor,
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list(frame: &mut Frame, palette: &CommandPalette, area: Rect, hits: &mut HitAreaRegistry) {
    let view = palette.view();

    if view.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("  {}", NO_RESULTS),
                Style::default().fg(COLOR_DIM),
            )),
            Rect::new(area.x, area.y, area.width, 1),
        );
        return;
    }

    let rows = view.rows();
    let visible = rows
        .iter()
        .skip(view.scroll_offset)
        .take(area.height as usize);

    for (offset, row) in visible.enumerate() {
        let rect = Rect::new(area.x, area.y + offset as u16, area.width, 1);
        match row {
            PaletteRow::Header(category) => {
                let header = Span::styled(
                    format!(" {}", category.to_uppercase()),
                    Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
                );
                frame.render_widget(Paragraph::new(header), rect);
            }
            PaletteRow::Item { item, .. } => {
                let line = item_line(item.label, item.key_hint, item.selected, rect.width as usize);
                let style = if item.selected {
                    Style::default().bg(COLOR_SELECTED_BG)
                } else {
                    Style::default()
                };
                frame.render_widget(Paragraph::new(line).style(style), rect);
                hits.register(rect, ClickAction::PaletteItem(item.id.clone()), None);
            }
        }
    }
}

/// Label on the left, key hint right-aligned.
fn item_line(label: &str, key_hint: Option<&str>, selected: bool, width: usize) -> Line<'static> {
    let (marker, label_style) = if selected {
        (
            "▸ ",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(COLOR_HEADER))
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
        Span::styled(label.to_string(), label_style),
    ];

    if let Some(hint) = key_hint {
        let used = marker.width() + label.width() + hint.width() + 1;
        let pad = width.saturating_sub(used).max(1);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(hint.to_string(), Style::default().fg(COLOR_DIM)));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_item_line_right_aligns_hint() {
        let line = item_line("Download: Resume", Some("R"), false, 30);
        let text = line_text(&line);
        assert!(text.starts_with("  Download: Resume"));
        assert!(text.ends_with("R "));
        assert_eq!(text.width(), 30);
    }

    #[test]
    fn test_item_line_marks_selection() {
        let text = line_text(&item_line("Open: about.md", None, true, 30));
        assert_eq!(text, "▸ Open: about.md");
    }

    #[test]
    fn test_item_line_narrow_keeps_hint() {
        let text = line_text(&item_line("Toggle: Command Palette", Some("Ctrl+K"), false, 10));
        assert!(text.ends_with(" Ctrl+K "));
    }
}
