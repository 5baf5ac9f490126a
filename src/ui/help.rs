//! Keyboard shortcut overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::help_area;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

pub const HELP_TITLE: &str = "-- KEYBOARD SHORTCUTS --";

const NAVIGATION: &[(&str, &str)] = &[
    ("1-5", "Jump to section"),
    ("^K", "Command palette (:)"),
    ("?", "Show help"),
    ("j/k", "Scroll"),
    ("m", "Toggle file tree"),
];

const ACTIONS: &[(&str, &str)] = &[
    ("R", "Download resume"),
    ("Esc", "Close/Back"),
    ("q", "Quit"),
];

const FOOTER: &str = ":help for more info";

pub fn render_help(frame: &mut Frame, area: Rect, hits: &mut HitAreaRegistry) {
    let dialog = help_area(area);

    hits.register(area, ClickAction::HelpBackdrop, None);
    hits.register(dialog, ClickAction::HelpContent, None);

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Title row with the close button at the right edge
    let close = Rect::new(inner.x + inner.width.saturating_sub(3), inner.y, 3.min(inner.width), 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", HELP_TITLE),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(" x ", Style::default().fg(COLOR_DIM))),
        close,
    );
    hits.register(close, ClickAction::HelpClose, None);

    let mut lines = vec![Line::default()];
    push_group(&mut lines, "Navigation", NAVIGATION);
    lines.push(Line::default());
    push_group(&mut lines, "Actions", ACTIONS);
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!(" {}", FOOTER),
        Style::default().fg(COLOR_DIM),
    )));

    let body = Rect::new(inner.x, inner.y + 1, inner.width, inner.height.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines), body);
}

fn push_group(lines: &mut Vec<Line<'static>>, title: &str, entries: &[(&'static str, &'static str)]) {
    lines.push(Line::from(Span::styled(
        format!(" :: {}", title.to_uppercase()),
        Style::default().fg(COLOR_ACCENT),
    )));
    for (key, description) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("   {:<6}", key), Style::default().fg(COLOR_DIM)),
            Span::styled(*description, Style::default().fg(COLOR_HEADER)),
        ]));
    }
}
