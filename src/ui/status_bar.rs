//! Vim-style status bar.
//!
//! `[ NORMAL ]  about.md  utf-8  42:1  ·  © 2026 Sam Carter`

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

use super::theme::{
    COLOR_DIM, COLOR_HEADER, COLOR_MODE_COMMAND, COLOR_MODE_NORMAL, COLOR_STATUS_BG,
};

pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let label = app.mode_label();
    let color = if app.palette.is_open() {
        COLOR_MODE_COMMAND
    } else {
        COLOR_MODE_NORMAL
    };

    let file = match app.current_project() {
        Some(project) => format!("{}/", project.id),
        None => app.document.active_file_name().to_string(),
    };

    let left = vec![
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(COLOR_STATUS_BG)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", file), Style::default().fg(COLOR_HEADER)),
        Span::styled(" utf-8 ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!(" {} ", app.document.status_position()),
            Style::default().fg(COLOR_HEADER),
        ),
    ];

    let copyright = copyright_text(app.copyright_year, &app.config.profile.name);
    let used: usize = left.iter().map(|s| s.content.width()).sum();
    let pad = (area.width as usize).saturating_sub(used + copyright.width() + 1);

    let mut spans = left;
    if pad > 0 {
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(copyright, Style::default().fg(COLOR_DIM)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(COLOR_STATUS_BG)),
        area,
    );
}

pub fn copyright_text(year: i32, name: &str) -> String {
    format!("© {} {}", year, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_text() {
        assert_eq!(copyright_text(2026, "Sam Carter"), "© 2026 Sam Carter");
    }
}
