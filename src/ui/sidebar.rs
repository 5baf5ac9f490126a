//! Sidebar file tree.
//!
//! ```text
//!  EXPLORER
//!  ~/portfolio
//!   README.md
//!   featured.js
//!   v projects/
//!      forma/
//!      upnext/
//!   about.md
//! ```
//!
//! The section whose `file_name` ends in `/` is drawn as the projects folder
//! and lists the configured projects beneath it when open.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOLDER, COLOR_TEXT};

pub fn render_sidebar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    previous: &HitAreaRegistry,
    hits: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hover = Style::default().add_modifier(Modifier::UNDERLINED);
    let active = match app.view {
        View::Document => app.document.active_section(),
        View::Project { .. } => None,
    };
    let current_project = app.current_project().map(|p| p.id.as_str());

    let mut y = inner.y;
    let bottom = inner.y + inner.height;
    let mut row = |frame: &mut Frame, text: String, style: Style, action: Option<ClickAction>| {
        if y >= bottom {
            return;
        }
        let rect = Rect::new(inner.x, y, inner.width, 1);
        let style = match previous.hover_style_for(rect) {
            Some(h) if action.is_some() => style.patch(h),
            _ => style,
        };
        frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
        if let Some(action) = action {
            hits.register(rect, action, Some(hover));
        }
        y += 1;
    };

    row(
        frame,
        " EXPLORER".to_string(),
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        None,
    );
    row(frame, " ~/portfolio".to_string(), Style::default().fg(COLOR_FOLDER), None);

    for (index, section) in app.config.sections.iter().enumerate() {
        let is_active = active == Some(index);
        let file_style = if is_active {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };

        if section.file_name.ends_with('/') {
            let arrow = if app.sidebar.projects_open { "v" } else { ">" };
            row(
                frame,
                format!("  {} {}", arrow, section.file_name),
                file_style.fg(if is_active { COLOR_ACCENT } else { COLOR_FOLDER }),
                Some(ClickAction::SidebarFolder),
            );
            if app.sidebar.projects_open {
                for project in &app.config.projects {
                    let style = if current_project == Some(project.id.as_str()) {
                        Style::default().fg(COLOR_ACCENT)
                    } else {
                        Style::default().fg(COLOR_TEXT)
                    };
                    row(
                        frame,
                        format!("     {}/", project.id),
                        style,
                        Some(ClickAction::SidebarProject(project.id.clone())),
                    );
                }
            }
        } else {
            let marker = if is_active { ">" } else { " " };
            row(
                frame,
                format!(" {} {}", marker, section.file_name),
                file_style,
                Some(ClickAction::SidebarFile(section.id.clone())),
            );
        }
    }
}
