//! Content area: the section document and project pages.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};
use crate::models::Project;
use crate::state::{DocumentLine, LineKind};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOLDER, COLOR_HEADER, COLOR_LINK, COLOR_TEXT,
};

/// Width of the line-number gutter
const GUTTER: usize = 4;

/// Title bar: menu button on narrow terminals and the open file path.
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect, hits: &mut HitAreaRegistry) {
    let mut spans = Vec::new();
    if app.sidebar.is_narrow() {
        let button = Rect::new(area.x, area.y, 4.min(area.width), 1);
        spans.push(Span::styled("[≡] ", Style::default().fg(COLOR_ACCENT)));
        hits.register(button, ClickAction::SidebarToggle, None);
    }

    let file = match app.current_project() {
        Some(project) => format!("projects/{}/", project.id),
        None => app.document.active_file_name().to_string(),
    };
    spans.push(Span::styled("~/portfolio/", Style::default().fg(COLOR_DIM)));
    spans.push(Span::styled(file, Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)));

    if let Some(fragment) = app.fragment() {
        spans.push(Span::styled(format!("  {}", fragment), Style::default().fg(COLOR_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render whichever view the content area shows.
pub fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let project_id = match &app.view {
        View::Project { id, .. } => id.clone(),
        View::Document => return render_document(frame, app, area),
    };

    let Some(project) = app.config.project(&project_id).cloned() else {
        app.view = View::Document;
        return render_document(frame, app, area);
    };

    // Clamp the stored offset so scrolling back up responds immediately
    let lines = project_lines(&project);
    let max = lines.len().saturating_sub(area.height as usize);
    if let View::Project { scroll, .. } = &mut app.view {
        *scroll = (*scroll).min(max);
        frame.render_widget(Paragraph::new(lines).scroll((*scroll as u16, 0)), area);
    }
}

fn render_document(frame: &mut Frame, app: &App, area: Rect) {
    let doc = &app.document;
    let lines: Vec<Line> = doc
        .lines()
        .iter()
        .enumerate()
        .skip(doc.scroll())
        .take(area.height as usize)
        .map(|(number, line)| document_line(number + 1, line))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn document_line(number: usize, line: &DocumentLine) -> Line<'static> {
    let gutter = Span::styled(
        format!("{:>width$} ", number, width = GUTTER - 1),
        Style::default().fg(COLOR_BORDER),
    );
    let text = match line.kind {
        LineKind::Title => Span::styled(
            format!("# {}", line.text),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        LineKind::Body => Span::styled(line.text.clone(), Style::default().fg(COLOR_TEXT)),
        LineKind::Spacer => Span::raw(""),
    };
    Line::from(vec![gutter, text])
}

/// Lines of a project page.
pub fn project_lines(project: &Project) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("# {}", project.name),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(project.summary.clone(), Style::default().fg(COLOR_HEADER))),
    ];

    if !project.stack.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("stack: ", Style::default().fg(COLOR_DIM)),
            Span::styled(project.stack.join(" · "), Style::default().fg(COLOR_FOLDER)),
        ]));
    }

    if !project.details.is_empty() {
        lines.push(Line::default());
        lines.extend(
            project
                .details
                .iter()
                .map(|d| Line::from(Span::styled(d.clone(), Style::default().fg(COLOR_TEXT)))),
        );
    }

    lines.push(Line::default());
    if let Some(url) = &project.url {
        lines.push(Line::from(vec![
            Span::styled("link: ", Style::default().fg(COLOR_DIM)),
            Span::styled(url.clone(), Style::default().fg(COLOR_LINK)),
            Span::styled("  (o to open)", Style::default().fg(COLOR_DIM)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "Esc / h to go back",
        Style::default().fg(COLOR_DIM),
    )));
    lines
}
