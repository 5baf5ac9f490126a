//! Toast rendering.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{Notification, NotificationLevel};

use super::theme::{COLOR_DIALOG_BG, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

/// Draw the toast in the bottom-right corner of `area`.
pub fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    let Some(rect) = toast_area(&notification.message, area) else {
        return;
    };

    let color = match notification.level {
        NotificationLevel::Info => COLOR_SUCCESS,
        NotificationLevel::Error => COLOR_ERROR,
    };

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    frame.render_widget(
        Paragraph::new(Span::styled(
            notification.message.clone(),
            Style::default().fg(COLOR_HEADER),
        ))
        .block(block),
        rect,
    );
}

fn toast_area(message: &str, area: Rect) -> Option<Rect> {
    if area.height < 3 || area.width < 6 {
        return None;
    }
    let width = (message.width() as u16 + 4).min(area.width);
    Some(Rect::new(
        area.x + area.width - width,
        area.y + area.height - 3,
        width,
        3,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_area_bottom_right() {
        let rect = toast_area("Email copied to clipboard!", Rect::new(0, 1, 100, 30)).unwrap();
        assert_eq!(rect, Rect::new(70, 28, 30, 3));
    }

    #[test]
    fn test_toast_area_too_small() {
        assert!(toast_area("hi", Rect::new(0, 0, 5, 2)).is_none());
    }
}
