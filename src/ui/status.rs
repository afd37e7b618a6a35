use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{MAX_CHARS, Model};
use crate::locale;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let ui = locale::ui(model.lang);
    let stats = model.stats();

    let counter_style = if stats.chars > MAX_CHARS {
        Style::default().bg(Color::DarkGray).fg(Color::Red)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    };
    let left = format!(
        " {}  {}/{} {}  {} {}  ~{} {}",
        ui.title, stats.chars, MAX_CHARS, ui.stats_chars, stats.words, ui.stats_words,
        stats.read_time_secs, ui.stats_read_time,
    );
    let right = if model.copied_active() {
        ui.copied
    } else {
        ui.copy_hint
    };
    let pad = (area.width as usize)
        .saturating_sub(left.chars().count() + right.chars().count() + 1);

    let line = Line::from(vec![
        Span::styled(left, counter_style),
        Span::styled(
            " ".repeat(pad),
            Style::default().bg(Color::DarkGray),
        ),
        Span::styled(
            right,
            if model.copied_active() {
                Style::default().bg(Color::DarkGray).fg(Color::Green)
            } else {
                Style::default().bg(Color::DarkGray).fg(Color::Gray)
            },
        ),
        Span::styled(" ", Style::default().bg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        crate::app::ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{} {}", prefix, message)).style(style);
    frame.render_widget(toast, area);
}
