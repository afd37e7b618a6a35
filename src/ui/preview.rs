use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{Model, PREVIEW_CHAR_LIMIT, PREVIEW_NEWLINE_LIMIT};
use crate::compose::{self, Affordance};
use crate::locale;

/// Render the phone-style preview with feed-like folding.
pub fn render_preview(model: &Model, frame: &mut Frame, area: Rect) {
    let ui = locale::ui(model.lang);
    let block = Block::default()
        .title(ui.preview_title)
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            ui.preview_user,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            ui.preview_headline,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            ui.preview_time,
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];

    if model.buffer.is_empty() {
        lines.push(Line::from(Span::styled(
            ui.preview_placeholder,
            Style::default().fg(Color::DarkGray).italic(),
        )));
    } else {
        let preview = compose::decide(
            &model.buffer,
            model.preview_expanded,
            PREVIEW_CHAR_LIMIT,
            PREVIEW_NEWLINE_LIMIT,
        );
        for raw in preview.display.split('\n') {
            lines.push(Line::from(raw.to_string()));
        }
        match preview.affordance {
            Affordance::None => {}
            Affordance::Expand => lines.push(Line::from(Span::styled(
                ui.read_more,
                Style::default().fg(Color::Cyan),
            ))),
            Affordance::Collapse => lines.push(Line::from(Span::styled(
                ui.read_less,
                Style::default().fg(Color::Cyan),
            ))),
        }
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}
