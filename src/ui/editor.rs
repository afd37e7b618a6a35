use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{MAX_CHARS, Model};
use crate::locale;

/// Render the compose pane with caret and selection highlighting.
pub fn render_editor(model: &mut Model, frame: &mut Frame, area: Rect) {
    let ui = locale::ui(model.lang);
    let block = Block::default()
        .title(ui.editor_title)
        .borders(Borders::ALL)
        .border_style(if model.sidebar_focused {
            Style::default()
        } else {
            Style::default().fg(Color::Yellow)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if model.buffer.is_empty() && model.sidebar_focused {
        let placeholder = Paragraph::new(ui.placeholder)
            .style(Style::default().fg(Color::DarkGray).italic());
        frame.render_widget(placeholder, inner);
        return;
    }

    model.ensure_caret_visible(inner.height as usize);
    let selection = model.selection();
    let caret = model.caret;

    let mut lines: Vec<Line> = Vec::new();
    let mut offset = 0usize; // code-point offset of the current line start
    for (line_idx, raw) in model.buffer.split('\n').enumerate() {
        let line_len = raw.chars().count();
        let visible = line_idx >= model.editor_scroll
            && line_idx < model.editor_scroll + inner.height as usize;
        if visible {
            let mut spans: Vec<Span> = Vec::new();
            for (col, ch) in raw.chars().enumerate() {
                let idx = offset + col;
                let mut style = Style::default();
                if idx >= MAX_CHARS {
                    style = style.fg(Color::Red);
                }
                if selection.is_some_and(|(start, end)| idx >= start && idx < end) {
                    style = style.bg(Color::Blue).fg(Color::White);
                }
                if idx == caret {
                    style = style.reversed();
                }
                spans.push(Span::styled(ch.to_string(), style));
            }
            // Caret sitting at the line end gets a phantom cell.
            if caret == offset + line_len {
                spans.push(Span::styled(" ", Style::default().reversed()));
            }
            lines.push(Line::from(spans));
        }
        offset += line_len + 1;
    }

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}
