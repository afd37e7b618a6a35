use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{Model, PaletteEntry};
use crate::locale::{self, UiStrings};
use crate::templates::PostKind;

fn entry_label(entry: &PaletteEntry, ui: &UiStrings) -> String {
    match entry {
        PaletteEntry::Header(label) => (*label).to_string(),
        PaletteEntry::Structure(PostKind::Story) => ui.label_story.to_string(),
        PaletteEntry::Structure(PostKind::Educational) => ui.label_educational.to_string(),
        PaletteEntry::Structure(PostKind::Feedback) => ui.label_feedback.to_string(),
        PaletteEntry::Hook(snippet) | PaletteEntry::Cta(snippet) => snippet.label.clone(),
        PaletteEntry::Quick(item) => (*item).to_string(),
    }
}

const fn entry_color(entry: &PaletteEntry) -> Color {
    match entry {
        PaletteEntry::Header(_) => Color::DarkGray,
        PaletteEntry::Structure(_) => Color::Magenta,
        PaletteEntry::Hook(_) => Color::Green,
        PaletteEntry::Cta(_) => Color::Cyan,
        PaletteEntry::Quick(_) => Color::Reset,
    }
}

/// Render the template palette.
pub fn render_sidebar(model: &Model, frame: &mut Frame, area: Rect) {
    let ui = locale::ui(model.lang);
    let visible_rows = area.height.saturating_sub(2) as usize;
    let start = if model.sidebar_selected >= visible_rows {
        model.sidebar_selected + 1 - visible_rows
    } else {
        0
    };

    let items: Vec<Line> = model
        .palette
        .iter()
        .enumerate()
        .skip(start)
        .take(visible_rows)
        .map(|(i, entry)| {
            let style = Style::default().fg(entry_color(entry));
            if entry.is_header() {
                return Line::styled(entry_label(entry, ui), style.bold());
            }
            let marker = if i == model.sidebar_selected { ">" } else { " " };
            let style = if i == model.sidebar_selected {
                style.reversed()
            } else {
                style
            };
            Line::styled(format!("{marker} {}", entry_label(entry, ui)), style)
        })
        .collect();

    let block = Block::default()
        .title(ui.templates_title)
        .borders(Borders::ALL)
        .border_style(if model.sidebar_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    frame.render_widget(Paragraph::new(items).block(block), area);
}
