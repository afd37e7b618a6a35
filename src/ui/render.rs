use ratatui::prelude::*;

use crate::app::Model;

use super::{
    EDITOR_WIDTH_PERCENT, PREVIEW_WIDTH_PERCENT, SIDEBAR_WIDTH_PERCENT, editor, preview, sidebar,
    status,
};

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(SIDEBAR_WIDTH_PERCENT),
            Constraint::Percentage(EDITOR_WIDTH_PERCENT),
            Constraint::Percentage(PREVIEW_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    if model.sidebar_visible {
        let chunks = split_main_columns(rows[0]);
        sidebar::render_sidebar(model, frame, chunks[0]);
        editor::render_editor(model, frame, chunks[1]);
        preview::render_preview(model, frame, chunks[2]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(EDITOR_WIDTH_PERCENT + SIDEBAR_WIDTH_PERCENT),
                Constraint::Percentage(PREVIEW_WIDTH_PERCENT),
            ])
            .split(rows[0]);
        editor::render_editor(model, frame, chunks[0]);
        preview::render_preview(model, frame, chunks[1]);
    }

    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, rows[1]);
    } else {
        status::render_status_bar(model, frame, rows[1]);
    }
}
