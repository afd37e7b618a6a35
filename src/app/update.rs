use crate::app::Model;
use crate::app::model::{PaletteEntry, REPLACE_CONFIRM_THRESHOLD, ToastLevel};
use crate::compose::{self, Style, cursor};
use crate::locale::{self, Lang};
use crate::templates::{self, PostKind};

/// Caret movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Type a single character at the caret (replacing any selection)
    InsertChar(char),
    /// Insert a snippet at the caret (replacing any selection)
    InsertText(String),
    /// Insert a line break
    NewLine,
    /// Delete the selection, or the character before the caret
    DeleteBack,
    /// Delete the selection, or the character after the caret
    DeleteForward,
    /// Replace the buffer with its normalized form
    Normalize,

    // Caret and selection
    /// Move the caret; `true` extends the selection
    Move(Direction, bool),
    /// Move to the start of the current line; `true` extends the selection
    MoveHome(bool),
    /// Move to the end of the current line; `true` extends the selection
    MoveEnd(bool),
    /// Select the whole buffer
    SelectAll,
    /// Drop the selection, keeping the caret
    ClearSelection,

    // Formatting
    /// Restyle the selected text with a Unicode variant
    ApplyStyle(Style),
    /// Load a structure template, replacing the buffer
    ApplyTemplate(PostKind),

    // Panes
    /// Toggle the folded preview between cut and full text
    TogglePreviewExpanded,
    /// Toggle sidebar visibility
    ToggleSidebar,
    /// Switch focus between sidebar and editor
    SwitchFocus,
    /// Move sidebar selection up
    PaletteUp,
    /// Move sidebar selection down
    PaletteDown,
    /// Activate the selected palette entry
    PaletteActivate,

    // System
    /// Switch the interface language
    SetLanguage(Lang),
    /// Copy the buffer to the system clipboard
    CopyBuffer,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force a redraw
    Redraw,
    /// Quit the application
    Quit,
}

/// Pure state transition function.
///
/// Takes the current model and a message, returns the new model. No side
/// effects: clipboard writes and terminal I/O live in the effects layer.
pub fn update(mut model: Model, msg: Message) -> Model {
    // A pending template replacement survives only its own confirming
    // activation; any other action cancels it.
    if !matches!(
        msg,
        Message::ApplyTemplate(_) | Message::PaletteActivate | Message::Redraw
    ) {
        model.replace_pending = None;
    }

    match msg {
        Message::InsertChar(ch) => {
            let mut tmp = [0u8; 4];
            insert_at_cursor(&mut model, ch.encode_utf8(&mut tmp));
        }
        Message::InsertText(text) => {
            // Snippet insertions restore the caret after the redraw, the
            // way the palette hands text over while the editor pane is
            // not focused.
            let (start, end) = model.selection().unwrap_or((model.caret, model.caret));
            let (next, caret) = cursor::insert(&model.buffer, &text, start, end);
            model.buffer = next;
            model.anchor = None;
            model.clamp_cursor();
            model.queue_caret(caret);
        }
        Message::NewLine => insert_at_cursor(&mut model, "\n"),
        Message::DeleteBack => {
            if let Some((start, end)) = model.selection() {
                delete_range(&mut model, start, end);
            } else if model.caret > 0 {
                let caret = model.caret;
                delete_range(&mut model, caret - 1, caret);
            }
        }
        Message::DeleteForward => {
            if let Some((start, end)) = model.selection() {
                delete_range(&mut model, start, end);
            } else if model.caret < model.buffer_len() {
                let caret = model.caret;
                delete_range(&mut model, caret, caret + 1);
            }
        }
        Message::Normalize => {
            model.buffer = compose::normalize(&model.buffer);
            model.anchor = None;
            model.clamp_cursor();
        }
        Message::Move(direction, extend) => {
            let target = move_target(&model, direction);
            apply_motion(&mut model, target, extend);
        }
        Message::MoveHome(extend) => {
            let (line, _) = cursor::line_col(&model.buffer, model.caret);
            let target = cursor::caret_at(&model.buffer, line, 0);
            apply_motion(&mut model, target, extend);
        }
        Message::MoveEnd(extend) => {
            let (line, _) = cursor::line_col(&model.buffer, model.caret);
            let target = cursor::caret_at(&model.buffer, line, usize::MAX);
            apply_motion(&mut model, target, extend);
        }
        Message::SelectAll => {
            model.anchor = Some(0);
            model.caret = model.buffer_len();
        }
        Message::ClearSelection => model.clear_selection(),
        Message::ApplyStyle(style) => {
            // Without a selection there is nothing to restyle; the buffer
            // and caret stay untouched.
            if let Some((start, end)) = model.selection() {
                let selected: String = model
                    .buffer
                    .chars()
                    .skip(start)
                    .take(end - start)
                    .collect();
                let formatted = compose::transform(&selected, style);
                let (next, (new_start, new_end)) =
                    cursor::replace_selection(&model.buffer, &formatted, start, end);
                model.buffer = next;
                model.anchor = Some(new_start);
                model.queue_caret(new_end);
            }
        }
        Message::ApplyTemplate(kind) => apply_template(&mut model, kind),
        Message::TogglePreviewExpanded => model.preview_expanded = !model.preview_expanded,
        Message::ToggleSidebar => {
            model.sidebar_visible = !model.sidebar_visible;
            if !model.sidebar_visible {
                model.sidebar_focused = false;
            }
        }
        Message::SwitchFocus => {
            if model.sidebar_visible {
                model.sidebar_focused = !model.sidebar_focused;
            }
        }
        Message::PaletteUp => {
            // Headers are labels, not targets; land on the previous entry.
            let mut idx = model.sidebar_selected;
            while idx > 0 {
                idx -= 1;
                if !model.palette[idx].is_header() {
                    model.sidebar_selected = idx;
                    break;
                }
            }
        }
        Message::PaletteDown => {
            let mut idx = model.sidebar_selected;
            while idx + 1 < model.palette.len() {
                idx += 1;
                if !model.palette[idx].is_header() {
                    model.sidebar_selected = idx;
                    break;
                }
            }
        }
        Message::PaletteActivate => {
            if let Some(entry) = model.palette.get(model.sidebar_selected).cloned() {
                return match entry {
                    PaletteEntry::Header(_) => model,
                    PaletteEntry::Structure(kind) => {
                        apply_template(&mut model, kind);
                        model
                    }
                    PaletteEntry::Hook(snippet) => {
                        update(model, Message::InsertText(snippet.text))
                    }
                    PaletteEntry::Cta(snippet) => {
                        // CTAs close the post, so they arrive after a blank
                        // line.
                        update(model, Message::InsertText(format!("\n\n{}", snippet.text)))
                    }
                    PaletteEntry::Quick(item) => {
                        update(model, Message::InsertText(item.to_string()))
                    }
                };
            }
        }
        Message::SetLanguage(lang) => {
            if model.lang != lang {
                model.lang = lang;
                model.rebuild_palette();
            }
        }
        // Clipboard write happens in the effects layer.
        Message::CopyBuffer => {}
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
        }
        Message::Redraw => {}
        Message::Quit => model.should_quit = true,
    }

    model
}

/// Replace the selection (or the caret position) with `text`, moving the
/// caret to the end of the insertion.
fn insert_at_cursor(model: &mut Model, text: &str) {
    let (start, end) = model.selection().unwrap_or((model.caret, model.caret));
    let (next, caret) = cursor::insert(&model.buffer, text, start, end);
    model.buffer = next;
    model.caret = caret;
    model.anchor = None;
}

fn delete_range(model: &mut Model, start: usize, end: usize) {
    let (next, caret) = cursor::insert(&model.buffer, "", start, end);
    model.buffer = next;
    model.caret = caret;
    model.anchor = None;
}

fn apply_motion(model: &mut Model, target: usize, extend: bool) {
    if extend {
        if model.anchor.is_none() {
            model.anchor = Some(model.caret);
        }
    } else {
        model.anchor = None;
    }
    model.caret = target;
}

fn move_target(model: &Model, direction: Direction) -> usize {
    match direction {
        Direction::Left => model.caret.saturating_sub(1),
        Direction::Right => (model.caret + 1).min(model.buffer_len()),
        Direction::Up => {
            let (line, col) = cursor::line_col(&model.buffer, model.caret);
            if line == 0 {
                0
            } else {
                cursor::caret_at(&model.buffer, line - 1, col)
            }
        }
        Direction::Down => {
            let (line, col) = cursor::line_col(&model.buffer, model.caret);
            cursor::caret_at(&model.buffer, line + 1, col)
        }
    }
}

/// Load a structure template into the buffer. Replacing more than a few
/// characters of existing text asks for a confirming second activation.
fn apply_template(model: &mut Model, kind: PostKind) {
    if model.buffer_len() > REPLACE_CONFIRM_THRESHOLD && model.replace_pending != Some(kind) {
        model.replace_pending = Some(kind);
        model.show_toast(ToastLevel::Warning, locale::ui(model.lang).confirm_replace);
        return;
    }
    model.replace_pending = None;
    model.set_buffer(templates::structure(model.lang, kind).to_string());
}
