use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::update::Direction;
use crate::app::{App, Message, Model};
use crate::compose::Style;
use crate::locale::Lang;
use crate::templates::PostKind;

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Resize(w, h) => {
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        // Global chords work regardless of focus.
        if ctrl {
            match key.code {
                KeyCode::Char('q') => return Some(Message::Quit),
                KeyCode::Char('y') => return Some(Message::CopyBuffer),
                KeyCode::Char('t') => return Some(Message::ToggleSidebar),
                KeyCode::Char('e') => return Some(Message::TogglePreviewExpanded),
                KeyCode::Char('n') => return Some(Message::Normalize),
                KeyCode::Char('a') => return Some(Message::SelectAll),
                KeyCode::Char('l') => {
                    let next = match model.lang {
                        Lang::En => Lang::Fr,
                        Lang::Fr => Lang::En,
                    };
                    return Some(Message::SetLanguage(next));
                }
                _ => return None,
            }
        }
        if alt {
            match key.code {
                KeyCode::Char('b') => return Some(Message::ApplyStyle(Style::Bold)),
                KeyCode::Char('i') => return Some(Message::ApplyStyle(Style::Italic)),
                KeyCode::Char('h') => return Some(Message::ApplyStyle(Style::SerifBold)),
                KeyCode::Char('s') => return Some(Message::ApplyStyle(Style::SmallCaps)),
                KeyCode::Char('1') => return Some(Message::ApplyTemplate(PostKind::Story)),
                KeyCode::Char('2') => return Some(Message::ApplyTemplate(PostKind::Educational)),
                KeyCode::Char('3') => return Some(Message::ApplyTemplate(PostKind::Feedback)),
                _ => return None,
            }
        }
        if key.code == KeyCode::Tab {
            return Some(Message::SwitchFocus);
        }

        if model.sidebar_focused {
            return match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Message::PaletteUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Message::PaletteDown),
                KeyCode::Enter => Some(Message::PaletteActivate),
                KeyCode::Esc => Some(Message::SwitchFocus),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Left => Some(Message::Move(Direction::Left, shift)),
            KeyCode::Right => Some(Message::Move(Direction::Right, shift)),
            KeyCode::Up => Some(Message::Move(Direction::Up, shift)),
            KeyCode::Down => Some(Message::Move(Direction::Down, shift)),
            KeyCode::Home => Some(Message::MoveHome(shift)),
            KeyCode::End => Some(Message::MoveEnd(shift)),
            KeyCode::Enter => Some(Message::NewLine),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Esc => Some(Message::ClearSelection),
            KeyCode::Char(ch) => Some(Message::InsertChar(ch)),
            _ => None,
        }
    }
}
