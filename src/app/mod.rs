//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{
    COPIED_FLAG_MS, MAX_CHARS, Model, PREVIEW_CHAR_LIMIT, PREVIEW_NEWLINE_LIMIT, PaletteEntry,
    REPLACE_CONFIRM_THRESHOLD, ToastLevel,
};
pub use update::{Direction, Message, update};

use crate::locale::Lang;
use crate::templates::TemplateFile;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    lang: Lang,
    sidebar_visible: bool,
    custom_templates: Option<TemplateFile>,
}

impl App {
    /// Create a new application.
    pub const fn new(lang: Lang) -> Self {
        Self {
            lang,
            sidebar_visible: true,
            custom_templates: None,
        }
    }

    /// Set initial sidebar visibility.
    pub const fn with_sidebar_visible(mut self, visible: bool) -> Self {
        self.sidebar_visible = visible;
        self
    }

    /// Layer user hooks and CTAs on top of the built-in palette.
    pub fn with_custom_templates(mut self, file: Option<TemplateFile>) -> Self {
        self.custom_templates = file;
        self
    }
}

#[cfg(test)]
mod tests;
