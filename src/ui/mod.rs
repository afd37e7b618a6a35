//! Terminal UI components.
//!
//! Three columns: the template sidebar, the editor, and a phone-style
//! preview, with a one-row status bar underneath. Rendering is a pure
//! projection of the [`Model`](crate::app::Model); the only state it
//! touches is the editor scroll offset, kept in sync with the caret.

mod editor;
mod preview;
mod render;
mod sidebar;
mod status;

pub use render::{render, split_main_columns};

pub const SIDEBAR_WIDTH_PERCENT: u16 = 24;
pub const EDITOR_WIDTH_PERCENT: u16 = 44;
pub const PREVIEW_WIDTH_PERCENT: u16 = 32;
