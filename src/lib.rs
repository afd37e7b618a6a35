// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. compose::ComposeStats)
    clippy::module_name_repetitions
)]

//! # Postless
//!
//! A terminal composer for social-media posts.
//!
//! Postless helps draft feed-ready posts in the terminal with:
//! - Unicode styling (bold, italic, serif bold, small caps) that survives
//!   plain-text paste targets
//! - Live character, word, and read-time statistics
//! - A phone-style preview showing exactly where the feed folds the post
//! - Hook, call-to-action, and full-structure templates in English and
//!   French, extensible from a JSON file
//!
//! ## Architecture
//!
//! Postless uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`compose`]: Pure text transforms, statistics, and truncation
//! - [`templates`]: Built-in and user-provided snippets
//! - [`locale`]: Interface language bundles
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod compose;
pub mod config;
pub mod locale;
pub mod templates;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::compose::{Stats, Style};
    pub use crate::locale::Lang;
}
