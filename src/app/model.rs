use std::time::{Duration, Instant};

use crate::compose::{self, Stats};
use crate::locale::{self, Lang};
use crate::templates::{self, PostKind, Snippet, TemplateFile};

/// Soft character limit flagged in the status bar. Display concern only:
/// every core function stays correct arbitrarily far past it.
pub const MAX_CHARS: usize = 3000;

/// Preview fold limits, matching how feeds collapse long posts.
pub const PREVIEW_CHAR_LIMIT: usize = 210;
pub const PREVIEW_NEWLINE_LIMIT: usize = 5;

/// How long the "copied" flag stays lit after a successful clipboard write.
pub const COPIED_FLAG_MS: u64 = 1500;

/// Buffers longer than this (in code points) need a confirming second
/// activation before a structure template may replace them.
pub const REPLACE_CONFIRM_THRESHOLD: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// One entry in the sidebar palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEntry {
    /// A non-activatable section header; navigation skips over it.
    Header(&'static str),
    /// A full post structure; activating it replaces the buffer.
    Structure(PostKind),
    /// An opening line, inserted at the caret.
    Hook(Snippet),
    /// A call-to-action, inserted after a blank line.
    Cta(Snippet),
    /// A single glyph, inserted at the caret.
    Quick(&'static str),
}

impl PaletteEntry {
    pub const fn is_header(&self) -> bool {
        matches!(self, Self::Header(_))
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The buffer is a
/// plain `String` mutated only by whole-buffer replacement; the caret,
/// selection anchor, and any pending caret restore are code-point offsets
/// into it, recomputed on every edit rather than patched incrementally.
pub struct Model {
    /// The post being composed.
    pub buffer: String,
    /// Caret position as a code-point offset into `buffer`.
    pub caret: usize,
    /// Selection anchor; `None` (or equal to the caret) means a bare caret.
    pub anchor: Option<usize>,
    /// Active interface language.
    pub lang: Lang,
    /// Whether the folded preview is expanded to full text.
    pub preview_expanded: bool,
    /// Whether the template sidebar is visible.
    pub sidebar_visible: bool,
    /// Where keyboard focus sits: the sidebar or the editor.
    pub sidebar_focused: bool,
    /// Selected palette entry index.
    pub sidebar_selected: usize,
    /// Flattened sidebar entries for the active language.
    pub palette: Vec<PaletteEntry>,
    /// First visible buffer line in the editor pane.
    pub editor_scroll: usize,
    /// Structure template awaiting a confirming second activation.
    pub replace_pending: Option<PostKind>,
    /// Caret restore scheduled for after the next render pass. A newer
    /// request overwrites an unfired one; restores never queue up.
    pending_caret: Option<usize>,
    /// Extra hooks and CTAs loaded from a user template file.
    custom_hooks: Vec<Snippet>,
    custom_ctas: Vec<Snippet>,
    copied_until: Option<Instant>,
    toast: Option<Toast>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Terminal size.
    pub width: u16,
    pub height: u16,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("buffer_chars", &self.buffer.chars().count())
            .field("caret", &self.caret)
            .field("anchor", &self.anchor)
            .field("lang", &self.lang)
            .field("preview_expanded", &self.preview_expanded)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model with an empty buffer.
    pub fn new(lang: Lang, terminal_size: (u16, u16)) -> Self {
        let mut model = Self {
            buffer: String::new(),
            caret: 0,
            anchor: None,
            lang,
            preview_expanded: false,
            sidebar_visible: true,
            sidebar_focused: false,
            sidebar_selected: 0,
            palette: Vec::new(),
            editor_scroll: 0,
            replace_pending: None,
            pending_caret: None,
            custom_hooks: Vec::new(),
            custom_ctas: Vec::new(),
            copied_until: None,
            toast: None,
            should_quit: false,
            width: terminal_size.0,
            height: terminal_size.1,
        };
        model.rebuild_palette();
        model
    }

    /// Merge a custom template file into the palette.
    #[must_use]
    pub fn with_custom_templates(mut self, file: TemplateFile) -> Self {
        self.custom_hooks = file.hooks;
        self.custom_ctas = file.ctas;
        self.rebuild_palette();
        self
    }

    /// Rebuild the sidebar palette for the active language. Custom
    /// snippets follow the built-ins of their category; the emoji picker
    /// groups come last, each under its own header.
    pub fn rebuild_palette(&mut self) {
        let ui = locale::ui(self.lang);
        let mut palette = vec![
            PaletteEntry::Structure(PostKind::Story),
            PaletteEntry::Structure(PostKind::Educational),
            PaletteEntry::Structure(PostKind::Feedback),
        ];
        palette.push(PaletteEntry::Header(ui.hooks_title));
        palette.extend(templates::hooks(self.lang).into_iter().map(PaletteEntry::Hook));
        palette.extend(self.custom_hooks.iter().cloned().map(PaletteEntry::Hook));
        palette.push(PaletteEntry::Header(ui.ctas_title));
        palette.extend(templates::ctas(self.lang).into_iter().map(PaletteEntry::Cta));
        palette.extend(self.custom_ctas.iter().cloned().map(PaletteEntry::Cta));
        palette.push(PaletteEntry::Header(ui.emoji_title));
        palette.extend(templates::QUICK_ITEMS.iter().copied().map(PaletteEntry::Quick));
        for group in &templates::EMOJI_GROUPS {
            palette.push(PaletteEntry::Header(ui.emoji_group_label(group.id)));
            palette.extend(group.items.iter().copied().map(PaletteEntry::Quick));
        }
        self.palette = palette;
        self.sidebar_selected = self
            .sidebar_selected
            .min(self.palette.len().saturating_sub(1));
    }

    /// Statistics for the current buffer, recomputed from scratch.
    pub fn stats(&self) -> Stats {
        compose::stats(&self.buffer)
    }

    /// Whether the buffer exceeds the soft character limit.
    pub fn is_over_limit(&self) -> bool {
        self.stats().chars > MAX_CHARS
    }

    /// Code-point length of the buffer.
    pub fn buffer_len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// The normalized selection range, or `None` for a bare caret.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        if anchor == self.caret {
            return None;
        }
        Some((anchor.min(self.caret), anchor.max(self.caret)))
    }

    pub const fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Replace the whole buffer with new document content (a template
    /// load). The text identity changes, so every derived offset is
    /// dropped: caret to the start, selection cleared, preview collapsed.
    pub fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.caret = 0;
        self.anchor = None;
        self.pending_caret = None;
        self.preview_expanded = false;
        self.editor_scroll = 0;
    }

    /// Clamp caret and anchor into the current buffer.
    pub fn clamp_cursor(&mut self) {
        let len = self.buffer_len();
        self.caret = self.caret.min(len);
        if let Some(anchor) = self.anchor {
            self.anchor = Some(anchor.min(len));
        }
    }

    /// Schedule a caret restore for after the next render pass. A second
    /// request before the first fires supersedes it.
    pub const fn queue_caret(&mut self, caret: usize) {
        self.pending_caret = Some(caret);
    }

    /// Take the pending caret restore, if any. Called by the event loop
    /// strictly after a draw completes.
    pub const fn take_pending_caret(&mut self) -> Option<usize> {
        self.pending_caret.take()
    }

    pub const fn has_pending_caret(&self) -> bool {
        self.pending_caret.is_some()
    }

    /// Light the transient "copied" flag.
    pub fn mark_copied(&mut self) {
        self.copied_until = Some(Instant::now() + Duration::from_millis(COPIED_FLAG_MS));
    }

    pub fn copied_active(&self) -> bool {
        self.copied_until.is_some_and(|until| Instant::now() < until)
    }

    /// Clear the copied flag once its window has passed. Returns true
    /// when the flag transitioned, so the caller can repaint.
    pub fn expire_copied(&mut self, now: Instant) -> bool {
        if self.copied_until.is_some_and(|until| until <= now) {
            self.copied_until = None;
            return true;
        }
        false
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Scroll the editor pane so the caret line stays visible.
    pub fn ensure_caret_visible(&mut self, pane_height: usize) {
        if pane_height == 0 {
            return;
        }
        let (line, _) = compose::cursor::line_col(&self.buffer, self.caret);
        if line < self.editor_scroll {
            self.editor_scroll = line;
        } else if line >= self.editor_scroll + pane_height {
            self.editor_scroll = line + 1 - pane_height;
        }
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(Lang::default(), (80, 24))
    }
}
