use std::time::{Duration, Instant};

use crate::compose::Style;
use crate::locale::Lang;
use crate::templates::{self, PostKind, Snippet, TemplateFile};

use super::model::REPLACE_CONFIRM_THRESHOLD;
use super::{Direction, Message, Model, PaletteEntry, update};

fn create_test_model() -> Model {
    Model::new(Lang::En, (80, 24))
}

fn model_with_text(text: &str) -> Model {
    let mut model = create_test_model();
    model.buffer = text.to_string();
    model
}

fn select(model: &mut Model, start: usize, end: usize) {
    model.anchor = Some(start);
    model.caret = end;
}

// ===== Typing and deletion =====

#[test]
fn test_insert_char_advances_caret() {
    let model = update(create_test_model(), Message::InsertChar('a'));
    let model = update(model, Message::InsertChar('b'));
    assert_eq!(model.buffer, "ab");
    assert_eq!(model.caret, 2);
}

#[test]
fn test_insert_char_replaces_selection() {
    let mut model = model_with_text("hello");
    select(&mut model, 1, 4);
    let model = update(model, Message::InsertChar('x'));
    assert_eq!(model.buffer, "hxo");
    assert_eq!(model.caret, 2);
    assert_eq!(model.selection(), None);
}

#[test]
fn test_newline_inserts_break() {
    let mut model = model_with_text("ab");
    model.caret = 1;
    let model = update(model, Message::NewLine);
    assert_eq!(model.buffer, "a\nb");
    assert_eq!(model.caret, 2);
}

#[test]
fn test_delete_back_removes_previous_char() {
    let mut model = model_with_text("abc");
    model.caret = 2;
    let model = update(model, Message::DeleteBack);
    assert_eq!(model.buffer, "ac");
    assert_eq!(model.caret, 1);
}

#[test]
fn test_delete_back_at_start_is_noop() {
    let model = update(model_with_text("abc"), Message::DeleteBack);
    assert_eq!(model.buffer, "abc");
    assert_eq!(model.caret, 0);
}

#[test]
fn test_delete_forward_removes_next_char() {
    let mut model = model_with_text("abc");
    model.caret = 1;
    let model = update(model, Message::DeleteForward);
    assert_eq!(model.buffer, "ac");
    assert_eq!(model.caret, 1);
}

#[test]
fn test_delete_removes_whole_selection() {
    let mut model = model_with_text("abcdef");
    select(&mut model, 1, 4);
    let model = update(model, Message::DeleteBack);
    assert_eq!(model.buffer, "aef");
    assert_eq!(model.caret, 1);
}

#[test]
fn test_typing_multibyte_chars_uses_code_points() {
    let model = update(create_test_model(), Message::InsertChar('é'));
    let model = update(model, Message::InsertChar('🚀'));
    assert_eq!(model.buffer, "é🚀");
    assert_eq!(model.caret, 2);
}

// ===== Caret movement and selection =====

#[test]
fn test_move_right_clamps_at_end() {
    let mut model = model_with_text("ab");
    model.caret = 2;
    let model = update(model, Message::Move(Direction::Right, false));
    assert_eq!(model.caret, 2);
}

#[test]
fn test_move_with_shift_extends_selection() {
    let mut model = model_with_text("hello");
    model.caret = 1;
    let model = update(model, Message::Move(Direction::Right, true));
    let model = update(model, Message::Move(Direction::Right, true));
    assert_eq!(model.selection(), Some((1, 3)));
}

#[test]
fn test_move_without_shift_drops_selection() {
    let mut model = model_with_text("hello");
    select(&mut model, 1, 3);
    let model = update(model, Message::Move(Direction::Left, false));
    assert_eq!(model.selection(), None);
}

#[test]
fn test_vertical_movement_keeps_column() {
    let mut model = model_with_text("abcd\nxy\nlong line");
    model.caret = 3;
    let model = update(model, Message::Move(Direction::Down, false));
    // Column 3 clamps to the short line's end.
    assert_eq!(model.caret, 7);
    let model = update(model, Message::Move(Direction::Down, false));
    assert_eq!(model.caret, 10);
}

#[test]
fn test_home_and_end_move_within_line() {
    let mut model = model_with_text("first\nsecond");
    model.caret = 8;
    let model = update(model, Message::MoveHome(false));
    assert_eq!(model.caret, 6);
    let model = update(model, Message::MoveEnd(false));
    assert_eq!(model.caret, 12);
}

#[test]
fn test_select_all_spans_buffer() {
    let model = update(model_with_text("héllo"), Message::SelectAll);
    assert_eq!(model.selection(), Some((0, 5)));
}

#[test]
fn test_selection_normalizes_backward_drag() {
    let mut model = model_with_text("hello");
    select(&mut model, 4, 1);
    assert_eq!(model.selection(), Some((1, 4)));
}

// ===== Styling =====

#[test]
fn test_apply_style_without_selection_is_noop() {
    let mut model = model_with_text("hello");
    model.caret = 3;
    let model = update(model, Message::ApplyStyle(Style::Bold));
    assert_eq!(model.buffer, "hello");
    assert_eq!(model.caret, 3);
    assert!(!model.has_pending_caret());
}

#[test]
fn test_apply_style_transforms_only_selection() {
    let mut model = model_with_text("say hi now");
    select(&mut model, 4, 6);
    let model = update(model, Message::ApplyStyle(Style::Bold));
    assert_eq!(model.buffer, "say \u{1D5F5}\u{1D5F6} now");
    assert_eq!(model.anchor, Some(4));
}

#[test]
fn test_apply_style_queues_caret_restore() {
    let mut model = model_with_text("hello");
    select(&mut model, 0, 5);
    let mut model = update(model, Message::ApplyStyle(Style::SmallCaps));
    assert!(model.has_pending_caret());
    let caret = model.take_pending_caret();
    assert_eq!(caret, Some(5));
}

#[test]
fn test_later_caret_restore_supersedes_earlier() {
    let mut model = create_test_model();
    model.queue_caret(3);
    model.queue_caret(7);
    assert_eq!(model.take_pending_caret(), Some(7));
    assert_eq!(model.take_pending_caret(), None);
}

// ===== Templates =====

#[test]
fn test_template_loads_into_short_buffer_directly() {
    let model = update(model_with_text("draft"), Message::ApplyTemplate(PostKind::Story));
    assert_eq!(model.buffer, templates::structure(Lang::En, PostKind::Story));
    assert_eq!(model.caret, 0);
    assert!(!model.preview_expanded);
}

#[test]
fn test_template_over_long_buffer_needs_confirmation() {
    let text = "x".repeat(REPLACE_CONFIRM_THRESHOLD + 1);
    let model = update(model_with_text(&text), Message::ApplyTemplate(PostKind::Story));
    assert_eq!(model.buffer, text);
    assert_eq!(model.replace_pending, Some(PostKind::Story));

    let model = update(model, Message::ApplyTemplate(PostKind::Story));
    assert_eq!(model.buffer, templates::structure(Lang::En, PostKind::Story));
    assert_eq!(model.replace_pending, None);
}

#[test]
fn test_other_action_cancels_pending_replace() {
    let text = "x".repeat(REPLACE_CONFIRM_THRESHOLD + 1);
    let model = update(model_with_text(&text), Message::ApplyTemplate(PostKind::Story));
    let model = update(model, Message::InsertChar('y'));
    assert_eq!(model.replace_pending, None);

    // The next activation asks again instead of replacing.
    let model = update(model, Message::ApplyTemplate(PostKind::Story));
    assert!(model.buffer.starts_with('x'));
    assert_eq!(model.replace_pending, Some(PostKind::Story));
}

#[test]
fn test_template_load_collapses_expanded_preview() {
    let mut model = create_test_model();
    model.preview_expanded = true;
    let model = update(model, Message::ApplyTemplate(PostKind::Educational));
    assert!(!model.preview_expanded);
}

// ===== Palette =====

#[test]
fn test_palette_starts_with_structures() {
    let model = create_test_model();
    assert_eq!(model.palette[0], PaletteEntry::Structure(PostKind::Story));
    assert!(model.palette.len() > 3);
}

#[test]
fn test_palette_hook_inserts_at_caret() {
    let mut model = create_test_model();
    let hook_idx = model
        .palette
        .iter()
        .position(|e| matches!(e, PaletteEntry::Hook(_)))
        .unwrap();
    model.sidebar_selected = hook_idx;
    let PaletteEntry::Hook(snippet) = model.palette[hook_idx].clone() else {
        unreachable!()
    };
    let model = update(model, Message::PaletteActivate);
    assert_eq!(model.buffer, snippet.text);
}

#[test]
fn test_palette_cta_inserts_after_blank_line() {
    let mut model = model_with_text("body");
    model.caret = 4;
    let cta_idx = model
        .palette
        .iter()
        .position(|e| matches!(e, PaletteEntry::Cta(_)))
        .unwrap();
    model.sidebar_selected = cta_idx;
    let PaletteEntry::Cta(snippet) = model.palette[cta_idx].clone() else {
        unreachable!()
    };
    let model = update(model, Message::PaletteActivate);
    assert_eq!(model.buffer, format!("body\n\n{}", snippet.text));
}

#[test]
fn test_palette_navigation_clamps() {
    let model = update(create_test_model(), Message::PaletteUp);
    assert_eq!(model.sidebar_selected, 0);
    let last = model.palette.len() - 1;
    let mut model = model;
    model.sidebar_selected = last;
    let model = update(model, Message::PaletteDown);
    assert_eq!(model.sidebar_selected, last);
}

#[test]
fn test_palette_emoji_group_entry_inserts_glyph() {
    // "🚀" lives only in an emoji group, not in the quick toolbar items.
    let mut model = create_test_model();
    let idx = model
        .palette
        .iter()
        .position(|e| *e == PaletteEntry::Quick("🚀"))
        .unwrap();
    model.sidebar_selected = idx;
    let model = update(model, Message::PaletteActivate);
    assert_eq!(model.buffer, "🚀");
}

#[test]
fn test_palette_includes_every_emoji_group() {
    let model = create_test_model();
    for group in &templates::EMOJI_GROUPS {
        for item in group.items {
            assert!(
                model.palette.contains(&PaletteEntry::Quick(item)),
                "missing emoji {item} from group {}",
                group.id
            );
        }
    }
}

#[test]
fn test_palette_navigation_skips_headers() {
    let mut model = create_test_model();
    // Last structure entry sits right before the hooks header.
    model.sidebar_selected = 2;
    let model = update(model, Message::PaletteDown);
    assert!(!model.palette[model.sidebar_selected].is_header());
    assert!(matches!(
        model.palette[model.sidebar_selected],
        PaletteEntry::Hook(_)
    ));

    let model = update(model, Message::PaletteUp);
    assert_eq!(model.sidebar_selected, 2);
}

#[test]
fn test_palette_activate_on_header_is_noop() {
    let mut model = create_test_model();
    let header_idx = model
        .palette
        .iter()
        .position(PaletteEntry::is_header)
        .unwrap();
    model.sidebar_selected = header_idx;
    let model = update(model, Message::PaletteActivate);
    assert_eq!(model.buffer, "");
}

#[test]
fn test_custom_templates_extend_palette() {
    let file = TemplateFile {
        hooks: vec![Snippet {
            label: "Q".to_string(),
            text: "Quick one:".to_string(),
        }],
        ctas: Vec::new(),
    };
    let base_hooks = create_test_model()
        .palette
        .iter()
        .filter(|e| matches!(e, PaletteEntry::Hook(_)))
        .count();
    let model = create_test_model().with_custom_templates(file);
    let hooks = model
        .palette
        .iter()
        .filter(|e| matches!(e, PaletteEntry::Hook(_)))
        .count();
    assert_eq!(hooks, base_hooks + 1);
}

// ===== Language =====

#[test]
fn test_language_switch_rebuilds_palette() {
    let model = create_test_model();
    let en_hook = model
        .palette
        .iter()
        .find_map(|e| match e {
            PaletteEntry::Hook(s) => Some(s.text.clone()),
            _ => None,
        })
        .unwrap();
    let model = update(model, Message::SetLanguage(Lang::Fr));
    let fr_hook = model
        .palette
        .iter()
        .find_map(|e| match e {
            PaletteEntry::Hook(s) => Some(s.text.clone()),
            _ => None,
        })
        .unwrap();
    assert_ne!(en_hook, fr_hook);
}

#[test]
fn test_language_switch_keeps_buffer() {
    let model = update(model_with_text("draft"), Message::SetLanguage(Lang::Fr));
    assert_eq!(model.buffer, "draft");
    assert_eq!(model.lang, Lang::Fr);
}

// ===== Normalize, preview, panes =====

#[test]
fn test_normalize_message_cleans_buffer() {
    let model = update(model_with_text("  a  \n\n\n\nb"), Message::Normalize);
    assert_eq!(model.buffer, "a\n\nb");
}

#[test]
fn test_normalize_clamps_caret_into_shorter_buffer() {
    let mut model = model_with_text("a\n\n\n\n\n\n\nb");
    model.caret = model.buffer_len();
    let model = update(model, Message::Normalize);
    assert!(model.caret <= model.buffer_len());
}

#[test]
fn test_toggle_preview_expanded() {
    let model = update(create_test_model(), Message::TogglePreviewExpanded);
    assert!(model.preview_expanded);
    let model = update(model, Message::TogglePreviewExpanded);
    assert!(!model.preview_expanded);
}

#[test]
fn test_hiding_sidebar_drops_its_focus() {
    let mut model = create_test_model();
    model.sidebar_focused = true;
    let model = update(model, Message::ToggleSidebar);
    assert!(!model.sidebar_visible);
    assert!(!model.sidebar_focused);
}

#[test]
fn test_focus_switch_requires_visible_sidebar() {
    let mut model = create_test_model();
    model.sidebar_visible = false;
    let model = update(model, Message::SwitchFocus);
    assert!(!model.sidebar_focused);
}

// ===== Flags and lifecycle =====

#[test]
fn test_copied_flag_expires() {
    let mut model = create_test_model();
    model.mark_copied();
    assert!(model.copied_active());
    assert!(!model.expire_copied(Instant::now()));
    let later = Instant::now() + Duration::from_millis(2000);
    assert!(model.expire_copied(later));
    assert!(!model.copied_active());
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_resize_updates_dimensions() {
    let model = update(create_test_model(), Message::Resize(120, 40));
    assert_eq!((model.width, model.height), (120, 40));
}

#[test]
fn test_stats_track_buffer() {
    let model = model_with_text("hello world");
    let stats = model.stats();
    assert_eq!(stats.chars, 11);
    assert_eq!(stats.words, 2);
}

#[test]
fn test_over_limit_flag() {
    let model = model_with_text(&"x".repeat(3001));
    assert!(model.is_over_limit());
    let model = model_with_text(&"x".repeat(3000));
    assert!(!model.is_over_limit());
}

#[test]
fn test_caret_visibility_scrolls_editor() {
    let mut model = model_with_text(&"line\n".repeat(30));
    model.caret = 0;
    model.ensure_caret_visible(10);
    assert_eq!(model.editor_scroll, 0);

    model.caret = model.buffer_len();
    model.ensure_caret_visible(10);
    assert!(model.editor_scroll >= 21);
}
