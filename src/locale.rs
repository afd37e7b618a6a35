//! Per-language UI label bundles.
//!
//! The bundles are opaque to the rest of the app: callers look one up by
//! language code and read fields. Label text flows through the same stats
//! and transform functions as user text when it lands in the buffer;
//! nothing here is treated specially.

/// Supported interface languages.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fr,
}

impl Lang {
    /// Two-letter language code, as used in config files.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Parse a two-letter code; unknown codes return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

/// One language's worth of interface labels.
#[derive(Debug)]
pub struct UiStrings {
    pub title: &'static str,
    pub templates_title: &'static str,
    pub hooks_title: &'static str,
    pub ctas_title: &'static str,
    pub emoji_title: &'static str,
    pub editor_title: &'static str,
    pub placeholder: &'static str,
    pub stats_chars: &'static str,
    pub stats_words: &'static str,
    pub stats_read_time: &'static str,
    pub copy_hint: &'static str,
    pub copied: &'static str,
    pub preview_title: &'static str,
    pub preview_user: &'static str,
    pub preview_headline: &'static str,
    pub preview_time: &'static str,
    pub preview_placeholder: &'static str,
    pub read_more: &'static str,
    pub read_less: &'static str,
    pub label_story: &'static str,
    pub label_educational: &'static str,
    pub label_feedback: &'static str,
    pub confirm_replace: &'static str,
    pub emoji_structure: &'static str,
    pub emoji_attention: &'static str,
    pub emoji_positive: &'static str,
    pub emoji_signals: &'static str,
    pub emoji_business: &'static str,
    pub emoji_numbers: &'static str,
}

impl UiStrings {
    /// Label for an emoji group id; unknown ids fall back to the section
    /// title.
    pub fn emoji_group_label(&self, id: &str) -> &'static str {
        match id {
            "structure" => self.emoji_structure,
            "attention" => self.emoji_attention,
            "positive" => self.emoji_positive,
            "signals" => self.emoji_signals,
            "business" => self.emoji_business,
            "numbers" => self.emoji_numbers,
            _ => self.emoji_title,
        }
    }
}

static EN: UiStrings = UiStrings {
    title: "Postless",
    templates_title: "Structures",
    hooks_title: "Hooks",
    ctas_title: "Calls to action",
    emoji_title: "Emoji",
    editor_title: "Compose",
    placeholder: "Write your post here…",
    stats_chars: "chars",
    stats_words: "words",
    stats_read_time: "sec read",
    copy_hint: "Ctrl+Y copy",
    copied: "Copied!",
    preview_title: "Mobile preview",
    preview_user: "Alex Martin",
    preview_headline: "Product designer · She/Her",
    preview_time: "2h",
    preview_placeholder: "Your post will appear here",
    read_more: "…see more",
    read_less: "see less",
    label_story: "Personal story",
    label_educational: "How-to / educational",
    label_feedback: "Opinion / Q&A",
    confirm_replace: "This replaces your current text — activate again to confirm",
    emoji_structure: "Structure",
    emoji_attention: "Attention",
    emoji_positive: "Positive",
    emoji_signals: "Signals",
    emoji_business: "Business",
    emoji_numbers: "Numbers",
};

static FR: UiStrings = UiStrings {
    title: "Postless",
    templates_title: "Structures",
    hooks_title: "Accroches",
    ctas_title: "Appels à l'action",
    emoji_title: "Emoji",
    editor_title: "Rédaction",
    placeholder: "Écrivez votre post ici…",
    stats_chars: "caractères",
    stats_words: "mots",
    stats_read_time: "sec de lecture",
    copy_hint: "Ctrl+Y copier",
    copied: "Copié !",
    preview_title: "Aperçu mobile",
    preview_user: "Alex Martin",
    preview_headline: "Product designer · Elle",
    preview_time: "2 h",
    preview_placeholder: "Votre post apparaîtra ici",
    read_more: "…voir plus",
    read_less: "voir moins",
    label_story: "Histoire personnelle",
    label_educational: "Éducatif / tutoriel",
    label_feedback: "Opinion / Q&R",
    confirm_replace: "Cela va remplacer votre texte actuel — activez à nouveau pour confirmer",
    emoji_structure: "Structure",
    emoji_attention: "Attention",
    emoji_positive: "Positif",
    emoji_signals: "Signaux",
    emoji_business: "Business",
    emoji_numbers: "Chiffres",
};

/// Look up the label bundle for a language.
pub const fn ui(lang: Lang) -> &'static UiStrings {
    match lang {
        Lang::En => &EN,
        Lang::Fr => &FR,
    }
}
