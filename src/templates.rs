//! Built-in post templates and the custom template file format.
//!
//! Three kinds of reusable content: hooks (opening lines, inserted at the
//! caret), calls-to-action (inserted after a blank line), and full post
//! structures (which replace the buffer). Users can layer extra hooks and
//! CTAs on top via a JSON file passed with `--templates`.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::locale::Lang;

/// The three built-in post structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    Story,
    Educational,
    Feedback,
}

/// A labeled snippet: a short label for the sidebar and the text it inserts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Snippet {
    pub label: String,
    pub text: String,
}

impl Snippet {
    fn new(label: &str, text: &str) -> Self {
        Self {
            label: label.to_string(),
            text: text.to_string(),
        }
    }
}

/// Built-in hooks for a language.
pub fn hooks(lang: Lang) -> Vec<Snippet> {
    match lang {
        Lang::Fr => vec![
            Snippet::new("Contre-intuitif", "On ne vous dit pas tout sur [Sujet]..."),
            Snippet::new(
                "Erreur",
                "L'erreur que font 90% des gens quand ils débutent :",
            ),
            Snippet::new(
                "Histoire",
                "J'ai failli tout abandonner hier. Voici pourquoi :",
            ),
            Snippet::new(
                "Chiffre",
                "3 astuces simples pour doubler vos résultats en [Temps] :",
            ),
            Snippet::new(
                "Opinion",
                "Arrêtez de croire que [Croyance] est la solution.",
            ),
        ],
        Lang::En => vec![
            Snippet::new("Counter-intuitive", "Nobody tells you the whole truth about [Topic]..."),
            Snippet::new("Mistake", "The mistake 90% of people make when starting out:"),
            Snippet::new("Story", "I almost gave it all up yesterday. Here's why:"),
            Snippet::new(
                "Number",
                "3 simple tricks to double your results in [Time]:",
            ),
            Snippet::new("Opinion", "Stop believing [Belief] is the answer."),
        ],
    }
}

/// Built-in calls-to-action for a language.
pub fn ctas(lang: Lang) -> Vec<Snippet> {
    match lang {
        Lang::Fr => vec![
            Snippet::new(
                "Débat",
                "Et vous, qu'en pensez-vous ? Dites-le-moi en commentaire 👇",
            ),
            Snippet::new("Contact", "Envoyez-moi un DM pour en discuter de vive voix 📩"),
            Snippet::new(
                "Newsletter",
                "Pour plus de conseils comme celui-ci, le lien est dans ma bio 🔗",
            ),
            Snippet::new(
                "Partage",
                "♻️ Repostez si vous pensez que ça peut aider votre réseau.",
            ),
        ],
        Lang::En => vec![
            Snippet::new(
                "Debate",
                "What do you think? Tell me in the comments 👇",
            ),
            Snippet::new("Contact", "Send me a DM if you want to talk it through 📩"),
            Snippet::new(
                "Newsletter",
                "For more advice like this, the link is in my bio 🔗",
            ),
            Snippet::new(
                "Share",
                "♻️ Repost if you think this could help your network.",
            ),
        ],
    }
}

/// Compact toolbar items, universal across languages.
pub const QUICK_ITEMS: [&str; 8] = ["•", "—", "➤", "1️⃣", "✅", "💡", "🔥", "👇"];

/// A named group of emoji for the expanded picker.
#[derive(Debug, Clone, Copy)]
pub struct EmojiGroup {
    pub id: &'static str,
    pub items: &'static [&'static str],
}

pub const EMOJI_GROUPS: [EmojiGroup; 6] = [
    EmojiGroup {
        id: "structure",
        items: &["•", "·", "—", "➤", "➔", "→", "📍"],
    },
    EmojiGroup {
        id: "attention",
        items: &["⚠️", "❗", "❓", "🚨", "❌", "🛑"],
    },
    EmojiGroup {
        id: "positive",
        items: &["✅", "✔️", "👍", "👏", "🤝", "🏆", "🌟"],
    },
    EmojiGroup {
        id: "signals",
        items: &["👉", "📌", "🔹", "💡", "🧠", "🤔", "🔍", "📝", "🔥"],
    },
    EmojiGroup {
        id: "business",
        items: &["📈", "📊", "🎯", "💼", "💰", "🚀", "📅"],
    },
    EmojiGroup {
        id: "numbers",
        items: &["1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟"],
    },
];

/// Full post structure for a kind and language.
pub fn structure(lang: Lang, kind: PostKind) -> &'static str {
    match (lang, kind) {
        (Lang::Fr, PostKind::Story) => {
            "[Accroche percutante]\n\nIl y a quelque temps, je me suis retrouvé face à [Problème].\n\nJe pensais que [Fausse croyance].\nMais j'ai réalisé que [Révélation].\n\nVoici ce que j'ai appris :\n1. [Leçon 1]\n2. [Leçon 2]\n3. [Leçon 3]\n\nAujourd'hui, [Résultat actuel].\n\n[Appel à l'action]"
        }
        (Lang::Fr, PostKind::Educational) => {
            "[Titre : Comment faire X en Y étapes]\n\nBeaucoup de gens galèrent avec [Problème].\nPourtant, la solution est simple si on a la bonne méthode.\n\nVoici les X étapes à suivre :\n\n1️⃣ [Étape 1]\nExplication...\n\n2️⃣ [Étape 2]\nExplication...\n\n3️⃣ [Étape 3]\nExplication...\n\n💡 Résultat : [Bénéfice final]\n\n[Appel à l'action]"
        }
        (Lang::Fr, PostKind::Feedback) => {
            "On m'a souvent posé la question : \"[Question fréquente ?]\"\n\nMa réponse est toujours la même : [Réponse courte].\n\nPourquoi ?\n• [Argument 1]\n• [Argument 2]\n• [Argument 3]\n\nEn résumé : ne cherchez pas à [Erreur], cherchez plutôt à [Conseil].\n\nD'accord avec moi ? 👇"
        }
        (Lang::En, PostKind::Story) => {
            "[Punchy opening line]\n\nA while back, I ran straight into [Problem].\n\nI thought [False belief].\nThen I realized [Revelation].\n\nHere's what I learned:\n1. [Lesson 1]\n2. [Lesson 2]\n3. [Lesson 3]\n\nToday, [Current result].\n\n[Call to action]"
        }
        (Lang::En, PostKind::Educational) => {
            "[Title: How to do X in Y steps]\n\nA lot of people struggle with [Problem].\nYet the fix is simple with the right method.\n\nHere are the X steps:\n\n1️⃣ [Step 1]\nExplanation...\n\n2️⃣ [Step 2]\nExplanation...\n\n3️⃣ [Step 3]\nExplanation...\n\n💡 Result: [Final benefit]\n\n[Call to action]"
        }
        (Lang::En, PostKind::Feedback) => {
            "People keep asking me: \"[Frequent question?]\"\n\nMy answer never changes: [Short answer].\n\nWhy?\n• [Argument 1]\n• [Argument 2]\n• [Argument 3]\n\nBottom line: don't chase [Mistake], chase [Advice] instead.\n\nAgree? 👇"
        }
    }
}

/// Extra hooks and CTAs loaded from a user-provided JSON file.
///
/// ```json
/// { "hooks": [{"label": "...", "text": "..."}], "ctas": [] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateFile {
    #[serde(default)]
    pub hooks: Vec<Snippet>,
    #[serde(default)]
    pub ctas: Vec<Snippet>,
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid template file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a custom template file. Missing sections default to empty.
pub fn load_template_file(path: &Path) -> Result<TemplateFile, TemplateError> {
    let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TemplateError::Parse {
        path: path.display().to_string(),
        source,
    })
}
