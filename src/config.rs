use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::locale::Lang;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_sidebar: bool,
    pub lang: Option<Lang>,
    pub templates: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_sidebar: self.no_sidebar || other.no_sidebar,
            lang: other.lang.or(self.lang),
            templates: other.templates.clone().or_else(|| self.templates.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("postless").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("postless")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("postless").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("postless")
                .join("config");
        }
    }

    PathBuf::from(".postlessrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".postlessrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# postless defaults (saved with --save)".to_string());
    if flags.no_sidebar {
        lines.push("--no-sidebar".to_string());
    }
    if let Some(lang) = flags.lang {
        lines.push(format!("--lang {}", lang.code()));
    }
    if let Some(path) = &flags.templates {
        lines.push(format!("--templates {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-sidebar" {
            flags.no_sidebar = true;
        } else if token == "--lang" {
            if let Some(next) = tokens.get(i + 1) {
                flags.lang = Lang::from_code(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--lang=") {
            flags.lang = Lang::from_code(value);
        } else if token == "--templates" {
            if let Some(next) = tokens.get(i + 1) {
                flags.templates = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--templates=") {
            flags.templates = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "postless".to_string(),
            "--no-sidebar".to_string(),
            "--lang".to_string(),
            "fr".to_string(),
            "--templates=mine.json".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.no_sidebar);
        assert_eq!(flags.lang, Some(Lang::Fr));
        assert_eq!(flags.templates, Some(PathBuf::from("mine.json")));
    }

    #[test]
    fn test_parse_unknown_lang_is_ignored() {
        let args = vec!["--lang".to_string(), "tlh".to_string()];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.lang, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            no_sidebar: true,
            lang: Some(Lang::En),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            lang: Some(Lang::Fr),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.no_sidebar);
        assert_eq!(merged.lang, Some(Lang::Fr));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".postlessrc");
        let flags = ConfigFlags {
            no_sidebar: true,
            lang: Some(Lang::Fr),
            templates: Some(PathBuf::from("mine.json")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_config_loads_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
