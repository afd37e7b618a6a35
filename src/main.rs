//! Postless - a terminal composer for social-media posts.
//!
//! # Usage
//!
//! ```bash
//! postless
//! postless --lang fr
//! postless --templates mine.json --no-sidebar
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use postless::app::App;
use postless::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use postless::locale::Lang;
use postless::templates::load_template_file;

/// A terminal composer for social-media posts
#[derive(Parser, Debug)]
#[command(name = "postless", version, about, long_about = None)]
struct Cli {
    /// Interface language
    #[arg(long, value_enum)]
    lang: Option<Lang>,

    /// Hide the template sidebar
    #[arg(long)]
    no_sidebar: bool,

    /// Extra hooks and CTAs from a JSON file
    #[arg(long, value_name = "PATH")]
    templates: Option<std::path::PathBuf>,

    /// Save current command-line flags as defaults in .postlessrc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .postlessrc
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let custom_templates = match &effective.templates {
        Some(path) => Some(
            load_template_file(path)
                .with_context(|| format!("Failed to load templates from {}", path.display()))?,
        ),
        None => None,
    };

    let mut app = App::new(effective.lang.unwrap_or_default())
        .with_sidebar_visible(!effective.no_sidebar)
        .with_custom_templates(custom_templates);

    app.run().context("Application error")
}
