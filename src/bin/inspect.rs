//! Inspect binary - checks YouTube URLs and shows the resolved UI language
//!
//! Usage:
//!   cargo run --bin inspect -- <url> [<url> ...]
//!   cargo run --bin inspect -- --set-language fr
//!
//! Optional environment variables:
//! - PREFERENCES_FILE (defaults to data/preferences.json)
//! - LOCALE_OVERRIDE (defaults to the process locale)

use anyhow::{bail, Result};
use tracing::info;
use youtube_tools::config::Config;
use youtube_tools::i18n::{resolve_initial, set_stored_language, Language};
use youtube_tools::locale::{EnvLocale, FixedLocale, LocaleSource};
use youtube_tools::routes::{navigation, Tool};
use youtube_tools::storage::FileStore;
use youtube_tools::youtube::{extract_video_id, is_youtube_url, thumbnail_set};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("inspect=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let store = FileStore::new(config.preferences_file.clone());
    let locale: Box<dyn LocaleSource> = match config.locale_override {
        Some(locale) => Box::new(FixedLocale::new(locale)),
        None => Box::new(EnvLocale),
    };

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--set-language") {
        let Some(code) = args.get(1) else {
            bail!("--set-language requires a language code");
        };
        let language = Language::from_code(code)?;
        set_stored_language(Some(&store), language.code());
        info!("Stored preferred language {}", language);
        return Ok(());
    }

    let resolution = resolve_initial(Some(&store), Some(locale.as_ref()));
    println!(
        "Language: {} {} ({}, from {:?})",
        resolution.language.flag(),
        resolution.language.native_name(),
        resolution.language.code(),
        resolution.source
    );
    for item in navigation(Tool::Home, resolution.language) {
        println!("  {:?}: {}", item.tool, item.href);
    }

    for url in &args {
        println!();
        println!("{}", url);
        println!("  Recognized URL: {}", is_youtube_url(url.as_str()));
        match extract_video_id(url.as_str()) {
            Some(video_id) => {
                println!("  Video ID: {}", video_id);
                for thumbnail in thumbnail_set(&video_id) {
                    println!(
                        "  {:>4}x{:<4} {}",
                        thumbnail.width, thumbnail.height, thumbnail.url
                    );
                }
            }
            None => println!("  No video ID found"),
        }
    }

    Ok(())
}
