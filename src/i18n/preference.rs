//! Language preference resolution.
//!
//! Three sources are reconciled: an explicitly persisted choice, the locale
//! reported by the environment, and [`Language::canonical`]. Every public
//! function here is total: storage or locale failures are logged and
//! degrade to the default (reads) or to a no-op (writes).
//!
//! `None` for a capability models a context that has no such facility at
//! all, like rendering outside a browser.

use crate::i18n::Language;
use crate::locale::LocaleSource;
use crate::storage::{PreferenceStore, PREFERRED_LANGUAGE_KEY};
use serde::Serialize;
use tracing::{debug, warn};

/// Where a resolved language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSource {
    Stored,
    Browser,
    Default,
}

/// A resolved language together with the source that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub language: Language,
    pub source: LanguageSource,
}

impl Resolution {
    fn new(language: Language, source: LanguageSource) -> Self {
        Self { language, source }
    }

    fn fallback() -> Self {
        Self::new(Language::canonical(), LanguageSource::Default)
    }
}

/// Resolve the stored preference, recording whether the default was used.
pub fn resolve_stored(store: Option<&dyn PreferenceStore>) -> Resolution {
    let Some(store) = store else {
        return Resolution::fallback();
    };

    match store.get(PREFERRED_LANGUAGE_KEY) {
        Ok(Some(value)) => match Language::from_code(&value) {
            Ok(language) => Resolution::new(language, LanguageSource::Stored),
            Err(e) => {
                debug!("Ignoring stored language {:?}: {}", value, e);
                Resolution::fallback()
            }
        },
        Ok(None) => Resolution::fallback(),
        Err(e) => {
            warn!("Error reading language preference: {}", e);
            Resolution::fallback()
        }
    }
}

/// Resolve the environment locale's primary subtag, recording whether the
/// default was used.
pub fn resolve_browser(locale: Option<&dyn LocaleSource>) -> Resolution {
    let Some(locale) = locale else {
        return Resolution::fallback();
    };

    let tag = match locale.locale() {
        Ok(tag) => tag,
        Err(e) => {
            warn!("Error detecting browser language: {}", e);
            return Resolution::fallback();
        }
    };

    let primary = tag.split('-').next().unwrap_or_default();
    match Language::from_code(primary) {
        Ok(language) => Resolution::new(language, LanguageSource::Browser),
        Err(_) => {
            debug!("Browser locale {:?} is not a supported language", tag);
            Resolution::fallback()
        }
    }
}

/// The persisted language if it is present and supported, else the default.
pub fn get_stored_language(store: Option<&dyn PreferenceStore>) -> Language {
    resolve_stored(store).language
}

/// Persist `language` as the user's choice.
///
/// The code is written as given. Readers filter unsupported values, so this
/// function does not validate. Storage failures are swallowed.
pub fn set_stored_language(store: Option<&dyn PreferenceStore>, language: &str) {
    let Some(store) = store else {
        return;
    };

    if let Err(e) = store.set(PREFERRED_LANGUAGE_KEY, language) {
        warn!("Error storing language preference: {}", e);
    }
}

/// The environment locale's primary subtag if supported, else the default.
pub fn get_browser_language(locale: Option<&dyn LocaleSource>) -> Language {
    resolve_browser(locale).language
}

/// Pick the language to show on first load.
///
/// The stored language wins unless it is the canonical one, in which case the
/// browser language is consulted. An explicit choice of the default is
/// indistinguishable from no choice, so such a user sees their browser
/// language on the next load.
pub fn resolve_initial(
    store: Option<&dyn PreferenceStore>,
    locale: Option<&dyn LocaleSource>,
) -> Resolution {
    let stored = resolve_stored(store);
    if !stored.language.is_canonical() {
        return stored;
    }
    resolve_browser(locale)
}

/// [`resolve_initial`] without the source annotation.
pub fn resolve_initial_language(
    store: Option<&dyn PreferenceStore>,
    locale: Option<&dyn LocaleSource>,
) -> Language {
    resolve_initial(store, locale).language
}
