//! Language registry: Single source of truth for all supported UI languages.
//!
//! Both the stored-preference resolver and the browser-language resolver
//! consult this registry, so the supported set is defined exactly once.

use std::sync::OnceLock;

/// Configuration for a supported UI language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Français")
    pub native_name: &'static str,

    /// Short label shown in the language selector (e.g., "EN")
    pub short_name: &'static str,

    /// Flag emoji shown next to the short label
    pub flag: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is offered to users
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Matching is exact: `"EN"` and `"en-US"` are not found.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in selector order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical (default) language configuration.
    ///
    /// # Panics
    /// Panics if zero or several languages are marked canonical. That is a
    /// static table error, caught by the tests below.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// The fixed set of UI languages: English (default), Spanish, French,
/// German and Portuguese.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            short_name: "EN",
            flag: "🇺🇸",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            short_name: "ES",
            flag: "🇪🇸",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            short_name: "FR",
            flag: "🇫🇷",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            short_name: "DE",
            flag: "🇩🇪",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            short_name: "PT",
            flag: "🇧🇷",
            is_canonical: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");

        assert_eq!(config.name, "English");
        assert_eq!(config.short_name, "EN");
        assert!(config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_german() {
        let config = LanguageRegistry::get()
            .get_by_code("de")
            .expect("German should be registered");

        assert_eq!(config.native_name, "Deutsch");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("EN").is_none());
        assert!(registry.get_by_code("en-US").is_none());
        assert!(registry.get_by_code("").is_none());
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("xx").is_none());
    }

    #[test]
    fn test_list_enabled_in_selector_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["en", "es", "fr", "de", "pt"]);
    }

    #[test]
    fn test_exactly_one_canonical() {
        let registry = LanguageRegistry::get();
        let count = registry
            .list_enabled()
            .iter()
            .filter(|lang| lang.is_canonical)
            .count();

        assert_eq!(count, 1);
        assert_eq!(registry.canonical().code, "en");
    }
}
