//! Internationalization (i18n): supported UI languages and the user's
//! language preference.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type backed by the registry
//! - `preference`: Resolution of the active language from storage, locale and default
//!
//! # Example
//!
//! ```rust
//! use youtube_tools::i18n::{resolve_initial_language, set_stored_language, Language};
//! use youtube_tools::locale::FixedLocale;
//! use youtube_tools::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let locale = FixedLocale::new("de-DE");
//!
//! // Nothing stored yet: the browser locale decides
//! assert_eq!(resolve_initial_language(Some(&store), Some(&locale)), Language::GERMAN);
//!
//! set_stored_language(Some(&store), "fr");
//! assert_eq!(resolve_initial_language(Some(&store), Some(&locale)), Language::FRENCH);
//! ```

mod language;
mod preference;
mod registry;

pub use language::Language;
pub use preference::{
    get_browser_language, get_stored_language, resolve_browser, resolve_initial,
    resolve_initial_language, resolve_stored, set_stored_language, LanguageSource, Resolution,
};
pub use registry::{LanguageConfig, LanguageRegistry};
