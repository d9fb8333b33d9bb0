//! Environment locale capability.
//!
//! A [`LocaleSource`] reports the user's locale string (e.g. `en-US`) the
//! way a browser's `navigator.language` would. The process environment and
//! an HTTP `Accept-Language` header are the two real sources.

use thiserror::Error;

/// Environment variables consulted by [`EnvLocale`], highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("no locale reported by the environment")]
    Unavailable,

    #[error("malformed locale: {0:?}")]
    Malformed(String),
}

pub trait LocaleSource: Send + Sync {
    /// The reported locale as a BCP 47-style tag such as `de-DE`.
    fn locale(&self) -> Result<String, LocaleError>;
}

/// A locale fixed at construction.
#[derive(Debug, Clone)]
pub struct FixedLocale(pub String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }
}

impl LocaleSource for FixedLocale {
    fn locale(&self) -> Result<String, LocaleError> {
        Ok(self.0.clone())
    }
}

/// Reads the POSIX locale variables of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLocale;

impl LocaleSource for EnvLocale {
    fn locale(&self) -> Result<String, LocaleError> {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .map(|value| normalize_posix_locale(&value))
            .ok_or(LocaleError::Unavailable)
    }
}

/// Convert a POSIX locale (`pt_BR.UTF-8@euro`) to tag form (`pt-BR`).
pub fn normalize_posix_locale(value: &str) -> String {
    let value = value.trim();
    let value = value.split(['.', '@']).next().unwrap_or(value);
    value.replace('_', "-")
}

/// The most preferred language range of an HTTP `Accept-Language` header.
///
/// Ranges are ordered by their `q` weight (default 1.0); ties keep header
/// order. Ranges with `q=0` and the `*` wildcard are never chosen.
#[derive(Debug, Clone)]
pub struct AcceptLanguage {
    header: Option<String>,
}

impl AcceptLanguage {
    pub fn new(header: Option<&str>) -> Self {
        Self {
            header: header.map(str::to_string),
        }
    }
}

/// Split an `Accept-Language` value into `(tag, weight)` pairs, highest
/// weight first. Empty ranges and ranges weighted zero are dropped.
pub fn parse_accept_language(header: &str) -> Vec<(String, f32)> {
    let mut ranges = Vec::new();

    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default().trim();
        if tag.is_empty() {
            continue;
        }

        let quality = parts
            .filter_map(|param| param.trim().strip_prefix("q="))
            .next()
            .map(|q| q.trim().parse::<f32>().unwrap_or(1.0).clamp(0.0, 1.0))
            .unwrap_or(1.0);

        if quality > 0.0 {
            ranges.push((tag.to_string(), quality));
        }
    }

    // Stable sort keeps header order among equal weights
    ranges.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranges
}

impl LocaleSource for AcceptLanguage {
    fn locale(&self) -> Result<String, LocaleError> {
        let header = self.header.as_deref().ok_or(LocaleError::Unavailable)?;

        let ranges = parse_accept_language(header);
        if ranges.is_empty() {
            return Err(LocaleError::Unavailable);
        }

        ranges
            .into_iter()
            .map(|(tag, _)| tag)
            .find(|tag| tag != "*")
            .ok_or_else(|| LocaleError::Malformed(header.to_string()))
    }
}
