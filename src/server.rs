//! HTTP API: video ID lookup, language preference and navigation links.
//!
//! The browser's persisted preference travels as the `preferred-language`
//! cookie and its locale as `Accept-Language`. The preference is per client:
//! the server keeps no shared copy, so a request without the cookie has no
//! stored preference. Requests without a locale header fall back to the
//! server's configured locale.

use crate::i18n::{resolve_initial, Language, LanguageConfig, LanguageRegistry, LanguageSource};
use crate::locale::{AcceptLanguage, LocaleSource};
use crate::routes::{language_switch_target, navigation, NavItem, Tool};
use crate::storage::{MemoryStore, PREFERRED_LANGUAGE_KEY};
use crate::youtube::{extract_video_id, is_youtube_url, thumbnail_set, Thumbnail};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Lifetime of the preference cookie (one year).
const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Clone)]
pub struct AppState {
    pub fallback_locale: Arc<dyn LocaleSource>,
}

impl AppState {
    pub fn new(fallback_locale: Arc<dyn LocaleSource>) -> Self {
        Self { fallback_locale }
    }

    /// Resolve the language for one request from that request alone.
    fn resolve(&self, headers: &HeaderMap) -> (Language, LanguageSource) {
        let store = request_store(headers);

        let accept = headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(|v| AcceptLanguage::new(Some(v)));
        let locale: &dyn LocaleSource = match &accept {
            Some(accept) => accept,
            None => self.fallback_locale.as_ref(),
        };

        let resolution = resolve_initial(Some(&store), Some(locale));
        debug!(
            "Resolved language {} from {:?}",
            resolution.language, resolution.source
        );
        (resolution.language, resolution.source)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/video", get(video_info))
        .route("/api/language", get(get_language))
        .route("/api/language/:code", put(set_language))
        .route("/api/navigation", get(get_navigation))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The client's preference store for one request, seeded from its cookie.
fn request_store(headers: &HeaderMap) -> MemoryStore {
    match cookie_value(headers, PREFERRED_LANGUAGE_KEY) {
        Some(value) => MemoryStore::with_value(PREFERRED_LANGUAGE_KEY, &value),
        None => MemoryStore::new(),
    }
}

/// Value of cookie `name` from the request's `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
}

// ==================== Response bodies ====================

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub video_id: String,
    pub valid_url: bool,
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub short_name: &'static str,
    pub flag: &'static str,
}

impl From<&LanguageConfig> for LanguageInfo {
    fn from(config: &LanguageConfig) -> Self {
        Self {
            code: config.code,
            name: config.name,
            native_name: config.native_name,
            short_name: config.short_name,
            flag: config.flag,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub language: Language,
    pub source: LanguageSource,
    pub supported: Vec<LanguageInfo>,
}

#[derive(Debug, Serialize)]
pub struct LanguageChanged {
    pub language: Language,
    pub redirect: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

// ==================== Handlers ====================

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct VideoQuery {
    pub url: Option<String>,
}

pub async fn video_info(Query(query): Query<VideoQuery>) -> Response {
    let url = query.url.as_deref();

    match extract_video_id(url) {
        Some(video_id) => {
            let thumbnails = thumbnail_set(&video_id);
            Json(VideoResponse {
                valid_url: is_youtube_url(url),
                video_id,
                thumbnails,
            })
            .into_response()
        }
        None => error_response(StatusCode::BAD_REQUEST, "No YouTube video ID found in url"),
    }
}

pub async fn get_language(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (language, source) = state.resolve(&headers);

    Json(LanguageResponse {
        language,
        source,
        supported: LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(LanguageInfo::from)
            .collect(),
    })
    .into_response()
}

#[derive(Debug, Deserialize)]
pub struct SwitchQuery {
    pub tool: Option<Tool>,
}

/// Switch the caller's language. The new preference lives only in the
/// returned cookie; other clients are unaffected.
pub async fn set_language(Path(code): Path<String>, Query(query): Query<SwitchQuery>) -> Response {
    let language = match Language::from_code(&code) {
        Ok(language) => language,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    info!("Language preference changed to {}", language);

    let body = LanguageChanged {
        language,
        redirect: language_switch_target(query.tool.unwrap_or(Tool::Home), language),
    };

    let cookie = format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        PREFERRED_LANGUAGE_KEY,
        language.code(),
        COOKIE_MAX_AGE_SECS
    );
    match HeaderValue::from_str(&cookie) {
        Ok(value) => ([(header::SET_COOKIE, value)], Json(body)).into_response(),
        Err(_) => Json(body).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    pub tool: Option<Tool>,
    pub lang: Option<String>,
}

pub async fn get_navigation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NavigationQuery>,
) -> Json<Vec<NavItem>> {
    let language = query
        .lang
        .as_deref()
        .and_then(|code| Language::from_code(code).ok())
        .unwrap_or_else(|| state.resolve(&headers).0);

    Json(navigation(query.tool.unwrap_or(Tool::Home), language))
}
