//! Tool pages and their language-qualified paths.
//!
//! Every tool page except home lives at `{base}/{language}`; home is always
//! `/` and never carries a language segment.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Home,
    Thumbnail,
    ProfilePicture,
    Banner,
}

impl Tool {
    /// Tools in navigation order.
    pub const ALL: [Tool; 4] = [
        Tool::Home,
        Tool::Thumbnail,
        Tool::ProfilePicture,
        Tool::Banner,
    ];

    pub fn base_path(&self) -> &'static str {
        match self {
            Tool::Home => "/",
            Tool::Thumbnail => "/youtube-thumbnail-downloader",
            Tool::ProfilePicture => "/youtube-profile-picture-downloader",
            Tool::Banner => "/youtube-banner-downloader",
        }
    }

    /// Link to this tool's page in `language`.
    pub fn href(&self, language: Language) -> String {
        match self {
            Tool::Home => "/".to_string(),
            tool => format!("{}/{}", tool.base_path(), language.code()),
        }
    }

    /// Look a tool up by its base path (without language segment).
    pub fn from_base_path(path: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|tool| tool.base_path() == path)
    }
}

/// Where to go after the user switches language on `current` page.
///
/// Home stays on `/`; a tool page moves to the same tool in `new_language`.
pub fn language_switch_target(current: Tool, new_language: Language) -> String {
    current.href(new_language)
}

/// Split a request path into its tool and language segment.
///
/// Returns `None` when the path is not a tool page. The language is `None`
/// when the segment is missing or not a supported code, so callers can
/// fall back to their resolved preference.
pub fn parse_tool_path(path: &str) -> Option<(Tool, Option<Language>)> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Some((Tool::Home, None));
    }

    if let Some(tool) = Tool::from_base_path(trimmed) {
        return Some((tool, None));
    }

    let (base, segment) = trimmed.rsplit_once('/')?;
    let tool = Tool::from_base_path(base).filter(|tool| *tool != Tool::Home)?;
    Some((tool, Language::from_code(segment).ok()))
}

/// One entry of the tool navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub tool: Tool,
    pub href: String,
    pub is_active: bool,
}

/// The navigation bar for `current` page rendered in `language`.
pub fn navigation(current: Tool, language: Language) -> Vec<NavItem> {
    Tool::ALL
        .into_iter()
        .map(|tool| NavItem {
            tool,
            href: tool.href(language),
            is_active: tool == current,
        })
        .collect()
}
