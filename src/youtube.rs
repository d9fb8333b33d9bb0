//! YouTube URL recognition, video ID extraction and thumbnail URLs.
//!
//! Validation and extraction use two independent patterns. Validation is
//! strict and anchored at the start of the input; extraction searches
//! anywhere and tolerates extra path segments or query parameters. A string
//! can therefore fail validation yet still yield an ID, and the two are
//! tested separately.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

static VALIDATION_REGEX: OnceLock<Regex> = OnceLock::new();
static EXTRACTION_REGEX: OnceLock<Regex> = OnceLock::new();

/// Base URL serving the public thumbnail images of a video.
pub const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";

/// Length of every YouTube video ID.
pub const VIDEO_ID_LEN: usize = 11;

/// Check whether `url` starts with a recognized YouTube video URL.
///
/// Accepts `youtube.com/watch?v=`, `youtube.com/embed/`, `youtube.com/v/` and
/// `youtu.be/` forms, with optional scheme and `www.`, followed by an
/// 11-character ID. Anything after the ID is ignored. Absent or empty input
/// is `false`.
pub fn is_youtube_url<'a>(url: impl Into<Option<&'a str>>) -> bool {
    let Some(url) = url.into() else {
        return false;
    };
    if url.is_empty() {
        return false;
    }

    let regex = VALIDATION_REGEX.get_or_init(|| {
        Regex::new(
            r"^(https?://)?(www\.)?(youtube\.com/(watch\?v=|embed/|v/)|youtu\.be/)([a-zA-Z0-9_-]{11})",
        )
        .unwrap()
    });

    regex.is_match(url.trim())
}

/// Extract the 11-character video ID from anything that looks like a
/// YouTube link.
///
/// The ID is the run of 11 characters after `youtu.be/`, `/v/`, `/e/`,
/// `/embed/`, a `v=` query parameter, or the last of several path segments.
/// The run may not contain quotes, `&`, `?`, `/` or whitespace. Returns
/// `None` for absent input or when nothing matches.
///
/// Free-form runs between markers never cross a line terminator (`\n`,
/// `\r`, U+2028, U+2029).
pub fn extract_video_id<'a>(url: impl Into<Option<&'a str>>) -> Option<String> {
    let url = url.into()?;

    let regex = EXTRACTION_REGEX.get_or_init(|| {
        Regex::new(
            r#"(?:youtube\.com/(?:[^/]+/[^\n\r\x{2028}\x{2029}]+/|(?:v|e(?:mbed)?)/|[^\n\r\x{2028}\x{2029}]*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
        )
        .unwrap()
    });

    let id = regex
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    if id.is_none() {
        debug!("No video ID found in {:?}", url);
    }
    id
}

// ==================== Thumbnails ====================

/// The thumbnail renditions YouTube publishes for every video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailQuality {
    MaxRes,
    Standard,
    High,
    Medium,
    Default,
}

impl ThumbnailQuality {
    /// All qualities, best first.
    pub const ALL: [ThumbnailQuality; 5] = [
        ThumbnailQuality::MaxRes,
        ThumbnailQuality::Standard,
        ThumbnailQuality::High,
        ThumbnailQuality::Medium,
        ThumbnailQuality::Default,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ThumbnailQuality::MaxRes => "maxresdefault.jpg",
            ThumbnailQuality::Standard => "sddefault.jpg",
            ThumbnailQuality::High => "hqdefault.jpg",
            ThumbnailQuality::Medium => "mqdefault.jpg",
            ThumbnailQuality::Default => "default.jpg",
        }
    }

    /// Nominal (width, height) in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            ThumbnailQuality::MaxRes => (1280, 720),
            ThumbnailQuality::Standard => (640, 480),
            ThumbnailQuality::High => (480, 360),
            ThumbnailQuality::Medium => (320, 180),
            ThumbnailQuality::Default => (120, 90),
        }
    }
}

/// One downloadable thumbnail rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub quality: ThumbnailQuality,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Public image URL of one thumbnail rendition. The ID is not checked.
pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!("{}/{}/{}", THUMBNAIL_HOST, video_id, quality.file_name())
}

/// Every thumbnail rendition of a video, best quality first.
pub fn thumbnail_set(video_id: &str) -> Vec<Thumbnail> {
    ThumbnailQuality::ALL
        .iter()
        .map(|&quality| {
            let (width, height) = quality.dimensions();
            Thumbnail {
                quality,
                url: thumbnail_url(video_id, quality),
                width,
                height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== is_youtube_url Tests ====================

    #[test]
    fn test_is_youtube_url_watch() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_is_youtube_url_short_link() {
        assert!(is_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_is_youtube_url_embed_and_v() {
        assert!(is_youtube_url("https://youtube.com/embed/abcdefghijk"));
        assert!(is_youtube_url("http://www.youtube.com/v/abcdefghijk"));
    }

    #[test]
    fn test_is_youtube_url_scheme_optional() {
        assert!(is_youtube_url("youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_is_youtube_url_trims_input() {
        assert!(is_youtube_url("  https://youtu.be/dQw4w9WgXcQ \n"));
    }

    #[test]
    fn test_is_youtube_url_prefix_match() {
        assert!(is_youtube_url("https://youtu.be/dQw4w9WgXcQ?t=42"));
        assert!(is_youtube_url("https://youtu.be/dQw4w9WgXcQtrailing"));
    }

    #[test]
    fn test_is_youtube_url_rejects() {
        assert!(!is_youtube_url("not a url"));
        assert!(!is_youtube_url(""));
        assert!(!is_youtube_url("https://vimeo.com/123456789"));
        assert!(!is_youtube_url("https://youtu.be/short"));
        assert!(!is_youtube_url("https://www.youtube.com/shorts/dQw4w9WgXcQ"));
        assert!(!is_youtube_url("ftp://youtube.com/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_is_youtube_url_absent() {
        assert!(!is_youtube_url(None::<&str>));
    }

    // ==================== extract_video_id Tests ====================

    #[test]
    fn test_extract_watch() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_extract_short_link() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_extract_embed_stops_at_query() {
        assert_eq!(
            extract_video_id("https://youtube.com/embed/abcdefghijk?autoplay=1").as_deref(),
            Some("abcdefghijk")
        );
    }

    #[test]
    fn test_extract_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30s").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ")
                .as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_extract_short_e_path() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/e/abcdefghijk").as_deref(),
            Some("abcdefghijk")
        );
    }

    #[test]
    fn test_extract_none() {
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id(None::<&str>), None);
        // Ten characters before the stop character
        assert_eq!(extract_video_id("https://youtu.be/abcdefghij?x=1"), None);
    }

    #[test]
    fn test_extract_does_not_span_line_terminators() {
        for sep in ["\n", "\r", "\u{2028}", "\u{2029}"] {
            let url = format!("https://youtube.com/x{}?v=abcdefghijk", sep);
            assert_eq!(extract_video_id(url.as_str()), None, "separator {:?}", sep);

            let nested = format!("https://youtube.com/user/a{}b/abcdefghijk", sep);
            assert_eq!(extract_video_id(nested.as_str()), None, "separator {:?}", sep);
        }
    }

    #[test]
    fn test_extract_id_before_following_line() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=abcdefghijk\r\nnext line").as_deref(),
            Some("abcdefghijk")
        );
    }

    // ==================== Divergence Tests ====================

    #[test]
    fn test_extract_accepts_nested_path_validation_does_not() {
        let url = "https://youtube.com/user/someone/abcdefghijk";
        assert!(!is_youtube_url(url));
        assert_eq!(extract_video_id(url).as_deref(), Some("abcdefghijk"));
    }

    #[test]
    fn test_extract_accepts_later_v_param_validation_does_not() {
        let url = "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ";
        assert!(!is_youtube_url(url));
        assert!(extract_video_id(url).is_some());
    }

    #[test]
    fn test_extract_is_unanchored_validation_is_anchored() {
        let text = "watch this: https://youtu.be/dQw4w9WgXcQ";
        assert!(!is_youtube_url(text));
        assert_eq!(extract_video_id(text).as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_allows_characters_validation_rejects() {
        let url = "https://youtu.be/abc$efghijk";
        assert!(!is_youtube_url(url));
        assert_eq!(extract_video_id(url).as_deref(), Some("abc$efghijk"));
    }

    // ==================== Thumbnail Tests ====================

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url("dQw4w9WgXcQ", ThumbnailQuality::MaxRes),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
        );
        assert_eq!(
            thumbnail_url("dQw4w9WgXcQ", ThumbnailQuality::Default),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/default.jpg"
        );
    }

    #[test]
    fn test_thumbnail_set_best_first() {
        let set = thumbnail_set("abcdefghijk");
        assert_eq!(set.len(), 5);
        assert_eq!(set[0].quality, ThumbnailQuality::MaxRes);
        assert_eq!((set[0].width, set[0].height), (1280, 720));
        assert!(set.windows(2).all(|w| w[0].width > w[1].width));
        assert!(set.iter().all(|t| t.url.contains("/abcdefghijk/")));
    }

    #[test]
    fn test_thumbnail_quality_serializes_snake_case() {
        let json = serde_json::to_string(&ThumbnailQuality::MaxRes).unwrap();
        assert_eq!(json, "\"max_res\"");
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_never_panics(input in ".*") {
            let _ = is_youtube_url(input.as_str());
            let _ = extract_video_id(input.as_str());
        }

        #[test]
        fn prop_extracted_id_has_eleven_chars(input in ".*") {
            if let Some(id) = extract_video_id(input.as_str()) {
                prop_assert_eq!(id.chars().count(), VIDEO_ID_LEN);
            }
        }

        #[test]
        fn prop_short_links_agree(id in "[a-zA-Z0-9_-]{11}") {
            let url = format!("https://youtu.be/{}", id);
            prop_assert!(is_youtube_url(url.as_str()));
            prop_assert_eq!(extract_video_id(url.as_str()), Some(id));
        }

        #[test]
        fn prop_watch_links_agree(id in "[a-zA-Z0-9_-]{11}") {
            let url = format!("https://www.youtube.com/watch?v={}", id);
            prop_assert!(is_youtube_url(url.as_str()));
            prop_assert_eq!(extract_video_id(url.as_str()), Some(id));
        }
    }
}
