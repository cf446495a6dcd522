//! File-name based media classification.
//!
//! Classification is a pure suffix lookup against fixed extension sets. Nothing
//! inspects file contents: a file is whatever its name says it is. `ogg` appears in
//! both the video and audio sets; video is checked first, so `.ogg` files play on
//! the video surface (which also renders audio-only streams).

use super::media::MediaKind;

const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "webm", "ogg", "ogv", "mkv", "avi", "mov", "wmv", "flv", "m4v",
];

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "aac", "m4a", "wma"];

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp"];

/// Maps a file name to its media kind by case-insensitive extension match.
///
/// Only the text after the last `.` counts; a name without a dot is `Unknown`.
///
/// # Examples
///
/// ```
/// use mediadeck::domain::{classify, MediaKind};
///
/// assert_eq!(classify("clip.MP4"), MediaKind::Video);
/// assert_eq!(classify("song.flac"), MediaKind::Audio);
/// assert_eq!(classify("photo.SVG"), MediaKind::Image);
/// assert_eq!(classify("doc.pdf"), MediaKind::Unknown);
/// ```
#[must_use]
pub fn classify(file_name: &str) -> MediaKind {
    let Some((_, extension)) = file_name.rsplit_once('.') else {
        return MediaKind::Unknown;
    };

    let matches = |set: &[&str]| set.iter().any(|ext| ext.eq_ignore_ascii_case(extension));

    if matches(VIDEO_EXTENSIONS) {
        MediaKind::Video
    } else if matches(AUDIO_EXTENSIONS) {
        MediaKind::Audio
    } else if matches(IMAGE_EXTENSIONS) {
        MediaKind::Image
    } else {
        MediaKind::Unknown
    }
}

/// Admission filter for input batches: true iff the name classifies as a known kind.
#[must_use]
pub fn is_acceptable(file_name: &str) -> bool {
    classify(file_name) != MediaKind::Unknown
}

/// Playlist row glyph for a media kind.
#[must_use]
pub const fn icon_for(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "🎬",
        MediaKind::Audio => "🎵",
        MediaKind::Image => "🖼️",
        MediaKind::Unknown => "📄",
    }
}
