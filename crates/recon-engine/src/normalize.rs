//! Output scrubbing: markup removal and video link canonicalization.

use std::sync::OnceLock;

use recon_model::TalkRecord;
use regex::Regex;

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("<.*?>").expect("valid tag pattern"))
}

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?:v=|be/)(.*?)(?:&|\?|$)").expect("valid video pattern"))
}

/// Remove markup tag runs left behind by the harvesting side.
pub fn strip_markup(text: &str) -> String {
    tag_pattern().replace_all(text, "").into_owned()
}

/// Rewrite a video link to the canonical `watch?v=` form.
///
/// Handles both `v=<id>` query parameters and `youtu.be/<id>` short links.
/// Links with no recognizable id pass through unchanged.
pub fn normalize_video_url(url: &str) -> String {
    match video_id_pattern()
        .captures(url)
        .and_then(|captures| captures.get(1))
    {
        Some(id) if !id.as_str().is_empty() => {
            format!("http://youtube.com/watch?v={}", id.as_str())
        }
        _ => url.to_string(),
    }
}

/// Apply all output scrubbing to one record.
pub fn scrub(record: &mut TalkRecord) {
    if record.title.contains('<') {
        record.title = strip_markup(&record.title);
    }
    if !record.video_url.is_empty() {
        record.video_url = normalize_video_url(&record.video_url);
    }
}
