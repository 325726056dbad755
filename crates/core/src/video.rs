//! Embed-id extraction for the study-mode video pane.

use std::sync::OnceLock;

use regex::Regex;

/// Length of a valid YouTube video id.
const EMBED_ID_LENGTH: usize = 11;

fn embed_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Matches the id segment in the common share-link forms:
        // youtu.be/, v/, u/<char>/, embed/, watch?v=, &v=
        Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
            .expect("embed id pattern must compile")
    })
}

/// Extract the 11-character video id from a pasted YouTube URL.
///
/// Returns `None` for non-matching URLs or ids of the wrong length, in
/// which case no video is embedded.
pub fn extract_embed_id(url: &str) -> Option<&str> {
    let captures = embed_id_pattern().captures(url)?;
    let id = captures.get(2)?.as_str();
    (id.len() == EMBED_ID_LENGTH).then_some(id)
}

/// Build the embeddable player URL for a video id.
pub fn embed_url(embed_id: &str) -> String {
    format!("https://www.youtube.com/embed/{embed_id}")
}
