use once_cell::sync::Lazy;
use regex::Regex;

static TRACK_URI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^spotify:track:([0-9A-Za-z]+)$").expect("track URI regex is valid")
});

static TRACK_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://open\.spotify\.com/(?:intl-[a-z]{2}(?:-[a-z]{2})?/)?track/([0-9A-Za-z]+)(?:[/?#].*)?$")
        .expect("track URL regex is valid")
});

/// Extract the track ID from a `spotify:track:` URI or an `open.spotify.com` link.
///
/// Anything else is taken to be an ID already.
pub fn normalize_track_id(input: &str) -> String {
    let input = input.trim();
    [&*TRACK_URI_RE, &*TRACK_URL_RE]
        .iter()
        .find_map(|re| re.captures(input))
        .and_then(|caps| caps.get(1))
        .map_or(input, |m| m.as_str())
        .to_string()
}
