//! Pause markers and their SSML rendering.
//!
//! Timed pauses are written as `[PAUSE 2.6s]`. Named pauses use the
//! notation from the vocabulary (`[beat]`, `[long pause]`, ...).

use crate::vocabulary::Vocabulary;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PAUSE_MARKER: Regex =
        Regex::new(r"(?i)\[PAUSE\s+(\d+(?:\.\d+)?)\s*s\]").expect("pause pattern is valid");
    static ref BRACKET_TAG: Regex = Regex::new(r"\[[^\]\n]*\]").expect("tag pattern is valid");
    static ref SSML_TAG: Regex = Regex::new(r"<[^>]+>").expect("ssml pattern is valid");
    static ref SPACE_RUNS: Regex = Regex::new(r"[ \t]{2,}").expect("space pattern is valid");
}

/// Timed pause marker with one decimal place; whole seconds drop the decimal.
pub fn insert_pause_marker(seconds: f64) -> String {
    let tenths = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 10.0).round() as u64
    } else {
        0
    };
    if tenths % 10 == 0 {
        format!("[PAUSE {}s]", tenths / 10)
    } else {
        format!("[PAUSE {}.{}s]", tenths / 10, tenths % 10)
    }
}

/// Notation for a named pause (`breath`, `short`, `beat`, `medium`, `long`).
pub fn named_pause(vocab: &Vocabulary, name: &str) -> Option<&'static str> {
    vocab.pause(name).map(|p| p.notation)
}

/// SSML `time` attribute: whole seconds as `Ns`, anything else in ms.
fn break_time(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    if millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        format!("{}ms", millis)
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render text with pause markers as an SSML document.
pub fn to_ssml(vocab: &Vocabulary, text: &str) -> String {
    let escaped = escape_xml(text);
    let mut body = PAUSE_MARKER
        .replace_all(&escaped, |caps: &regex::Captures| {
            let seconds: f64 = caps[1].parse().unwrap_or(0.0);
            format!("<break time=\"{}\"/>", break_time(seconds))
        })
        .into_owned();

    for (_, pause) in vocab.pauses() {
        if body.contains(pause.notation) {
            let tag = format!("<break time=\"{}\"/>", break_time(pause.seconds));
            body = body.replace(pause.notation, &tag);
        }
    }

    format!("<speak>{}</speak>", body)
}

/// Total seconds of recognised pause markers in `text`.
pub fn estimate_pacing_duration(vocab: &Vocabulary, text: &str) -> f64 {
    let timed: f64 = PAUSE_MARKER
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<f64>().ok())
        .sum();

    let named: f64 = vocab
        .pauses()
        .map(|(_, pause)| text.matches(pause.notation).count() as f64 * pause.seconds)
        .sum();

    timed + named
}

/// Remove bracket tags, pause markers and SSML, for providers that accept
/// neither tags nor SSML.
pub fn strip_voice_markup(text: &str) -> String {
    let without_tags = BRACKET_TAG.replace_all(text, " ");
    let without_ssml = SSML_TAG.replace_all(&without_tags, " ");
    without_ssml
        .lines()
        .map(|line| SPACE_RUNS.replace_all(line.trim(), " ").into_owned())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
