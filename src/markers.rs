//! Semantic marker grammar.
//!
//! Compiled prompts carry their content inside a closed set of bracket tags,
//! `[LENS: ...]`, `[LIGHTING: ...]` and so on, which downstream consumers
//! parse. Anything else shaped like `[TAG: ...]` is outside the grammar.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    static ref TAG_PATTERN: Regex =
        Regex::new(r"\[([A-Z][A-Z_ ]*):").expect("tag pattern is valid");
    static ref SECTION_PATTERN: Regex =
        Regex::new(r"\[([A-Z][A-Z_ ]*):\s*([^\]]*)\]").expect("section pattern is valid");
    static ref LOOSE_BRACKET: Regex =
        Regex::new(r"\[[A-Z][A-Z_ ]*:\s*|[\[\]]").expect("loose bracket pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Marker {
    Lens,
    Lighting,
    Frame,
    Subject,
    Dynamics,
    Environment,
}

impl Marker {
    /// Emission order used by the structured builder.
    pub const ALL: [Marker; 6] = [
        Marker::Lens,
        Marker::Lighting,
        Marker::Frame,
        Marker::Subject,
        Marker::Dynamics,
        Marker::Environment,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Marker::Lens => "LENS",
            Marker::Lighting => "LIGHTING",
            Marker::Frame => "FRAME",
            Marker::Subject => "SUBJECT",
            Marker::Dynamics => "DYNAMICS",
            Marker::Environment => "ENVIRONMENT",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Marker> {
        Marker::ALL
            .into_iter()
            .find(|m| m.tag() == tag.trim())
    }

    /// Opening token as it appears in prompts, e.g. `[DYNAMICS:`.
    pub fn opening(&self) -> String {
        format!("[{}:", self.tag())
    }

    /// Render a complete section.
    pub fn render(&self, content: &str) -> String {
        format!("[{}: {}]", self.tag(), content)
    }

    /// What each section is expected to describe, for grammar definitions.
    pub fn purpose(&self) -> &'static str {
        match self {
            Marker::Lens => "focal length and what the lens does to the viewer",
            Marker::Lighting => "color temperature in Kelvin and key-to-fill ratio",
            Marker::Frame => "subject size and placement as frame percentages",
            Marker::Subject => "each character's face, eyes, body and breath",
            Marker::Dynamics => "distance and power positioning between characters",
            Marker::Environment => "setting, weather and atmosphere",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Result of scanning text against the grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerScan {
    /// Recognised markers in order of first appearance.
    pub found: Vec<Marker>,
    /// Bracket tags that are not part of the grammar.
    pub unknown: Vec<String>,
}

impl MarkerScan {
    pub fn contains(&self, marker: Marker) -> bool {
        self.found.contains(&marker)
    }

    /// At least one recognised marker and nothing outside the grammar.
    pub fn is_valid(&self) -> bool {
        !self.found.is_empty() && self.unknown.is_empty()
    }
}

pub fn scan(text: &str) -> MarkerScan {
    let mut scan = MarkerScan::default();
    for cap in TAG_PATTERN.captures_iter(text) {
        let tag = cap[1].trim();
        match Marker::from_tag(tag) {
            Some(marker) => {
                if !scan.found.contains(&marker) {
                    scan.found.push(marker);
                }
            }
            None => {
                if !scan.unknown.iter().any(|t| t == tag) {
                    scan.unknown.push(tag.to_string());
                }
            }
        }
    }
    scan
}

/// Split a prompt into `(marker, content)` sections, ignoring text outside
/// recognised markers.
pub fn sections(text: &str) -> Vec<(Marker, String)> {
    SECTION_PATTERN
        .captures_iter(text)
        .filter_map(|cap| {
            Marker::from_tag(&cap[1]).map(|marker| (marker, cap[2].trim().to_string()))
        })
        .collect()
}

/// Replace every `[TAG: content]` section with its bare content.
pub fn strip(text: &str) -> String {
    SECTION_PATTERN.replace_all(text, "$2").into_owned()
}

/// Remove every `[TAG: content]` section, keeping only the text around them.
pub fn strip_sections(text: &str) -> String {
    SECTION_PATTERN.replace_all(text, "").into_owned()
}

/// Remove tag openers and brackets left behind by unclosed or nested
/// sections, keeping the words.
pub fn strip_brackets(text: &str) -> String {
    LOOSE_BRACKET.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_recognises_grammar() {
        let scan = scan("[LENS: 85mm] [SUBJECT: Mara, eyes wide] [DYNAMICS: close]");
        assert_eq!(
            scan.found,
            vec![Marker::Lens, Marker::Subject, Marker::Dynamics]
        );
        assert!(scan.unknown.is_empty());
        assert!(scan.is_valid());
    }

    #[test]
    fn test_scan_flags_unknown_tags() {
        let scan = scan("[LENS: 85mm] [MOOD: sad] [CAMERA_MOVE: dolly]");
        assert_eq!(scan.unknown, vec!["MOOD".to_string(), "CAMERA_MOVE".to_string()]);
        assert!(!scan.is_valid());
    }

    #[test]
    fn test_scan_without_markers_is_invalid() {
        let scan = scan("A woman stands on a pier at dusk.");
        assert!(scan.found.is_empty());
        assert!(!scan.is_valid());
    }

    #[test]
    fn test_pause_markers_are_not_tags() {
        let scan = scan("[SUBJECT: x] [PAUSE 2s] [beat]");
        assert!(scan.is_valid());
    }

    #[test]
    fn test_sections_and_strip() {
        let text = "[LENS: 85mm lens] [FRAME: face fills 60%]";
        let sections = sections(text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], (Marker::Lens, "85mm lens".to_string()));
        assert_eq!(strip(text), "85mm lens face fills 60%");
        assert_eq!(strip_sections("[LENS: 85mm] noir style").trim(), "noir style");
    }

    #[test]
    fn test_strip_brackets_handles_unclosed_tags() {
        assert_eq!(strip_brackets("[SUBJECT: Mara on a pier"), "Mara on a pier");
        assert_eq!(strip_brackets("a [LENS: b] c]"), "a b c");
    }

    #[test]
    fn test_render_section() {
        let rendered = Marker::Environment.render("rain-slick pier");
        assert_eq!(rendered, "[ENVIRONMENT: rain-slick pier]");
        assert!(rendered.starts_with(&Marker::Environment.opening()));
    }
}
