use super::SpeechSegment;
use crate::vocabulary::{normalize_key, Vocabulary};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of the emotional movement across a dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcType {
    Building,
    Crashing,
    Recovering,
    Masking,
    Revealing,
    Confronting,
}

impl ArcType {
    pub const ALL: [ArcType; 6] = [
        ArcType::Building,
        ArcType::Crashing,
        ArcType::Recovering,
        ArcType::Masking,
        ArcType::Revealing,
        ArcType::Confronting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArcType::Building => "building",
            ArcType::Crashing => "crashing",
            ArcType::Recovering => "recovering",
            ArcType::Masking => "masking",
            ArcType::Revealing => "revealing",
            ArcType::Confronting => "confronting",
        }
    }
}

impl fmt::Display for ArcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArcType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        ArcType::ALL
            .into_iter()
            .find(|arc| arc.as_str() == key)
            .ok_or_else(|| {
                let known: Vec<&str> = ArcType::ALL.iter().map(|a| a.as_str()).collect();
                format!("unknown arc type '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

/// Pattern index for segment `index` of `count` over a pattern of
/// `pattern_len` notes: `round(index * (pattern_len - 1) / (count - 1))`,
/// so the first segment gets the first note and the last gets the last.
pub fn arc_note_index(index: usize, count: usize, pattern_len: usize) -> usize {
    if count <= 1 || pattern_len == 0 {
        return 0;
    }
    let span = count - 1;
    let index = index.min(span);
    (index * (pattern_len - 1) + span / 2) / span
}

pub(super) fn apply_arc(
    vocab: &Vocabulary,
    segments: &[SpeechSegment],
    arc_type: ArcType,
) -> Vec<SpeechSegment> {
    let Some(pattern) = vocab.arc_pattern(arc_type.as_str()) else {
        return segments.to_vec();
    };
    let count = segments.len();
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let note = pattern[arc_note_index(i, count, pattern.len())];
            SpeechSegment {
                emotional_arc_note: Some(note.to_string()),
                ..segment.clone()
            }
        })
        .collect()
}

pub(super) fn arc_summary(vocab: &Vocabulary, arc_type: ArcType, segment_count: usize) -> String {
    let Some(pattern) = vocab.arc_pattern(arc_type.as_str()) else {
        return format!("{} arc", arc_type);
    };
    if segment_count == 0 {
        return format!("{} arc: no lines to direct", capitalize(arc_type.as_str()));
    }

    let mut notes: Vec<&str> = Vec::new();
    for i in 0..segment_count {
        let note = pattern[arc_note_index(i, segment_count, pattern.len())];
        if notes.last() != Some(&note) {
            notes.push(note);
        }
    }

    let line_word = if segment_count == 1 { "line" } else { "lines" };
    format!(
        "{} arc over {} {}: {}",
        capitalize(arc_type.as_str()),
        segment_count,
        line_word,
        notes.join(" -> ")
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(n: usize) -> Vec<SpeechSegment> {
        (0..n)
            .map(|i| SpeechSegment::new("A", format!("line {}", i)))
            .collect()
    }

    fn notes(arc: ArcType, n: usize) -> Vec<String> {
        apply_arc(&Vocabulary::builtin(), &segments(n), arc)
            .into_iter()
            .map(|s| s.emotional_arc_note.unwrap())
            .collect()
    }

    #[test]
    fn test_note_index_mapping() {
        assert_eq!(arc_note_index(0, 1, 4), 0);
        assert_eq!(arc_note_index(0, 2, 4), 0);
        assert_eq!(arc_note_index(1, 2, 4), 3);
        let five: Vec<usize> = (0..5).map(|i| arc_note_index(i, 5, 4)).collect();
        assert_eq!(five, vec![0, 1, 2, 2, 3]);
        let seven: Vec<usize> = (0..7).map(|i| arc_note_index(i, 7, 4)).collect();
        assert_eq!(seven, vec![0, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_building_arc_endpoints() {
        for n in 2..10 {
            let notes = notes(ArcType::Building, n);
            assert_eq!(notes.first().unwrap(), "quiet");
            assert_eq!(notes.last().unwrap(), "peak");
        }
    }

    #[test]
    fn test_four_segments_walk_the_pattern() {
        assert_eq!(
            notes(ArcType::Masking, 4),
            vec!["composed", "strained", "slipping", "recomposed"]
        );
    }

    #[test]
    fn test_single_segment_gets_first_note() {
        assert_eq!(notes(ArcType::Crashing, 1), vec!["peak"]);
    }

    #[test]
    fn test_arc_does_not_touch_text() {
        let input = segments(3);
        let output = apply_arc(&Vocabulary::builtin(), &input, ArcType::Revealing);
        for (before, after) in input.iter().zip(&output) {
            assert_eq!(before.text, after.text);
            assert_eq!(before.speaker, after.speaker);
        }
        assert!(input.iter().all(|s| s.emotional_arc_note.is_none()));
    }

    #[test]
    fn test_arc_summary() {
        let vocab = Vocabulary::builtin();
        assert_eq!(
            arc_summary(&vocab, ArcType::Building, 4),
            "Building arc over 4 lines: quiet -> rising -> tense -> peak"
        );
        assert_eq!(
            arc_summary(&vocab, ArcType::Recovering, 2),
            "Recovering arc over 2 lines: hollow -> resolved"
        );
        assert!(arc_summary(&vocab, ArcType::Masking, 0).contains("no lines"));
    }

    #[test]
    fn test_parse_arc_type() {
        assert_eq!("Confronting".parse::<ArcType>(), Ok(ArcType::Confronting));
        assert!("spiralling".parse::<ArcType>().is_err());
    }
}
