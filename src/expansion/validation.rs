//! Post-processing of raw LLM output.
//!
//! Problems are recorded as flags on the result, never silently fixed.
//! The only edits made are trimming to the word limit and closing a
//! section the trim cut open.

use crate::markers::{self, Marker};

/// Maximum words accepted from an LLM.
pub const DEFAULT_WORD_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOutput {
    pub text: String,
    pub markers_valid: bool,
    pub trimmed: bool,
    pub word_count: usize,
    pub dynamics_missing: bool,
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Remove surrounding whitespace and a wrapping Markdown code fence.
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = inner.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (```text, ```markdown) on the opening line.
    match inner.split_once('\n') {
        Some((info, body)) if !info.trim().contains(' ') => body.trim(),
        _ => inner.trim(),
    }
}

/// Byte offset just past the `limit`-th word, if the text has more words.
fn cut_offset(text: &str, limit: usize) -> Option<usize> {
    let mut words = 0;
    let mut in_word = false;
    let mut end = 0;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if in_word {
                in_word = false;
                end = i;
            }
        } else if !in_word {
            if words == limit {
                return Some(end);
            }
            in_word = true;
            words += 1;
        }
    }
    None
}

/// Truncate to at most `limit` words, keeping the original spacing of the
/// kept part. Returns whether anything was cut.
pub fn trim_to_words(text: &str, limit: usize) -> (String, bool) {
    match cut_offset(text, limit) {
        Some(offset) => {
            let mut kept = text[..offset].trim_end().to_string();
            // Close a section the cut left open.
            if kept.rfind('[') > kept.rfind(']') {
                kept.push(']');
            }
            (kept, true)
        }
        None => (text.to_string(), false),
    }
}

/// Validate raw LLM text for a shot with `character_count` characters.
pub fn validate(raw: &str, character_count: usize, word_limit: usize) -> ValidatedOutput {
    let cleaned = strip_code_fences(raw);
    let (text, trimmed) = trim_to_words(cleaned, word_limit);
    let scan = markers::scan(&text);

    ValidatedOutput {
        markers_valid: scan.is_valid(),
        trimmed,
        word_count: count_words(&text),
        dynamics_missing: character_count >= 2 && !scan.contains(Marker::Dynamics),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_valid_output_passes_untouched() {
        let raw = "[LENS: 35mm] [SUBJECT: A, B, C] [DYNAMICS: A stands between B and C]";
        let out = validate(raw, 3, DEFAULT_WORD_LIMIT);

        assert_eq!(out.text, raw);
        assert!(out.markers_valid);
        assert!(!out.trimmed);
        assert!(!out.dynamics_missing);
        assert_eq!(out.word_count, 13);
    }

    #[test]
    fn test_long_output_trimmed_to_limit() {
        let raw = format!("[SUBJECT: {}]", words(300));
        let out = validate(&raw, 1, DEFAULT_WORD_LIMIT);

        assert!(out.trimmed);
        assert_eq!(out.word_count, 200);
        assert!(out.text.ends_with(']'));
        assert!(out.markers_valid);
    }

    #[test]
    fn test_exact_limit_not_trimmed() {
        let raw = format!("[SUBJECT: {}] ", words(199));
        let out = validate(&raw, 1, DEFAULT_WORD_LIMIT);

        assert!(!out.trimmed);
        assert_eq!(out.word_count, 200);
    }

    #[test]
    fn test_trim_preserves_line_breaks() {
        let (text, trimmed) = trim_to_words("[LENS: a b]\n[FRAME: c d]", 3);
        assert!(trimmed);
        assert_eq!(text, "[LENS: a b]");
    }

    #[test]
    fn test_unknown_tags_flagged() {
        let out = validate("[LENS: 85mm] [MOOD: sombre]", 1, DEFAULT_WORD_LIMIT);
        assert!(!out.markers_valid);
        assert_eq!(out.text, "[LENS: 85mm] [MOOD: sombre]");
    }

    #[test]
    fn test_plain_prose_flagged() {
        let out = validate("Three people stand in a kitchen.", 3, DEFAULT_WORD_LIMIT);
        assert!(!out.markers_valid);
        assert!(out.dynamics_missing);
    }

    #[test]
    fn test_dynamics_missing_only_with_two_characters() {
        let raw = "[LENS: 50mm] [SUBJECT: A]";
        assert!(validate(raw, 2, DEFAULT_WORD_LIMIT).dynamics_missing);
        assert!(!validate(raw, 1, DEFAULT_WORD_LIMIT).dynamics_missing);
    }

    #[test]
    fn test_code_fences_stripped() {
        assert_eq!(strip_code_fences("```\n[LENS: 85mm]\n```"), "[LENS: 85mm]");
        assert_eq!(strip_code_fences("```text\n[LENS: 85mm]\n```  "), "[LENS: 85mm]");
        assert_eq!(strip_code_fences("  [LENS: 85mm]\n"), "[LENS: 85mm]");
        assert_eq!(strip_code_fences("```[LENS: 85mm]```"), "[LENS: 85mm]");
    }
}
