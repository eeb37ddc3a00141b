//! Model prompt adapter.
//!
//! Fits a compiled prompt to the token budget of a downstream model family.
//! Unbounded families get the prompt back byte for byte. Bounded families
//! get marker brackets stripped and, when compression is enabled, the
//! content re-packed by priority so the most important phrases survive.

use crate::markers::{self, Marker};
use crate::vocabulary::normalize_key;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref DECORATIVE_PATTERN: Regex = Regex::new(
        r"(?i)\b(masterpiece|best quality|high quality|ultra[- ]detailed|highly detailed|intricate details?|sharp focus|trending on artstation|award[- ]winning|octane render|unreal engine|hdr|uhd|\d{1,2}k|\d{3,4}x\d{3,4}|\d{3,4}p)\b"
    )
    .expect("decorative pattern is valid");
    static ref SPACE_RUNS: Regex = Regex::new(r"\s{2,}").expect("space pattern is valid");
}

/// CLIP-style text encoder window shared by the Stable Diffusion 1.x/XL family.
pub const CLIP_TOKEN_LIMIT: usize = 77;

/// Order in which sections survive compression.
const SECTION_PRIORITY: [Marker; 6] = [
    Marker::Subject,
    Marker::Environment,
    Marker::Lens,
    Marker::Frame,
    Marker::Lighting,
    Marker::Dynamics,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenLimit {
    Bounded(usize),
    Unbounded,
}

impl TokenLimit {
    pub fn as_option(&self) -> Option<usize> {
        match self {
            TokenLimit::Bounded(limit) => Some(*limit),
            TokenLimit::Unbounded => None,
        }
    }
}

impl From<Option<usize>> for TokenLimit {
    fn from(value: Option<usize>) -> Self {
        value.map_or(TokenLimit::Unbounded, TokenLimit::Bounded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAdaptationProfile {
    pub family: String,
    pub token_limit: TokenLimit,
    pub compression_enabled: bool,
}

impl PromptAdaptationProfile {
    pub fn bounded(family: &str, limit: usize, compression_enabled: bool) -> Self {
        Self {
            family: normalize_key(family),
            token_limit: TokenLimit::Bounded(limit),
            compression_enabled,
        }
    }

    pub fn unbounded(family: &str) -> Self {
        Self {
            family: normalize_key(family),
            token_limit: TokenLimit::Unbounded,
            compression_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptOptions {
    /// Use this budget instead of the family's.
    pub token_limit_override: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdaptationStats {
    pub original_tokens: usize,
    pub adapted_tokens: usize,
    pub token_limit: Option<usize>,
    pub was_compressed: bool,
    pub under_limit: bool,
}

/// Approximate encoder token count: every non-whitespace Unicode word-bound
/// segment counts once, so words and punctuation are tokens.
pub fn count_tokens(text: &str) -> usize {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Cut `text` to at most `limit` tokens at a segment boundary.
fn truncate_tokens(text: &str, limit: usize) -> String {
    let mut kept = 0;
    let mut end = 0;
    for (offset, segment) in text.split_word_bound_indices() {
        if segment.trim().is_empty() {
            continue;
        }
        if kept == limit {
            break;
        }
        kept += 1;
        end = offset + segment.len();
    }
    let mut out = text[..end].trim_end().to_string();
    while count_tokens(&out) > limit {
        match out.split_word_bound_indices().last() {
            Some((offset, _)) => out = out[..offset].trim_end().to_string(),
            None => break,
        }
    }
    out.trim_end_matches(&[',', ';', ' '][..]).to_string()
}

/// Split marker content or style text into comma/semicolon phrases.
fn phrases(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(&[',', ';', '\n'][..])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

fn drop_decorative(phrase: &str) -> String {
    let unbracketed = markers::strip_brackets(phrase);
    let cleaned = DECORATIVE_PATTERN.replace_all(&unbracketed, "");
    SPACE_RUNS.replace_all(cleaned.trim(), " ").into_owned()
}

pub struct ModelPromptAdapter {
    profiles: HashMap<String, PromptAdaptationProfile>,
}

impl ModelPromptAdapter {
    pub fn new() -> Self {
        let mut profiles = HashMap::new();
        for family in ["sd15", "sdxl", "sdxl-turbo", "playground"] {
            let profile = PromptAdaptationProfile::bounded(family, CLIP_TOKEN_LIMIT, true);
            profiles.insert(profile.family.clone(), profile);
        }
        for (family, limit) in [("flux", 512), ("sd3", 256)] {
            let profile = PromptAdaptationProfile::bounded(family, limit, true);
            profiles.insert(profile.family.clone(), profile);
        }
        for family in ["gemini", "imagen", "veo", "sora", "kling", "runway", "dalle3"] {
            let profile = PromptAdaptationProfile::unbounded(family);
            profiles.insert(profile.family.clone(), profile);
        }
        Self { profiles }
    }

    /// Add or replace a family profile.
    pub fn with_profile(mut self, profile: PromptAdaptationProfile) -> Self {
        self.profiles.insert(normalize_key(&profile.family), profile);
        self
    }

    pub fn profile(&self, family: &str) -> Option<&PromptAdaptationProfile> {
        self.profiles.get(&normalize_key(family))
    }

    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        families.sort_unstable();
        families
    }

    fn effective(&self, family: &str, options: &AdaptOptions) -> (TokenLimit, bool) {
        let profile = self.profile(family);
        let compression = profile.map_or(true, |p| p.compression_enabled);
        match options.token_limit_override {
            Some(limit) => (TokenLimit::Bounded(limit), compression),
            None => profile.map_or((TokenLimit::Unbounded, false), |p| {
                (p.token_limit, p.compression_enabled)
            }),
        }
    }

    /// Adapt `prompt` for `family`. For a bounded budget the result always
    /// satisfies `count_tokens(result) <= limit`.
    pub fn adapt_prompt(&self, prompt: &str, family: &str, options: &AdaptOptions) -> String {
        let (limit, compression) = self.effective(family, options);
        let TokenLimit::Bounded(limit) = limit else {
            return prompt.to_string();
        };

        if !compression {
            let plain = markers::strip_brackets(&markers::strip(prompt));
            return truncate_tokens(&SPACE_RUNS.replace_all(plain.trim(), " "), limit);
        }

        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for phrase in Self::prioritized_phrases(prompt) {
            let phrase = drop_decorative(&phrase);
            if phrase.is_empty() || !seen.insert(phrase.to_lowercase()) {
                continue;
            }
            ordered.push(phrase);
        }

        let mut out = String::new();
        for phrase in ordered {
            let candidate = if out.is_empty() {
                phrase
            } else {
                format!("{}, {}", out, phrase)
            };
            if count_tokens(&candidate) <= limit {
                out = candidate;
            } else {
                out = truncate_tokens(&candidate, limit);
                break;
            }
        }
        out
    }

    /// Marker contents in priority order, then everything outside markers
    /// (the style suffix).
    fn prioritized_phrases(prompt: &str) -> Vec<String> {
        let sections = markers::sections(prompt);
        let mut out = Vec::new();
        for marker in SECTION_PRIORITY {
            for (_, content) in sections.iter().filter(|(m, _)| *m == marker) {
                out.extend(phrases(content));
            }
        }

        let outside = markers::strip_sections(prompt);
        out.extend(phrases(&outside));
        out
    }

    pub fn adaptation_stats(&self, original: &str, adapted: &str, family: &str) -> AdaptationStats {
        let limit = self.effective(family, &AdaptOptions::default()).0.as_option();
        let adapted_tokens = count_tokens(adapted);
        AdaptationStats {
            original_tokens: count_tokens(original),
            adapted_tokens,
            token_limit: limit,
            was_compressed: original != adapted,
            under_limit: limit.map_or(true, |l| adapted_tokens <= l),
        }
    }
}

impl Default for ModelPromptAdapter {
    fn default() -> Self {
        Self::new()
    }
}
