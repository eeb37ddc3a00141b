//! Complexity detection: decides whether a shot is worth an LLM call.

use crate::shot::ShotDescriptor;
use crate::vocabulary::{normalize_key, HIGH_INTENSITY_EMOTIONS};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Character count at which a shot is always complex.
pub const COMPLEX_CHARACTER_COUNT: usize = 3;

/// Rule that marked a shot as complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityReason {
    ThreePlusCharacters,
    HasSubtext,
    HighEmotionalIntensity,
}

impl ComplexityReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityReason::ThreePlusCharacters => "three_plus_characters",
            ComplexityReason::HasSubtext => "has_subtext",
            ComplexityReason::HighEmotionalIntensity => "high_emotional_intensity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    pub is_complex: bool,
    pub reasons: BTreeSet<ComplexityReason>,
}

impl ComplexityAssessment {
    /// Assessment for a shot whose caller disabled LLM expansion, so no
    /// rule was evaluated.
    pub fn bypassed() -> Self {
        Self::default()
    }

    pub fn has(&self, reason: ComplexityReason) -> bool {
        self.reasons.contains(&reason)
    }
}

/// Pure classifier over shot descriptors.
#[derive(Debug, Clone)]
pub struct ComplexityDetector {
    high_intensity: HashSet<String>,
}

impl ComplexityDetector {
    /// Detector using the given high-intensity emotion keys.
    pub fn new<I, S>(high_intensity_emotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            high_intensity: high_intensity_emotions
                .into_iter()
                .map(|e| normalize_key(e.as_ref()))
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    pub fn is_high_intensity(&self, emotion: &str) -> bool {
        self.high_intensity.contains(&normalize_key(emotion))
    }

    /// Classify a shot. Each rule is evaluated independently; any hit makes
    /// the shot complex.
    pub fn assess(&self, shot: &ShotDescriptor) -> ComplexityAssessment {
        let mut reasons = BTreeSet::new();

        if shot.characters.len() >= COMPLEX_CHARACTER_COUNT {
            reasons.insert(ComplexityReason::ThreePlusCharacters);
        }
        if shot.subtext_text().is_some() {
            reasons.insert(ComplexityReason::HasSubtext);
        }
        if shot
            .emotion_key()
            .is_some_and(|emotion| self.is_high_intensity(emotion))
        {
            reasons.insert(ComplexityReason::HighEmotionalIntensity);
        }

        ComplexityAssessment {
            is_complex: !reasons.is_empty(),
            reasons,
        }
    }
}

impl Default for ComplexityDetector {
    fn default() -> Self {
        Self::new(HIGH_INTENSITY_EMOTIONS)
    }
}
