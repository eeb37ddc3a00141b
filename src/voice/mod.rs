//! Voice direction: emotional arcs across dialogue, pacing markers and
//! provider-specific emotion tagging.

mod arc;
mod builder;
pub mod pacing;

pub use arc::{arc_note_index, ArcType};
pub use builder::{
    DialogueDirection, DirectedSegment, EnhancedVoicePrompt, TagStyle, VoicePromptBuilder,
    VoicePromptOptions, VoiceProvider, DEFAULT_AMBIENT,
};
pub use pacing::{estimate_pacing_duration, insert_pause_marker, strip_voice_markup, to_ssml};

use serde::{Deserialize, Serialize};

/// One spoken line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechSegment {
    pub speaker: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// Set by the arc algorithm, one note per pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional_arc_note: Option<String>,
    /// Non-verbal sound key (sigh, laugh, gasp, ...) voiced before the line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_verbal: Option<String>,
}

impl SpeechSegment {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }

    pub fn with_non_verbal(mut self, sound: impl Into<String>) -> Self {
        self.non_verbal = Some(sound.into());
        self
    }
}

/// Dialogue file as read by the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueScript {
    pub segments: Vec<SpeechSegment>,
    #[serde(default)]
    pub arc: Option<ArcType>,
    #[serde(default)]
    pub scene_mood: Option<String>,
}
