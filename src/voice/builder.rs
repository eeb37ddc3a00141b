use super::arc::{self, ArcType};
use super::pacing;
use super::SpeechSegment;
use crate::shot::ShotDescriptor;
use crate::vocabulary::{normalize_key, Vocabulary};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Ambient cue used when a scene type has no entry.
pub const DEFAULT_AMBIENT: &str = "quiet room tone";

/// How a provider wants emotional direction expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStyle {
    /// Inline bracket tag prepended to the text.
    Bracket,
    /// Separate imperative instructions.
    Instruction,
    /// Separate prose description of the voice.
    Descriptive,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VoiceProvider {
    ElevenLabs,
    OpenAI,
    Hume,
    /// Anything else gets generic bracket tags.
    #[default]
    Generic,
}

impl VoiceProvider {
    pub fn from_key(key: &str) -> Self {
        match normalize_key(key).as_str() {
            "elevenlabs" | "eleven-labs" | "11labs" => VoiceProvider::ElevenLabs,
            "openai" | "open-ai" => VoiceProvider::OpenAI,
            "hume" | "hume-ai" => VoiceProvider::Hume,
            _ => VoiceProvider::Generic,
        }
    }

    pub fn tag_style(&self) -> TagStyle {
        match self {
            VoiceProvider::ElevenLabs | VoiceProvider::Generic => TagStyle::Bracket,
            VoiceProvider::OpenAI => TagStyle::Instruction,
            VoiceProvider::Hume => TagStyle::Descriptive,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VoicePromptOptions {
    pub provider: VoiceProvider,
    /// Scene type for the ambient cue.
    pub scene_type: Option<String>,
}

impl VoicePromptOptions {
    pub fn for_provider(provider: VoiceProvider) -> Self {
        Self {
            provider,
            scene_type: None,
        }
    }
}

/// Text and direction for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnhancedVoicePrompt {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectedSegment {
    pub speaker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_note: Option<String>,
    pub prompt: EnhancedVoicePrompt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueDirection {
    pub segments: Vec<DirectedSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient: Option<String>,
}

pub struct VoicePromptBuilder {
    vocab: Arc<Vocabulary>,
}

impl VoicePromptBuilder {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self { vocab }
    }

    /// Assign an arc note to every segment. Input segments are not modified.
    pub fn build_emotional_arc(
        &self,
        segments: &[SpeechSegment],
        arc_type: ArcType,
    ) -> Vec<SpeechSegment> {
        arc::apply_arc(&self.vocab, segments, arc_type)
    }

    pub fn build_arc_summary(&self, arc_type: ArcType, segment_count: usize) -> String {
        arc::arc_summary(&self.vocab, arc_type, segment_count)
    }

    /// SSML document for `text`, resolving named pauses through this
    /// builder's vocabulary.
    pub fn to_ssml(&self, text: &str) -> String {
        pacing::to_ssml(&self.vocab, text)
    }

    pub fn estimate_pacing_duration(&self, text: &str) -> f64 {
        pacing::estimate_pacing_duration(&self.vocab, text)
    }

    pub fn build_ambient_cue(&self, scene_type: &str) -> String {
        self.vocab
            .ambient_cue(scene_type)
            .unwrap_or(DEFAULT_AMBIENT)
            .to_string()
    }

    pub fn build_enhanced_voice_prompt(
        &self,
        segment: &SpeechSegment,
        options: &VoicePromptOptions,
    ) -> EnhancedVoicePrompt {
        let emotion = ShotDescriptor::non_blank(&segment.emotion);
        let tag = emotion.and_then(|e| self.vocab.voice_tag(e));
        let sound = ShotDescriptor::non_blank(&segment.non_verbal);
        let style = options.provider.tag_style();

        let mut direction: Vec<String> = Vec::new();
        let mut text = segment.text.trim().to_string();

        match style {
            TagStyle::Bracket => {
                let mut prefix = Vec::new();
                if let Some(tag) = tag {
                    prefix.push(match options.provider {
                        VoiceProvider::ElevenLabs => tag.elevenlabs,
                        _ => tag.generic,
                    });
                }
                if let Some(sound_tag) = sound.and_then(|s| self.vocab.non_verbal_tag(s)) {
                    prefix.push(sound_tag);
                }
                if !prefix.is_empty() {
                    text = format!("{} {}", prefix.join(" "), text);
                }
            }
            TagStyle::Instruction | TagStyle::Descriptive => {
                if let Some(tag) = tag {
                    direction.push(match style {
                        TagStyle::Instruction => tag.directive.to_string(),
                        _ => tag.descriptive.to_string(),
                    });
                }
                if let Some(sound) = sound.filter(|s| self.vocab.non_verbal_tag(s).is_some()) {
                    direction.push(format!(
                        "Begin with an audible {}.",
                        normalize_key(sound).replace('-', " ")
                    ));
                }
            }
        }

        if let Some(quality) = emotion.and_then(|e| self.vocab.vocal_quality(e)) {
            direction.push(format!("Vocal quality: {}.", quality));
        }
        if let Some(delivery) = segment
            .emotional_arc_note
            .as_deref()
            .and_then(|note| self.vocab.arc_note_delivery(note))
        {
            direction.push(format!("Delivery: {}.", delivery));
        }

        EnhancedVoicePrompt {
            text,
            instructions: (!direction.is_empty()).then(|| direction.join(" ")),
            ambient: options
                .scene_type
                .as_deref()
                .map(|scene| self.build_ambient_cue(scene)),
        }
    }

    /// Direct a whole dialogue: apply the arc, then build every line for
    /// `provider`. The ambient cue is attached once at dialogue level.
    pub fn build_dialogue_direction_prompt(
        &self,
        segments: &[SpeechSegment],
        arc_type: Option<ArcType>,
        scene_mood: Option<&str>,
        provider: &VoiceProvider,
    ) -> DialogueDirection {
        let arced = match arc_type {
            Some(arc_type) => self.build_emotional_arc(segments, arc_type),
            None => segments.to_vec(),
        };

        let options = VoicePromptOptions::for_provider(provider.clone());
        let directed = arced
            .iter()
            .map(|segment| DirectedSegment {
                speaker: segment.speaker.clone(),
                arc_note: segment.emotional_arc_note.clone(),
                prompt: self.build_enhanced_voice_prompt(segment, &options),
            })
            .collect();

        debug!(
            segments = segments.len(),
            arc = ?arc_type,
            style = ?provider.tag_style(),
            "Built dialogue direction"
        );

        DialogueDirection {
            segments: directed,
            arc_summary: arc_type.map(|arc| self.build_arc_summary(arc, segments.len())),
            ambient: scene_mood.map(|mood| self.build_ambient_cue(mood)),
        }
    }
}
