//! Structured (template) prompt builder.
//!
//! Assembles a marker-tagged prompt purely from vocabulary lookups. Used for
//! simple shots and as the last fallback of the expansion cascade, so it
//! never fails: missing or unknown keys just contribute nothing.

use crate::markers::Marker;
use crate::shot::{CharacterRef, ShotDescriptor};
use crate::vocabulary::{Vocabulary, DEFAULT_POWER_DYNAMIC};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSection {
    pub marker: Marker,
    pub content: String,
}

/// Output of the template path, before rendering to a string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CompiledPrompt {
    /// Sections in emission order.
    pub sections: Vec<PromptSection>,
    /// Visual-mode style suffix rendered after the markers.
    pub style: Option<String>,
}

impl CompiledPrompt {
    pub fn section(&self, marker: Marker) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.marker == marker)
            .map(|s| s.content.as_str())
    }

    pub fn has(&self, marker: Marker) -> bool {
        self.section(marker).is_some()
    }

    fn push(&mut self, marker: Marker, content: String) {
        if !content.trim().is_empty() {
            self.sections.push(PromptSection { marker, content });
        }
    }
}

pub struct StructuredPromptBuilder {
    vocab: Arc<Vocabulary>,
}

impl StructuredPromptBuilder {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self { vocab }
    }

    pub fn build(&self, shot: &ShotDescriptor) -> CompiledPrompt {
        let mut prompt = CompiledPrompt::default();

        prompt.push(Marker::Lens, self.lens(shot));
        prompt.push(Marker::Lighting, self.lighting(shot));
        prompt.push(Marker::Frame, self.frame(shot));
        prompt.push(Marker::Subject, self.subject(shot));
        if shot.characters.len() >= 2 {
            prompt.push(Marker::Dynamics, self.dynamics(shot));
        }
        if shot.environment_text().is_some() {
            prompt.push(Marker::Environment, self.environment(shot));
        }

        prompt.style = shot
            .visual_mode
            .as_deref()
            .and_then(|mode| self.vocab.visual_mode(mode))
            .map(|style| style.suffix.to_string());

        prompt
    }

    /// Render a compiled prompt: one marker per line, style last.
    pub fn to_prompt_string(compiled: &CompiledPrompt) -> String {
        let mut lines: Vec<String> = compiled
            .sections
            .iter()
            .map(|s| s.marker.render(&s.content))
            .collect();
        if let Some(style) = &compiled.style {
            lines.push(style.clone());
        }
        lines.join("\n")
    }

    /// `build` followed by `to_prompt_string`.
    pub fn build_string(&self, shot: &ShotDescriptor) -> String {
        Self::to_prompt_string(&self.build(shot))
    }

    fn lens(&self, shot: &ShotDescriptor) -> String {
        self.vocab
            .lens(shot.shot_type.key())
            .map(|lens| format!("{}, {}", lens.focal_length, lens.psychology))
            .unwrap_or_default()
    }

    fn lighting(&self, shot: &ShotDescriptor) -> String {
        let mut parts = Vec::new();

        let location = shot.location.as_ref();
        let temperature = location
            .and_then(|l| l.time_of_day.as_deref())
            .and_then(|t| self.vocab.time_of_day_temperature(t))
            .or_else(|| {
                location
                    .and_then(|l| l.location_type.as_deref())
                    .and_then(|t| self.vocab.location_temperature(t))
            });
        if let Some(temp) = temperature {
            parts.push(format!("{}K {}", temp.kelvin, temp.description));
        }

        let mood = self.vocab.lighting_mood_for(shot.emotion_key());
        if let Some(ratio) = self.vocab.lighting_ratio(mood) {
            parts.push(format!(
                "{} key-to-fill ratio, {}",
                ratio.ratio, ratio.description
            ));
        }

        parts.join("; ")
    }

    fn frame(&self, shot: &ShotDescriptor) -> String {
        let mut parts = Vec::new();
        if let Some(framing) = self.vocab.framing(shot.shot_type.key()) {
            parts.push(framing.to_string());
        }
        if let Some(motivation) = shot
            .transition
            .as_deref()
            .and_then(|t| self.vocab.transition_motivation(t))
        {
            parts.push(format!("entering on {}", motivation));
        }
        parts.join("; ")
    }

    fn subject(&self, shot: &ShotDescriptor) -> String {
        let manifestation = shot.emotion_key().and_then(|e| self.vocab.emotion(e));
        let motion = shot
            .visual_mode
            .as_deref()
            .and_then(|mode| self.vocab.visual_mode(mode))
            .is_some_and(|style| style.motion);

        let mut manifestation_text = manifestation.map(|m| {
            format!(
                "face: {}, eyes: {}, body: {}, breath: {}",
                m.face, m.eyes, m.body, m.breath
            )
        });

        if shot.characters.is_empty() {
            return manifestation_text.unwrap_or_default();
        }

        // The emotion belongs to the primary (first) character.
        shot.characters
            .iter()
            .enumerate()
            .map(|(index, character)| {
                let mut parts = vec![character.name().to_string()];
                parts.extend(Self::character_details(character));
                if index == 0 {
                    if let Some(text) = manifestation_text.take() {
                        parts.push(text);
                    }
                }
                if motion {
                    let movement = self.vocab.micro_movement(shot.emotion_key(), index);
                    if !movement.is_empty() {
                        parts.push(format!("micro-movement: {}", movement));
                    }
                }
                parts.join(", ")
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn character_details(character: &CharacterRef) -> Vec<String> {
        let Some(profile) = character.profile() else {
            return Vec::new();
        };
        let mut details = Vec::new();
        if let Some(role) = ShotDescriptor::non_blank(&profile.role) {
            details.push(role.to_string());
        }
        if let Some(description) = ShotDescriptor::non_blank(&profile.description) {
            details.push(description.to_string());
        }
        if let Some(features) = ShotDescriptor::non_blank(&profile.defining_features) {
            details.push(format!("defining features: {}", features));
        }
        if let Some(structure) = ShotDescriptor::non_blank(&profile.facial_structure) {
            details.push(format!("facial structure: {}", structure));
        }
        if let Some(hair) = ShotDescriptor::non_blank(&profile.hair) {
            details.push(format!("hair: {}", hair));
        }
        if let Some(wardrobe) = ShotDescriptor::non_blank(&profile.wardrobe) {
            details.push(format!("wearing {}", wardrobe));
        }
        details
    }

    fn dynamics(&self, shot: &ShotDescriptor) -> String {
        let zone = self.vocab.relationship_zone(shot.relationship.as_deref());
        let names = shot.character_names().join(" and ");
        let mut parts = vec![format!(
            "{} in the {} zone ({}), {}",
            names,
            zone.as_str(),
            zone.distance(),
            zone.description()
        )];

        let power_key = ShotDescriptor::non_blank(&shot.power_dynamic).unwrap_or(DEFAULT_POWER_DYNAMIC);
        if let Some(position) = self.vocab.power_position(power_key) {
            parts.push(position.to_string());
        }
        parts.join("; ")
    }

    fn environment(&self, shot: &ShotDescriptor) -> String {
        let mut parts = Vec::new();
        if let Some(environment) = shot.environment_text() {
            parts.push(environment.to_string());
        }
        if let Some(location) = &shot.location {
            if let Some(name) = ShotDescriptor::non_blank(&location.name) {
                parts.push(format!("at {}", name));
            }
            if let Some(weather) = ShotDescriptor::non_blank(&location.weather) {
                parts.push(format!("weather: {}", weather));
            }
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers;
    use crate::shot::{CharacterProfile, LocationInfo, ShotType};

    fn builder() -> StructuredPromptBuilder {
        StructuredPromptBuilder::new(Vocabulary::builtin())
    }

    #[test]
    fn test_sections_emitted_in_fixed_order() {
        let shot = ShotDescriptor::new(ShotType::TwoShot)
            .with_characters(["Mara", "Theo"])
            .with_emotion("sadness")
            .with_environment("a rain-soaked pier");
        let compiled = builder().build(&shot);

        let order: Vec<Marker> = compiled.sections.iter().map(|s| s.marker).collect();
        assert_eq!(order, Marker::ALL.to_vec());
    }

    #[test]
    fn test_single_character_has_no_dynamics() {
        let shot = ShotDescriptor::new(ShotType::CloseUp)
            .with_characters(["Mara"])
            .with_emotion("fear");
        let compiled = builder().build(&shot);

        assert!(compiled.has(Marker::Lens));
        assert!(compiled.has(Marker::Subject));
        assert!(!compiled.has(Marker::Dynamics));
        assert!(!compiled.has(Marker::Environment));
        assert!(compiled.section(Marker::Lens).unwrap().contains("85mm"));
    }

    #[test]
    fn test_subject_describes_manifestation_not_label() {
        let shot = ShotDescriptor::new(ShotType::CloseUp)
            .with_characters(["Mara"])
            .with_emotion("fear");
        let subject = builder().build(&shot).section(Marker::Subject).unwrap().to_string();

        assert!(subject.starts_with("Mara"));
        assert!(subject.contains("eyes wide"));
        assert!(!subject.contains("fear"));
    }

    #[test]
    fn test_subject_includes_character_features() {
        let profile = CharacterProfile {
            name: "Iris".to_string(),
            defining_features: Some("a scar through the left brow".to_string()),
            facial_structure: Some("high cheekbones, narrow jaw".to_string()),
            ..Default::default()
        };
        let shot = ShotDescriptor::new(ShotType::Medium).with_characters([profile]);
        let subject = builder().build(&shot).section(Marker::Subject).unwrap().to_string();

        assert!(subject.contains("defining features: a scar through the left brow"));
        assert!(subject.contains("facial structure: high cheekbones"));
    }

    #[test]
    fn test_dynamics_defaults_to_social_and_equals() {
        let shot = ShotDescriptor::new(ShotType::TwoShot).with_characters(["A", "B"]);
        let dynamics = builder().build(&shot).section(Marker::Dynamics).unwrap().to_string();

        assert!(dynamics.contains("social zone"));
        assert!(dynamics.contains("same eye level"));
    }

    #[test]
    fn test_dynamics_uses_relationship_and_power() {
        let shot = ShotDescriptor::new(ShotType::TwoShot)
            .with_characters(["A", "B"])
            .with_relationship("lovers")
            .with_power_dynamic("protector");
        let dynamics = builder().build(&shot).section(Marker::Dynamics).unwrap().to_string();

        assert!(dynamics.contains("intimate zone"));
        assert!(dynamics.contains("squared toward the threat"));
    }

    #[test]
    fn test_unknown_keys_degrade_gracefully() {
        let shot = ShotDescriptor::new(ShotType::from_key("dutch-orbit"))
            .with_characters(["A", "B"])
            .with_emotion("ennui")
            .with_relationship("pen-pals")
            .with_power_dynamic("telepathic")
            .with_visual_mode("vaporwave");
        let compiled = builder().build(&shot);

        assert!(!compiled.has(Marker::Lens));
        assert!(!compiled.has(Marker::Frame));
        assert!(compiled.has(Marker::Lighting));
        assert!(compiled.has(Marker::Subject));
        let dynamics = compiled.section(Marker::Dynamics).unwrap();
        assert!(dynamics.contains("social zone"));
        assert!(compiled.style.is_none());
    }

    #[test]
    fn test_empty_descriptor_still_builds() {
        let prompt = builder().build_string(&ShotDescriptor::default());
        assert!(prompt.contains("[LENS:"));
        assert!(markers::scan(&prompt).is_valid());
    }

    #[test]
    fn test_lighting_uses_location() {
        let shot = ShotDescriptor::new(ShotType::Wide).with_location(LocationInfo {
            time_of_day: Some("golden hour".to_string()),
            ..Default::default()
        });
        let lighting = builder().build(&shot).section(Marker::Lighting).unwrap().to_string();
        assert!(lighting.starts_with("3200K"));

        let interior = ShotDescriptor::new(ShotType::Wide).with_location(LocationInfo {
            location_type: Some("interior".to_string()),
            ..Default::default()
        });
        let lighting = builder()
            .build(&interior)
            .section(Marker::Lighting)
            .unwrap()
            .to_string();
        assert!(lighting.contains("tungsten"));
    }

    #[test]
    fn test_environment_includes_location_weather() {
        let shot = ShotDescriptor::new(ShotType::Wide)
            .with_environment("abandoned lighthouse")
            .with_location(LocationInfo {
                weather: Some("fog".to_string()),
                ..Default::default()
            });
        let env = builder().build(&shot).section(Marker::Environment).unwrap().to_string();
        assert_eq!(env, "abandoned lighthouse, weather: fog");
    }

    #[test]
    fn test_motion_mode_adds_micro_movements() {
        let shot = ShotDescriptor::new(ShotType::TwoShot)
            .with_characters(["A", "B"])
            .with_emotion("anger")
            .with_visual_mode("video");
        let compiled = builder().build(&shot);
        let subject = compiled.section(Marker::Subject).unwrap();

        assert_eq!(subject.matches("micro-movement:").count(), 2);
        assert!(compiled.style.is_some());
    }

    #[test]
    fn test_prompt_string_layout() {
        let shot = ShotDescriptor::new(ShotType::CloseUp)
            .with_characters(["A"])
            .with_visual_mode("noir");
        let text = builder().build_string(&shot);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("[LENS:"));
        assert!(lines.last().unwrap().contains("film noir"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let shot = ShotDescriptor::new(ShotType::TwoShot)
            .with_characters(["A", "B", "C"])
            .with_emotion("jealousy")
            .with_visual_mode("video");
        assert_eq!(builder().build_string(&shot), builder().build_string(&shot));
    }
}
