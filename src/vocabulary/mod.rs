//! Vocabulary banks.
//!
//! Fixed tables mapping semantic keys (shot types, emotions, relationships,
//! arc types, ...) to descriptive text. Every component receives the banks
//! as an `Arc<Vocabulary>` at construction; nothing here is mutable after
//! [`Vocabulary::builtin`] builds it.
//!
//! All lookups go through [`normalize_key`], so `"Golden Hour"`,
//! `"golden_hour"` and `"golden-hour"` resolve to the same entry. Unknown
//! keys return `None` (or the documented default) and never panic.

mod camera;
mod emotion;
mod lighting;
mod spatial;
mod voice;

pub use camera::{LensProfile, VisualModeStyle};
pub use emotion::{EmotionManifestation, HIGH_INTENSITY_EMOTIONS};
pub use lighting::{ColorTemperature, LightingRatio};
pub use spatial::{ProxemicZone, DEFAULT_POWER_DYNAMIC, DEFAULT_ZONE};
pub use voice::{PauseNotation, VoiceEmotionTag};

use lazy_static::lazy_static;
use std::collections::BTreeMap;
use std::sync::Arc;

lazy_static! {
    static ref BUILTIN: Arc<Vocabulary> = Arc::new(Vocabulary::from_tables());
}

/// Normalize a vocabulary key: trimmed, lowercase, with spaces and
/// underscores folded into single dashes.
pub fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.trim().chars() {
        let c = if c.is_whitespace() || c == '_' { '-' } else { c };
        if c == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.extend(c.to_lowercase());
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Read-only collection of every vocabulary bank.
#[derive(Debug)]
pub struct Vocabulary {
    lenses: BTreeMap<&'static str, LensProfile>,
    framing: BTreeMap<&'static str, &'static str>,
    transitions: BTreeMap<&'static str, &'static str>,
    visual_modes: BTreeMap<&'static str, VisualModeStyle>,
    time_of_day_temperatures: BTreeMap<&'static str, ColorTemperature>,
    location_temperatures: BTreeMap<&'static str, ColorTemperature>,
    lighting_ratios: BTreeMap<&'static str, LightingRatio>,
    emotion_lighting_moods: BTreeMap<&'static str, &'static str>,
    emotions: BTreeMap<&'static str, EmotionManifestation>,
    micro_movements: BTreeMap<&'static str, &'static [&'static str]>,
    relationship_zones: BTreeMap<&'static str, ProxemicZone>,
    power_positions: BTreeMap<&'static str, &'static str>,
    voice_tags: BTreeMap<&'static str, VoiceEmotionTag>,
    vocal_qualities: BTreeMap<&'static str, &'static str>,
    non_verbal_tags: BTreeMap<&'static str, &'static str>,
    pauses: BTreeMap<&'static str, PauseNotation>,
    arc_patterns: BTreeMap<&'static str, [&'static str; 4]>,
    arc_note_delivery: BTreeMap<&'static str, &'static str>,
    ambient_cues: BTreeMap<&'static str, &'static str>,
}

impl Vocabulary {
    /// Shared handle to the built-in banks.
    pub fn builtin() -> Arc<Vocabulary> {
        Arc::clone(&BUILTIN)
    }

    fn from_tables() -> Self {
        Self {
            lenses: camera::LENS_PSYCHOLOGY.iter().copied().collect(),
            framing: camera::FRAMING.iter().copied().collect(),
            transitions: camera::TRANSITION_MOTIVATIONS.iter().copied().collect(),
            visual_modes: camera::VISUAL_MODES.iter().copied().collect(),
            time_of_day_temperatures: lighting::TIME_OF_DAY_TEMPERATURES
                .iter()
                .copied()
                .collect(),
            location_temperatures: lighting::LOCATION_TYPE_TEMPERATURES
                .iter()
                .copied()
                .collect(),
            lighting_ratios: lighting::LIGHTING_RATIOS.iter().copied().collect(),
            emotion_lighting_moods: lighting::EMOTION_LIGHTING_MOODS.iter().copied().collect(),
            emotions: emotion::EMOTION_MANIFESTATIONS.iter().copied().collect(),
            micro_movements: emotion::MICRO_MOVEMENTS.iter().copied().collect(),
            relationship_zones: spatial::RELATIONSHIP_ZONES.iter().copied().collect(),
            power_positions: spatial::POWER_POSITIONS.iter().copied().collect(),
            voice_tags: voice::VOICE_EMOTION_TAGS.iter().copied().collect(),
            vocal_qualities: voice::VOCAL_QUALITIES.iter().copied().collect(),
            non_verbal_tags: voice::NON_VERBAL_TAGS.iter().copied().collect(),
            pauses: voice::PAUSE_NOTATIONS.iter().copied().collect(),
            arc_patterns: voice::ARC_PATTERNS.iter().copied().collect(),
            arc_note_delivery: voice::ARC_NOTE_DELIVERY.iter().copied().collect(),
            ambient_cues: voice::AMBIENT_CUES.iter().copied().collect(),
        }
    }

    // Camera

    pub fn lens(&self, shot_type: &str) -> Option<&LensProfile> {
        self.lenses.get(normalize_key(shot_type).as_str())
    }

    pub fn lenses(&self) -> impl Iterator<Item = (&'static str, &LensProfile)> {
        self.lenses.iter().map(|(k, v)| (*k, v))
    }

    pub fn framing(&self, shot_type: &str) -> Option<&'static str> {
        self.framing.get(normalize_key(shot_type).as_str()).copied()
    }

    pub fn transition_motivation(&self, transition: &str) -> Option<&'static str> {
        self.transitions.get(normalize_key(transition).as_str()).copied()
    }

    pub fn visual_mode(&self, mode: &str) -> Option<&VisualModeStyle> {
        self.visual_modes.get(normalize_key(mode).as_str())
    }

    // Lighting

    pub fn time_of_day_temperature(&self, time_of_day: &str) -> Option<&ColorTemperature> {
        self.time_of_day_temperatures
            .get(normalize_key(time_of_day).as_str())
    }

    pub fn location_temperature(&self, location_type: &str) -> Option<&ColorTemperature> {
        self.location_temperatures
            .get(normalize_key(location_type).as_str())
    }

    pub fn lighting_ratio(&self, mood: &str) -> Option<&LightingRatio> {
        self.lighting_ratios.get(normalize_key(mood).as_str())
    }

    pub fn lighting_ratios(&self) -> impl Iterator<Item = (&'static str, &LightingRatio)> {
        self.lighting_ratios.iter().map(|(k, v)| (*k, v))
    }

    /// Lighting mood for an emotion, `"balanced"` when unknown or absent.
    pub fn lighting_mood_for(&self, emotion: Option<&str>) -> &'static str {
        emotion
            .and_then(|e| {
                self.emotion_lighting_moods
                    .get(normalize_key(e).as_str())
                    .copied()
            })
            .unwrap_or(lighting::DEFAULT_LIGHTING_MOOD)
    }

    // Emotion

    pub fn emotion(&self, emotion: &str) -> Option<&EmotionManifestation> {
        self.emotions.get(normalize_key(emotion).as_str())
    }

    pub fn emotions(&self) -> impl Iterator<Item = (&'static str, &EmotionManifestation)> {
        self.emotions.iter().map(|(k, v)| (*k, v))
    }

    /// Pick a micro-movement variant for an emotion. `variant` wraps around
    /// the available variants; emotions without their own list use the
    /// neutral set.
    pub fn micro_movement(&self, emotion: Option<&str>, variant: usize) -> &'static str {
        let variants = emotion
            .and_then(|e| self.micro_movements.get(normalize_key(e).as_str()))
            .or_else(|| self.micro_movements.get(emotion::NEUTRAL_MICRO_MOVEMENT))
            .copied()
            .unwrap_or(&[]);
        if variants.is_empty() {
            return "";
        }
        variants[variant % variants.len()]
    }

    // Spatial

    /// Proxemic zone for a relationship, [`DEFAULT_ZONE`] when unknown or absent.
    pub fn relationship_zone(&self, relationship: Option<&str>) -> ProxemicZone {
        relationship
            .and_then(|r| {
                self.relationship_zones
                    .get(normalize_key(r).as_str())
                    .copied()
            })
            .unwrap_or(DEFAULT_ZONE)
    }

    pub fn power_position(&self, power_dynamic: &str) -> Option<&'static str> {
        self.power_positions
            .get(normalize_key(power_dynamic).as_str())
            .copied()
    }

    pub fn power_positions(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.power_positions.iter().map(|(k, v)| (*k, *v))
    }

    // Voice

    pub fn voice_tag(&self, emotion: &str) -> Option<&VoiceEmotionTag> {
        self.voice_tags.get(normalize_key(emotion).as_str())
    }

    pub fn vocal_quality(&self, emotion: &str) -> Option<&'static str> {
        self.vocal_qualities
            .get(normalize_key(emotion).as_str())
            .copied()
    }

    pub fn non_verbal_tag(&self, sound: &str) -> Option<&'static str> {
        self.non_verbal_tags
            .get(normalize_key(sound).as_str())
            .copied()
    }

    pub fn non_verbal_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.non_verbal_tags.values().copied()
    }

    pub fn pause(&self, name: &str) -> Option<&PauseNotation> {
        self.pauses.get(normalize_key(name).as_str())
    }

    pub fn pauses(&self) -> impl Iterator<Item = (&'static str, &PauseNotation)> {
        self.pauses.iter().map(|(k, v)| (*k, v))
    }

    pub fn arc_pattern(&self, arc_type: &str) -> Option<&[&'static str; 4]> {
        self.arc_patterns.get(normalize_key(arc_type).as_str())
    }

    pub fn arc_note_delivery(&self, note: &str) -> Option<&'static str> {
        self.arc_note_delivery
            .get(normalize_key(note).as_str())
            .copied()
    }

    pub fn ambient_cue(&self, scene_type: &str) -> Option<&'static str> {
        self.ambient_cues
            .get(normalize_key(scene_type).as_str())
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Golden Hour"), "golden-hour");
        assert_eq!(normalize_key("  golden_hour "), "golden-hour");
        assert_eq!(normalize_key("close--up"), "close-up");
        assert_eq!(normalize_key("FEAR"), "fear");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_lookups_tolerate_key_styles() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.lens("Close Up").is_some());
        assert!(vocab.framing("close_up").is_some());
        assert_eq!(
            vocab.time_of_day_temperature("Golden Hour").unwrap().kelvin,
            3200
        );
    }

    #[test]
    fn test_unknown_keys_return_none() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.lens("dutch-angle-fisheye").is_none());
        assert!(vocab.emotion("ennui").is_none());
        assert!(vocab.voice_tag("ennui").is_none());
        assert!(vocab.ambient_cue("moon-base").is_none());
    }

    #[test]
    fn test_relationship_zone_defaults_to_social() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.relationship_zone(None), ProxemicZone::Social);
        assert_eq!(
            vocab.relationship_zone(Some("pen pals")),
            ProxemicZone::Social
        );
        assert_eq!(
            vocab.relationship_zone(Some("Lovers")),
            ProxemicZone::Intimate
        );
    }

    #[test]
    fn test_default_power_dynamic_exists() {
        let vocab = Vocabulary::builtin();
        assert!(vocab.power_position(DEFAULT_POWER_DYNAMIC).is_some());
    }

    #[test]
    fn test_micro_movement_wraps_and_falls_back() {
        let vocab = Vocabulary::builtin();
        let first = vocab.micro_movement(Some("fear"), 0);
        assert_eq!(vocab.micro_movement(Some("fear"), 3), first);
        assert_eq!(
            vocab.micro_movement(Some("ennui"), 0),
            vocab.micro_movement(None, 0)
        );
        assert!(!vocab.micro_movement(None, 0).is_empty());
    }

    #[test]
    fn test_lighting_mood_default() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.lighting_mood_for(None), "balanced");
        assert_eq!(vocab.lighting_mood_for(Some("fear")), "low-key");
        assert!(vocab.lighting_ratio(vocab.lighting_mood_for(Some("rage"))).is_some());
    }

    #[test]
    fn test_every_high_intensity_emotion_has_a_manifestation() {
        let vocab = Vocabulary::builtin();
        for emotion in HIGH_INTENSITY_EMOTIONS {
            assert!(
                vocab.emotion(emotion).is_some(),
                "missing manifestation for {}",
                emotion
            );
        }
    }

    #[test]
    fn test_every_arc_note_has_delivery() {
        let vocab = Vocabulary::builtin();
        for arc in ["building", "crashing", "recovering", "masking", "revealing", "confronting"] {
            let pattern = vocab.arc_pattern(arc).unwrap();
            for note in pattern {
                assert!(vocab.arc_note_delivery(note).is_some(), "{} lacks delivery", note);
            }
        }
    }
}
