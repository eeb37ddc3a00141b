//! Shot descriptor: the input to prompt compilation.

use crate::vocabulary::normalize_key;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Camera shot type. Unknown keys are kept verbatim in [`ShotType::Other`]
/// so they degrade to empty vocabulary contributions instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShotType {
    ExtremeCloseUp,
    CloseUp,
    MediumCloseUp,
    #[default]
    Medium,
    MediumWide,
    TwoShot,
    OverTheShoulder,
    Wide,
    Establishing,
    Insert,
    Other(String),
}

impl ShotType {
    pub fn from_key(key: &str) -> Self {
        match normalize_key(key).as_str() {
            "extreme-close-up" | "extreme-closeup" | "ecu" | "xcu" => ShotType::ExtremeCloseUp,
            "close-up" | "closeup" | "cu" => ShotType::CloseUp,
            "medium-close-up" | "medium-closeup" | "mcu" => ShotType::MediumCloseUp,
            "medium" | "medium-shot" | "mid" | "ms" => ShotType::Medium,
            "medium-wide" | "medium-long" | "mws" | "cowboy" => ShotType::MediumWide,
            "two-shot" | "twoshot" | "2-shot" => ShotType::TwoShot,
            "over-the-shoulder" | "ots" => ShotType::OverTheShoulder,
            "wide" | "wide-shot" | "long" | "long-shot" | "ws" => ShotType::Wide,
            "establishing" | "establishing-shot" | "extreme-wide" => ShotType::Establishing,
            "insert" | "insert-shot" | "detail" => ShotType::Insert,
            other => ShotType::Other(other.to_string()),
        }
    }

    /// Canonical vocabulary key.
    pub fn key(&self) -> &str {
        match self {
            ShotType::ExtremeCloseUp => "extreme-close-up",
            ShotType::CloseUp => "close-up",
            ShotType::MediumCloseUp => "medium-close-up",
            ShotType::Medium => "medium",
            ShotType::MediumWide => "medium-wide",
            ShotType::TwoShot => "two-shot",
            ShotType::OverTheShoulder => "over-the-shoulder",
            ShotType::Wide => "wide",
            ShotType::Establishing => "establishing",
            ShotType::Insert => "insert",
            ShotType::Other(key) => key.as_str(),
        }
    }
}

impl From<String> for ShotType {
    fn from(value: String) -> Self {
        ShotType::from_key(&value)
    }
}

impl From<ShotType> for String {
    fn from(value: ShotType) -> Self {
        value.key().to_string()
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Character record with optional visual attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defining_features: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facial_structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wardrobe: Option<String>,
}

impl CharacterProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A character as callers pass it: either a bare name or a full record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacterRef {
    Name(String),
    Profile(CharacterProfile),
}

impl CharacterRef {
    pub fn name(&self) -> &str {
        match self {
            CharacterRef::Name(name) => name.as_str(),
            CharacterRef::Profile(profile) => profile.name.as_str(),
        }
    }

    pub fn profile(&self) -> Option<&CharacterProfile> {
        match self {
            CharacterRef::Name(_) => None,
            CharacterRef::Profile(profile) => Some(profile),
        }
    }

    /// The record form, with a bare name promoted to an attribute-less record.
    pub fn to_profile(&self) -> CharacterProfile {
        match self {
            CharacterRef::Name(name) => CharacterProfile::named(name.clone()),
            CharacterRef::Profile(profile) => profile.clone(),
        }
    }
}

impl From<&str> for CharacterRef {
    fn from(value: &str) -> Self {
        CharacterRef::Name(value.to_string())
    }
}

impl From<CharacterProfile> for CharacterRef {
    fn from(value: CharacterProfile) -> Self {
        CharacterRef::Profile(value)
    }
}

/// Location record as read from scene data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single generation request.
///
/// Constructed by the caller and never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotDescriptor {
    #[serde(default)]
    pub shot_type: ShotType,
    #[serde(default)]
    pub characters: Vec<CharacterRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_dynamic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInfo>,
    /// `Some(false)` skips the LLM entirely, `Some(true)` forces it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_expansion: Option<bool>,
}

impl ShotDescriptor {
    pub fn new(shot_type: ShotType) -> Self {
        Self {
            shot_type,
            ..Default::default()
        }
    }

    pub fn with_characters<I, C>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CharacterRef>,
    {
        self.characters = characters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = Some(emotion.into());
        self
    }

    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_relationship(mut self, relationship: impl Into<String>) -> Self {
        self.relationship = Some(relationship.into());
        self
    }

    pub fn with_power_dynamic(mut self, power_dynamic: impl Into<String>) -> Self {
        self.power_dynamic = Some(power_dynamic.into());
        self
    }

    pub fn with_visual_mode(mut self, visual_mode: impl Into<String>) -> Self {
        self.visual_mode = Some(visual_mode.into());
        self
    }

    pub fn with_location(mut self, location: LocationInfo) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_llm_expansion(mut self, enabled: bool) -> Self {
        self.llm_expansion = Some(enabled);
        self
    }

    /// Character names in order.
    pub fn character_names(&self) -> Vec<&str> {
        self.characters.iter().map(CharacterRef::name).collect()
    }

    /// Optional text field with blank values treated as absent.
    pub(crate) fn non_blank(field: &Option<String>) -> Option<&str> {
        field.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn emotion_key(&self) -> Option<&str> {
        Self::non_blank(&self.emotion)
    }

    pub fn subtext_text(&self) -> Option<&str> {
        Self::non_blank(&self.subtext)
    }

    pub fn environment_text(&self) -> Option<&str> {
        Self::non_blank(&self.environment)
    }
}
