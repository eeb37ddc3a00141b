//! System and user prompt construction for LLM expansion.

use crate::markers::Marker;
use crate::shot::{CharacterRef, ShotDescriptor};
use crate::vocabulary::{ProxemicZone, Vocabulary};

/// Build the system prompt: rule preamble, vocabulary excerpts and the
/// marker grammar. Depends only on the vocabulary and word limit, so the
/// engine builds it once.
pub fn build_system_prompt(vocab: &Vocabulary, word_limit: usize) -> String {
    let mut out = String::new();

    out.push_str(
        "You are a cinematographer compiling shot descriptions into image and video generation prompts.\n\n",
    );

    out.push_str("RULES:\n");
    out.push_str(
        "- NEVER use emotion labels directly. Show emotion through face, eyes, body and breath.\n",
    );
    out.push_str("- NEVER invent technical terms outside the given vocabulary.\n");
    out.push_str(&format!("- Keep output under {} words.\n", word_limit));
    out.push_str(
        "- Describe spatial relationships explicitly: distance, height, facing and who holds the frame.\n",
    );
    out.push_str("- Output only marker sections, no commentary.\n\n");

    out.push_str("LENS VOCABULARY:\n");
    for (shot_type, lens) in vocab.lenses() {
        out.push_str(&format!("- {}: {}, {}\n", shot_type, lens.focal_length, lens.psychology));
    }

    out.push_str("\nLIGHTING RATIOS:\n");
    for (mood, ratio) in vocab.lighting_ratios() {
        out.push_str(&format!("- {}: {}, {}\n", mood, ratio.ratio, ratio.description));
    }

    out.push_str("\nEMOTION MANIFESTATIONS:\n");
    for (emotion, m) in vocab.emotions() {
        out.push_str(&format!(
            "- {}: face {}; eyes {}; body {}; breath {}\n",
            emotion,
            m.face,
            m.eyes,
            m.body,
            m.breath,
        ));
    }

    out.push_str("\nPROXEMIC ZONES:\n");
    for zone in ProxemicZone::ALL {
        out.push_str(&format!(
            "- {} ({}): {}\n",
            zone.as_str(),
            zone.distance(),
            zone.description(),
        ));
    }

    out.push_str("\nPOWER POSITIONS:\n");
    for (key, position) in vocab.power_positions() {
        out.push_str(&format!("- {}: {}\n", key, position));
    }

    out.push_str("\nOUTPUT GRAMMAR:\n");
    out.push_str("Write each section at most once, in this order:\n");
    for marker in Marker::ALL {
        out.push_str(&format!("{} {}]\n", marker.opening(), marker.purpose()));
    }
    out.push_str(
        "No other bracketed tags are allowed. Include [DYNAMICS:] whenever two or more characters share the frame.\n",
    );

    out
}

/// Serialise a shot into natural-language instructions.
pub fn build_user_prompt(shot: &ShotDescriptor) -> String {
    let mut out = String::from("Compile this shot into the marker grammar.\n\n");

    out.push_str(&format!("Shot type: {}\n", shot.shot_type));

    if !shot.characters.is_empty() {
        out.push_str("Characters:\n");
        for character in &shot.characters {
            out.push_str(&format!("- {}\n", describe_character(character)));
        }
    }

    if let Some(emotion) = shot.emotion_key() {
        out.push_str(&format!(
            "Emotion: {} (show it physically, never name it)\n",
            emotion,
        ));
    }
    if let Some(subtext) = shot.subtext_text() {
        out.push_str(&format!(
            "Subtext: {} (let it leak through body language and staging)\n",
            subtext,
        ));
    }
    if let Some(environment) = shot.environment_text() {
        out.push_str(&format!("Environment: {}\n", environment));
    }
    if let Some(location) = &shot.location {
        let details: Vec<String> = [
            ("name", &location.name),
            ("type", &location.location_type),
            ("time of day", &location.time_of_day),
            ("weather", &location.weather),
            ("description", &location.description),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            ShotDescriptor::non_blank(value).map(|v| format!("{}: {}", label, v))
        })
        .collect();
        if !details.is_empty() {
            out.push_str(&format!("Location: {}\n", details.join(", ")));
        }
    }
    if let Some(relationship) = ShotDescriptor::non_blank(&shot.relationship) {
        out.push_str(&format!("Relationship: {}\n", relationship));
    }
    if let Some(power) = ShotDescriptor::non_blank(&shot.power_dynamic) {
        out.push_str(&format!("Power dynamic: {}\n", power));
    }
    if let Some(mode) = ShotDescriptor::non_blank(&shot.visual_mode) {
        out.push_str(&format!("Visual mode: {}\n", mode));
    }
    if let Some(transition) = ShotDescriptor::non_blank(&shot.transition) {
        out.push_str(&format!("Enters on: {}\n", transition));
    }

    if shot.characters.len() >= 2 {
        out.push_str(
            "\nThe [DYNAMICS:] section must place every character relative to the others.\n",
        );
    }

    out
}

fn describe_character(character: &CharacterRef) -> String {
    let Some(profile) = character.profile() else {
        return character.name().to_string();
    };

    let details: Vec<String> = [
        ("role", &profile.role),
        ("description", &profile.description),
        ("defining features", &profile.defining_features),
        ("facial structure", &profile.facial_structure),
        ("hair", &profile.hair),
        ("wardrobe", &profile.wardrobe),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        ShotDescriptor::non_blank(value).map(|v| format!("{}: {}", label, v))
    })
    .collect();

    if details.is_empty() {
        profile.name.clone()
    } else {
        format!("{} ({})", profile.name, details.join("; "))
    }
}
