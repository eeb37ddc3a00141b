use shot_prompt_compiler::shot::{CharacterProfile, LocationInfo, ShotDescriptor, ShotType};

/// Well-formed LLM answer for a three-character shot.
#[allow(dead_code)]
pub const TRIO_EXPANSION: &str = "[LENS: 35mm lens, observational distance] \
[LIGHTING: 3200K tungsten warmth; 4:1 key-to-fill ratio] \
[FRAME: three figures across the frame, A centered at 40% height] \
[SUBJECT: A smiles with tight lips, eyes flicking to B; C watches, jaw set] \
[DYNAMICS: A and B at personal distance, C two steps behind in shadow]";

/// One character, close-up, low-intensity emotion.
#[allow(dead_code)]
pub fn fear_close_up() -> ShotDescriptor {
    ShotDescriptor::new(ShotType::CloseUp)
        .with_characters(["A"])
        .with_emotion("fear")
}

/// Three characters with subtext.
#[allow(dead_code)]
pub fn jealous_trio() -> ShotDescriptor {
    ShotDescriptor::new(ShotType::Medium)
        .with_characters(["A", "B", "C"])
        .with_subtext("hidden jealousy")
}

/// Fully populated two-character shot.
#[allow(dead_code)]
pub fn pier_confrontation() -> ShotDescriptor {
    ShotDescriptor::new(ShotType::TwoShot)
        .with_characters([
            CharacterProfile {
                name: "Mara".to_string(),
                role: Some("detective".to_string()),
                hair: Some("cropped grey".to_string()),
                wardrobe: Some("a wet trench coat".to_string()),
                ..Default::default()
            },
            CharacterProfile::named("Theo"),
        ])
        .with_emotion("anger")
        .with_relationship("rivals")
        .with_power_dynamic("dominant")
        .with_environment("rain-slick pier, fog over the water")
        .with_visual_mode("noir")
        .with_location(LocationInfo {
            name: Some("Harbor Pier".to_string()),
            location_type: Some("exterior".to_string()),
            time_of_day: Some("night".to_string()),
            weather: Some("light rain".to_string()),
            ..Default::default()
        })
}

/// The same descriptor as JSON with two different key orders.
#[allow(dead_code)]
pub const SHUFFLED_JSON: [&str; 2] = [
    r#"{"shotType": "medium", "characters": ["A", "B", "C"], "subtext": "hidden jealousy", "emotion": "calm"}"#,
    r#"{"emotion": "calm", "subtext": "hidden jealousy", "characters": ["A", "B", "C"], "shotType": "medium"}"#,
];
