//! Lighting vocabulary: color temperatures and key-to-fill ratios.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTemperature {
    pub kelvin: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingRatio {
    pub ratio: &'static str,
    pub description: &'static str,
}

/// Mood used when an emotion has no lighting mapping.
pub const DEFAULT_LIGHTING_MOOD: &str = "balanced";

pub const TIME_OF_DAY_TEMPERATURES: &[(&str, ColorTemperature)] = &[
    (
        "dawn",
        ColorTemperature {
            kelvin: 2500,
            description: "pale rose-gold first light",
        },
    ),
    (
        "sunrise",
        ColorTemperature {
            kelvin: 3000,
            description: "warm low sun raking across surfaces",
        },
    ),
    (
        "morning",
        ColorTemperature {
            kelvin: 4500,
            description: "clean crisp morning light",
        },
    ),
    (
        "midday",
        ColorTemperature {
            kelvin: 5600,
            description: "neutral hard overhead daylight",
        },
    ),
    (
        "noon",
        ColorTemperature {
            kelvin: 5600,
            description: "neutral hard overhead daylight",
        },
    ),
    (
        "afternoon",
        ColorTemperature {
            kelvin: 5000,
            description: "soft angled afternoon daylight",
        },
    ),
    (
        "golden-hour",
        ColorTemperature {
            kelvin: 3200,
            description: "warm low-angle golden light with long shadows",
        },
    ),
    (
        "sunset",
        ColorTemperature {
            kelvin: 2800,
            description: "deep amber sunset glow",
        },
    ),
    (
        "dusk",
        ColorTemperature {
            kelvin: 8000,
            description: "cool blue-hour ambience with fading warm accents",
        },
    ),
    (
        "blue-hour",
        ColorTemperature {
            kelvin: 9000,
            description: "saturated blue-hour ambience",
        },
    ),
    (
        "night",
        ColorTemperature {
            kelvin: 7500,
            description: "cool moonlit blue with warm practical accents",
        },
    ),
    (
        "midnight",
        ColorTemperature {
            kelvin: 7500,
            description: "cool moonlit blue, deep shadow",
        },
    ),
];

pub const LOCATION_TYPE_TEMPERATURES: &[(&str, ColorTemperature)] = &[
    (
        "interior",
        ColorTemperature {
            kelvin: 3200,
            description: "tungsten practical lamps",
        },
    ),
    (
        "exterior",
        ColorTemperature {
            kelvin: 5600,
            description: "open daylight",
        },
    ),
    (
        "office",
        ColorTemperature {
            kelvin: 4000,
            description: "flat fluorescent overheads",
        },
    ),
    (
        "hospital",
        ColorTemperature {
            kelvin: 4500,
            description: "clinical cool-white panels",
        },
    ),
    (
        "bar",
        ColorTemperature {
            kelvin: 2700,
            description: "dim amber bar lighting with neon spill",
        },
    ),
    (
        "studio",
        ColorTemperature {
            kelvin: 5600,
            description: "controlled daylight-balanced studio lighting",
        },
    ),
    (
        "candlelit",
        ColorTemperature {
            kelvin: 1900,
            description: "flickering candlelight",
        },
    ),
];

pub const LIGHTING_RATIOS: &[(&str, LightingRatio)] = &[
    (
        "high-key",
        LightingRatio {
            ratio: "2:1",
            description: "soft low-contrast fill, open and safe",
        },
    ),
    (
        "balanced",
        LightingRatio {
            ratio: "3:1",
            description: "natural modelling with a gentle shadow side",
        },
    ),
    (
        "dramatic",
        LightingRatio {
            ratio: "4:1",
            description: "defined shadows that carve the face",
        },
    ),
    (
        "low-key",
        LightingRatio {
            ratio: "8:1",
            description: "deep shadow swallowing half the face, concealment and tension",
        },
    ),
    (
        "chiaroscuro",
        LightingRatio {
            ratio: "16:1",
            description: "near-black shadow side, isolated pools of light",
        },
    ),
];

/// Which lighting mood an emotion calls for.
pub const EMOTION_LIGHTING_MOODS: &[(&str, &str)] = &[
    ("joy", "high-key"),
    ("love", "high-key"),
    ("tenderness", "high-key"),
    ("hope", "high-key"),
    ("calm", "high-key"),
    ("ecstasy", "high-key"),
    ("surprise", "balanced"),
    ("sadness", "balanced"),
    ("determination", "dramatic"),
    ("anger", "dramatic"),
    ("jealousy", "dramatic"),
    ("suspicion", "dramatic"),
    ("contempt", "dramatic"),
    ("betrayal", "dramatic"),
    ("fear", "low-key"),
    ("anxiety", "low-key"),
    ("grief", "low-key"),
    ("shame", "low-key"),
    ("guilt", "low-key"),
    ("despair", "low-key"),
    ("heartbreak", "low-key"),
    ("devastation", "low-key"),
    ("anguish", "chiaroscuro"),
    ("terror", "chiaroscuro"),
    ("horror", "chiaroscuro"),
    ("rage", "chiaroscuro"),
    ("fury", "chiaroscuro"),
    ("panic", "chiaroscuro"),
    ("hysteria", "chiaroscuro"),
];
