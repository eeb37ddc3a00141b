//! Camera vocabulary: lens psychology, framing percentages, transition
//! motivations and visual-mode style suffixes.

/// Lens choice for a shot type and what it does to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LensProfile {
    pub focal_length: &'static str,
    pub psychology: &'static str,
}

/// Style suffix for a visual mode. `motion` marks modes that target video
/// models, where subjects get a micro-movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualModeStyle {
    pub suffix: &'static str,
    pub motion: bool,
}

pub const LENS_PSYCHOLOGY: &[(&str, LensProfile)] = &[
    (
        "extreme-close-up",
        LensProfile {
            focal_length: "100mm macro lens",
            psychology: "isolates a single detail so the smallest tremor reads as a confession",
        },
    ),
    (
        "close-up",
        LensProfile {
            focal_length: "85mm portrait lens at f/1.8",
            psychology: "compresses the face and drops the background away, forcing intimacy with the inner state",
        },
    ),
    (
        "medium-close-up",
        LensProfile {
            focal_length: "65mm lens at f/2.8",
            psychology: "holds face and shoulders, balancing expression against posture",
        },
    ),
    (
        "medium",
        LensProfile {
            focal_length: "50mm normal lens",
            psychology: "neutral observational perspective close to human sight",
        },
    ),
    (
        "medium-wide",
        LensProfile {
            focal_length: "40mm lens",
            psychology: "keeps gesture and body language readable inside the space",
        },
    ),
    (
        "two-shot",
        LensProfile {
            focal_length: "40mm lens at f/4",
            psychology: "keeps both faces sharp so the relationship itself becomes the subject",
        },
    ),
    (
        "over-the-shoulder",
        LensProfile {
            focal_length: "75mm lens",
            psychology: "the foreground shoulder anchors the viewer inside one character's point of view",
        },
    ),
    (
        "wide",
        LensProfile {
            focal_length: "28mm wide-angle lens",
            psychology: "places characters within their world so space becomes part of the story",
        },
    ),
    (
        "establishing",
        LensProfile {
            focal_length: "24mm wide lens with deep focus",
            psychology: "orients the viewer in geography before emotion",
        },
    ),
    (
        "insert",
        LensProfile {
            focal_length: "100mm macro lens",
            psychology: "turns an object into narrative evidence",
        },
    ),
];

pub const FRAMING: &[(&str, &str)] = &[
    (
        "extreme-close-up",
        "eyes and mouth fill 90% of the frame, forehead and chin cropped",
    ),
    (
        "close-up",
        "face fills 60% of frame height, eyes on the upper third line, slight headroom crop",
    ),
    (
        "medium-close-up",
        "head and shoulders occupy 45% of the frame, eyes on the upper third",
    ),
    ("medium", "subject framed from the waist up at 35% of frame height"),
    ("medium-wide", "subject framed from the knees up at 50% of frame height"),
    (
        "two-shot",
        "two subjects share the frame, each occupying 30% of its width, balanced on the thirds",
    ),
    (
        "over-the-shoulder",
        "foreground shoulder fills 25% of the frame edge, subject face at 30% on the opposite third",
    ),
    (
        "wide",
        "full figures occupy 20-30% of frame height, environment dominant",
    ),
    (
        "establishing",
        "figures under 10% of frame height, horizon on a third line",
    ),
    ("insert", "object fills 70% of the frame, centered"),
];

pub const TRANSITION_MOTIVATIONS: &[(&str, &str)] = &[
    ("cut", "a clean cut motivated by a look or a line of dialogue"),
    (
        "match-cut",
        "a match cut carrying shape or motion across from the previous shot",
    ),
    (
        "smash-cut",
        "a smash cut that breaks the previous mood without warning",
    ),
    ("dissolve", "a slow dissolve marking time passing or memory"),
    ("fade", "a fade from black that opens a new chapter"),
    (
        "j-cut",
        "a j-cut where this scene's sound arrives before its picture",
    ),
    (
        "l-cut",
        "an l-cut where the previous scene's sound lingers over this image",
    ),
    (
        "whip-pan",
        "a whip pan that drags the energy of the last moment into this one",
    ),
];

pub const VISUAL_MODES: &[(&str, VisualModeStyle)] = &[
    (
        "cinematic",
        VisualModeStyle {
            suffix: "cinematic film still, anamorphic lens character, subtle film grain",
            motion: false,
        },
    ),
    (
        "photorealistic",
        VisualModeStyle {
            suffix: "photorealistic, natural skin texture, true-to-life color",
            motion: false,
        },
    ),
    (
        "anime",
        VisualModeStyle {
            suffix: "anime key visual, clean line art, cel shading",
            motion: false,
        },
    ),
    (
        "noir",
        VisualModeStyle {
            suffix: "black-and-white film noir, hard shadows, venetian blind light",
            motion: false,
        },
    ),
    (
        "documentary",
        VisualModeStyle {
            suffix: "handheld documentary realism, available light",
            motion: false,
        },
    ),
    (
        "storybook",
        VisualModeStyle {
            suffix: "painterly storybook illustration, soft edges",
            motion: false,
        },
    ),
    (
        "video",
        VisualModeStyle {
            suffix: "cinematic motion, natural movement, stable camera",
            motion: true,
        },
    ),
    (
        "animation",
        VisualModeStyle {
            suffix: "fluid character animation, expressive timing",
            motion: true,
        },
    ),
];
