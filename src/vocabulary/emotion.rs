//! Emotion vocabulary: how an emotion shows up in a body.
//!
//! Prompts never name the emotion itself; they describe the face, eyes,
//! body and breath that carry it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionManifestation {
    pub face: &'static str,
    pub eyes: &'static str,
    pub body: &'static str,
    pub breath: &'static str,
}

/// Emotions intense enough that a shot carrying them is worth LLM expansion.
///
/// This is the single list the complexity detector consults; config may
/// replace it wholesale.
pub const HIGH_INTENSITY_EMOTIONS: &[&str] = &[
    "rage",
    "fury",
    "terror",
    "horror",
    "grief",
    "despair",
    "anguish",
    "panic",
    "hysteria",
    "ecstasy",
    "devastation",
    "heartbreak",
    "betrayal",
];

/// Micro-movement key used when an emotion has no variants of its own.
pub const NEUTRAL_MICRO_MOVEMENT: &str = "neutral";

macro_rules! manifestation {
    ($face:expr, $eyes:expr, $body:expr, $breath:expr) => {
        EmotionManifestation {
            face: $face,
            eyes: $eyes,
            body: $body,
            breath: $breath,
        }
    };
}

pub const EMOTION_MANIFESTATIONS: &[(&str, EmotionManifestation)] = &[
    (
        "joy",
        manifestation!(
            "cheeks lifted, mouth open in an unguarded smile",
            "eyes creased at the corners, bright and wet",
            "shoulders loose, chest open, weight forward",
            "quick light breaths between bursts of laughter"
        ),
    ),
    (
        "love",
        manifestation!(
            "softened jaw, lips slightly parted",
            "gaze lingering, pupils wide",
            "body angled toward the other, hands open",
            "slow, even breath"
        ),
    ),
    (
        "tenderness",
        manifestation!(
            "faint half-smile, brow relaxed",
            "eyes lowered and warm",
            "head tilted, hands hovering close without gripping",
            "quiet unhurried breath"
        ),
    ),
    (
        "hope",
        manifestation!(
            "lips pressed in a tentative smile",
            "eyes lifted toward the distance",
            "spine straightening, chin rising",
            "a held breath waiting to be released"
        ),
    ),
    (
        "calm",
        manifestation!(
            "smooth forehead, neutral mouth",
            "steady, unhurried gaze",
            "still hands, grounded stance",
            "deep slow breathing"
        ),
    ),
    (
        "sadness",
        manifestation!(
            "inner brows drawn up, corners of the mouth pulled down",
            "eyes glassy and unfocused, lids heavy",
            "shoulders rounded forward, head bowed",
            "shallow breaths with an occasional catch"
        ),
    ),
    (
        "grief",
        manifestation!(
            "face crumpling, chin trembling",
            "eyes red-rimmed and swollen, tears tracking",
            "body folding inward, arms wrapped around the torso",
            "ragged breath broken by sobs"
        ),
    ),
    (
        "despair",
        manifestation!(
            "slack features, mouth hanging open",
            "vacant stare fixed on nothing",
            "collapsed posture, limbs heavy",
            "long hollow exhales"
        ),
    ),
    (
        "fear",
        manifestation!(
            "brows raised and pulled together, lips stretched back",
            "eyes wide, whites visible, darting to exits",
            "body pulled back, shoulders hunched, hands raised close to the chest",
            "rapid shallow breathing high in the chest"
        ),
    ),
    (
        "terror",
        manifestation!(
            "face drained of color, mouth frozen open",
            "eyes stretched wide and locked on the threat",
            "rigid body, backing into a wall",
            "breath caught and held"
        ),
    ),
    (
        "anxiety",
        manifestation!(
            "tight lips, small restless jaw movements",
            "eyes flicking, unable to settle",
            "fidgeting hands, bouncing knee",
            "quick uneven breaths"
        ),
    ),
    (
        "panic",
        manifestation!(
            "features distorted, mouth gasping",
            "eyes wild, scanning in every direction",
            "erratic movement, clutching at surroundings",
            "hyperventilating"
        ),
    ),
    (
        "anger",
        manifestation!(
            "brows lowered, lips pressed into a hard line",
            "narrowed, fixed stare",
            "squared shoulders, fists clenched at the sides",
            "heavy breathing through flared nostrils"
        ),
    ),
    (
        "rage",
        manifestation!(
            "teeth bared, veins raised at the temple",
            "unblinking glare",
            "whole body coiled, leaning in to strike",
            "explosive breath through the teeth"
        ),
    ),
    (
        "fury",
        manifestation!(
            "face flushed dark, jaw locked",
            "burning, unblinking eyes",
            "trembling arms barely held back",
            "short forceful breaths"
        ),
    ),
    (
        "contempt",
        manifestation!(
            "one corner of the mouth raised in a sneer",
            "eyes half-lidded, looking down the nose",
            "chin lifted, weight settled back",
            "a dismissive exhale through the nose"
        ),
    ),
    (
        "disgust",
        manifestation!(
            "nose wrinkled, upper lip curled",
            "eyes squinting, averted",
            "head pulled back, hand rising as if to block",
            "breath held against a smell"
        ),
    ),
    (
        "surprise",
        manifestation!(
            "brows shot up, jaw dropped",
            "eyes wide and round",
            "sudden stillness, hands frozen mid-gesture",
            "a sharp intake of breath"
        ),
    ),
    (
        "shame",
        manifestation!(
            "flushed cheeks, lips pressed inward",
            "gaze dropped to the floor",
            "shoulders curled, making the body small",
            "breath shallow and quiet"
        ),
    ),
    (
        "guilt",
        manifestation!(
            "tight mouth, furrowed brow",
            "eyes sliding away from the other's face",
            "hands wringing, body turned partly away",
            "a swallowed breath before speaking"
        ),
    ),
    (
        "jealousy",
        manifestation!(
            "polite smile that never reaches the eyes",
            "sidelong glances tracking the rival",
            "arms crossed, weight shifted away",
            "controlled breathing held too even"
        ),
    ),
    (
        "suspicion",
        manifestation!(
            "one brow lowered, mouth pursed",
            "eyes narrowed, studying",
            "head tilted, body turned three-quarters away",
            "slow, measured breath"
        ),
    ),
    (
        "determination",
        manifestation!(
            "set jaw, lips firm",
            "steady eyes locked forward",
            "planted feet, shoulders squared",
            "deep deliberate breath before moving"
        ),
    ),
    (
        "betrayal",
        manifestation!(
            "face frozen between disbelief and hurt",
            "eyes searching the other's face for a lie",
            "body stepping back, hand dropping away",
            "a breath knocked out of the chest"
        ),
    ),
    (
        "heartbreak",
        manifestation!(
            "trembling lips fighting to stay closed",
            "eyes brimming, blinking too fast",
            "hand pressed flat against the sternum",
            "stuttering inhale"
        ),
    ),
    (
        "anguish",
        manifestation!(
            "face contorted, brow knotted",
            "eyes squeezed shut",
            "doubled over, fingers digging into the arms",
            "choked, broken breathing"
        ),
    ),
    (
        "ecstasy",
        manifestation!(
            "head thrown back, open-mouthed smile",
            "eyes closed or rolled upward",
            "arms flung wide, body weightless",
            "long euphoric exhale"
        ),
    ),
    (
        "horror",
        manifestation!(
            "mouth covered by a shaking hand",
            "eyes fixed wide on what cannot be unseen",
            "body recoiling, knees unsteady",
            "breath stopped in the throat"
        ),
    ),
    (
        "hysteria",
        manifestation!(
            "laughter and sobbing fighting across the face",
            "unfocused, streaming eyes",
            "shaking uncontrollably, arms flailing",
            "gasping, irregular breath"
        ),
    ),
    (
        "devastation",
        manifestation!(
            "blank features emptied of expression",
            "eyes staring through the floor",
            "sinking to the knees",
            "barely perceptible breathing"
        ),
    ),
];

pub const MICRO_MOVEMENTS: &[(&str, &[&str])] = &[
    (
        "neutral",
        &[
            "a slow blink",
            "a slight weight shift from one foot to the other",
            "a small adjustment of the shoulders",
        ],
    ),
    (
        "joy",
        &[
            "a quick glance down as the smile widens",
            "a small bounce in the shoulders",
            "a hand brushing hair back",
        ],
    ),
    (
        "sadness",
        &[
            "a slow swallow",
            "fingers worrying the edge of a sleeve",
            "a gaze drifting down and away",
        ],
    ),
    (
        "grief",
        &[
            "a chin tremor held in check",
            "a hand rising to the mouth",
            "a shuddering shoulder",
        ],
    ),
    (
        "fear",
        &[
            "a flinch at a sound off-screen",
            "a half step backward",
            "fingers tightening on the nearest surface",
        ],
    ),
    (
        "anger",
        &[
            "a jaw muscle flexing",
            "knuckles whitening",
            "a sharp turn of the head",
        ],
    ),
    (
        "anxiety",
        &[
            "a thumb rubbing the knuckles",
            "a glance toward the door",
            "a quick lick of dry lips",
        ],
    ),
    (
        "love",
        &[
            "a reach that stops just short of touching",
            "a soft exhale through a smile",
            "a lingering look held a beat too long",
        ],
    ),
    (
        "suspicion",
        &[
            "eyes narrowing a fraction",
            "a slow tilt of the head",
            "fingers drumming once and stopping",
        ],
    ),
    (
        "jealousy",
        &[
            "a glance that slides to the rival and back",
            "a tightening of the crossed arms",
            "a smile that flickers and resets",
        ],
    ),
];
