//! Voice vocabulary: emotional-direction tags, vocal qualities, non-verbal
//! sounds, pause notations, arc patterns and ambient cues.

/// How one emotion is expressed for each provider tag style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceEmotionTag {
    /// Provider-agnostic bracket tag.
    pub generic: &'static str,
    /// Bracket tag tuned for ElevenLabs-style models.
    pub elevenlabs: &'static str,
    /// Directive instruction ("Speak ...").
    pub directive: &'static str,
    /// Prose description of the voice.
    pub descriptive: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PauseNotation {
    pub notation: &'static str,
    pub seconds: f64,
}

macro_rules! voice_tag {
    ($generic:expr, $elevenlabs:expr, $directive:expr, $descriptive:expr) => {
        VoiceEmotionTag {
            generic: $generic,
            elevenlabs: $elevenlabs,
            directive: $directive,
            descriptive: $descriptive,
        }
    };
}

pub const VOICE_EMOTION_TAGS: &[(&str, VoiceEmotionTag)] = &[
    (
        "joy",
        voice_tag!(
            "[happy]",
            "[cheerfully]",
            "Speak brightly with a smile in the voice and a lifted pitch.",
            "A bright, buoyant voice with a smile audible in every word."
        ),
    ),
    (
        "love",
        voice_tag!(
            "[tender]",
            "[softly]",
            "Speak warmly and softly, close to the listener.",
            "A warm, low voice that leans in close."
        ),
    ),
    (
        "sadness",
        voice_tag!(
            "[sad]",
            "[sorrowful]",
            "Speak slowly and softly, letting the voice sag at the end of phrases.",
            "A soft, heavy voice that sags at the end of each phrase."
        ),
    ),
    (
        "grief",
        voice_tag!(
            "[crying]",
            "[crying]",
            "Speak through tears, with the voice breaking on key words.",
            "A voice thick with tears that breaks on the words that matter."
        ),
    ),
    (
        "fear",
        voice_tag!(
            "[scared]",
            "[nervously]",
            "Speak quickly and quietly with an unsteady pitch.",
            "A quick, hushed voice whose pitch keeps slipping."
        ),
    ),
    (
        "terror",
        voice_tag!(
            "[terrified]",
            "[panicked]",
            "Speak in a strangled whisper, barely holding together.",
            "A strangled whisper on the edge of coming apart."
        ),
    ),
    (
        "anger",
        voice_tag!(
            "[angry]",
            "[angrily]",
            "Speak with clipped, hard consonants and controlled volume.",
            "A clipped, hard voice with the volume held on a short leash."
        ),
    ),
    (
        "rage",
        voice_tag!(
            "[shouting]",
            "[shouting]",
            "Speak loudly and forcefully, spitting the words out.",
            "A loud, forceful voice that spits out every word."
        ),
    ),
    (
        "anxiety",
        voice_tag!(
            "[nervous]",
            "[hesitantly]",
            "Speak in rushed fragments with small hesitations.",
            "A rushed voice full of small stalls and restarts."
        ),
    ),
    (
        "surprise",
        voice_tag!(
            "[surprised]",
            "[gasps]",
            "Speak with a sudden lift in pitch as if caught off guard.",
            "A voice that jumps upward, caught off guard."
        ),
    ),
    (
        "contempt",
        voice_tag!(
            "[dismissive]",
            "[sarcastically]",
            "Speak flatly with a cool, dismissive edge.",
            "A flat, cool voice with a dismissive edge."
        ),
    ),
    (
        "calm",
        voice_tag!(
            "[calm]",
            "[calmly]",
            "Speak evenly and unhurriedly, with relaxed breath.",
            "An even, unhurried voice resting on easy breath."
        ),
    ),
    (
        "determination",
        voice_tag!(
            "[determined]",
            "[firmly]",
            "Speak firmly with steady pace and grounded tone.",
            "A firm, grounded voice that does not waver."
        ),
    ),
    (
        "shame",
        voice_tag!(
            "[ashamed]",
            "[quietly]",
            "Speak quietly, trailing off, avoiding emphasis.",
            "A small, quiet voice that trails away."
        ),
    ),
    (
        "heartbreak",
        voice_tag!(
            "[heartbroken]",
            "[voice breaking]",
            "Speak softly with the voice cracking under the weight.",
            "A soft voice cracking under what it carries."
        ),
    ),
];

pub const VOCAL_QUALITIES: &[(&str, &str)] = &[
    ("joy", "bright resonance, lifted pitch, quick rhythm"),
    ("love", "warm chest resonance, breathy edges"),
    ("sadness", "low energy, falling intonation, long vowels"),
    ("grief", "thick, wet tone, unstable pitch"),
    ("fear", "thin head voice, tremor, shallow support"),
    ("terror", "constricted throat, whispered, irregular"),
    ("anger", "tight jaw, pressed phonation, percussive consonants"),
    ("rage", "full volume, rasp, hard attacks"),
    ("anxiety", "breathy, uneven tempo, rising endings"),
    ("surprise", "sudden pitch jumps, open vowels"),
    ("contempt", "flat pitch, nasal edge, slow tempo"),
    ("calm", "relaxed, centered pitch, steady tempo"),
    ("determination", "grounded chest voice, even tempo"),
    ("shame", "soft, low volume, swallowed endings"),
    ("heartbreak", "cracking register breaks, breathy"),
];

pub const NON_VERBAL_TAGS: &[(&str, &str)] = &[
    ("sigh", "[sighs]"),
    ("laugh", "[laughs]"),
    ("chuckle", "[chuckles]"),
    ("gasp", "[gasps]"),
    ("sob", "[sobs]"),
    ("sniff", "[sniffs]"),
    ("scoff", "[scoffs]"),
    ("groan", "[groans]"),
    ("whisper", "[whispers]"),
    ("clear-throat", "[clears throat]"),
    ("exhale", "[exhales sharply]"),
];

pub const PAUSE_NOTATIONS: &[(&str, PauseNotation)] = &[
    (
        "breath",
        PauseNotation {
            notation: "[breath]",
            seconds: 0.3,
        },
    ),
    (
        "short",
        PauseNotation {
            notation: "[short pause]",
            seconds: 0.5,
        },
    ),
    (
        "beat",
        PauseNotation {
            notation: "[beat]",
            seconds: 1.0,
        },
    ),
    (
        "medium",
        PauseNotation {
            notation: "[pause]",
            seconds: 1.5,
        },
    ),
    (
        "long",
        PauseNotation {
            notation: "[long pause]",
            seconds: 3.0,
        },
    ),
];

pub const ARC_PATTERNS: &[(&str, [&str; 4])] = &[
    ("building", ["quiet", "rising", "tense", "peak"]),
    ("crashing", ["peak", "cracking", "collapsing", "hollow"]),
    ("recovering", ["hollow", "steadying", "warming", "resolved"]),
    ("masking", ["composed", "strained", "slipping", "recomposed"]),
    ("revealing", ["guarded", "hesitant", "opening", "exposed"]),
    ("confronting", ["controlled", "pressing", "heated", "explosive"]),
];

/// Delivery direction for each arc note.
pub const ARC_NOTE_DELIVERY: &[(&str, &str)] = &[
    ("quiet", "hold back, barely above conversational volume"),
    ("rising", "let the energy climb, tempo picking up"),
    ("tense", "tighten the voice, clipped and pressured"),
    ("peak", "full intensity, nothing held back"),
    ("cracking", "the voice starts to fracture under strain"),
    ("collapsing", "energy drains out mid-line"),
    ("hollow", "emptied out, flat and distant"),
    ("steadying", "finding footing, breath evening out"),
    ("warming", "warmth creeping back into the tone"),
    ("resolved", "settled and certain, at peace"),
    ("composed", "polished and controlled on the surface"),
    ("strained", "the control costs visible effort"),
    ("slipping", "the mask slips, real feeling leaks through"),
    ("recomposed", "snapping back to control, a little too fast"),
    ("guarded", "careful, giving nothing away"),
    ("hesitant", "stalling, testing each word"),
    ("opening", "letting the truth out in pieces"),
    ("exposed", "raw and unprotected"),
    ("controlled", "measured and deliberate"),
    ("pressing", "pushing harder with each line"),
    ("heated", "volume and speed rising together"),
    ("explosive", "the pressure finally breaks open"),
];

pub const AMBIENT_CUES: &[(&str, &str)] = &[
    ("cafe", "low murmur of conversation, clinking cups, espresso machine hiss"),
    ("street", "distant traffic, footsteps, an occasional horn"),
    ("city-night", "far-off sirens, a humming streetlight, sparse traffic"),
    ("forest", "wind through leaves, birdsong, snapping twigs"),
    ("rain", "steady rainfall on glass, gutter runoff"),
    ("office", "air conditioning hum, keyboard clatter, a distant phone"),
    ("hospital", "monitor beeps, soft footsteps, muffled intercom"),
    ("bar", "crowd chatter, glasses clinking, muffled music"),
    ("beach", "rolling surf, gulls, wind gusts"),
    ("church", "cavernous reverb, creaking pews, distant echoes"),
    ("car", "engine drone, tire noise, turn signal ticking"),
    ("home", "quiet room tone, a ticking clock, a refrigerator hum"),
    ("kitchen", "a simmering pot, running tap, cutlery"),
    ("tense", "low room tone with a faint electrical hum"),
    ("peaceful", "soft breeze and distant birdsong"),
    ("eerie", "silence broken by a creak and a slow drip"),
];
