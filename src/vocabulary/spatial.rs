//! Spatial vocabulary: proxemic zones and power positioning.

use serde::{Deserialize, Serialize};

/// One of the four interpersonal-distance bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxemicZone {
    Intimate,
    Personal,
    Social,
    Public,
}

impl ProxemicZone {
    pub const ALL: [ProxemicZone; 4] = [
        ProxemicZone::Intimate,
        ProxemicZone::Personal,
        ProxemicZone::Social,
        ProxemicZone::Public,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProxemicZone::Intimate => "intimate",
            ProxemicZone::Personal => "personal",
            ProxemicZone::Social => "social",
            ProxemicZone::Public => "public",
        }
    }

    pub fn distance(&self) -> &'static str {
        match self {
            ProxemicZone::Intimate => "0-45cm",
            ProxemicZone::Personal => "45cm-1.2m",
            ProxemicZone::Social => "1.2-3.6m",
            ProxemicZone::Public => "over 3.6m",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProxemicZone::Intimate => "bodies nearly touching, breath shared",
            ProxemicZone::Personal => "arm's length apart, private conversation distance",
            ProxemicZone::Social => "a table's width apart, formal conversational distance",
            ProxemicZone::Public => {
                "separated by open space, addressing rather than conversing"
            }
        }
    }
}

/// Zone used when a relationship is absent or unknown.
pub const DEFAULT_ZONE: ProxemicZone = ProxemicZone::Social;

/// Power dynamic used when none is given.
pub const DEFAULT_POWER_DYNAMIC: &str = "equals";

pub const RELATIONSHIP_ZONES: &[(&str, ProxemicZone)] = &[
    ("lovers", ProxemicZone::Intimate),
    ("spouses", ProxemicZone::Intimate),
    ("partners", ProxemicZone::Intimate),
    ("romantic", ProxemicZone::Intimate),
    ("parent-child", ProxemicZone::Intimate),
    ("family", ProxemicZone::Personal),
    ("siblings", ProxemicZone::Personal),
    ("friends", ProxemicZone::Personal),
    ("best-friends", ProxemicZone::Personal),
    ("enemies", ProxemicZone::Personal),
    ("rivals", ProxemicZone::Personal),
    ("colleagues", ProxemicZone::Social),
    ("acquaintances", ProxemicZone::Social),
    ("professional", ProxemicZone::Social),
    ("strangers", ProxemicZone::Social),
    ("estranged", ProxemicZone::Public),
    ("leader-followers", ProxemicZone::Public),
    ("performer-audience", ProxemicZone::Public),
];

pub const POWER_POSITIONS: &[(&str, &str)] = &[
    (
        "equals",
        "both at the same eye level with mirrored postures, sharing the center of frame",
    ),
    (
        "dominant-submissive",
        "the dominant figure higher in frame and closer to camera, the other lower with an averted gaze",
    ),
    (
        "protector",
        "one figure angled in front of the other, shoulders squared toward the threat",
    ),
    (
        "challenger",
        "the challenger leans across the midline while the other holds their ground",
    ),
    (
        "shifting",
        "positions trade height mid-moment, the lower figure rising",
    ),
    (
        "authority",
        "the authority figure seated and centered, the other standing at the edge of frame",
    ),
    (
        "isolated",
        "one figure separated by a visible barrier or gap while the others cluster together",
    ),
];
