//! Mood labels and their presentation attributes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of mood labels a journal entry can carry.
///
/// Declaration order is the canonical enumeration order used for
/// tie-breaking and for chart output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Exhausted,
    #[default]
    Neutral,
}

impl Mood {
    /// All moods in enumeration order
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
        Mood::Exhausted,
        Mood::Neutral,
    ];

    /// Lowercase label, as stored and accepted on the command line
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Exhausted => "exhausted",
            Mood::Neutral => "neutral",
        }
    }

    /// Capitalized name used for chart labels
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Anxious => "Anxious",
            Mood::Exhausted => "Exhausted",
            Mood::Neutral => "Neutral",
        }
    }

    /// Display color for chart slices
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Happy => "#FFD25B",
            Mood::Sad => "#52CBEC",
            Mood::Angry => "#CA4B45",
            Mood::Anxious => "#9C72D9",
            Mood::Exhausted => "#92A75C",
            Mood::Neutral => "#DCE8F4",
        }
    }

    /// Position in the enumeration order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Normalize a raw mood value coming from storage.
    ///
    /// Missing, empty or unrecognized values become `Neutral`.
    pub fn normalize(raw: Option<&str>) -> Mood {
        raw.and_then(|value| Mood::from_str(value.trim()).ok())
            .unwrap_or(Mood::Neutral)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "anxious" => Ok(Mood::Anxious),
            "exhausted" => Ok(Mood::Exhausted),
            "neutral" => Ok(Mood::Neutral),
            _ => Err(format!(
                "Invalid mood: '{}'",
                s
            )),
        }
    }
}
