mod restaurant;
mod survey;

pub use restaurant::Restaurant;
pub use survey::SurveyRecord;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A supported emotional state driving food recommendations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Tired,
    Excited,
    Disgusted,
}

impl Mood {
    /// All supported moods, in presentation order
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Tired,
        Mood::Excited,
        Mood::Disgusted,
    ];

    /// The normalized lowercase keyword matched against survey reason tokens
    pub fn keyword(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
            Mood::Excited => "excited",
            Mood::Disgusted => "disgusted",
        }
    }

    /// Display label shown to users alongside the keyword
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "😊 Happy",
            Mood::Sad => "😢 Sad",
            Mood::Angry => "😠 Angry",
            Mood::Tired => "😴 Tired",
            Mood::Excited => "🤩 Excited",
            Mood::Disgusted => "🤢 Disgusted",
        }
    }

    /// Parses a mood keyword, case-insensitively
    pub fn from_keyword(keyword: &str) -> Option<Mood> {
        Mood::ALL
            .iter()
            .find(|mood| mood.keyword() == keyword.trim().to_lowercase())
            .copied()
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
