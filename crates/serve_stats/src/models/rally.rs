use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serve_order::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    #[serde(rename = "SELF")]
    Own,
    Opponent,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "SELF",
            Self::Opponent => "OPPONENT",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a serve, as seen from the serving team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCategory {
    Ace,
    APass,
    BPass,
    CPass,
    ServeMiss,
}

impl ResultCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ace => "ACE",
            Self::APass => "A_PASS",
            Self::BPass => "B_PASS",
            Self::CPass => "C_PASS",
            Self::ServeMiss => "SERVE_MISS",
        }
    }

    /// The serve was received (any pass quality).
    pub fn is_receive(&self) -> bool {
        matches!(self, Self::APass | Self::BPass | Self::CPass)
    }

    /// A pass good enough to run the offence from.
    pub fn is_successful_receive(&self) -> bool {
        matches!(self, Self::APass | Self::BPass)
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged rally. Never modified after it is appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RallyRecord {
    pub date: NaiveDate,
    pub match_name: String,
    pub set_number: u32,
    pub rally_number: u32,
    pub serving_side: Side,
    pub server: PlayerId,
    /// Rotation index (0-5) of the serving side when the serve was struck.
    pub rotation_index: u8,
    pub result: ResultCategory,
    pub ace: u8,
    pub effect: u8,
    pub miss: u8,
    /// Score after the point was awarded.
    pub team_score: u32,
    pub opponent_score: u32,
}

impl RallyRecord {
    /// Derives the ace/effect/miss flags for `result`.
    pub fn flags_for(result: ResultCategory) -> (u8, u8, u8) {
        (
            u8::from(result == ResultCategory::Ace),
            u8::from(result == ResultCategory::CPass),
            u8::from(result == ResultCategory::ServeMiss),
        )
    }
}
