use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{
    MatchInfo, Phase, PlayerId, RallyRecord, ResultCategory, Rotations, ServeOrder, Side,
};
use crate::services::recorder::MatchSession;

/// Highest shirt number accepted on the match sheet.
pub const MAX_PLAYER_NUMBER: u32 = 30;

/// Request payload for editing the match sheet header
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchInfoRequest {
    /// Defaults to today
    pub date: Option<NaiveDate>,

    #[validate(length(max = 255, message = "Match name must be at most 255 characters"))]
    #[serde(default)]
    pub name: String,

    #[validate(range(min = 1, max = 99, message = "Set point must be between 1 and 99"))]
    pub set_point: u32,
}

impl UpdateMatchInfoRequest {
    pub fn into_match_info(self) -> MatchInfo {
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        MatchInfo::new(date, self.name, self.set_point)
    }
}

/// A serve order, either as a list or as the comma separated text typed on
/// the match sheet (`"3,7,12,1,5,9"`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ServeOrderInput {
    Numbers(Vec<u32>),
    Text(String),
}

impl ServeOrderInput {
    /// Builds the serve order, applying the same rules for both input forms.
    pub fn to_serve_order(&self) -> crate::error::Result<ServeOrder> {
        match self {
            Self::Numbers(numbers) => ServeOrder::try_from(numbers.as_slice()),
            Self::Text(text) => text.parse(),
        }
    }
}

fn validate_serve_order(input: &ServeOrderInput) -> Result<(), ValidationError> {
    let order = input
        .to_serve_order()
        .map_err(|e| serve_order_error(e.to_string()))?;

    if order
        .players()
        .iter()
        .any(|player| player.get() > MAX_PLAYER_NUMBER)
    {
        return Err(serve_order_error(format!(
            "Player numbers must be between 1 and {}",
            MAX_PLAYER_NUMBER
        )));
    }

    Ok(())
}

fn serve_order_error(message: String) -> ValidationError {
    let mut error = ValidationError::new("serve_order");
    error.message = Some(Cow::from(message));
    error
}

/// Request payload for confirming both serve orders
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ConfirmServeOrderRequest {
    #[validate(custom(function = "validate_serve_order"))]
    pub my_serve_order: ServeOrderInput,

    #[validate(custom(function = "validate_serve_order"))]
    pub opponent_serve_order: ServeOrderInput,
}

/// Request payload for recording one rally
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordRallyRequest {
    pub result: ResultCategory,
    pub point_winner: Side,
}

/// Snapshot of the match as shown on the scoring screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchStateResponse {
    pub phase: Phase,
    pub info: MatchInfo,
    pub set_number: u32,
    pub rally_number: u32,
    pub team_score: u32,
    pub opponent_score: u32,
    pub serving_side: Side,
    pub current_server: Option<PlayerId>,
    pub rotations: Rotations,
    pub my_serve_order: Option<ServeOrder>,
    pub opponent_serve_order: Option<ServeOrder>,
    pub rally_count: usize,
}

impl From<&MatchSession> for MatchStateResponse {
    fn from(session: &MatchSession) -> Self {
        let state = session.state();
        let board = state.scoreboard;

        Self {
            phase: session.phase(),
            info: session.info().clone(),
            set_number: board.set_number,
            rally_number: board.rally_number,
            team_score: board.team_score,
            opponent_score: board.opponent_score,
            serving_side: board.serving_side,
            current_server: session.current_server(),
            rotations: board.rotations,
            my_serve_order: state.my_serve_order.clone(),
            opponent_serve_order: state.opponent_serve_order.clone(),
            rally_count: session.rally_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordRallyResponse {
    pub record: RallyRecord,
    pub state: MatchStateResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UndoRallyResponse {
    /// False when the log was already empty
    pub undone: bool,
    pub removed: Option<RallyRecord>,
    pub state: MatchStateResponse,
}
