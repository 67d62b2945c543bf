use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::PlayerId;

/// One row of the serve effectiveness table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServeEffectiveness {
    pub server: PlayerId,
    pub set_number: u32,
    pub attempts: u32,
    pub ace_count: u32,
    pub effect_count: u32,
    pub miss_count: u32,
    pub effectiveness_percent: Decimal,
}

/// One row of the receive success table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReceiveSuccess {
    pub set_number: u32,
    pub attempts: u32,
    pub success_count: u32,
    pub success_rate: Decimal,
}
