use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, TrackerError};

/// Number of servers in a rotation.
pub const SERVE_ORDER_LEN: usize = 6;

/// Shirt number of a player. Always positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(number: u32) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The order in which a team's six players serve.
///
/// A `ServeOrder` can only be built from exactly six distinct, positive player
/// numbers, so holding one means the current server can always be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
#[schema(value_type = Vec<u32>)]
pub struct ServeOrder([PlayerId; SERVE_ORDER_LEN]);

impl ServeOrder {
    /// Player serving at `rotation_index` (taken modulo the rotation length).
    pub fn server_at(&self, rotation_index: u8) -> PlayerId {
        self.0[rotation_index as usize % SERVE_ORDER_LEN]
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.0
    }
}

impl TryFrom<Vec<u32>> for ServeOrder {
    type Error = TrackerError;

    fn try_from(numbers: Vec<u32>) -> Result<Self> {
        Self::try_from(numbers.as_slice())
    }
}

impl TryFrom<&[u32]> for ServeOrder {
    type Error = TrackerError;

    fn try_from(numbers: &[u32]) -> Result<Self> {
        if numbers.len() != SERVE_ORDER_LEN {
            return Err(TrackerError::InvalidServeOrder(format!(
                "expected {} players, got {}",
                SERVE_ORDER_LEN,
                numbers.len()
            )));
        }

        let mut seen = HashSet::with_capacity(SERVE_ORDER_LEN);
        let mut players = [PlayerId(1); SERVE_ORDER_LEN];
        for (slot, &number) in players.iter_mut().zip(numbers) {
            let player = PlayerId::new(number).ok_or_else(|| {
                TrackerError::InvalidServeOrder("player numbers must be positive".to_string())
            })?;
            if !seen.insert(player) {
                return Err(TrackerError::InvalidServeOrder(format!(
                    "player {} appears more than once",
                    player
                )));
            }
            *slot = player;
        }

        Ok(Self(players))
    }
}

impl From<ServeOrder> for Vec<u32> {
    fn from(order: ServeOrder) -> Self {
        order.0.iter().map(|p| p.get()).collect()
    }
}

/// Parses the comma separated form typed into the match sheet, e.g. `"3,7,12,1,5,9"`.
impl FromStr for ServeOrder {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let numbers = s
            .split(',')
            .map(|part| {
                part.trim().parse::<u32>().map_err(|_| {
                    TrackerError::InvalidServeOrder(format!(
                        "'{}' is not a player number",
                        part.trim()
                    ))
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        Self::try_from(numbers)
    }
}
