use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::rally::Side;
use super::serve_order::{PlayerId, SERVE_ORDER_LEN, ServeOrder};

/// Where each side currently is in its serve order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Rotations {
    #[serde(rename = "self")]
    pub own: u8,
    pub opponent: u8,
}

impl Rotations {
    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Own => self.own,
            Side::Opponent => self.opponent,
        }
    }

    pub fn advance(&mut self, side: Side) {
        let index = match side {
            Side::Own => &mut self.own,
            Side::Opponent => &mut self.opponent,
        };
        *index = (*index + 1) % SERVE_ORDER_LEN as u8;
    }
}

/// Counters that change with every rally.
///
/// Kept separate from the serve orders so the whole board can be saved before
/// a rally and put back on undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub set_number: u32,
    pub rally_number: u32,
    pub team_score: u32,
    pub opponent_score: u32,
    pub serving_side: Side,
    pub rotations: Rotations,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            set_number: 1,
            rally_number: 1,
            team_score: 0,
            opponent_score: 0,
            serving_side: Side::Own,
            rotations: Rotations::default(),
        }
    }
}

impl Scoreboard {
    /// Awards the rally to `winner`, applying the side-out rule: a team that
    /// wins on the other team's serve takes the serve and rotates.
    pub fn award_point(&mut self, winner: Side) {
        match winner {
            Side::Own => self.team_score += 1,
            Side::Opponent => self.opponent_score += 1,
        }

        if winner != self.serving_side {
            self.serving_side = winner;
            self.rotations.advance(winner);
        }
    }

    pub fn set_point_reached(&self, threshold: u32) -> bool {
        self.team_score >= threshold || self.opponent_score >= threshold
    }

    /// Starts the next set. The home side serves first in every set.
    pub fn start_next_set(&mut self) {
        *self = Self {
            set_number: self.set_number + 1,
            ..Self::default()
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    AwaitingServeOrder,
    Ready,
    SetComplete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    #[serde(flatten)]
    pub scoreboard: Scoreboard,
    pub my_serve_order: Option<ServeOrder>,
    pub opponent_serve_order: Option<ServeOrder>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve_order(&self, side: Side) -> Option<&ServeOrder> {
        match side {
            Side::Own => self.my_serve_order.as_ref(),
            Side::Opponent => self.opponent_serve_order.as_ref(),
        }
    }

    /// Player about to serve, if the serving side's order has been confirmed.
    pub fn current_server(&self) -> Option<PlayerId> {
        let side = self.scoreboard.serving_side;
        self.serve_order(side)
            .map(|order| order.server_at(self.scoreboard.rotations.get(side)))
    }

    pub fn phase(&self, set_point: u32) -> Phase {
        if self.my_serve_order.is_none() || self.opponent_serve_order.is_none() {
            Phase::AwaitingServeOrder
        } else if self.scoreboard.set_point_reached(set_point) {
            Phase::SetComplete
        } else {
            Phase::Ready
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut rotations = Rotations::default();
        for _ in 0..5 {
            rotations.advance(Side::Opponent);
        }
        assert_eq!(rotations.get(Side::Opponent), 5);
        rotations.advance(Side::Opponent);
        assert_eq!(rotations.get(Side::Opponent), 0);
        assert_eq!(rotations.get(Side::Own), 0);
    }

    #[test]
    fn test_serving_side_keeps_serve() {
        let mut board = Scoreboard::default();
        board.award_point(Side::Own);

        assert_eq!(board.team_score, 1);
        assert_eq!(board.serving_side, Side::Own);
        assert_eq!(board.rotations, Rotations::default());
    }

    #[test]
    fn test_side_out_rotates_winner() {
        let mut board = Scoreboard::default();
        board.award_point(Side::Opponent);

        assert_eq!(board.opponent_score, 1);
        assert_eq!(board.serving_side, Side::Opponent);
        assert_eq!(board.rotations.opponent, 1);
        assert_eq!(board.rotations.own, 0);

        board.award_point(Side::Own);
        assert_eq!(board.serving_side, Side::Own);
        assert_eq!(board.rotations.own, 1);
    }

    #[test]
    fn test_start_next_set() {
        let mut board = Scoreboard {
            set_number: 2,
            rally_number: 40,
            team_score: 25,
            opponent_score: 13,
            serving_side: Side::Opponent,
            rotations: Rotations {
                own: 3,
                opponent: 4,
            },
        };
        board.start_next_set();

        assert_eq!(
            board,
            Scoreboard {
                set_number: 3,
                ..Scoreboard::default()
            }
        );
    }

    #[test]
    fn test_phase() {
        let mut state = MatchState::new();
        assert_eq!(state.phase(25), Phase::AwaitingServeOrder);
        assert_eq!(state.current_server(), None);

        state.my_serve_order = Some(ServeOrder::try_from(vec![1, 2, 3, 4, 5, 6]).unwrap());
        assert_eq!(state.phase(25), Phase::AwaitingServeOrder);
        assert_eq!(state.current_server().map(PlayerId::get), Some(1));

        state.opponent_serve_order =
            Some(ServeOrder::try_from(vec![7, 8, 9, 10, 11, 12]).unwrap());
        assert_eq!(state.phase(25), Phase::Ready);

        state.scoreboard.opponent_score = 15;
        assert_eq!(state.phase(15), Phase::SetComplete);
        assert_eq!(state.phase(25), Phase::Ready);
    }
}
