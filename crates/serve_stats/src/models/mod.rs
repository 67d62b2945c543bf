pub mod match_info;
pub mod match_state;
pub mod rally;
pub mod serve_order;

pub use match_info::{DEFAULT_SET_POINT, MatchInfo, SET_POINT_RANGE};
pub use match_state::{MatchState, Phase, Rotations, Scoreboard};
pub use rally::{RallyRecord, ResultCategory, Side};
pub use serve_order::{PlayerId, SERVE_ORDER_LEN, ServeOrder};
