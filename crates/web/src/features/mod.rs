pub mod export;
pub mod match_state;
pub mod stats;
