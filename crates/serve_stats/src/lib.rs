pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{Result, TrackerError};
pub use services::recorder::MatchSession;
