use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_SET_POINT: u32 = 25;
/// Set points accepted on the match sheet.
pub const SET_POINT_RANGE: RangeInclusive<u32> = 1..=99;

/// Match sheet header: stamped onto every rally recorded while it is current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchInfo {
    pub date: NaiveDate,
    pub name: String,
    /// Points needed to take a set (25 for regular sets, 15 for a deciding set).
    pub set_point: u32,
}

impl MatchInfo {
    pub fn new(date: NaiveDate, name: impl Into<String>, set_point: u32) -> Self {
        Self {
            date,
            name: name.into(),
            set_point,
        }
    }

    /// Today's date, no name, and the given set point.
    pub fn today(set_point: u32) -> Self {
        Self::new(chrono::Local::now().date_naive(), String::new(), set_point)
    }
}

impl Default for MatchInfo {
    fn default() -> Self {
        Self::today(DEFAULT_SET_POINT)
    }
}
