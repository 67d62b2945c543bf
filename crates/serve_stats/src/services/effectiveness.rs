use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::round_percent;
use crate::dto::stats::ServeEffectiveness;
use crate::models::{PlayerId, RallyRecord};

pub const ACE_WEIGHT: i64 = 100;
pub const EFFECT_WEIGHT: i64 = 25;
/// Penalty per missed serve.
pub const MISS_WEIGHT: i64 = 25;

#[derive(Default)]
struct Tally {
    attempts: u32,
    aces: u32,
    effects: u32,
    misses: u32,
}

/// Serve effectiveness per server and set:
///
/// `(aces × 100 + effects × 25 − misses × 25) / attempts`, rounded to one decimal.
///
/// Rows are ordered by server, then set. Pure function of `records`.
pub fn compute_serve_effectiveness(records: &[RallyRecord]) -> Vec<ServeEffectiveness> {
    let mut groups: BTreeMap<(PlayerId, u32), Tally> = BTreeMap::new();

    for record in records {
        let tally = groups
            .entry((record.server, record.set_number))
            .or_default();
        tally.attempts += 1;
        tally.aces += u32::from(record.ace);
        tally.effects += u32::from(record.effect);
        tally.misses += u32::from(record.miss);
    }

    groups
        .into_iter()
        .map(|((server, set_number), tally)| ServeEffectiveness {
            server,
            set_number,
            attempts: tally.attempts,
            ace_count: tally.aces,
            effect_count: tally.effects,
            miss_count: tally.misses,
            effectiveness_percent: effectiveness_percent(&tally),
        })
        .collect()
}

fn effectiveness_percent(tally: &Tally) -> Decimal {
    let points = i64::from(tally.aces) * ACE_WEIGHT + i64::from(tally.effects) * EFFECT_WEIGHT
        - i64::from(tally.misses) * MISS_WEIGHT;

    round_percent(Decimal::from(points) / Decimal::from(tally.attempts))
}
