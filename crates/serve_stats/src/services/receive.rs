use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::round_percent;
use crate::dto::stats::ReceiveSuccess;
use crate::models::RallyRecord;

/// Share of received serves passed at A or B quality, per set.
///
/// Only rallies where the serve was received (A, B or C pass) count as
/// attempts; sets without any are left out.
pub fn compute_receive_success_rate(records: &[RallyRecord]) -> Vec<ReceiveSuccess> {
    let mut groups: BTreeMap<u32, (u32, u32)> = BTreeMap::new();

    for record in records.iter().filter(|r| r.result.is_receive()) {
        let (attempts, successes) = groups.entry(record.set_number).or_default();
        *attempts += 1;
        if record.result.is_successful_receive() {
            *successes += 1;
        }
    }

    groups
        .into_iter()
        .map(|(set_number, (attempts, successes))| ReceiveSuccess {
            set_number,
            attempts,
            success_count: successes,
            success_rate: round_percent(
                Decimal::from(successes) * Decimal::ONE_HUNDRED / Decimal::from(attempts),
            ),
        })
        .collect()
}
