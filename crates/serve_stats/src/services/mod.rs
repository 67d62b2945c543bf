use rust_decimal::Decimal;

pub mod effectiveness;
pub mod export;
pub mod receive;
pub mod recorder;

/// Rounds half-to-even to one decimal place and always keeps that place, so
/// `50` is reported as `50.0`.
pub(crate) fn round_percent(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(1);
    rounded.rescale(1);
    rounded
}
