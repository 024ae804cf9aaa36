//! Integer percent reduction.
//!
//! Reduces a balance by a percentage plus one unit, rounding the cut down,
//! without touching floating point. Used for fee-style haircuts where the
//! result must stay an exact integer amount.

/// Reduces `value` by `percent`% plus one, saturating at zero.
///
/// `reduce_by_percent(1000, 5) == 949`. Exact for every `u128` input:
/// the product `value * percent` is never formed directly.
pub fn reduce_by_percent(value: u128, percent: u8) -> u128 {
    let p = u128::from(percent);
    let whole = (value / 100).saturating_mul(p);
    let remainder = (value % 100) * p / 100;
    let reduction = whole.saturating_add(remainder).saturating_add(1);
    value.saturating_sub(reduction)
}

/// The 5% haircut.
pub fn reduce_by_5_percent(value: u128) -> u128 {
    reduce_by_percent(value, 5)
}
