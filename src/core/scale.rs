use crate::domain::model::ValueDomain;

/// Number of discrete steps on a scale; positions run 0..=SCALE_STEPS.
pub const SCALE_STEPS: u32 = 1000;

/// Convert a continuous value into a discrete scale position. The fraction
/// is truncated, not rounded, matching the fixed-point display convention.
/// Callers clamp the value into the domain first; this function does not.
pub fn to_position(domain: &ValueDomain, value: f64) -> u32 {
    let factor = SCALE_STEPS as f64 / domain.span();
    ((value - domain.min_bound) * factor) as u32
}

/// Convert a discrete scale position back into a continuous value, rounded
/// to the two decimal digits shown in the bound text fields.
pub fn to_value(domain: &ValueDomain, position: u32) -> f64 {
    let factor = domain.span() / SCALE_STEPS as f64;
    let actual = domain.min_bound + position as f64 * factor;
    (actual * 100.0).round() / 100.0
}
