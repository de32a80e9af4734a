//! Compound annual growth rate.

/// CAGR in percent: `((end / start)^(1 / years) - 1) * 100`.
///
/// `None` when either value is not positive or `years` is zero.
pub fn calculate_cagr(start: f64, end: f64, years: u32) -> Option<f64> {
    if start <= 0.0 || end <= 0.0 || years == 0 {
        return None;
    }
    Some(((end / start).powf(1.0 / f64::from(years)) - 1.0) * 100.0)
}
