//! Dividend payment history.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single dividend payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendPayment {
    /// Ex-dividend (or payment) date
    pub date: NaiveDate,
    /// Dividend per share; a payment without an amount is rejected
    pub dividend: f64,
}

impl DividendPayment {
    /// Create a new dividend payment.
    pub const fn new(date: NaiveDate, dividend: f64) -> Self {
        Self { date, dividend }
    }
}

/// Sum dividend payments per calendar year.
///
/// The map iterates oldest year first regardless of the order of `payments`.
pub fn annual_dividend_totals(payments: &[DividendPayment]) -> BTreeMap<i32, f64> {
    let mut totals = BTreeMap::new();
    for payment in payments {
        *totals.entry(payment.date.year()).or_insert(0.0) += payment.dividend;
    }
    totals
}
