use serde::Serialize;

/// One day in the revenue time series. Values are rounded to whole currency
/// units; `revenue` never drops below 2800 and `mrr` never below 15000.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenuePoint {
    pub day: String,
    pub revenue: f64,
    pub mrr: f64,
}
