use serde::Serialize;

/// A labeled summary metric with a trend delta. The delta percentages in this
/// demo are canned constants, not computed from a historical baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: String,
    pub value: f64,
    pub delta_pct: f64,
}
