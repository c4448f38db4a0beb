//! The two logical operations exposed to the presentation layer. Both build
//! everything fresh per call from a seeded random stream and resolve after a
//! simulated network delay; nothing persists between calls, so abandoning an
//! in-flight fetch has no side effects.

use serde::Serialize;
use std::time::Duration;

use crate::datagen::{gen_activity, gen_customers, gen_invoices, gen_revenue, SeededRng};
use crate::error::Result;
use crate::model::{ActivityEvent, Customer, Invoice, InvoiceStatus, Kpi, RevenuePoint};

pub const DEFAULT_SEED: i64 = 42;
pub const DEFAULT_INVOICE_COUNT: usize = 68;
pub const DEFAULT_REVENUE_DAYS: usize = 14;

// Canned trend deltas. These are demo placeholders, not computed from any
// prior-period baseline.
const REVENUE_DELTA_PCT: f64 = 6.8;
const MRR_DELTA_PCT: f64 = 2.1;
const PAID_DELTA_PCT: f64 = 3.4;
const OVERDUE_DELTA_PCT: f64 = -1.2;

/// Inputs to a simulated fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub seed: i64,
    pub invoice_count: usize,
    pub revenue_days: usize,
    /// When false the artificial latency is skipped; the delay value is still
    /// drawn from the stream so the generated data is identical either way.
    pub simulate_delay: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            invoice_count: DEFAULT_INVOICE_COUNT,
            revenue_days: DEFAULT_REVENUE_DAYS,
            simulate_delay: true,
        }
    }
}

/// Everything the Overview page needs, from one fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub kpis: Vec<Kpi>,
    pub revenue: Vec<RevenuePoint>,
    pub activity: Vec<ActivityEvent>,
    pub invoices: Vec<Invoice>,
    pub arr: f64,
}

/// Assemble a snapshot from an already-positioned random stream. Draw order
/// is fixed: revenue series first, then invoices; KPIs and ARR are aggregates
/// over those and draw nothing themselves.
pub fn build_snapshot(
    rng: &mut SeededRng,
    invoice_count: usize,
    revenue_days: usize,
) -> DashboardSnapshot {
    let revenue = gen_revenue(rng, revenue_days);
    let invoices = gen_invoices(rng, invoice_count);

    let paid = invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .count();
    let overdue = invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Overdue)
        .count();
    let arr: f64 = invoices.iter().map(|i| i.amount).sum();

    let kpis = vec![
        Kpi {
            label: format!("Revenue ({revenue_days}d)"),
            value: revenue.iter().map(|p| p.revenue).sum(),
            delta_pct: REVENUE_DELTA_PCT,
        },
        Kpi {
            label: "MRR".to_string(),
            value: revenue.last().map(|p| p.mrr).unwrap_or(0.0),
            delta_pct: MRR_DELTA_PCT,
        },
        Kpi {
            label: "Paid invoices".to_string(),
            value: paid as f64,
            delta_pct: PAID_DELTA_PCT,
        },
        Kpi {
            label: "Overdue".to_string(),
            value: overdue as f64,
            delta_pct: OVERDUE_DELTA_PCT,
        },
    ];

    DashboardSnapshot {
        kpis,
        revenue,
        activity: gen_activity(),
        invoices,
        arr: arr.round(),
    }
}

/// Fetch the full dashboard snapshot. Resolves after a simulated 450-850ms
/// delay (drawn from the same stream, before generation). Never fails
/// spontaneously.
pub async fn fetch_dashboard_snapshot(opts: &FetchOptions) -> Result<DashboardSnapshot> {
    let mut rng = SeededRng::new(opts.seed);
    let delay_ms = 450.0 + rng.next_f64() * 400.0;
    if opts.simulate_delay {
        tokio::time::sleep(Duration::from_millis(delay_ms as u64)).await;
    }
    Ok(build_snapshot(&mut rng, opts.invoice_count, opts.revenue_days))
}

/// Fetch the customer roster. Resolves after a simulated 380-780ms delay.
pub async fn fetch_customer_roster(opts: &FetchOptions) -> Result<Vec<Customer>> {
    let mut rng = SeededRng::new(opts.seed);
    let delay_ms = 380.0 + rng.next_f64() * 400.0;
    if opts.simulate_delay {
        tokio::time::sleep(Duration::from_millis(delay_ms as u64)).await;
    }
    Ok(gen_customers(&mut rng))
}
