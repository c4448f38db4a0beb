use chrono::{Duration, Local, Utc};

use crate::datagen::SeededRng;
use crate::model::{
    ActivityEvent, ActivityKind, Customer, Health, Invoice, InvoiceStatus, Plan, RevenuePoint,
};

/// Fixed demo customer roster: (name, billing email).
pub const ROSTER: [(&str, &str); 15] = [
    ("NovaWorks", "billing@novaworks.io"),
    ("Cobalt Labs", "finance@cobaltlabs.com"),
    ("Aurum Studio", "accounts@aurum.studio"),
    ("Vertex Retail", "payments@vertexretail.co"),
    ("Nimbus Health", "pay@nimbushealth.org"),
    ("Kinetic CRM", "billing@kineticcrm.io"),
    ("Atlas Logistics", "finance@atlaslogistics.com"),
    ("Cedar & Co", "accounts@cedarco.co.uk"),
    ("Solace Media", "billing@solacemedia.tv"),
    ("Pioneer AI", "finance@pioneerai.dev"),
    ("Sable Finance", "accounts@sablefinance.com"),
    ("Orbit Energy", "billing@orbitenergy.io"),
    ("Helio Ventures", "finance@helioventures.vc"),
    ("Mintside", "payments@mintside.app"),
    ("Arclight", "billing@arclight.design"),
];

/// Round to 2 decimal places (currency).
fn money(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

/// Synthesize `count` invoices. Per invoice the draw order is: customer,
/// plan, status, amount jitter, days-ago. The result is sorted descending by
/// issued date (stable sort, so draw order breaks ties).
pub fn gen_invoices(rng: &mut SeededRng, count: usize) -> Vec<Invoice> {
    let today = Local::now().date_naive();
    let mut list = Vec::with_capacity(count);

    for i in 0..count {
        let (customer, email) = ROSTER[rng.index(ROSTER.len())];
        let plan = Plan::ALL[rng.index(Plan::ALL.len())];
        let status = InvoiceStatus::ALL[rng.index(InvoiceStatus::ALL.len())];
        let amount = money(plan.base_amount() + rng.next_f64() * plan.amount_jitter());
        let days_ago = rng.index(60) as i64;

        list.push(Invoice {
            id: format!("INV-{}", 1200 + i),
            customer: customer.to_string(),
            email: email.to_string(),
            plan,
            amount,
            status,
            issued: today - Duration::days(days_ago),
        });
    }

    list.sort_by(|a, b| b.issued.cmp(&a.issued));
    list
}

/// Synthesize a daily revenue series covering the last `days` days, ordered
/// oldest to newest. Revenue floors at 2800 per day; MRR starts at 18450,
/// drifts each step, and floors at 15000.
pub fn gen_revenue(rng: &mut SeededRng, days: usize) -> Vec<RevenuePoint> {
    let today = Local::now().date_naive();
    let mut list = Vec::with_capacity(days);
    let mut mrr = 18_450.0_f64;

    for i in (0..days).rev() {
        let date = today - Duration::days(i as i64);
        let drift = (rng.next_f64() - 0.45) * 900.0;
        // The spike draw only happens when the threshold draw exceeds 0.92,
        // so the stream advances by 2 or 3 values per day.
        let spike = if rng.next_f64() > 0.92 {
            2600.0 * rng.next_f64()
        } else {
            0.0
        };
        let revenue = (5200.0 + drift + spike).max(2800.0);
        mrr = (mrr + (rng.next_f64() - 0.46) * 280.0).max(15_000.0);

        list.push(RevenuePoint {
            day: date.format("%b %d").to_string(),
            revenue: revenue.round(),
            mrr: mrr.round(),
        });
    }

    list
}

/// The canned activity feed: 6 narrative events with descending timestamps
/// (one per hour, most recent first). Draws nothing from the random stream.
pub fn gen_activity() -> Vec<ActivityEvent> {
    const FEED: [(&str, &str, ActivityKind); 6] = [
        (
            "Pro plan upgrade",
            "Aurum Studio upgraded to Pro.",
            ActivityKind::Good,
        ),
        (
            "Payment retried",
            "Atlas Logistics payment succeeded on retry.",
            ActivityKind::Good,
        ),
        (
            "Invoice overdue",
            "Vertex Retail invoice is now overdue.",
            ActivityKind::Warn,
        ),
        (
            "Churn risk",
            "Nimbus Health decreased usage 35% WoW.",
            ActivityKind::Warn,
        ),
        (
            "Chargeback received",
            "Sable Finance opened a chargeback.",
            ActivityKind::Bad,
        ),
        (
            "SSO enabled",
            "Helio Ventures enabled SSO for all users.",
            ActivityKind::Good,
        ),
    ];

    let now = Utc::now();
    FEED.iter()
        .enumerate()
        .map(|(idx, (title, detail, kind))| ActivityEvent {
            id: format!("ACT-{idx}"),
            ts: now - Duration::hours(idx as i64 + 1),
            title: (*title).to_string(),
            detail: (*detail).to_string(),
            kind: *kind,
        })
        .collect()
}

/// Map the fixed roster into customer records. Per customer the draw order
/// is: seats, plan, health threshold (plus a second health draw when the
/// first is <= 0.75), so health sampling order matters for determinism.
pub fn gen_customers(rng: &mut SeededRng) -> Vec<Customer> {
    ROSTER
        .iter()
        .enumerate()
        .map(|(idx, (name, email))| {
            let seats = 3 + rng.index(40) as u32;
            let plan = Plan::ALL[rng.index(Plan::ALL.len())];
            let health = if rng.next_f64() > 0.75 {
                Health::AtRisk
            } else if rng.next_f64() > 0.35 {
                Health::Good
            } else {
                Health::Excellent
            };

            Customer {
                id: format!("CUST-{}", 100 + idx),
                name: (*name).to_string(),
                email: (*email).to_string(),
                seats,
                plan,
                health,
            }
        })
        .collect()
}
