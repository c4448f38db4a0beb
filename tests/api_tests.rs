use dashdemo::{fetch_customer_roster, fetch_dashboard_snapshot, FetchOptions};

fn no_delay(seed: i64) -> FetchOptions {
    FetchOptions {
        seed,
        simulate_delay: false,
        ..FetchOptions::default()
    }
}

#[tokio::test]
async fn dashboard_fetch_is_deterministic_per_seed() {
    let first = fetch_dashboard_snapshot(&no_delay(42)).await.unwrap();
    let second = fetch_dashboard_snapshot(&no_delay(42)).await.unwrap();

    // activity timestamps derive from the wall clock, so compare the
    // seed-driven parts field by field
    assert_eq!(first.invoices, second.invoices);
    assert_eq!(first.revenue, second.revenue);
    assert_eq!(first.kpis, second.kpis);
    assert_eq!(first.arr, second.arr);
}

#[tokio::test]
async fn dashboard_fetch_uses_configured_counts() {
    let opts = FetchOptions {
        invoice_count: 12,
        revenue_days: 7,
        simulate_delay: false,
        ..FetchOptions::default()
    };
    let snapshot = fetch_dashboard_snapshot(&opts).await.unwrap();
    assert_eq!(snapshot.invoices.len(), 12);
    assert_eq!(snapshot.revenue.len(), 7);
    assert_eq!(snapshot.kpis[0].label, "Revenue (7d)");
}

#[tokio::test]
async fn different_seeds_produce_different_data() {
    let a = fetch_dashboard_snapshot(&no_delay(1)).await.unwrap();
    let b = fetch_dashboard_snapshot(&no_delay(2)).await.unwrap();
    assert_ne!(a.invoices, b.invoices);
}

#[tokio::test]
async fn roster_fetch_is_deterministic_per_seed() {
    let first = fetch_customer_roster(&no_delay(42)).await.unwrap();
    let second = fetch_customer_roster(&no_delay(42)).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 15);
}

#[tokio::test(start_paused = true)]
async fn delay_does_not_change_the_generated_data() {
    // the delay draw happens whether or not the sleep runs, so the data
    // stream is identical either way (paused clock auto-advances the sleep)
    let delayed = FetchOptions {
        seed: 42,
        simulate_delay: true,
        ..FetchOptions::default()
    };

    let without = fetch_customer_roster(&no_delay(42)).await.unwrap();
    let with = fetch_customer_roster(&delayed).await.unwrap();

    assert_eq!(without, with);
}

#[tokio::test]
async fn default_options_match_the_demo_defaults() {
    let opts = FetchOptions::default();
    assert_eq!(opts.seed, 42);
    assert_eq!(opts.invoice_count, 68);
    assert_eq!(opts.revenue_days, 14);
    assert!(opts.simulate_delay);
}
